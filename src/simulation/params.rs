//! Physical parameters for the sandbox
//!
//! `Parameters` holds the runtime constants:
//! - gravitational constant `g` and optional force cap,
//! - wall restitution (negative: bounce flips and damps the axis velocity),
//! - merge policy and the deterministic seeding seed

use crate::configuration::config::MergePolicy;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub g: f64,                // gravitational constant
    pub restitution: f64,      // velocity factor applied on wall bounce
    pub force_cap: Option<f64>, // per-pair gravity magnitude limit
    pub merge_policy: MergePolicy,
    pub seed: u64,             // seed for reproducible seeding
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            g: 0.005,
            restitution: -0.5,
            force_cap: None,
            merge_policy: MergePolicy::ConserveMomentum,
            seed: 42,
        }
    }
}
