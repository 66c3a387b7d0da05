//! Configuration types for loading sandbox scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! sandbox scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – physical constants and the merge policy
//! - [`BoundsConfig`]     – size of the bounding rectangle
//! - [`SeedingConfig`]    – how the initial body grid is populated
//! - [`SandboxConfig`]    – top-level wrapper used to load a scenario
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   g: 0.005                # gravitational constant
//!   restitution: -0.5       # wall bounce: flip and halve
//!   force_cap: 5.0          # optional pairwise force magnitude limit
//!   merge_policy: conserve-momentum   # or winner-velocity
//!   seed: 42
//!
//! bounds:
//!   width: 22.0
//!   height: 22.0
//!
//! seeding:
//!   extent: 10              # grid spans -extent..=extent on both axes
//!   spacing: 1.0
//!   swirl: 0.4              # optional tangential velocity factor
//!   mass_law:
//!     law: gaussian-product
//!     scale: 10.0
//!
//! pick: [0.0, 0.0]          # optional: where the runner selects a body
//! ```
//!
//! The engine maps this configuration into its runtime representation when
//! building a [`Sandbox`](crate::Sandbox).

use serde::Deserialize;

/// How a merge resolves the survivor's velocity
/// `merge_policy: conserve-momentum` or `merge_policy: winner-velocity`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    #[serde(rename = "conserve-momentum")] // survivor takes the mass-weighted mean velocity
    ConserveMomentum,

    #[serde(rename = "winner-velocity")] // survivor keeps its own velocity
    WinnerVelocity,
}

/// Distribution the per-body masses are drawn from
#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(tag = "law")]
pub enum MassLaw {
    /// Uniform in `[min, max)`
    #[serde(rename = "uniform")]
    Uniform { min: f64, max: f64 },

    /// Product of three Box–Muller samples resampled into (0, 1),
    /// scaled by `scale`. Heavily skewed toward light bodies
    #[serde(rename = "gaussian-product")]
    GaussianProduct { scale: f64 },
}

/// Physical constants and policies for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub g: f64,                 // gravitational constant
    pub restitution: f64,       // wall bounce velocity factor (negative)
    pub force_cap: Option<f64>, // optional pairwise force magnitude limit
    pub merge_policy: MergePolicy,
    pub seed: u64,              // deterministic seed to make runs reproducible
}

/// Size of the bounding rectangle, centered on the origin
#[derive(Deserialize, Debug, Clone, Copy)]
pub struct BoundsConfig {
    pub width: f64,
    pub height: f64,
}

/// Initial body grid
#[derive(Deserialize, Debug, Clone)]
pub struct SeedingConfig {
    pub extent: i32,        // grid spans -extent..=extent on both axes
    pub spacing: f64,       // distance between grid neighbors
    pub swirl: Option<f64>, // tangential velocity factor, `vel = (-y, x) * swirl`
    pub mass_law: MassLaw,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct SandboxConfig {
    pub parameters: ParametersConfig, // physical constants and policies
    pub bounds: BoundsConfig,         // bounding rectangle size
    pub seeding: SeedingConfig,       // initial body grid
    pub pick: Option<[f64; 2]>,       // where the headless runner selects a body
}
