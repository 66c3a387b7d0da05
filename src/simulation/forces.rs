//! Pairwise force law for the sandbox
//!
//! Direct Newtonian gravity between two bodies, with an optional magnitude
//! cap to keep near-contact encounters from launching bodies across the
//! bounds in a single step

use crate::simulation::error::MathError;
use crate::simulation::math::{Vec2, VectorExt};
use crate::simulation::states::Body;

/// Newtonian attraction between body pairs
///
/// `forces_between` returns equal and opposite forces; the zero vector is
/// returned for coincident positions or when either mass is zero, so the
/// caller never divides by a vanishing separation
#[derive(Debug, Clone, Copy)]
pub struct Gravity {
    pub g: f64,           // gravitational constant
    pub cap: Option<f64>, // optional per-pair force magnitude limit
}

impl Gravity {
    /// Forces `(on_a, on_b)` for the pair, each pointing toward the other body
    pub fn forces_between(&self, a: &Body, b: &Body) -> Result<(Vec2, Vec2), MathError> {
        let separation = a.pos - b.pos;
        let squared_norm = separation.norm_squared();
        if squared_norm == 0.0 || a.mass == 0.0 || b.mass == 0.0 {
            return Ok((Vec2::zeros(), Vec2::zeros()));
        }

        let magnitude = self.g * a.mass * b.mass / squared_norm;

        // `separation` points from b toward a, so the capped, re-normed
        // vector is the pull on b; a feels the opposite
        let mut on_b = separation;
        on_b.set_norm(magnitude)?;
        if let Some(cap) = self.cap {
            on_b.cap_norm(cap)?;
        }

        Ok((-on_b, on_b))
    }
}
