//! 2D vector math for the sandbox
//!
//! `Vec2` is a plain nalgebra vector, so addition, subtraction, scalar
//! scaling, and `norm()` come straight from nalgebra. [`VectorExt`] layers
//! the checked operations the core contract needs on top of it:
//!
//! - every numeric operand must be finite ([`MathError::InvalidOperand`]),
//! - normalizing or re-norming a zero-length vector is a contract violation
//!   ([`MathError::DegenerateVector`]), never a silent no-op.

use nalgebra::Vector2;

use crate::simulation::error::MathError;

pub type Vec2 = Vector2<f64>;

/// Checked in-place operations on [`Vec2`]
pub trait VectorExt {
    /// Fail with [`MathError::InvalidOperand`] unless both components are finite
    fn check_finite(&self) -> Result<(), MathError>;

    /// Scale to unit length in place
    fn normalize_in_place(&mut self) -> Result<(), MathError>;

    /// Normalize, then scale to `target` magnitude
    fn set_norm(&mut self, target: f64) -> Result<(), MathError>;

    /// Clamp magnitude to `max`; vectors already at or under `max` are untouched
    fn cap_norm(&mut self, max: f64) -> Result<(), MathError>;
}

impl VectorExt for Vec2 {
    fn check_finite(&self) -> Result<(), MathError> {
        if self.x.is_finite() && self.y.is_finite() {
            Ok(())
        } else {
            Err(MathError::InvalidOperand)
        }
    }

    fn normalize_in_place(&mut self) -> Result<(), MathError> {
        self.check_finite()?;
        let norm = self.norm();
        if norm == 0.0 {
            return Err(MathError::DegenerateVector);
        }
        *self /= norm;
        Ok(())
    }

    fn set_norm(&mut self, target: f64) -> Result<(), MathError> {
        if !target.is_finite() {
            return Err(MathError::InvalidOperand);
        }
        self.normalize_in_place()?;
        *self *= target;
        Ok(())
    }

    fn cap_norm(&mut self, max: f64) -> Result<(), MathError> {
        if !max.is_finite() {
            return Err(MathError::InvalidOperand);
        }
        self.check_finite()?;
        if self.norm() > max {
            self.set_norm(max)?;
        }
        Ok(())
    }
}
