//! Error types for the simulation core
//!
//! Both kinds represent contract violations rather than recoverable runtime
//! conditions: a non-finite operand or zero-norm normalization signals an
//! upstream logic bug, and a force applied to a zero-mass body signals an
//! ordering bug in the stepping algorithm. Callers should treat any of these
//! as fatal for the current sandbox instance.

use thiserror::Error;

/// Contract violations in vector math
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("non-finite operand in vector operation")]
    InvalidOperand,

    #[error("cannot derive a direction from a zero-length vector")]
    DegenerateVector,
}

/// Failures surfaced by [`Sandbox::step`](crate::Sandbox::step)
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StepError {
    #[error(transparent)]
    Math(#[from] MathError),

    /// A force reached a body whose mass is zero. The pairwise phase
    /// excludes dead bodies, so this only fires on an ordering bug
    #[error("force applied to a zero-mass body")]
    ZeroMassForce,
}
