pub mod configuration;
pub mod simulation;

pub use simulation::error::{MathError, StepError};
pub use simulation::forces::Gravity;
pub use simulation::math::{Vec2, VectorExt};
pub use simulation::params::Parameters;
pub use simulation::sandbox::{Sandbox, SandboxStats};
pub use simulation::states::{Body, BodyView, Bounds, RADIUS_SCALE};

pub use configuration::config::{
    BoundsConfig, MassLaw, MergePolicy, ParametersConfig, SandboxConfig, SeedingConfig,
};
