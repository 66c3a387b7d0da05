pub mod error;
pub mod forces;
pub mod math;
pub mod params;
pub mod sandbox;
pub mod scenario;
pub mod states;
