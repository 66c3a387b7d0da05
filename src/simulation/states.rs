//! Core state types for the sandbox
//!
//! Defines the body/bounds structs shared by the stepping algorithm:
//! - `Body` — a point mass with position, velocity, pending acceleration,
//!   and a mass-derived radius, advanced by a semi-implicit Euler step
//! - `Bounds` — the rectangle bodies are reflected within
//! - `BodyView` — one read-only snapshot row handed to renderers

use crate::simulation::error::StepError;
use crate::simulation::math::Vec2;

/// Apparent size scales with the cube root of mass, so merged bodies
/// grow sub-linearly in apparent size
pub const RADIUS_SCALE: f64 = 0.2;

#[derive(Debug, Clone)]
pub struct Body {
    pub id: u32,        // stable identity, survives compaction
    pub pos: Vec2,      // position
    pub vel: Vec2,      // velocity
    pub acc: Vec2,      // acceleration accumulated this step, reset on integrate
    pub mass: f64,      // zero means dead
    pub alive: bool,    // false once absorbed by a merge
    pub selected: bool, // set by the select query, never by stepping
    pub hovered: bool,  // set by the hover query, never by stepping
}

impl Body {
    pub fn new(id: u32, pos: Vec2, vel: Vec2, mass: f64) -> Self {
        Self {
            id,
            pos,
            vel,
            acc: Vec2::zeros(),
            mass,
            alive: true,
            selected: false,
            hovered: false,
        }
    }

    /// Accumulate `force / mass` into the pending acceleration
    ///
    /// Dead bodies must never receive forces; the sandbox excludes them from
    /// the pairwise phase, so an error here means the step ordering is broken
    pub fn apply_force(&mut self, force: Vec2) -> Result<(), StepError> {
        if self.mass == 0.0 {
            return Err(StepError::ZeroMassForce);
        }
        self.acc += force / self.mass;
        Ok(())
    }

    /// Semi-implicit Euler, intentionally first-order:
    /// `vel += acc; pos += vel * dt`, then the accumulator is cleared
    pub fn step(&mut self, dt: f64) {
        self.vel += self.acc;
        self.pos += self.vel * dt;
        self.acc = Vec2::zeros();
    }

    pub fn radius(&self) -> f64 {
        RADIUS_SCALE * self.mass.cbrt()
    }
}

/// Rectangle bodies are reflected within, in simulation units
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub x: f64, // min x
    pub y: f64, // min y
    pub w: f64,
    pub h: f64,
}

impl Bounds {
    /// Rectangle of the given size centered on the origin, matching how the
    /// viewport maps into simulation space
    pub fn centered(w: f64, h: f64) -> Self {
        Self {
            x: -w / 2.0,
            y: -h / 2.0,
            w,
            h,
        }
    }
}

/// One body as seen by renderers: identity and geometry, no physics internals
#[derive(Debug, Clone, Copy)]
pub struct BodyView {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f64,
    pub alive: bool,
    pub selected: bool,
    pub hovered: bool,
}
