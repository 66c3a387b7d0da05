//! The sandbox stepping algorithm
//!
//! `Sandbox` owns the ordered body collection, the bounding rectangle, and
//! the physical parameters, and advances the whole system one tick at a
//! time. Each `step(dt)` runs four phases in a fixed order:
//!
//! 1. integrate every live body (semi-implicit Euler),
//! 2. reflect bodies off the bounds, per axis, with damping,
//! 3. resolve every unordered pair in collection order: merge on overlap,
//!    otherwise accumulate Newtonian attraction for the next step,
//! 4. compact dead bodies out of the collection.
//!
//! Gravity computed in phase 3 only moves bodies on the *next* step's
//! phase 1; merges take effect immediately and suppress the pair's gravity
//! for the step. The pair loop is sequential and deterministic — collection
//! order is the tie-break order.
//!
//! The sandbox is idle until a body has been selected; before that, `step`
//! does nothing. There is no way back to idle: resetting means building a
//! fresh `Sandbox`.

use log::{debug, info};

use crate::configuration::config::MergePolicy;
use crate::simulation::error::{MathError, StepError};
use crate::simulation::forces::Gravity;
use crate::simulation::math::Vec2;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, Bounds, BodyView};

/// Running statistics exposed to narrative/text layers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SandboxStats {
    pub initial_count: usize,
    pub live_count: usize,
    pub dead_count: usize,
    /// `None` until a body is selected, then whether it still lives
    pub selected_alive: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct Sandbox {
    pub bodies: Vec<Body>,     // insertion order is the canonical pair order
    pub bounds: Bounds,
    pub params: Parameters,
    selected: Option<u32>,     // id of the tracked body, set once
    dead_count: usize,
    initial_count: usize,
}

impl Sandbox {
    pub fn new(bodies: Vec<Body>, bounds: Bounds, params: Parameters) -> Self {
        let initial_count = bodies.len();
        Self {
            bodies,
            bounds,
            params,
            selected: None,
            dead_count: 0,
            initial_count,
        }
    }

    /// Advance the system by one tick of `dt` seconds
    ///
    /// A no-op while no body is selected. The caller is responsible for
    /// clamping pathological `dt` values before passing them in; a
    /// non-finite `dt` is rejected outright
    pub fn step(&mut self, dt: f64) -> Result<(), StepError> {
        if !dt.is_finite() {
            return Err(MathError::InvalidOperand.into());
        }
        if self.selected.is_none() {
            return Ok(());
        }

        self.integrate(dt);
        self.reflect();
        self.resolve_pairs()?;
        self.compact();
        Ok(())
    }

    /// Phase 1: advance every live body
    fn integrate(&mut self, dt: f64) {
        for body in self.bodies.iter_mut().filter(|b| b.alive) {
            body.step(dt);
        }
    }

    /// Phase 2: inelastic bounce off the bounding rectangle
    ///
    /// Each axis is clamped independently, so a body entering a corner can
    /// have both components flipped in the same step
    fn reflect(&mut self) {
        let bounds = self.bounds;
        let restitution = self.params.restitution;

        for body in self.bodies.iter_mut().filter(|b| b.alive) {
            let radius = body.radius();

            if body.pos.x - radius < bounds.x {
                body.pos.x = bounds.x + radius;
                body.vel.x *= restitution;
            }
            if body.pos.x + radius > bounds.x + bounds.w {
                body.pos.x = bounds.x + bounds.w - radius;
                body.vel.x *= restitution;
            }
            if body.pos.y - radius < bounds.y {
                body.pos.y = bounds.y + radius;
                body.vel.y *= restitution;
            }
            if body.pos.y + radius > bounds.y + bounds.h {
                body.pos.y = bounds.y + bounds.h - radius;
                body.vel.y *= restitution;
            }
        }
    }

    /// Phase 3: merge/gravity over every unordered pair `(i, j)`, `i < j`
    fn resolve_pairs(&mut self) -> Result<(), StepError> {
        let gravity = Gravity {
            g: self.params.g,
            cap: self.params.force_cap,
        };
        let policy = self.params.merge_policy;

        // Split &mut self into the fields the loop mutates
        let Sandbox {
            bodies, dead_count, ..
        } = self;

        let n = bodies.len();
        for i in 0..n {
            for j in (i + 1)..n {
                // Two disjoint &mut borrows of the pair
                let (head, tail) = bodies.split_at_mut(j);
                let first = &mut head[i];
                let second = &mut tail[0];

                // A body eaten earlier in this same step interacts no further
                if first.mass == 0.0 || second.mass == 0.0 {
                    continue;
                }

                let separation = first.pos - second.pos;

                if separation.norm() < first.radius() + second.radius() {
                    // collapse: the heavier body absorbs the lighter,
                    // ties go to the first operand in iteration order
                    let (big, eaten) = if first.mass >= second.mass {
                        (first, second)
                    } else {
                        (second, first)
                    };

                    match policy {
                        MergePolicy::ConserveMomentum => {
                            let total = big.mass + eaten.mass;
                            big.vel = big.vel * (big.mass / total)
                                + eaten.vel * (eaten.mass / total);
                        }
                        MergePolicy::WinnerVelocity => {}
                    }

                    big.mass += eaten.mass;
                    eaten.mass = 0.0;
                    eaten.alive = false;
                    *dead_count += 1;
                    debug!("body {} absorbed body {}", big.id, eaten.id);

                    // merge supersedes attraction for this pair
                    continue;
                }

                let (on_first, on_second) = gravity.forces_between(first, second)?;
                first.apply_force(on_first)?;
                second.apply_force(on_second)?;
            }
        }
        Ok(())
    }

    /// Phase 4: drop dead bodies; survivors keep identity and order
    fn compact(&mut self) {
        self.bodies.retain(|b| b.mass > 0.0);
    }

    /// Select the first body in collection order within `2 × radius` of
    /// `point` and start the simulation. Once a selection exists, further
    /// calls return it unchanged
    pub fn select_at(&mut self, point: Vec2) -> Option<u32> {
        if self.selected.is_some() {
            return self.selected;
        }
        for body in &mut self.bodies {
            if (body.pos - point).norm() < 2.0 * body.radius() {
                body.selected = true;
                self.selected = Some(body.id);
                info!("selected body {} at ({:.2}, {:.2})", body.id, body.pos.x, body.pos.y);
                return self.selected;
            }
        }
        None
    }

    /// Mark every body within `2 × radius` of `point` as hovered, and
    /// clear the flag on everything else. One full sweep per query
    pub fn hover_at(&mut self, point: Vec2) {
        for body in &mut self.bodies {
            body.hovered = (body.pos - point).norm() < 2.0 * body.radius();
        }
    }

    /// True once a body has been selected
    pub fn is_running(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    /// Read-only rows for rendering, in collection order
    pub fn snapshot(&self) -> Vec<BodyView> {
        self.bodies
            .iter()
            .map(|b| BodyView {
                id: b.id,
                pos: b.pos,
                radius: b.radius(),
                alive: b.alive,
                selected: b.selected,
                hovered: b.hovered,
            })
            .collect()
    }

    pub fn stats(&self) -> SandboxStats {
        SandboxStats {
            initial_count: self.initial_count,
            live_count: self.bodies.len(),
            dead_count: self.dead_count,
            selected_alive: self
                .selected
                .map(|id| self.bodies.iter().any(|b| b.id == id)),
        }
    }
}
