//! Build fully-initialized sandboxes from configuration
//!
//! Maps a `SandboxConfig` (YAML-facing) to a runtime [`Sandbox`]:
//! runtime parameters, centered bounds, and the seeded body grid. Bodies
//! are laid out on `-extent..=extent` on both axes, optionally given a
//! tangential "washer" velocity field, and assigned masses drawn from the
//! configured law with a seeded PCG so runs are reproducible.

use log::info;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::configuration::config::{MassLaw, SandboxConfig};
use crate::simulation::math::Vec2;
use crate::simulation::params::Parameters;
use crate::simulation::sandbox::Sandbox;
use crate::simulation::states::{Body, Bounds};

/// Box–Muller normal sample translated into (0, 1), resampled until it
/// lands inside the interval
fn randn_unit(rng: &mut Pcg64) -> f64 {
    loop {
        let mut u = 0.0;
        while u == 0.0 {
            u = rng.gen::<f64>();
        }
        let mut v = 0.0;
        while v == 0.0 {
            v = rng.gen::<f64>();
        }
        let num = (-2.0 * u.ln()).sqrt() * (std::f64::consts::TAU * v).cos() / 10.0 + 0.5;
        if (0.0..=1.0).contains(&num) {
            return num;
        }
    }
}

impl MassLaw {
    /// Draw one body mass
    pub fn sample(&self, rng: &mut Pcg64) -> f64 {
        match *self {
            MassLaw::Uniform { min, max } => min + (max - min) * rng.gen::<f64>(),
            MassLaw::GaussianProduct { scale } => {
                scale * randn_unit(rng) * randn_unit(rng) * randn_unit(rng)
            }
        }
    }
}

impl Sandbox {
    /// Seed a fresh sandbox from a scenario configuration
    ///
    /// Resetting a running sandbox means calling this again and dropping
    /// the old instance; there is no in-place reseed
    pub fn from_config(cfg: &SandboxConfig) -> Self {
        let p = &cfg.parameters;
        let params = Parameters {
            g: p.g,
            restitution: p.restitution,
            force_cap: p.force_cap,
            merge_policy: p.merge_policy,
            seed: p.seed,
        };

        let mut rng = Pcg64::seed_from_u64(params.seed);

        let seeding = &cfg.seeding;
        let mut bodies = Vec::new();
        let mut id: u32 = 0;
        for i in -seeding.extent..=seeding.extent {
            for j in -seeding.extent..=seeding.extent {
                let pos = Vec2::new(f64::from(i), f64::from(j)) * seeding.spacing;
                let vel = match seeding.swirl {
                    Some(k) => Vec2::new(-pos.y, pos.x) * k,
                    None => Vec2::zeros(),
                };
                let mass = seeding.mass_law.sample(&mut rng);
                bodies.push(Body::new(id, pos, vel, mass));
                id += 1;
            }
        }

        info!(
            "seeded {} bodies on a {}-unit grid (seed {})",
            bodies.len(),
            2 * seeding.extent + 1,
            params.seed
        );

        let bounds = Bounds::centered(cfg.bounds.width, cfg.bounds.height);
        Sandbox::new(bodies, bounds, params)
    }
}
