use crate::{config::BurstConfig, foundation::core::Vec3, foundation::rng::Rng64};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Particle {
    pub position: Vec3,
    /// Fixed at spawn.
    pub velocity: Vec3,
}

/// Fixed population of point particles drifting at constant velocity.
///
/// A burst has no lifetime of its own: the owner ticks it while its visual is active and
/// drops it afterwards. Re-activation spawns a new burst rather than rewinding this one.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleBurst {
    particles: Vec<Particle>,
    ticks: u64,
}

impl ParticleBurst {
    /// Positions are uniform in `±position_half_extent` and velocities uniform in
    /// `±velocity_half_extent`, independently per axis.
    pub fn spawn(
        count: usize,
        position_half_extent: f64,
        velocity_half_extent: f64,
        rng: &mut Rng64,
    ) -> Self {
        let particles = (0..count)
            .map(|_| Particle {
                position: Vec3::new(
                    rng.symmetric(position_half_extent),
                    rng.symmetric(position_half_extent),
                    rng.symmetric(position_half_extent),
                ),
                velocity: Vec3::new(
                    rng.symmetric(velocity_half_extent),
                    rng.symmetric(velocity_half_extent),
                    rng.symmetric(velocity_half_extent),
                ),
            })
            .collect();
        Self { particles, ticks: 0 }
    }

    pub fn from_config(cfg: &BurstConfig, rng: &mut Rng64) -> Self {
        Self::spawn(
            cfg.count,
            cfg.position_half_extent,
            cfg.velocity_half_extent,
            rng,
        )
    }

    /// One explicit Euler step, no damping.
    pub fn tick(&mut self) {
        for p in &mut self.particles {
            p.position += p.velocity;
        }
        self.ticks += 1;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/burst.rs"]
mod tests;
