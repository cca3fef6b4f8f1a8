use crate::{
    config::{BurstConfig, SupernovaConfig},
    effects::burst::{Particle, ParticleBurst},
    foundation::rng::Rng64,
};

/// Expanding, fading shell with its particle burst.
///
/// Follows the timeline's `explosion_triggered` flag: a rising edge activates the shell and
/// spawns a fresh burst, a falling edge (backward scroll before the locks latch) clears it.
/// While active the shell grows by a fixed step per tick until it reaches its growth limit,
/// then deactivates on its own.
#[derive(Clone, Debug)]
pub struct Supernova {
    cfg: SupernovaConfig,
    burst_cfg: BurstConfig,
    seed: u64,
    triggered: bool,
    active: bool,
    scale: f64,
    opacity: f64,
    burst: Option<ParticleBurst>,
    activations: u64,
}

impl Supernova {
    pub fn new(cfg: SupernovaConfig, burst_cfg: BurstConfig, seed: u64) -> Self {
        Self {
            cfg,
            burst_cfg,
            seed,
            triggered: false,
            active: false,
            scale: 0.0,
            opacity: 1.0,
            burst: None,
            activations: 0,
        }
    }

    pub fn set_trigger(&mut self, triggered: bool) {
        if triggered == self.triggered {
            return;
        }
        self.triggered = triggered;

        if triggered {
            let mut rng = Rng64::derive(self.seed, self.activations);
            self.burst = Some(ParticleBurst::from_config(&self.burst_cfg, &mut rng));
            self.activations += 1;
            self.active = true;
            self.scale = 1.0;
            self.opacity = 1.0;
            tracing::debug!(activation = self.activations, "supernova activated");
        } else {
            self.active = false;
            self.scale = 0.0;
            self.opacity = 1.0;
            self.burst = None;
            tracing::debug!("supernova cleared");
        }
    }

    pub fn tick(&mut self) {
        if !self.active {
            return;
        }
        if self.scale < self.cfg.growth_limit {
            self.scale += self.cfg.growth_step;
            self.opacity = (self.opacity - self.cfg.fade_step).max(0.0);
            if let Some(burst) = self.burst.as_mut() {
                burst.tick();
            }
        } else {
            self.active = false;
            self.burst = None;
            tracing::debug!(scale = self.scale, "supernova burned out");
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn depth(&self) -> f64 {
        self.cfg.depth
    }

    /// Empty while inactive.
    pub fn particles(&self) -> &[Particle] {
        self.burst.as_ref().map(|b| b.particles()).unwrap_or(&[])
    }

    pub fn burst(&self) -> Option<&ParticleBurst> {
        self.burst.as_ref()
    }

    pub fn activations(&self) -> u64 {
        self.activations
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/supernova.rs"]
mod tests;
