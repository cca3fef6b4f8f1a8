use std::path::Path;

use crate::{
    foundation::error::{SupernovaError, SupernovaResult},
    foundation::math::Ease,
};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Every tunable constant of the sequence.
///
/// All sections are optional in JSON; missing fields fall back to the built-in sequence.
/// Call [`SequenceConfig::validate`] (done by the loaders) before handing a config to a
/// [`crate::Timeline`] or [`crate::Scene`].
pub struct SequenceConfig {
    /// Phase band boundaries on the adjusted offset.
    pub thresholds: PhaseThresholds,
    /// Black-hole scale ramp, lock floor and geometry.
    pub black_hole: BlackHoleConfig,
    /// Recoil pulse played when the explosion fires.
    pub recoil: RecoilConfig,
    /// Scroll-to-depth mapping of the scene group.
    pub depth: DepthConfig,
    /// The star shown before the explosion.
    pub star: StarConfig,
    /// Expanding shell of the explosion.
    pub supernova: SupernovaConfig,
    /// Particle burst spawned with each explosion.
    pub burst: BurstConfig,
    /// Ambient point field.
    pub starfield: StarfieldConfig,
    /// Scroll surface paging.
    pub scroll: ScrollConfig,
    /// Seed for every random buffer.
    pub seed: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PhaseThresholds {
    pub star_start: f64,
    pub explosion_start: f64,
    pub approach_start: f64,
    pub inside_start: f64,
    /// Added to the effective offset so phases lead the visual scroll.
    pub scroll_bias: f64,
}

impl Default for PhaseThresholds {
    fn default() -> Self {
        Self {
            star_start: 0.25,
            explosion_start: 0.6,
            approach_start: 0.65,
            inside_start: 0.74,
            scroll_bias: 0.03,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BlackHoleConfig {
    pub min_scale: f64,
    pub max_scale: f64,
    /// Adjusted-offset distance over which the scale ramps from min to max.
    pub scale_span: f64,
    pub scale_ease: Ease,
    /// Effective-offset floor once the black-hole lock latches.
    pub lock_floor: f64,
    pub depth: f64,
    pub core_radius: f64,
    pub ring_radius: f64,
    pub ring_tube: f64,
    /// Radians per tick.
    pub core_spin: f64,
    pub ring_spin: f64,
}

impl Default for BlackHoleConfig {
    fn default() -> Self {
        Self {
            min_scale: 0.1,
            max_scale: 7.0,
            scale_span: 0.25,
            scale_ease: Ease::Linear,
            lock_floor: 0.65,
            depth: -500.0,
            core_radius: 1.0,
            ring_radius: 1.8,
            ring_tube: 0.4,
            core_spin: 0.015,
            ring_spin: -0.025,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RecoilConfig {
    pub duration_secs: f64,
    pub amplitude: f64,
}

impl Default for RecoilConfig {
    fn default() -> Self {
        Self {
            duration_secs: 1.5,
            amplitude: 500.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DepthConfig {
    pub units_per_offset: f64,
    /// Backward shift applied once the recoil has finished for good.
    pub post_recoil_pullback: f64,
}

impl Default for DepthConfig {
    fn default() -> Self {
        Self {
            units_per_offset: 1000.0,
            post_recoil_pullback: 200.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StarConfig {
    pub depth: f64,
    pub radius: f64,
    /// Radians per tick around x and y.
    pub spin_x: f64,
    pub spin_y: f64,
}

impl Default for StarConfig {
    fn default() -> Self {
        Self {
            depth: -600.0,
            radius: 1.2,
            spin_x: 0.005,
            spin_y: 0.008,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SupernovaConfig {
    pub depth: f64,
    /// The shell stops growing (and deactivates) once its scale reaches this.
    pub growth_limit: f64,
    pub growth_step: f64,
    pub fade_step: f64,
}

impl Default for SupernovaConfig {
    fn default() -> Self {
        Self {
            depth: -600.0,
            growth_limit: 15.0,
            growth_step: 0.3,
            fade_step: 0.02,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BurstConfig {
    pub count: usize,
    pub position_half_extent: f64,
    pub velocity_half_extent: f64,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            count: 300,
            position_half_extent: 2.0,
            velocity_half_extent: 0.1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    pub count: usize,
    /// Side of the cube the points are scattered in; depth runs from `-spread` to 0.
    pub spread: f64,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            count: 4000,
            spread: 1500.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub pages: u32,
    /// Fraction of the remaining distance left uncovered per sample.
    pub damping: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            pages: 50,
            damping: 0.1,
        }
    }
}

impl SequenceConfig {
    #[tracing::instrument]
    pub fn from_path(path: &Path) -> SupernovaResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            SupernovaError::config(format!("read config '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(json: &str) -> SupernovaResult<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> SupernovaResult<()> {
        let t = &self.thresholds;
        let bands = [
            0.0,
            t.star_start,
            t.explosion_start,
            t.approach_start,
            t.inside_start,
        ];
        if bands.iter().any(|v| !v.is_finite()) {
            return Err(SupernovaError::config("phase thresholds must be finite"));
        }
        if !bands.windows(2).all(|w| w[0] < w[1]) || t.inside_start > 1.0 {
            return Err(SupernovaError::config(
                "phase thresholds must be strictly increasing within (0, 1]",
            ));
        }
        if !(0.0..1.0).contains(&t.scroll_bias) {
            return Err(SupernovaError::config("scroll_bias must be in [0, 1)"));
        }

        let bh = &self.black_hole;
        if !(bh.min_scale > 0.0 && bh.min_scale <= bh.max_scale && bh.max_scale.is_finite()) {
            return Err(SupernovaError::config(
                "black hole scale range must satisfy 0 < min <= max",
            ));
        }
        if !(bh.scale_span > 0.0 && bh.scale_span.is_finite()) {
            return Err(SupernovaError::config("black hole scale_span must be > 0"));
        }
        if !(0.0..=1.0).contains(&bh.lock_floor) {
            return Err(SupernovaError::config("black hole lock_floor must be in [0, 1]"));
        }
        if bh.lock_floor + t.scroll_bias < t.approach_start {
            return Err(SupernovaError::config(
                "black hole lock_floor plus scroll_bias must reach approach_start",
            ));
        }

        if !(self.recoil.duration_secs > 0.0 && self.recoil.duration_secs.is_finite()) {
            return Err(SupernovaError::config("recoil duration must be > 0"));
        }
        if !self.recoil.amplitude.is_finite() {
            return Err(SupernovaError::config("recoil amplitude must be finite"));
        }

        let sn = &self.supernova;
        if !(sn.growth_step > 0.0 && sn.growth_limit > 0.0 && sn.fade_step >= 0.0) {
            return Err(SupernovaError::config(
                "supernova growth_step and growth_limit must be > 0, fade_step >= 0",
            ));
        }

        if self.burst.count == 0 {
            return Err(SupernovaError::config("burst count must be > 0"));
        }
        if self.burst.position_half_extent < 0.0 || self.burst.velocity_half_extent < 0.0 {
            return Err(SupernovaError::config("burst extents must be >= 0"));
        }
        if self.starfield.spread <= 0.0 {
            return Err(SupernovaError::config("starfield spread must be > 0"));
        }

        if self.scroll.pages < 2 {
            return Err(SupernovaError::config("scroll pages must be >= 2"));
        }
        if !(0.0..1.0).contains(&self.scroll.damping) {
            return Err(SupernovaError::config("scroll damping must be in [0, 1)"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
