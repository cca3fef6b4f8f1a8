use crate::{config::StarfieldConfig, foundation::core::Vec3, foundation::rng::Rng64};

/// Ambient point field, scattered once and never moved.
#[derive(Clone, Debug, PartialEq)]
pub struct Starfield {
    points: Vec<Vec3>,
}

impl Starfield {
    /// `x, y` uniform in `±spread/2`, depth uniform in `[-spread, 0)`.
    pub fn generate(cfg: &StarfieldConfig, rng: &mut Rng64) -> Self {
        let half = cfg.spread / 2.0;
        let points = (0..cfg.count)
            .map(|_| {
                Vec3::new(
                    rng.symmetric(half),
                    rng.symmetric(half),
                    rng.range(-cfg.spread, 0.0),
                )
            })
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }
}
