use crate::{
    config::{BlackHoleConfig, SequenceConfig, StarConfig},
    effects::burst::Particle,
    effects::starfield::Starfield,
    effects::supernova::Supernova,
    foundation::core::{Timestamp, Vec3},
    foundation::error::SupernovaResult,
    foundation::rng::Rng64,
    timeline::controller::{Timeline, TimelineState},
    timeline::phase::Phase,
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct StarView {
    pub visible: bool,
    pub depth: f64,
    pub radius: f64,
    /// Accumulated Euler angles in radians.
    pub rotation: Vec3,
}

#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct SupernovaView<'a> {
    pub visible: bool,
    pub depth: f64,
    pub scale: f64,
    pub opacity: f64,
    pub particle_count: usize,
    /// Offsets relative to the shell centre.
    #[serde(skip)]
    pub particles: &'a [Particle],
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct BlackHoleView {
    pub visible: bool,
    pub depth: f64,
    pub scale: f64,
    pub core_radius: f64,
    pub ring_radius: f64,
    pub ring_tube: f64,
    pub core_rotation: f64,
    pub ring_rotation: f64,
}

#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct StarfieldView<'a> {
    pub visible: bool,
    #[serde(skip)]
    pub points: &'a [Vec3],
}

/// Read-only view of one tick, handed to the render adapter.
#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct SceneSnapshot<'a> {
    pub tick: u64,
    pub timeline: TimelineState,
    pub caption: &'static str,
    pub star: StarView,
    pub supernova: SupernovaView<'a>,
    pub black_hole: BlackHoleView,
    pub starfield: StarfieldView<'a>,
}

/// The fixed narrative scene: timeline plus the visuals it drives.
#[derive(Clone, Debug)]
pub struct Scene {
    star_cfg: StarConfig,
    black_hole_cfg: BlackHoleConfig,
    timeline: Timeline,
    supernova: Supernova,
    starfield: Starfield,
    star_rotation: Vec3,
    core_rotation: f64,
    ring_rotation: f64,
    ticks: u64,
}

impl Scene {
    pub fn new(cfg: &SequenceConfig) -> SupernovaResult<Self> {
        cfg.validate()?;
        let starfield = Starfield::generate(&cfg.starfield, &mut Rng64::new(cfg.seed));
        Ok(Self {
            star_cfg: cfg.star,
            black_hole_cfg: cfg.black_hole,
            timeline: Timeline::new(cfg),
            supernova: Supernova::new(cfg.supernova, cfg.burst, cfg.seed),
            starfield,
            star_rotation: Vec3::ZERO,
            core_rotation: 0.0,
            ring_rotation: 0.0,
            ticks: 0,
        })
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn supernova(&self) -> &Supernova {
        &self.supernova
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advance one frame.
    pub fn tick(&mut self, raw: Option<f64>, now: Timestamp) -> SceneSnapshot<'_> {
        let state = self.timeline.advance(raw, now);
        self.ticks += 1;

        self.supernova.set_trigger(state.explosion_triggered);
        self.supernova.tick();

        self.star_rotation.x += self.star_cfg.spin_x;
        self.star_rotation.y += self.star_cfg.spin_y;
        if state.black_hole_visible {
            self.core_rotation += self.black_hole_cfg.core_spin;
            self.ring_rotation += self.black_hole_cfg.ring_spin;
        }

        self.snapshot()
    }

    /// View of the most recent tick.
    pub fn snapshot(&self) -> SceneSnapshot<'_> {
        let state = *self.timeline.state();
        let bh = &self.black_hole_cfg;
        SceneSnapshot {
            tick: self.ticks,
            timeline: state,
            caption: state.phase.caption(),
            star: StarView {
                visible: state.phase.is_pre_explosion(),
                depth: self.star_cfg.depth,
                radius: self.star_cfg.radius,
                rotation: self.star_rotation,
            },
            supernova: SupernovaView {
                visible: self.supernova.is_active() && state.phase == Phase::Explosion,
                depth: self.supernova.depth(),
                scale: self.supernova.scale(),
                opacity: self.supernova.opacity(),
                particle_count: self.supernova.particles().len(),
                particles: self.supernova.particles(),
            },
            black_hole: BlackHoleView {
                visible: state.black_hole_visible,
                depth: bh.depth,
                scale: state.black_hole_scale,
                core_radius: bh.core_radius,
                ring_radius: bh.ring_radius,
                ring_tube: bh.ring_tube,
                core_rotation: self.core_rotation,
                ring_rotation: self.ring_rotation,
            },
            starfield: StarfieldView {
                visible: state.starfield_visible,
                points: self.starfield.points(),
            },
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/scene.rs"]
mod tests;
