use crate::{
    config::{BlackHoleConfig, DepthConfig, PhaseThresholds, RecoilConfig, SequenceConfig},
    foundation::core::{GroupTransform, ScrollOffset, Timestamp},
    foundation::math::{clamp01, lerp},
    timeline::lock::ScrollLockGate,
    timeline::phase::Phase,
    timeline::recoil::RecoilAnimator,
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Everything the timeline decided for one tick, published as a single value.
pub struct TimelineState {
    /// Active narrative phase.
    pub phase: Phase,
    /// Scroll offset after the lock gate.
    pub effective_offset: f64,
    /// Effective offset plus the forward bias, clamped to `[0, 1]`.
    pub adjusted_offset: f64,
    /// Set once the explosion has fired; cleared only by a backward scroll before any lock.
    pub explosion_triggered: bool,
    pub black_hole_visible: bool,
    /// Always inside the configured `[min_scale, max_scale]`.
    pub black_hole_scale: f64,
    pub inside_entered: bool,
    /// Latched when the recoil completes. Never reverts.
    pub black_hole_locked: bool,
    /// Latched when `Inside` is entered. Never reverts.
    pub inside_locked: bool,
    /// A recoil pulse is in flight.
    pub recoiling: bool,
    pub starfield_visible: bool,
    /// Scene group placement derived for this tick.
    pub group: GroupTransform,
}

impl TimelineState {
    fn initial(cfg: &SequenceConfig) -> Self {
        Self {
            phase: Phase::Intro,
            effective_offset: 0.0,
            adjusted_offset: clamp01(cfg.thresholds.scroll_bias),
            explosion_triggered: false,
            black_hole_visible: false,
            black_hole_scale: ordered_scale_range(cfg.black_hole).min_scale,
            inside_entered: false,
            black_hole_locked: false,
            inside_locked: false,
            recoiling: false,
            starfield_visible: true,
            group: GroupTransform::default(),
        }
    }
}

/// Scroll-offset to phase state machine.
///
/// One [`Timeline::advance`] per displayed frame. Identical `(raw, now)` histories produce
/// identical states; the only memory carried between ticks is the previous state, the lock
/// flags and the in-flight recoil.
#[derive(Clone, Debug)]
pub struct Timeline {
    thresholds: PhaseThresholds,
    black_hole: BlackHoleConfig,
    recoil_cfg: RecoilConfig,
    depth: DepthConfig,
    gate: ScrollLockGate,
    initial: TimelineState,
    state: TimelineState,
    recoil: Option<RecoilAnimator>,
    ticks: u64,
}

impl Timeline {
    pub fn new(cfg: &SequenceConfig) -> Self {
        let initial = TimelineState::initial(cfg);
        Self {
            thresholds: cfg.thresholds,
            black_hole: ordered_scale_range(cfg.black_hole),
            recoil_cfg: cfg.recoil,
            depth: cfg.depth,
            gate: ScrollLockGate::new(cfg.black_hole.lock_floor),
            initial,
            state: initial,
            recoil: None,
            ticks: 0,
        }
    }

    pub fn state(&self) -> &TimelineState {
        &self.state
    }

    pub fn recoil(&self) -> Option<&RecoilAnimator> {
        self.recoil.as_ref()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Start a new play-through. This is the only way the locks come undone.
    pub fn restart(&mut self) {
        self.state = self.initial;
        self.recoil = None;
        tracing::debug!(after_ticks = self.ticks, "timeline restarted");
        self.ticks = 0;
    }

    /// `None` (no scroll sample yet) behaves like offset 0.
    pub fn advance(&mut self, raw: Option<f64>, now: Timestamp) -> TimelineState {
        let prev = self.state;
        let mut next = prev;
        self.ticks += 1;

        self.settle_recoil(now, &mut next);

        let effective = self.gate.clamp(
            ScrollOffset::from_sample(raw),
            ScrollOffset::new(prev.effective_offset),
            next.black_hole_locked,
            next.inside_locked,
        );
        let adjusted = clamp01(effective.get() + self.thresholds.scroll_bias);
        next.effective_offset = effective.get();
        next.adjusted_offset = adjusted;

        let target = Phase::from_adjusted(adjusted, &self.thresholds);
        let resolved = self.resolve(target, &next);
        self.on_transition(prev.phase, resolved, now, &mut next);
        next.phase = resolved;
        self.apply_phase(resolved, adjusted, &mut next);

        next.recoiling = self.recoil.is_some();
        next.starfield_visible = !next.inside_entered;
        next.group = self.group_transform(effective, now, &next);
        next.black_hole_scale = self.clamp_scale(next.black_hole_scale);

        self.state = next;
        next
    }

    fn settle_recoil(&mut self, now: Timestamp, next: &mut TimelineState) {
        let Some(recoil) = self.recoil else {
            return;
        };
        if recoil.is_finished(now) {
            self.recoil = None;
            next.black_hole_locked = true;
            tracing::debug!(tick = self.ticks, "recoil finished, black hole locked");
        }
    }

    /// The explosion cannot be skipped and its recoil must finish before the approach.
    fn resolve(&self, target: Phase, state: &TimelineState) -> Phase {
        if target.is_pre_explosion() {
            target
        } else if !state.explosion_triggered || self.recoil.is_some() {
            Phase::Explosion
        } else {
            target
        }
    }

    fn on_transition(&mut self, from: Phase, to: Phase, now: Timestamp, next: &mut TimelineState) {
        if from != to {
            tracing::debug!(?from, ?to, tick = self.ticks, "phase transition");
        }

        match (from, to) {
            (from, Phase::Explosion) if from.is_pre_explosion() && !next.explosion_triggered => {
                let mut recoil = RecoilAnimator::new(&self.recoil_cfg);
                recoil.start(now);
                self.recoil = Some(recoil);
                next.explosion_triggered = true;
                next.black_hole_visible = false;
                tracing::debug!(at_secs = now.as_secs_f64(), "explosion triggered, recoil started");
            }
            (from, Phase::Inside) if from != Phase::Inside => {
                if !next.inside_locked {
                    tracing::debug!(tick = self.ticks, "inside locked");
                }
                next.inside_locked = true;
                next.inside_entered = true;
            }
            (from, to)
                if !from.is_pre_explosion()
                    && to.is_pre_explosion()
                    && !next.black_hole_locked
                    && !next.inside_locked =>
            {
                if self.recoil.take().is_some() {
                    tracing::debug!("recoil superseded by backward scroll");
                }
                next.explosion_triggered = false;
                next.black_hole_visible = false;
                next.inside_entered = false;
                next.black_hole_scale = self.black_hole.min_scale;
            }
            _ => {}
        }
    }

    fn apply_phase(&self, phase: Phase, adjusted: f64, next: &mut TimelineState) {
        match phase {
            Phase::Intro | Phase::Star => {}
            Phase::Explosion => {
                next.black_hole_visible = false;
            }
            Phase::BlackHoleApproach => {
                next.black_hole_scale = self.approach_scale(adjusted);
                next.black_hole_visible = self.recoil.is_none();
            }
            Phase::Inside => {
                next.black_hole_scale = self.black_hole.max_scale;
                next.black_hole_visible = true;
                next.inside_entered = true;
            }
        }
    }

    fn approach_scale(&self, adjusted: f64) -> f64 {
        let bh = &self.black_hole;
        let t = clamp01((adjusted - self.thresholds.approach_start) / bh.scale_span);
        lerp(bh.min_scale, bh.max_scale, bh.scale_ease.apply(t))
    }

    fn clamp_scale(&self, scale: f64) -> f64 {
        if scale.is_finite() {
            scale.clamp(self.black_hole.min_scale, self.black_hole.max_scale)
        } else {
            self.black_hole.min_scale
        }
    }

    fn group_transform(
        &self,
        effective: ScrollOffset,
        now: Timestamp,
        next: &TimelineState,
    ) -> GroupTransform {
        let base = effective.get() * self.depth.units_per_offset;
        let position_z = match self.recoil {
            Some(recoil) => base + recoil.tick(now).z_offset,
            None if next.black_hole_locked => base - self.depth.post_recoil_pullback,
            None => base,
        };
        GroupTransform { position_z }
    }
}

/// Unvalidated configs still get a usable `min <= max` scale range.
fn ordered_scale_range(bh: BlackHoleConfig) -> BlackHoleConfig {
    let fallback = BlackHoleConfig::default();
    let a = if bh.min_scale.is_finite() {
        bh.min_scale
    } else {
        fallback.min_scale
    };
    let b = if bh.max_scale.is_finite() {
        bh.max_scale
    } else {
        fallback.max_scale
    };
    BlackHoleConfig {
        min_scale: a.min(b),
        max_scale: a.max(b),
        ..bh
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/controller.rs"]
mod tests;
