use std::time::Duration;

use crate::{config::RecoilConfig, foundation::core::Timestamp, foundation::math::clamp01};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RecoilSample {
    pub active: bool,
    /// Added to the group depth while the pulse plays.
    pub z_offset: f64,
}

impl RecoilSample {
    pub const IDLE: Self = Self {
        active: false,
        z_offset: 0.0,
    };
}

/// One-shot depth kick played when the explosion fires.
///
/// `z_offset = -amplitude * sin(pi * p)` with `p` the elapsed fraction of `duration`:
/// zero at both ends, `-amplitude` halfway through. Timing is wall-clock based.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecoilAnimator {
    start: Option<Timestamp>,
    duration: Duration,
    amplitude: f64,
}

impl RecoilAnimator {
    pub fn new(cfg: &RecoilConfig) -> Self {
        Self {
            start: None,
            duration: Duration::try_from_secs_f64(cfg.duration_secs.max(f64::EPSILON))
                .unwrap_or(Duration::MAX),
            amplitude: cfg.amplitude,
        }
    }

    pub fn start(&mut self, now: Timestamp) {
        self.start = Some(now);
    }

    pub fn started_at(&self) -> Option<Timestamp> {
        self.start
    }

    /// Elapsed fraction in `[0, 1]`; 0 before `start`.
    pub fn progress(&self, now: Timestamp) -> f64 {
        match self.start {
            Some(start) => clamp01(
                now.saturating_since(start).as_secs_f64() / self.duration.as_secs_f64(),
            ),
            None => 0.0,
        }
    }

    pub fn is_finished(&self, now: Timestamp) -> bool {
        self.start.is_some() && self.progress(now) >= 1.0
    }

    pub fn tick(&self, now: Timestamp) -> RecoilSample {
        if self.start.is_none() {
            return RecoilSample::IDLE;
        }
        let p = self.progress(now);
        RecoilSample {
            active: p < 1.0,
            z_offset: pulse(self.amplitude, p),
        }
    }
}

fn pulse(amplitude: f64, p: f64) -> f64 {
    // sin(pi) is ~1.2e-16, not 0.
    if p <= 0.0 || p >= 1.0 {
        return 0.0;
    }
    -amplitude * (std::f64::consts::PI * p).sin()
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/recoil.rs"]
mod tests;
