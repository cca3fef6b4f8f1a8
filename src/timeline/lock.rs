use crate::foundation::core::ScrollOffset;

/// One-way constraints on the effective scroll offset.
///
/// Runs before phase derivation on every tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollLockGate {
    black_hole_floor: ScrollOffset,
}

impl ScrollLockGate {
    pub fn new(black_hole_floor: f64) -> Self {
        Self {
            black_hole_floor: ScrollOffset::new(black_hole_floor),
        }
    }

    pub fn black_hole_floor(&self) -> ScrollOffset {
        self.black_hole_floor
    }

    /// - inside: never below the prior effective offset
    /// - black hole: never below the floor
    /// - otherwise free in both directions
    pub fn clamp(
        &self,
        raw: ScrollOffset,
        prior_effective: ScrollOffset,
        locked_to_black_hole: bool,
        locked_inside: bool,
    ) -> ScrollOffset {
        if locked_inside {
            raw.max(prior_effective)
        } else if locked_to_black_hole {
            raw.max(self.black_hole_floor)
        } else {
            raw
        }
    }
}

impl Default for ScrollLockGate {
    fn default() -> Self {
        Self::new(0.65)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/lock.rs"]
mod tests;
