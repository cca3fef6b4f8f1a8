use std::time::Duration;

/// Scroll position along the whole sequence, always inside `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize)]
pub struct ScrollOffset(f64);

impl ScrollOffset {
    pub const START: Self = Self(0.0);
    pub const END: Self = Self(1.0);

    /// Non-finite input collapses to the start of the sequence.
    pub fn new(raw: f64) -> Self {
        if raw.is_finite() {
            Self(raw.clamp(0.0, 1.0))
        } else {
            Self::START
        }
    }

    /// A missing sample is treated like the start of the sequence.
    pub fn from_sample(sample: Option<f64>) -> Self {
        sample.map(Self::new).unwrap_or(Self::START)
    }

    pub fn get(self) -> f64 {
        self.0
    }

    pub fn max(self, other: Self) -> Self {
        if other.0 > self.0 { other } else { self }
    }
}

/// Monotonic time elapsed since the owning clock's origin.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
)]
pub struct Timestamp(pub Duration);

impl Timestamp {
    pub const ZERO: Self = Self(Duration::ZERO);

    /// Saturates at `Duration::MAX` for values too large to represent.
    pub fn from_secs_f64(secs: f64) -> Self {
        if secs.is_finite() && secs > 0.0 {
            Self(Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX))
        } else {
            Self::ZERO
        }
    }

    pub fn as_secs_f64(self) -> f64 {
        self.0.as_secs_f64()
    }

    /// Zero when `earlier` is actually later.
    pub fn saturating_since(self, earlier: Self) -> Duration {
        self.0.saturating_sub(earlier.0)
    }

    pub fn advanced_by(self, by: Duration) -> Self {
        Self(self.0.saturating_add(by))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }
}

impl std::ops::Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

/// Placement of the whole scene group, derived fresh every tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct GroupTransform {
    pub position_z: f64,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
