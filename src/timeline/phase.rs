use crate::config::PhaseThresholds;

/// Narrative stage of the sequence. Ordered by narrative progress.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Intro,
    Star,
    Explosion,
    BlackHoleApproach,
    Inside,
}

impl Phase {
    /// Band lookup on the adjusted offset. Bands are half-open `[lo, hi)`; the last one
    /// absorbs everything from `inside_start` up.
    pub fn from_adjusted(adjusted: f64, t: &PhaseThresholds) -> Self {
        if adjusted < t.star_start {
            Self::Intro
        } else if adjusted < t.explosion_start {
            Self::Star
        } else if adjusted < t.approach_start {
            Self::Explosion
        } else if adjusted < t.inside_start {
            Self::BlackHoleApproach
        } else {
            Self::Inside
        }
    }

    /// Phases a backward scroll can still return to before any lock latches.
    pub fn is_pre_explosion(self) -> bool {
        matches!(self, Self::Intro | Self::Star)
    }

    pub fn caption(self) -> &'static str {
        match self {
            Self::Intro => "You are drifting into deep space...",
            Self::Star => "There is the star, far away...",
            Self::Explosion => "The star explodes into a supernova!",
            Self::BlackHoleApproach => "A black hole is emerging...",
            Self::Inside => "You are inside the black hole. Time bends...",
        }
    }
}
