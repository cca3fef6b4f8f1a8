//! Supernova is a scroll-driven cinematic sequence: starfield, star, supernova explosion,
//! black hole, interior.
//!
//! The crate owns the state machine behind the sequence and nothing that needs a GPU.
//! Drawing is delegated to a [`RenderAdapter`]; a headless [`CpuPreview`] adapter is
//! included for diagnostics.
//!
//! # Tick overview
//!
//! 1. **Sample**: one [`ScrollSurface`] read and one [`Clock`] read per tick (last value wins)
//! 2. **Gate**: [`ScrollLockGate`] clamps the raw offset once the one-way locks have latched
//! 3. **Advance**: [`Timeline`] derives the [`Phase`], black-hole scale, lock flags and recoil
//! 4. **Animate**: [`Scene`] steps the supernova, its [`ParticleBurst`] and the rotations
//! 5. **Draw**: the adapter receives a read-only [`SceneSnapshot`]
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Infallible tick**: inputs are sanitized and invariants clamped; only loading and
//!   drawing return errors.
//! - **Deterministic-by-default**: time is injected and randomness is seeded, so identical
//!   input history produces identical state.
#![forbid(unsafe_code)]

mod config;
mod effects;
mod foundation;
mod input;
mod player;
mod render;
mod scene;
mod timeline;

pub use config::{
    BlackHoleConfig, BurstConfig, DepthConfig, PhaseThresholds, RecoilConfig, ScrollConfig,
    SequenceConfig, StarConfig, StarfieldConfig, SupernovaConfig,
};
pub use effects::burst::{Particle, ParticleBurst};
pub use effects::starfield::Starfield;
pub use effects::supernova::Supernova;
pub use foundation::core::{GroupTransform, ScrollOffset, Timestamp, Vec3};
pub use foundation::error::{SupernovaError, SupernovaResult};
pub use foundation::math::{Ease, clamp01, inverse_lerp, lerp};
pub use foundation::rng::Rng64;
pub use input::clock::{Clock, ManualClock, SystemClock};
pub use input::scroll::{PagedScroll, ScriptedScroll, ScrollSurface};
pub use input::script::{ScriptFrame, ScrollScript};
pub use player::Player;
pub use render::cpu::CpuPreview;
pub use render::{FrameRGBA, NullAdapter, RenderAdapter};
pub use scene::{
    BlackHoleView, Scene, SceneSnapshot, StarView, StarfieldView, SupernovaView,
};
pub use timeline::controller::{Timeline, TimelineState};
pub use timeline::lock::ScrollLockGate;
pub use timeline::phase::Phase;
pub use timeline::recoil::{RecoilAnimator, RecoilSample};
