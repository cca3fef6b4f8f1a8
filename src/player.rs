use crate::{
    input::clock::Clock, input::scroll::ScrollSurface, render::RenderAdapter, scene::Scene,
    timeline::controller::TimelineState,
};

/// Drives a [`Scene`] from a render loop: one synchronous [`Player::step`] per frame.
#[derive(Debug)]
pub struct Player {
    scene: Scene,
    draw_failures: u64,
}

impl Player {
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            draw_failures: 0,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn into_scene(self) -> Scene {
        self.scene
    }

    /// Number of ticks whose draw call failed.
    pub fn draw_failures(&self) -> u64 {
        self.draw_failures
    }

    /// Sample, advance, draw. A draw failure is logged and counted; the tick still counts.
    pub fn step<S, C, A>(&mut self, surface: &mut S, clock: &C, adapter: &mut A) -> TimelineState
    where
        S: ScrollSurface + ?Sized,
        C: Clock + ?Sized,
        A: RenderAdapter + ?Sized,
    {
        let now = clock.now();
        let raw = surface.sample();
        let snapshot = self.scene.tick(raw, now);
        let state = snapshot.timeline;

        if let Err(err) = adapter.draw(&snapshot) {
            self.draw_failures += 1;
            tracing::warn!(
                tick = snapshot.tick,
                failures = self.draw_failures,
                error = %err,
                "render adapter failed; timeline continues"
            );
        }
        state
    }
}
