pub(crate) mod cpu;

use crate::{foundation::error::SupernovaResult, scene::SceneSnapshot};

/// A rendered frame as RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.data.get(i..i + 4).map(|px| [px[0], px[1], px[2], px[3]])
    }
}

/// The drawing side of the sequence.
///
/// Adapters get a read-only snapshot once per tick. A failing adapter never affects the
/// timeline: the [`crate::Player`] logs the error and keeps ticking.
pub trait RenderAdapter {
    fn draw(&mut self, frame: &SceneSnapshot<'_>) -> SupernovaResult<()>;
}

/// Draws nothing. Useful when only the state machine matters.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullAdapter;

impl RenderAdapter for NullAdapter {
    fn draw(&mut self, _frame: &SceneSnapshot<'_>) -> SupernovaResult<()> {
        Ok(())
    }
}

impl<A: RenderAdapter + ?Sized> RenderAdapter for &mut A {
    fn draw(&mut self, frame: &SceneSnapshot<'_>) -> SupernovaResult<()> {
        (**self).draw(frame)
    }
}
