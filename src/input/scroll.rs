use crate::{
    config::ScrollConfig,
    foundation::core::Timestamp,
    input::script::{ScriptFrame, ScrollScript},
};

/// Source of the raw scroll offset, sampled once per tick.
///
/// Samples are last-value-wins: intermediate positions between ticks are not queued.
pub trait ScrollSurface {
    /// `None` when the surface has nothing to report yet.
    fn sample(&mut self) -> Option<f64>;
}

/// Pixel scroll over a fixed number of viewport-high pages, eased toward its target.
#[derive(Clone, Debug)]
pub struct PagedScroll {
    pages: u32,
    page_height_px: f64,
    damping: f64,
    target_px: f64,
    current_px: f64,
}

impl PagedScroll {
    const SNAP_PX: f64 = 0.5;

    pub fn new(pages: u32, page_height_px: f64, damping: f64) -> Self {
        Self {
            pages: pages.max(2),
            page_height_px: page_height_px.max(1.0),
            damping: damping.clamp(0.0, 0.99),
            target_px: 0.0,
            current_px: 0.0,
        }
    }

    pub fn from_config(cfg: &ScrollConfig, page_height_px: f64) -> Self {
        Self::new(cfg.pages, page_height_px, cfg.damping)
    }

    /// Scrollable distance: the last page ends flush with the viewport.
    pub fn max_scroll_px(&self) -> f64 {
        f64::from(self.pages - 1) * self.page_height_px
    }

    pub fn scroll_to(&mut self, px: f64) {
        if px.is_finite() {
            self.target_px = px.clamp(0.0, self.max_scroll_px());
        }
    }

    pub fn scroll_by(&mut self, delta_px: f64) {
        self.scroll_to(self.target_px + delta_px);
    }

    pub fn target_px(&self) -> f64 {
        self.target_px
    }

    pub fn is_settled(&self) -> bool {
        self.current_px == self.target_px
    }
}

impl ScrollSurface for PagedScroll {
    fn sample(&mut self) -> Option<f64> {
        let remaining = self.target_px - self.current_px;
        if remaining.abs() < Self::SNAP_PX {
            self.current_px = self.target_px;
        } else {
            self.current_px += remaining * (1.0 - self.damping);
        }
        Some(self.current_px / self.max_scroll_px())
    }
}

/// Replays a [`ScrollScript`]; holds the last sample once the script runs out.
#[derive(Clone, Debug)]
pub struct ScriptedScroll {
    frames: Vec<ScriptFrame>,
    cursor: usize,
    last: Option<f64>,
}

impl ScriptedScroll {
    pub fn new(script: ScrollScript) -> Self {
        Self {
            frames: script.frames,
            cursor: 0,
            last: None,
        }
    }

    /// Timestamp of the frame the next `sample` call will return.
    pub fn next_time(&self) -> Option<Timestamp> {
        self.frames
            .get(self.cursor)
            .map(|f| Timestamp::from_secs_f64(f.at_secs))
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.frames.len()
    }

    pub fn remaining(&self) -> usize {
        self.frames.len().saturating_sub(self.cursor)
    }
}

impl ScrollSurface for ScriptedScroll {
    fn sample(&mut self) -> Option<f64> {
        if let Some(frame) = self.frames.get(self.cursor) {
            self.cursor += 1;
            self.last = frame.offset;
        }
        self.last
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/scroll.rs"]
mod tests;
