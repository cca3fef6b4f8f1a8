use std::path::Path;

use crate::foundation::error::{SupernovaError, SupernovaResult};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One recorded scroll sample.
pub struct ScriptFrame {
    /// `null` means the surface had no value for this tick.
    pub offset: Option<f64>,
    /// Seconds since the script started.
    pub at_secs: f64,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Recorded scroll input, replayed tick by tick.
pub struct ScrollScript {
    pub frames: Vec<ScriptFrame>,
}

impl ScrollScript {
    #[tracing::instrument]
    pub fn from_path(path: &Path) -> SupernovaResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            SupernovaError::script(format!("read script '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(json: &str) -> SupernovaResult<Self> {
        let script: Self = serde_json::from_str(json)?;
        script.validate()?;
        Ok(script)
    }

    pub fn validate(&self) -> SupernovaResult<()> {
        if self.frames.is_empty() {
            return Err(SupernovaError::script("script has no frames"));
        }
        if self.frames.iter().any(|f| !f.at_secs.is_finite() || f.at_secs < 0.0) {
            return Err(SupernovaError::script("frame times must be finite and >= 0"));
        }
        if !self.frames.windows(2).all(|w| w[0].at_secs <= w[1].at_secs) {
            return Err(SupernovaError::script("frame times must be non-decreasing"));
        }
        Ok(())
    }

    /// Linear scroll from 0 to `to` over `ticks` frames at `fps`, then `hold_secs` at rest.
    pub fn ramp(to: f64, ticks: u32, fps: f64, hold_secs: f64) -> Self {
        let ticks = ticks.max(1);
        let fps = fps.max(1.0);
        let dt = 1.0 / fps;
        let mut frames: Vec<ScriptFrame> = (0..=ticks)
            .map(|i| ScriptFrame {
                offset: Some(to * f64::from(i) / f64::from(ticks)),
                at_secs: f64::from(i) * dt,
            })
            .collect();

        let start = f64::from(ticks) * dt;
        let hold_ticks = (hold_secs.max(0.0) * fps).ceil() as u32;
        frames.extend((1..=hold_ticks).map(|i| ScriptFrame {
            offset: Some(to),
            at_secs: start + f64::from(i) * dt,
        }));
        Self { frames }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/script.rs"]
mod tests;
