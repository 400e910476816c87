use serde::{Deserialize, Serialize};

use crate::core::{Transform, Viewport};
use crate::error::PlotResult;
use crate::render::Renderer;

use super::{DisplayFlags, PlotEngine};

/// Serializable view of the engine's derived state, for diagnostics and
/// regression fixtures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSnapshot {
    pub data_version: u64,
    pub viewport: Viewport,
    pub sample_count: usize,
    pub boundaries: Vec<f64>,
    pub areas: Vec<f64>,
    pub marked_sample_count: usize,
    pub rotation_steps: i8,
    pub display: DisplayFlags,
    #[serde(default)]
    pub transform: Option<Transform>,
}

impl<R: Renderer> PlotEngine<R> {
    /// Captures the current derived state.
    ///
    /// Fails only when the data cannot be fitted to the viewport.
    pub fn snapshot(&self) -> PlotResult<PlotSnapshot> {
        Ok(PlotSnapshot {
            data_version: self.data_version(),
            viewport: self.viewport,
            sample_count: self.samples.len(),
            boundaries: self.boundaries().to_vec(),
            areas: self.areas().to_vec(),
            marked_sample_count: self
                .samples
                .iter()
                .filter(|s| self.is_marked_sample(s.y))
                .count(),
            rotation_steps: self.rotation.steps(),
            display: self.display,
            transform: self.transform()?,
        })
    }
}
