use crate::core::{Transform, Viewport};
use crate::error::PlotResult;
use crate::render::Renderer;

use super::PlotEngine;

impl<R: Renderer> PlotEngine<R> {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> PlotResult<()> {
        self.viewport = viewport.validate()?;
        Ok(())
    }

    /// Fits the current samples into `viewport`.
    ///
    /// `Ok(None)` means there is nothing to render.
    pub fn compute_transform(&self, viewport: Viewport) -> PlotResult<Option<Transform>> {
        if self.samples.is_empty() {
            return Ok(None);
        }
        Transform::fit(&self.samples, viewport).map(Some)
    }

    /// Fit against the configured viewport.
    pub fn transform(&self) -> PlotResult<Option<Transform>> {
        self.compute_transform(self.viewport)
    }

    /// Maps a data point into device pixels, before view rotation.
    pub fn map_to_device(&self, x: f64, y: f64) -> PlotResult<Option<(f64, f64)>> {
        Ok(self.transform()?.map(|t| t.to_device(x, y)))
    }

    pub fn map_to_data(&self, px: f64, py: f64) -> PlotResult<Option<(f64, f64)>> {
        Ok(self.transform()?.map(|t| t.to_data(px, py)))
    }
}
