use crate::core::{Region, is_strictly_increasing_digits};
use crate::error::PlotResult;
use crate::render::Renderer;

use super::PlotEngine;

impl<R: Renderer> PlotEngine<R> {
    /// Zero-crossing boundaries of the current data, in traversal order.
    #[must_use]
    pub fn boundaries(&self) -> &[f64] {
        self.regions.boundaries()
    }

    #[must_use]
    pub fn regions(&self) -> Vec<Region> {
        self.regions.regions()
    }

    #[must_use]
    pub fn region_count(&self) -> usize {
        self.regions.region_count()
    }

    /// Cached area of region `region_index`.
    ///
    /// `Ok(None)` when there is no data; an index past the last region is an
    /// error.
    pub fn area_of(&self, region_index: usize) -> PlotResult<Option<f64>> {
        if self.samples.is_empty() {
            return Ok(None);
        }
        self.regions.area(region_index).map(Some)
    }

    #[must_use]
    pub fn areas(&self) -> &[f64] {
        self.regions.areas()
    }

    #[must_use]
    pub fn is_marked_sample(&self, y: f64) -> bool {
        is_strictly_increasing_digits(y)
    }
}
