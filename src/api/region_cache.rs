use crate::core::{Region, Sample, find_regions, region_areas};
use crate::error::{PlotError, PlotResult};

/// Boundaries and per-region areas derived from one data version.
///
/// Rebuilt wholesale whenever the sample sequence is replaced, so a cache
/// never outlives the data it was computed from.
#[derive(Debug, Clone, Default, PartialEq)]
pub(super) struct RegionCache {
    data_version: u64,
    boundaries: Vec<f64>,
    areas: Vec<f64>,
}

impl RegionCache {
    pub(super) fn rebuild(samples: &[Sample], data_version: u64) -> Self {
        let boundaries = find_regions(samples);
        let areas = region_areas(samples, &boundaries);
        Self {
            data_version,
            boundaries,
            areas,
        }
    }

    pub(super) fn data_version(&self) -> u64 {
        self.data_version
    }

    pub(super) fn boundaries(&self) -> &[f64] {
        &self.boundaries
    }

    pub(super) fn areas(&self) -> &[f64] {
        &self.areas
    }

    pub(super) fn region_count(&self) -> usize {
        self.areas.len()
    }

    pub(super) fn regions(&self) -> Vec<Region> {
        Region::from_boundaries(&self.boundaries)
    }

    pub(super) fn area(&self, index: usize) -> PlotResult<f64> {
        self.areas
            .get(index)
            .copied()
            .ok_or(PlotError::RegionIndexOutOfRange {
                index,
                count: self.areas.len(),
            })
    }
}
