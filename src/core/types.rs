use std::fmt;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn validate(self) -> PlotResult<Self> {
        if !self.is_valid() {
            return Err(PlotError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    /// Geometric center in device pixels.
    #[must_use]
    pub fn center(self) -> (f64, f64) {
        (f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}

/// One `(x, y)` sample of the plotted function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Sample {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Returns `true` when samples are ordered by non-decreasing `x`.
#[must_use]
pub fn is_sorted_by_x(samples: &[Sample]) -> bool {
    samples.windows(2).all(|pair| pair[0].x <= pair[1].x)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Data-space extent of a sample sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Derives bounds from x-sorted samples.
    ///
    /// `min_x`/`max_x` come from the first and last sample; the y extent is a
    /// full scan. Returns `None` for an empty sequence.
    #[must_use]
    pub fn from_samples(samples: &[Sample]) -> Option<Self> {
        let first = samples.first()?;
        let last = samples.last()?;
        let min_y = samples.iter().map(|s| OrderedFloat(s.y)).min()?;
        let max_y = samples.iter().map(|s| OrderedFloat(s.y)).max()?;
        Some(Self {
            min_x: first.x,
            max_x: last.x,
            min_y: min_y.into_inner(),
            max_y: max_y.into_inner(),
        })
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.max_y - self.min_y
    }

    #[must_use]
    pub fn contains_x(self, x: f64) -> bool {
        self.min_x <= x && x <= self.max_x
    }

    #[must_use]
    pub fn contains_y(self, y: f64) -> bool {
        self.min_y <= y && y <= self.max_y
    }
}

/// Interval between two consecutive zero-crossing boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub index: usize,
    pub left: f64,
    pub right: f64,
}

impl Region {
    /// Pairs up adjacent boundaries into regions.
    #[must_use]
    pub fn from_boundaries(boundaries: &[f64]) -> Vec<Self> {
        boundaries
            .windows(2)
            .enumerate()
            .map(|(index, pair)| Self {
                index,
                left: pair[0],
                right: pair[1],
            })
            .collect()
    }

    #[must_use]
    pub fn midpoint(self) -> f64 {
        (self.left + self.right) / 2.0
    }

    /// Samples whose `x` lies inside `[left, right]`.
    #[must_use]
    pub fn samples_within(self, samples: &[Sample]) -> &[Sample] {
        let start = samples.partition_point(|s| s.x < self.left);
        let end = samples.partition_point(|s| s.x <= self.right);
        &samples[start..end.max(start)]
    }
}

#[cfg(test)]
mod tests {
    use super::{Bounds, Region, Sample, is_sorted_by_x};

    #[test]
    fn bounds_take_x_from_ends_and_scan_y() {
        let samples = [
            Sample::new(-1.0, 3.0),
            Sample::new(0.0, -4.0),
            Sample::new(2.0, 1.0),
        ];
        let bounds = Bounds::from_samples(&samples).expect("bounds");
        assert_eq!(bounds.min_x, -1.0);
        assert_eq!(bounds.max_x, 2.0);
        assert_eq!(bounds.min_y, -4.0);
        assert_eq!(bounds.max_y, 3.0);
    }

    #[test]
    fn bounds_are_absent_for_empty_samples() {
        assert!(Bounds::from_samples(&[]).is_none());
    }

    #[test]
    fn regions_pair_adjacent_boundaries() {
        let regions = Region::from_boundaries(&[0.0, 1.5, 4.0]);
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[1].left, 1.5);
        assert_eq!(regions[1].right, 4.0);
        assert_eq!(regions[1].midpoint(), 2.75);
        assert!(Region::from_boundaries(&[1.0]).is_empty());
    }

    #[test]
    fn region_slices_samples_inclusively() {
        let samples: Vec<Sample> = (0..6).map(|i| Sample::new(f64::from(i), 1.0)).collect();
        let region = Region {
            index: 0,
            left: 1.0,
            right: 3.5,
        };
        let inside = region.samples_within(&samples);
        assert_eq!(inside.len(), 3);
        assert_eq!(inside[0].x, 1.0);
        assert_eq!(inside[2].x, 3.0);
    }

    #[test]
    fn sortedness_check_allows_equal_x() {
        assert!(is_sorted_by_x(&[Sample::new(0.0, 1.0), Sample::new(0.0, 2.0)]));
        assert!(!is_sorted_by_x(&[Sample::new(1.0, 1.0), Sample::new(0.0, 2.0)]));
    }
}
