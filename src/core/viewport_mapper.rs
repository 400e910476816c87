use serde::{Deserialize, Serialize};

use crate::core::types::{Axis, Bounds, Sample, Viewport};
use crate::error::{PlotError, PlotResult};

/// Uniform-scale mapping from data space into device space.
///
/// Device space has its origin at the top-left corner with `y` growing
/// downward, so `origin_y` is the (adjusted) top of the data range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    scale: f64,
    bounds: Bounds,
}

impl Transform {
    /// Fits x-sorted samples into `viewport` without stretching either axis.
    ///
    /// The axis that does not limit the scale gets its data range padded
    /// symmetrically so that it also spans the full viewport.
    pub fn fit(samples: &[Sample], viewport: Viewport) -> PlotResult<Self> {
        let viewport = viewport.validate()?;
        let bounds = Bounds::from_samples(samples).ok_or(PlotError::EmptySamples)?;
        Self::fit_bounds(bounds, viewport)
    }

    pub fn fit_bounds(bounds: Bounds, viewport: Viewport) -> PlotResult<Self> {
        let viewport = viewport.validate()?;
        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        let (span_x, scale_x) = checked_span(bounds.width(), width, Axis::X)?;
        let (span_y, scale_y) = checked_span(bounds.height(), height, Axis::Y)?;
        let scale = scale_x.min(scale_y);

        let mut adjusted = bounds;
        if scale == scale_x {
            let pad = (height / scale - span_y) / 2.0;
            adjusted.max_y += pad;
            adjusted.min_y -= pad;
        } else if scale == scale_y {
            let pad = (width / scale - span_x) / 2.0;
            adjusted.max_x += pad;
            adjusted.min_x -= pad;
        }

        Ok(Self {
            scale,
            bounds: adjusted,
        })
    }

    #[must_use]
    pub fn scale(self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn origin_x(self) -> f64 {
        self.bounds.min_x
    }

    #[must_use]
    pub fn origin_y(self) -> f64 {
        self.bounds.max_y
    }

    /// Data range after fit padding; this is what the viewport shows.
    #[must_use]
    pub fn bounds(self) -> Bounds {
        self.bounds
    }

    #[must_use]
    pub fn to_device(self, x: f64, y: f64) -> (f64, f64) {
        (
            (x - self.origin_x()) * self.scale,
            (self.origin_y() - y) * self.scale,
        )
    }

    #[must_use]
    pub fn sample_to_device(self, sample: Sample) -> (f64, f64) {
        self.to_device(sample.x, sample.y)
    }

    /// Inverse of [`Transform::to_device`].
    #[must_use]
    pub fn to_data(self, px: f64, py: f64) -> (f64, f64) {
        (
            px / self.scale + self.origin_x(),
            self.origin_y() - py / self.scale,
        )
    }
}

/// Returns the span with its per-axis scale; spans too small to give a
/// finite scale count as degenerate.
fn checked_span(span: f64, extent: f64, axis: Axis) -> PlotResult<(f64, f64)> {
    let scale = extent / span;
    if !span.is_finite() || span <= 0.0 || !scale.is_finite() {
        return Err(PlotError::DegenerateRange { axis, span });
    }
    Ok((span, scale))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::Transform;
    use crate::core::{Axis, Sample, Viewport};
    use crate::error::PlotError;

    #[test]
    fn wide_data_pads_y_range() {
        let samples = [Sample::new(0.0, 0.0), Sample::new(10.0, 1.0)];
        let transform = Transform::fit(&samples, Viewport::new(100, 100)).expect("fit");

        assert_relative_eq!(transform.scale(), 10.0);
        let bounds = transform.bounds();
        assert_relative_eq!(bounds.min_x, 0.0);
        assert_relative_eq!(bounds.max_x, 10.0);
        assert_relative_eq!(bounds.min_y, -4.5);
        assert_relative_eq!(bounds.max_y, 5.5);
    }

    #[test]
    fn tall_data_pads_x_range() {
        let samples = [Sample::new(0.0, 0.0), Sample::new(1.0, 10.0)];
        let transform = Transform::fit(&samples, Viewport::new(200, 100)).expect("fit");

        assert_relative_eq!(transform.scale(), 10.0);
        let bounds = transform.bounds();
        assert_relative_eq!(bounds.min_x, -9.5);
        assert_relative_eq!(bounds.max_x, 10.5);
        assert_relative_eq!(bounds.min_y, 0.0);
        assert_relative_eq!(bounds.max_y, 10.0);
    }

    #[test]
    fn exact_fit_leaves_ranges_untouched() {
        let samples = [Sample::new(0.0, 0.0), Sample::new(4.0, 2.0)];
        let transform = Transform::fit(&samples, Viewport::new(400, 200)).expect("fit");

        assert_relative_eq!(transform.scale(), 100.0);
        let bounds = transform.bounds();
        assert_eq!(bounds.min_y, 0.0);
        assert_eq!(bounds.max_y, 2.0);
        assert_eq!(bounds.min_x, 0.0);
        assert_eq!(bounds.max_x, 4.0);
    }

    #[test]
    fn device_y_is_flipped() {
        let samples = [Sample::new(0.0, 0.0), Sample::new(10.0, 10.0)];
        let transform = Transform::fit(&samples, Viewport::new(100, 100)).expect("fit");

        assert_eq!(transform.to_device(0.0, 10.0), (0.0, 0.0));
        assert_eq!(transform.to_device(10.0, 0.0), (100.0, 100.0));
        let (x, y) = transform.to_data(50.0, 25.0);
        assert_relative_eq!(x, 5.0);
        assert_relative_eq!(y, 7.5);
    }

    #[test]
    fn single_sample_is_degenerate() {
        let err = Transform::fit(&[Sample::new(1.0, 1.0)], Viewport::new(10, 10))
            .expect_err("single sample must not fit");
        assert!(matches!(
            err,
            PlotError::DegenerateRange { axis: Axis::X, .. }
        ));
    }

    #[test]
    fn flat_curve_is_degenerate_on_y() {
        let samples = [Sample::new(0.0, 3.0), Sample::new(1.0, 3.0)];
        let err = Transform::fit(&samples, Viewport::new(10, 10)).expect_err("flat curve");
        assert!(matches!(
            err,
            PlotError::DegenerateRange { axis: Axis::Y, .. }
        ));
        assert!(format!("{err}").contains("degenerate y range"));
    }

    #[test]
    fn subnormal_spans_are_degenerate() {
        let tiny = f64::from_bits(1);
        let samples = [Sample::new(0.0, 0.0), Sample::new(tiny, tiny)];
        let err = Transform::fit(&samples, Viewport::new(800, 600)).expect_err("infinite scale");
        assert!(matches!(
            err,
            PlotError::DegenerateRange { axis: Axis::X, span } if span == tiny
        ));

        let samples = [Sample::new(0.0, 0.0), Sample::new(1.0, tiny)];
        assert!(matches!(
            Transform::fit(&samples, Viewport::new(800, 600)),
            Err(PlotError::DegenerateRange { axis: Axis::Y, .. })
        ));
    }

    #[test]
    fn empty_samples_and_zero_viewport_are_rejected() {
        assert!(matches!(
            Transform::fit(&[], Viewport::new(10, 10)),
            Err(PlotError::EmptySamples)
        ));
        let samples = [Sample::new(0.0, 0.0), Sample::new(1.0, 1.0)];
        assert!(matches!(
            Transform::fit(&samples, Viewport::new(0, 10)),
            Err(PlotError::InvalidViewport { .. })
        ));
    }
}
