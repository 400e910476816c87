use crate::core::types::Sample;

/// Scans x-sorted samples for points where the curve touches or crosses zero.
///
/// Exact zeros contribute their own `x`. A strict sign change between two
/// neighbours contributes the linearly interpolated crossing. Boundaries are
/// emitted in traversal order.
#[must_use]
pub fn find_regions(samples: &[Sample]) -> Vec<f64> {
    let mut boundaries = Vec::new();
    let Some(first) = samples.first() else {
        return boundaries;
    };
    if first.y == 0.0 {
        boundaries.push(first.x);
    }

    for pair in samples.windows(2) {
        let (prev, current) = (pair[0], pair[1]);
        if current.y == 0.0 {
            boundaries.push(current.x);
            continue;
        }
        if prev.y * current.y < 0.0 {
            boundaries.push(interpolate_zero_crossing(prev, current));
        }
    }
    boundaries
}

/// Zero of the straight line through two samples of opposite sign.
#[must_use]
pub fn interpolate_zero_crossing(prev: Sample, current: Sample) -> f64 {
    (current.x * prev.y - prev.x * current.y) / (prev.y - current.y)
}

/// Number of strict sign changes between neighbouring samples.
#[must_use]
pub fn count_sign_changes(samples: &[Sample]) -> usize {
    samples
        .windows(2)
        .filter(|pair| pair[0].y * pair[1].y < 0.0)
        .count()
}
