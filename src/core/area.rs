use crate::core::types::Sample;

/// Area enclosed between the sampled curve and `y = 0` over `[left, right]`.
///
/// Trapezoids are accumulated between consecutive samples inside the
/// region. The stretches between each boundary (where the curve is zero)
/// and the nearest interior sample are added as partial triangles, so every
/// region is measured independently of its neighbours. Only the magnitude
/// is returned.
#[must_use]
pub fn signed_area(samples: &[Sample], left: f64, right: f64) -> f64 {
    let first = samples.partition_point(|s| s.x < left);
    let Some(head) = samples.get(first) else {
        return 0.0;
    };

    // Every term is doubled; halved once at the end.
    let mut doubled = 0.0;
    if head.y != 0.0 {
        doubled += head.y * (head.x - left);
    }

    let mut last = first;
    for i in first + 1..samples.len() {
        let (prev, current) = (samples[i - 1], samples[i]);
        if current.x > right {
            break;
        }
        doubled += (current.y + prev.y) * (current.x - prev.x);
        last = i;
    }

    let tail = samples[last];
    if tail.y != 0.0 {
        doubled += tail.y * (right - tail.x);
    }

    (doubled / 2.0).abs()
}

/// One area per pair of adjacent boundaries.
#[must_use]
pub fn region_areas(samples: &[Sample], boundaries: &[f64]) -> Vec<f64> {
    boundaries
        .windows(2)
        .map(|pair| signed_area(samples, pair[0], pair[1]))
        .collect()
}
