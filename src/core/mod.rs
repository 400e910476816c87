pub mod area;
pub mod digits;
pub mod regions;
pub mod rotation;
pub mod types;
pub mod viewport_mapper;

pub use area::{region_areas, signed_area};
pub use digits::{canonical_decimal, digit_string, is_strictly_increasing_digits};
pub use regions::{count_sign_changes, find_regions, interpolate_zero_crossing};
pub use rotation::{DeviceTransform, QUARTER_TURN_DEGREES, RotationController};
pub use types::{Axis, Bounds, Region, Sample, Viewport, is_sorted_by_x};
pub use viewport_mapper::Transform;
