use serde::{Deserialize, Serialize};

use crate::core::types::Viewport;

pub const QUARTER_TURN_DEGREES: f64 = 90.0;
const FULL_TURN_STEPS: i8 = 4;

/// Discrete view rotation in quarter-turn steps.
///
/// The step counter stays within `[-3, 3]`: reaching a full turn in either
/// direction collapses it back to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RotationController {
    steps: i8,
}

impl RotationController {
    #[must_use]
    pub fn steps(self) -> i8 {
        self.steps
    }

    pub fn turn_left(&mut self) {
        self.steps -= 1;
        if self.steps == -FULL_TURN_STEPS {
            self.steps = 0;
        }
    }

    pub fn turn_right(&mut self) {
        self.steps += 1;
        if self.steps == FULL_TURN_STEPS {
            self.steps = 0;
        }
    }

    pub fn reset(&mut self) {
        self.steps = 0;
    }

    #[must_use]
    pub fn is_identity(self) -> bool {
        self.steps == 0
    }

    #[must_use]
    pub fn angle_degrees(self) -> f64 {
        f64::from(self.steps) * QUARTER_TURN_DEGREES
    }

    #[must_use]
    pub fn angle_radians(self) -> f64 {
        f64::from(self.steps) * std::f64::consts::FRAC_PI_2
    }

    /// Rotation about the viewport center, applied before any drawing.
    #[must_use]
    pub fn device_transform(self, viewport: Viewport) -> DeviceTransform {
        if self.is_identity() {
            return DeviceTransform::IDENTITY;
        }
        let (cos, sin) = match self.steps.rem_euclid(FULL_TURN_STEPS) {
            0 => (1.0, 0.0),
            1 => (0.0, 1.0),
            2 => (-1.0, 0.0),
            _ => (0.0, -1.0),
        };
        let (cx, cy) = viewport.center();
        DeviceTransform::rotation_about(cos, sin, cx, cy)
    }
}

/// 2D affine map in device space.
///
/// `x' = xx * x + xy * y + tx`, `y' = yx * x + yy * y + ty`. With `y`
/// pointing down, a positive angle turns clockwise on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeviceTransform {
    pub xx: f64,
    pub xy: f64,
    pub yx: f64,
    pub yy: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for DeviceTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl DeviceTransform {
    pub const IDENTITY: Self = Self {
        xx: 1.0,
        xy: 0.0,
        yx: 0.0,
        yy: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    #[must_use]
    pub fn rotation_about(cos: f64, sin: f64, cx: f64, cy: f64) -> Self {
        Self {
            xx: cos,
            xy: -sin,
            yx: sin,
            yy: cos,
            tx: cx - cos * cx + sin * cy,
            ty: cy - sin * cx - cos * cy,
        }
    }

    #[must_use]
    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }

    #[must_use]
    pub fn apply(self, x: f64, y: f64) -> (f64, f64) {
        (
            self.xx * x + self.xy * y + self.tx,
            self.yx * x + self.yy * y + self.ty,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{DeviceTransform, RotationController};
    use crate::core::Viewport;

    #[test]
    fn four_turns_in_either_direction_return_to_zero() {
        let mut rotation = RotationController::default();
        for expected in [1, 2, 3, 0] {
            rotation.turn_right();
            assert_eq!(rotation.steps(), expected);
        }
        for expected in [-1, -2, -3, 0] {
            rotation.turn_left();
            assert_eq!(rotation.steps(), expected);
        }
    }

    #[test]
    fn opposite_turns_cancel() {
        let mut rotation = RotationController::default();
        rotation.turn_left();
        rotation.turn_right();
        assert!(rotation.is_identity());
        assert_eq!(rotation.angle_degrees(), 0.0);
    }

    #[test]
    fn angle_follows_step_count() {
        let mut rotation = RotationController::default();
        rotation.turn_left();
        rotation.turn_left();
        assert_eq!(rotation.angle_degrees(), -180.0);
        assert!((rotation.angle_radians() + std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn identity_when_not_rotated() {
        let transform = RotationController::default().device_transform(Viewport::new(200, 100));
        assert!(transform.is_identity());
        assert_eq!(transform.apply(3.0, 4.0), (3.0, 4.0));
    }

    #[test]
    fn quarter_turn_right_is_clockwise_about_center() {
        let mut rotation = RotationController::default();
        rotation.turn_right();
        let transform = rotation.device_transform(Viewport::new(200, 100));

        assert_eq!(transform.apply(100.0, 50.0), (100.0, 50.0));
        // Right of center moves below center.
        assert_eq!(transform.apply(150.0, 50.0), (100.0, 100.0));
        // Above center moves right of center.
        assert_eq!(transform.apply(100.0, 0.0), (150.0, 50.0));
    }

    #[test]
    fn left_turn_matches_three_right_turns() {
        let viewport = Viewport::new(300, 120);
        let mut left = RotationController::default();
        left.turn_left();
        let mut right = RotationController::default();
        for _ in 0..3 {
            right.turn_right();
        }
        assert_eq!(
            left.device_transform(viewport),
            right.device_transform(viewport)
        );
        assert_ne!(left.device_transform(viewport), DeviceTransform::IDENTITY);
    }
}
