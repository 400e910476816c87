use tracing::trace;

use crate::core::DeviceTransform;
use crate::render::Renderer;

use super::PlotEngine;

impl<R: Renderer> PlotEngine<R> {
    pub fn turn_left(&mut self) {
        self.rotation.turn_left();
        trace!(steps = self.rotation.steps(), "turn left");
    }

    pub fn turn_right(&mut self) {
        self.rotation.turn_right();
        trace!(steps = self.rotation.steps(), "turn right");
    }

    pub fn reset_rotation(&mut self) {
        self.rotation.reset();
    }

    /// Current view rotation in degrees, a multiple of 90 in `[-270, 270]`.
    #[must_use]
    pub fn rotation_angle(&self) -> f64 {
        self.rotation.angle_degrees()
    }

    #[must_use]
    pub fn rotation_steps(&self) -> i8 {
        self.rotation.steps()
    }

    /// Device-space rotation about the viewport center for the next frame.
    #[must_use]
    pub fn device_transform(&self) -> DeviceTransform {
        self.rotation.device_transform(self.viewport)
    }
}
