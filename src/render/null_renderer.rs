use crate::core::DeviceTransform;
use crate::error::PlotResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests catch invalid geometry without a
/// real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_polyline_count: usize,
    pub last_line_count: usize,
    pub last_polygon_count: usize,
    pub last_text_count: usize,
    pub last_device_transform: Option<DeviceTransform>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_polyline_count = frame.polylines().count();
        self.last_line_count = frame.lines().count();
        self.last_polygon_count = frame.polygons().count();
        self.last_text_count = frame.texts().count();
        self.last_device_transform = Some(frame.device_transform);
        Ok(())
    }
}
