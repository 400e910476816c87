mod frame;
mod null_renderer;
mod primitives;

pub use frame::{FrameLayer, FrameLayerKind, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, DashPattern, DevicePoint, LinePrimitive, PolygonPrimitive, PolylinePrimitive,
    TextHAlign, TextPrimitive,
};

use crate::error::PlotResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code stays
/// isolated from the numeric engine. Drawing-state save/restore around the
/// frame is the backend's business.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()>;
}
