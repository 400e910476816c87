use serde::{Deserialize, Serialize};

use crate::core::{DeviceTransform, Viewport};
use crate::error::PlotResult;
use crate::render::{LinePrimitive, PolygonPrimitive, PolylinePrimitive, TextPrimitive};

/// Drawing layers of one frame, in paint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameLayerKind {
    Axis,
    Curve,
    Markers,
    Regions,
}

impl FrameLayerKind {
    pub const PAINT_ORDER: [Self; 4] = [Self::Axis, Self::Curve, Self::Markers, Self::Regions];

    const fn paint_index(self) -> usize {
        match self {
            Self::Axis => 0,
            Self::Curve => 1,
            Self::Markers => 2,
            Self::Regions => 3,
        }
    }
}

/// Primitives of one layer. Inside a layer, polylines paint first, then
/// lines, polygons and texts, each in list order.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameLayer {
    pub kind: FrameLayerKind,
    pub polylines: Vec<PolylinePrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub polygons: Vec<PolygonPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl FrameLayer {
    #[must_use]
    pub fn empty(kind: FrameLayerKind) -> Self {
        Self {
            kind,
            polylines: Vec::new(),
            lines: Vec::new(),
            polygons: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polylines.is_empty()
            && self.lines.is_empty()
            && self.polygons.is_empty()
            && self.texts.is_empty()
    }

    fn validate(&self) -> PlotResult<()> {
        for polyline in &self.polylines {
            polyline.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for polygon in &self.polygons {
            polygon.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }
}

/// Backend-agnostic scene for one draw pass.
///
/// `device_transform` must be installed by the backend before any primitive
/// is drawn and dropped once the pass ends. Layers paint in
/// [`FrameLayerKind::PAINT_ORDER`].
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub device_transform: DeviceTransform,
    layers: [FrameLayer; 4],
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            device_transform: DeviceTransform::IDENTITY,
            layers: FrameLayerKind::PAINT_ORDER.map(FrameLayer::empty),
        }
    }

    #[must_use]
    pub fn with_device_transform(mut self, transform: DeviceTransform) -> Self {
        self.device_transform = transform;
        self
    }

    /// All layers in paint order.
    #[must_use]
    pub fn layers(&self) -> &[FrameLayer] {
        &self.layers
    }

    #[must_use]
    pub fn layer(&self, kind: FrameLayerKind) -> &FrameLayer {
        &self.layers[kind.paint_index()]
    }

    fn layer_mut(&mut self, kind: FrameLayerKind) -> &mut FrameLayer {
        &mut self.layers[kind.paint_index()]
    }

    pub fn push_polyline(&mut self, kind: FrameLayerKind, polyline: PolylinePrimitive) {
        self.layer_mut(kind).polylines.push(polyline);
    }

    pub fn push_line(&mut self, kind: FrameLayerKind, line: LinePrimitive) {
        self.layer_mut(kind).lines.push(line);
    }

    pub fn extend_lines(
        &mut self,
        kind: FrameLayerKind,
        lines: impl IntoIterator<Item = LinePrimitive>,
    ) {
        self.layer_mut(kind).lines.extend(lines);
    }

    pub fn push_polygon(&mut self, kind: FrameLayerKind, polygon: PolygonPrimitive) {
        self.layer_mut(kind).polygons.push(polygon);
    }

    pub fn push_text(&mut self, kind: FrameLayerKind, text: TextPrimitive) {
        self.layer_mut(kind).texts.push(text);
    }

    pub fn polylines(&self) -> impl Iterator<Item = &PolylinePrimitive> {
        self.layers.iter().flat_map(|layer| layer.polylines.iter())
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.layers.iter().flat_map(|layer| layer.lines.iter())
    }

    pub fn polygons(&self) -> impl Iterator<Item = &PolygonPrimitive> {
        self.layers.iter().flat_map(|layer| layer.polygons.iter())
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.layers.iter().flat_map(|layer| layer.texts.iter())
    }

    pub fn validate(&self) -> PlotResult<()> {
        self.viewport.validate()?;
        for layer in &self.layers {
            layer.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(FrameLayer::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::{FrameLayerKind, RenderFrame};
    use crate::core::Viewport;
    use crate::render::{Color, DevicePoint, LinePrimitive, TextHAlign, TextPrimitive};

    #[test]
    fn layers_are_listed_in_paint_order() {
        let frame = RenderFrame::new(Viewport::new(10, 10));
        let kinds: Vec<FrameLayerKind> = frame.layers().iter().map(|l| l.kind).collect();
        assert_eq!(kinds, FrameLayerKind::PAINT_ORDER.to_vec());
        assert!(frame.is_empty());
    }

    #[test]
    fn flattened_primitives_follow_layer_order_not_push_order() {
        let mut frame = RenderFrame::new(Viewport::new(100, 50));
        let marker = LinePrimitive::new(
            DevicePoint::new(1.0, 1.0),
            DevicePoint::new(2.0, 2.0),
            1.0,
            Color::GREEN,
        );
        let axis = LinePrimitive::new(
            DevicePoint::new(0.0, 25.0),
            DevicePoint::new(100.0, 25.0),
            2.0,
            Color::BLACK,
        );
        frame.push_line(FrameLayerKind::Markers, marker);
        frame.push_line(FrameLayerKind::Axis, axis);
        frame.push_text(
            FrameLayerKind::Axis,
            TextPrimitive::new(
                "x",
                DevicePoint::new(90.0, 15.0),
                12.0,
                Color::BLACK,
                TextHAlign::Right,
            ),
        );

        let lines: Vec<LinePrimitive> = frame.lines().copied().collect();
        assert_eq!(lines, vec![axis, marker]);
        assert_eq!(frame.layer(FrameLayerKind::Axis).texts.len(), 1);
        assert!(frame.layer(FrameLayerKind::Regions).is_empty());
        assert!(!frame.is_empty());
        frame.validate().expect("valid frame");
    }

    #[test]
    fn invalid_primitive_in_any_layer_fails_validation() {
        let mut frame = RenderFrame::new(Viewport::new(10, 10));
        frame.push_line(
            FrameLayerKind::Regions,
            LinePrimitive::new(
                DevicePoint::new(f64::NAN, 0.0),
                DevicePoint::new(1.0, 1.0),
                1.0,
                Color::BLACK,
            ),
        );
        assert!(frame.validate().is_err());
    }
}
