use ordered_float::OrderedFloat;
use smallvec::SmallVec;
use tracing::trace;

use crate::core::{Region, Sample, Transform, Viewport, is_strictly_increasing_digits};
use crate::render::{
    Color, DashPattern, DevicePoint, FrameLayerKind, LinePrimitive, PolygonPrimitive,
    PolylinePrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::{DisplayFlags, PlotStyle};

/// Inputs for one frame, borrowed from the engine.
pub(super) struct RenderFrameBuilder<'a> {
    pub(super) samples: &'a [Sample],
    pub(super) transform: Transform,
    pub(super) regions: Vec<Region>,
    pub(super) areas: &'a [f64],
    pub(super) display: DisplayFlags,
    pub(super) style: &'a PlotStyle,
}

impl RenderFrameBuilder<'_> {
    pub(super) fn build(&self, viewport: Viewport) -> RenderFrame {
        let mut frame = RenderFrame::new(viewport);
        if self.display.show_axis {
            self.push_axes(&mut frame);
        }
        self.push_curve(&mut frame);
        if self.display.show_markers {
            self.push_markers(&mut frame);
        }
        if self.display.show_regions {
            self.push_regions(&mut frame);
        }
        frame
    }

    fn point(&self, x: f64, y: f64) -> DevicePoint {
        DevicePoint::from(self.transform.to_device(x, y))
    }

    fn push_axes(&self, frame: &mut RenderFrame) {
        let bounds = self.transform.bounds();
        let style = self.style;
        let color = style.axis_color;
        let arrow_len = style.axis_arrow_length_px;
        let half = style.axis_arrow_half_width_px;

        if bounds.contains_x(0.0) {
            let tip = self.point(0.0, bounds.max_y);
            frame.push_line(
                FrameLayerKind::Axis,
                LinePrimitive::new(
                    tip,
                    self.point(0.0, bounds.min_y),
                    style.axis_stroke_width,
                    color,
                ),
            );
            frame.push_polygon(
                FrameLayerKind::Axis,
                PolygonPrimitive::closed(
                    vec![
                        tip,
                        tip.shifted(half, arrow_len),
                        tip.shifted(-half, arrow_len),
                    ],
                    color,
                )
                .with_outline(style.axis_stroke_width, color),
            );
            frame.push_text(
                FrameLayerKind::Axis,
                TextPrimitive::new(
                    "y",
                    tip.shifted(style.axis_label_offset_px, style.axis_label_font_size_px),
                    style.axis_label_font_size_px,
                    color,
                    TextHAlign::Left,
                ),
            );
        }

        if bounds.contains_y(0.0) {
            let tip = self.point(bounds.max_x, 0.0);
            frame.push_line(
                FrameLayerKind::Axis,
                LinePrimitive::new(
                    self.point(bounds.min_x, 0.0),
                    tip,
                    style.axis_stroke_width,
                    color,
                ),
            );
            frame.push_polygon(
                FrameLayerKind::Axis,
                PolygonPrimitive::closed(
                    vec![
                        tip,
                        tip.shifted(-arrow_len, -half),
                        tip.shifted(-arrow_len, half),
                    ],
                    color,
                )
                .with_outline(style.axis_stroke_width, color),
            );
            frame.push_text(
                FrameLayerKind::Axis,
                TextPrimitive::new(
                    "x",
                    tip.shifted(-style.axis_label_offset_px, -style.axis_label_offset_px),
                    style.axis_label_font_size_px,
                    color,
                    TextHAlign::Right,
                ),
            );
        }
    }

    fn push_curve(&self, frame: &mut RenderFrame) {
        let points = self
            .samples
            .iter()
            .map(|s| DevicePoint::from(self.transform.sample_to_device(*s)))
            .collect();
        frame.push_polyline(
            FrameLayerKind::Curve,
            PolylinePrimitive {
                points,
                stroke_width: self.style.curve_stroke_width,
                color: self.style.curve_color,
                dash: DashPattern::from_slice(&self.style.curve_dash),
            },
        );
    }

    fn push_markers(&self, frame: &mut RenderFrame) {
        let style = self.style;
        for sample in self.samples {
            let color = if is_strictly_increasing_digits(sample.y) {
                style.marker_highlight_color
            } else {
                style.marker_color
            };
            let center = DevicePoint::from(self.transform.sample_to_device(*sample));
            frame.extend_lines(
                FrameLayerKind::Markers,
                marker_lines(
                    center,
                    style.marker_half_size_px,
                    style.marker_stroke_width,
                    color,
                ),
            );
        }
    }

    fn push_regions(&self, frame: &mut RenderFrame) {
        let style = self.style;
        for (region, area) in self.regions.iter().zip(self.areas) {
            let inside = region.samples_within(self.samples);
            if inside.is_empty() {
                trace!(index = region.index, "skipping region without interior samples");
                continue;
            }

            let mut vertices = Vec::with_capacity(inside.len() + 2);
            vertices.push(self.point(region.left, 0.0));
            vertices.extend(inside.iter().map(|s| self.point(s.x, s.y)));
            vertices.push(self.point(region.right, 0.0));
            frame.push_polygon(
                FrameLayerKind::Regions,
                PolygonPrimitive::closed(vertices, style.region_fill_color)
                    .with_outline(style.region_outline_width, style.region_fill_color),
            );

            let peak_y = inside
                .iter()
                .map(|s| s.y)
                .max_by_key(|y| OrderedFloat(y.abs()))
                .unwrap_or(0.0);
            let anchor = self.point(region.midpoint(), 0.0);
            let peak_px = self.point(region.midpoint(), peak_y).y;
            frame.push_text(
                FrameLayerKind::Regions,
                TextPrimitive::new(
                    format_area(*area, style.area_label_precision),
                    DevicePoint::new(anchor.x, (anchor.y + peak_px) / 2.0),
                    style.region_label_font_size_px,
                    style.region_label_color,
                    TextHAlign::Center,
                ),
            );
        }
    }
}

/// Horizontal, vertical and both diagonal strokes of a star marker.
fn marker_lines(
    center: DevicePoint,
    half: f64,
    stroke_width: f64,
    color: Color,
) -> SmallVec<[LinePrimitive; 4]> {
    [(half, 0.0), (0.0, half), (half, half), (half, -half)]
        .into_iter()
        .map(|(dx, dy)| {
            LinePrimitive::new(
                center.shifted(-dx, -dy),
                center.shifted(dx, dy),
                stroke_width,
                color,
            )
        })
        .collect()
}

fn format_area(area: f64, precision: usize) -> String {
    format!("{area:.precision$}")
}
