use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{PlotError, PlotResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> PlotResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(PlotError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Point in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DevicePoint {
    pub x: f64,
    pub y: f64,
}

impl DevicePoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn shifted(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for DevicePoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Alternating dash/gap lengths in pixels; empty means a solid stroke.
pub type DashPattern = SmallVec<[f64; 10]>;

fn validate_dash(dash: &[f64]) -> PlotResult<()> {
    if dash.iter().any(|len| !len.is_finite() || *len < 0.0) {
        return Err(PlotError::InvalidData(
            "dash lengths must be finite and >= 0".to_owned(),
        ));
    }
    if !dash.is_empty() && dash.iter().all(|len| *len == 0.0) {
        return Err(PlotError::InvalidData(
            "dash pattern must contain a non-zero length".to_owned(),
        ));
    }
    Ok(())
}

fn validate_stroke_width(stroke_width: f64) -> PlotResult<()> {
    if !stroke_width.is_finite() || stroke_width <= 0.0 {
        return Err(PlotError::InvalidData(
            "stroke width must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub from: DevicePoint,
    pub to: DevicePoint,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(from: DevicePoint, to: DevicePoint, stroke_width: f64, color: Color) -> Self {
        Self {
            from,
            to,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> PlotResult<()> {
        if !self.from.is_finite() || !self.to.is_finite() {
            return Err(PlotError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        validate_stroke_width(self.stroke_width)?;
        self.color.validate()
    }
}

/// Open, optionally dashed path through consecutive points.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylinePrimitive {
    pub points: Vec<DevicePoint>,
    pub stroke_width: f64,
    pub color: Color,
    pub dash: DashPattern,
}

impl PolylinePrimitive {
    pub fn validate(&self) -> PlotResult<()> {
        if self.points.is_empty() {
            return Err(PlotError::InvalidData(
                "polyline must contain at least one point".to_owned(),
            ));
        }
        if self.points.iter().any(|p| !p.is_finite()) {
            return Err(PlotError::InvalidData(
                "polyline coordinates must be finite".to_owned(),
            ));
        }
        validate_stroke_width(self.stroke_width)?;
        validate_dash(&self.dash)?;
        self.color.validate()
    }
}

/// Filled polygon.
///
/// `vertices` is explicitly closed: the last vertex repeats the first one so
/// backends need no implicit closure rule.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonPrimitive {
    pub vertices: Vec<DevicePoint>,
    pub fill: Color,
    pub outline: Option<(f64, Color)>,
}

impl PolygonPrimitive {
    /// Builds a polygon and appends the closing vertex.
    #[must_use]
    pub fn closed(mut vertices: Vec<DevicePoint>, fill: Color) -> Self {
        if let Some(first) = vertices.first().copied() {
            vertices.push(first);
        }
        Self {
            vertices,
            fill,
            outline: None,
        }
    }

    #[must_use]
    pub fn with_outline(mut self, stroke_width: f64, color: Color) -> Self {
        self.outline = Some((stroke_width, color));
        self
    }

    pub fn validate(&self) -> PlotResult<()> {
        if self.vertices.len() < 4 {
            return Err(PlotError::InvalidData(
                "closed polygon needs at least three distinct vertices".to_owned(),
            ));
        }
        if self.vertices.first() != self.vertices.last() {
            return Err(PlotError::InvalidData(
                "polygon must be explicitly closed".to_owned(),
            ));
        }
        if self.vertices.iter().any(|p| !p.is_finite()) {
            return Err(PlotError::InvalidData(
                "polygon coordinates must be finite".to_owned(),
            ));
        }
        if let Some((stroke_width, color)) = self.outline {
            validate_stroke_width(stroke_width)?;
            color.validate()?;
        }
        self.fill.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        anchor: DevicePoint,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x: anchor.x,
            y: anchor.y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> PlotResult<()> {
        if self.text.is_empty() {
            return Err(PlotError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(PlotError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(PlotError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;

    use super::{Color, DevicePoint, PolygonPrimitive, PolylinePrimitive};

    #[test]
    fn closed_polygon_repeats_first_vertex() {
        let polygon = PolygonPrimitive::closed(
            vec![
                DevicePoint::new(0.0, 0.0),
                DevicePoint::new(1.0, 0.0),
                DevicePoint::new(1.0, 1.0),
            ],
            Color::BLACK,
        );
        assert_eq!(polygon.vertices.len(), 4);
        assert_eq!(polygon.vertices[0], polygon.vertices[3]);
        polygon.validate().expect("valid polygon");
    }

    #[test]
    fn color_channels_out_of_range_are_rejected() {
        let err = Color::rgba(1.5, 0.0, 0.0, 1.0)
            .validate()
            .expect_err("red > 1");
        assert!(format!("{err}").contains("red"));
    }

    #[test]
    fn dash_pattern_of_zeros_is_rejected() {
        let polyline = PolylinePrimitive {
            points: vec![DevicePoint::new(0.0, 0.0), DevicePoint::new(1.0, 1.0)],
            stroke_width: 1.0,
            color: Color::RED,
            dash: smallvec![0.0, 0.0],
        };
        assert!(polyline.validate().is_err());
    }
}
