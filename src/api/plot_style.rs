use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};
use crate::render::Color;

/// Default dash pattern for the curve stroke (dash, gap, dash, gap, ...).
pub const DEFAULT_CURVE_DASH: [f64; 10] = [3.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 2.0, 1.0];

/// Which overlays the frame builder emits.
///
/// These flags never influence the numeric engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayFlags {
    pub show_axis: bool,
    pub show_markers: bool,
    pub show_regions: bool,
}

impl Default for DisplayFlags {
    fn default() -> Self {
        Self {
            show_axis: true,
            show_markers: true,
            show_regions: false,
        }
    }
}

/// Colors, strokes and label sizing used when building render frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotStyle {
    pub curve_color: Color,
    pub curve_stroke_width: f64,
    /// Empty means solid.
    pub curve_dash: Vec<f64>,
    pub axis_color: Color,
    pub axis_stroke_width: f64,
    pub axis_arrow_length_px: f64,
    pub axis_arrow_half_width_px: f64,
    pub axis_label_font_size_px: f64,
    pub axis_label_offset_px: f64,
    pub marker_color: Color,
    /// Used for samples whose digits strictly increase.
    pub marker_highlight_color: Color,
    pub marker_stroke_width: f64,
    pub marker_half_size_px: f64,
    pub region_fill_color: Color,
    pub region_outline_width: f64,
    pub region_label_color: Color,
    pub region_label_font_size_px: f64,
    pub area_label_precision: usize,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            curve_color: Color::RED,
            curve_stroke_width: 2.0,
            curve_dash: DEFAULT_CURVE_DASH.to_vec(),
            axis_color: Color::BLACK,
            axis_stroke_width: 2.0,
            axis_arrow_length_px: 20.0,
            axis_arrow_half_width_px: 5.0,
            axis_label_font_size_px: 36.0,
            axis_label_offset_px: 10.0,
            marker_color: Color::BLACK,
            marker_highlight_color: Color::GREEN,
            marker_stroke_width: 1.0,
            marker_half_size_px: 5.0,
            region_fill_color: Color::BLACK,
            region_outline_width: 1.0,
            region_label_color: Color::RED,
            region_label_font_size_px: 13.0,
            area_label_precision: 2,
        }
    }
}

const MAX_AREA_LABEL_PRECISION: usize = 12;

pub(crate) fn validate_plot_style(style: &PlotStyle) -> PlotResult<()> {
    for color in [
        style.curve_color,
        style.axis_color,
        style.marker_color,
        style.marker_highlight_color,
        style.region_fill_color,
        style.region_label_color,
    ] {
        color.validate()?;
    }

    for (name, value) in [
        ("curve_stroke_width", style.curve_stroke_width),
        ("axis_stroke_width", style.axis_stroke_width),
        ("axis_arrow_length_px", style.axis_arrow_length_px),
        ("axis_label_font_size_px", style.axis_label_font_size_px),
        ("marker_stroke_width", style.marker_stroke_width),
        ("marker_half_size_px", style.marker_half_size_px),
        ("region_outline_width", style.region_outline_width),
        ("region_label_font_size_px", style.region_label_font_size_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(PlotError::InvalidData(format!(
                "style `{name}` must be finite and > 0"
            )));
        }
    }

    for (name, value) in [
        ("axis_arrow_half_width_px", style.axis_arrow_half_width_px),
        ("axis_label_offset_px", style.axis_label_offset_px),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(PlotError::InvalidData(format!(
                "style `{name}` must be finite and >= 0"
            )));
        }
    }

    if style.curve_dash.iter().any(|len| !len.is_finite() || *len < 0.0)
        || (!style.curve_dash.is_empty() && style.curve_dash.iter().all(|len| *len == 0.0))
    {
        return Err(PlotError::InvalidData(
            "style `curve_dash` lengths must be finite, >= 0 and not all zero".to_owned(),
        ));
    }
    if style.area_label_precision > MAX_AREA_LABEL_PRECISION {
        return Err(PlotError::InvalidData(format!(
            "style `area_label_precision` must be <= {MAX_AREA_LABEL_PRECISION}"
        )));
    }
    Ok(())
}
