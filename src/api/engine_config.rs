use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::PlotResult;

use super::{DisplayFlags, PlotStyle, plot_style::validate_plot_style};

/// Public engine bootstrap configuration.
///
/// Serializable so host applications can persist/load plot setup without
/// inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotEngineConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub display: DisplayFlags,
    #[serde(default)]
    pub style: PlotStyle,
}

impl PlotEngineConfig {
    /// Creates a config with default display flags and style.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            display: DisplayFlags::default(),
            style: PlotStyle::default(),
        }
    }

    #[must_use]
    pub fn with_display_flags(mut self, display: DisplayFlags) -> Self {
        self.display = display;
        self
    }

    #[must_use]
    pub fn with_show_regions(mut self, show_regions: bool) -> Self {
        self.display.show_regions = show_regions;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: PlotStyle) -> Self {
        self.style = style;
        self
    }

    pub fn validate(&self) -> PlotResult<()> {
        self.viewport.validate()?;
        validate_plot_style(&self.style)
    }
}
