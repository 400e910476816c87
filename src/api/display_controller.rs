use crate::error::PlotResult;
use crate::render::Renderer;

use super::{DisplayFlags, PlotEngine, PlotStyle, plot_style::validate_plot_style};

impl<R: Renderer> PlotEngine<R> {
    #[must_use]
    pub fn display_flags(&self) -> DisplayFlags {
        self.display
    }

    pub fn set_display_flags(&mut self, display: DisplayFlags) {
        self.display = display;
    }

    #[must_use]
    pub fn show_axis(&self) -> bool {
        self.display.show_axis
    }

    pub fn set_show_axis(&mut self, show_axis: bool) {
        self.display.show_axis = show_axis;
    }

    #[must_use]
    pub fn show_markers(&self) -> bool {
        self.display.show_markers
    }

    pub fn set_show_markers(&mut self, show_markers: bool) {
        self.display.show_markers = show_markers;
    }

    #[must_use]
    pub fn show_regions(&self) -> bool {
        self.display.show_regions
    }

    pub fn set_show_regions(&mut self, show_regions: bool) {
        self.display.show_regions = show_regions;
    }

    #[must_use]
    pub fn style(&self) -> &PlotStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: PlotStyle) -> PlotResult<()> {
        validate_plot_style(&style)?;
        self.style = style;
        Ok(())
    }
}
