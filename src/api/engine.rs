use tracing::debug;

use crate::core::{RotationController, Sample, Viewport};
use crate::error::PlotResult;
use crate::render::{RenderFrame, Renderer};

use super::{
    DisplayFlags, PlotEngineConfig, PlotStyle, region_cache::RegionCache,
    render_frame_builder::RenderFrameBuilder,
};

/// Main orchestration facade consumed by host applications.
///
/// `PlotEngine` owns one curve's samples together with everything derived
/// from them (region boundaries and areas), the view rotation and the
/// display flags, and hands finished frames to its renderer.
pub struct PlotEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) viewport: Viewport,
    pub(super) samples: Vec<Sample>,
    pub(super) regions: RegionCache,
    pub(super) rotation: RotationController,
    pub(super) display: DisplayFlags,
    pub(super) style: PlotStyle,
}

impl<R: Renderer> PlotEngine<R> {
    /// Creates an engine with no data and no rotation.
    pub fn new(renderer: R, config: PlotEngineConfig) -> PlotResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            viewport: config.viewport,
            samples: Vec::new(),
            regions: RegionCache::default(),
            rotation: RotationController::default(),
            display: config.display,
            style: config.style,
        })
    }

    /// Builds the frame for the current state without rendering it.
    ///
    /// With no data this is an empty frame. Degenerate data ranges are
    /// reported as errors so the host can skip the frame.
    pub fn build_frame(&self) -> PlotResult<RenderFrame> {
        let device_transform = self.rotation.device_transform(self.viewport);
        let Some(transform) = self.transform()? else {
            return Ok(RenderFrame::new(self.viewport).with_device_transform(device_transform));
        };

        let frame = RenderFrameBuilder {
            samples: &self.samples,
            transform,
            regions: self.regions.regions(),
            areas: self.regions.areas(),
            display: self.display,
            style: &self.style,
        }
        .build(self.viewport)
        .with_device_transform(device_transform);

        debug!(
            polylines = frame.polylines().count(),
            lines = frame.lines().count(),
            polygons = frame.polygons().count(),
            texts = frame.texts().count(),
            rotation_steps = self.rotation.steps(),
            "built render frame"
        );
        Ok(frame)
    }

    pub fn render(&mut self) -> PlotResult<()> {
        let frame = self.build_frame()?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
