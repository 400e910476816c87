//! region-plot: fits a sampled curve to a viewport and measures the regions
//! between its zero crossings.
//!
//! The numeric engine lives in [`core`] and has no drawing dependencies.
//! [`api::PlotEngine`] caches derived state per data version and produces
//! backend-agnostic [`render::RenderFrame`]s.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{PlotEngine, PlotEngineConfig};
pub use error::{PlotError, PlotResult};
