use thiserror::Error;

use crate::core::Axis;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("sample sequence is empty")]
    EmptySamples,

    #[error("degenerate {axis} range: span={span}")]
    DegenerateRange { axis: Axis, span: f64 },

    #[error("region index {index} out of range: region count={count}")]
    RegionIndexOutOfRange { index: usize, count: usize },

    #[error("config error: {0}")]
    Config(String),
}
