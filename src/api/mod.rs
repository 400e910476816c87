mod data_controller;
mod display_controller;
mod engine;
mod engine_config;
mod engine_snapshot;
mod json_contract;
mod plot_style;
mod region_access;
mod region_cache;
mod render_frame_builder;
mod rotation_access;
mod scale_access;

pub use engine::PlotEngine;
pub use engine_config::PlotEngineConfig;
pub use engine_snapshot::PlotSnapshot;
pub use json_contract::{
    PLOT_ENGINE_CONFIG_JSON_SCHEMA_V1, PLOT_SNAPSHOT_JSON_SCHEMA_V1,
    PlotEngineConfigJsonContractV1, PlotSnapshotJsonContractV1,
};
pub use plot_style::{DEFAULT_CURVE_DASH, DisplayFlags, PlotStyle};
