use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

use super::{PlotEngineConfig, PlotSnapshot};

pub const PLOT_ENGINE_CONFIG_JSON_SCHEMA_V1: u32 = 1;
pub const PLOT_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotEngineConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: PlotEngineConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: PlotSnapshot,
}

impl PlotEngineConfig {
    pub fn to_json_contract_v1_pretty(&self) -> PlotResult<String> {
        let payload = PlotEngineConfigJsonContractV1 {
            schema_version: PLOT_ENGINE_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            PlotError::Config(format!("failed to serialize config contract v1: {e}"))
        })
    }

    /// Accepts either a bare config object or a versioned v1 contract.
    pub fn from_json_compat_str(input: &str) -> PlotResult<Self> {
        let config = if let Ok(config) = serde_json::from_str::<Self>(input) {
            config
        } else {
            let payload: PlotEngineConfigJsonContractV1 = serde_json::from_str(input)
                .map_err(|e| PlotError::Config(format!("failed to parse config json: {e}")))?;
            if payload.schema_version != PLOT_ENGINE_CONFIG_JSON_SCHEMA_V1 {
                return Err(PlotError::Config(format!(
                    "unsupported config schema version: {}",
                    payload.schema_version
                )));
            }
            payload.config
        };
        config.validate()?;
        Ok(config)
    }
}

impl PlotSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> PlotResult<String> {
        let payload = PlotSnapshotJsonContractV1 {
            schema_version: PLOT_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            PlotError::Config(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> PlotResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<Self>(input) {
            return Ok(snapshot);
        }
        let payload: PlotSnapshotJsonContractV1 = serde_json::from_str(input)
            .map_err(|e| PlotError::Config(format!("failed to parse snapshot json payload: {e}")))?;
        if payload.schema_version != PLOT_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(PlotError::Config(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
