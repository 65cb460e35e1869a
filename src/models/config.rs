use crate::errors::{MzTraceError, Result};
use crate::models::axis::MzAxis;
use crate::models::feature::FeatureSet;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// What a session does when one file cannot be traced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Stop the whole session on the first failing file.
    #[default]
    Abort,
    /// Log the failure, remember it in the summary and go on with the next file.
    SkipFile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    pub mz_min: f64,
    pub mz_max: f64,
    pub resolution: f64,
    pub features_pos: Vec<f64>,
    pub features_neg: Vec<f64>,
    /// Half width of the max-window, in axis points.
    pub half_window: usize,
    pub root_path: PathBuf,
    /// Only trace scans of this MS level. `None` keeps every scan.
    pub ms_level: Option<u8>,
    pub failure_policy: FailurePolicy,
}

impl Default for TraceConfig {
    fn default() -> Self {
        TraceConfig {
            mz_min: 50.0,
            mz_max: 500.0,
            resolution: 0.001,
            features_pos: vec![55.03897, 100.07569, 279.15909, 371.10124, 445.12004],
            features_neg: vec![91.00368, 255.23295, 283.26425],
            half_window: 5,
            root_path: PathBuf::from("."),
            ms_level: None,
            failure_policy: FailurePolicy::Abort,
        }
    }
}

impl TraceConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_json_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            MzTraceError::config(format!("Unable to read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&contents)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn build_axis(&self) -> Result<MzAxis> {
        Ok(MzAxis::build(self.mz_min, self.mz_max, self.resolution)?)
    }

    pub fn feature_set(&self) -> FeatureSet {
        FeatureSet::from_mzs(&self.features_pos, &self.features_neg)
    }
}
