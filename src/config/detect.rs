use crate::detector::DetectorParams;
use crate::regions::clamp;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Persisted detection settings.
///
/// Document shape: `{ "input": {"threshold", "maxvalue"}, "area":
/// {"threshold", "buffer"}, "line": {"threshold"} }`, all numeric. Any
/// missing field falls back to its documented default; a document that does
/// not parse falls back to defaults entirely (see [`load_config`]).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectConfig {
    pub input: InputConfig,
    pub area: AreaConfig,
    pub line: LineConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub threshold: f64,
    pub maxvalue: f64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            threshold: 127.0,
            maxvalue: 255.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaConfig {
    pub threshold: f64,
    /// Hull buffer ratio. The persisted default (0.01) differs from the
    /// pipeline default (1.1); the two call sites are configured
    /// independently on purpose.
    pub buffer: f64,
}

impl Default for AreaConfig {
    fn default() -> Self {
        Self {
            threshold: 0.0001,
            buffer: 0.01,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineConfig {
    pub threshold: f64,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self { threshold: 100.0 }
    }
}

impl DetectConfig {
    /// Convert to the per-invocation pipeline parameters.
    pub fn to_detector_params(&self) -> DetectorParams {
        DetectorParams {
            input_threshold: clamp(self.input.threshold, 0.0, 255.0) as u8,
            input_max_value: clamp(self.input.maxvalue, 0.0, 255.0) as u8,
            area_threshold: self.area.threshold,
            buffer_ratio: self.area.buffer,
            line_threshold: self.line.threshold as f32,
        }
    }
}

/// Load a persisted configuration.
///
/// An unreadable file is an error; a readable but malformed document is
/// recovered by substituting the defaults with a warning, never failing the
/// load. Missing fields within a well-formed document take their per-field
/// defaults.
pub fn load_config(path: &Path) -> Result<DetectConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    match serde_json::from_str(&data) {
        Ok(config) => Ok(config),
        Err(e) => {
            warn!(
                "Malformed config {}: {e}; falling back to defaults",
                path.display()
            );
            Ok(DetectConfig::default())
        }
    }
}

/// Persist a configuration as pretty JSON.
pub fn save_config(path: &Path, config: &DetectConfig) -> Result<(), String> {
    crate::image::write_json_file(path, config)
}
