//! Persisted configuration (JSON, defaults-on-missing).

mod detect;

pub use detect::{load_config, save_config, AreaConfig, DetectConfig, InputConfig, LineConfig};
