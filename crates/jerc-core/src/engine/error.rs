use thiserror::Error;

use super::config::ConfigError;
use super::utils::sampling::SamplingError;
use crate::core::corrections::keys::KeyLoadError;
use crate::core::corrections::traits::LookupError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Configuration error: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Calibration keys could not be loaded: {source}")]
    Keys {
        #[from]
        source: KeyLoadError,
    },

    #[error("Correction '{key}' is not available in the correction set")]
    MissingCorrection { key: String },

    #[error("Lookup failed: {source}")]
    Lookup {
        #[from]
        source: LookupError,
    },

    #[error("Smearing draw failed: {source}")]
    Sampling {
        #[from]
        source: SamplingError,
    },

    #[error("Event {event} (run {run}) aborted: {source}")]
    Event {
        event: u64,
        run: u32,
        #[source]
        source: Box<EngineError>,
    },
}
