use super::error::EngineError;
use crate::core::corrections::keys::{CalibrationKeys, read_toml};
use crate::core::io::columns::ColumnLayout;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

pub use crate::core::corrections::adapter::AzimuthPolicy;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// Whether the events are collision data or simulation.
///
/// Data receives the L2L3 residual and no smearing; simulation skips the residual and
/// receives smearing plus scale and resolution variations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataMode {
    Data,
    Simulation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CorrectionConfig {
    pub mode: DataMode,
    pub keys: CalibrationKeys,
    pub azimuth_policy: AzimuthPolicy,
    pub layout: ColumnLayout,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct ConfigFile {
    mode: DataMode,
    keys: CalibrationKeys,
    #[serde(default)]
    azimuth_policy: AzimuthPolicy,
    #[serde(default)]
    layout: ColumnLayout,
}

impl CorrectionConfig {
    /// Loads a complete configuration from a TOML file.
    ///
    /// The file is validated like a builder-made configuration, so a data file without
    /// `l2l3-residual` or a simulation file without the resolution keys is rejected.
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let file: ConfigFile = read_toml(path)?;
        let config = CorrectionConfigBuilder::new()
            .mode(file.mode)
            .keys(file.keys)
            .azimuth_policy(file.azimuth_policy)
            .layout(file.layout)
            .build()?;
        Ok(config)
    }
}

#[derive(Default)]
pub struct CorrectionConfigBuilder {
    mode: Option<DataMode>,
    l1: Option<String>,
    l2: Option<String>,
    l3: Option<String>,
    l2l3_residual: Option<String>,
    resolution: Option<String>,
    resolution_sf: Option<String>,
    total_uncertainty: Option<String>,
    azimuth_policy: Option<AzimuthPolicy>,
    layout: Option<ColumnLayout>,
}

impl CorrectionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(mut self, mode: DataMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Takes every key of `keys`; individual setters called afterwards override them.
    pub fn keys(mut self, keys: CalibrationKeys) -> Self {
        self.l1 = Some(keys.l1);
        self.l2 = Some(keys.l2);
        self.l3 = Some(keys.l3);
        self.l2l3_residual = keys.l2l3_residual;
        self.resolution = keys.resolution;
        self.resolution_sf = keys.resolution_sf;
        self.total_uncertainty = keys.total_uncertainty;
        self
    }
    pub fn l1(mut self, key: impl Into<String>) -> Self {
        self.l1 = Some(key.into());
        self
    }
    pub fn l2(mut self, key: impl Into<String>) -> Self {
        self.l2 = Some(key.into());
        self
    }
    pub fn l3(mut self, key: impl Into<String>) -> Self {
        self.l3 = Some(key.into());
        self
    }
    pub fn l2l3_residual(mut self, key: impl Into<String>) -> Self {
        self.l2l3_residual = Some(key.into());
        self
    }
    pub fn resolution(mut self, key: impl Into<String>) -> Self {
        self.resolution = Some(key.into());
        self
    }
    pub fn resolution_sf(mut self, key: impl Into<String>) -> Self {
        self.resolution_sf = Some(key.into());
        self
    }
    pub fn total_uncertainty(mut self, key: impl Into<String>) -> Self {
        self.total_uncertainty = Some(key.into());
        self
    }
    pub fn azimuth_policy(mut self, policy: AzimuthPolicy) -> Self {
        self.azimuth_policy = Some(policy);
        self
    }
    pub fn layout(mut self, layout: ColumnLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn build(self) -> Result<CorrectionConfig, ConfigError> {
        let mode = self.mode.ok_or(ConfigError::MissingParameter("mode"))?;

        let l2l3_residual = match mode {
            DataMode::Data => Some(
                self.l2l3_residual
                    .ok_or(ConfigError::MissingParameter("l2l3_residual"))?,
            ),
            DataMode::Simulation => self.l2l3_residual,
        };
        let (resolution, resolution_sf, total_uncertainty) = match mode {
            DataMode::Data => (self.resolution, self.resolution_sf, self.total_uncertainty),
            DataMode::Simulation => (
                Some(
                    self.resolution
                        .ok_or(ConfigError::MissingParameter("resolution"))?,
                ),
                Some(
                    self.resolution_sf
                        .ok_or(ConfigError::MissingParameter("resolution_sf"))?,
                ),
                Some(
                    self.total_uncertainty
                        .ok_or(ConfigError::MissingParameter("total_uncertainty"))?,
                ),
            ),
        };

        let keys = CalibrationKeys {
            l1: self.l1.ok_or(ConfigError::MissingParameter("l1"))?,
            l2: self.l2.ok_or(ConfigError::MissingParameter("l2"))?,
            l3: self.l3.ok_or(ConfigError::MissingParameter("l3"))?,
            l2l3_residual,
            resolution,
            resolution_sf,
            total_uncertainty,
        };

        Ok(CorrectionConfig {
            mode,
            keys,
            azimuth_policy: self.azimuth_policy.unwrap_or_default(),
            layout: self.layout.unwrap_or_default(),
        })
    }
}
