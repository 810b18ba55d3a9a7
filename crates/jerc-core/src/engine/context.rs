use super::config::{ConfigError, CorrectionConfig, DataMode};
use super::error::EngineError;
use crate::core::corrections::adapter::{AzimuthAdapter, AzimuthPolicy};
use crate::core::corrections::traits::{BoundCorrection, CorrectionSet};
use tracing::{debug, info};

/// The energy-scale levels, in application order.
#[derive(Debug)]
pub struct EnergyScaleCorrections {
    pub l1: BoundCorrection,
    pub l2: AzimuthAdapter,
    pub l3: AzimuthAdapter,
    /// Bound only for collision data.
    pub residual: Option<AzimuthAdapter>,
}

/// Capabilities needed to smear simulated jets and derive their variations.
#[derive(Debug)]
pub struct ResolutionCorrections {
    pub resolution: BoundCorrection,
    pub scale_factor: BoundCorrection,
    pub total_uncertainty: BoundCorrection,
}

/// Every capability a configuration needs, resolved once and shared across events.
#[derive(Debug)]
pub struct CorrectionContext {
    pub mode: DataMode,
    pub energy_scale: EnergyScaleCorrections,
    /// Bound only for simulation.
    pub resolution: Option<ResolutionCorrections>,
}

impl CorrectionContext {
    pub fn bind<S>(set: &S, config: &CorrectionConfig) -> Result<Self, EngineError>
    where
        S: CorrectionSet + ?Sized,
    {
        let keys = &config.keys;
        let policy = config.azimuth_policy;

        let residual = match config.mode {
            DataMode::Data => {
                let key = required_key(keys.l2l3_residual.as_deref(), "l2l3_residual")?;
                Some(bind_adapter(set, key, policy)?)
            }
            DataMode::Simulation => None,
        };

        let energy_scale = EnergyScaleCorrections {
            l1: bind(set, &keys.l1)?,
            l2: bind_adapter(set, &keys.l2, policy)?,
            l3: bind_adapter(set, &keys.l3, policy)?,
            residual,
        };

        let resolution = match config.mode {
            DataMode::Data => None,
            DataMode::Simulation => Some(ResolutionCorrections {
                resolution: bind(set, required_key(keys.resolution.as_deref(), "resolution")?)?,
                scale_factor: bind(
                    set,
                    required_key(keys.resolution_sf.as_deref(), "resolution_sf")?,
                )?,
                total_uncertainty: bind(
                    set,
                    required_key(keys.total_uncertainty.as_deref(), "total_uncertainty")?,
                )?,
            }),
        };

        info!(mode = ?config.mode, ?policy, "Bound calibration capabilities.");
        Ok(Self {
            mode: config.mode,
            energy_scale,
            resolution,
        })
    }
}

fn required_key<'a>(key: Option<&'a str>, name: &'static str) -> Result<&'a str, EngineError> {
    key.ok_or_else(|| ConfigError::MissingParameter(name).into())
}

fn bind<S>(set: &S, key: &str) -> Result<BoundCorrection, EngineError>
where
    S: CorrectionSet + ?Sized,
{
    debug!(key, "Resolving correction.");
    set.bind(key).ok_or_else(|| EngineError::MissingCorrection {
        key: key.to_string(),
    })
}

fn bind_adapter<S>(set: &S, key: &str, policy: AzimuthPolicy) -> Result<AzimuthAdapter, EngineError>
where
    S: CorrectionSet + ?Sized,
{
    Ok(AzimuthAdapter::new(bind(set, key)?, policy))
}
