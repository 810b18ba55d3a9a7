use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use thiserror::Error;

/// Names of the capabilities that make up one calibration epoch.
///
/// The energy-scale levels are always needed; the residual is needed for collision data
/// and the resolution keys for simulation. Which ones are mandatory is decided when the
/// keys are bound for a given data mode.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct CalibrationKeys {
    pub l1: String,
    pub l2: String,
    pub l3: String,
    pub l2l3_residual: Option<String>,
    pub resolution: Option<String>,
    pub resolution_sf: Option<String>,
    pub total_uncertainty: Option<String>,
}

#[derive(Debug, Error)]
pub enum KeyLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

impl CalibrationKeys {
    pub fn load(path: &Path) -> Result<Self, KeyLoadError> {
        read_toml(path)
    }
}

/// Reads and parses a TOML file, tagging failures with its path.
pub(crate) fn read_toml<T: DeserializeOwned>(path: &Path) -> Result<T, KeyLoadError> {
    let content = std::fs::read_to_string(path).map_err(|e| KeyLoadError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    toml::from_str(&content).map_err(|e| KeyLoadError::Toml {
        path: path.to_string_lossy().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const SIMULATION_KEYS: &str = r#"
        l1 = "Summer22_V2_MC_L1FastJet_AK4PFPuppi"
        l2 = "Summer22_V2_MC_L2Relative_AK4PFPuppi"
        l3 = "Summer22_V2_MC_L3Absolute_AK4PFPuppi"
        resolution = "Summer22_JRV1_MC_PtResolution_AK4PFPuppi"
        resolution-sf = "Summer22_JRV1_MC_ScaleFactor_AK4PFPuppi"
        total-uncertainty = "Summer22_V2_MC_Total_AK4PFPuppi"
    "#;

    #[test]
    fn load_succeeds_with_valid_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("keys.toml");
        fs::write(&path, SIMULATION_KEYS).unwrap();

        let keys = CalibrationKeys::load(&path).unwrap();

        assert_eq!(keys.l1, "Summer22_V2_MC_L1FastJet_AK4PFPuppi");
        assert_eq!(keys.l2l3_residual, None);
        assert_eq!(
            keys.resolution_sf.as_deref(),
            Some("Summer22_JRV1_MC_ScaleFactor_AK4PFPuppi")
        );
        assert_eq!(
            keys.total_uncertainty.as_deref(),
            Some("Summer22_V2_MC_Total_AK4PFPuppi")
        );
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("non_existent.toml");
        let result = CalibrationKeys::load(&path);
        assert!(matches!(result, Err(KeyLoadError::Io { .. })));
    }

    #[test]
    fn load_fails_for_unknown_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("keys.toml");
        fs::write(&path, format!("{SIMULATION_KEYS}\nl4 = \"L4EMF\"\n")).unwrap();
        let result = CalibrationKeys::load(&path);
        assert!(matches!(result, Err(KeyLoadError::Toml { .. })));
    }

    #[test]
    fn load_fails_when_energy_scale_level_is_missing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("keys.toml");
        fs::write(&path, "l1 = \"L1\"\nl2 = \"L2\"\n").unwrap();
        let result = CalibrationKeys::load(&path);
        assert!(matches!(result, Err(KeyLoadError::Toml { .. })));
    }
}
