use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// A single scalar handed to a correction capability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CorrectionInput<'a> {
    Real(f64),
    Int(i64),
    /// A categorical input, e.g. the `"nom"`/`"up"`/`"down"` systematic label.
    Str(&'a str),
}

impl fmt::Display for CorrectionInput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorrectionInput::Real(value) => write!(f, "{value}"),
            CorrectionInput::Int(value) => write!(f, "{value}"),
            CorrectionInput::Str(value) => write!(f, "\"{value}\""),
        }
    }
}

impl From<f64> for CorrectionInput<'_> {
    fn from(value: f64) -> Self {
        CorrectionInput::Real(value)
    }
}

impl From<i64> for CorrectionInput<'_> {
    fn from(value: i64) -> Self {
        CorrectionInput::Int(value)
    }
}

impl<'a> From<&'a str> for CorrectionInput<'a> {
    fn from(value: &'a str) -> Self {
        CorrectionInput::Str(value)
    }
}

/// Renders an input tuple as `a, b, c` for diagnostics.
pub fn format_inputs(inputs: &[CorrectionInput<'_>]) -> String {
    inputs
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Failures reported by a correction capability.
///
/// Only [`EvaluationError::TooManyInputs`] is ever recovered from, and only by the
/// azimuth adapter.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvaluationError {
    #[error("Too many inputs: expected {expected}, got {got}")]
    TooManyInputs { expected: usize, got: usize },

    #[error("Insufficient inputs: expected {expected}, got {got}")]
    InsufficientInputs { expected: usize, got: usize },

    #[error("Input {position} ({value}) is outside the valid domain")]
    OutOfDomain { position: usize, value: String },

    #[error("Input {position} has the wrong type: {message}")]
    InvalidInput { position: usize, message: String },

    #[error("{0}")]
    Other(String),
}

/// A named calibration capability: a pure function of a fixed-arity scalar tuple.
pub trait Correction: Send + Sync {
    fn evaluate(&self, inputs: &[CorrectionInput<'_>]) -> Result<f64, EvaluationError>;
}

/// A collection of named capabilities, typically one calibration file.
pub trait CorrectionSet {
    fn correction(&self, key: &str) -> Option<Arc<dyn Correction>>;

    /// Resolves `key` into a [`BoundCorrection`] that reports failures with its name.
    fn bind(&self, key: &str) -> Option<BoundCorrection> {
        self.correction(key)
            .map(|inner| BoundCorrection::new(key, inner))
    }
}

impl CorrectionSet for HashMap<String, Arc<dyn Correction>> {
    fn correction(&self, key: &str) -> Option<Arc<dyn Correction>> {
        self.get(key).cloned()
    }
}

/// A failed lookup, carrying everything needed to diagnose a mis-configured epoch.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("Correction '{key}' failed for inputs ({inputs}): {source}")]
pub struct LookupError {
    pub key: String,
    pub inputs: String,
    pub source: EvaluationError,
}

impl LookupError {
    pub fn is_too_many_inputs(&self) -> bool {
        matches!(self.source, EvaluationError::TooManyInputs { .. })
    }
}

/// A capability together with the key it was resolved from.
#[derive(Clone)]
pub struct BoundCorrection {
    key: String,
    inner: Arc<dyn Correction>,
}

impl fmt::Debug for BoundCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundCorrection")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl BoundCorrection {
    pub fn new(key: impl Into<String>, inner: Arc<dyn Correction>) -> Self {
        Self {
            key: key.into(),
            inner,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn evaluate(&self, inputs: &[CorrectionInput<'_>]) -> Result<f64, LookupError> {
        self.inner.evaluate(inputs).map_err(|source| LookupError {
            key: self.key.clone(),
            inputs: format_inputs(inputs),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::corrections::function::FnCorrection;

    fn set_with(key: &str, correction: FnCorrection) -> HashMap<String, Arc<dyn Correction>> {
        let mut set: HashMap<String, Arc<dyn Correction>> = HashMap::new();
        set.insert(key.to_string(), Arc::new(correction));
        set
    }

    #[test]
    fn format_inputs_renders_reals_ints_and_labels() {
        let inputs = [
            CorrectionInput::Real(1.5),
            CorrectionInput::Int(-3),
            CorrectionInput::Str("nom"),
        ];
        assert_eq!(format_inputs(&inputs), "1.5, -3, \"nom\"");
    }

    #[test]
    fn hash_map_set_resolves_known_keys_only() {
        let set = set_with("L1", FnCorrection::new(1, |_| Ok(1.0)));
        assert!(set.correction("L1").is_some());
        assert!(set.correction("L2").is_none());
        assert!(set.bind("L2").is_none());
    }

    #[test]
    fn bound_correction_reports_key_and_inputs_on_failure() {
        let set = set_with(
            "Summer22_L2Relative",
            FnCorrection::new(2, |_| {
                Err(EvaluationError::OutOfDomain {
                    position: 0,
                    value: "9.9".to_string(),
                })
            }),
        );
        let bound = set.bind("Summer22_L2Relative").unwrap();
        let err = bound
            .evaluate(&[CorrectionInput::Real(9.9), CorrectionInput::Real(30.0)])
            .unwrap_err();

        assert_eq!(err.key, "Summer22_L2Relative");
        assert_eq!(err.inputs, "9.9, 30");
        assert!(!err.is_too_many_inputs());
        let message = err.to_string();
        assert!(message.contains("Summer22_L2Relative"));
        assert!(message.contains("9.9, 30"));
    }

    #[test]
    fn bound_correction_passes_through_successful_values() {
        let set = set_with("JES", FnCorrection::new(2, |args| Ok(args.real(1)? * 0.01)));
        let bound = set.bind("JES").unwrap();
        let value = bound
            .evaluate(&[CorrectionInput::Real(0.0), CorrectionInput::Real(50.0)])
            .unwrap();
        assert!((value - 0.5).abs() < 1e-12);
        assert_eq!(bound.key(), "JES");
    }
}
