use super::traits::{BoundCorrection, CorrectionInput, LookupError};
use serde::Deserialize;
use std::sync::OnceLock;
use tracing::debug;

/// The calling convention of an `(eta, [phi], x)` capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// `(eta, phi, x)`
    WithAzimuth,
    /// `(eta, x)`
    WithoutAzimuth,
}

/// How the azimuth argument of L2/L3/residual capabilities is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AzimuthPolicy {
    /// Try with the azimuth first and drop it if the capability reports too many inputs.
    #[default]
    Discover,
    /// The capability always takes the azimuth.
    Always,
    /// The capability never takes the azimuth.
    Never,
}

/// Wraps a capability whose schema may or may not include the azimuth.
///
/// Calibration epochs disagree on whether `phi` is an input of the relative and absolute
/// corrections, and the schema is not advertised. With [`AzimuthPolicy::Discover`] the
/// first successful call settles the convention, which is then reused for every
/// following call.
#[derive(Debug)]
pub struct AzimuthAdapter {
    correction: BoundCorrection,
    arity: OnceLock<Arity>,
}

impl AzimuthAdapter {
    pub fn new(correction: BoundCorrection, policy: AzimuthPolicy) -> Self {
        let arity = match policy {
            AzimuthPolicy::Discover => OnceLock::new(),
            AzimuthPolicy::Always => OnceLock::from(Arity::WithAzimuth),
            AzimuthPolicy::Never => OnceLock::from(Arity::WithoutAzimuth),
        };
        Self { correction, arity }
    }

    pub fn key(&self) -> &str {
        self.correction.key()
    }

    /// The settled calling convention, if any call has succeeded yet.
    pub fn arity(&self) -> Option<Arity> {
        self.arity.get().copied()
    }

    pub fn evaluate(&self, eta: f64, phi: f64, x: f64) -> Result<f64, LookupError> {
        if let Some(&arity) = self.arity.get() {
            return self.evaluate_with(arity, eta, phi, x);
        }

        match self.evaluate_with(Arity::WithAzimuth, eta, phi, x) {
            Ok(value) => {
                self.settle(Arity::WithAzimuth);
                Ok(value)
            }
            Err(err) if err.is_too_many_inputs() => {
                let value = self.evaluate_with(Arity::WithoutAzimuth, eta, phi, x)?;
                self.settle(Arity::WithoutAzimuth);
                Ok(value)
            }
            Err(err) => Err(err),
        }
    }

    fn evaluate_with(&self, arity: Arity, eta: f64, phi: f64, x: f64) -> Result<f64, LookupError> {
        match arity {
            Arity::WithAzimuth => self.correction.evaluate(&[
                CorrectionInput::Real(eta),
                CorrectionInput::Real(phi),
                CorrectionInput::Real(x),
            ]),
            Arity::WithoutAzimuth => self
                .correction
                .evaluate(&[CorrectionInput::Real(eta), CorrectionInput::Real(x)]),
        }
    }

    fn settle(&self, arity: Arity) {
        if self.arity.set(arity).is_ok() {
            debug!(key = self.key(), ?arity, "Settled calling convention.");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::corrections::function::FnCorrection;
    use crate::core::corrections::traits::{Correction, EvaluationError};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting(arity: usize, calls: Arc<AtomicUsize>) -> BoundCorrection {
        BoundCorrection::new(
            "L2Relative",
            Arc::new(CountingCorrection {
                inner: FnCorrection::new(arity, |args| {
                    Ok(1.0 + 0.001 * args.real(args.len() - 1)?)
                }),
                calls,
            }),
        )
    }

    struct CountingCorrection {
        inner: FnCorrection,
        calls: Arc<AtomicUsize>,
    }

    impl Correction for CountingCorrection {
        fn evaluate(&self, inputs: &[CorrectionInput<'_>]) -> Result<f64, EvaluationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.evaluate(inputs)
        }
    }

    #[test]
    fn three_input_schema_is_used_directly() {
        let calls = Arc::new(AtomicUsize::new(0));
        let adapter = AzimuthAdapter::new(counting(3, calls.clone()), AzimuthPolicy::Discover);

        let value = adapter.evaluate(0.5, 1.2, 100.0).unwrap();

        assert!((value - 1.1).abs() < 1e-12);
        assert_eq!(adapter.arity(), Some(Arity::WithAzimuth));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn two_input_schema_falls_back_without_azimuth() {
        let calls = Arc::new(AtomicUsize::new(0));
        let adapter = AzimuthAdapter::new(counting(2, calls.clone()), AzimuthPolicy::Discover);

        let value = adapter.evaluate(0.5, 1.2, 100.0).unwrap();

        assert!((value - 1.1).abs() < 1e-12);
        assert_eq!(adapter.arity(), Some(Arity::WithoutAzimuth));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn settled_convention_skips_the_failing_attempt() {
        let calls = Arc::new(AtomicUsize::new(0));
        let adapter = AzimuthAdapter::new(counting(2, calls.clone()), AzimuthPolicy::Discover);

        adapter.evaluate(0.5, 1.2, 100.0).unwrap();
        adapter.evaluate(-1.0, 0.3, 40.0).unwrap();
        adapter.evaluate(2.0, -2.9, 25.0).unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn insufficient_inputs_is_fatal_and_not_settled() {
        let calls = Arc::new(AtomicUsize::new(0));
        let adapter = AzimuthAdapter::new(counting(4, calls.clone()), AzimuthPolicy::Discover);

        let err = adapter.evaluate(0.5, 1.2, 100.0).unwrap_err();

        assert!(matches!(
            err.source,
            EvaluationError::InsufficientInputs {
                expected: 4,
                got: 3
            }
        ));
        assert_eq!(err.key, "L2Relative");
        assert_eq!(err.inputs, "0.5, 1.2, 100");
        assert_eq!(adapter.arity(), None);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn out_of_domain_is_fatal_without_retry() {
        let bound = BoundCorrection::new(
            "L3Absolute",
            Arc::new(FnCorrection::new(3, |args| {
                Err(EvaluationError::OutOfDomain {
                    position: 0,
                    value: args.real(0)?.to_string(),
                })
            })),
        );
        let adapter = AzimuthAdapter::new(bound, AzimuthPolicy::Discover);

        let err = adapter.evaluate(7.5, 0.0, 30.0).unwrap_err();

        assert!(matches!(err.source, EvaluationError::OutOfDomain { .. }));
        assert!(err.to_string().contains("L3Absolute"));
    }

    #[test]
    fn pinned_policy_never_retries() {
        let calls = Arc::new(AtomicUsize::new(0));
        let adapter = AzimuthAdapter::new(counting(2, calls.clone()), AzimuthPolicy::Always);

        let err = adapter.evaluate(0.5, 1.2, 100.0).unwrap_err();

        assert!(err.is_too_many_inputs());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn never_policy_omits_the_azimuth() {
        let calls = Arc::new(AtomicUsize::new(0));
        let adapter = AzimuthAdapter::new(counting(2, calls.clone()), AzimuthPolicy::Never);

        adapter.evaluate(0.5, 1.2, 100.0).unwrap();

        assert_eq!(adapter.arity(), Some(Arity::WithoutAzimuth));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
