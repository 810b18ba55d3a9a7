use super::traits::{Correction, CorrectionInput, EvaluationError};

/// Typed access to the inputs of a [`FnCorrection`].
#[derive(Debug, Clone, Copy)]
pub struct Args<'a, 'b> {
    inputs: &'a [CorrectionInput<'b>],
}

impl<'a, 'b> Args<'a, 'b> {
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Numeric input at `position`; integers are widened.
    pub fn real(&self, position: usize) -> Result<f64, EvaluationError> {
        match self.inputs.get(position) {
            Some(CorrectionInput::Real(value)) => Ok(*value),
            Some(CorrectionInput::Int(value)) => Ok(*value as f64),
            Some(CorrectionInput::Str(_)) => Err(EvaluationError::InvalidInput {
                position,
                message: "expected a number, got a string".to_string(),
            }),
            None => Err(EvaluationError::InsufficientInputs {
                expected: position + 1,
                got: self.inputs.len(),
            }),
        }
    }

    /// Categorical input at `position`.
    pub fn label(&self, position: usize) -> Result<&'b str, EvaluationError> {
        match self.inputs.get(position) {
            Some(CorrectionInput::Str(value)) => Ok(*value),
            Some(other) => Err(EvaluationError::InvalidInput {
                position,
                message: format!("expected a string, got {other}"),
            }),
            None => Err(EvaluationError::InsufficientInputs {
                expected: position + 1,
                got: self.inputs.len(),
            }),
        }
    }
}

type Evaluator = dyn Fn(&Args<'_, '_>) -> Result<f64, EvaluationError> + Send + Sync;

/// A capability backed by a closure that expects exactly `arity` inputs.
///
/// Calls with a different number of inputs are rejected before the closure runs, with
/// the same error kinds a table-backed evaluator reports.
pub struct FnCorrection {
    arity: usize,
    evaluator: Box<Evaluator>,
}

impl FnCorrection {
    pub fn new<F>(arity: usize, evaluator: F) -> Self
    where
        F: Fn(&Args<'_, '_>) -> Result<f64, EvaluationError> + Send + Sync + 'static,
    {
        Self {
            arity,
            evaluator: Box::new(evaluator),
        }
    }

    /// A capability that returns `value` for any well-formed input tuple.
    pub fn constant(arity: usize, value: f64) -> Self {
        Self::new(arity, move |_| Ok(value))
    }

    pub fn arity(&self) -> usize {
        self.arity
    }
}

impl Correction for FnCorrection {
    fn evaluate(&self, inputs: &[CorrectionInput<'_>]) -> Result<f64, EvaluationError> {
        if inputs.len() > self.arity {
            return Err(EvaluationError::TooManyInputs {
                expected: self.arity,
                got: inputs.len(),
            });
        }
        if inputs.len() < self.arity {
            return Err(EvaluationError::InsufficientInputs {
                expected: self.arity,
                got: inputs.len(),
            });
        }
        (self.evaluator)(&Args { inputs })
    }
}
