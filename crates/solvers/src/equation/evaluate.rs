use thiserror::Error;

use wapoints_core::{Model, Snapshot};

/// The result of evaluating a scoring model at a given `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// Points minus target.
    pub residual: f64,
    pub snapshot: Snapshot<f64, f64>,
}

impl Evaluation {
    /// Returns the evaluated performance.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.snapshot.input
    }

    /// Returns the points the model produced.
    #[must_use]
    pub fn points(&self) -> f64 {
        self.snapshot.output
    }
}

/// Errors that can occur when evaluating a scoring model.
#[derive(Debug, Error)]
pub enum EvalError<ME> {
    /// The model call failed.
    #[error("model call failed")]
    Model(#[source] ME),
    /// The model has no finite score for this input.
    #[error("no score defined at x = {x}")]
    Undefined { x: f64 },
}

/// Type alias for the result of [`evaluate`].
pub type EvaluateResult<M> = Result<Evaluation, EvalError<<M as Model>::Error>>;

/// Evaluates the model at `x` and computes the residual against `target`.
///
/// A `None` output and a non-finite score are both reported as
/// [`EvalError::Undefined`], so NaN or infinity never reach a solver.
///
/// # Errors
///
/// Returns an error if the model call fails or yields no finite score.
pub fn evaluate<M>(model: &M, target: f64, x: f64) -> EvaluateResult<M>
where
    M: Model<Input = f64, Output = Option<f64>>,
{
    match model.call(&x).map_err(EvalError::Model)? {
        Some(points) if points.is_finite() => Ok(Evaluation {
            residual: points - target,
            snapshot: Snapshot::new(x, points),
        }),
        _ => Err(EvalError::Undefined { x }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;

    struct Fixed(Option<f64>);

    impl Model for Fixed {
        type Input = f64;
        type Output = Option<f64>;
        type Error = Infallible;

        fn call(&self, _input: &f64) -> Result<Option<f64>, Self::Error> {
            Ok(self.0)
        }
    }

    #[test]
    fn residual_is_points_minus_target() {
        let eval = evaluate(&Fixed(Some(820.0)), 800.0, 11.2).expect("defined");

        assert_relative_eq!(eval.x(), 11.2);
        assert_relative_eq!(eval.points(), 820.0);
        assert_relative_eq!(eval.residual, 20.0);
    }

    #[test]
    fn missing_score_is_undefined() {
        let result = evaluate(&Fixed(None), 800.0, 11.2);
        assert!(matches!(result, Err(EvalError::Undefined { .. })));
    }

    #[test]
    fn non_finite_score_is_undefined() {
        for points in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = evaluate(&Fixed(Some(points)), 800.0, 11.2);
            assert!(matches!(result, Err(EvalError::Undefined { .. })));
        }
    }
}
