use thiserror::Error;
use wapoints_core::Model;
use wapoints_solvers::equation::bisection::Monotonicity;

use crate::{Coefficients, Fallback};

/// Errors raised by a [`Scorer`] for inputs it cannot score at all.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CalculationError {
    #[error("performance must be finite and non-negative, got {performance}")]
    InvalidPerformance { performance: f64 },
}

/// Forward evaluator for one event, gender, and venue.
///
/// Tries the scoring table first. When the table has no entry, or produces a
/// non-finite value, the registered fallback is used. With neither, the
/// score is undefined (`None`).
#[derive(Clone, Copy)]
pub struct Scorer<'a> {
    coefficients: Option<Coefficients>,
    monotonicity: Monotonicity,
    fallback: Option<&'a dyn Fallback>,
}

impl<'a> Scorer<'a> {
    pub fn new(
        coefficients: Option<Coefficients>,
        monotonicity: Monotonicity,
        fallback: Option<&'a dyn Fallback>,
    ) -> Self {
        Self {
            coefficients,
            monotonicity,
            fallback,
        }
    }

    /// Returns the fallback this scorer would use, if any.
    #[must_use]
    pub fn fallback(&self) -> Option<&'a dyn Fallback> {
        self.fallback
    }
}

impl Model for Scorer<'_> {
    type Input = f64;
    type Output = Option<f64>;
    type Error = CalculationError;

    fn call(&self, performance: &f64) -> Result<Option<f64>, Self::Error> {
        let performance = *performance;
        if !performance.is_finite() || performance < 0.0 {
            return Err(CalculationError::InvalidPerformance { performance });
        }

        let from_table = self
            .coefficients
            .map(|table| table.points(performance, self.monotonicity))
            .filter(|points| points.is_finite());

        Ok(from_table
            .or_else(|| self.fallback.map(|fallback| fallback.points(performance)))
            .filter(|points| points.is_finite()))
    }
}
