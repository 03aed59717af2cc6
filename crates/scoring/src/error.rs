use thiserror::Error;
use wapoints_solvers::equation::bisection;

use crate::CalculationError;

/// Errors that can occur while converting a request.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown event {event:?}")]
    UnknownEvent { event: String },

    #[error("target points must be finite and non-negative, got {target}")]
    InvalidTarget { target: f64 },

    #[error(transparent)]
    Calculation(#[from] CalculationError),

    #[error(transparent)]
    Solve(#[from] bisection::Error),
}

/// Broad failure categories, used to pick a client-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request itself is unusable.
    Input,
    /// The evaluator had no score for a probe and no fallback applied.
    SearchAborted,
    /// The search ran out of bracket or iterations without a match.
    SearchExhausted,
    /// Anything else that went wrong while evaluating.
    Calculation,
}

impl Error {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnknownEvent { .. } | Error::InvalidTarget { .. } => ErrorKind::Input,
            Error::Calculation(_) => ErrorKind::Calculation,
            Error::Solve(error) => match error {
                bisection::Error::Rejected { .. } => ErrorKind::SearchAborted,
                bisection::Error::Exhausted { .. }
                | bisection::Error::StoppedByObserver { .. } => ErrorKind::SearchExhausted,
                bisection::Error::InvalidBracket(_) | bisection::Error::NonFiniteTarget { .. } => {
                    ErrorKind::Input
                }
                bisection::Error::Model(_) => ErrorKind::Calculation,
            },
        }
    }
}
