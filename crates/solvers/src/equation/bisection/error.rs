use std::error::Error as StdError;

use thiserror::Error;

use crate::equation::EvalError;

use super::bracket::BracketError;

/// Errors that can occur during bisection solving.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("target must be finite, got {target}")]
    NonFiniteTarget { target: f64 },

    /// The model had no score at `x` and the search cannot continue.
    #[error("model has no score at x = {x}")]
    Rejected { x: f64 },

    /// The bracket collapsed or the iteration cap was hit without a match.
    #[error(
        "no match within tolerance after {iters} iterations (bracket [{}, {}])",
        .bracket[0],
        .bracket[1]
    )]
    Exhausted { iters: usize, bracket: [f64; 2] },

    #[error("stopped by observer after {iters} iterations")]
    StoppedByObserver { iters: usize },

    #[error("model call failed")]
    Model(#[source] Box<dyn StdError + Send + Sync>),
}

impl<ME> From<EvalError<ME>> for Error
where
    ME: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<ME>) -> Self {
        match err {
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::Undefined { x } => Self::Rejected { x },
        }
    }
}
