//! Direction-aware bisection for inverting a monotonic scoring model.
//!
//! # Algorithm
//!
//! The solver halves a performance bracket `[low, high]` until the model's
//! score at the midpoint is within `residual_tol` of the target. Which half is
//! kept depends on [`Monotonicity`]: for an increasing model a score above the
//! target means the performance is too large, for a decreasing model (times)
//! it means the performance is too small.
//!
//! The loop stops with:
//!
//! - a [`Solution`] as soon as `|points - target| < residual_tol`
//! - [`Error::Rejected`] on the first midpoint where the model has no score
//! - [`Error::Exhausted`] once the bracket is no wider than `x_abs_tol` or
//!   `max_iters` midpoints have been evaluated
//!
//! The endpoints themselves are never evaluated, and no best-effort value is
//! returned when the search fails.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per successful midpoint evaluation, before
//! the bracket is shrunk. Observers can return [`Action::StopEarly`] to halt
//! the search.

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod monotonicity;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use bracket::{Bracket, BracketError};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use monotonicity::Monotonicity;
pub use solution::{Solution, round_hundredths};

use wapoints_core::{Model, Observer};

use crate::equation::evaluate;

/// Finds the `x` in `bracket` at which the model scores `target`.
///
/// The observer receives an [`Event`] for each midpoint evaluation.
/// See the [module docs](self) for the stopping rules.
///
/// # Errors
///
/// Returns an error if the bracket or target is invalid, the model fails or
/// has no score at a midpoint, the search exhausts without a match, or the
/// observer stops it.
pub fn solve<M, Obs>(
    model: &M,
    target: f64,
    bracket: [f64; 2],
    monotonicity: Monotonicity,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    M: Model<Input = f64, Output = Option<f64>>,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    if !target.is_finite() {
        return Err(Error::NonFiniteTarget { target });
    }

    let mut bracket = Bracket::new(bracket)?;
    let mut iters = 0;

    while iters < config.max_iters() && !bracket.is_x_converged(config.x_abs_tol()) {
        let mid = bracket.midpoint();
        let eval = evaluate(model, target, mid)?;
        iters += 1;

        let event = Event {
            iter: iters,
            bracket: &bracket,
            eval: &eval,
        };

        if let Some(action) = observer.observe(&event) {
            match action {
                Action::StopEarly => return Err(Error::StoppedByObserver { iters }),
            }
        }

        if eval.residual.abs() < config.residual_tol() {
            return Ok(Solution::from_eval(&eval, iters));
        }

        bracket.shrink(mid, eval.residual, monotonicity);
    }

    Err(Error::Exhausted {
        iters,
        bracket: bracket.as_array(),
    })
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<M>(
    model: &M,
    target: f64,
    bracket: [f64; 2],
    monotonicity: Monotonicity,
    config: &Config,
) -> Result<Solution, Error>
where
    M: Model<Input = f64, Output = Option<f64>>,
{
    solve(model, target, bracket, monotonicity, config, ())
}
