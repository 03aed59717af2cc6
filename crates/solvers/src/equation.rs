//! Solvers for equation problems — finding the `x` at which a model hits a
//! target output.
//!
//! A scoring model maps a performance `x` to points. Solvers in this module
//! drive the residual `points - target` toward zero.
//!
//! # Solvers
//!
//! - [`bisection`] — direction-aware interval halving over a performance bracket

mod evaluate;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};

pub mod bisection;
