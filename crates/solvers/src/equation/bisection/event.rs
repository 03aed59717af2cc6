use crate::equation::Evaluation;

use super::Bracket;

/// Event emitted by the bisection solver for each midpoint evaluation.
///
/// The bracket is the one the midpoint was taken from, before it is shrunk.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Current search bracket.
    pub bracket: &'a Bracket,
    /// Evaluation at the midpoint.
    pub eval: &'a Evaluation,
}
