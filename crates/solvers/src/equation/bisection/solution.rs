use crate::equation::Evaluation;

/// A converged bisection solve.
///
/// Non-converged outcomes are reported as [`Error`](super::Error) variants,
/// never as a best-effort solution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Accepted midpoint, unrounded.
    pub x: f64,
    /// `x` rounded to two decimal places.
    pub performance: f64,
    /// Points at `x`.
    pub points: f64,
    /// `points - target`.
    pub residual: f64,
    /// Midpoint evaluations used, including the accepted one.
    pub iters: usize,
}

impl Solution {
    pub(super) fn from_eval(eval: &Evaluation, iters: usize) -> Self {
        Self {
            x: eval.x(),
            performance: round_hundredths(eval.x()),
            points: eval.points(),
            residual: eval.residual,
            iters,
        }
    }
}

/// Rounds to two decimal places, halves away from zero.
#[must_use]
pub fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn rounds_to_hundredths() {
        assert_relative_eq!(round_hundredths(100.068_359_375), 100.07);
        assert_relative_eq!(round_hundredths(20.001_953_125), 20.0);
        assert_relative_eq!(round_hundredths(9.591_369_6), 9.59);
    }
}
