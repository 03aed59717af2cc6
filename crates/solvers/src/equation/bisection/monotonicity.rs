/// How a model's score moves as `x` grows.
///
/// Bisection only needs to know which half of the bracket still holds the
/// target, and that depends on whether larger performances earn more points
/// (distances, heights) or fewer (times).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Monotonicity {
    /// Score grows with `x`.
    Increasing,
    /// Score shrinks as `x` grows.
    Decreasing,
}

impl Monotonicity {
    /// Returns true if the target lies above an `x` whose residual
    /// (`points - target`) is `residual`.
    #[must_use]
    pub fn target_above(self, residual: f64) -> bool {
        match self {
            Monotonicity::Increasing => residual <= 0.0,
            Monotonicity::Decreasing => residual > 0.0,
        }
    }
}
