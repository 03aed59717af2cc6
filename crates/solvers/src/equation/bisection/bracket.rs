use thiserror::Error;

use super::Monotonicity;

/// Errors that can occur when creating a [`Bracket`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,
    /// Endpoints are equal, giving zero width.
    #[error("zero width")]
    ZeroWidth,
    /// The low endpoint lies above the high endpoint.
    #[error("low endpoint exceeds high endpoint")]
    Reversed,
}

/// Current search bounds on the performance axis.
///
/// `low < high` holds from construction on. Shrinking only ever moves an
/// endpoint inward, so the interval never grows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    low: f64,
    high: f64,
}

impl Bracket {
    /// Validates the `[low, high]` endpoints.
    ///
    /// # Errors
    ///
    /// Returns `BracketError` if endpoints are non-finite, equal, or reversed.
    pub fn new(bracket: [f64; 2]) -> Result<Self, BracketError> {
        let [low, high] = bracket;

        if !low.is_finite() || !high.is_finite() {
            return Err(BracketError::NonFinite);
        }

        #[allow(clippy::float_cmp)]
        if low == high {
            return Err(BracketError::ZeroWidth);
        }

        if low > high {
            return Err(BracketError::Reversed);
        }

        Ok(Self { low, high })
    }

    #[must_use]
    pub fn low(&self) -> f64 {
        self.low
    }

    #[must_use]
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Returns the bracket bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.low, self.high]
    }

    /// Returns the midpoint of the bracket.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.low + self.high)
    }

    /// Returns the bracket width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// Returns true if `x` lies within the closed interval.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        (self.low..=self.high).contains(&x)
    }

    /// Returns true if the bracket width is within the x tolerance.
    #[must_use]
    pub fn is_x_converged(&self, x_abs_tol: f64) -> bool {
        self.width() <= x_abs_tol
    }

    /// Shrinks the bracket toward the half that still holds the target.
    ///
    /// `x` must lie inside the bracket; an `x` equal to an endpoint leaves
    /// the bracket unchanged.
    pub(super) fn shrink(&mut self, x: f64, residual: f64, monotonicity: Monotonicity) {
        debug_assert!(self.contains(x));
        if monotonicity.target_above(residual) {
            self.low = x;
        } else {
            self.high = x;
        }
    }
}
