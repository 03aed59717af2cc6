use thiserror::Error;

/// Configuration for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    x_abs_tol: f64,
    residual_tol: f64,
}

/// Errors that can occur when validating a bisection solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("x_abs_tol must be finite and non-negative")]
    XAbs,

    #[error("residual_tol must be finite and non-negative")]
    Residual,
}

impl Default for Config {
    /// Bracket width of 0.01 performance units, a point match within 1.0,
    /// and at most 100 evaluations.
    fn default() -> Self {
        Self {
            max_iters: 100,
            x_abs_tol: 0.01,
            residual_tol: 1.0,
        }
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if any tolerance is negative or non-finite.
    pub fn new(max_iters: usize, x_abs_tol: f64, residual_tol: f64) -> Result<Self, ConfigError> {
        if !x_abs_tol.is_finite() || x_abs_tol < 0.0 {
            return Err(ConfigError::XAbs);
        }
        if !residual_tol.is_finite() || residual_tol < 0.0 {
            return Err(ConfigError::Residual);
        }

        Ok(Self {
            max_iters,
            x_abs_tol,
            residual_tol,
        })
    }

    /// Returns the maximum number of midpoint evaluations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the bracket width at which the search gives up narrowing.
    #[must_use]
    pub fn x_abs_tol(&self) -> f64 {
        self.x_abs_tol
    }

    /// Returns the point difference below which a midpoint is accepted.
    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn default_matches_scoring_search() {
        let config = Config::default();
        assert_eq!(config.max_iters(), 100);
        assert_relative_eq!(config.x_abs_tol(), 0.01);
        assert_relative_eq!(config.residual_tol(), 1.0);
    }

    #[test]
    fn rejects_bad_tolerances() {
        assert_eq!(Config::new(10, -1.0, 1.0), Err(ConfigError::XAbs));
        assert_eq!(Config::new(10, f64::NAN, 1.0), Err(ConfigError::XAbs));
        assert_eq!(
            Config::new(10, 0.01, f64::INFINITY),
            Err(ConfigError::Residual)
        );
    }
}
