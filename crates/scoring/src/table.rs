use std::{collections::HashMap, fs, path::Path};

use serde::Deserialize;
use thiserror::Error;
use wapoints_solvers::equation::bisection::Monotonicity;

use crate::{EventKey, Gender, Venue};

/// Edition assumed when a table file does not name one.
pub const DEFAULT_EDITION: &str = "2017";

/// Coefficients of one quadratic scoring table.
///
/// Points are `floor(conversion_factor * (performance + result_shift)^2 + point_shift)`.
/// `-result_shift` is the zero-point performance: the slowest time or shortest
/// mark that still earns points.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coefficients {
    pub conversion_factor: f64,
    pub result_shift: f64,
    pub point_shift: f64,
}

impl Coefficients {
    /// Evaluates the table at `performance`.
    ///
    /// Performances on the far side of the zero-point score 0, as does any
    /// negative result of the formula.
    #[must_use]
    pub fn points(&self, performance: f64, monotonicity: Monotonicity) -> f64 {
        let shifted = performance + self.result_shift;
        let past_zero_point = match monotonicity {
            Monotonicity::Decreasing => shifted >= 0.0,
            Monotonicity::Increasing => shifted <= 0.0,
        };
        if past_zero_point {
            return 0.0;
        }

        (self.conversion_factor * shifted.powi(2) + self.point_shift)
            .floor()
            .max(0.0)
    }

    fn validate(&self) -> Result<(), &'static str> {
        if !self.conversion_factor.is_finite() || self.conversion_factor <= 0.0 {
            return Err("conversion_factor must be finite and positive");
        }
        if !self.result_shift.is_finite() {
            return Err("result_shift must be finite");
        }
        if !self.point_shift.is_finite() {
            return Err("point_shift must be finite");
        }
        Ok(())
    }
}

/// Errors that can occur when loading scoring tables.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read table file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse table file")]
    Parse(#[from] toml::de::Error),

    #[error("duplicate table for {key}")]
    Duplicate { key: EventKey },

    #[error("invalid coefficients for {key}: {reason}")]
    InvalidCoefficients { key: EventKey, reason: &'static str },
}

/// On-disk layout of a table file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TableFile {
    edition: Option<String>,
    #[serde(default)]
    tables: Vec<TableEntry>,
}

#[derive(Debug, Deserialize)]
struct TableEntry {
    event: String,
    gender: Gender,
    venue: Venue,
    #[serde(flatten)]
    coefficients: Coefficients,
}

/// Scoring tables for one edition, keyed by event, gender, and venue.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSet {
    edition: String,
    tables: HashMap<EventKey, Coefficients>,
}

impl Default for TableSet {
    fn default() -> Self {
        Self::new(DEFAULT_EDITION)
    }
}

impl TableSet {
    /// Creates an empty table set for `edition`.
    pub fn new(edition: impl Into<String>) -> Self {
        Self {
            edition: edition.into(),
            tables: HashMap::new(),
        }
    }

    /// Parses a TOML table file.
    ///
    /// ```toml
    /// edition = "2017"
    ///
    /// [[tables]]
    /// event = "100m"
    /// gender = "M"
    /// venue = "outdoor"
    /// conversion_factor = 24.63
    /// result_shift = -17.0
    /// point_shift = 0.0
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed, an entry repeats a key, or
    /// coefficients are invalid.
    pub fn from_toml_str(source: &str) -> Result<Self, TableError> {
        let file: TableFile = toml::from_str(source)?;
        let mut set = Self::new(file.edition.unwrap_or_else(|| DEFAULT_EDITION.to_owned()));
        for entry in file.tables {
            let key = EventKey::new(entry.event, entry.gender, entry.venue);
            set.insert(key, entry.coefficients)?;
        }
        Ok(set)
    }

    /// Reads and parses a TOML table file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails to parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| TableError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Adds a table.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is already present or the coefficients
    /// are invalid.
    pub fn insert(&mut self, key: EventKey, coefficients: Coefficients) -> Result<(), TableError> {
        if let Err(reason) = coefficients.validate() {
            return Err(TableError::InvalidCoefficients { key, reason });
        }
        if self.tables.contains_key(&key) {
            return Err(TableError::Duplicate { key });
        }
        self.tables.insert(key, coefficients);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, key: &EventKey) -> Option<&Coefficients> {
        self.tables.get(key)
    }

    #[must_use]
    pub fn edition(&self) -> &str {
        &self.edition
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
