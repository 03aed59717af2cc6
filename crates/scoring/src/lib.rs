//! Conversion between athletic performances and scoring points.
//!
//! The forward direction (performance to points) evaluates a coefficient
//! [`TableSet`] and, where the table has no data, a registered
//! [`Fallback`]. The inverse direction (points to performance) classifies the
//! event, picks a search bracket, and inverts the forward evaluation with the
//! bisection solver from `wapoints-solvers`.
//!
//! [`Calculator`] is the entry point for both directions.

mod calculator;
mod error;
mod event;
mod fallback;
mod request;
mod scorer;
mod table;

pub use calculator::{Calculator, Conversion};
pub use error::{Error, ErrorKind};
pub use event::{Classification, EventClass, EventPolicy, SearchBracket, classify};
pub use fallback::{Fallback, FallbackRegistry, PowerLawFallback};
pub use request::{Direction, EventKey, Gender, ParseGenderError, ScoringRequest, Venue};
pub use scorer::{CalculationError, Scorer};
pub use table::{Coefficients, TableError, TableSet};
