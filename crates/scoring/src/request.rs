use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Gender category of a scoring table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Gender {
    Men,
    Women,
}

/// Error returned when a gender code is neither `M` nor `F`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unsupported gender {0:?}, expected \"M\" or \"F\"")]
pub struct ParseGenderError(String);

impl Gender {
    /// Returns the single-letter code used on the wire.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Gender::Men => "M",
            Gender::Women => "F",
        }
    }
}

impl FromStr for Gender {
    type Err = ParseGenderError;

    /// Parses `M`/`F`, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "M" => Ok(Gender::Men),
            "F" => Ok(Gender::Women),
            _ => Err(ParseGenderError(s.to_owned())),
        }
    }
}

impl TryFrom<String> for Gender {
    type Error = ParseGenderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Gender> for String {
    fn from(gender: Gender) -> Self {
        gender.code().to_owned()
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Where the performance was achieved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Venue {
    Indoor,
    Outdoor,
}

impl Venue {
    #[must_use]
    pub fn from_indoor(indoor: bool) -> Self {
        if indoor { Venue::Indoor } else { Venue::Outdoor }
    }

    #[must_use]
    pub fn is_indoor(self) -> bool {
        self == Venue::Indoor
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Venue::Indoor => "indoor",
            Venue::Outdoor => "outdoor",
        }
    }
}

/// Which way a request converts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Performance in, points out.
    #[default]
    PerformanceToPoints,
    /// Target points in, performance out.
    PointsToPerformance,
}

impl Direction {
    /// Maps a wire name to a direction.
    ///
    /// Only `points_to_performance` selects the inverse direction; every other
    /// value is treated as a forward request.
    #[must_use]
    pub fn from_wire(name: &str) -> Self {
        if name == "points_to_performance" {
            Direction::PointsToPerformance
        } else {
            Direction::PerformanceToPoints
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::PerformanceToPoints => "performance_to_points",
            Direction::PointsToPerformance => "points_to_performance",
        }
    }
}

/// Identifies one scoring table: an event for a gender at a venue.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventKey {
    pub event: String,
    pub gender: Gender,
    pub venue: Venue,
}

impl EventKey {
    pub fn new(event: impl Into<String>, gender: Gender, venue: Venue) -> Self {
        Self {
            event: event.into(),
            gender,
            venue,
        }
    }
}

impl fmt::Display for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.event, self.gender, self.venue.as_str())
    }
}

/// A validated scoring request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringRequest {
    key: EventKey,
    direction: Direction,
}

impl ScoringRequest {
    pub fn new(
        event: impl Into<String>,
        gender: Gender,
        venue: Venue,
        direction: Direction,
    ) -> Self {
        Self {
            key: EventKey::new(event, gender, venue),
            direction,
        }
    }

    #[must_use]
    pub fn key(&self) -> &EventKey {
        &self.key
    }

    #[must_use]
    pub fn event(&self) -> &str {
        &self.key.event
    }

    #[must_use]
    pub fn gender(&self) -> Gender {
        self.key.gender
    }

    #[must_use]
    pub fn venue(&self) -> Venue {
        self.key.venue
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_parses_case_insensitively() {
        assert_eq!("m".parse(), Ok(Gender::Men));
        assert_eq!(" F ".parse(), Ok(Gender::Women));
        assert!("X".parse::<Gender>().is_err());
        assert!("men".parse::<Gender>().is_err());
    }

    #[test]
    fn gender_displays_code() {
        assert_eq!(Gender::Women.to_string(), "F");
    }

    #[test]
    fn only_inverse_name_selects_inverse() {
        assert_eq!(
            Direction::from_wire("points_to_performance"),
            Direction::PointsToPerformance
        );
        assert_eq!(
            Direction::from_wire("performance_to_points"),
            Direction::PerformanceToPoints
        );
        assert_eq!(
            Direction::from_wire("sideways"),
            Direction::PerformanceToPoints
        );
    }

    #[test]
    fn venue_follows_indoor_flag() {
        assert_eq!(Venue::from_indoor(true), Venue::Indoor);
        assert_eq!(Venue::from_indoor(false), Venue::Outdoor);
        assert!(!Venue::Outdoor.is_indoor());
    }

    #[test]
    fn request_exposes_key() {
        let request = ScoringRequest::new(
            "110mH",
            Gender::Men,
            Venue::Outdoor,
            Direction::PointsToPerformance,
        );
        assert_eq!(request.key().to_string(), "110mH M outdoor");
        assert_eq!(request.direction(), Direction::PointsToPerformance);
    }
}
