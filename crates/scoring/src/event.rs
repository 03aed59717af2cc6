use wapoints_solvers::equation::bisection::Monotonicity;

use crate::{Direction, Error};

/// Events scored on time, where a lower value is better.
const TIME_EVENTS: [&str; 12] = [
    "100m", "200m", "400m", "800m", "1500m", "3000m", "5000m", "10000m", "100mH", "110mH",
    "400mH", "3000mSC",
];

/// Field events scored on distance or height.
const FIELD_EVENTS: [&str; 8] = ["HJ", "PV", "LJ", "TJ", "SP", "DT", "HT", "JT"];

/// How an event's score responds to its performance value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventClass {
    /// Faster (smaller) times score more.
    TimeBased,
    /// Longer (larger) marks score more.
    DistanceBased,
}

impl EventClass {
    /// Classifies an event identifier (case-sensitive).
    ///
    /// Anything outside the time-based list is treated as distance-based,
    /// including identifiers no table knows about.
    #[must_use]
    pub fn of(event: &str) -> Self {
        if TIME_EVENTS.contains(&event) {
            EventClass::TimeBased
        } else {
            EventClass::DistanceBased
        }
    }

    /// Returns the initial search bracket for the inverse direction.
    #[must_use]
    pub fn bracket(self) -> SearchBracket {
        match self {
            EventClass::TimeBased => SearchBracket {
                low: 5.0,
                high: 300.0,
            },
            EventClass::DistanceBased => SearchBracket {
                low: 0.1,
                high: 100.0,
            },
        }
    }

    #[must_use]
    pub fn monotonicity(self) -> Monotonicity {
        match self {
            EventClass::TimeBased => Monotonicity::Decreasing,
            EventClass::DistanceBased => Monotonicity::Increasing,
        }
    }
}

/// Performance bounds for the inverse search, in the event's own units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchBracket {
    pub low: f64,
    pub high: f64,
}

impl SearchBracket {
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.low, self.high]
    }
}

/// The classifier's view of a request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub class: EventClass,
    /// Present only for the points-to-performance direction.
    pub bracket: Option<SearchBracket>,
}

/// Classifies an event and prepares the search for the requested direction.
#[must_use]
pub fn classify(event: &str, direction: Direction) -> Classification {
    let class = EventClass::of(event);
    let bracket = match direction {
        Direction::PointsToPerformance => Some(class.bracket()),
        Direction::PerformanceToPoints => None,
    };
    Classification { class, bracket }
}

/// Whether unknown event identifiers are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventPolicy {
    /// Unknown events fall through to the distance-based class.
    #[default]
    Lenient,
    /// Only known track and field identifiers are accepted.
    Strict,
}

impl EventPolicy {
    /// Classifies under this policy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEvent`] under [`EventPolicy::Strict`] when the
    /// identifier is neither a known time-based nor a known field event.
    pub fn classify(self, event: &str, direction: Direction) -> Result<Classification, Error> {
        if self == EventPolicy::Strict
            && !TIME_EVENTS.contains(&event)
            && !FIELD_EVENTS.contains(&event)
        {
            return Err(Error::UnknownEvent {
                event: event.to_owned(),
            });
        }
        Ok(classify(event, direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn track_events_are_time_based() {
        for event in TIME_EVENTS {
            assert_eq!(EventClass::of(event), EventClass::TimeBased, "{event}");
        }
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(EventClass::of("100M"), EventClass::DistanceBased);
        assert_eq!(EventClass::of("3000msc"), EventClass::DistanceBased);
    }

    #[test]
    fn unknown_events_default_to_distance() {
        assert_eq!(EventClass::of("LJ"), EventClass::DistanceBased);
        assert_eq!(EventClass::of("60m"), EventClass::DistanceBased);
        assert_eq!(EventClass::of("not-an-event"), EventClass::DistanceBased);
    }

    #[test]
    fn brackets_follow_class() {
        let time = EventClass::TimeBased.bracket();
        assert_relative_eq!(time.low, 5.0);
        assert_relative_eq!(time.high, 300.0);

        let distance = EventClass::DistanceBased.bracket();
        assert_relative_eq!(distance.low, 0.1);
        assert_relative_eq!(distance.high, 100.0);
    }

    #[test]
    fn monotonicity_follows_class() {
        assert_eq!(
            EventClass::TimeBased.monotonicity(),
            Monotonicity::Decreasing
        );
        assert_eq!(
            EventClass::DistanceBased.monotonicity(),
            Monotonicity::Increasing
        );
    }

    #[test]
    fn classification_is_idempotent() {
        for event in ["400mH", "SP", "unknown"] {
            for direction in [
                Direction::PerformanceToPoints,
                Direction::PointsToPerformance,
            ] {
                assert_eq!(classify(event, direction), classify(event, direction));
            }
        }
    }

    #[test]
    fn only_inverse_gets_a_bracket() {
        assert!(
            classify("800m", Direction::PerformanceToPoints)
                .bracket
                .is_none()
        );
        assert_eq!(
            classify("800m", Direction::PointsToPerformance).bracket,
            Some(EventClass::TimeBased.bracket())
        );
    }

    #[test]
    fn strict_policy_rejects_unknown_events() {
        let result = EventPolicy::Strict.classify("100 m", Direction::PointsToPerformance);
        assert!(matches!(result, Err(Error::UnknownEvent { .. })));

        let field = EventPolicy::Strict
            .classify("PV", Direction::PointsToPerformance)
            .expect("known field event");
        assert_eq!(field.class, EventClass::DistanceBased);
    }

    #[test]
    fn lenient_policy_accepts_unknown_events() {
        let classification = EventPolicy::Lenient
            .classify("100 m", Direction::PointsToPerformance)
            .expect("lenient");
        assert_eq!(classification.class, EventClass::DistanceBased);
    }
}
