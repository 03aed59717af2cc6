use std::{collections::HashMap, fmt, sync::Arc};

use crate::{EventKey, Gender, Venue};

/// A closed-form score used when the scoring table has no data.
pub trait Fallback: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Returns points for `performance`.
    fn points(&self, performance: f64) -> f64;
}

/// `round(a * max(c - performance, 0)^b)`.
///
/// A time-event approximation: `c` is the time at which points reach zero,
/// and slower times score 0.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerLawFallback {
    pub name: String,
    pub a: f64,
    pub c: f64,
    pub b: f64,
}

impl PowerLawFallback {
    /// The legacy approximation for the men's outdoor 100m.
    #[must_use]
    pub fn legacy_men_100m() -> Self {
        Self {
            name: "legacy-100m-men-outdoor".to_owned(),
            a: 25.4347,
            c: 18.0,
            b: 1.81,
        }
    }
}

impl Fallback for PowerLawFallback {
    fn name(&self) -> &str {
        &self.name
    }

    fn points(&self, performance: f64) -> f64 {
        (self.a * (self.c - performance).max(0.0).powf(self.b)).round()
    }
}

/// Fallbacks keyed by event, gender, and venue.
///
/// Lookups for unregistered keys return `None`, so the caller gives up rather
/// than scoring with a formula meant for another event.
#[derive(Clone, Default)]
pub struct FallbackRegistry {
    entries: HashMap<EventKey, Arc<dyn Fallback>>,
}

impl FallbackRegistry {
    /// Creates a registry holding the legacy men's outdoor 100m approximation.
    #[must_use]
    pub fn with_builtin() -> Self {
        let mut registry = Self::default();
        registry.register(
            EventKey::new("100m", Gender::Men, Venue::Outdoor),
            PowerLawFallback::legacy_men_100m(),
        );
        registry
    }

    /// Registers `fallback` for `key`, replacing any previous entry.
    pub fn register(&mut self, key: EventKey, fallback: impl Fallback + 'static) {
        self.entries.insert(key, Arc::new(fallback));
    }

    #[must_use]
    pub fn get(&self, key: &EventKey) -> Option<&dyn Fallback> {
        self.entries.get(key).map(Arc::as_ref)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for FallbackRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.entries
                    .iter()
                    .map(|(key, fallback)| (key.to_string(), fallback.name().to_owned())),
            )
            .finish()
    }
}
