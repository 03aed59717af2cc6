use tracing::{debug, trace};
use wapoints_core::Model;
use wapoints_solvers::equation::bisection::{self, Action, Config, Event, Solution};

use crate::{
    Classification, Direction, Error, EventPolicy, FallbackRegistry, Scorer, ScoringRequest,
    TableSet,
};

/// The outcome of [`Calculator::convert`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Conversion {
    /// Forward result; `None` when neither table nor fallback can score.
    Points(Option<f64>),
    /// Inverse result.
    Performance(Solution),
}

/// Converts between performances and points for any event in its tables.
///
/// A calculator is immutable once built and holds no per-request state, so
/// one instance can serve concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    tables: TableSet,
    fallbacks: FallbackRegistry,
    policy: EventPolicy,
    config: Config,
}

impl Calculator {
    pub fn new(tables: TableSet, fallbacks: FallbackRegistry) -> Self {
        Self {
            tables,
            fallbacks,
            policy: EventPolicy::default(),
            config: Config::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: EventPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn tables(&self) -> &TableSet {
        &self.tables
    }

    #[must_use]
    pub fn fallbacks(&self) -> &FallbackRegistry {
        &self.fallbacks
    }

    #[must_use]
    pub fn policy(&self) -> EventPolicy {
        self.policy
    }

    /// Converts `value` in the request's direction.
    ///
    /// `value` is a performance for [`Direction::PerformanceToPoints`] and a
    /// target score for [`Direction::PointsToPerformance`].
    ///
    /// # Errors
    ///
    /// See [`Calculator::performance_to_points`] and
    /// [`Calculator::points_to_performance`].
    pub fn convert(&self, request: &ScoringRequest, value: f64) -> Result<Conversion, Error> {
        match request.direction() {
            Direction::PerformanceToPoints => self
                .performance_to_points(request, value)
                .map(Conversion::Points),
            Direction::PointsToPerformance => self
                .points_to_performance(request, value)
                .map(Conversion::Performance),
        }
    }

    /// Scores a performance.
    ///
    /// Returns `Ok(None)` when neither the tables nor a fallback cover the
    /// request.
    ///
    /// # Errors
    ///
    /// Returns an error if the event is rejected by the policy or the
    /// performance is negative or non-finite.
    pub fn performance_to_points(
        &self,
        request: &ScoringRequest,
        performance: f64,
    ) -> Result<Option<f64>, Error> {
        let (_, scorer) = self.prepare(request, Direction::PerformanceToPoints)?;
        let points = scorer.call(&performance)?;

        if points.is_none() {
            debug!(key = %request.key(), performance, "no table or fallback for performance");
        }

        Ok(points)
    }

    /// Finds a performance that scores `target` points.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTarget`] for a negative or non-finite target,
    /// [`Error::UnknownEvent`] under a strict policy, and [`Error::Solve`] when
    /// the search is aborted or exhausted.
    pub fn points_to_performance(
        &self,
        request: &ScoringRequest,
        target: f64,
    ) -> Result<Solution, Error> {
        if !target.is_finite() || target < 0.0 {
            return Err(Error::InvalidTarget { target });
        }

        let (classification, scorer) = self.prepare(request, Direction::PointsToPerformance)?;
        let bracket = classification
            .bracket
            .unwrap_or_else(|| classification.class.bracket());

        if let Some(fallback) = scorer.fallback() {
            debug!(key = %request.key(), fallback = fallback.name(), "fallback available");
        }

        let observer = |event: &Event<'_>| -> Option<Action> {
            trace!(
                iter = event.iter,
                low = event.bracket.low(),
                high = event.bracket.high(),
                performance = event.eval.x(),
                points = event.eval.points(),
                "bisection step"
            );
            None
        };

        let solution = bisection::solve(
            &scorer,
            target,
            bracket.as_array(),
            classification.class.monotonicity(),
            &self.config,
            observer,
        )?;

        debug!(
            key = %request.key(),
            target,
            performance = solution.performance,
            iters = solution.iters,
            "solved for performance"
        );

        Ok(solution)
    }

    fn prepare(
        &self,
        request: &ScoringRequest,
        direction: Direction,
    ) -> Result<(Classification, Scorer<'_>), Error> {
        let classification = self.policy.classify(request.event(), direction)?;
        let key = request.key();
        let scorer = Scorer::new(
            self.tables.get(key).copied(),
            classification.class.monotonicity(),
            self.fallbacks.get(key),
        );
        Ok((classification, scorer))
    }
}
