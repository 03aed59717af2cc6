use std::{cell::Cell, convert::Infallible};

use approx::assert_relative_eq;
use thiserror::Error;

use wapoints_core::Model;

use super::{Action, Config, Error, Event, Monotonicity, solve, solve_unobserved};

const TIME_BRACKET: [f64; 2] = [5.0, 300.0];
const DISTANCE_BRACKET: [f64; 2] = [0.1, 100.0];

/// A straight-line score: `intercept + slope * x`.
struct Linear {
    intercept: f64,
    slope: f64,
}

impl Linear {
    fn points(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

impl Model for Linear {
    type Input = f64;
    type Output = Option<f64>;
    type Error = Infallible;

    fn call(&self, x: &f64) -> Result<Option<f64>, Self::Error> {
        Ok(Some(self.points(*x)))
    }
}

/// Time-like score: 1000 points at zero seconds, 5 fewer per second.
fn time_score() -> Linear {
    Linear {
        intercept: 1000.0,
        slope: -5.0,
    }
}

/// Distance-like score: 20 points per meter.
fn distance_score() -> Linear {
    Linear {
        intercept: 0.0,
        slope: 20.0,
    }
}

#[test]
fn time_event_finds_performance() {
    let model = time_score();

    let solution = solve_unobserved(
        &model,
        500.0,
        TIME_BRACKET,
        Monotonicity::Decreasing,
        &Config::default(),
    )
    .expect("should converge");

    assert_relative_eq!(solution.performance, 100.0, epsilon = 0.2);
    assert!((model.points(solution.x) - 500.0).abs() < 1.0);
    assert_relative_eq!(solution.performance, 100.07);
    assert_eq!(solution.iters, 9);
}

#[test]
fn distance_event_finds_performance() {
    let model = distance_score();

    let solution = solve_unobserved(
        &model,
        400.0,
        DISTANCE_BRACKET,
        Monotonicity::Increasing,
        &Config::default(),
    )
    .expect("should converge");

    assert_relative_eq!(solution.performance, 20.0);
    assert!(solution.residual.abs() < 1.0);
    assert_eq!(solution.iters, 8);
}

#[test]
fn unreachable_target_exhausts() {
    let model = time_score();

    // The best score in the bracket is 975 at 5 seconds.
    let result = solve_unobserved(
        &model,
        5000.0,
        TIME_BRACKET,
        Monotonicity::Decreasing,
        &Config::default(),
    );

    let Err(Error::Exhausted { iters, bracket }) = result else {
        panic!("expected exhausted search, got {result:?}");
    };

    // 295 / 2^15 is the first width at or below 0.01.
    assert_eq!(iters, 15);
    assert_relative_eq!(bracket[0], 5.0);
    assert!(bracket[1] - bracket[0] <= 0.01);
}

#[test]
fn iteration_cap_exhausts() {
    let model = distance_score();
    let config = Config::new(3, 0.01, 1.0).expect("valid config");

    let result = solve_unobserved(
        &model,
        400.0,
        DISTANCE_BRACKET,
        Monotonicity::Increasing,
        &config,
    );

    assert!(matches!(result, Err(Error::Exhausted { iters: 3, .. })));
}

/// Model with no data anywhere, counting how often it is asked.
#[derive(Default)]
struct NoData {
    calls: Cell<usize>,
}

impl Model for NoData {
    type Input = f64;
    type Output = Option<f64>;
    type Error = Infallible;

    fn call(&self, _x: &f64) -> Result<Option<f64>, Self::Error> {
        self.calls.set(self.calls.get() + 1);
        Ok(None)
    }
}

#[test]
fn undefined_score_rejects_immediately() {
    let model = NoData::default();

    let result = solve_unobserved(
        &model,
        700.0,
        TIME_BRACKET,
        Monotonicity::Decreasing,
        &Config::default(),
    );

    let Err(Error::Rejected { x }) = result else {
        panic!("expected rejection, got {result:?}");
    };
    assert_relative_eq!(x, 152.5);
    assert_eq!(model.calls.get(), 1);
}

/// Model that produces NaN above a threshold.
struct NanAbove(f64);

impl Model for NanAbove {
    type Input = f64;
    type Output = Option<f64>;
    type Error = Infallible;

    fn call(&self, x: &f64) -> Result<Option<f64>, Self::Error> {
        Ok(Some(if *x > self.0 { f64::NAN } else { 10.0 * x }))
    }
}

#[test]
fn non_finite_score_rejects() {
    let result = solve_unobserved(
        &NanAbove(40.0),
        300.0,
        DISTANCE_BRACKET,
        Monotonicity::Increasing,
        &Config::default(),
    );

    assert!(matches!(result, Err(Error::Rejected { .. })));
}

#[derive(Debug, Error)]
#[error("table lookup failed at {0}")]
struct LookupError(f64);

struct Failing;

impl Model for Failing {
    type Input = f64;
    type Output = Option<f64>;
    type Error = LookupError;

    fn call(&self, x: &f64) -> Result<Option<f64>, Self::Error> {
        Err(LookupError(*x))
    }
}

#[test]
fn model_error_propagates() {
    let result = solve_unobserved(
        &Failing,
        10.0,
        DISTANCE_BRACKET,
        Monotonicity::Increasing,
        &Config::default(),
    );

    let Err(Error::Model(source)) = result else {
        panic!("expected model error, got {result:?}");
    };
    assert_eq!(source.to_string(), "table lookup failed at 50.05");
}

#[test]
fn bracket_keeps_target_inside() {
    let model = time_score();
    let expected = 100.0;

    let mut widths = Vec::new();
    let observer = |event: &Event<'_>| -> Option<Action> {
        assert!(event.bracket.low() < event.bracket.high());
        assert!(event.bracket.contains(expected));
        widths.push(event.bracket.width());
        None
    };

    solve(
        &model,
        500.0,
        TIME_BRACKET,
        Monotonicity::Decreasing,
        &Config::default(),
        observer,
    )
    .expect("should converge");

    assert!(widths.windows(2).all(|pair| pair[1] < pair[0]));
}

#[test]
fn observer_can_stop_iteration() {
    let model = time_score();

    let mut calls = 0usize;
    let observer = |event: &Event<'_>| {
        calls += 1;
        (event.iter >= 3).then_some(Action::StopEarly)
    };

    let result = solve(
        &model,
        500.0,
        TIME_BRACKET,
        Monotonicity::Decreasing,
        &Config::default(),
        observer,
    );

    assert!(matches!(result, Err(Error::StoppedByObserver { iters: 3 })));
    assert_eq!(calls, 3);
}

#[test]
fn recovers_performance_from_its_own_score() {
    let model = Linear {
        intercept: 0.0,
        slope: 100.0,
    };
    let performance = 12.34;

    let solution = solve_unobserved(
        &model,
        model.points(performance),
        DISTANCE_BRACKET,
        Monotonicity::Increasing,
        &Config::default(),
    )
    .expect("should converge");

    assert_relative_eq!(solution.performance, performance, epsilon = 0.05);
}

#[test]
fn errors_on_invalid_bracket() {
    let model = distance_score();

    for bracket in [[100.0, 0.1], [3.0, 3.0], [f64::NAN, 1.0]] {
        let result = solve_unobserved(
            &model,
            40.0,
            bracket,
            Monotonicity::Increasing,
            &Config::default(),
        );
        assert!(matches!(result, Err(Error::InvalidBracket(_))));
    }
}

#[test]
fn errors_on_non_finite_target() {
    let model = distance_score();

    let result = solve_unobserved(
        &model,
        f64::NAN,
        DISTANCE_BRACKET,
        Monotonicity::Increasing,
        &Config::default(),
    );

    assert!(matches!(result, Err(Error::NonFiniteTarget { .. })));
}
