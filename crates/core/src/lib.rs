//! Core traits and types for the wapoints workspace.
//!
//! This crate defines the shared abstractions that the inverse solver and the
//! scoring layer build on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output; the
//!   forward scoring evaluator is injected through it
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — receives solver events and optionally returns control actions

mod model;
mod observer;

pub use observer::Observer;
pub use {model::Model, model::Snapshot};
