//! Numerical solvers for the wapoints workspace.
//!
//! The scoring tables only expose a forward evaluation (performance to
//! points). The solvers here invert such an evaluation numerically, treating
//! it as an opaque [`Model`](wapoints_core::Model).

pub mod equation;
