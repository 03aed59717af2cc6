/// Control actions supported by the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the search immediately.
    ///
    /// No best-effort value is returned; the solve ends with
    /// [`Error::StoppedByObserver`](super::Error::StoppedByObserver).
    StopEarly,
}
