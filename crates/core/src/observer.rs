/// Watches a solver as it iterates.
///
/// A solver hands every event it produces to its observer. Returning
/// `Some(action)` asks the solver to act on it, for example to stop the
/// search. Returning `None` leaves the iteration alone, which is all a
/// tracing observer ever does.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is one that
/// never acts.
pub trait Observer<E, A> {
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
