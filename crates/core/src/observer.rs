/// Watches a running search and may ask the engine to change course.
///
/// The engine reports each trigger point (a visited cell, an accepted
/// solution, a reached limit) as an event of type `E`. Returning `Some(action)`
/// asks the engine to act on it; returning `None` lets the search go on.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is the
/// observer that never intervenes.
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
