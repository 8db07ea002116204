/// Actions an observer can take during a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the current `advance` call and return to the caller.
    ///
    /// The buffer is left as it is, so the search can be resumed with
    /// another call to `advance`.
    StopEarly,
}
