use thiserror::Error;

/// Failure to connect the start to the goal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Every node reachable from the start was expanded without reaching the goal.
    #[error("no path found")]
    NoPathFound,
}
