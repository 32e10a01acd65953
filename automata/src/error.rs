use crate::state::StateId;

/// Error returned when editing the state graph of an NFA directly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The handle does not name a state of this NFA.
    #[error("unknown state {state} (the automaton has {total} states)")]
    UnknownState { state: StateId, total: usize },
}

/// Alias for [`Result`] for [`GraphError`].
pub type GraphResult<T> = std::result::Result<T, GraphError>;
