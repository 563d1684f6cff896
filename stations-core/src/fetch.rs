use crate::source::SourceError;

/// Lifecycle of one view's data region.
///
/// A view starts in [`FetchState::Loading`], issues a single lookup, and
/// settles into [`FetchState::Ready`] or [`FetchState::Failed`]. Both settled
/// states are terminal; there is no built-in retry. The holder carries no
/// rendering concerns, so any presentation layer can match on it.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Ready(T),
    Failed(SourceError),
}

impl<T> FetchState<T> {
    /// Settle a pending state with a lookup outcome.
    pub fn from_result(result: Result<T, SourceError>) -> Self {
        match result {
            Ok(value) => FetchState::Ready(value),
            Err(err) => FetchState::Failed(err),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// Settled states do not transition again.
    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }
}
