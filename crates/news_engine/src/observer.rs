use std::sync::Weak;

use news_core::ResultItem;

use crate::session::{NewsSession, SessionInner};
use crate::{PersistError, RefreshFailure, RefreshOutcome};

/// Output signals for the rendering layer.
///
/// Callbacks run on the caller's task and must not block.
pub trait SearchObserver: Send + Sync {
    fn on_loading_start(&self) {}
    fn on_results(&self, _items: &[ResultItem], _total_count: u64) {}
    fn on_error(&self, _failure: &RefreshFailure, _retry: RetryAction) {}
    fn on_bookmark_changed(&self, _id: &str, _bookmarked: bool) {}
    fn on_pagination_changed(&self, _page: u32, _total_pages: u32) {}
    /// Bookmarks could not be written; the in-memory set stays authoritative.
    fn on_persistence_warning(&self, _error: &PersistError) {}
}

/// Observer that ignores every signal.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl SearchObserver for NullObserver {}

/// Re-runs `refresh` on the session that failed.
///
/// Holds a weak reference so an observer keeping the action does not keep the
/// session alive.
#[derive(Clone)]
pub struct RetryAction {
    session: Weak<SessionInner>,
}

impl RetryAction {
    pub(crate) fn new(session: Weak<SessionInner>) -> Self {
        Self { session }
    }

    /// Returns `None` if the session has been dropped.
    pub async fn run(&self) -> Option<RefreshOutcome> {
        let inner = self.session.upgrade()?;
        Some(NewsSession::from_inner(inner).refresh().await)
    }
}

impl std::fmt::Debug for RetryAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RetryAction").finish_non_exhaustive()
    }
}
