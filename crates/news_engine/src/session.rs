use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use news_core::{
    build_request, parse_search_response, update, ApiConfig, AppState, AppViewModel, BookmarkSet,
    Effect, FilterChange, Msg, RequestDescriptor, SearchPage, SearchState,
};
use news_logging::{news_debug, news_error, news_info, news_warn};

use crate::{
    BookmarkStore, RefreshFailure, RefreshOutcome, RetryAction, SearchObserver, Transport,
};

pub(crate) struct SessionInner {
    api: ApiConfig,
    transport: Arc<dyn Transport>,
    bookmarks: BookmarkStore,
    observer: Arc<dyn SearchObserver>,
    state: Mutex<AppState>,
}

impl SessionInner {
    fn lock_state(&self) -> MutexGuard<'_, AppState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Owns the search state and bookmarks for one client and runs commands against them.
///
/// Cloning yields another handle to the same session. At most one request is
/// outstanding per session; a `refresh` issued while one is in flight returns
/// [`RefreshOutcome::Busy`] without side effects.
#[derive(Clone)]
pub struct NewsSession {
    inner: Arc<SessionInner>,
}

impl NewsSession {
    /// Creates a session, loading bookmarks from `bookmarks` once.
    pub fn new(
        api: ApiConfig,
        transport: Arc<dyn Transport>,
        bookmarks: BookmarkStore,
        observer: Arc<dyn SearchObserver>,
    ) -> Self {
        let state = AppState::with_bookmarks(bookmarks.load());
        Self {
            inner: Arc::new(SessionInner {
                api,
                transport,
                bookmarks,
                observer,
                state: Mutex::new(state),
            }),
        }
    }

    pub(crate) fn from_inner(inner: Arc<SessionInner>) -> Self {
        Self { inner }
    }

    pub fn view(&self) -> AppViewModel {
        self.inner.lock_state().view()
    }

    pub fn search(&self) -> SearchState {
        self.inner.lock_state().search().clone()
    }

    pub fn bookmarks(&self) -> BookmarkSet {
        self.inner.lock_state().bookmarks().clone()
    }

    pub fn is_bookmarked(&self, id: &str) -> bool {
        self.inner.lock_state().is_bookmarked(id)
    }

    /// Applies `msg` and runs its effects. Returns the refresh outcome if the
    /// message triggered one, `None` for no-ops and bookmark toggles.
    pub async fn dispatch(&self, msg: Msg) -> Option<RefreshOutcome> {
        if self.apply(msg) {
            Some(self.refresh().await)
        } else {
            None
        }
    }

    pub async fn set_filters(&self, change: FilterChange) -> Option<RefreshOutcome> {
        self.dispatch(Msg::FiltersChanged(change)).await
    }

    pub async fn go_to_page(&self, page: u32) -> Option<RefreshOutcome> {
        self.dispatch(Msg::GoToPage(page)).await
    }

    pub async fn next(&self) -> Option<RefreshOutcome> {
        self.dispatch(Msg::NextPage).await
    }

    pub async fn previous(&self) -> Option<RefreshOutcome> {
        self.dispatch(Msg::PreviousPage).await
    }

    /// Flips the bookmark for `id`, persists the set and returns the new state.
    pub fn toggle_bookmark(&self, id: &str) -> bool {
        self.apply(Msg::BookmarkToggled(id.to_string()));
        self.is_bookmarked(id)
    }

    /// Fetches the page described by the current state and applies the response.
    pub async fn refresh(&self) -> RefreshOutcome {
        let request = {
            let mut state = self.inner.lock_state();
            if !state.search_mut().try_begin_request() {
                news_debug!("Refresh rejected: a request is already in flight");
                return RefreshOutcome::Busy;
            }
            state.begin_loading();
            build_request(&self.inner.api, state.search())
        };
        let _gate = InFlightGate { inner: &self.inner };

        let observer = &self.inner.observer;
        observer.on_loading_start();
        news_info!("Requesting {}", request.redacted());

        match self.fetch_page(&request).await {
            Ok(page) => {
                let (items, total_results, current_page, total_pages) = {
                    let mut state = self.inner.lock_state();
                    state.apply_page(page);
                    (
                        state.results().to_vec(),
                        state.total_results(),
                        state.search().page(),
                        state.search().total_pages(),
                    )
                };
                news_info!(
                    "Loaded {} result(s), page {} of {}",
                    items.len(),
                    current_page,
                    total_pages
                );
                observer.on_results(&items, total_results);
                observer.on_pagination_changed(current_page, total_pages);
                RefreshOutcome::Loaded {
                    result_count: items.len(),
                    total_results,
                    total_pages,
                }
            }
            Err(failure) => {
                news_warn!("Refresh failed: {}", failure);
                self.inner.lock_state().apply_failure();
                observer.on_error(&failure, RetryAction::new(Arc::downgrade(&self.inner)));
                RefreshOutcome::Failed(failure)
            }
        }
    }

    async fn fetch_page(&self, request: &RequestDescriptor) -> Result<SearchPage, RefreshFailure> {
        let response = self.inner.transport.request(request).await?;
        if !response.is_success() {
            return Err(RefreshFailure::HttpStatus(response.status));
        }
        Ok(parse_search_response(&response.body)?)
    }

    /// Runs the pure update under the lock, then the local effects outside it.
    /// Returns true when a refresh was requested.
    fn apply(&self, msg: Msg) -> bool {
        let effects = {
            let mut guard = self.inner.lock_state();
            let state = std::mem::take(&mut *guard);
            let (state, effects) = update(state, msg);
            *guard = state;
            effects
        };

        let mut wants_refresh = false;
        for effect in effects {
            match effect {
                Effect::Refresh => wants_refresh = true,
                Effect::PersistBookmarks(set) => {
                    if let Err(err) = self.inner.bookmarks.save(&set) {
                        news_error!("Failed to persist {} bookmark(s): {}", set.len(), err);
                        self.inner.observer.on_persistence_warning(&err);
                    }
                }
                Effect::BookmarkChanged { id, bookmarked } => {
                    self.inner.observer.on_bookmark_changed(&id, bookmarked);
                }
            }
        }
        wants_refresh
    }
}

/// Releases the single-flight flag on every exit path, including a dropped future.
struct InFlightGate<'a> {
    inner: &'a SessionInner,
}

impl Drop for InFlightGate<'_> {
    fn drop(&mut self) {
        self.inner.lock_state().search_mut().end_request();
    }
}
