use crate::view_model::{AppViewModel, FetchStatus};
use crate::{BookmarkSet, FilterChange, ResultItem, SearchPage};

/// Current search parameters plus the single-flight flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    query: String,
    section: String,
    page: u32,
    total_pages: u32,
    include_summaries: bool,
    in_flight: bool,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            section: String::new(),
            page: 1,
            total_pages: 1,
            include_summaries: false,
            in_flight: false,
        }
    }
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn include_summaries(&self) -> bool {
        self.include_summaries
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Applies the provided filter fields and resets to the first page.
    pub fn apply_filters(&mut self, change: FilterChange) {
        if let Some(query) = change.query {
            self.query = query.trim().to_string();
        }
        if let Some(section) = change.section {
            self.section = section;
        }
        if let Some(include_summaries) = change.include_summaries {
            self.include_summaries = include_summaries;
        }
        self.page = 1;
    }

    /// Moves to page `n` when `1 <= n <= total_pages`.
    pub fn go_to_page(&mut self, n: u32) -> bool {
        if n < 1 || n > self.total_pages {
            return false;
        }
        self.page = n;
        true
    }

    pub fn next_page(&mut self) -> bool {
        match self.page.checked_add(1) {
            Some(n) => self.go_to_page(n),
            None => false,
        }
    }

    pub fn previous_page(&mut self) -> bool {
        match self.page.checked_sub(1) {
            Some(n) => self.go_to_page(n),
            None => false,
        }
    }

    /// Claims the single-flight gate. Returns false if a request is already outstanding.
    pub fn try_begin_request(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn end_request(&mut self) {
        self.in_flight = false;
    }

    pub(crate) fn set_total_pages(&mut self, pages: u32) {
        self.total_pages = pages.max(1);
    }
}

/// Everything the core owns: search parameters, bookmarks and the last applied results.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    search: SearchState,
    bookmarks: BookmarkSet,
    results: Vec<ResultItem>,
    total_results: u64,
    status: FetchStatus,
    /// Page of the last applied response; `None` until one arrives.
    shown_page: Option<u32>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bookmarks(bookmarks: BookmarkSet) -> Self {
        Self {
            bookmarks,
            ..Self::default()
        }
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn search_mut(&mut self) -> &mut SearchState {
        &mut self.search
    }

    pub fn bookmarks(&self) -> &BookmarkSet {
        &self.bookmarks
    }

    pub fn results(&self) -> &[ResultItem] {
        &self.results
    }

    pub fn total_results(&self) -> u64 {
        self.total_results
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    /// Page the displayed pagination refers to. Lags the requested page
    /// while a page change is loading or after it failed.
    pub fn shown_page(&self) -> u32 {
        self.shown_page.unwrap_or(self.search.page)
    }

    pub fn is_bookmarked(&self, id: &str) -> bool {
        self.bookmarks.contains(id)
    }

    pub fn toggle_bookmark(&mut self, id: &str) -> bool {
        let (bookmarks, now_bookmarked) = std::mem::take(&mut self.bookmarks).toggle(id);
        self.bookmarks = bookmarks;
        now_bookmarked
    }

    /// Marks the start of a fetch: the previously displayed results are cleared.
    pub fn begin_loading(&mut self) {
        self.results.clear();
        self.status = FetchStatus::Loading;
    }

    /// Applies a parsed response. `page` is left untouched.
    pub fn apply_page(&mut self, page: SearchPage) {
        self.search.set_total_pages(page.pages);
        self.shown_page = Some(self.search.page);
        self.total_results = page.total;
        self.results = page.results;
        self.status = FetchStatus::Loaded;
    }

    /// Records a failed fetch; the shown page and `total_pages` keep their
    /// last successful values while `page` stays the requested one for retry.
    pub fn apply_failure(&mut self) {
        self.results.clear();
        self.status = FetchStatus::Failed;
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel::from_state(self)
    }
}
