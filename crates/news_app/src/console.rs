use std::fmt::Write as _;
use std::sync::{Mutex, PoisonError};

use news_core::{AppViewModel, FetchStatus, ResultItem, NO_RESULTS_TEXT};
use news_engine::{PersistError, RefreshFailure, RetryAction, SearchObserver};

/// Prints engine signals to stdout and keeps the latest retry action.
#[derive(Default)]
pub struct ConsoleObserver {
    retry: Mutex<Option<RetryAction>>,
}

impl ConsoleObserver {
    pub fn take_retry(&self) -> Option<RetryAction> {
        self.retry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

impl SearchObserver for ConsoleObserver {
    fn on_loading_start(&self) {
        println!("Loading...");
    }

    fn on_results(&self, _items: &[ResultItem], total_count: u64) {
        *self.retry.lock().unwrap_or_else(PoisonError::into_inner) = None;
        println!("{total_count} result(s)");
    }

    fn on_error(&self, failure: &RefreshFailure, retry: RetryAction) {
        println!("Failed to load ({failure}). Type `retry` to try again.");
        *self.retry.lock().unwrap_or_else(PoisonError::into_inner) = Some(retry);
    }

    fn on_bookmark_changed(&self, id: &str, bookmarked: bool) {
        if bookmarked {
            println!("★ bookmarked {id}");
        } else {
            println!("☆ removed bookmark {id}");
        }
    }

    fn on_persistence_warning(&self, error: &PersistError) {
        println!("Warning: bookmarks could not be saved ({error}); they are kept for this session.");
    }
}

/// Renders the result list and pagination footer.
pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();

    if view.cards.is_empty() {
        match view.status {
            FetchStatus::Loaded => {
                let _ = writeln!(out, "{NO_RESULTS_TEXT}");
            }
            FetchStatus::Failed => {
                let _ = writeln!(out, "Failed to load. [retry]");
            }
            FetchStatus::Idle | FetchStatus::Loading => {}
        }
    }

    for (index, card) in view.cards.iter().enumerate() {
        let star = if card.bookmarked { '★' } else { '☆' };
        let _ = writeln!(out, "{:>2}. {} {}", index + 1, star, card.title);
        let _ = writeln!(out, "    {} | {}", card.section_label, card.url);
        let _ = writeln!(out, "    image: {}", card.thumbnail_url);
        if let Some(summary) = &card.summary {
            let _ = writeln!(out, "    {summary}");
        }
    }

    let pagination = &view.pagination;
    let _ = writeln!(
        out,
        "{} {} {}  {}",
        if pagination.can_go_previous { "<prev" } else { "     " },
        pagination.label,
        if pagination.can_go_next { "next>" } else { "     " },
        view.status_text
    );
    out
}
