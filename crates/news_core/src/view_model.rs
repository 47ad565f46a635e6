use crate::{AppState, ResultItem};

pub const PLACEHOLDER_THUMBNAIL: &str = "https://via.placeholder.com/120x80?text=No+Image";
pub const NO_RESULTS_TEXT: &str = "No results.";

const DEFAULT_SECTION_LABEL: &str = "News";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub query: String,
    pub section: String,
    pub include_summaries: bool,
    pub status: FetchStatus,
    pub status_text: String,
    pub cards: Vec<ResultCardView>,
    pub pagination: PaginationView,
    pub bookmark_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCardView {
    pub id: String,
    pub title: String,
    pub url: String,
    pub section_label: String,
    pub thumbnail_url: String,
    /// Tag-stripped summary; only present when summaries are enabled.
    pub summary: Option<String>,
    pub bookmarked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PaginationView {
    pub page: u32,
    pub total_pages: u32,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub label: String,
}

impl AppViewModel {
    pub(crate) fn from_state(state: &AppState) -> Self {
        let search = state.search();
        let shown_page = state.shown_page();
        let status_text = match state.status() {
            FetchStatus::Idle => String::new(),
            FetchStatus::Loading => "Loading...".to_string(),
            FetchStatus::Loaded => format!("{} result(s)", state.total_results()),
            FetchStatus::Failed => "Failed to load. Try again.".to_string(),
        };
        let cards = state
            .results()
            .iter()
            .map(|item| card_view(item, search.include_summaries(), state.is_bookmarked(&item.id)))
            .collect();

        Self {
            query: search.query().to_string(),
            section: search.section().to_string(),
            include_summaries: search.include_summaries(),
            status: state.status(),
            status_text,
            cards,
            pagination: PaginationView {
                page: shown_page,
                total_pages: search.total_pages(),
                can_go_previous: shown_page > 1,
                can_go_next: shown_page < search.total_pages(),
                label: format!("Page {} of {}", shown_page, search.total_pages()),
            },
            bookmark_count: state.bookmarks().len(),
        }
    }
}

fn card_view(item: &ResultItem, include_summaries: bool, bookmarked: bool) -> ResultCardView {
    let section_label = if item.section_name.is_empty() {
        DEFAULT_SECTION_LABEL.to_string()
    } else {
        item.section_name.clone()
    };
    let summary = if include_summaries {
        item.summary_text
            .as_deref()
            .map(strip_tags)
            .filter(|text| !text.is_empty())
    } else {
        None
    };

    ResultCardView {
        id: item.id.clone(),
        title: item.title.clone(),
        url: item.url.clone(),
        section_label,
        thumbnail_url: item
            .thumbnail_url
            .clone()
            .unwrap_or_else(|| PLACEHOLDER_THUMBNAIL.to_string()),
        summary,
        bookmarked,
    }
}

/// Removes every `<...>` tag. An unterminated `<` is kept as text.
pub fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut pending: Option<String> = None;
    for ch in html.chars() {
        match pending.as_mut() {
            None if ch == '<' => pending = Some(String::from('<')),
            None => out.push(ch),
            Some(_) if ch == '>' => pending = None,
            Some(tag) => tag.push(ch),
        }
    }
    if let Some(tag) = pending {
        out.push_str(&tag);
    }
    out
}
