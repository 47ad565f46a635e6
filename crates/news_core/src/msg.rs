/// Filter fields to apply; `None` leaves the current value in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterChange {
    pub query: Option<String>,
    pub section: Option<String>,
    pub include_summaries: Option<bool>,
}

impl FilterChange {
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::default()
        }
    }

    pub fn section(section: impl Into<String>) -> Self {
        Self {
            section: Some(section.into()),
            ..Self::default()
        }
    }

    pub fn include_summaries(include: bool) -> Self {
        Self {
            include_summaries: Some(include),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User changed the query, the section, or the summaries toggle.
    FiltersChanged(FilterChange),
    /// User asked for a specific page.
    GoToPage(u32),
    /// User clicked Next.
    NextPage,
    /// User clicked Previous.
    PreviousPage,
    /// User clicked the star on a result card.
    BookmarkToggled(String),
    /// User asked to reload the current page (refresh or retry).
    RefreshRequested,
}
