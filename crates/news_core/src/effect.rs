use crate::BookmarkSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue a request for the current search state.
    Refresh,
    /// Overwrite the persisted bookmark set.
    PersistBookmarks(BookmarkSet),
    /// Notify collaborators that a bookmark flipped.
    BookmarkChanged { id: String, bookmarked: bool },
}
