use std::collections::BTreeSet;

/// Fixed persistence key for the bookmark set.
pub const BOOKMARKS_KEY: &str = "gn_bookmarks";

#[derive(Debug, thiserror::Error)]
pub enum BookmarkDecodeError {
    #[error("bookmark data is not a JSON array of strings: {0}")]
    Json(#[from] serde_json::Error),
}

/// Set of bookmarked content identifiers.
///
/// Backed by a `BTreeSet` so the persisted JSON array is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookmarkSet {
    ids: BTreeSet<String>,
}

impl BookmarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Adds `id` if absent, removes it if present. Returns the new set and
    /// whether `id` is bookmarked afterwards.
    pub fn toggle(mut self, id: &str) -> (Self, bool) {
        let now_bookmarked = if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_owned());
            true
        };
        (self, now_bookmarked)
    }

    /// Decodes the persisted JSON array representation.
    pub fn decode(raw: &str) -> Result<Self, BookmarkDecodeError> {
        let ids: Vec<String> = serde_json::from_str(raw)?;
        Ok(ids.into_iter().collect())
    }

    /// Encodes the set as a JSON array of strings.
    pub fn encode(&self) -> String {
        let ids: Vec<&str> = self.iter().collect();
        // A slice of strings always serializes.
        serde_json::to_string(&ids).unwrap_or_else(|_| "[]".to_string())
    }
}

impl FromIterator<String> for BookmarkSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
