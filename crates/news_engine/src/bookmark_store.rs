use std::sync::Arc;

use news_core::{BookmarkSet, BOOKMARKS_KEY};
use news_logging::{news_debug, news_warn};

use crate::{KeyValueStore, PersistError};

/// Loads and saves the bookmark set through a key-value store.
#[derive(Clone)]
pub struct BookmarkStore {
    store: Arc<dyn KeyValueStore>,
}

impl BookmarkStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Missing, unreadable or corrupt data yields an empty set.
    pub fn load(&self) -> BookmarkSet {
        let raw = match self.store.get(BOOKMARKS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return BookmarkSet::new(),
            Err(err) => {
                news_warn!("Failed to read bookmarks: {}", err);
                return BookmarkSet::new();
            }
        };

        match BookmarkSet::decode(&raw) {
            Ok(set) => {
                news_debug!("Loaded {} bookmark(s)", set.len());
                set
            }
            Err(err) => {
                news_warn!("Ignoring corrupt bookmark data: {}", err);
                BookmarkSet::new()
            }
        }
    }

    /// Overwrites the persisted set.
    pub fn save(&self, set: &BookmarkSet) -> Result<(), PersistError> {
        self.store.set(BOOKMARKS_KEY, &set.encode())
    }
}
