//! News core: pure search/pagination/bookmark state machine and view-model helpers.
mod bookmarks;
mod effect;
mod msg;
mod request;
mod response;
mod state;
mod update;
mod view_model;

pub use bookmarks::{BookmarkDecodeError, BookmarkSet, BOOKMARKS_KEY};
pub use effect::Effect;
pub use msg::{FilterChange, Msg};
pub use request::{build_request, ApiConfig, RequestDescriptor, DEFAULT_ENDPOINT, DEFAULT_PAGE_SIZE};
pub use response::{parse_search_response, ParseError, ResultItem, SearchPage};
pub use state::{AppState, SearchState};
pub use update::update;
pub use view_model::{
    strip_tags, AppViewModel, FetchStatus, PaginationView, ResultCardView, NO_RESULTS_TEXT,
    PLACEHOLDER_THUMBNAIL,
};
