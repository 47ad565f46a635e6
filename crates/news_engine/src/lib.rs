//! News engine: transport, persistence and the fetch orchestrator.
mod bookmark_store;
mod observer;
mod persist;
mod session;
mod transport;
mod types;

pub use bookmark_store::BookmarkStore;
pub use observer::{NullObserver, RetryAction, SearchObserver};
pub use persist::{ensure_store_dir, FileStore, KeyValueStore, MemoryStore, PersistError};
pub use session::NewsSession;
pub use transport::{ReqwestTransport, Transport, TransportSettings};
pub use types::{RefreshFailure, RefreshOutcome, TransportError, TransportFailure, TransportResponse};
