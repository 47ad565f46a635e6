use std::fmt;

use news_core::ParseError;

/// Raw HTTP-level answer from the transport; the status is not interpreted here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct TransportError {
    pub kind: TransportFailure,
    pub message: String,
}

impl TransportError {
    pub fn new(kind: TransportFailure, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportFailure {
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Network,
}

impl fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportFailure::Timeout => write!(f, "timeout"),
            TransportFailure::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            TransportFailure::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            TransportFailure::Network => write!(f, "network error"),
        }
    }
}

/// Why a refresh did not produce results.
#[derive(Debug, thiserror::Error)]
pub enum RefreshFailure {
    #[error("transport failed: {0}")]
    Transport(#[from] TransportError),
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("malformed response: {0}")]
    Parse(#[from] ParseError),
}

/// Result of one `refresh` call.
#[derive(Debug)]
pub enum RefreshOutcome {
    /// Another request was outstanding; nothing happened.
    Busy,
    Loaded {
        result_count: usize,
        total_results: u64,
        total_pages: u32,
    },
    Failed(RefreshFailure),
}

impl RefreshOutcome {
    pub fn is_busy(&self) -> bool {
        matches!(self, RefreshOutcome::Busy)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, RefreshOutcome::Loaded { .. })
    }
}
