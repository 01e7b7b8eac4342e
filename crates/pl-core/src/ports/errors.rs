use thiserror::Error;

/// Failure of a read, insert or update against the data store.
///
/// Propagated to callers unchanged; nothing in this workspace retries or
/// recovers from it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("request timed out")]
    Timeout,

    #[error("not authorized: {0}")]
    Unauthorized(String),

    #[error("store rejected request ({status}): {message}")]
    Rejected {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("ambiguous result: {0}")]
    AmbiguousResult(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl QueryError {
    /// Unique/foreign-key style violations reported by the store.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, QueryError::Rejected { status: 409, .. })
    }
}
