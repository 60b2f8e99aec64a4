use thiserror::Error;

/// Failure taxonomy for ranking lookups.
///
/// `NotFound` and `Invalid` are definitive negatives: the player has no
/// rankings and retrying cannot change that. Everything else is transient
/// and worth another attempt.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("player has no rankings")]
    NotFound,
    #[error("ranking service rejected the request")]
    Invalid,
    #[error("transient ranking fetch failure: {0}")]
    Transient(String),
}

impl ApiError {
    /// True when retrying cannot produce a different outcome
    pub fn is_definitive(&self) -> bool {
        matches!(self, ApiError::NotFound | ApiError::Invalid)
    }
}
