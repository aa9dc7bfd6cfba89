use crate::shortener::ShortUrl;
use thiserror::Error;

/// Errors related to the core types of the URL shortener.
pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid short code: {0}")]
    InvalidShortCode(String),
}

/// Errors returned by repository implementations.
///
/// `DuplicateToken` and `DuplicateUrl` report a store that would break the
/// one-to-one mapping between URLs and codes. Every other variant is a
/// backing store failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("short code already assigned to another url: {0}")]
    DuplicateToken(String),
    #[error("url already assigned to another short code: {0}")]
    DuplicateUrl(String),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

impl StorageError {
    /// Returns `true` for the two bijection violations.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateToken(_) | Self::DuplicateUrl(_))
    }
}

/// Errors returned by [`Shortener`](crate::Shortener) implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortenerError {
    /// The URL was shortened before. Carries the existing short URL; callers
    /// treat it as a successful, idempotent outcome.
    #[error("short url already exists: {}", .0.url)]
    AlreadyExists(ShortUrl),
    #[error("short code not found: {0}")]
    NotFound(String),
    #[error("mapping conflict: {0}")]
    Conflict(String),
    #[error("no free short code found after {attempts} attempts")]
    TokenSpaceExhausted { attempts: u32 },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ShortenerError {
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists(_))
    }

    /// Returns the existing short URL of an `AlreadyExists` outcome.
    pub fn existing(&self) -> Option<&ShortUrl> {
        match self {
            Self::AlreadyExists(short_url) => Some(short_url),
            _ => None,
        }
    }
}
