use crate::error::StorageError;
use crate::shortcode::ShortCode;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// A stored association between one original URL and one short code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlMapping {
    /// Internal sequence number assigned when the mapping was stored.
    pub id: u64,
    /// The original URL that was shortened.
    pub original_url: String,
    /// The short code assigned to the URL.
    pub code: ShortCode,
}

/// What a successful [`Repository::store`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOutcome {
    /// The pair was new and is now stored.
    Inserted,
    /// Exactly this pair was stored before; nothing changed.
    AlreadyPresent,
}

/// A read-only view of a repository.
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Looks up the short code assigned to `original_url`.
    /// Returns `None` if the URL has not been stored.
    async fn find_code(&self, original_url: &str) -> Result<Option<ShortCode>>;

    /// Looks up the original URL for a given short code.
    /// Returns `None` if the code does not exist.
    async fn find_original_url(&self, code: &ShortCode) -> Result<Option<String>>;

    /// Returns the current value of the identifier counter, i.e. the number
    /// of mappings stored so far.
    async fn next_id(&self) -> Result<u64>;
}

#[async_trait]
pub trait Repository: ReadRepository {
    /// Stores a new mapping between `original_url` and `code`.
    ///
    /// Storing a pair that is already present is a no-op reported as
    /// [`StoreOutcome::AlreadyPresent`]. Returns `Err(DuplicateUrl)` if the
    /// URL is assigned a different code, and `Err(DuplicateToken)` if the
    /// code is assigned to a different URL. The URL is checked first.
    async fn store(&self, original_url: &str, code: &ShortCode) -> Result<StoreOutcome>;
}
