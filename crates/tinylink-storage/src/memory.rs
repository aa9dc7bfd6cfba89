use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use tinylink_core::error::StorageError;
use tinylink_core::repository::{ReadRepository, Repository, Result, StoreOutcome, UrlMapping};
use tinylink_core::ShortCode;
use tracing::trace;

/// Both lookup directions and the identifier counter.
///
/// They live behind one lock so a store checks and updates both indices
/// atomically.
#[derive(Debug, Default)]
struct Indices {
    by_url: HashMap<String, ShortCode>,
    by_code: HashMap<ShortCode, UrlMapping>,
    counter: u64,
}

impl Indices {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            by_url: HashMap::with_capacity(capacity),
            by_code: HashMap::with_capacity(capacity),
            counter: 0,
        }
    }

    fn insert(&mut self, original_url: &str, code: &ShortCode) -> Result<StoreOutcome> {
        if let Some(existing) = self.by_url.get(original_url) {
            if existing == code {
                return Ok(StoreOutcome::AlreadyPresent);
            }
            return Err(StorageError::DuplicateUrl(original_url.to_owned()));
        }

        if self.by_code.contains_key(code) {
            return Err(StorageError::DuplicateToken(code.to_string()));
        }

        self.counter += 1;
        let mapping = UrlMapping {
            id: self.counter,
            original_url: original_url.to_owned(),
            code: code.clone(),
        };
        self.by_url.insert(mapping.original_url.clone(), code.clone());
        self.by_code.insert(code.clone(), mapping);

        Ok(StoreOutcome::Inserted)
    }
}

/// In-memory implementation of the Repository trait.
///
/// A forward index (URL to code) and a reverse index (code to mapping) give
/// O(1) lookups in both directions. One `RwLock` guards both indices and the
/// counter: lookups share the lock, stores take it exclusively, so no reader
/// ever sees a mapping present in one direction only.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    indices: RwLock<Indices>,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new in-memory repository with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            indices: RwLock::new(Indices::with_capacity(capacity)),
        }
    }

    /// Creates a repository pre-populated with `(original_url, code)` pairs.
    ///
    /// Pairs are stored in iteration order and numbered from 1. Fails with
    /// the same duplicate errors as [`Repository::store`] if two pairs
    /// disagree.
    pub fn from_mappings<I, S>(mappings: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, ShortCode)>,
        S: AsRef<str>,
    {
        let mut indices = Indices::default();
        for (original_url, code) in mappings {
            indices.insert(original_url.as_ref(), &code)?;
        }

        Ok(Self {
            indices: RwLock::new(indices),
        })
    }

    /// Returns the number of stored mappings.
    pub fn len(&self) -> usize {
        self.indices.read().by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a copy of every stored mapping, ordered by id.
    pub fn snapshot(&self) -> Vec<UrlMapping> {
        let mut mappings: Vec<UrlMapping> =
            self.indices.read().by_code.values().cloned().collect();
        mappings.sort_by_key(|mapping| mapping.id);
        mappings
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn find_code(&self, original_url: &str) -> Result<Option<ShortCode>> {
        Ok(self.indices.read().by_url.get(original_url).cloned())
    }

    async fn find_original_url(&self, code: &ShortCode) -> Result<Option<String>> {
        Ok(self
            .indices
            .read()
            .by_code
            .get(code)
            .map(|mapping| mapping.original_url.clone()))
    }

    async fn next_id(&self) -> Result<u64> {
        Ok(self.indices.read().counter)
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn store(&self, original_url: &str, code: &ShortCode) -> Result<StoreOutcome> {
        let outcome = self.indices.write().insert(original_url, code)?;

        match outcome {
            StoreOutcome::Inserted => {
                trace!(code = %code, url = %original_url, "stored mapping")
            }
            StoreOutcome::AlreadyPresent => {
                trace!(code = %code, url = %original_url, "mapping already stored")
            }
        }

        Ok(outcome)
    }
}
