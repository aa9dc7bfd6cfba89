//! Repository implementations for the Tinylink URL shortener.

pub mod memory;

pub use memory::InMemoryRepository;
pub use tinylink_core::repository::{ReadRepository, Repository, Result, StoreOutcome, UrlMapping};
pub use tinylink_core::StorageError;
