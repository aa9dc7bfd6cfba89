//! Core types and traits for the Tinylink URL shortener.
//!
//! This crate provides the token type, the repository and shortener
//! contracts, and the error taxonomy shared by the storage, generator,
//! shortener and gateway crates.

pub mod base62;
pub mod error;
pub mod repository;
pub mod shortcode;
pub mod shortener;

pub use error::{CoreError, ShortenerError, StorageError};
pub use repository::{ReadRepository, Repository, StoreOutcome, UrlMapping};
pub use shortcode::ShortCode;
pub use shortener::{ShortUrl, Shortener};
