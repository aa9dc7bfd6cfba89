//! URL shortener service implementation.
//!
//! This crate provides [`ShortenerService`], which combines a repository
//! and a code generator into the [`Shortener`](tinylink_core::Shortener)
//! contract. Core types are re-exported from `tinylink_core`.

pub mod service;

pub use service::{ShortenerService, ShortenerSettings, DEFAULT_MAX_ATTEMPTS};
pub use tinylink_core::{ShortUrl, Shortener, ShortenerError};
