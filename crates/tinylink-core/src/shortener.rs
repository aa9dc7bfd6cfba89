use crate::shortcode::ShortCode;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

type Result<T> = std::result::Result<T, crate::error::ShortenerError>;

/// A short code together with the externally visible URL built from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShortUrl {
    pub code: ShortCode,
    pub url: String,
}

impl ShortUrl {
    pub fn new(code: ShortCode, base_url: &str) -> Self {
        let url = code.to_url(base_url);
        Self { code, url }
    }
}

impl Display for ShortUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.url)
    }
}

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Shortens a URL and returns its short URL.
    ///
    /// Shortening a URL a second time fails with
    /// [`ShortenerError::AlreadyExists`](crate::ShortenerError::AlreadyExists)
    /// carrying the short URL created the first time.
    async fn shorten(&self, original_url: &str) -> Result<ShortUrl>;

    /// Resolves a short code to its original URL.
    async fn resolve(&self, code: &str) -> Result<String>;
}
