use async_trait::async_trait;
use std::sync::Arc;
use tinylink_core::{
    Repository, ShortCode, ShortUrl, Shortener, ShortenerError, StorageError, StoreOutcome,
};
use tinylink_generator::Generator;
use tracing::{debug, trace, warn};
use typed_builder::TypedBuilder;

type Result<T> = std::result::Result<T, ShortenerError>;

/// Default number of codes tried before giving up on a URL.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Configures a [`ShortenerService`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct ShortenerSettings {
    /// Prefix of every short URL; the short URL is `base_url + "/" + code`.
    #[builder(setter(into))]
    pub base_url: String,
    /// How many generated codes are tried when they collide with stored
    /// ones. Values below 1 are treated as 1.
    #[builder(default = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,
}

/// A concrete implementation of the `Shortener` trait.
///
/// This service wraps a `Repository` and a `Generator` to handle:
/// - Idempotent shortening (a URL keeps the code it got first)
/// - Regenerating codes that collide with stored ones, a bounded number of times
/// - Composing short URLs from the configured base URL
#[derive(Debug)]
pub struct ShortenerService<R, G> {
    repository: Arc<R>,
    generator: Arc<G>,
    settings: ShortenerSettings,
}

impl<R, G> Clone for ShortenerService<R, G> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            generator: Arc::clone(&self.generator),
            settings: self.settings.clone(),
        }
    }
}

impl<R: Repository, G: Generator> ShortenerService<R, G> {
    pub fn new(repository: R, generator: G, settings: ShortenerSettings) -> Self {
        Self::with_shared_repository(Arc::new(repository), generator, settings)
    }

    /// Creates a service over a repository that is also used elsewhere.
    pub fn with_shared_repository(
        repository: Arc<R>,
        generator: G,
        settings: ShortenerSettings,
    ) -> Self {
        Self {
            repository,
            generator: Arc::new(generator),
            settings,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.settings.base_url
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    fn short_url(&self, code: ShortCode) -> ShortUrl {
        ShortUrl::new(code, &self.settings.base_url)
    }

    /// Another caller stored the same URL between our lookup and our store
    /// (`DuplicateUrl`, or `AlreadyPresent` when it picked the same code), so
    /// its code is the answer.
    async fn lost_race(&self, original_url: &str) -> Result<ShortUrl> {
        match self.repository.find_code(original_url).await? {
            Some(code) => {
                debug!(code = %code, url = %original_url, "url shortened concurrently");
                Err(ShortenerError::AlreadyExists(self.short_url(code)))
            }
            None => Err(ShortenerError::Conflict(format!(
                "repository rejected '{}' as already stored but has no code for it",
                original_url
            ))),
        }
    }
}

#[async_trait]
impl<R: Repository, G: Generator> Shortener for ShortenerService<R, G> {
    async fn shorten(&self, original_url: &str) -> Result<ShortUrl> {
        if let Some(code) = self.repository.find_code(original_url).await? {
            debug!(code = %code, url = %original_url, "url already shortened");
            return Err(ShortenerError::AlreadyExists(self.short_url(code)));
        }

        let max_attempts = self.settings.max_attempts.max(1);
        for attempt in 1..=max_attempts {
            let code: ShortCode = self.generator.generate().into();

            match self.repository.store(original_url, &code).await {
                Ok(StoreOutcome::Inserted) => {
                    debug!(code = %code, url = %original_url, attempt, "shortened url");
                    return Ok(self.short_url(code));
                }
                Ok(StoreOutcome::AlreadyPresent) => return self.lost_race(original_url).await,
                Err(StorageError::DuplicateToken(_)) => {
                    warn!(code = %code, attempt, max_attempts, "short code collision, regenerating");
                    // Gives a cancelled caller the chance to stop before the next attempt.
                    tokio::task::yield_now().await;
                }
                Err(StorageError::DuplicateUrl(_)) => return self.lost_race(original_url).await,
                Err(err) => return Err(err.into()),
            }
        }

        warn!(url = %original_url, max_attempts, "gave up finding a free short code");
        Err(ShortenerError::TokenSpaceExhausted {
            attempts: max_attempts,
        })
    }

    async fn resolve(&self, code: &str) -> Result<String> {
        trace!(code = %code, "resolving short code");

        // Malformed codes can never have been stored.
        let Ok(short_code) = ShortCode::new(code) else {
            trace!(code = %code, "malformed short code");
            return Err(ShortenerError::NotFound(code.to_owned()));
        };

        match self.repository.find_original_url(&short_code).await? {
            Some(url) => {
                debug!(code = %code, url = %url, "resolved short code");
                Ok(url)
            }
            None => {
                trace!(code = %code, "short code not found");
                Err(ShortenerError::NotFound(code.to_owned()))
            }
        }
    }
}
