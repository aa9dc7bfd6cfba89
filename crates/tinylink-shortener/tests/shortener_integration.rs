use std::collections::HashSet;
use std::sync::Arc;

use tinylink_core::{ReadRepository, ShortUrl, Shortener, ShortenerError};
use tinylink_generator::{Base62Generator, SeqGenerator};
use tinylink_shortener::{ShortenerService, ShortenerSettings};
use tinylink_storage::InMemoryRepository;

const BASE_URL: &str = "http://localhost:8080";

fn service() -> ShortenerService<InMemoryRepository, Base62Generator> {
    ShortenerService::new(
        InMemoryRepository::new(),
        Base62Generator::new(),
        ShortenerSettings::builder().base_url(BASE_URL).build(),
    )
}

#[tokio::test]
async fn shorten_resolve_scenario() {
    let service = service();

    let short_url = service.shorten("http://original.url").await.unwrap();
    let token = short_url
        .url
        .strip_prefix("http://localhost:8080/")
        .expect("short url starts with the base url");
    assert!(!token.is_empty() && token.len() <= 8);
    assert_eq!(token, short_url.code.as_str());

    let err = service.shorten("http://original.url").await.unwrap_err();
    assert!(err.is_already_exists());
    assert_eq!(err.existing(), Some(&short_url));

    let original = service.resolve(token).await.unwrap();
    assert_eq!(original, "http://original.url");

    let err = service.resolve("doesnotexist").await.unwrap_err();
    assert!(matches!(err, ShortenerError::NotFound(_)));
}

#[tokio::test]
async fn distinct_urls_get_distinct_codes() {
    let service = service();
    let mut codes = HashSet::new();

    for i in 0..500 {
        let url = format!("https://example.com/page/{}", i);
        let short_url = service.shorten(&url).await.unwrap();
        assert!(codes.insert(short_url.code.clone()));
        assert_eq!(service.resolve(short_url.code.as_str()).await.unwrap(), url);
    }

    assert_eq!(service.repository().next_id().await.unwrap(), 500);
}

#[tokio::test]
async fn urls_are_not_normalised() {
    let service = service();

    let a = service.shorten("https://example.com").await.unwrap();
    let b = service.shorten("https://example.com/").await.unwrap();
    let c = service.shorten("not even a url").await.unwrap();

    assert_ne!(a.code, b.code);
    assert_ne!(b.code, c.code);
    assert_eq!(service.resolve(c.code.as_str()).await.unwrap(), "not even a url");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_shortening_of_distinct_urls() {
    const N: usize = 1000;
    let service = Arc::new(service());
    let mut handles = Vec::with_capacity(N);

    for i in 0..N {
        let service = Arc::clone(&service);
        handles.push(tokio::spawn(async move {
            service
                .shorten(&format!("https://example.com/{}", i))
                .await
                .unwrap()
        }));
    }

    let mut codes = HashSet::new();
    for handle in handles {
        let short_url = handle.await.unwrap();
        assert!(codes.insert(short_url.code));
    }

    assert_eq!(codes.len(), N);
    assert_eq!(service.repository().len(), N);
    assert_eq!(service.repository().next_id().await.unwrap(), N as u64);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_shortening_of_one_url_is_idempotent() {
    let service = Arc::new(service());
    let mut handles = Vec::new();

    for _ in 0..64 {
        let service = Arc::clone(&service);
        handles.push(tokio::spawn(async move {
            match service.shorten("http://original.url").await {
                Ok(short_url) => (true, short_url),
                Err(ShortenerError::AlreadyExists(short_url)) => (false, short_url),
                Err(err) => panic!("unexpected error: {err}"),
            }
        }));
    }

    let mut created = 0;
    let mut urls: HashSet<ShortUrl> = HashSet::new();
    for handle in handles {
        let (fresh, short_url) = handle.await.unwrap();
        if fresh {
            created += 1;
        }
        urls.insert(short_url);
    }

    assert_eq!(created, 1);
    assert_eq!(urls.len(), 1);
    assert_eq!(service.repository().len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn shared_repository_across_services() {
    let repository = Arc::new(InMemoryRepository::new());
    let settings = ShortenerSettings::builder().base_url(BASE_URL).build();

    // Both services start from the same counter and would pick the same
    // codes; collisions are resolved by regenerating.
    let first = ShortenerService::with_shared_repository(
        Arc::clone(&repository),
        SeqGenerator::new(),
        settings.clone(),
    );
    let second =
        ShortenerService::with_shared_repository(Arc::clone(&repository), SeqGenerator::new(), settings);

    let a = first.shorten("https://a.example").await.unwrap();
    let b = second.shorten("https://b.example").await.unwrap();

    assert_eq!(a.code.as_str(), "0");
    assert_eq!(b.code.as_str(), "1");
    assert_eq!(second.resolve("0").await.unwrap(), "https://a.example");
    assert!(second.shorten("https://a.example").await.unwrap_err().is_already_exists());
    assert_eq!(repository.len(), 2);
}
