use crate::Generator;
use std::sync::atomic::{AtomicU64, Ordering};
use tinylink_core::base62;
use tinylink_core::ShortCode;

/// Number of distinct 8-symbol base-62 codes.
const CODE_SPACE: u64 = 62u64.pow(8);

/// A short code generator using a sequential counter.
///
/// Produces the base-62 encoding of an increasing counter: "0", "1", ...,
/// "z", "10", and so on. Codes never repeat within a single instance until
/// the 8-symbol space wraps around.
///
/// For several nodes sharing one repository, give each node a disjoint
/// offset (e.g. node 1 starts at 0, node 2 at 1_000_000).
#[derive(Debug)]
pub struct SeqGenerator {
    counter: AtomicU64,
}

impl Clone for SeqGenerator {
    fn clone(&self) -> Self {
        Self {
            counter: AtomicU64::new(self.counter.load(Ordering::SeqCst)),
        }
    }
}

impl SeqGenerator {
    pub fn new() -> Self {
        Self::with_offset(0)
    }

    /// Creates a sequential generator starting from a specific counter value.
    ///
    /// Useful for resuming from a known state, e.g. the repository's
    /// current `next_id`.
    pub fn with_offset(offset: u64) -> Self {
        Self {
            counter: AtomicU64::new(offset),
        }
    }
}

impl Default for SeqGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for SeqGenerator {
    type Output = ShortCode;

    fn generate(&self) -> ShortCode {
        let count = self.counter.fetch_add(1, Ordering::SeqCst);
        ShortCode::new_unchecked(base62::encode_u64(count % CODE_SPACE))
    }
}
