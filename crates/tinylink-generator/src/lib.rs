pub mod random;
pub mod seq;

pub use random::Base62Generator;
pub use seq::SeqGenerator;

use tinylink_core::ShortCode;

/// Trait for generating short codes.
///
/// Implementations are pure generators that don't interact with storage.
/// A generated code may already be taken; the shortener service detects
/// collisions on store and asks for a fresh code.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<ShortCode>;
    /// Generates a candidate short code.
    ///
    /// Generation is infallible: implementations backed by a fallible
    /// source must retry internally.
    fn generate(&self) -> Self::Output;
}
