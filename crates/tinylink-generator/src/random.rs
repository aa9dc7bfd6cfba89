use crate::Generator;
use rand::rngs::OsRng;
use rand::TryRngCore;
use tinylink_core::base62::ALPHABET;
use tinylink_core::shortcode::{MAX_LENGTH, MIN_LENGTH};
use tinylink_core::ShortCode;
use tracing::warn;

/// Largest multiple of 62 that fits in a byte. Bytes at or above it are
/// discarded so every symbol is drawn with the same probability.
const ACCEPT_BELOW: u8 = 248;

/// A random short code generator backed by the operating system CSPRNG.
///
/// Every symbol is drawn uniformly from the base-62 alphabet. Codes are
/// `length` symbols long (8 by default).
#[derive(Debug, Clone)]
pub struct Base62Generator {
    length: usize,
}

impl Base62Generator {
    pub fn new() -> Self {
        Self { length: MAX_LENGTH }
    }

    /// Creates a generator producing codes of `length` symbols, clamped to
    /// the valid short code length range.
    pub fn with_length(length: usize) -> Self {
        Self {
            length: length.clamp(MIN_LENGTH, MAX_LENGTH),
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for Base62Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for Base62Generator {
    type Output = ShortCode;

    fn generate(&self) -> Self::Output {
        let mut code = String::with_capacity(self.length);
        let mut buf = [0u8; 16];

        while code.len() < self.length {
            if let Err(err) = OsRng.try_fill_bytes(&mut buf) {
                warn!(error = %err, "os random source failed, retrying");
                std::thread::yield_now();
                continue;
            }

            for byte in buf.iter().copied().filter(|&b| b < ACCEPT_BELOW) {
                if code.len() == self.length {
                    break;
                }
                code.push(char::from(ALPHABET[usize::from(byte % 62)]));
            }
        }

        ShortCode::new_unchecked(code)
    }
}
