//! Short code generation.
//!
//! Codes are drawn from a 55-character alphabet that leaves out glyphs easily
//! confused when read aloud or typed: `0`, `1`, `I`, `O`, `i`, `l` and `o`.
//! Entropy comes from the operating system via `getrandom`.

/// Characters used in generated codes.
pub const ALPHABET: &[u8; 55] = b"23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghjkmnpqrstuvwxyz";

/// Code length used when the configured length is not positive.
pub const DEFAULT_CODE_LENGTH: usize = 7;

/// Largest multiple of the alphabet size that fits in a byte.
///
/// Bytes at or above it are rejected so every character stays equally likely.
const ACCEPT_BOUND: u8 = (ALPHABET.len() * 4) as u8;

/// Random bytes requested from the OS per refill.
const BATCH_SIZE: usize = 32;

/// Errors that can occur while generating a code.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("secure random source failed: {0}")]
    RandomSource(getrandom::Error),
}

/// Generates fixed-length random short codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeGenerator {
    length: usize,
}

impl CodeGenerator {
    /// Creates a generator producing codes of `length` characters.
    ///
    /// A length of zero or less falls back to [`DEFAULT_CODE_LENGTH`].
    pub fn new(length: i64) -> Self {
        let length = usize::try_from(length)
            .ok()
            .filter(|&l| l > 0)
            .unwrap_or(DEFAULT_CODE_LENGTH);

        Self { length }
    }

    /// Generates a new random code.
    ///
    /// Each character is picked independently and uniformly by rejection
    /// sampling over OS-provided bytes.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::RandomSource`] if the OS random source fails.
    /// There is no fallback to a weaker generator.
    pub fn generate(&self) -> Result<String, GeneratorError> {
        let mut code = String::with_capacity(self.length);
        let mut buffer = [0u8; BATCH_SIZE];

        while code.len() < self.length {
            getrandom::fill(&mut buffer).map_err(GeneratorError::RandomSource)?;

            for &byte in buffer.iter().filter(|&&b| b < ACCEPT_BOUND) {
                code.push(ALPHABET[usize::from(byte) % ALPHABET.len()] as char);
                if code.len() == self.length {
                    break;
                }
            }
        }

        Ok(code)
    }

    /// Configured code length.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of distinct codes this generator can produce.
    ///
    /// Saturates at `u128::MAX` for absurdly long codes.
    pub fn combinations(&self) -> u128 {
        let base = ALPHABET.len() as u128;
        u32::try_from(self.length)
            .ok()
            .and_then(|exp| base.checked_pow(exp))
            .unwrap_or(u128::MAX)
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH as i64)
    }
}
