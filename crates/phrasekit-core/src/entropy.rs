//! Entropy sources
//!
//! All randomness used by phrasekit flows through [`EntropySource`]. The
//! production source is [`OsEntropy`], backed by the operating system CSPRNG.
//!
//! # Security Notes
//!
//! - Every draw is fresh; nothing is cached or reused between calls
//! - A failing CSPRNG is reported as an error, never replaced by a weaker RNG
//! - Drawn bytes live in a [`Zeroizing`] buffer and are wiped on drop

use rand::rngs::OsRng;
use rand::RngCore;
use thiserror::Error;
use zeroize::Zeroizing;

#[derive(Error, Debug)]
pub enum EntropyError {
    #[error("Entropy source unavailable: {0}")]
    Unavailable(String),
    #[error("Entropy must be a whole number of bytes, got {0} bits")]
    PartialByte(usize),
    #[error("Index bound must be between 1 and 2^32 - 1, got {0}")]
    InvalidBound(usize),
}

/// A source of cryptographically secure random bytes
pub trait EntropySource: Send + Sync {
    /// Fill `buf` entirely with random bytes.
    fn fill(&self, buf: &mut [u8]) -> Result<(), EntropyError>;
}

/// The operating system CSPRNG
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, buf: &mut [u8]) -> Result<(), EntropyError> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| EntropyError::Unavailable(e.to_string()))
    }
}

/// Draw `bits / 8` fresh bytes from `source`.
pub fn draw(source: &dyn EntropySource, bits: usize) -> Result<Zeroizing<Vec<u8>>, EntropyError> {
    if bits % 8 != 0 {
        return Err(EntropyError::PartialByte(bits));
    }
    let mut bytes = Zeroizing::new(vec![0u8; bits / 8]);
    source.fill(&mut bytes)?;
    Ok(bytes)
}

/// Draw an index uniformly distributed over `0..bound`.
///
/// Uses rejection sampling on 32-bit draws so that no index is favoured
/// when `bound` does not divide 2^32. A zero bound, or one that does not
/// fit in a `u32`, is rejected before anything is drawn.
pub fn uniform_index(source: &dyn EntropySource, bound: usize) -> Result<usize, EntropyError> {
    let bound = match u32::try_from(bound) {
        Ok(b) if b > 0 => b,
        _ => return Err(EntropyError::InvalidBound(bound)),
    };

    // Largest multiple of `bound` representable; draws at or above it are rejected
    let limit = u32::MAX - u32::MAX % bound;
    let mut buf = Zeroizing::new([0u8; 4]);
    loop {
        source.fill(&mut buf[..])?;
        let value = u32::from_be_bytes(*buf);
        if value < limit {
            return Ok((value % bound) as usize);
        }
    }
}
