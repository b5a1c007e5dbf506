//! Bit-sequence builder
//!
//! Lays out `entropy || checksum` as a big-endian bit string and cuts it into
//! 11-bit word indices:
//!
//! ```text
//! | entropy byte 0 | entropy byte 1 | ... | checksum (CS bits) |
//! |<- 11 ->|<- 11 ->|<- 11 ->| ...                 |<- 11 ->|
//! ```
//!
//! ENT + CS is a multiple of 11 for every supported entropy length, so the
//! split never leaves a remainder.

use zeroize::Zeroizing;

use crate::checksum::Checksum;
use crate::MnemonicError;

/// Bits encoded by a single word index (2^11 = 2048 words)
pub const BITS_PER_WORD: usize = 11;

/// A growable big-endian bit string, wiped on drop
pub struct BitString {
    bits: Zeroizing<Vec<bool>>,
}

impl BitString {
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bits: Zeroizing::new(Vec::with_capacity(bits)),
        }
    }

    /// Append every bit of `bytes`, most significant bit first.
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.push_bits(u32::from(byte), 8);
        }
    }

    /// Append the low `count` bits of `value`, most significant first.
    pub fn push_bits(&mut self, value: u32, count: usize) {
        debug_assert!(count <= 32);
        for shift in (0..count).rev() {
            self.bits.push((value >> shift) & 1 == 1);
        }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Split into consecutive 11-bit unsigned integers, in order.
    ///
    /// A bit string whose length is not a multiple of 11 is rejected with
    /// [`MnemonicError::BitLength`] instead of dropping the tail.
    pub fn word_indices(&self) -> Result<Zeroizing<Vec<u16>>, MnemonicError> {
        if self.bits.len() % BITS_PER_WORD != 0 {
            return Err(MnemonicError::BitLength(self.bits.len()));
        }

        let indices = self
            .bits
            .chunks_exact(BITS_PER_WORD)
            .map(|group| {
                group
                    .iter()
                    .fold(0u16, |acc, &bit| (acc << 1) | u16::from(bit))
            })
            .collect();
        Ok(Zeroizing::new(indices))
    }
}

/// Convert entropy into BIP-39 word indices.
///
/// Computes the checksum, appends it to the entropy bits and returns
/// `(ENT + CS) / 11` indices in `0..2048`.
pub fn entropy_to_indices(entropy: &[u8]) -> Result<Zeroizing<Vec<u16>>, MnemonicError> {
    let checksum = Checksum::compute(entropy)?;

    let mut bits = BitString::with_capacity(entropy.len() * 8 + checksum.len());
    bits.push_bytes(entropy);
    bits.push_bits(u32::from(checksum.value()), checksum.len());

    bits.word_indices()
}
