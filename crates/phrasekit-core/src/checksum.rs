//! BIP-39 entropy checksum
//!
//! The checksum is the first `ENT / 32` bits of `SHA-256(entropy)`. Every
//! supported entropy length yields at most 8 checksum bits, so only the
//! first digest byte is ever consulted.

use bitcoin::hashes::{sha256, Hash};

use crate::MnemonicError;

/// Entropy lengths (in bytes) accepted by BIP-39: 128 to 256 bits in steps of 32
pub const ENTROPY_BYTE_LENGTHS: [usize; 5] = [16, 20, 24, 28, 32];

/// Checksum bits computed over an entropy buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checksum {
    value: u8,
    len: usize,
}

impl Checksum {
    /// Compute the checksum of `entropy`.
    ///
    /// Fails with [`MnemonicError::InvalidEntropyLength`] unless the entropy
    /// is 16, 20, 24, 28 or 32 bytes long.
    pub fn compute(entropy: &[u8]) -> Result<Self, MnemonicError> {
        let len = checksum_len(entropy.len())?;
        let digest = sha256::Hash::hash(entropy).to_byte_array();
        Ok(Self {
            value: digest[0] >> (8 - len),
            len,
        })
    }

    /// The checksum bits, right-aligned
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Number of checksum bits (CS)
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: a checksum has at least 4 bits
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Checksum length in bits for an entropy buffer of `entropy_bytes` bytes.
pub fn checksum_len(entropy_bytes: usize) -> Result<usize, MnemonicError> {
    if !ENTROPY_BYTE_LENGTHS.contains(&entropy_bytes) {
        return Err(MnemonicError::InvalidEntropyLength(entropy_bytes));
    }
    Ok(entropy_bytes * 8 / 32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_lengths() {
        assert_eq!(checksum_len(16).unwrap(), 4);
        assert_eq!(checksum_len(20).unwrap(), 5);
        assert_eq!(checksum_len(24).unwrap(), 6);
        assert_eq!(checksum_len(28).unwrap(), 7);
        assert_eq!(checksum_len(32).unwrap(), 8);
    }

    #[test]
    fn test_rejects_unsupported_lengths() {
        for bad in [0, 1, 15, 17, 31, 33, 64] {
            assert!(matches!(
                Checksum::compute(&vec![0u8; bad]),
                Err(MnemonicError::InvalidEntropyLength(n)) if n == bad
            ));
        }
    }

    /// SHA-256 of 16 zero bytes starts with 0x37
    #[test]
    fn test_zero_entropy_128() {
        let checksum = Checksum::compute(&[0u8; 16]).unwrap();
        assert_eq!(checksum.len(), 4);
        assert_eq!(checksum.value(), 0x3);
    }

    /// SHA-256 of 32 zero bytes starts with 0x66
    #[test]
    fn test_zero_entropy_256() {
        let checksum = Checksum::compute(&[0u8; 32]).unwrap();
        assert_eq!(checksum.len(), 8);
        assert_eq!(checksum.value(), 0x66);
    }

    #[test]
    fn test_value_fits_in_len() {
        for len in ENTROPY_BYTE_LENGTHS {
            let entropy: Vec<u8> = (0..len as u8).map(|b| b.wrapping_mul(37)).collect();
            let checksum = Checksum::compute(&entropy).unwrap();
            assert!(u32::from(checksum.value()) < (1u32 << checksum.len()));
            assert!(!checksum.is_empty());
        }
    }
}
