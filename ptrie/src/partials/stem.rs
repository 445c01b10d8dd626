use std::fmt;

use crate::utils::bits::{bytes_for_bits, get_bit, BitSource, BITS_PER_BYTE};

/// A run of bits stored at a trie node.
///
/// Owns a minimal-length buffer; bits past `bits` in the final byte are always zero.
#[derive(Clone, PartialEq, Eq)]
pub struct Stem {
    data: Box<[u8]>,
    bits: usize,
}

impl Stem {
    /// Copies `num_bits` bits of `source` starting at `start_bit` into a fresh buffer.
    pub fn new(source: &[u8], start_bit: usize, num_bits: usize) -> Self {
        assert!(num_bits > 0, "a stem must hold at least one bit");
        assert!(
            start_bit + num_bits <= source.len() * BITS_PER_BYTE,
            "stem extends past its source"
        );

        let mut data = vec![0u8; bytes_for_bits(num_bits)];
        for i in 0..num_bits {
            let bit = get_bit(source, start_bit + i);
            data[i / BITS_PER_BYTE] |= bit << (BITS_PER_BYTE - 1 - i % BITS_PER_BYTE);
        }
        Self {
            data: data.into_boxed_slice(),
            bits: num_bits,
        }
    }

    /// The zero-bit stem. Only a split that diverges on the very first bit of the root produces one.
    pub fn empty() -> Self {
        Self {
            data: Box::default(),
            bits: 0,
        }
    }

    /// The first `length` bits of this stem.
    pub fn prefix(&self, length: usize) -> Self {
        assert!(length <= self.bits);
        if length == 0 {
            return Self::empty();
        }
        Self::new(&self.data, 0, length)
    }

    /// Everything from bit `start` onwards. `start` must leave at least one bit.
    pub fn suffix(&self, start: usize) -> Self {
        assert!(start < self.bits);
        Self::new(&self.data, start, self.bits - start)
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn to_slice(&self) -> &[u8] {
        &self.data
    }
}

impl BitSource for Stem {
    #[inline]
    fn bit_len(&self) -> usize {
        self.bits
    }

    #[inline]
    fn bit(&self, pos: usize) -> u8 {
        assert!(pos < self.bits);
        get_bit(&self.data, pos)
    }
}

impl fmt::Debug for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bits: String = (0..self.bits)
            .map(|i| if self.bit(i) == 1 { '1' } else { '0' })
            .collect();
        write!(f, "Stem({}b: {})", self.bits, bits)
    }
}
