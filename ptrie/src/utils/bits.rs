//! Bit-level access over byte sequences.
//!
//! Bits are numbered from the most significant bit of byte 0, so bit `0` is
//! `0b1000_0000` of the first byte and bit `8` is the MSB of the second byte.

/// Number of bits in a single byte.
pub const BITS_PER_BYTE: usize = 8;

/// Returns the bit at `bit_index` of `bytes` as `0` or `1`.
///
/// The caller guarantees `bit_index < bytes.len() * 8`.
#[inline]
pub fn get_bit(bytes: &[u8], bit_index: usize) -> u8 {
    let byte = bytes[bit_index / BITS_PER_BYTE];
    let shift = BITS_PER_BYTE - 1 - (bit_index % BITS_PER_BYTE);
    (byte >> shift) & 1
}

/// Number of bytes needed to hold `num_bits` bits.
#[inline]
pub fn bytes_for_bits(num_bits: usize) -> usize {
    num_bits.div_ceil(BITS_PER_BYTE)
}

/// Anything that can be read as a bounded run of bits.
pub trait BitSource {
    /// Number of meaningful bits.
    fn bit_len(&self) -> usize;

    /// Bit at `pos`, `pos < self.bit_len()`.
    fn bit(&self, pos: usize) -> u8;
}

impl BitSource for [u8] {
    fn bit_len(&self) -> usize {
        self.len() * BITS_PER_BYTE
    }

    fn bit(&self, pos: usize) -> u8 {
        get_bit(self, pos)
    }
}

/// Counts bits of `other` (from its start) that agree with `key` from `key_start`, stopping at the
/// first mismatch, at the end of `other`, or at the end of `key`, whichever comes first.
///
/// `on_compare` is invoked once for every bit pair actually compared, including the mismatching one.
#[inline]
pub fn matching_bits<K, O, F>(key: &K, key_start: usize, other: &O, mut on_compare: F) -> usize
where
    K: BitSource + ?Sized,
    O: BitSource + ?Sized,
    F: FnMut(),
{
    let key_bits = key.bit_len();
    let mut matched = 0;
    while matched < other.bit_len() {
        if key_start + matched >= key_bits {
            break;
        }
        on_compare();
        if key.bit(key_start + matched) != other.bit(matched) {
            break;
        }
        matched += 1;
    }
    matched
}

/// Bit comparisons needed to tell two terminated keys apart, counting up to and including the first
/// differing bit. The shorter bit-image is zero-padded on the right; identical keys cost their full
/// length in bits.
pub fn count_bit_comparisons(a: &[u8], b: &[u8]) -> usize {
    let len_a = (a.len() + 1) * BITS_PER_BYTE;
    let len_b = (b.len() + 1) * BITS_PER_BYTE;
    let max_len = len_a.max(len_b);

    // Bits past the stored bytes are the terminator or zero padding.
    let bit_of = |bytes: &[u8], idx: usize| -> u8 {
        if idx / BITS_PER_BYTE < bytes.len() {
            get_bit(bytes, idx)
        } else {
            0
        }
    };

    for idx in 0..max_len {
        if bit_of(a, idx) != bit_of(b, idx) {
            return idx + 1;
        }
    }
    max_len
}
