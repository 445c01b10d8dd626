use std::fmt;

use num_traits::{ToBytes, Unsigned};

use crate::utils::bits::{get_bit, BitSource, BITS_PER_BYTE};

// Owns the key bytes followed by a zero terminator. The terminator is part of the bit-image, so a
// terminal node is unique per distinct key even when one key's bytes are a prefix of another's.
#[derive(Clone, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct BitKey {
    data: Box<[u8]>,
}

impl BitKey {
    pub fn new_from_slice(key: &[u8]) -> Self {
        let mut data = Vec::with_capacity(key.len() + 1);
        data.extend_from_slice(key);
        data.push(0);
        Self {
            data: data.into_boxed_slice(),
        }
    }

    pub fn new_from_str(s: &str) -> Self {
        Self::new_from_slice(s.as_bytes())
    }

    pub fn new_from_vec(mut data: Vec<u8>) -> Self {
        data.push(0);
        Self {
            data: data.into_boxed_slice(),
        }
    }

    /// Big-endian bytes of `un`, so integer keys sort numerically.
    pub fn from_unsigned<T: Unsigned + ToBytes>(un: T) -> Self {
        Self::new_from_slice(un.to_be_bytes().as_ref())
    }

    /// The key bytes without the terminator.
    #[inline]
    pub fn key_bytes(&self) -> &[u8] {
        &self.data[..self.data.len() - 1]
    }

    /// The full bit-image including the terminator.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Length of the key in bytes, terminator excluded.
    pub fn len(&self) -> usize {
        self.data.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl BitSource for BitKey {
    #[inline]
    fn bit_len(&self) -> usize {
        self.data.len() * BITS_PER_BYTE
    }

    #[inline]
    fn bit(&self, pos: usize) -> u8 {
        get_bit(&self.data, pos)
    }
}

impl fmt::Debug for BitKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitKey({:?})", String::from_utf8_lossy(self.key_bytes()))
    }
}

impl AsRef<[u8]> for BitKey {
    fn as_ref(&self) -> &[u8] {
        self.key_bytes()
    }
}

impl From<&str> for BitKey {
    fn from(data: &str) -> Self {
        Self::new_from_str(data)
    }
}
impl From<String> for BitKey {
    fn from(data: String) -> Self {
        Self::new_from_vec(data.into_bytes())
    }
}
impl From<&String> for BitKey {
    fn from(data: &String) -> Self {
        Self::new_from_str(data)
    }
}
impl From<&[u8]> for BitKey {
    fn from(data: &[u8]) -> Self {
        Self::new_from_slice(data)
    }
}
impl<const N: usize> From<&[u8; N]> for BitKey {
    fn from(data: &[u8; N]) -> Self {
        Self::new_from_slice(data)
    }
}
impl From<Vec<u8>> for BitKey {
    fn from(data: Vec<u8>) -> Self {
        Self::new_from_vec(data)
    }
}
impl From<&BitKey> for BitKey {
    fn from(key: &BitKey) -> Self {
        key.clone()
    }
}

macro_rules! impl_from_unsigned {
    ( $($t:ty),* ) => {
    $(
    impl From< $t > for BitKey
    {
        fn from(data: $t) -> Self {
            BitKey::from_unsigned(data)
        }
    }
    ) *
    }
}
impl_from_unsigned!(u8, u16, u32, u64, usize, u128);
