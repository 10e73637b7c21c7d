//! 32-bit hashes used to derive subkeys.
//!
//! Each hash consumes the little-endian bytes of `seed ^ base_key` when used by
//! the key generator, but all of them accept input of any length.

use crate::checksum::Checksum32;
use crate::table;

/// A 32-bit hash over arbitrary bytes.
pub trait Hash32 {
    /// Computes the hash. Defined for empty input.
    fn compute(&self, data: &[u8]) -> u32;
}

#[inline]
fn read_u32_le(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

#[inline]
fn read_u16_le(data: &[u8], offset: usize) -> u32 {
    u32::from(u16::from_le_bytes([data[offset], data[offset + 1]]))
}

/// CRC-32/ISO-HDLC (poly 0x04C11DB7, init and xorout 0xFFFFFFFF, reflected).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Crc32;

impl Crc32 {
    fn checksum(data: &[u8]) -> u32 {
        let table = table::crc32();
        let mut remainder: u32 = 0xFFFF_FFFF;

        for &byte in data {
            let index = table::reflect8(byte) ^ (remainder >> 24) as u8;
            remainder = table[usize::from(index)] ^ (remainder << 8);
        }

        table::reflect32(remainder) ^ 0xFFFF_FFFF
    }
}

impl Hash32 for Crc32 {
    fn compute(&self, data: &[u8]) -> u32 {
        Self::checksum(data)
    }
}

impl Checksum32 for Crc32 {
    fn compute(&self, data: &[u8]) -> u32 {
        Self::checksum(data)
    }
}

/// FNV-1a, 32-bit variant. Also the default hash for deriving seeds from strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fnv1a;

impl Fnv1a {
    pub const OFFSET_BASIS: u32 = 0x811C_9DC5;
    pub const PRIME: u32 = 0x0100_0193;
}

impl Hash32 for Fnv1a {
    fn compute(&self, data: &[u8]) -> u32 {
        data.iter().fold(Self::OFFSET_BASIS, |h, &byte| {
            (h ^ u32::from(byte)).wrapping_mul(Self::PRIME)
        })
    }
}

/// Table-driven CRC-like hash seeded with the input length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneralizedCrc;

impl Hash32 for GeneralizedCrc {
    fn compute(&self, data: &[u8]) -> u32 {
        let table = table::generalized_crc();
        let mut hash = data.len() as u32;

        for &byte in data {
            let index = (hash as u8) ^ byte;
            hash = (hash >> 8) ^ table[usize::from(index)];
        }

        hash
    }
}

/// Bob Jenkins' lookup2 hash (1996).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Jenkins96;

/// Golden ratio constant seeding lookup2's state.
const GOLDEN_RATIO: u32 = 0x9E37_79B9;

impl Jenkins96 {
    #[inline]
    fn mix(mut a: u32, mut b: u32, mut c: u32) -> (u32, u32, u32) {
        a = a.wrapping_sub(b).wrapping_sub(c) ^ (c >> 13);
        b = b.wrapping_sub(c).wrapping_sub(a) ^ (a << 8);
        c = c.wrapping_sub(a).wrapping_sub(b) ^ (b >> 13);
        a = a.wrapping_sub(b).wrapping_sub(c) ^ (c >> 12);
        b = b.wrapping_sub(c).wrapping_sub(a) ^ (a << 16);
        c = c.wrapping_sub(a).wrapping_sub(b) ^ (b >> 5);
        a = a.wrapping_sub(b).wrapping_sub(c) ^ (c >> 3);
        b = b.wrapping_sub(c).wrapping_sub(a) ^ (a << 10);
        c = c.wrapping_sub(a).wrapping_sub(b) ^ (b >> 15);
        (a, b, c)
    }
}

impl Hash32 for Jenkins96 {
    fn compute(&self, data: &[u8]) -> u32 {
        let mut a = GOLDEN_RATIO;
        let mut b = GOLDEN_RATIO;
        let mut c: u32 = 0;

        let mut blocks = data.chunks_exact(12);
        for block in &mut blocks {
            a = a.wrapping_add(read_u32_le(block, 0));
            b = b.wrapping_add(read_u32_le(block, 4));
            c = c.wrapping_add(read_u32_le(block, 8));
            (a, b, c) = Self::mix(a, b, c);
        }

        c = c.wrapping_add(data.len() as u32);

        // The low byte of `c` holds the length, so leftover bytes 9..11 start at bit 8.
        for (i, &byte) in blocks.remainder().iter().enumerate() {
            let byte = u32::from(byte);
            match i {
                0..=3 => a = a.wrapping_add(byte << (8 * i)),
                4..=7 => b = b.wrapping_add(byte << (8 * (i - 4))),
                _ => c = c.wrapping_add(byte << (8 * (i - 7))),
            }
        }

        let (_, _, c) = Self::mix(a, b, c);
        c
    }
}

/// Bob Jenkins' lookup3 hash (2006) with a caller-supplied seed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Jenkins06 {
    seed: u32,
}

impl Jenkins06 {
    /// Creates the hash with the given seed.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// Returns the seed.
    #[must_use]
    pub const fn seed(&self) -> u32 {
        self.seed
    }

    #[inline]
    fn mix(mut a: u32, mut b: u32, mut c: u32) -> (u32, u32, u32) {
        a = a.wrapping_sub(c) ^ c.rotate_left(4);
        c = c.wrapping_add(b);
        b = b.wrapping_sub(a) ^ a.rotate_left(6);
        a = a.wrapping_add(c);
        c = c.wrapping_sub(b) ^ b.rotate_left(8);
        b = b.wrapping_add(a);
        a = a.wrapping_sub(c) ^ c.rotate_left(16);
        c = c.wrapping_add(b);
        b = b.wrapping_sub(a) ^ a.rotate_left(19);
        a = a.wrapping_add(c);
        c = c.wrapping_sub(b) ^ b.rotate_left(4);
        b = b.wrapping_add(a);
        (a, b, c)
    }

    #[inline]
    fn final_mix(mut a: u32, mut b: u32, mut c: u32) -> u32 {
        c = (c ^ b).wrapping_sub(b.rotate_left(14));
        a = (a ^ c).wrapping_sub(c.rotate_left(11));
        b = (b ^ a).wrapping_sub(a.rotate_left(25));
        c = (c ^ b).wrapping_sub(b.rotate_left(16));
        a = (a ^ c).wrapping_sub(c.rotate_left(4));
        b = (b ^ a).wrapping_sub(a.rotate_left(14));
        (c ^ b).wrapping_sub(b.rotate_left(24))
    }
}

impl Hash32 for Jenkins06 {
    fn compute(&self, data: &[u8]) -> u32 {
        let init = 0xDEAD_BEEF_u32
            .wrapping_add(data.len() as u32)
            .wrapping_add(self.seed);
        let (mut a, mut b, mut c) = (init, init, init);

        // Full blocks only while more than 12 bytes remain; the tail keeps 1..=12.
        let mut rest = data;
        while rest.len() > 12 {
            a = a.wrapping_add(read_u32_le(rest, 0));
            b = b.wrapping_add(read_u32_le(rest, 4));
            c = c.wrapping_add(read_u32_le(rest, 8));
            (a, b, c) = Self::mix(a, b, c);
            rest = &rest[12..];
        }

        if rest.is_empty() {
            return c;
        }

        for (i, &byte) in rest.iter().enumerate() {
            let byte = u32::from(byte) << (8 * (i % 4));
            match i / 4 {
                0 => a = a.wrapping_add(byte),
                1 => b = b.wrapping_add(byte),
                _ => c = c.wrapping_add(byte),
            }
        }

        Self::final_mix(a, b, c)
    }
}

/// Bob Jenkins' one-at-a-time hash.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OneAtATime;

impl Hash32 for OneAtATime {
    fn compute(&self, data: &[u8]) -> u32 {
        let mut h: u32 = 0;
        for &byte in data {
            h = h.wrapping_add(u32::from(byte));
            h = h.wrapping_add(h << 10);
            h ^= h >> 6;
        }
        h = h.wrapping_add(h << 3);
        h ^= h >> 11;
        h.wrapping_add(h << 15)
    }
}

/// Paul Hsieh's SuperFastHash over little-endian 16-bit pairs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuperFast;

impl Hash32 for SuperFast {
    fn compute(&self, data: &[u8]) -> u32 {
        let mut hash = data.len() as u32;

        let mut words = data.chunks_exact(4);
        for word in &mut words {
            hash = hash.wrapping_add(read_u16_le(word, 0));
            let tmp = (read_u16_le(word, 2) << 11) ^ hash;
            hash = (hash << 16) ^ tmp;
            hash = hash.wrapping_add(hash >> 11);
        }

        let tail = words.remainder();
        match tail.len() {
            3 => {
                hash = hash.wrapping_add(read_u16_le(tail, 0));
                hash ^= hash << 16;
                hash ^= u32::from(tail[2]) << 18;
                hash = hash.wrapping_add(hash >> 11);
            }
            2 => {
                hash = hash.wrapping_add(read_u16_le(tail, 0));
                hash ^= hash << 11;
                hash = hash.wrapping_add(hash >> 17);
            }
            1 => {
                hash = hash.wrapping_add(u32::from(tail[0]));
                hash ^= hash << 10;
                hash = hash.wrapping_add(hash >> 1);
            }
            _ => {}
        }

        hash ^= hash << 3;
        hash = hash.wrapping_add(hash >> 5);
        hash ^= hash << 4;
        hash = hash.wrapping_add(hash >> 17);
        hash ^= hash << 25;
        hash.wrapping_add(hash >> 6)
    }
}

/// Any of the 32-bit hashes, selected at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hash {
    Crc32(Crc32),
    Fnv1a(Fnv1a),
    GeneralizedCrc(GeneralizedCrc),
    Jenkins06(Jenkins06),
    Jenkins96(Jenkins96),
    OneAtATime(OneAtATime),
    SuperFast(SuperFast),
}

impl Hash32 for Hash {
    fn compute(&self, data: &[u8]) -> u32 {
        match self {
            Self::Crc32(h) => Hash32::compute(h, data),
            Self::Fnv1a(h) => h.compute(data),
            Self::GeneralizedCrc(h) => h.compute(data),
            Self::Jenkins06(h) => h.compute(data),
            Self::Jenkins96(h) => h.compute(data),
            Self::OneAtATime(h) => h.compute(data),
            Self::SuperFast(h) => h.compute(data),
        }
    }
}

macro_rules! impl_from_hash {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Hash {
                fn from(h: $variant) -> Self {
                    Self::$variant(h)
                }
            }
        )*
    };
}

impl_from_hash!(Crc32, Fnv1a, GeneralizedCrc, Jenkins06, Jenkins96, OneAtATime, SuperFast);
