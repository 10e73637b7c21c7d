//! 16-bit checksums.
//!
//! A checksum covers the seed and all subkeys of a key and is stored in its last
//! two bytes. `Checksum32` exists for algorithms that double as a 32-bit
//! checksum (only [`Crc32`](crate::Crc32)).

use crate::table;

/// A 16-bit checksum over arbitrary bytes.
pub trait Checksum16 {
    /// Computes the checksum. Defined for empty input.
    fn compute(&self, data: &[u8]) -> u16;
}

/// A 32-bit checksum over arbitrary bytes.
pub trait Checksum32 {
    /// Computes the checksum. Defined for empty input.
    fn compute(&self, data: &[u8]) -> u32;
}

/// Largest chunk Adler16 sums before reducing, keeping both accumulators inside `u32`.
const ADLER_CHUNK: usize = 5550;

/// Largest prime below 256.
const ADLER_MOD: u32 = 251;

/// Adler-16: two accumulators modulo 251, result `(b << 8) | a`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Adler16;

impl Checksum16 for Adler16 {
    fn compute(&self, data: &[u8]) -> u16 {
        let mut a: u32 = 1;
        let mut b: u32 = 0;

        for chunk in data.chunks(ADLER_CHUNK) {
            for &byte in chunk {
                a += u32::from(byte);
                b += a;
            }
            a %= ADLER_MOD;
            b %= ADLER_MOD;
        }

        ((b << 8) | a) as u16
    }
}

/// CRC-16/ARC (poly 0x8005, init 0, reflected in and out, no final xor).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Crc16;

impl Checksum16 for Crc16 {
    fn compute(&self, data: &[u8]) -> u16 {
        let table = table::crc16();
        let mut remainder: u16 = 0;

        for &byte in data {
            let index = table::reflect8(byte) ^ (remainder >> 8) as u8;
            remainder = table[usize::from(index)] ^ (remainder << 8);
        }

        table::reflect16(remainder)
    }
}

/// CRC-CCITT "false" (poly 0x1021, init 0xFFFF, unreflected, no final xor).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrcCcitt;

impl Checksum16 for CrcCcitt {
    fn compute(&self, data: &[u8]) -> u16 {
        let table = table::ccitt();
        let mut remainder: u16 = 0xFFFF;

        for &byte in data {
            let index = byte ^ (remainder >> 8) as u8;
            remainder = table[usize::from(index)] ^ (remainder << 8);
        }

        remainder
    }
}

/// Any of the 16-bit checksums, selected at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checksum {
    Adler16(Adler16),
    Crc16(Crc16),
    CrcCcitt(CrcCcitt),
}

impl Checksum16 for Checksum {
    fn compute(&self, data: &[u8]) -> u16 {
        match self {
            Self::Adler16(c) => c.compute(data),
            Self::Crc16(c) => c.compute(data),
            Self::CrcCcitt(c) => c.compute(data),
        }
    }
}

impl From<Adler16> for Checksum {
    fn from(c: Adler16) -> Self {
        Self::Adler16(c)
    }
}

impl From<Crc16> for Checksum {
    fn from(c: Crc16) -> Self {
        Self::Crc16(c)
    }
}

impl From<CrcCcitt> for Checksum {
    fn from(c: CrcCcitt) -> Self {
        Self::CrcCcitt(c)
    }
}
