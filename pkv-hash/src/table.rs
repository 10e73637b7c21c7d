//! Process-wide lookup tables.
//!
//! Each table is computed on first use and then shared read-only through a
//! `OnceLock`, so concurrent first calls build it at most once.

use std::sync::OnceLock;

/// CRC-16/ARC polynomial (non-reflected form).
const CRC16_POLY: u16 = 0x8005;

/// CRC-CCITT polynomial (non-reflected form).
const CCITT_POLY: u16 = 0x1021;

/// CRC-32/ISO-HDLC polynomial (non-reflected form).
const CRC32_POLY: u32 = 0x04C1_1DB7;

static CRC16_TABLE: OnceLock<[u16; 256]> = OnceLock::new();
static CCITT_TABLE: OnceLock<[u16; 256]> = OnceLock::new();
static CRC32_TABLE: OnceLock<[u32; 256]> = OnceLock::new();
static GENERALIZED_CRC_TABLE: OnceLock<[u32; 256]> = OnceLock::new();

pub(crate) fn crc16() -> &'static [u16; 256] {
    CRC16_TABLE.get_or_init(|| msb_table_16(CRC16_POLY))
}

pub(crate) fn ccitt() -> &'static [u16; 256] {
    CCITT_TABLE.get_or_init(|| msb_table_16(CCITT_POLY))
}

pub(crate) fn crc32() -> &'static [u32; 256] {
    CRC32_TABLE.get_or_init(|| msb_table_32(CRC32_POLY))
}

pub(crate) fn generalized_crc() -> &'static [u32; 256] {
    GENERALIZED_CRC_TABLE.get_or_init(generalized_crc_table)
}

/// Builds a 16-bit table by shifting each dividend left through eight rounds.
fn msb_table_16(poly: u16) -> [u16; 256] {
    let mut table = [0u16; 256];
    for (dividend, slot) in table.iter_mut().enumerate() {
        let mut remainder = (dividend as u16) << 8;
        for _ in 0..8 {
            remainder = if remainder & 0x8000 != 0 {
                (remainder << 1) ^ poly
            } else {
                remainder << 1
            };
        }
        *slot = remainder;
    }
    table
}

/// 32-bit counterpart of [`msb_table_16`].
fn msb_table_32(poly: u32) -> [u32; 256] {
    let mut table = [0u32; 256];
    for (dividend, slot) in table.iter_mut().enumerate() {
        let mut remainder = (dividend as u32) << 24;
        for _ in 0..8 {
            remainder = if remainder & 0x8000_0000 != 0 {
                (remainder << 1) ^ poly
            } else {
                remainder << 1
            };
        }
        *slot = remainder;
    }
    table
}

/// Four chained five-round scrambles of the row index, one per output byte.
fn generalized_crc_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    for (row, slot) in table.iter_mut().enumerate() {
        let mut x = row as u8;
        let mut value = 0u32;
        for (phase, step) in [1u8, 2, 3, 4].into_iter().enumerate() {
            for _ in 0..5 {
                x = x.wrapping_add(step);
                x = x.wrapping_add(x << 1);
                x ^= x >> 1;
            }
            value ^= u32::from(x) << (8 * phase);
        }
        *slot = value;
    }
    table
}

/// Reverses the bit order of a byte.
#[inline]
pub(crate) fn reflect8(value: u8) -> u8 {
    value.reverse_bits()
}

/// Reverses the bit order of a 16-bit word.
#[inline]
pub(crate) fn reflect16(value: u16) -> u16 {
    value.reverse_bits()
}

/// Reverses the bit order of a 32-bit word.
#[inline]
pub(crate) fn reflect32(value: u32) -> u32 {
    value.reverse_bits()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crc16_table_known_entries() {
        let table = crc16();
        assert_eq!(table[0], 0x0000);
        assert_eq!(table[1], 0x8005);
        assert_eq!(table[255], 0x0202);
    }

    #[test]
    fn crc32_table_known_entries() {
        let table = crc32();
        assert_eq!(table[0], 0x0000_0000);
        assert_eq!(table[1], 0x04C1_1DB7);
    }

    #[test]
    fn ccitt_table_known_entries() {
        let table = ccitt();
        assert_eq!(table[1], 0x1021);
        assert_eq!(table[2], 0x2042);
    }

    #[test]
    fn tables_are_shared() {
        assert!(std::ptr::eq(generalized_crc(), generalized_crc()));
        assert!(std::ptr::eq(crc32(), crc32()));
    }

    #[test]
    fn reflection() {
        assert_eq!(reflect8(0b0000_0001), 0b1000_0000);
        assert_eq!(reflect16(0x0001), 0x8000);
        assert_eq!(reflect32(0x0000_0001), 0x8000_0000);
    }
}
