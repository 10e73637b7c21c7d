//! RFC 4648 Base32 without padding, uppercase only.
//!
//! Decoding is strict about the alphabet and its case but does not require the
//! bits left over after the last full byte to be zero.

use crate::error::{KeyError, KeyResult};

/// The RFC 4648 alphabet.
pub const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Encodes bytes, packing bits most-significant first into 5-bit groups.
#[must_use]
pub fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity((data.len() * 8).div_ceil(5));
    let mut buffer: u32 = 0;
    let mut bits: u32 = 0;

    for &byte in data {
        buffer = (buffer << 8) | u32::from(byte);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(char::from(ALPHABET[((buffer >> bits) & 0x1F) as usize]));
        }
        buffer &= (1 << bits) - 1;
    }

    if bits > 0 {
        out.push(char::from(ALPHABET[((buffer << (5 - bits)) & 0x1F) as usize]));
    }

    out
}

/// Decodes Base32 text.
///
/// # Errors
///
/// Returns [`KeyError::LowercaseBase32`] for a lowercase ASCII letter and
/// [`KeyError::InvalidBase32Character`] for any other character outside the alphabet.
pub fn decode(text: &str) -> KeyResult<Vec<u8>> {
    let mut out = Vec::with_capacity(text.len() * 5 / 8);
    let mut buffer: u32 = 0;
    let mut bits: u32 = 0;

    for (position, character) in text.chars().enumerate() {
        let value = symbol_value(character, position)?;
        buffer = (buffer << 5) | u32::from(value);
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push((buffer >> bits) as u8);
            buffer &= (1 << bits) - 1;
        }
    }

    Ok(out)
}

fn symbol_value(character: char, position: usize) -> KeyResult<u8> {
    match character {
        'A'..='Z' => Ok(character as u8 - b'A'),
        '2'..='7' => Ok(character as u8 - b'2' + 26),
        'a'..='z' => Err(KeyError::LowercaseBase32 { position }),
        _ => Err(KeyError::InvalidBase32Character {
            character,
            position,
        }),
    }
}
