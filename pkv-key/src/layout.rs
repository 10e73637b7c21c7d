//! Binary key layout and its display form.
//!
//! A key blob is `seed ‖ subkey_0 ‖ … ‖ subkey_{N-1} ‖ checksum`, with the seed and
//! every subkey stored as little-endian `u32` and the checksum as little-endian `u16`.
//! The checksum covers everything before it.
//!
//! For display the blob is Base32-encoded and optionally split into dash-separated
//! groups of `spacing` characters. Dashes carry no data.

use crate::base32;
use crate::error::{KeyError, KeyResult};
use pkv_hash::Checksum16;

/// Bytes occupied by the seed.
pub const SEED_LEN: usize = 4;

/// Bytes occupied by each subkey.
pub const SUBKEY_LEN: usize = 4;

/// Bytes occupied by the trailing checksum.
pub const CHECKSUM_LEN: usize = 2;

/// Separator inserted between display groups.
pub const GROUP_SEPARATOR: char = '-';

/// Total blob length for `subkeys` subkeys.
#[must_use]
pub const fn blob_len(subkeys: usize) -> usize {
    SEED_LEN + SUBKEY_LEN * subkeys + CHECKSUM_LEN
}

/// Length of the Base32 text for `subkeys` subkeys, without dashes.
#[must_use]
pub const fn encoded_len(subkeys: usize) -> usize {
    (blob_len(subkeys) * 8).div_ceil(5)
}

/// A decoded (or freshly assembled) key blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBlob {
    bytes: Vec<u8>,
}

impl KeyBlob {
    /// Assembles a blob from a seed and its subkeys, appending the checksum.
    pub fn assemble<C: Checksum16 + ?Sized>(seed: u32, subkeys: &[u32], checksum: &C) -> Self {
        let mut bytes = Vec::with_capacity(blob_len(subkeys.len()));
        bytes.extend_from_slice(&seed.to_le_bytes());
        for subkey in subkeys {
            bytes.extend_from_slice(&subkey.to_le_bytes());
        }
        let sum = checksum.compute(&bytes);
        bytes.extend_from_slice(&sum.to_le_bytes());
        Self { bytes }
    }

    /// Parses a key string, ignoring dashes and letter case.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not Base32 once dashes are removed.
    pub fn parse(key: &str) -> KeyResult<Self> {
        let clean = strip_dashes(key).to_ascii_uppercase();
        Ok(Self {
            bytes: base32::decode(&clean)?,
        })
    }

    /// Wraps raw bytes without any checks.
    #[must_use]
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Returns the raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the embedded seed (serial number).
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::KeyTooShort`] if fewer than four bytes are present.
    pub fn seed(&self) -> KeyResult<u32> {
        self.read_u32(0).ok_or(KeyError::KeyTooShort {
            len: self.bytes.len(),
            min: SEED_LEN,
        })
    }

    /// Number of complete subkeys between the seed and the checksum.
    #[must_use]
    pub fn subkey_count(&self) -> usize {
        self.bytes
            .len()
            .saturating_sub(SEED_LEN + CHECKSUM_LEN)
            / SUBKEY_LEN
    }

    /// Returns the subkey stored at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::SubkeyIndexOutOfBounds`] if the slot would overlap the checksum.
    pub fn subkey(&self, index: usize) -> KeyResult<u32> {
        let out_of_bounds = || KeyError::SubkeyIndexOutOfBounds {
            index,
            subkeys: self.subkey_count(),
        };
        let end = index
            .checked_mul(SUBKEY_LEN)
            .and_then(|o| o.checked_add(SEED_LEN + SUBKEY_LEN))
            .ok_or_else(out_of_bounds)?;
        if end > self.bytes.len().saturating_sub(CHECKSUM_LEN) {
            return Err(out_of_bounds());
        }
        self.read_u32(end - SUBKEY_LEN).ok_or_else(out_of_bounds)
    }

    /// Everything the checksum covers.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.bytes[..self.bytes.len().saturating_sub(CHECKSUM_LEN)]
    }

    /// The checksum stored in the last two bytes, if present.
    #[must_use]
    pub fn stored_checksum(&self) -> Option<u16> {
        let len = self.bytes.len();
        if len < CHECKSUM_LEN {
            return None;
        }
        Some(u16::from_le_bytes([self.bytes[len - 2], self.bytes[len - 1]]))
    }

    /// Returns true if the stored checksum matches the body.
    pub fn checksum_matches<C: Checksum16 + ?Sized>(&self, checksum: &C) -> bool {
        self.stored_checksum()
            .is_some_and(|stored| stored == checksum.compute(self.body()))
    }

    /// Base32 text for display, grouped by `spacing` (0 disables grouping).
    #[must_use]
    pub fn to_key_string(&self, spacing: usize) -> String {
        insert_dashes(&base32::encode(&self.bytes), spacing)
    }

    fn read_u32(&self, offset: usize) -> Option<u32> {
        let bytes = self.bytes.get(offset..offset + 4)?;
        Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }
}

/// Splits `encoded` into groups of `spacing` characters joined by dashes.
///
/// No dash follows the final group, so text whose length is an exact multiple of
/// `spacing` gets one dash fewer than it has groups.
#[must_use]
pub fn insert_dashes(encoded: &str, spacing: usize) -> String {
    if spacing == 0 {
        return encoded.to_string();
    }
    let chars: Vec<char> = encoded.chars().collect();
    chars
        .chunks(spacing)
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("-")
}

/// Removes display dashes.
#[must_use]
pub fn strip_dashes(key: &str) -> String {
    key.chars().filter(|&c| c != GROUP_SEPARATOR).collect()
}

/// Builds the display mask: `>` followed by one `A` per character, grouped like
/// [`insert_dashes`].
#[must_use]
pub fn make_mask(encoded_len: usize, spacing: usize) -> String {
    format!(">{}", insert_dashes(&"A".repeat(encoded_len), spacing))
}
