//! Algorithm selectors and their factories.
//!
//! The selector names are the interchange names written into key definitions,
//! so they must not change.

use crate::checksum::{Adler16, Checksum, Crc16, CrcCcitt};
use crate::error::{HashError, HashResult};
use crate::hash::{Crc32, Fnv1a, GeneralizedCrc, Hash, Jenkins06, Jenkins96, OneAtATime, SuperFast};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selects one of the 16-bit checksums.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChecksumType {
    #[default]
    Adler16,
    Crc16,
    CrcCcitt,
}

impl ChecksumType {
    /// Every checksum type, in declaration order.
    pub const ALL: [Self; 3] = [Self::Adler16, Self::Crc16, Self::CrcCcitt];

    /// Returns the interchange name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Adler16 => "Adler16",
            Self::Crc16 => "Crc16",
            Self::CrcCcitt => "CrcCcitt",
        }
    }

    /// Creates the checksum this selector names.
    #[must_use]
    pub fn create(&self) -> Checksum {
        match self {
            Self::Adler16 => Adler16.into(),
            Self::Crc16 => Crc16.into(),
            Self::CrcCcitt => CrcCcitt.into(),
        }
    }
}

impl fmt::Display for ChecksumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChecksumType {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| HashError::UnknownAlgorithm(s.to_string()))
    }
}

/// Selects one of the 32-bit hashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashType {
    Crc32,
    #[serde(rename = "Fnv1A")]
    Fnv1a,
    GeneralizedCrc,
    Jenkins06,
    Jenkins96,
    OneAtATime,
    SuperFast,
}

impl HashType {
    /// Every hash type, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Crc32,
        Self::Fnv1a,
        Self::GeneralizedCrc,
        Self::Jenkins06,
        Self::Jenkins96,
        Self::OneAtATime,
        Self::SuperFast,
    ];

    /// Returns the interchange name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Crc32 => "Crc32",
            Self::Fnv1a => "Fnv1A",
            Self::GeneralizedCrc => "GeneralizedCrc",
            Self::Jenkins06 => "Jenkins06",
            Self::Jenkins96 => "Jenkins96",
            Self::OneAtATime => "OneAtATime",
            Self::SuperFast => "SuperFast",
        }
    }

    /// Returns true if the hash cannot be built without a seed.
    #[must_use]
    pub const fn requires_seed(&self) -> bool {
        matches!(self, Self::Jenkins06)
    }

    /// Creates the hash this selector names.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::SeedRequired`] for [`HashType::Jenkins06`]; use
    /// [`HashType::create_seeded`] for it instead.
    pub fn create(&self) -> HashResult<Hash> {
        if self.requires_seed() {
            return Err(HashError::SeedRequired(*self));
        }
        Ok(self.create_seeded(0))
    }

    /// Creates the hash, handing `seed` to algorithms that take one.
    #[must_use]
    pub fn create_seeded(&self, seed: u32) -> Hash {
        match self {
            Self::Crc32 => Crc32.into(),
            Self::Fnv1a => Fnv1a.into(),
            Self::GeneralizedCrc => GeneralizedCrc.into(),
            Self::Jenkins06 => Jenkins06::new(seed).into(),
            Self::Jenkins96 => Jenkins96.into(),
            Self::OneAtATime => OneAtATime.into(),
            Self::SuperFast => SuperFast.into(),
        }
    }
}

impl fmt::Display for HashType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashType {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| HashError::UnknownAlgorithm(s.to_string()))
    }
}
