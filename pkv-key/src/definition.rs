//! Key definitions: which checksum, which hashes and which base keys a product uses.
//!
//! A definition is created once (randomly, or loaded from JSON) and then treated as
//! immutable configuration shared by the issuer and the validators.

use crate::error::{KeyError, KeyResult};
use pkv_hash::{Checksum, ChecksumType, Hash, HashType};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Describes how keys for one product are generated and validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyDefinition {
    /// Per-slot base keys, XORed with the seed before hashing.
    base_keys: Vec<u32>,
    /// Checksum protecting the whole key.
    checksum: ChecksumType,
    /// Hash per slot, reused cyclically when shorter than `base_keys`.
    hashes: Vec<HashType>,
    /// Characters per display group (0 = no grouping).
    #[serde(default)]
    spacing: usize,
    /// Display mask, e.g. `>AAAAAA-AAAAAA`. Cached, never recomputed on read.
    #[serde(default)]
    mask: String,
}

impl KeyDefinition {
    /// Creates a definition with no display grouping and an empty mask.
    #[must_use]
    pub fn new(base_keys: Vec<u32>, checksum: ChecksumType, hashes: Vec<HashType>) -> Self {
        Self {
            base_keys,
            checksum,
            hashes,
            spacing: 0,
            mask: String::new(),
        }
    }

    #[must_use]
    pub fn base_keys(&self) -> &[u32] {
        &self.base_keys
    }

    /// Replaces the per-slot base keys.
    pub fn set_base_keys(&mut self, base_keys: Vec<u32>) {
        self.base_keys = base_keys;
    }

    #[must_use]
    pub fn checksum_type(&self) -> ChecksumType {
        self.checksum
    }

    /// Replaces the checksum selector.
    pub fn set_checksum_type(&mut self, checksum: ChecksumType) {
        self.checksum = checksum;
    }

    #[must_use]
    pub fn hash_types(&self) -> &[HashType] {
        &self.hashes
    }

    /// Replaces the hash selectors, in slot order.
    pub fn set_hash_types(&mut self, hashes: Vec<HashType>) {
        self.hashes = hashes;
    }

    #[must_use]
    pub fn spacing(&self) -> usize {
        self.spacing
    }

    /// Sets the characters per display group (0 = no grouping).
    pub fn set_spacing(&mut self, spacing: usize) {
        self.spacing = spacing;
    }

    #[must_use]
    pub fn mask(&self) -> &str {
        &self.mask
    }

    /// Sets the cached display mask. It is not checked against `spacing`.
    pub fn set_mask(&mut self, mask: impl Into<String>) {
        self.mask = mask.into();
    }

    /// Resolves the checksum algorithm.
    #[must_use]
    pub fn checksum(&self) -> Checksum {
        self.checksum.create()
    }

    /// Resolves every hash algorithm, in slot order.
    ///
    /// # Errors
    ///
    /// Fails if any selector needs a seed (`Jenkins06`); a definition has no way to
    /// supply one.
    pub fn hash_functions(&self) -> KeyResult<Vec<Hash>> {
        self.hashes
            .iter()
            .map(|t| t.create().map_err(KeyError::from))
            .collect()
    }

    /// Resolves the hash used for subkey `index`, cycling through the hash list.
    ///
    /// # Errors
    ///
    /// Fails if the definition has no hashes, `index` has no base key, or the
    /// selected hash needs a seed.
    pub fn subkey_hash(&self, index: usize) -> KeyResult<Hash> {
        self.check_index(index)?;
        if self.hashes.is_empty() {
            return Err(KeyError::NoHashFunctions);
        }
        Ok(self.hashes[index % self.hashes.len()].create()?)
    }

    /// Returns the base key for subkey `index`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::SubkeyIndexOutOfBounds`] if there is no such slot.
    pub fn base_key(&self, index: usize) -> KeyResult<u32> {
        self.check_index(index)?;
        Ok(self.base_keys[index])
    }

    fn check_index(&self, index: usize) -> KeyResult<()> {
        if index >= self.base_keys.len() {
            return Err(KeyError::SubkeyIndexOutOfBounds {
                index,
                subkeys: self.base_keys.len(),
            });
        }
        Ok(())
    }

    /// Serializes to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> KeyResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a definition from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or names an unknown algorithm.
    pub fn from_json(json: &str) -> KeyResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a definition from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> KeyResult<Self> {
        let path = path.as_ref();
        let definition = Self::from_json(&std::fs::read_to_string(path)?)?;
        info!(
            path = %path.display(),
            subkeys = definition.base_keys.len(),
            "loaded key definition"
        );
        Ok(definition)
    }

    /// Writes the definition to a JSON file, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> KeyResult<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?)?;
        info!(path = %path.display(), "saved key definition");
        Ok(())
    }
}
