//! Key generation.
//!
//! Subkey `i` is `hash_{i mod H}(LE32(seed ^ base_i))`, where `H` is the number of
//! hash functions. The cycling is part of the format: validators select hashes the
//! same way, so it must not be "fixed".

use crate::definition::KeyDefinition;
use crate::error::{KeyError, KeyResult};
use crate::layout::KeyBlob;
use pkv_hash::{Checksum, Fnv1a, Hash, Hash32};
use rand::RngCore;
use rand::rngs::OsRng;
use std::collections::HashMap;
use tracing::{debug, info};

/// Generates keys from a checksum, a list of hashes and a list of base keys.
#[derive(Debug, Clone)]
pub struct PartialKeyGenerator {
    base_keys: Vec<u32>,
    checksum: Checksum,
    hashes: Vec<Hash>,
    spacing: usize,
}

impl PartialKeyGenerator {
    /// Creates a generator with no display grouping.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::NoBaseKeys`] or [`KeyError::NoHashFunctions`] if either
    /// list is empty.
    pub fn new<C, H>(checksum: C, hashes: Vec<H>, base_keys: Vec<u32>) -> KeyResult<Self>
    where
        C: Into<Checksum>,
        H: Into<Hash>,
    {
        if base_keys.is_empty() {
            return Err(KeyError::NoBaseKeys);
        }
        if hashes.is_empty() {
            return Err(KeyError::NoHashFunctions);
        }
        Ok(Self {
            base_keys,
            checksum: checksum.into(),
            hashes: hashes.into_iter().map(Into::into).collect(),
            spacing: 0,
        })
    }

    /// Creates a generator that uses one hash for every subkey.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::NoBaseKeys`] if `base_keys` is empty.
    pub fn with_single_hash<C, H>(checksum: C, hash: H, base_keys: Vec<u32>) -> KeyResult<Self>
    where
        C: Into<Checksum>,
        H: Into<Hash>,
    {
        Self::new(checksum, vec![hash.into()], base_keys)
    }

    /// Creates a generator from a definition, including its spacing.
    ///
    /// # Errors
    ///
    /// Fails if the definition has no base keys or hashes, or names a hash that
    /// needs a seed.
    pub fn from_definition(definition: &KeyDefinition) -> KeyResult<Self> {
        let mut generator = Self::new(
            definition.checksum(),
            definition.hash_functions()?,
            definition.base_keys().to_vec(),
        )?;
        generator.spacing = definition.spacing();
        Ok(generator)
    }

    /// Characters per display group (0 = no grouping).
    #[must_use]
    pub fn spacing(&self) -> usize {
        self.spacing
    }

    /// Sets the display grouping used by later calls to [`generate`](Self::generate).
    pub fn set_spacing(&mut self, spacing: usize) {
        self.spacing = spacing;
    }

    /// Number of subkeys in every generated key.
    #[must_use]
    pub fn subkey_count(&self) -> usize {
        self.base_keys.len()
    }

    /// Generates the key for `seed`.
    #[must_use]
    pub fn generate(&self, seed: u32) -> String {
        let subkeys: Vec<u32> = self
            .base_keys
            .iter()
            .zip(self.hashes.iter().cycle())
            .map(|(&base, hash)| hash.compute(&(seed ^ base).to_le_bytes()))
            .collect();

        let key = KeyBlob::assemble(seed, &subkeys, &self.checksum).to_key_string(self.spacing);
        debug!(seed, subkeys = subkeys.len(), "generated key");
        key
    }

    /// Generates the key for the seed derived from `seed` (FNV-1a over its UTF-8 bytes).
    #[must_use]
    pub fn generate_from_string(&self, seed: &str) -> String {
        self.generate(Fnv1a.compute(seed.as_bytes()))
    }

    /// Generates `count` keys for distinct random seeds drawn from the OS generator.
    #[must_use]
    pub fn generate_many(&self, count: usize) -> HashMap<u32, String> {
        self.generate_many_with_rng(count, &mut OsRng)
    }

    /// Generates `count` keys for distinct seeds drawn from `rng`.
    ///
    /// Seeds that repeat are drawn again, so the map always holds `count` entries.
    /// `count` must stay well below 2^32.
    pub fn generate_many_with_rng<R: RngCore + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> HashMap<u32, String> {
        let mut keys = HashMap::with_capacity(count);
        while keys.len() < count {
            let seed = rng.next_u32();
            if keys.contains_key(&seed) {
                debug!(seed, "seed collision, drawing again");
                continue;
            }
            keys.insert(seed, self.generate(seed));
        }
        info!(count, "generated keys");
        keys
    }
}
