//! Random key definitions with a readable display grouping.

use crate::definition::KeyDefinition;
use crate::error::{KeyError, KeyResult};
use crate::layout;
use pkv_hash::{ChecksumType, HashType};
use rand::Rng;
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use tracing::debug;

/// Builds random [`KeyDefinition`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefinitionGenerator;

impl DefinitionGenerator {
    /// Creates a definition with `number_of_keys` subkeys using the OS generator.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::NoBaseKeys`] if `number_of_keys` is zero.
    pub fn make_definition(number_of_keys: usize) -> KeyResult<KeyDefinition> {
        Self::make_definition_with_rng(number_of_keys, &mut OsRng)
    }

    /// Creates a definition with `number_of_keys` subkeys drawn from `rng`.
    ///
    /// The checksum is uniform over every checksum type. Each slot gets a uniform
    /// `u32` base key and a hash chosen uniformly among the hashes that need no seed.
    /// Spacing and mask are derived from the resulting key length.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::NoBaseKeys`] if `number_of_keys` is zero.
    pub fn make_definition_with_rng<R: Rng>(
        number_of_keys: usize,
        rng: &mut R,
    ) -> KeyResult<KeyDefinition> {
        if number_of_keys == 0 {
            return Err(KeyError::NoBaseKeys);
        }

        let checksum = ChecksumType::ALL[rng.gen_range(0..ChecksumType::ALL.len())];
        let candidates: Vec<HashType> = HashType::ALL
            .into_iter()
            .filter(|t| !t.requires_seed())
            .collect();

        let mut base_keys = Vec::with_capacity(number_of_keys);
        let mut hashes = Vec::with_capacity(number_of_keys);
        for _ in 0..number_of_keys {
            base_keys.push(rng.next_u32());
            hashes.extend(candidates.choose(rng).copied());
        }

        let mut definition = KeyDefinition::new(base_keys, checksum, hashes);
        let encoded_len = layout::encoded_len(number_of_keys);
        let spacing = Self::optimal_spacing(encoded_len);
        definition.set_spacing(spacing);
        definition.set_mask(layout::make_mask(encoded_len, spacing));

        debug!(number_of_keys, %checksum, encoded_len, spacing, "made key definition");
        Ok(definition)
    }

    /// Picks a group size for a key of `encoded_len` characters, or 0 for no grouping.
    ///
    /// Each length band has a range of acceptable group sizes. An exact divisor of the
    /// length wins; otherwise the size leaving the fullest last group wins, ties going
    /// to the smaller size.
    #[must_use]
    pub fn optimal_spacing(encoded_len: usize) -> usize {
        let (min, max) = match encoded_len {
            0..30 => (4, 9),
            30..45 => (6, 10),
            45..60 => (8, 15),
            60..85 => (10, 20),
            _ => return 0,
        };

        if let Some(divisor) = (min..=max).find(|size| encoded_len % size == 0) {
            return divisor;
        }

        (min..=max)
            .min_by_key(|&size| (size - encoded_len % size, size))
            .unwrap_or(0)
    }
}
