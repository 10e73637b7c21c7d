//! Key validation.
//!
//! A validator only ever checks one subkey at a time, so a program that embeds it
//! never carries the base keys or hashes for the slots it does not check.
//!
//! Input is accepted with or without dashes and in any letter case.

use crate::error::KeyResult;
use crate::layout::KeyBlob;
use pkv_hash::{Checksum16, Fnv1a, Hash32};
use tracing::debug;

/// Validates keys and reads their serial numbers.
///
/// `D` is the hash that turns seed strings into serial numbers; it must match the
/// one the generator used (FNV-1a).
#[derive(Debug, Clone, Default)]
pub struct PartialKeyValidator<D = Fnv1a> {
    default_hash: D,
}

impl PartialKeyValidator<Fnv1a> {
    /// Creates a validator using FNV-1a for seed strings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Verifies the checksum and the subkey at `subkey_index`.
    ///
    /// Returns `Ok(false)` when the key is well-formed but wrong.
    ///
    /// # Errors
    ///
    /// Fails if the key is not Base32, is too short to hold a seed, or holds no
    /// subkey at `subkey_index`.
    pub fn validate_key<C, H>(
        checksum: &C,
        hash: &H,
        key: &str,
        subkey_index: usize,
        subkey_base: u32,
    ) -> KeyResult<bool>
    where
        C: Checksum16 + ?Sized,
        H: Hash32 + ?Sized,
    {
        let blob = KeyBlob::parse(key)?;
        let seed = blob.seed()?;
        validate_blob(checksum, hash, &blob, seed, subkey_index, subkey_base)
    }

    /// Reads the serial number (seed) without verifying anything.
    ///
    /// Intended for blacklist checks before full validation; the result is only as
    /// trustworthy as the key it came from.
    ///
    /// # Errors
    ///
    /// Fails if the key is not Base32 or is shorter than a seed.
    pub fn serial_number_from_key(key: &str) -> KeyResult<u32> {
        KeyBlob::parse(key)?.seed()
    }
}

impl<D: Hash32> PartialKeyValidator<D> {
    /// Creates a validator with a custom seed-string hash.
    #[must_use]
    pub fn with_default_hash(default_hash: D) -> Self {
        Self { default_hash }
    }

    /// Like [`validate_key`](PartialKeyValidator::validate_key), but also requires that
    /// `seed_string` hashes to the embedded seed.
    ///
    /// # Errors
    ///
    /// Same as [`validate_key`](PartialKeyValidator::validate_key).
    pub fn validate_key_with_seed_string<C, H>(
        &self,
        checksum: &C,
        hash: &H,
        key: &str,
        subkey_index: usize,
        subkey_base: u32,
        seed_string: &str,
    ) -> KeyResult<bool>
    where
        C: Checksum16 + ?Sized,
        H: Hash32 + ?Sized,
    {
        let blob = KeyBlob::parse(key)?;
        let seed = blob.seed()?;
        blob.subkey(subkey_index)?;

        if self.serial_number_from_seed(seed_string) != seed {
            debug!(seed, "seed string does not match key");
            return Ok(false);
        }

        validate_blob(checksum, hash, &blob, seed, subkey_index, subkey_base)
    }

    /// Computes the serial number a seed string maps to.
    #[must_use]
    pub fn serial_number_from_seed(&self, seed: &str) -> u32 {
        self.default_hash.compute(seed.as_bytes())
    }
}

fn validate_blob<C, H>(
    checksum: &C,
    hash: &H,
    blob: &KeyBlob,
    seed: u32,
    subkey_index: usize,
    subkey_base: u32,
) -> KeyResult<bool>
where
    C: Checksum16 + ?Sized,
    H: Hash32 + ?Sized,
{
    // Bounds first: a bad index is a caller bug whatever the key looks like.
    let stored = blob.subkey(subkey_index)?;

    if !blob.checksum_matches(checksum) {
        debug!(seed, "key checksum mismatch");
        return Ok(false);
    }

    let expected = hash.compute(&(seed ^ subkey_base).to_le_bytes());
    if stored != expected {
        debug!(seed, subkey_index, "subkey mismatch");
        return Ok(false);
    }

    Ok(true)
}
