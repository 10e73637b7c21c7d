//! Command implementations for the `pkv` tool.
//!
//! Everything here works on loaded definitions and plain strings so the binary
//! only has to parse arguments and print.

use anyhow::{Context, Result};
use pkv_key::{DefinitionGenerator, KeyDefinition, PartialKeyGenerator, PartialKeyValidator};
use std::path::Path;
use tracing::{debug, info};

/// Which seed(s) to generate keys for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    /// A literal serial number.
    Seed(u32),
    /// A string hashed into the serial number (FNV-1a).
    Name(String),
    /// This many random, distinct serial numbers.
    Count(usize),
}

/// Loads a definition file, naming the path in any error.
pub fn load_definition(path: &Path) -> Result<KeyDefinition> {
    KeyDefinition::load(path)
        .with_context(|| format!("failed to load key definition from {}", path.display()))
}

/// Creates a random definition and either saves it or returns its JSON.
///
/// Returns `None` when the definition was written to `out`.
pub fn new_definition(keys: usize, out: Option<&Path>) -> Result<Option<String>> {
    let definition = DefinitionGenerator::make_definition(keys)?;
    match out {
        Some(path) => {
            definition
                .save(path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            Ok(None)
        }
        None => Ok(Some(definition.to_json()?)),
    }
}

/// Generates keys, returned as `(serial, key)` pairs sorted by serial.
pub fn generate(definition: &KeyDefinition, source: &SeedSource) -> Result<Vec<(u32, String)>> {
    let generator = PartialKeyGenerator::from_definition(definition)
        .context("definition cannot generate keys")?;

    let mut keys = match source {
        SeedSource::Seed(seed) => vec![(*seed, generator.generate(*seed))],
        SeedSource::Name(name) => {
            let seed = PartialKeyValidator::new().serial_number_from_seed(name);
            vec![(seed, generator.generate(seed))]
        }
        SeedSource::Count(count) => generator.generate_many(*count).into_iter().collect(),
    };
    keys.sort_unstable_by_key(|(seed, _)| *seed);

    info!(keys = keys.len(), "keys issued");
    Ok(keys)
}

/// Checks one subkey of `key`, and the name it was issued to when given.
pub fn validate(
    definition: &KeyDefinition,
    key: &str,
    index: usize,
    name: Option<&str>,
) -> Result<bool> {
    let checksum = definition.checksum();
    let hash = definition
        .subkey_hash(index)
        .context("definition has no such subkey")?;
    let base = definition.base_key(index)?;

    let valid = match name {
        Some(name) => PartialKeyValidator::new()
            .validate_key_with_seed_string(&checksum, &hash, key, index, base, name)?,
        None => PartialKeyValidator::validate_key(&checksum, &hash, key, index, base)?,
    };

    debug!(index, valid, "validated key");
    Ok(valid)
}

/// Reads the serial number embedded in `key` without checking it.
pub fn serial(key: &str) -> Result<u32> {
    PartialKeyValidator::serial_number_from_key(key)
        .with_context(|| format!("cannot read serial number from {key:?}"))
}
