mod common;

use common::{BASE_KEYS, REFERENCE_KEY, SEED};
use pkv_key::{
    Checksum, ChecksumType, Hash, HashType, KeyDefinition, KeyError, OneAtATime,
    PartialKeyGenerator, PartialKeyValidator,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn reference_definition() -> KeyDefinition {
    KeyDefinition::new(
        BASE_KEYS.to_vec(),
        ChecksumType::Adler16,
        vec![HashType::Fnv1a, HashType::OneAtATime, HashType::SuperFast],
    )
}

// ── Accessors ───────────────────────────────────────────────────

#[test]
fn new_has_no_grouping() {
    let definition = reference_definition();
    assert_eq!(definition.base_keys(), &BASE_KEYS);
    assert_eq!(definition.checksum_type(), ChecksumType::Adler16);
    assert_eq!(definition.hash_types().len(), 3);
    assert_eq!(definition.spacing(), 0);
    assert_eq!(definition.mask(), "");
}

#[test]
fn setters_replace_fields() {
    let mut definition = KeyDefinition::default();
    definition.set_base_keys(vec![9]);
    definition.set_checksum_type(ChecksumType::CrcCcitt);
    definition.set_hash_types(vec![HashType::Crc32]);
    definition.set_spacing(4);
    definition.set_mask(">AAAA-AAAA-AAAA-AAAA");

    assert_eq!(definition.base_keys(), &[9]);
    assert_eq!(definition.checksum_type(), ChecksumType::CrcCcitt);
    assert_eq!(definition.hash_types(), &[HashType::Crc32]);
    assert_eq!(definition.spacing(), 4);
    assert_eq!(definition.mask(), ">AAAA-AAAA-AAAA-AAAA");
}

// ── Resolution ──────────────────────────────────────────────────

#[test]
fn resolves_algorithms() {
    let definition = reference_definition();
    assert!(matches!(definition.checksum(), Checksum::Adler16(_)));
    assert_eq!(definition.hash_functions().unwrap().len(), 3);
    assert_eq!(definition.subkey_hash(1).unwrap(), Hash::OneAtATime(OneAtATime));
    assert_eq!(definition.base_key(2).unwrap(), BASE_KEYS[2]);
}

#[test]
fn subkey_hash_cycles() {
    let mut definition = reference_definition();
    definition.set_base_keys(vec![1, 2, 3, 4, 5]);
    assert_eq!(definition.subkey_hash(3).unwrap(), definition.subkey_hash(0).unwrap());
    assert_eq!(definition.subkey_hash(4).unwrap(), definition.subkey_hash(1).unwrap());
}

#[test]
fn index_without_base_key_is_error() {
    let definition = reference_definition();
    assert!(matches!(
        definition.base_key(3),
        Err(KeyError::SubkeyIndexOutOfBounds {
            index: 3,
            subkeys: 3
        })
    ));
    assert!(matches!(
        definition.subkey_hash(3),
        Err(KeyError::SubkeyIndexOutOfBounds { .. })
    ));
}

#[test]
fn subkey_hash_without_hashes_is_error() {
    let mut definition = reference_definition();
    definition.set_hash_types(Vec::new());
    assert!(matches!(definition.subkey_hash(0), Err(KeyError::NoHashFunctions)));
}

#[test]
fn seeded_hash_cannot_be_resolved() {
    let mut definition = reference_definition();
    definition.set_hash_types(vec![HashType::Fnv1a, HashType::Jenkins06]);
    assert!(matches!(definition.hash_functions(), Err(KeyError::Hash(_))));
    assert!(matches!(definition.subkey_hash(1), Err(KeyError::Hash(_))));
    assert!(definition.subkey_hash(0).is_ok());
}

#[test]
fn generator_and_validators_agree_through_definition() {
    let mut definition = reference_definition();
    definition.set_spacing(5);

    let generator = PartialKeyGenerator::from_definition(&definition).unwrap();
    let key = generator.generate(SEED);
    assert_eq!(key.replace('-', ""), REFERENCE_KEY);

    for index in 0..definition.base_keys().len() {
        let valid = PartialKeyValidator::validate_key(
            &definition.checksum(),
            &definition.subkey_hash(index).unwrap(),
            &key,
            index,
            definition.base_key(index).unwrap(),
        );
        assert!(valid.unwrap());
    }
}

#[test]
fn generator_from_empty_definition_fails() {
    let definition = KeyDefinition::default();
    assert!(matches!(
        PartialKeyGenerator::from_definition(&definition),
        Err(KeyError::NoBaseKeys)
    ));
}

// ── JSON ────────────────────────────────────────────────────────

#[test]
fn json_uses_interchange_names() {
    let json = reference_definition().to_json().unwrap();
    assert!(json.contains(r#""Adler16""#));
    assert!(json.contains(r#""Fnv1A""#));
    assert!(json.contains(r#""OneAtATime""#));
    assert!(json.contains("\"base_keys\""));
}

#[test]
fn json_round_trip() {
    let mut definition = reference_definition();
    definition.set_spacing(5);
    definition.set_mask(">AAAAA-AAAAA-AAAAA-AAAAA-AAAAA-AAAA");

    let parsed = KeyDefinition::from_json(&definition.to_json().unwrap()).unwrap();
    assert_eq!(parsed, definition);
}

#[test]
fn json_spacing_and_mask_are_optional() {
    let json = r#"{"base_keys":[1,2],"checksum":"Crc16","hashes":["Jenkins96"]}"#;
    let definition = KeyDefinition::from_json(json).unwrap();
    assert_eq!(definition.base_keys(), &[1, 2]);
    assert_eq!(definition.checksum_type(), ChecksumType::Crc16);
    assert_eq!(definition.spacing(), 0);
    assert_eq!(definition.mask(), "");
}

#[test]
fn json_unknown_algorithm_rejected() {
    let json = r#"{"base_keys":[1],"checksum":"Md5","hashes":["Fnv1A"]}"#;
    assert!(matches!(
        KeyDefinition::from_json(json),
        Err(KeyError::Serialization(_))
    ));
}

// ── Files ───────────────────────────────────────────────────────

#[test]
fn save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("product.json");

    let mut definition = reference_definition();
    definition.set_spacing(5);
    definition.save(&path).unwrap();

    assert_eq!(KeyDefinition::load(&path).unwrap(), definition);
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let result = KeyDefinition::load(dir.path().join("missing.json"));
    assert!(matches!(result, Err(KeyError::Io(_))));
}
