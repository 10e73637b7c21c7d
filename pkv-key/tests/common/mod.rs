//! Shared test helpers for key tests.

#![allow(dead_code)]

use pkv_key::{Adler16, Fnv1a, Hash, OneAtATime, PartialKeyGenerator, SuperFast};

/// Base keys of the reference three-slot definition.
pub const BASE_KEYS: [u32; 3] = [0x1111_1111, 0x2222_2222, 0x3333_3333];

/// Seed of the reference key.
pub const SEED: u32 = 0xCAFE_BABE;

/// Reference key: Adler16, hashes `[Fnv1a, OneAtATime, SuperFast]`, no spacing.
pub const REFERENCE_KEY: &str = "X25P5SQB4WR6CK7IQGSWBIT33BVRK";

/// Hashes of the reference definition, in slot order.
pub fn reference_hashes() -> Vec<Hash> {
    vec![Fnv1a.into(), OneAtATime.into(), SuperFast.into()]
}

/// Generator for the reference definition.
pub fn reference_generator() -> PartialKeyGenerator {
    PartialKeyGenerator::new(Adler16, reference_hashes(), BASE_KEYS.to_vec()).unwrap()
}

/// Flips the most significant bit of the Base32 symbol at `position`.
///
/// The top bit of a symbol always carries data, even in the final symbol.
pub fn flip_symbol(key: &str, position: usize) -> String {
    const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
    let mut bytes = key.as_bytes().to_vec();
    let value = ALPHABET.iter().position(|&c| c == bytes[position]).unwrap();
    bytes[position] = ALPHABET[value ^ 0b1_0000];
    String::from_utf8(bytes).unwrap()
}
