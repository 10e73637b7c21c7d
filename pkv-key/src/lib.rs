//! Partial key verification (PKV).
//!
//! This crate handles:
//! - Generating short, human-typeable keys from a 32-bit seed
//! - Validating one subkey of a key at a time
//! - Reading the serial number embedded in a key
//! - Random key definitions and their JSON interchange form
//!
//! # Key Format
//!
//! A key is the Base32 (RFC 4648, no padding) encoding of:
//! - the seed (serial number), 4 bytes little-endian
//! - one 4-byte little-endian subkey per base key
//! - a 2-byte little-endian checksum over everything before it
//!
//! optionally split into dash-separated groups for display, e.g.
//! `QDKZUO-JLLWPY-XWOULC-ONCQIN-5R5X35-ZS3KEQ`.
//!
//! # Design Principles
//!
//! - **Partial verification**: a validator checks a single subkey, so no shipped
//!   program carries everything needed to mint keys
//! - **Cross-implementation**: the format and every algorithm are bit-exact with
//!   other PKV implementations
//! - **Not cryptography**: keys deter casual sharing; they do not resist a
//!   determined attacker

pub mod base32;
mod definition;
mod definition_generator;
mod error;
mod generator;
pub mod layout;
mod validator;

pub use definition::KeyDefinition;
pub use definition_generator::DefinitionGenerator;
pub use error::{KeyError, KeyResult};
pub use generator::PartialKeyGenerator;
pub use validator::PartialKeyValidator;

pub use pkv_hash::{
    Adler16, Checksum, Checksum16, ChecksumType, Crc16, Crc32, CrcCcitt, Fnv1a, GeneralizedCrc,
    Hash, Hash32, HashType, Jenkins06, Jenkins96, OneAtATime, SuperFast,
};
