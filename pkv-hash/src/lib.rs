//! Checksum and hash algorithms used by partial key verification.
//!
//! This crate provides:
//! - 16-bit checksums protecting a whole key (`Adler16`, `Crc16`, `CrcCcitt`)
//! - 32-bit hashes producing individual subkeys (`Crc32`, `Fnv1a`, `GeneralizedCrc`,
//!   `Jenkins96`, `Jenkins06`, `OneAtATime`, `SuperFast`)
//! - `ChecksumType` / `HashType` selectors that resolve to concrete algorithms
//!
//! # Compatibility
//!
//! Every algorithm is reproduced bit-for-bit from the legacy PKV implementations so that
//! keys generated by one program validate in another. None of them is cryptographic:
//! they are neither collision- nor preimage-resistant.
//!
//! All arithmetic wraps at the algorithm's width. Table-driven algorithms build their
//! table once per process and share it read-only.

mod checksum;
mod error;
mod hash;
mod kind;
mod table;

pub use checksum::{Adler16, Checksum, Checksum16, Checksum32, Crc16, CrcCcitt};
pub use error::{HashError, HashResult};
pub use hash::{Crc32, Fnv1a, GeneralizedCrc, Hash, Hash32, Jenkins06, Jenkins96, OneAtATime, SuperFast};
pub use kind::{ChecksumType, HashType};
