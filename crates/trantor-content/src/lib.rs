//! Trantor content: compact binary records for social-network actions.
//!
//! This crate encodes and decodes the payloads that a social layer embeds in
//! blockchain transactions: published media, author profiles, likes,
//! comments, payments, donations, follows and blocks, and indexes of earlier
//! transactions.
//!
//! # Quick Start
//!
//! ```rust
//! use trantor_content::{decode_any, encode_record, Like, Record, MAINNET};
//!
//! let like = Like {
//!     author: MAINNET.address(&[1u8; 20]),
//!     content_address: MAINNET.address(&[2u8; 20]),
//! };
//! let record = Record::from(like.clone());
//!
//! // Encode to binary: 2-byte version, 1-byte type tag, two 20-byte hashes
//! let bytes = encode_record(&record).unwrap();
//! assert_eq!(bytes.len(), 43);
//!
//! // Decode back; addresses are rebuilt for the network given here
//! let decoded = decode_any(&bytes, &MAINNET).unwrap();
//! assert_eq!(decoded, Some(Record::Like(like)));
//! ```
//!
//! # Modules
//!
//! - [`model`]: Record types, licenses, identifiers and builders
//! - [`codec`]: Binary encoding/decoding and type-tag dispatch
//! - [`address`]: Base58check addresses and their 20-byte hashes
//! - [`network`]: Mainnet/testnet parameter sets
//! - [`error`]: Error types
//! - [`limits`]: Wire constants and decoder limits
//!
//! # Wire Format
//!
//! Every record starts with the format version (`0x0100`, big-endian) and a
//! one-byte type tag, followed by that record's fields in a fixed order.
//! There is no outer framing; the embedding layer owns that, and may consult
//! [`compression_flag`] to decide whether to compress the payload.
//!
//! # Networks
//!
//! Only address hashes are written, so decoding needs the [`Network`] whose
//! version byte should be put back on each address. It is always passed
//! explicitly; there is no global default network.

pub mod address;
pub mod codec;
pub mod error;
pub mod limits;
pub mod model;
pub mod network;

// Re-export commonly used types at crate root
pub use codec::{compression_flag, decode_any, decode_record, encode_record, RecordCodec};
pub use error::{AddressError, DecodeError, EncodeError, ErrorKind};
pub use model::{
    AddressRelation, Author, AuthorBuilder, Comment, Donation, Index, License, Like, MediaData,
    MediaDataBuilder, Payment, Record, RecordType, RelationKind, Unlike,
};
pub use network::{Network, MAINNET, TESTNET};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
