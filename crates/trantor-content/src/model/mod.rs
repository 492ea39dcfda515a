//! Data model types for content records.
//!
//! This module contains:
//! - Identifiers (address hashes, transaction ids, digests)
//! - Licenses
//! - Records (the nine variants and their type tags)
//! - Builders (ergonomic construction)

pub mod builder;
pub mod id;
pub mod license;
pub mod record;

pub use builder::{AuthorBuilder, MediaDataBuilder};
pub use id::{content_hash, format_tx_id, parse_tx_id, AddressHash, Hash32, TxId};
pub use license::License;
pub use record::{
    AddressRelation, Author, Comment, Donation, Index, Like, MediaData, Payment, Record,
    RecordType, RelationKind, Unlike,
};
