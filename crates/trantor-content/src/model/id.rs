//! Fixed-size identifiers carried by content records.

use sha2::{Digest, Sha256};

use crate::limits::{ADDRESS_HASH_LEN, HASH_LEN, TX_ID_LEN};

/// The 20-byte payload of a base58check address.
pub type AddressHash = [u8; ADDRESS_HASH_LEN];

/// A 32-byte transaction id, in the byte order it is written on the wire.
pub type TxId = [u8; TX_ID_LEN];

/// A 32-byte content digest.
pub type Hash32 = [u8; HASH_LEN];

/// Computes the SHA-256 digest used as a media record's `hash`.
pub fn content_hash(data: &[u8]) -> Hash32 {
    let mut hash = [0u8; HASH_LEN];
    hash.copy_from_slice(&Sha256::digest(data));
    hash
}

/// Formats a 32-byte id or digest as lowercase hex.
pub fn format_tx_id(id: &TxId) -> String {
    let mut s = String::with_capacity(64);
    for byte in id {
        s.push_str(&format!("{:02x}", byte));
    }
    s
}

/// Parses a transaction id from exactly 64 hex digits.
pub fn parse_tx_id(s: &str) -> Option<TxId> {
    // from_str_radix alone would accept a leading '+'
    if s.len() != TX_ID_LEN * 2 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let mut id = [0u8; TX_ID_LEN];
    for (i, chunk) in s.as_bytes().chunks(2).enumerate() {
        let byte_str = std::str::from_utf8(chunk).ok()?;
        id[i] = u8::from_str_radix(byte_str, 16).ok()?;
    }
    Some(id)
}
