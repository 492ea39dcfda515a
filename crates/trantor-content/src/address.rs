//! Base58check addresses and their 20-byte hashes.
//!
//! An address is `base58(version || hash || checksum)` where `checksum` is the
//! first four bytes of `SHA-256(SHA-256(version || hash))`. Records carry only
//! the hash on the wire; the version byte comes back from the [`Network`]
//! supplied at decode time.

use crate::error::AddressError;
use crate::limits::ADDRESS_HASH_LEN;
use crate::model::AddressHash;
use crate::network::Network;

/// Encodes `version || payload` with a trailing checksum as base58.
pub fn encode_base58check(version: u8, payload: &[u8]) -> String {
    bs58::encode(payload).with_check_version(version).into_string()
}

/// Decodes a base58check string into its version byte and payload.
///
/// Fails if the string is not base58, is too short to hold a version byte and
/// checksum, or the checksum does not match.
pub fn decode_base58check(s: &str) -> Result<(u8, Vec<u8>), AddressError> {
    let data = bs58::decode(s).with_check(None).into_vec().map_err(|e| match e {
        bs58::decode::Error::InvalidChecksum { .. } => AddressError::InvalidChecksum,
        bs58::decode::Error::NoChecksum => AddressError::InvalidLength { len: 0 },
        other => AddressError::InvalidBase58(other.to_string()),
    })?;
    match data.split_first() {
        Some((&version, payload)) => Ok((version, payload.to_vec())),
        None => Err(AddressError::InvalidLength { len: 0 }),
    }
}

/// Extracts the 20-byte hash from an address, dropping version and checksum.
pub fn to_hash(address: &str) -> Result<AddressHash, AddressError> {
    let (_, payload) = decode_base58check(address)?;
    payload
        .as_slice()
        .try_into()
        .map_err(|_| AddressError::InvalidLength { len: payload.len() })
}

/// Builds the address for `hash` under the given version byte.
pub fn from_hash(hash: &AddressHash, version: u8) -> String {
    encode_base58check(version, hash)
}

impl Network {
    /// Builds the pay-to-pubkey-hash address for `hash` on this network.
    pub fn address(&self, hash: &AddressHash) -> String {
        from_hash(hash, self.pub_key_hash)
    }

    /// Extracts the hash from an address, requiring this network's version byte.
    pub fn address_hash(&self, address: &str) -> Result<AddressHash, AddressError> {
        let (version, payload) = decode_base58check(address)?;
        if version != self.pub_key_hash {
            return Err(AddressError::VersionMismatch {
                expected: self.pub_key_hash,
                found: version,
            });
        }
        if payload.len() != ADDRESS_HASH_LEN {
            return Err(AddressError::InvalidLength { len: payload.len() });
        }
        let mut hash = [0u8; ADDRESS_HASH_LEN];
        hash.copy_from_slice(&payload);
        Ok(hash)
    }
}
