//! Network parameter sets.
//!
//! A [`Network`] carries the version bytes and prefixes that distinguish
//! mainnet from testnet keys and addresses. The codec itself only uses
//! `pub_key_hash` (to rebuild addresses on decode); the remaining fields are
//! consumed by the wallet and transaction layers built on top of it.
//!
//! There is no process-wide "active" network: callers pass the network to
//! every operation that needs one.
//!
//! ```compile_fail
//! let network = trantor_content::Network::default();
//! ```

/// BIP32 extended key version prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bip32Prefixes {
    pub public: u32,
    pub private: u32,
}

/// Version bytes and prefixes for one chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Network {
    /// Short name ("mainnet" or "testnet").
    pub name: &'static str,
    /// Prefix prepended to messages before signing.
    pub message_prefix: &'static str,
    pub bip32: Bip32Prefixes,
    /// Version byte of pay-to-pubkey-hash addresses.
    pub pub_key_hash: u8,
    /// Version byte of pay-to-script-hash addresses.
    pub script_hash: u8,
    /// Version byte of WIF-encoded private keys.
    pub wif: u8,
    /// Marker byte identifying content payloads inside transactions.
    pub magic_byte: u8,
}

const MESSAGE_PREFIX: &str = "\x18Creativecoin Signed Message:\n";

/// Main network parameters.
pub const MAINNET: Network = Network {
    name: "mainnet",
    message_prefix: MESSAGE_PREFIX,
    bip32: Bip32Prefixes {
        public: 0x0488_b21e,
        private: 0x0488_ade4,
    },
    pub_key_hash: 0x1c,
    script_hash: 0x05,
    wif: 0xb0,
    magic_byte: 0x51,
};

/// Test network parameters.
pub const TESTNET: Network = Network {
    name: "testnet",
    message_prefix: MESSAGE_PREFIX,
    bip32: Bip32Prefixes {
        public: 0x0435_87cf,
        private: 0x0435_8394,
    },
    pub_key_hash: 0x57,
    script_hash: 0xc4,
    wif: 0xef,
    magic_byte: 0xb8,
};

impl Network {
    /// All predefined networks.
    pub const ALL: [Network; 2] = [MAINNET, TESTNET];

    /// Looks up a predefined network by name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Network> {
        Self::ALL
            .into_iter()
            .find(|n| n.name.eq_ignore_ascii_case(name))
    }

    /// Looks up a predefined network by its payload magic byte.
    pub fn from_magic_byte(magic: u8) -> Option<Network> {
        Self::ALL.into_iter().find(|n| n.magic_byte == magic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_bytes() {
        assert_eq!(MAINNET.pub_key_hash, 0x1c);
        assert_eq!(TESTNET.pub_key_hash, 0x57);
        assert_eq!(MAINNET.magic_byte, 0x51);
        assert_eq!(TESTNET.magic_byte, 0xB8);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(Network::from_name("TestNet"), Some(TESTNET));
        assert_eq!(Network::from_name("regtest"), None);
        assert_eq!(Network::from_magic_byte(0x51), Some(MAINNET));
        assert_eq!(Network::from_magic_byte(0x00), None);
    }
}
