//! Wire constants and decoder safety limits.
//!
//! The decoder consumes untrusted transaction payloads, so every
//! length-prefixed field is bounded before any allocation happens.

/// Current content format version, written big-endian as the first two bytes.
pub const FORMAT_VERSION: u16 = 0x0100;

/// Oldest content format version the decoder accepts.
pub const MIN_FORMAT_VERSION: u16 = 0x0100;

/// Size of the shared record header (2-byte version + 1-byte type tag).
pub const HEADER_LEN: usize = 3;

/// Byte offset of the type tag inside a serialized record.
pub const TYPE_TAG_OFFSET: usize = 2;

/// Length of an address hash (base58check payload without version/checksum).
pub const ADDRESS_HASH_LEN: usize = 20;

/// Length of a raw transaction id.
pub const TX_ID_LEN: usize = 32;

/// Length of the content digest carried by media records.
pub const HASH_LEN: usize = 32;

/// Serialized size at or above which a record should be compressed
/// before it is embedded in a transaction.
pub const COMPRESSION_THRESHOLD: usize = 160;

/// Maximum bytes in a varint (enough for any u64).
pub const MAX_VARINT_BYTES: usize = 10;

/// Maximum byte length of a single text field (1 MiB).
pub const MAX_TEXT_LEN: usize = 1 << 20;

/// Maximum number of transaction ids in an index record.
pub const MAX_INDEX_ENTRIES: usize = 1 << 16;
