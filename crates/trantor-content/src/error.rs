//! Error types for content record encoding/decoding and address handling.

use thiserror::Error;

/// Coarse classification of codec failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A varint ended before its terminating byte, or is too long.
    MalformedVarint,
    /// A declared length or fixed-width field runs past the end of the buffer.
    Truncated,
    /// An address failed base58check decoding or has the wrong length.
    InvalidAddress,
    /// A transaction id is not exactly 32 bytes of hex.
    InvalidTxId,
    /// The type tag does not name a known record.
    UnknownTypeTag,
    /// Any other structurally invalid input.
    MalformedEncoding,
}

impl ErrorKind {
    /// Returns a stable identifier for the kind (e.g., "truncated").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::MalformedVarint => "malformed_varint",
            ErrorKind::Truncated => "truncated",
            ErrorKind::InvalidAddress => "invalid_address",
            ErrorKind::InvalidTxId => "invalid_tx_id",
            ErrorKind::UnknownTypeTag => "unknown_type_tag",
            ErrorKind::MalformedEncoding => "malformed_encoding",
        }
    }
}

/// Error while parsing or checking a base58check address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("invalid base58 encoding: {0}")]
    InvalidBase58(String),

    #[error("base58check checksum mismatch")]
    InvalidChecksum,

    #[error("address payload is {len} bytes, expected 20")]
    InvalidLength { len: usize },

    #[error("address version byte {found:#04x} does not match network byte {expected:#04x}")]
    VersionMismatch { expected: u8, found: u8 },
}

/// Error during binary decoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("unexpected end of input while reading {context}")]
    UnexpectedEof { context: &'static str },

    #[error("{field} declares {declared} bytes but only {remaining} remain")]
    TruncatedText {
        field: &'static str,
        declared: usize,
        remaining: usize,
    },

    #[error("varint truncated while reading {context}")]
    MalformedVarint { context: &'static str },

    #[error("varint exceeds maximum length (10 bytes)")]
    VarintTooLong,

    #[error("varint overflow (value exceeds u64)")]
    VarintOverflow,

    #[error("number of {width} bytes does not fit in u64")]
    NumberTooWide { width: usize },

    #[error("unsupported content version: {version:#06x}")]
    UnsupportedVersion { version: u16 },

    #[error("unknown record type tag: {tag:#04x}")]
    UnknownTypeTag { tag: u8 },

    #[error("expected {expected} record, found type tag {found:#04x}")]
    TypeMismatch { expected: &'static str, found: u8 },

    #[error("invalid UTF-8 in {field}")]
    InvalidUtf8 { field: &'static str },

    #[error("{field} length {len} exceeds maximum {max}")]
    LengthExceedsLimit {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("invalid license byte: {value:#04x}")]
    InvalidLicense { value: u8 },

    #[error("{field} is not a JSON array of strings: {reason}")]
    InvalidTags { field: &'static str, reason: String },

    #[error("{count} trailing bytes after record")]
    TrailingBytes { count: usize },
}

impl DecodeError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::MalformedVarint { .. }
            | DecodeError::VarintTooLong
            | DecodeError::VarintOverflow => ErrorKind::MalformedVarint,
            DecodeError::UnexpectedEof { .. } | DecodeError::TruncatedText { .. } => {
                ErrorKind::Truncated
            }
            DecodeError::UnknownTypeTag { .. } => ErrorKind::UnknownTypeTag,
            _ => ErrorKind::MalformedEncoding,
        }
    }

    /// Returns true if the buffer ended before the record was complete.
    pub fn is_truncation(&self) -> bool {
        self.kind() == ErrorKind::Truncated
    }
}

/// Error during binary encoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    #[error("invalid address in {field}: {source}")]
    InvalidAddress {
        field: &'static str,
        #[source]
        source: AddressError,
    },

    #[error("invalid transaction id: {tx_id:?}")]
    InvalidTxId { tx_id: String },

    #[error("{field} value {value} does not fit in {width} bytes")]
    NumberOverflow {
        field: &'static str,
        value: u64,
        width: usize,
    },

    #[error("{field} length {len} exceeds maximum {max}")]
    LengthExceedsLimit {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("{field} could not be rendered as JSON: {reason}")]
    InvalidTags { field: &'static str, reason: String },
}

impl EncodeError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EncodeError::InvalidAddress { .. } => ErrorKind::InvalidAddress,
            EncodeError::InvalidTxId { .. } => ErrorKind::InvalidTxId,
            _ => ErrorKind::MalformedEncoding,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_kinds() {
        assert_eq!(
            DecodeError::MalformedVarint { context: "count" }.kind(),
            ErrorKind::MalformedVarint
        );
        assert_eq!(
            DecodeError::TruncatedText { field: "nick", declared: 4, remaining: 1 }.kind(),
            ErrorKind::Truncated
        );
        assert!(DecodeError::UnexpectedEof { context: "hash" }.is_truncation());
        assert_eq!(DecodeError::UnknownTypeTag { tag: 0xFF }.kind(), ErrorKind::UnknownTypeTag);
        assert_eq!(DecodeError::InvalidLicense { value: 9 }.kind(), ErrorKind::MalformedEncoding);
    }

    #[test]
    fn test_encode_kinds() {
        let err = EncodeError::InvalidAddress {
            field: "author",
            source: AddressError::InvalidChecksum,
        };
        assert_eq!(err.kind(), ErrorKind::InvalidAddress);
        assert_eq!(err.kind().as_str(), "invalid_address");
        assert_eq!(
            EncodeError::InvalidTxId { tx_id: "aa".into() }.kind(),
            ErrorKind::InvalidTxId
        );
    }

    #[test]
    fn test_display() {
        let err = DecodeError::UnsupportedVersion { version: 0x0200 };
        assert_eq!(err.to_string(), "unsupported content version: 0x0200");
        let err = DecodeError::UnknownTypeTag { tag: 0x0a };
        assert_eq!(err.to_string(), "unknown record type tag: 0x0a");
    }
}
