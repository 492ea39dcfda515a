//! The three-byte header shared by every record.
//!
//! ```text
//! offset 0..2  version   (u16, big-endian)
//! offset 2     type tag  (u8)
//! ```

use crate::codec::primitives::{Reader, Writer};
use crate::error::DecodeError;
use crate::limits::{FORMAT_VERSION, HEADER_LEN, MIN_FORMAT_VERSION, TYPE_TAG_OFFSET};

/// A decoded record header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub version: u16,
    /// Raw type tag; may not name a known record.
    pub type_tag: u8,
}

/// Writes the current format version and `type_tag`.
pub fn write_header(writer: &mut Writer, type_tag: u8) {
    writer.write_u16(FORMAT_VERSION);
    writer.write_byte(type_tag);
}

/// Reads and version-checks a header.
pub fn read_header(reader: &mut Reader<'_>) -> Result<Header, DecodeError> {
    let version = reader.read_u16("version")?;
    if !(MIN_FORMAT_VERSION..=FORMAT_VERSION).contains(&version) {
        return Err(DecodeError::UnsupportedVersion { version });
    }
    let type_tag = reader.read_byte("type")?;
    Ok(Header { version, type_tag })
}

/// Returns the type tag of a serialized record without decoding it.
pub fn peek_type_tag(input: &[u8]) -> Result<u8, DecodeError> {
    if input.len() < HEADER_LEN {
        return Err(DecodeError::UnexpectedEof { context: "header" });
    }
    Ok(input[TYPE_TAG_OFFSET])
}
