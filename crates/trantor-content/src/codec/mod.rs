//! Binary encoding/decoding for content records.
//!
//! - [`primitives`]: varints, big-endian numbers, length-prefixed text
//! - [`header`]: the version + type tag prefix shared by every record
//! - [`record`]: per-variant layouts, dispatch and the compression flag

pub mod header;
pub mod primitives;
pub mod record;

pub use header::{peek_type_tag, read_header, write_header, Header};
pub use primitives::{
    decode_number, decode_text, decode_varint, encode_number, encode_text, encode_varint, Reader,
    Writer,
};
pub use record::{compression_flag, decode_any, decode_record, encode_record, RecordCodec};
