//! Primitive encoding/decoding for content records.
//!
//! Implements varints (LEB128), fixed-width big-endian numbers,
//! length-prefixed UTF-8 text and raw fixed-size byte arrays.

use crate::error::{DecodeError, EncodeError};
use crate::limits::{MAX_TEXT_LEN, MAX_VARINT_BYTES};

// =============================================================================
// DECODING
// =============================================================================

/// Reader for decoding binary data.
///
/// Wraps a byte slice and provides methods for reading primitives
/// with bounds checking and error handling.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader from a byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Creates a reader starting at `offset`.
    ///
    /// An offset past the end yields an empty reader; the first read fails.
    pub fn at(data: &'a [u8], offset: usize) -> Self {
        Self {
            data,
            pos: offset.min(data.len()),
        }
    }

    /// Returns the current position in the data.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the remaining bytes.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    /// Returns the number of remaining bytes.
    pub fn remaining_len(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns true if all data has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Reads a single byte.
    #[inline]
    pub fn read_byte(&mut self, context: &'static str) -> Result<u8, DecodeError> {
        if self.pos >= self.data.len() {
            return Err(DecodeError::UnexpectedEof { context });
        }
        let byte = self.data[self.pos];
        self.pos += 1;
        Ok(byte)
    }

    /// Reads exactly n bytes.
    #[inline]
    pub fn read_bytes(&mut self, n: usize, context: &'static str) -> Result<&'a [u8], DecodeError> {
        if n > self.remaining_len() {
            return Err(DecodeError::UnexpectedEof { context });
        }
        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    /// Reads a fixed-size byte array (address hashes, transaction ids, digests).
    #[inline]
    pub fn read_array<const N: usize>(
        &mut self,
        context: &'static str,
    ) -> Result<[u8; N], DecodeError> {
        let bytes = self.read_bytes(N, context)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Reads an unsigned varint (LEB128).
    ///
    /// Input that ends before the first byte is a plain end-of-input; input
    /// that ends after a continuation byte is a malformed varint.
    #[inline]
    pub fn read_varint(&mut self, context: &'static str) -> Result<u64, DecodeError> {
        let mut result: u64 = 0;
        let mut shift = 0;

        for i in 0..MAX_VARINT_BYTES {
            let byte = if i == 0 {
                self.read_byte(context)?
            } else {
                self.read_byte(context).map_err(|_| DecodeError::MalformedVarint { context })?
            };
            let value = (byte & 0x7F) as u64;

            if shift == 63 && value > 1 {
                return Err(DecodeError::VarintOverflow);
            }

            result |= value << shift;

            if byte & 0x80 == 0 {
                return Ok(result);
            }
            shift += 7;
        }

        Err(DecodeError::VarintTooLong)
    }

    /// Reads a length-declaring varint and checks it against `max`.
    fn read_length(&mut self, max: usize, field: &'static str) -> Result<usize, DecodeError> {
        let len = self.read_varint(field)?;
        if len > max as u64 {
            return Err(DecodeError::LengthExceedsLimit {
                field,
                len: usize::try_from(len).unwrap_or(usize::MAX),
                max,
            });
        }
        Ok(len as usize)
    }

    /// Reads a length-prefixed UTF-8 string.
    #[inline]
    pub fn read_string(&mut self, field: &'static str) -> Result<String, DecodeError> {
        let len = self.read_length(MAX_TEXT_LEN, field)?;
        let remaining = self.remaining_len();
        if len > remaining {
            return Err(DecodeError::TruncatedText {
                field,
                declared: len,
                remaining,
            });
        }
        let bytes = self.read_bytes(len, field)?;
        std::str::from_utf8(bytes)
            .map(|s| s.to_string())
            .map_err(|_| DecodeError::InvalidUtf8 { field })
    }

    /// Reads a count-prefixed list length, bounded by `max`.
    pub fn read_count(&mut self, max: usize, field: &'static str) -> Result<usize, DecodeError> {
        self.read_length(max, field)
    }

    /// Reads a big-endian unsigned integer of `width` bytes (at most 8).
    #[inline]
    pub fn read_uint_be(
        &mut self,
        width: usize,
        context: &'static str,
    ) -> Result<u64, DecodeError> {
        if width > 8 {
            return Err(DecodeError::NumberTooWide { width });
        }
        let bytes = self.read_bytes(width, context)?;
        Ok(bytes.iter().fold(0u64, |acc, b| (acc << 8) | *b as u64))
    }

    #[inline]
    pub fn read_u16(&mut self, context: &'static str) -> Result<u16, DecodeError> {
        Ok(u16::from_be_bytes(self.read_array(context)?))
    }

    #[inline]
    pub fn read_u32(&mut self, context: &'static str) -> Result<u32, DecodeError> {
        Ok(u32::from_be_bytes(self.read_array(context)?))
    }

    #[inline]
    pub fn read_u64(&mut self, context: &'static str) -> Result<u64, DecodeError> {
        Ok(u64::from_be_bytes(self.read_array(context)?))
    }
}

// =============================================================================
// ENCODING
// =============================================================================

/// Writer for encoding binary data.
#[derive(Debug, Clone, Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    /// Creates a new writer.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Creates a new writer with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Returns the written bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Returns a reference to the written bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Returns the number of bytes written.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if no bytes have been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Writes a single byte.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    /// Writes raw bytes.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Writes an unsigned varint (LEB128).
    #[inline]
    pub fn write_varint(&mut self, mut value: u64) {
        let mut buf = [0u8; MAX_VARINT_BYTES];
        let mut len = 0;
        loop {
            let mut byte = (value & 0x7F) as u8;
            value >>= 7;
            if value != 0 {
                byte |= 0x80;
            }
            buf[len] = byte;
            len += 1;
            if value == 0 {
                break;
            }
        }
        self.buf.extend_from_slice(&buf[..len]);
    }

    /// Writes a length-prefixed UTF-8 string. The empty string is a single zero byte.
    pub fn write_string(&mut self, s: &str, field: &'static str) -> Result<(), EncodeError> {
        if s.len() > MAX_TEXT_LEN {
            return Err(EncodeError::LengthExceedsLimit {
                field,
                len: s.len(),
                max: MAX_TEXT_LEN,
            });
        }
        self.write_varint(s.len() as u64);
        self.buf.extend_from_slice(s.as_bytes());
        Ok(())
    }

    /// Writes `value` big-endian in exactly `width` bytes.
    ///
    /// Fails instead of truncating when the value needs more than `width` bytes.
    pub fn write_uint_be(
        &mut self,
        value: u64,
        width: usize,
        field: &'static str,
    ) -> Result<(), EncodeError> {
        if width < 8 && value >> (width * 8) != 0 {
            return Err(EncodeError::NumberOverflow { field, value, width });
        }
        let bytes = value.to_be_bytes();
        if width > 8 {
            self.buf.resize(self.buf.len() + width - 8, 0);
            self.buf.extend_from_slice(&bytes);
        } else {
            self.buf.extend_from_slice(&bytes[8 - width..]);
        }
        Ok(())
    }

    #[inline]
    pub fn write_u16(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    #[inline]
    pub fn write_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    #[inline]
    pub fn write_u64(&mut self, value: u64) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }
}

// =============================================================================
// STANDALONE CODECS
// =============================================================================

/// Encodes `value` as a LEB128 varint.
pub fn encode_varint(value: u64) -> Vec<u8> {
    let mut writer = Writer::with_capacity(MAX_VARINT_BYTES);
    writer.write_varint(value);
    writer.into_bytes()
}

/// Decodes a varint at `offset`, returning the value and the bytes consumed.
pub fn decode_varint(input: &[u8], offset: usize) -> Result<(u64, usize), DecodeError> {
    let mut reader = Reader::at(input, offset);
    let value = reader.read_varint("varint")?;
    Ok((value, reader.position() - offset))
}

/// Encodes `value` big-endian.
///
/// With `Some(width)` the result is exactly `width` bytes, left-padded with
/// zeros, and values that do not fit are rejected. With `None` the result is
/// the minimal whole-byte form (zero is one `0x00` byte).
pub fn encode_number(value: u64, width: Option<usize>) -> Result<Vec<u8>, EncodeError> {
    let width = match width {
        Some(w) => w,
        None => ((64 - value.leading_zeros() as usize).div_ceil(8)).max(1),
    };
    let mut writer = Writer::with_capacity(width);
    writer.write_uint_be(value, width, "number")?;
    Ok(writer.into_bytes())
}

/// Decodes all of `bytes` as a big-endian unsigned integer.
pub fn decode_number(bytes: &[u8]) -> Result<u64, DecodeError> {
    Reader::new(bytes).read_uint_be(bytes.len(), "number")
}

/// Encodes text as a varint byte length followed by its UTF-8 bytes.
pub fn encode_text(text: &str) -> Result<Vec<u8>, EncodeError> {
    let mut writer = Writer::with_capacity(text.len() + 3);
    writer.write_string(text, "text")?;
    Ok(writer.into_bytes())
}

/// Decodes text at `offset`, returning it and the bytes consumed
/// (length prefix plus payload).
pub fn decode_text(input: &[u8], offset: usize) -> Result<(String, usize), DecodeError> {
    let mut reader = Reader::at(input, offset);
    let text = reader.read_string("text")?;
    Ok((text, reader.position() - offset))
}
