//! Record encoding/decoding and type-tag dispatch.
//!
//! Field layouts (after the 3-byte header, integers big-endian):
//!
//! | Record          | Fields                                                        |
//! |-----------------|---------------------------------------------------------------|
//! | Index           | varint count, count x 32-byte tx id                           |
//! | Author          | address, nick, email, web, description, avatar, tags          |
//! | MediaData       | user, content, license u8, title, description, content type,  |
//! |                 | tags, price u64, public, private, hash [32], public size u32, |
//! |                 | private size u32                                              |
//! | Like / Unlike   | author, content                                               |
//! | Payment         | author, content, amount u64                                   |
//! | Comment         | author, content, comment                                      |
//! | Donation        | author                                                        |
//! | AddressRelation | follower, followed                                            |
//!
//! Addresses are 20-byte hashes; text and tags are varint length-prefixed
//! UTF-8, with tags rendered as a JSON array.

use tracing::{debug, trace};

use crate::address;
use crate::codec::header::{peek_type_tag, read_header, write_header};
use crate::codec::primitives::{Reader, Writer};
use crate::error::{DecodeError, EncodeError};
use crate::limits::{COMPRESSION_THRESHOLD, MAX_INDEX_ENTRIES, TX_ID_LEN};
use crate::model::{
    format_tx_id, parse_tx_id, AddressRelation, Author, Comment, Donation, Index, License, Like,
    MediaData, Payment, Record, RecordType, RelationKind, Unlike,
};
use crate::network::Network;

/// Serialize/deserialize capability shared by every record variant and by
/// [`Record`] itself.
pub trait RecordCodec: Sized {
    /// Returns the type tag written in the header.
    fn record_type(&self) -> RecordType;

    /// Writes the fields that follow the header.
    fn encode_fields(&self, writer: &mut Writer) -> Result<(), EncodeError>;

    /// Reads the fields that follow a header carrying `record_type`.
    ///
    /// Fails with [`DecodeError::TypeMismatch`] if `record_type` belongs to a
    /// different variant.
    fn decode_fields(
        reader: &mut Reader<'_>,
        record_type: RecordType,
        network: &Network,
    ) -> Result<Self, DecodeError>;

    /// Renders the header followed by the fields.
    fn serialize(&self) -> Result<Vec<u8>, EncodeError> {
        let mut writer = Writer::with_capacity(64);
        write_header(&mut writer, self.record_type() as u8);
        self.encode_fields(&mut writer)?;
        Ok(writer.into_bytes())
    }

    /// Decodes a record starting at `offset`, returning it and the offset just
    /// past its last byte.
    fn deserialize(
        input: &[u8],
        offset: usize,
        network: &Network,
    ) -> Result<(Self, usize), DecodeError> {
        let mut reader = Reader::at(input, offset);
        let header = read_header(&mut reader)?;
        let record_type = RecordType::from_u8(header.type_tag)
            .ok_or(DecodeError::UnknownTypeTag { tag: header.type_tag })?;
        let record = Self::decode_fields(&mut reader, record_type, network)?;
        Ok((record, reader.position()))
    }

    /// Returns the serialized length in bytes.
    fn size(&self) -> Result<usize, EncodeError> {
        Ok(self.serialize()?.len())
    }
}

// =============================================================================
// FIELD HELPERS
// =============================================================================

fn write_address(
    writer: &mut Writer,
    address: &str,
    field: &'static str,
) -> Result<(), EncodeError> {
    let hash = address::to_hash(address)
        .map_err(|source| EncodeError::InvalidAddress { field, source })?;
    writer.write_bytes(&hash);
    Ok(())
}

fn read_address(
    reader: &mut Reader<'_>,
    network: &Network,
    field: &'static str,
) -> Result<String, DecodeError> {
    let hash = reader.read_array(field)?;
    Ok(network.address(&hash))
}

fn write_tags(
    writer: &mut Writer,
    tags: &[String],
    field: &'static str,
) -> Result<(), EncodeError> {
    let json = serde_json::to_string(tags).map_err(|e| EncodeError::InvalidTags {
        field,
        reason: e.to_string(),
    })?;
    writer.write_string(&json, field)
}

fn read_tags(reader: &mut Reader<'_>, field: &'static str) -> Result<Vec<String>, DecodeError> {
    let json = reader.read_string(field)?;
    if json.is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(&json).map_err(|e| DecodeError::InvalidTags {
        field,
        reason: e.to_string(),
    })
}

fn expect_type(record_type: RecordType, expected: RecordType) -> Result<(), DecodeError> {
    if record_type != expected {
        return Err(DecodeError::TypeMismatch {
            expected: expected.name(),
            found: record_type as u8,
        });
    }
    Ok(())
}

// =============================================================================
// VARIANTS
// =============================================================================

impl RecordCodec for Index {
    fn record_type(&self) -> RecordType {
        RecordType::Index
    }

    fn encode_fields(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        if self.tx_ids.len() > MAX_INDEX_ENTRIES {
            return Err(EncodeError::LengthExceedsLimit {
                field: "tx_ids",
                len: self.tx_ids.len(),
                max: MAX_INDEX_ENTRIES,
            });
        }
        writer.write_varint(self.tx_ids.len() as u64);
        for tx_id in &self.tx_ids {
            let raw = parse_tx_id(tx_id)
                .ok_or_else(|| EncodeError::InvalidTxId { tx_id: tx_id.clone() })?;
            writer.write_bytes(&raw);
        }
        Ok(())
    }

    fn decode_fields(
        reader: &mut Reader<'_>,
        record_type: RecordType,
        _: &Network,
    ) -> Result<Self, DecodeError> {
        expect_type(record_type, RecordType::Index)?;
        let count = reader.read_count(MAX_INDEX_ENTRIES, "tx_ids")?;
        if count * TX_ID_LEN > reader.remaining_len() {
            return Err(DecodeError::UnexpectedEof { context: "tx_id" });
        }
        let mut tx_ids = Vec::with_capacity(count);
        for _ in 0..count {
            tx_ids.push(format_tx_id(&reader.read_array("tx_id")?));
        }
        Ok(Index { tx_ids })
    }
}

impl RecordCodec for Author {
    fn record_type(&self) -> RecordType {
        RecordType::Author
    }

    fn encode_fields(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        write_address(writer, &self.address, "address")?;
        writer.write_string(&self.nick, "nick")?;
        writer.write_string(&self.email, "email")?;
        writer.write_string(&self.web, "web")?;
        writer.write_string(&self.description, "description")?;
        writer.write_string(&self.avatar, "avatar")?;
        write_tags(writer, &self.tags, "tags")
    }

    fn decode_fields(
        reader: &mut Reader<'_>,
        record_type: RecordType,
        network: &Network,
    ) -> Result<Self, DecodeError> {
        expect_type(record_type, RecordType::Author)?;
        Ok(Author {
            address: read_address(reader, network, "address")?,
            nick: reader.read_string("nick")?,
            email: reader.read_string("email")?,
            web: reader.read_string("web")?,
            description: reader.read_string("description")?,
            avatar: reader.read_string("avatar")?,
            tags: read_tags(reader, "tags")?,
        })
    }
}

impl RecordCodec for MediaData {
    fn record_type(&self) -> RecordType {
        RecordType::MediaData
    }

    fn encode_fields(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        write_address(writer, &self.user_address, "user_address")?;
        write_address(writer, &self.content_address, "content_address")?;
        writer.write_byte(self.license as u8);
        writer.write_string(&self.title, "title")?;
        writer.write_string(&self.description, "description")?;
        writer.write_string(&self.content_type, "content_type")?;
        write_tags(writer, &self.tags, "tags")?;
        writer.write_u64(self.price);
        writer.write_string(&self.public_content, "public_content")?;
        writer.write_string(&self.private_content, "private_content")?;
        writer.write_bytes(&self.hash);
        writer.write_u32(self.public_file_size);
        writer.write_u32(self.private_file_size);
        Ok(())
    }

    fn decode_fields(
        reader: &mut Reader<'_>,
        record_type: RecordType,
        network: &Network,
    ) -> Result<Self, DecodeError> {
        expect_type(record_type, RecordType::MediaData)?;
        let user_address = read_address(reader, network, "user_address")?;
        let content_address = read_address(reader, network, "content_address")?;
        let license_byte = reader.read_byte("license")?;
        let license = License::from_u8(license_byte)
            .ok_or(DecodeError::InvalidLicense { value: license_byte })?;

        Ok(MediaData {
            user_address,
            content_address,
            license,
            title: reader.read_string("title")?,
            description: reader.read_string("description")?,
            content_type: reader.read_string("content_type")?,
            tags: read_tags(reader, "tags")?,
            price: reader.read_u64("price")?,
            public_content: reader.read_string("public_content")?,
            private_content: reader.read_string("private_content")?,
            hash: reader.read_array("hash")?,
            public_file_size: reader.read_u32("public_file_size")?,
            private_file_size: reader.read_u32("private_file_size")?,
        })
    }
}

impl RecordCodec for Like {
    fn record_type(&self) -> RecordType {
        RecordType::Like
    }

    fn encode_fields(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        write_address(writer, &self.author, "author")?;
        write_address(writer, &self.content_address, "content_address")
    }

    fn decode_fields(
        reader: &mut Reader<'_>,
        record_type: RecordType,
        network: &Network,
    ) -> Result<Self, DecodeError> {
        expect_type(record_type, RecordType::Like)?;
        Ok(Like {
            author: read_address(reader, network, "author")?,
            content_address: read_address(reader, network, "content_address")?,
        })
    }
}

impl RecordCodec for Unlike {
    fn record_type(&self) -> RecordType {
        RecordType::Unlike
    }

    fn encode_fields(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        write_address(writer, &self.author, "author")?;
        write_address(writer, &self.content_address, "content_address")
    }

    fn decode_fields(
        reader: &mut Reader<'_>,
        record_type: RecordType,
        network: &Network,
    ) -> Result<Self, DecodeError> {
        expect_type(record_type, RecordType::Unlike)?;
        Ok(Unlike {
            author: read_address(reader, network, "author")?,
            content_address: read_address(reader, network, "content_address")?,
        })
    }
}

impl RecordCodec for Payment {
    fn record_type(&self) -> RecordType {
        RecordType::Payment
    }

    fn encode_fields(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        write_address(writer, &self.author, "author")?;
        write_address(writer, &self.content_address, "content_address")?;
        writer.write_u64(self.amount);
        Ok(())
    }

    fn decode_fields(
        reader: &mut Reader<'_>,
        record_type: RecordType,
        network: &Network,
    ) -> Result<Self, DecodeError> {
        expect_type(record_type, RecordType::Payment)?;
        Ok(Payment {
            author: read_address(reader, network, "author")?,
            content_address: read_address(reader, network, "content_address")?,
            amount: reader.read_u64("amount")?,
        })
    }
}

impl RecordCodec for Comment {
    fn record_type(&self) -> RecordType {
        RecordType::Comment
    }

    fn encode_fields(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        write_address(writer, &self.author, "author")?;
        write_address(writer, &self.content_address, "content_address")?;
        writer.write_string(&self.comment, "comment")
    }

    fn decode_fields(
        reader: &mut Reader<'_>,
        record_type: RecordType,
        network: &Network,
    ) -> Result<Self, DecodeError> {
        expect_type(record_type, RecordType::Comment)?;
        Ok(Comment {
            author: read_address(reader, network, "author")?,
            content_address: read_address(reader, network, "content_address")?,
            comment: reader.read_string("comment")?,
        })
    }
}

impl RecordCodec for Donation {
    fn record_type(&self) -> RecordType {
        RecordType::Donation
    }

    fn encode_fields(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        write_address(writer, &self.author, "author")
    }

    fn decode_fields(
        reader: &mut Reader<'_>,
        record_type: RecordType,
        network: &Network,
    ) -> Result<Self, DecodeError> {
        expect_type(record_type, RecordType::Donation)?;
        Ok(Donation {
            author: read_address(reader, network, "author")?,
        })
    }
}

impl RecordCodec for AddressRelation {
    fn record_type(&self) -> RecordType {
        self.kind.record_type()
    }

    fn encode_fields(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        write_address(writer, &self.follower_address, "follower_address")?;
        write_address(writer, &self.followed_address, "followed_address")
    }

    fn decode_fields(
        reader: &mut Reader<'_>,
        record_type: RecordType,
        network: &Network,
    ) -> Result<Self, DecodeError> {
        let kind = RelationKind::from_record_type(record_type).ok_or(DecodeError::TypeMismatch {
            expected: "AddressRelation",
            found: record_type as u8,
        })?;
        Ok(AddressRelation {
            kind,
            follower_address: read_address(reader, network, "follower_address")?,
            followed_address: read_address(reader, network, "followed_address")?,
        })
    }
}

impl RecordCodec for Record {
    fn record_type(&self) -> RecordType {
        Record::record_type(self)
    }

    fn encode_fields(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        match self {
            Record::Index(r) => r.encode_fields(writer),
            Record::Author(r) => r.encode_fields(writer),
            Record::MediaData(r) => r.encode_fields(writer),
            Record::Like(r) => r.encode_fields(writer),
            Record::Unlike(r) => r.encode_fields(writer),
            Record::Payment(r) => r.encode_fields(writer),
            Record::Comment(r) => r.encode_fields(writer),
            Record::Donation(r) => r.encode_fields(writer),
            Record::AddressRelation(r) => r.encode_fields(writer),
        }
    }

    fn decode_fields(
        reader: &mut Reader<'_>,
        record_type: RecordType,
        network: &Network,
    ) -> Result<Self, DecodeError> {
        trace!(record_type = record_type.name(), "decoding record fields");
        let record = match record_type {
            RecordType::Index => Record::Index(Index::decode_fields(reader, record_type, network)?),
            RecordType::Author => {
                Record::Author(Author::decode_fields(reader, record_type, network)?)
            }
            RecordType::MediaData => {
                Record::MediaData(MediaData::decode_fields(reader, record_type, network)?)
            }
            RecordType::Like => Record::Like(Like::decode_fields(reader, record_type, network)?),
            RecordType::Unlike => {
                Record::Unlike(Unlike::decode_fields(reader, record_type, network)?)
            }
            RecordType::Payment => {
                Record::Payment(Payment::decode_fields(reader, record_type, network)?)
            }
            RecordType::Comment => {
                Record::Comment(Comment::decode_fields(reader, record_type, network)?)
            }
            RecordType::Donation => {
                Record::Donation(Donation::decode_fields(reader, record_type, network)?)
            }
            RecordType::Follow | RecordType::Unfollow | RecordType::Block | RecordType::Unblock => {
                let relation = AddressRelation::decode_fields(reader, record_type, network)?;
                Record::AddressRelation(relation)
            }
        };
        Ok(record)
    }
}

impl Record {
    /// Returns true if the serialized record is large enough that the
    /// embedding layer should compress it.
    pub fn must_be_compressed(&self) -> Result<bool, EncodeError> {
        compression_flag(self)
    }
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// Encodes a record to its wire form.
pub fn encode_record(record: &Record) -> Result<Vec<u8>, EncodeError> {
    record.serialize()
}

/// Decodes exactly one record occupying all of `input`.
///
/// Unknown type tags fail with [`DecodeError::UnknownTypeTag`]; bytes left
/// over after the record fail with [`DecodeError::TrailingBytes`].
pub fn decode_record(input: &[u8], network: &Network) -> Result<Record, DecodeError> {
    let (record, end) = Record::deserialize(input, 0, network)?;
    if end != input.len() {
        return Err(DecodeError::TrailingBytes {
            count: input.len() - end,
        });
    }
    debug!(record_type = record.record_type().name(), len = end, "decoded record");
    Ok(record)
}

/// Decodes a record of any registered type.
///
/// The type tag is looked at before anything else: an unregistered tag gives
/// `Ok(None)` whatever the version, so callers can skip payloads written by
/// newer encoders. Malformed buffers with a known tag are errors, never
/// partially filled records.
pub fn decode_any(input: &[u8], network: &Network) -> Result<Option<Record>, DecodeError> {
    let tag = peek_type_tag(input)?;
    if RecordType::from_u8(tag).is_none() {
        debug!(tag, "skipping record with unregistered type tag");
        return Ok(None);
    }
    decode_record(input, network).map(Some)
}

/// Computes the advisory compression flag for a record.
///
/// The flag is not part of the wire format; it tells the embedding layer
/// whether to compress the payload before putting it on chain.
pub fn compression_flag(record: &Record) -> Result<bool, EncodeError> {
    let size = record.size()?;
    let flag = size >= COMPRESSION_THRESHOLD;
    trace!(size, flag, "computed compression flag");
    Ok(flag)
}
