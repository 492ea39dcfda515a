//! Content record types.
//!
//! Every social action is one record: a shared header (format version and
//! type tag) followed by the variant's fields. Address fields hold
//! base58check strings; only their 20-byte hashes go on the wire.

use crate::model::{Hash32, License};

/// Record type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RecordType {
    MediaData = 0x01,
    Author = 0x02,
    Like = 0x03,
    Comment = 0x04,
    Donation = 0x05,
    Follow = 0x06,
    Unfollow = 0x07,
    Index = 0x08,
    Unlike = 0x09,
    Payment = 0x10,
    Block = 0x11,
    Unblock = 0x12,
}

impl RecordType {
    /// Creates a RecordType from its wire representation.
    pub fn from_u8(v: u8) -> Option<RecordType> {
        match v {
            0x01 => Some(RecordType::MediaData),
            0x02 => Some(RecordType::Author),
            0x03 => Some(RecordType::Like),
            0x04 => Some(RecordType::Comment),
            0x05 => Some(RecordType::Donation),
            0x06 => Some(RecordType::Follow),
            0x07 => Some(RecordType::Unfollow),
            0x08 => Some(RecordType::Index),
            0x09 => Some(RecordType::Unlike),
            0x10 => Some(RecordType::Payment),
            0x11 => Some(RecordType::Block),
            0x12 => Some(RecordType::Unblock),
            _ => None,
        }
    }

    /// Returns the record name used in errors and logs.
    pub fn name(&self) -> &'static str {
        match self {
            RecordType::MediaData => "MediaData",
            RecordType::Author => "Author",
            RecordType::Like => "Like",
            RecordType::Comment => "Comment",
            RecordType::Donation => "Donation",
            RecordType::Follow => "Follow",
            RecordType::Unfollow => "Unfollow",
            RecordType::Index => "Index",
            RecordType::Unlike => "Unlike",
            RecordType::Payment => "Payment",
            RecordType::Block => "Block",
            RecordType::Unblock => "Unblock",
        }
    }
}

/// The four address-to-address relations sharing one layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    Follow,
    Unfollow,
    Block,
    Unblock,
}

impl RelationKind {
    /// Returns the type tag written for this relation.
    pub fn record_type(&self) -> RecordType {
        match self {
            RelationKind::Follow => RecordType::Follow,
            RelationKind::Unfollow => RecordType::Unfollow,
            RelationKind::Block => RecordType::Block,
            RelationKind::Unblock => RecordType::Unblock,
        }
    }

    /// Maps a type tag back to a relation, if it is one.
    pub fn from_record_type(record_type: RecordType) -> Option<RelationKind> {
        match record_type {
            RecordType::Follow => Some(RelationKind::Follow),
            RecordType::Unfollow => Some(RelationKind::Unfollow),
            RecordType::Block => Some(RelationKind::Block),
            RecordType::Unblock => Some(RelationKind::Unblock),
            _ => None,
        }
    }
}

/// A list of transaction ids grouped under one record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Index {
    /// Hex-encoded 32-byte transaction ids.
    pub tx_ids: Vec<String>,
}

/// An author profile bound to an address.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Author {
    pub address: String,
    pub nick: String,
    pub email: String,
    pub web: String,
    pub description: String,
    pub avatar: String,
    /// Stored on the wire as a JSON array.
    pub tags: Vec<String>,
}

/// A published piece of content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MediaData {
    /// Address of the publishing user.
    pub user_address: String,
    /// Address identifying the content itself.
    pub content_address: String,
    pub license: License,
    pub title: String,
    pub description: String,
    /// MIME type of the content.
    pub content_type: String,
    /// Stored on the wire as a JSON array.
    pub tags: Vec<String>,
    pub price: u64,
    /// Reference to the freely available part of the content.
    pub public_content: String,
    /// Reference to the paid part of the content.
    pub private_content: String,
    /// Digest of the content.
    pub hash: Hash32,
    pub public_file_size: u32,
    pub private_file_size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Like {
    pub author: String,
    pub content_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Unlike {
    pub author: String,
    pub content_address: String,
}

/// A payment for access to a piece of content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Payment {
    pub author: String,
    pub content_address: String,
    pub amount: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Comment {
    pub author: String,
    pub content_address: String,
    pub comment: String,
}

/// A donation to an author.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Donation {
    pub author: String,
}

/// A directed relation between two addresses (follow, block, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRelation {
    pub kind: RelationKind,
    /// The address performing the action.
    pub follower_address: String,
    /// The address the action targets.
    pub followed_address: String,
}

impl AddressRelation {
    pub fn follow(follower: impl Into<String>, followed: impl Into<String>) -> Self {
        Self::new(RelationKind::Follow, follower, followed)
    }

    pub fn unfollow(follower: impl Into<String>, followed: impl Into<String>) -> Self {
        Self::new(RelationKind::Unfollow, follower, followed)
    }

    pub fn block(follower: impl Into<String>, followed: impl Into<String>) -> Self {
        Self::new(RelationKind::Block, follower, followed)
    }

    pub fn unblock(follower: impl Into<String>, followed: impl Into<String>) -> Self {
        Self::new(RelationKind::Unblock, follower, followed)
    }

    fn new(kind: RelationKind, follower: impl Into<String>, followed: impl Into<String>) -> Self {
        Self {
            kind,
            follower_address: follower.into(),
            followed_address: followed.into(),
        }
    }
}

/// Any content record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Index(Index),
    Author(Author),
    MediaData(MediaData),
    Like(Like),
    Unlike(Unlike),
    Payment(Payment),
    Comment(Comment),
    Donation(Donation),
    AddressRelation(AddressRelation),
}

impl Record {
    /// Returns the type tag this record is written with.
    pub fn record_type(&self) -> RecordType {
        match self {
            Record::Index(_) => RecordType::Index,
            Record::Author(_) => RecordType::Author,
            Record::MediaData(_) => RecordType::MediaData,
            Record::Like(_) => RecordType::Like,
            Record::Unlike(_) => RecordType::Unlike,
            Record::Payment(_) => RecordType::Payment,
            Record::Comment(_) => RecordType::Comment,
            Record::Donation(_) => RecordType::Donation,
            Record::AddressRelation(r) => r.kind.record_type(),
        }
    }
}

impl From<Index> for Record {
    fn from(r: Index) -> Self {
        Record::Index(r)
    }
}

impl From<Author> for Record {
    fn from(r: Author) -> Self {
        Record::Author(r)
    }
}

impl From<MediaData> for Record {
    fn from(r: MediaData) -> Self {
        Record::MediaData(r)
    }
}

impl From<Like> for Record {
    fn from(r: Like) -> Self {
        Record::Like(r)
    }
}

impl From<Unlike> for Record {
    fn from(r: Unlike) -> Self {
        Record::Unlike(r)
    }
}

impl From<Payment> for Record {
    fn from(r: Payment) -> Self {
        Record::Payment(r)
    }
}

impl From<Comment> for Record {
    fn from(r: Comment) -> Self {
        Record::Comment(r)
    }
}

impl From<Donation> for Record {
    fn from(r: Donation) -> Self {
        Record::Donation(r)
    }
}

impl From<AddressRelation> for Record {
    fn from(r: AddressRelation) -> Self {
        Record::AddressRelation(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_tags() {
        for tag in 0u8..=0xFF {
            if let Some(t) = RecordType::from_u8(tag) {
                assert_eq!(t as u8, tag);
            }
        }
        assert_eq!(RecordType::from_u8(0x00), None);
        assert_eq!(RecordType::from_u8(0x0A), None);
        assert_eq!(RecordType::from_u8(0xFF), None);
        assert_eq!(RecordType::Payment as u8, 0x10);
    }

    #[test]
    fn test_relation_kinds() {
        let relation = AddressRelation::block("a", "b");
        assert_eq!(Record::from(relation).record_type(), RecordType::Block);
        for kind in [
            RelationKind::Follow,
            RelationKind::Unfollow,
            RelationKind::Block,
            RelationKind::Unblock,
        ] {
            assert_eq!(RelationKind::from_record_type(kind.record_type()), Some(kind));
        }
        assert_eq!(RelationKind::from_record_type(RecordType::Like), None);
    }
}
