//! Byte-level vectors and decode-failure scenarios for the content wire format.

use trantor_content::address::{from_hash, to_hash};
use trantor_content::{
    decode_any, decode_record, encode_record, AddressRelation, Author, AuthorBuilder, DecodeError,
    Donation, EncodeError, ErrorKind, Index, License, Like, MediaDataBuilder, Payment, Record,
    RecordCodec, RecordType, MAINNET, TESTNET,
};

fn hash(seed: u8) -> [u8; 20] {
    core::array::from_fn(|i| seed.wrapping_add(i as u8))
}

fn mainnet(seed: u8) -> String {
    from_hash(&hash(seed), MAINNET.pub_key_hash)
}

#[test]
fn like_encodes_header_and_two_hashes() {
    let record = Record::from(Like {
        author: mainnet(0x10),
        content_address: mainnet(0x80),
    });
    let bytes = encode_record(&record).unwrap();

    assert_eq!(&bytes[..3], &[0x01, 0x00, 0x03]);
    assert_eq!(&bytes[3..23], &hash(0x10));
    assert_eq!(&bytes[23..43], &hash(0x80));
    assert_eq!(bytes.len(), 43);

    assert_eq!(decode_record(&bytes, &MAINNET).unwrap(), record);
}

#[test]
fn index_vectors() {
    assert_eq!(
        encode_record(&Index::default().into()).unwrap(),
        vec![0x01, 0x00, 0x08, 0x00]
    );

    let tx_id = "0123456789abcdef".repeat(4);
    let bytes = encode_record(&Index { tx_ids: vec![tx_id.clone()] }.into()).unwrap();
    assert_eq!(bytes.len(), 3 + 1 + 32);
    assert_eq!(bytes[4], 0x01);
    assert_eq!(bytes[35], 0xef);

    match decode_record(&bytes, &MAINNET).unwrap() {
        Record::Index(index) => assert_eq!(index.tx_ids, vec![tx_id]),
        other => panic!("expected Index, got {:?}", other),
    }
}

#[test]
fn index_rejects_short_tx_id() {
    let err = encode_record(&Index { tx_ids: vec!["abcd".into()] }.into()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidTxId);
}

#[test]
fn media_data_layout() {
    let media = MediaDataBuilder::new(mainnet(1), mainnet(2))
        .license(License::By40)
        .title("t")
        .tags(["x"])
        .price(0x0A0B)
        .public_content("p", 0x0102_0304)
        .private_content("", 7)
        .hash([0xEE; 32])
        .build();
    let bytes = media.serialize().unwrap();

    let mut expected = vec![0x01, 0x00, 0x01];
    expected.extend_from_slice(&hash(1));
    expected.extend_from_slice(&hash(2));
    expected.push(0x07); // license
    expected.extend_from_slice(&[0x01, b't']); // title
    expected.push(0x00); // description
    expected.push(0x00); // content type
    expected.push(0x05);
    expected.extend_from_slice(br#"["x"]"#);
    expected.extend_from_slice(&[0, 0, 0, 0, 0, 0, 0x0A, 0x0B]); // price
    expected.extend_from_slice(&[0x01, b'p']); // public content
    expected.push(0x00); // private content
    expected.extend_from_slice(&[0xEE; 32]);
    expected.extend_from_slice(&[0x01, 0x02, 0x03, 0x04]);
    expected.extend_from_slice(&[0x00, 0x00, 0x00, 0x07]);
    assert_eq!(bytes, expected);

    let (decoded, end) = trantor_content::MediaData::deserialize(&bytes, 0, &MAINNET).unwrap();
    assert_eq!(decoded, media);
    assert_eq!(end, bytes.len());
}

#[test]
fn truncated_author_fails() {
    let author = AuthorBuilder::new(mainnet(3))
        .nick("nick")
        .email("nick@example.org")
        .avatar("QmAvatarHash")
        .tag("rust")
        .tag("art")
        .build();
    let bytes = author.serialize().unwrap();
    let truncated = &bytes[..bytes.len() - 5];

    // tags are `["rust","art"]`, 14 bytes, of which 9 survive
    assert_eq!(
        Author::deserialize(truncated, 0, &MAINNET),
        Err(DecodeError::TruncatedText {
            field: "tags",
            declared: 14,
            remaining: 9,
        })
    );
    let err = decode_any(truncated, &MAINNET).unwrap_err();
    assert!(err.is_truncation());
}

#[test]
fn every_truncation_is_an_error() {
    let records: Vec<Record> = vec![
        Index { tx_ids: vec!["11".repeat(32)] }.into(),
        AuthorBuilder::new(mainnet(4)).nick("n").build().into(),
        MediaDataBuilder::new(mainnet(5), mainnet(6)).title("m").build().into(),
        Payment { author: mainnet(7), content_address: mainnet(8), amount: 1 }.into(),
        Donation { author: mainnet(9) }.into(),
        AddressRelation::unblock(mainnet(10), mainnet(11)).into(),
    ];
    for record in records {
        let bytes = encode_record(&record).unwrap();
        for cut in 0..bytes.len() {
            assert!(
                decode_any(&bytes[..cut], &MAINNET).is_err(),
                "{:?} truncated to {} bytes decoded",
                record.record_type(),
                cut
            );
        }
    }
}

#[test]
fn dispatch_routes_by_tag() {
    let like = Like { author: mainnet(1), content_address: mainnet(2) };
    let bytes = like.serialize().unwrap();
    assert_eq!(bytes[2], RecordType::Like as u8);

    let decoded = decode_any(&bytes, &MAINNET).unwrap();
    assert!(matches!(decoded, Some(Record::Like(_))));

    let mut unknown = bytes.clone();
    unknown[2] = 0xFF;
    assert_eq!(decode_any(&unknown, &MAINNET).unwrap(), None);
    assert_eq!(
        decode_record(&unknown, &MAINNET),
        Err(DecodeError::UnknownTypeTag { tag: 0xFF })
    );
}

#[test]
fn decoding_restores_addresses_per_network() {
    let author = from_hash(&hash(0x33), TESTNET.pub_key_hash);
    let followed = from_hash(&hash(0x44), TESTNET.pub_key_hash);
    let relation = AddressRelation::follow(author.clone(), followed.clone());
    let bytes = relation.serialize().unwrap();

    match decode_any(&bytes, &TESTNET).unwrap() {
        Some(Record::AddressRelation(r)) => {
            assert_eq!(r.follower_address, author);
            assert_eq!(r.followed_address, followed);
        }
        other => panic!("expected AddressRelation, got {:?}", other),
    }

    // Same bytes, other network: same hashes, different addresses
    match decode_any(&bytes, &MAINNET).unwrap() {
        Some(Record::AddressRelation(r)) => {
            assert_ne!(r.follower_address, author);
            assert_eq!(to_hash(&r.follower_address).unwrap(), hash(0x33));
        }
        other => panic!("expected AddressRelation, got {:?}", other),
    }
}

#[test]
fn bad_address_is_reported_with_field() {
    let donation = Donation { author: "CXnotbase58check0".into() };
    match donation.serialize() {
        Err(EncodeError::InvalidAddress { field, .. }) => assert_eq!(field, "author"),
        other => panic!("expected InvalidAddress, got {:?}", other),
    }
}
