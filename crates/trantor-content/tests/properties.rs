//! Property tests for the primitive codecs and record round trips.

use proptest::prelude::*;

use trantor_content::address::{from_hash, to_hash};
use trantor_content::codec::{decode_text, decode_varint, encode_text, encode_varint};
use trantor_content::{
    decode_record, encode_record, Comment, MediaDataBuilder, Payment, Record, MAINNET, TESTNET,
};

proptest! {
    #[test]
    fn varint_roundtrip(v in any::<u64>()) {
        let encoded = encode_varint(v);
        let (decoded, consumed) = decode_varint(&encoded, 0).unwrap();
        prop_assert_eq!(decoded, v);
        prop_assert_eq!(consumed, encoded.len());
    }

    #[test]
    fn text_roundtrip(s in "\\PC{0,300}") {
        let encoded = encode_text(&s).unwrap();
        let (decoded, consumed) = decode_text(&encoded, 0).unwrap();
        prop_assert_eq!(decoded, s);
        prop_assert_eq!(consumed, encoded.len());
    }

    #[test]
    fn address_hash_roundtrip(hash in any::<[u8; 20]>(), testnet in any::<bool>()) {
        let network = if testnet { TESTNET } else { MAINNET };
        let address = from_hash(&hash, network.pub_key_hash);
        prop_assert_eq!(to_hash(&address).unwrap(), hash);
    }

    #[test]
    fn comment_roundtrip(
        author in any::<[u8; 20]>(),
        content in any::<[u8; 20]>(),
        comment in "\\PC{0,200}",
    ) {
        let record = Record::from(Comment {
            author: MAINNET.address(&author),
            content_address: MAINNET.address(&content),
            comment,
        });
        let bytes = encode_record(&record).unwrap();
        prop_assert_eq!(decode_record(&bytes, &MAINNET).unwrap(), record);
    }

    #[test]
    fn payment_roundtrip(amount in any::<u64>()) {
        let record = Record::from(Payment {
            author: TESTNET.address(&[1; 20]),
            content_address: TESTNET.address(&[2; 20]),
            amount,
        });
        let bytes = encode_record(&record).unwrap();
        prop_assert_eq!(bytes.len(), 51);
        prop_assert_eq!(decode_record(&bytes, &TESTNET).unwrap(), record);
    }

    #[test]
    fn media_roundtrip(
        title in "\\PC{0,40}",
        tags in proptest::collection::vec("[a-z]{1,8}", 0..5),
        price in any::<u64>(),
        sizes in any::<(u32, u32)>(),
        hash in any::<[u8; 32]>(),
    ) {
        let record = Record::from(
            MediaDataBuilder::new(MAINNET.address(&[7; 20]), MAINNET.address(&[8; 20]))
                .title(title)
                .tags(tags)
                .price(price)
                .public_content("pub", sizes.0)
                .private_content("priv", sizes.1)
                .hash(hash)
                .build(),
        );
        let bytes = encode_record(&record).unwrap();
        prop_assert_eq!(decode_record(&bytes, &MAINNET).unwrap(), record);
    }
}
