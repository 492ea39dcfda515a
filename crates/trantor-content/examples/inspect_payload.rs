//! Simple decoder to inspect content payloads.
//!
//! Usage: `cargo run --example inspect_payload -- <hex> [mainnet|testnet]`
//!
//! Set `RUST_LOG=trantor_content=trace` to see decoder events.

use trantor_content::{decode_any, compression_flag, Network, Record, RecordCodec, MAINNET};

fn parse_hex(s: &str) -> Option<Vec<u8>> {
    let s = s.trim();
    if s.len() % 2 != 0 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    s.as_bytes()
        .chunks(2)
        .map(|chunk| {
            let byte_str = std::str::from_utf8(chunk).ok()?;
            u8::from_str_radix(byte_str, 16).ok()
        })
        .collect()
}

fn describe(record: &Record) -> String {
    match record {
        Record::Index(r) => format!("{} transaction ids: {:?}", r.tx_ids.len(), r.tx_ids),
        Record::Author(r) => format!("{} <{}> {} tags={:?}", r.nick, r.email, r.address, r.tags),
        Record::MediaData(r) => format!(
            "\"{}\" ({}) by {} license={} price={} tags={:?}",
            r.title,
            r.content_type,
            r.user_address,
            r.license.name(),
            r.price,
            r.tags
        ),
        Record::Like(r) => format!("{} likes {}", r.author, r.content_address),
        Record::Unlike(r) => format!("{} unlikes {}", r.author, r.content_address),
        Record::Payment(r) => format!("{} pays {} for {}", r.author, r.amount, r.content_address),
        Record::Comment(r) => format!("{} on {}: {}", r.author, r.content_address, r.comment),
        Record::Donation(r) => format!("donation to {}", r.author),
        Record::AddressRelation(r) => {
            format!("{} {:?} {}", r.follower_address, r.kind, r.followed_address)
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let Some(hex) = args.next() else {
        eprintln!("usage: inspect_payload <hex> [mainnet|testnet]");
        std::process::exit(2);
    };
    let network = match args.next() {
        Some(name) => Network::from_name(&name).unwrap_or_else(|| {
            eprintln!("unknown network: {}", name);
            std::process::exit(2);
        }),
        None => MAINNET,
    };

    let Some(data) = parse_hex(&hex) else {
        eprintln!("payload is not valid hex");
        std::process::exit(2);
    };
    println!("Payload size: {} bytes ({})", data.len(), network.name);

    match decode_any(&data, &network) {
        Ok(Some(record)) => {
            println!("Type: {}", record.record_type().name());
            println!("{}", describe(&record));
            match (record.size(), compression_flag(&record)) {
                (Ok(size), Ok(flag)) => {
                    println!("Re-encoded size: {} bytes, compress: {}", size, flag)
                }
                (Err(e), _) | (_, Err(e)) => println!("Re-encode failed: {}", e),
            }
        }
        Ok(None) => println!("Unregistered type tag {:#04x}, skipped", data[2]),
        Err(e) => {
            eprintln!("Decode failed ({}): {}", e.kind().as_str(), e);
            std::process::exit(1);
        }
    }
}
