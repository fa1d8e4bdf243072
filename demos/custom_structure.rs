//! Example: build and parse a self-describing CustomStructure record,
//! then register a format of your own.
//!
//! Run with: cargo run --example custom_structure

use std::sync::Arc;

use ble_message_codec::{
    bytes_to_hex, FieldMap, MessageFormat, MessageFormatter, Result, Value,
};

/// A two-byte record carrying a single RSSI reading.
struct RssiFormat;

impl MessageFormat for RssiFormat {
    fn encode(&self, fields: &FieldMap) -> Result<Vec<u8>> {
        let rssi = fields.get("rssi").and_then(Value::as_i8).unwrap_or(0);
        Ok(vec![0x52, rssi as u8])
    }

    fn decode(&self, data: &[u8]) -> Result<FieldMap> {
        let mut fields = FieldMap::new();
        fields.insert("rssi", data.get(1).copied().unwrap_or(0) as i8);
        Ok(fields)
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ble_message_codec=debug".parse().unwrap()),
        )
        .init();

    let formatter = MessageFormatter::new();

    // Fields serialize in insertion order, so the wire image is
    // deterministic for a given mapping.
    let mut fields = FieldMap::new();
    fields.insert("deviceName", "Thermo-7");
    fields.insert("interval", 500u16);
    fields.insert("temperature", 21.5f32);
    fields.insert("enabled", true);

    let record = formatter.encode("CustomStructure", &fields)?;
    println!("CustomStructure record ({} bytes):", record.len());
    println!("  {}\n", bytes_to_hex(&record));

    let decoded = formatter.decode("CustomStructure", &record)?;
    for (name, value) in decoded.iter() {
        println!("  {name} = {value}");
    }

    // Formats registered at runtime dispatch exactly like the
    // built-ins.
    formatter.register_format("Rssi", Arc::new(RssiFormat));

    let mut reading = FieldMap::new();
    reading.insert("rssi", -67i8);
    let record = formatter.encode("Rssi", &reading)?;
    println!("\nRssi record: {}", bytes_to_hex(&record));
    println!("Decoded: {:?}", formatter.decode("Rssi", &record)?.get("rssi"));

    Ok(())
}
