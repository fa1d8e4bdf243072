//! Basic example: decode raw characteristic payloads and a structured
//! Health record.
//!
//! Run with: cargo run --example inspect_payloads

use ble_message_codec::{
    bytes_to_hex, CodecRegistry, FieldMap, MessageFormatter, Result, Value, ValueType,
};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ble_message_codec=debug".parse().unwrap()),
        )
        .init();

    let registry = CodecRegistry::new();

    println!("Primitive characteristic values:\n");

    // A battery-level style single byte.
    let payload = [0x5F];
    println!(
        "  {:>10}  ->  {:?}",
        bytes_to_hex(&payload),
        registry.decode(ValueType::U8, &payload)?
    );

    // A truncated 32-bit counter: devices often drop trailing zero
    // bytes, the decoder zero-pads them back.
    let payload = [0x39, 0x30];
    println!(
        "  {:>10}  ->  {:?}",
        bytes_to_hex(&payload),
        registry.decode(ValueType::I32, &payload)?
    );

    // A little-endian float reading.
    let payload = 23.5f32.to_le_bytes();
    println!(
        "  {:>10}  ->  {:?}",
        bytes_to_hex(&payload),
        registry.decode(ValueType::F32, &payload)?
    );

    // A device-name style string.
    let payload = b"HR Monitor";
    println!(
        "  {:>10}  ->  {:?}",
        bytes_to_hex(payload),
        registry.decode(ValueType::Str, payload)?
    );

    println!("\nStructured Health record:\n");

    let formatter = MessageFormatter::new();
    let mut fields = FieldMap::new();
    fields.insert("heartRate", 72i32);
    fields.insert("steps", 1000i32);
    fields.insert("calories", 250i32);

    let record = formatter.encode("Health", &fields)?;
    println!("  Encoded: {}", bytes_to_hex(&record));

    let decoded = formatter.decode("Health", &record)?;
    for (name, value) in decoded.iter() {
        println!("  {name}: {value}");
    }

    // A record with only one field set: the flag byte gates what the
    // decoder reports.
    let mut partial = FieldMap::new();
    partial.insert("steps", 42i32);
    let record = formatter.encode("Health", &partial)?;
    println!("\n  Steps-only record: {}", bytes_to_hex(&record));
    println!(
        "  Decoded fields: {:?}",
        formatter
            .decode("Health", &record)?
            .names()
            .collect::<Vec<_>>()
    );

    Ok(())
}
