//! # ble-message-codec
//!
//! Byte-level codecs for Bluetooth Low Energy characteristic values.
//!
//! BLE characteristics carry opaque byte buffers; this library turns
//! them into typed values and structured records, and back. It has no
//! knowledge of adapters, discovery, or connections - the transport
//! layer hands it raw bytes and gets values out.
//!
//! Two cooperating components:
//!
//! - **[`CodecRegistry`]**: maps a semantic value type (integers,
//!   float, string, boolean) to a decode/encode strategy. Decoding
//!   tolerates the truncated and padded buffers real devices send;
//!   encoding emits exact-width little-endian buffers.
//! - **[`MessageFormatter`]**: encodes and decodes whole named records
//!   into single buffers. Ships with the fixed-layout `"Health"` and
//!   `"Environment"` records and the self-describing
//!   `"CustomStructure"` record; additional formats register at
//!   runtime.
//!
//! ## Quick Start
//!
//! ```rust
//! use ble_message_codec::{
//!     CodecRegistry, FieldMap, MessageFormatter, Result, Value, ValueType,
//! };
//!
//! fn main() -> Result<()> {
//!     // Primitive values by type tag.
//!     let registry = CodecRegistry::new();
//!     let bytes = registry.encode(ValueType::I32, &Value::I32(12_345_678))?;
//!     assert_eq!(registry.decode(ValueType::I32, &bytes)?, Value::I32(12_345_678));
//!
//!     // Whole records by format name.
//!     let formatter = MessageFormatter::new();
//!     let mut fields = FieldMap::new();
//!     fields.insert("heartRate", 72i32);
//!     fields.insert("steps", 1000i32);
//!
//!     let record = formatter.encode("Health", &fields)?;
//!     assert_eq!(formatter.decode("Health", &record)?, fields);
//!     Ok(())
//! }
//! ```
//!
//! ## Wire compatibility
//!
//! The byte layouts of the built-in formats and the per-type encoding
//! rules are a wire contract: multi-byte values are little-endian
//! throughout, fixed-layout records carry a header byte and a
//! presence-flag bitmask, and the self-describing format carries
//! inline field names and type tags. See the format modules for the
//! exact layouts.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization for value and
//!   field-mapping types

// Public modules
pub mod codec;
pub mod error;
pub mod fields;
pub mod format;
pub mod utils;
pub mod value;

mod wire;

// Re-exports for convenience
pub use codec::{CodecRegistry, CodecStrategy};
pub use error::{Error, Result};
pub use fields::FieldMap;
pub use format::{
    CustomStructureFormat, EnvironmentalFormat, HealthFormat, MessageFormat, MessageFormatter,
};
pub use utils::{bytes_to_hex, hex_to_bytes};
pub use value::{Value, ValueType};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_exports() {
        // Verify that key types are exported
        let _ = std::any::TypeId::of::<CodecRegistry>();
        let _ = std::any::TypeId::of::<MessageFormatter>();
        let _ = std::any::TypeId::of::<Error>();
        let _ = std::any::TypeId::of::<Value>();
        let _ = std::any::TypeId::of::<ValueType>();
        let _ = std::any::TypeId::of::<FieldMap>();
        let _ = std::any::TypeId::of::<HealthFormat>();
    }

    #[test]
    fn test_registry_and_formatter_cooperate() {
        let registry = CodecRegistry::new();
        let formatter = MessageFormatter::new();

        // A value encoded by the registry decodes through a custom
        // structure field unchanged.
        let mut fields = FieldMap::new();
        fields.insert("raw", Value::U16(513));
        let record = formatter.encode("CustomStructure", &fields).unwrap();
        let decoded = formatter.decode("CustomStructure", &record).unwrap();

        let registry_bytes = registry.encode(ValueType::U16, &Value::U16(513)).unwrap();
        assert_eq!(&record[record.len() - 2..], registry_bytes.as_slice());
        assert_eq!(decoded.get("raw"), Some(&Value::U16(513)));
    }
}
