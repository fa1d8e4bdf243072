//! Custom structure record format.
//!
//! Self-describing variable-length layout:
//! - Byte 0: header (0x43)
//! - Byte 1: field count (0-255)
//! - Per field, in mapping iteration order:
//!   name length (1), UTF-8 name bytes, wire tag (1), data length (1),
//!   data bytes
//!
//! Wire tags are the [`ValueType::wire_tag`] values. Decoding walks
//! exactly the declared field count and stops early when a declared
//! name or data run would read past the buffer; trailing bytes after
//! the last declared field are ignored.

use bytes::{Buf, BufMut};
use tracing::debug;

use crate::error::{Error, Result};
use crate::fields::FieldMap;
use crate::format::MessageFormat;
use crate::value::{Value, ValueType};
use crate::wire;

/// Self-describing record (header `0x43`, variable length).
pub struct CustomStructureFormat;

impl CustomStructureFormat {
    /// Registered format name.
    pub const NAME: &'static str = "CustomStructure";
    /// Header byte identifying a custom structure record.
    pub const HEADER: u8 = 0x43;
    /// Minimum record size: header plus field count.
    pub const MIN_SIZE: usize = 2;
}

/// Wire tag and data bytes for one field value.
fn wire_encoding(value: &Value) -> (u8, Vec<u8>) {
    let (value_type, data) = match value {
        Value::I8(v) => (ValueType::I8, vec![*v as u8]),
        Value::U8(v) => (ValueType::U8, vec![*v]),
        Value::I16(v) => (ValueType::I16, v.to_le_bytes().to_vec()),
        Value::U16(v) => (ValueType::U16, v.to_le_bytes().to_vec()),
        Value::I32(v) => (ValueType::I32, v.to_le_bytes().to_vec()),
        Value::F32(v) => (ValueType::F32, v.to_le_bytes().to_vec()),
        Value::Str(s) => (ValueType::Str, s.as_bytes().to_vec()),
        Value::Bool(v) => (ValueType::Bool, vec![*v as u8]),
    };
    (value_type.wire_tag(), data)
}

/// Decode one field's data bytes by wire tag.
fn decode_field(tag: u8, data: &[u8]) -> Value {
    match ValueType::from_wire_tag(tag) {
        Some(ValueType::I8) => Value::I8(data.first().copied().unwrap_or(0) as i8),
        Some(ValueType::U8) => Value::U8(data.first().copied().unwrap_or(0)),
        Some(ValueType::I16) => Value::I16(wire::read_i16_le(data)),
        Some(ValueType::U16) => Value::U16(wire::read_u16_le(data)),
        Some(ValueType::I32) => Value::I32(wire::read_i32_le(data)),
        Some(ValueType::F32) => Value::F32(wire::read_f32_le(data)),
        Some(ValueType::Str) => Value::Str(String::from_utf8_lossy(data).into_owned()),
        Some(ValueType::Bool) => Value::Bool(data.first().is_some_and(|b| *b != 0)),
        // Unrecognized tags carry their payload as text.
        None => Value::Str(String::from_utf8_lossy(data).into_owned()),
    }
}

impl MessageFormat for CustomStructureFormat {
    fn encode(&self, fields: &FieldMap) -> Result<Vec<u8>> {
        if fields.len() > u8::MAX as usize {
            return Err(Error::TooManyFields {
                count: fields.len(),
            });
        }

        let mut buf = Vec::with_capacity(Self::MIN_SIZE + fields.len() * 8);
        buf.put_u8(Self::HEADER);
        buf.put_u8(fields.len() as u8);

        for (name, value) in fields.iter() {
            let name_bytes = name.as_bytes();
            if name_bytes.len() > u8::MAX as usize {
                return Err(Error::FieldTooLong {
                    name: name.to_string(),
                    length: name_bytes.len(),
                });
            }

            let (tag, data) = wire_encoding(value);
            if data.len() > u8::MAX as usize {
                return Err(Error::FieldTooLong {
                    name: name.to_string(),
                    length: data.len(),
                });
            }

            buf.put_u8(name_bytes.len() as u8);
            buf.put_slice(name_bytes);
            buf.put_u8(tag);
            buf.put_u8(data.len() as u8);
            buf.put_slice(&data);
        }

        Ok(buf)
    }

    fn decode(&self, data: &[u8]) -> Result<FieldMap> {
        if data.len() < Self::MIN_SIZE {
            return Err(Error::MalformedRecord {
                context: format!(
                    "Custom structure too short: {} bytes (need {})",
                    data.len(),
                    Self::MIN_SIZE
                ),
            });
        }

        if data[0] != Self::HEADER {
            return Err(Error::MalformedRecord {
                context: format!("Invalid custom structure header byte: {:#04x}", data[0]),
            });
        }

        let field_count = data[1] as usize;
        debug!(
            "Decoding custom structure: {} declared fields in {} bytes",
            field_count,
            data.len()
        );

        let mut fields = FieldMap::new();
        let mut cursor = &data[2..];

        for _ in 0..field_count {
            // A declared run past the buffer end means the record was
            // truncated in transit; return what decoded cleanly.
            if cursor.remaining() < 1 {
                break;
            }
            let name_len = cursor.get_u8() as usize;
            if cursor.remaining() < name_len {
                break;
            }
            let name = String::from_utf8_lossy(&cursor.chunk()[..name_len]).into_owned();
            cursor.advance(name_len);

            if cursor.remaining() < 2 {
                break;
            }
            let tag = cursor.get_u8();
            let data_len = cursor.get_u8() as usize;
            if cursor.remaining() < data_len {
                break;
            }
            let value = decode_field(tag, &cursor.chunk()[..data_len]);
            cursor.advance(data_len);

            fields.insert(name, value);
        }

        Ok(fields)
    }
}
