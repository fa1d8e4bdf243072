//! Built-in codec strategies.
//!
//! One strategy per supported value type. Decode tolerates length
//! mismatches: short buffers are right-zero-padded to the type's width
//! (except the signed-32 two-byte case, which sign-extends), long
//! buffers are read from offset 0 with the tail ignored, and empty
//! buffers produce the type's zero value. Encode always emits the
//! exact wire width.

use crate::codec::registry::CodecStrategy;
use crate::error::{Error, Result};
use crate::value::{Value, ValueType};
use crate::wire;

fn type_mismatch(expected: ValueType, value: &Value) -> Error {
    Error::TypeMismatch {
        expected,
        value: value.to_string(),
    }
}

/// Signed 32-bit integer codec, little-endian.
pub struct I32Codec;

impl CodecStrategy for I32Codec {
    fn decode(&self, data: &[u8]) -> Value {
        let v = match data.len() {
            0 => 0,
            // A single byte reads unsigned, not sign-extended.
            1 => data[0] as i32,
            2 => i16::from_le_bytes([data[0], data[1]]) as i32,
            3 => i32::from_le_bytes([data[0], data[1], data[2], 0]),
            _ => i32::from_le_bytes([data[0], data[1], data[2], data[3]]),
        };
        Value::I32(v)
    }

    fn encode(&self, value: &Value) -> Result<Vec<u8>> {
        let v = value
            .as_i32()
            .ok_or_else(|| type_mismatch(ValueType::I32, value))?;
        Ok(v.to_le_bytes().to_vec())
    }
}

/// 32-bit IEEE-754 float codec, little-endian.
pub struct F32Codec;

impl CodecStrategy for F32Codec {
    fn decode(&self, data: &[u8]) -> Value {
        Value::F32(wire::read_f32_le(data))
    }

    fn encode(&self, value: &Value) -> Result<Vec<u8>> {
        let v = value
            .as_f32()
            .ok_or_else(|| type_mismatch(ValueType::F32, value))?;
        Ok(v.to_le_bytes().to_vec())
    }
}

/// UTF-8 string codec.
///
/// Malformed sequences decode with the standard replacement character.
pub struct Utf8Codec;

impl CodecStrategy for Utf8Codec {
    fn decode(&self, data: &[u8]) -> Value {
        Value::Str(String::from_utf8_lossy(data).into_owned())
    }

    fn encode(&self, value: &Value) -> Result<Vec<u8>> {
        let s = value
            .as_str()
            .ok_or_else(|| type_mismatch(ValueType::Str, value))?;
        Ok(s.as_bytes().to_vec())
    }
}

/// Boolean codec. First byte nonzero decodes true; encodes `[1]`/`[0]`.
pub struct BoolCodec;

impl CodecStrategy for BoolCodec {
    fn decode(&self, data: &[u8]) -> Value {
        Value::Bool(data.first().is_some_and(|b| *b != 0))
    }

    fn encode(&self, value: &Value) -> Result<Vec<u8>> {
        let v = value
            .as_bool()
            .ok_or_else(|| type_mismatch(ValueType::Bool, value))?;
        Ok(vec![v as u8])
    }
}

/// Unsigned byte codec.
pub struct U8Codec;

impl CodecStrategy for U8Codec {
    fn decode(&self, data: &[u8]) -> Value {
        Value::U8(data.first().copied().unwrap_or(0))
    }

    fn encode(&self, value: &Value) -> Result<Vec<u8>> {
        let v = value
            .as_u8()
            .ok_or_else(|| type_mismatch(ValueType::U8, value))?;
        Ok(vec![v])
    }
}

/// Unsigned 16-bit integer codec, little-endian.
pub struct U16Codec;

impl CodecStrategy for U16Codec {
    fn decode(&self, data: &[u8]) -> Value {
        Value::U16(wire::read_u16_le(data))
    }

    fn encode(&self, value: &Value) -> Result<Vec<u8>> {
        let v = value
            .as_u16()
            .ok_or_else(|| type_mismatch(ValueType::U16, value))?;
        Ok(v.to_le_bytes().to_vec())
    }
}

/// Signed 16-bit integer codec, little-endian.
pub struct I16Codec;

impl CodecStrategy for I16Codec {
    fn decode(&self, data: &[u8]) -> Value {
        Value::I16(wire::read_i16_le(data))
    }

    fn encode(&self, value: &Value) -> Result<Vec<u8>> {
        let v = value
            .as_i16()
            .ok_or_else(|| type_mismatch(ValueType::I16, value))?;
        Ok(v.to_le_bytes().to_vec())
    }
}
