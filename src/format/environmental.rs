//! Environmental record format.
//!
//! Fixed 14-byte layout carrying sensor readings:
//! - Byte 0: header (0x45)
//! - Byte 1: presence flags (bit 0: temperature, bit 1: humidity, bit 2: pressure)
//! - Bytes 2-5: temperature, little-endian f32
//! - Bytes 6-9: humidity, little-endian f32
//! - Bytes 10-13: pressure, little-endian f32
//!
//! Same flag discipline as the health record: absent fields leave
//! their slot zeroed and their flag bit clear.

use tracing::debug;

use crate::error::{Error, Result};
use crate::fields::FieldMap;
use crate::format::MessageFormat;
use crate::value::{Value, ValueType};

/// Fixed-layout environmental record (header `0x45`, 14 bytes).
pub struct EnvironmentalFormat;

impl EnvironmentalFormat {
    /// Registered format name.
    pub const NAME: &'static str = "Environment";
    /// Header byte identifying an environmental record.
    pub const HEADER: u8 = 0x45;
    /// Fixed record size in bytes.
    pub const SIZE: usize = 14;

    /// Presence flag for the temperature field.
    pub const FLAG_TEMPERATURE: u8 = 0x01;
    /// Presence flag for the humidity field.
    pub const FLAG_HUMIDITY: u8 = 0x02;
    /// Presence flag for the pressure field.
    pub const FLAG_PRESSURE: u8 = 0x04;

    /// Field name for temperature in degrees Celsius.
    pub const FIELD_TEMPERATURE: &'static str = "temperature";
    /// Field name for relative humidity in percent.
    pub const FIELD_HUMIDITY: &'static str = "humidity";
    /// Field name for pressure in hectopascals.
    pub const FIELD_PRESSURE: &'static str = "pressure";

    /// The three (field, flag, offset) slots in layout order.
    const SLOTS: [(&'static str, u8, usize); 3] = [
        (Self::FIELD_TEMPERATURE, Self::FLAG_TEMPERATURE, 2),
        (Self::FIELD_HUMIDITY, Self::FLAG_HUMIDITY, 6),
        (Self::FIELD_PRESSURE, Self::FLAG_PRESSURE, 10),
    ];
}

impl MessageFormat for EnvironmentalFormat {
    fn encode(&self, fields: &FieldMap) -> Result<Vec<u8>> {
        let mut buf = [0u8; Self::SIZE];
        buf[0] = Self::HEADER;
        let mut flags = 0u8;

        for (name, flag, offset) in Self::SLOTS {
            if let Some(value) = fields.get(name) {
                let reading = value.as_f32().ok_or_else(|| Error::TypeMismatch {
                    expected: ValueType::F32,
                    value: value.to_string(),
                })?;
                buf[offset..offset + 4].copy_from_slice(&reading.to_le_bytes());
                flags |= flag;
            }
        }

        buf[1] = flags;
        Ok(buf.to_vec())
    }

    fn decode(&self, data: &[u8]) -> Result<FieldMap> {
        debug!("Decoding environmental record from {} bytes", data.len());

        if data.len() < Self::SIZE {
            return Err(Error::MalformedRecord {
                context: format!(
                    "Environmental record too short: {} bytes (need {})",
                    data.len(),
                    Self::SIZE
                ),
            });
        }

        if data[0] != Self::HEADER {
            return Err(Error::MalformedRecord {
                context: format!("Invalid environmental header byte: {:#04x}", data[0]),
            });
        }

        let flags = data[1];
        let mut fields = FieldMap::new();

        for (name, flag, offset) in Self::SLOTS {
            if flags & flag != 0 {
                let reading = f32::from_le_bytes([
                    data[offset],
                    data[offset + 1],
                    data[offset + 2],
                    data[offset + 3],
                ]);
                fields.insert(name, Value::F32(reading));
            }
        }

        Ok(fields)
    }
}
