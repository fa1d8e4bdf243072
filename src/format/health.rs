//! Health record format.
//!
//! Fixed 10-byte layout carrying fitness-style readings:
//! - Byte 0: header (0x48)
//! - Byte 1: presence flags (bit 0: heart rate, bit 1: steps, bit 2: calories)
//! - Bytes 2-3: heart rate, little-endian u16
//! - Bytes 4-7: step count, little-endian i32
//! - Bytes 8-9: calories, little-endian u16
//!
//! Every slot occupies its fixed position whether or not the field was
//! encoded; absent fields leave their slot zeroed and their flag bit
//! clear.

use tracing::debug;

use crate::error::{Error, Result};
use crate::fields::FieldMap;
use crate::format::MessageFormat;
use crate::value::{Value, ValueType};

/// Fixed-layout health record (header `0x48`, 10 bytes).
pub struct HealthFormat;

impl HealthFormat {
    /// Registered format name.
    pub const NAME: &'static str = "Health";
    /// Header byte identifying a health record.
    pub const HEADER: u8 = 0x48;
    /// Fixed record size in bytes.
    pub const SIZE: usize = 10;

    /// Presence flag for the heart rate field.
    pub const FLAG_HEART_RATE: u8 = 0x01;
    /// Presence flag for the step count field.
    pub const FLAG_STEPS: u8 = 0x02;
    /// Presence flag for the calories field.
    pub const FLAG_CALORIES: u8 = 0x04;

    /// Field name for heart rate in beats per minute.
    pub const FIELD_HEART_RATE: &'static str = "heartRate";
    /// Field name for the step count.
    pub const FIELD_STEPS: &'static str = "steps";
    /// Field name for burned calories.
    pub const FIELD_CALORIES: &'static str = "calories";
}

impl MessageFormat for HealthFormat {
    fn encode(&self, fields: &FieldMap) -> Result<Vec<u8>> {
        let mut buf = [0u8; Self::SIZE];
        buf[0] = Self::HEADER;
        let mut flags = 0u8;

        if let Some(value) = fields.get(Self::FIELD_HEART_RATE) {
            let heart_rate = value.as_u16().ok_or_else(|| Error::TypeMismatch {
                expected: ValueType::U16,
                value: value.to_string(),
            })?;
            buf[2..4].copy_from_slice(&heart_rate.to_le_bytes());
            flags |= Self::FLAG_HEART_RATE;
        }

        if let Some(value) = fields.get(Self::FIELD_STEPS) {
            let steps = value.as_i32().ok_or_else(|| Error::TypeMismatch {
                expected: ValueType::I32,
                value: value.to_string(),
            })?;
            buf[4..8].copy_from_slice(&steps.to_le_bytes());
            flags |= Self::FLAG_STEPS;
        }

        if let Some(value) = fields.get(Self::FIELD_CALORIES) {
            let calories = value.as_u16().ok_or_else(|| Error::TypeMismatch {
                expected: ValueType::U16,
                value: value.to_string(),
            })?;
            buf[8..10].copy_from_slice(&calories.to_le_bytes());
            flags |= Self::FLAG_CALORIES;
        }

        buf[1] = flags;
        Ok(buf.to_vec())
    }

    fn decode(&self, data: &[u8]) -> Result<FieldMap> {
        debug!("Decoding health record from {} bytes", data.len());

        if data.len() < Self::SIZE {
            return Err(Error::MalformedRecord {
                context: format!(
                    "Health record too short: {} bytes (need {})",
                    data.len(),
                    Self::SIZE
                ),
            });
        }

        if data[0] != Self::HEADER {
            return Err(Error::MalformedRecord {
                context: format!("Invalid health header byte: {:#04x}", data[0]),
            });
        }

        let flags = data[1];
        let mut fields = FieldMap::new();

        if flags & Self::FLAG_HEART_RATE != 0 {
            let heart_rate = u16::from_le_bytes([data[2], data[3]]);
            fields.insert(Self::FIELD_HEART_RATE, Value::I32(heart_rate as i32));
        }

        if flags & Self::FLAG_STEPS != 0 {
            let steps = i32::from_le_bytes([data[4], data[5], data[6], data[7]]);
            fields.insert(Self::FIELD_STEPS, Value::I32(steps));
        }

        if flags & Self::FLAG_CALORIES != 0 {
            let calories = u16::from_le_bytes([data[8], data[9]]);
            fields.insert(Self::FIELD_CALORIES, Value::I32(calories as i32));
        }

        Ok(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_roundtrip_all_fields() {
        let mut fields = FieldMap::new();
        fields.insert("heartRate", 72i32);
        fields.insert("steps", 1000i32);
        fields.insert("calories", 250i32);

        let bytes = HealthFormat.encode(&fields).unwrap();
        let decoded = HealthFormat.decode(&bytes).unwrap();

        assert_eq!(decoded, fields);
    }

    #[test]
    fn test_encode_layout() {
        let mut fields = FieldMap::new();
        fields.insert("heartRate", 72i32);
        fields.insert("steps", 1000i32);
        fields.insert("calories", 250i32);

        let bytes = HealthFormat.encode(&fields).unwrap();

        assert_eq!(bytes.len(), 10);
        assert_eq!(bytes[0], 0x48);
        assert_eq!(bytes[1], 0x07); // All three flags set
        assert_eq!(u16::from_le_bytes([bytes[2], bytes[3]]), 72);
        assert_eq!(i32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]), 1000);
        assert_eq!(u16::from_le_bytes([bytes[8], bytes[9]]), 250);
    }

    #[test]
    fn test_only_steps_present() {
        let mut fields = FieldMap::new();
        fields.insert("steps", 1000i32);

        let bytes = HealthFormat.encode(&fields).unwrap();
        assert_eq!(bytes[1], HealthFormat::FLAG_STEPS);
        // The other slots stay zeroed.
        assert_eq!(&bytes[2..4], &[0, 0]);
        assert_eq!(&bytes[8..10], &[0, 0]);

        let decoded = HealthFormat.decode(&bytes).unwrap();
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded.get("steps"), Some(&Value::I32(1000)));
        assert!(!decoded.contains("heartRate"));
        assert!(!decoded.contains("calories"));
    }

    #[test]
    fn test_unknown_input_fields_ignored() {
        let mut fields = FieldMap::new();
        fields.insert("steps", 10i32);
        fields.insert("pace", 5i32);

        let bytes = HealthFormat.encode(&fields).unwrap();
        let decoded = HealthFormat.decode(&bytes).unwrap();
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded.get("steps"), Some(&Value::I32(10)));
    }

    #[test]
    fn test_decode_too_short() {
        let result = HealthFormat.decode(&[0u8; 9]);
        assert!(matches!(result, Err(Error::MalformedRecord { .. })));
    }

    #[test]
    fn test_decode_wrong_header() {
        let mut data = [0u8; 10];
        data[0] = 0x45;
        let result = HealthFormat.decode(&data);
        assert!(matches!(result, Err(Error::MalformedRecord { .. })));
    }

    #[test]
    fn test_decode_tolerates_trailing_bytes() {
        let mut fields = FieldMap::new();
        fields.insert("calories", 90i32);

        let mut bytes = HealthFormat.encode(&fields).unwrap();
        bytes.extend_from_slice(&[0xAA, 0xBB]);

        let decoded = HealthFormat.decode(&bytes).unwrap();
        assert_eq!(decoded.get("calories"), Some(&Value::I32(90)));
    }

    #[test]
    fn test_encode_rejects_out_of_range() {
        let mut fields = FieldMap::new();
        fields.insert("heartRate", 70_000i32);
        let result = HealthFormat.encode(&fields);
        assert!(matches!(result, Err(Error::TypeMismatch { .. })));
    }

    #[test]
    fn test_negative_steps_roundtrip() {
        // Step deltas can go negative when a session is corrected.
        let mut fields = FieldMap::new();
        fields.insert("steps", -250i32);

        let bytes = HealthFormat.encode(&fields).unwrap();
        let decoded = HealthFormat.decode(&bytes).unwrap();
        assert_eq!(decoded.get("steps"), Some(&Value::I32(-250)));
    }
}
