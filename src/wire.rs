//! Little-endian wire primitives shared by the codec strategies and
//! the structured formats.
//!
//! Characteristic buffers arrive truncated or padded in the field, so
//! the read helpers fill missing trailing bytes with zero instead of
//! failing, and ignore anything past the fixed width.

/// Copy up to `N` bytes from `data`, zero-filling the tail.
pub(crate) fn padded<const N: usize>(data: &[u8]) -> [u8; N] {
    let mut bytes = [0u8; N];
    let len = data.len().min(N);
    bytes[..len].copy_from_slice(&data[..len]);
    bytes
}

/// Read a little-endian u16 from offset 0, zero-padding short input.
pub(crate) fn read_u16_le(data: &[u8]) -> u16 {
    u16::from_le_bytes(padded(data))
}

/// Read a little-endian i16 from offset 0, zero-padding short input.
pub(crate) fn read_i16_le(data: &[u8]) -> i16 {
    i16::from_le_bytes(padded(data))
}

/// Read a little-endian i32 from offset 0, zero-padding short input.
pub(crate) fn read_i32_le(data: &[u8]) -> i32 {
    i32::from_le_bytes(padded(data))
}

/// Read a little-endian f32 from offset 0, zero-padding short input.
pub(crate) fn read_f32_le(data: &[u8]) -> f32 {
    f32::from_le_bytes(padded(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_short_input() {
        assert_eq!(padded::<4>(&[0x12]), [0x12, 0x00, 0x00, 0x00]);
        assert_eq!(padded::<2>(&[]), [0x00, 0x00]);
    }

    #[test]
    fn test_padded_ignores_tail() {
        assert_eq!(padded::<2>(&[0x01, 0x02, 0x03, 0x04]), [0x01, 0x02]);
    }

    #[test]
    fn test_read_u16_le() {
        assert_eq!(read_u16_le(&[0x34, 0x12]), 0x1234);
        assert_eq!(read_u16_le(&[0x80]), 0x0080);
        assert_eq!(read_u16_le(&[]), 0);
    }

    #[test]
    fn test_read_i16_le_padding_is_unsigned() {
        // A lone 0x80 pads to 0x0080, it is not sign-extended.
        assert_eq!(read_i16_le(&[0x80]), 128);
        assert_eq!(read_i16_le(&[0xFF, 0xFF]), -1);
    }

    #[test]
    fn test_read_i32_le() {
        assert_eq!(read_i32_le(&987_654_321i32.to_le_bytes()), 987_654_321);
        assert_eq!(read_i32_le(&[0x01, 0x02, 0x03]), 0x0003_0201);
    }

    #[test]
    fn test_read_f32_le() {
        let bytes = 3.14159f32.to_le_bytes();
        assert!((read_f32_le(&bytes) - 3.14159).abs() < 0.0001);
        assert_eq!(read_f32_le(&[]), 0.0);
    }
}
