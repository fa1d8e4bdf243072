//! Utility functions for the ble-message-codec crate.

/// Format a byte buffer as an uppercase hex string.
///
/// # Example
///
/// ```
/// use ble_message_codec::bytes_to_hex;
///
/// assert_eq!(bytes_to_hex(&[0x48, 0x01, 0xFF]), "4801FF");
/// ```
pub fn bytes_to_hex(data: &[u8]) -> String {
    let mut hex = String::with_capacity(data.len() * 2);
    for byte in data {
        use std::fmt::Write;
        // Writing to a String cannot fail.
        let _ = write!(hex, "{byte:02X}");
    }
    hex
}

/// Parse a hex string into bytes.
///
/// Accepts upper or lower case and ignores whitespace between byte
/// pairs. Returns `None` for odd-length input or non-hex characters.
///
/// # Example
///
/// ```
/// use ble_message_codec::hex_to_bytes;
///
/// assert_eq!(hex_to_bytes("48 01 ff"), Some(vec![0x48, 0x01, 0xFF]));
/// assert_eq!(hex_to_bytes("4g"), None);
/// ```
pub fn hex_to_bytes(hex: &str) -> Option<Vec<u8>> {
    let digits: Vec<u8> = hex
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<_>>()?;

    if digits.len() % 2 != 0 {
        return None;
    }

    Some(
        digits
            .chunks_exact(2)
            .map(|pair| (pair[0] << 4) | pair[1])
            .collect(),
    )
}
