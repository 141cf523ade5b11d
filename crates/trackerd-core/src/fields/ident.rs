/// Lowercase hex, two characters per byte, no separators.
///
/// # Examples
/// ```
/// use trackerd_core::fields::to_hex;
///
/// assert_eq!(to_hex(&[0x00, 0xFF, 0x1A]), "00ff1a");
/// ```
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Maps each byte to the char with the same code point (U+0000..=U+00FF).
///
/// No charset validation: control bytes and high bytes pass through.
pub fn latin1_text(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}
