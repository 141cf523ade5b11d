/// Returns `true` when bit `index` (0 = least significant) of `value` is set.
pub const fn bit(value: u8, index: u8) -> bool {
    value & (1 << index) != 0
}

/// Masks `value` and shifts the result down by `shift` bits.
pub const fn field(value: u8, mask: u8, shift: u8) -> u8 {
    (value & mask) >> shift
}

/// Interprets an 8-bit two's-complement value, widened to `i32`.
pub const fn sign_extend_u8(value: u8) -> i32 {
    value as i8 as i32
}

/// Unsigned 16-bit big-endian word.
pub const fn be_u16(hi: u8, lo: u8) -> u16 {
    u16::from_be_bytes([hi, lo])
}

/// Signed 32-bit big-endian word.
pub const fn be_i32(bytes: [u8; 4]) -> i32 {
    i32::from_be_bytes(bytes)
}

/// Signed 16-bit value built from a sign-extended high byte shifted over an
/// unsigned low byte.
///
/// The low byte is OR-ed in after the shift, so it never carries sign bits.
pub const fn be_i16_split(hi: u8, lo: u8) -> i32 {
    (sign_extend_u8(hi) << 8) | lo as i32
}
