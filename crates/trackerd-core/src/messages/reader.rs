use std::ops::Range;

use super::error::DecodeError;
use super::kind::UplinkKind;
use crate::fields::{
    BatteryStatus, DATE_TIME_LEN, DateTimeFields, StatusFlags, bits, latin1_text, to_hex,
};

/// Bounds-checked access to an uplink payload.
///
/// Every read reports [`DecodeError::TooShort`] tagged with the message kind
/// instead of indexing past the end.
pub struct FrameReader<'a> {
    kind: UplinkKind,
    payload: &'a [u8],
}

impl<'a> FrameReader<'a> {
    pub fn new(kind: UplinkKind, payload: &'a [u8]) -> Self {
        Self { kind, payload }
    }

    pub fn has_len(&self, needed: usize) -> bool {
        self.payload.len() >= needed
    }

    pub fn require_len(&self, needed: usize) -> Result<(), DecodeError> {
        if !self.has_len(needed) {
            return Err(self.too_short(needed));
        }
        Ok(())
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, DecodeError> {
        self.payload
            .get(offset)
            .copied()
            .ok_or_else(|| self.too_short(offset + 1))
    }

    /// Signed 8-bit value (RSSI bytes).
    pub fn read_i8(&self, offset: usize) -> Result<i32, DecodeError> {
        self.read_u8(offset).map(bits::sign_extend_u8)
    }

    pub fn read_slice(&self, range: Range<usize>) -> Result<&'a [u8], DecodeError> {
        let end = range.end;
        self.payload
            .get(range)
            .ok_or_else(|| self.too_short(end))
    }

    pub fn read_array<const N: usize>(&self, range: Range<usize>) -> Result<[u8; N], DecodeError> {
        let bytes = self.read_slice(range)?;
        bytes
            .try_into()
            .map_err(|_| self.too_short(N))
    }

    pub fn read_u16_be(&self, range: Range<usize>) -> Result<u16, DecodeError> {
        let [hi, lo] = self.read_array::<2>(range)?;
        Ok(bits::be_u16(hi, lo))
    }

    pub fn read_i32_be(&self, range: Range<usize>) -> Result<i32, DecodeError> {
        self.read_array::<4>(range).map(bits::be_i32)
    }

    /// Sign-extended high byte combined with the unsigned low byte.
    pub fn read_i16_split(&self, range: Range<usize>) -> Result<i32, DecodeError> {
        let [hi, lo] = self.read_array::<2>(range)?;
        Ok(bits::be_i16_split(hi, lo))
    }

    /// Coordinate in degrees, stored as micro-degrees.
    pub fn read_degrees(&self, range: Range<usize>) -> Result<f64, DecodeError> {
        self.read_i32_be(range)
            .map(|micro| f64::from(micro) / 1e6)
    }

    /// Packed battery word: the byte at `offset` and the one after it.
    pub fn read_battery(&self, offset: usize) -> Result<BatteryStatus, DecodeError> {
        let hi = self.read_u8(offset)?;
        let lo = self.read_u8(offset + 1)?;
        Ok(BatteryStatus::from_packed(hi, lo))
    }

    pub fn read_status(&self, offset: usize) -> Result<StatusFlags, DecodeError> {
        self.read_u8(offset).map(StatusFlags)
    }

    pub fn read_date_time(&self, range: Range<usize>) -> Result<DateTimeFields, DecodeError> {
        self.read_array::<DATE_TIME_LEN>(range)
            .map(DateTimeFields::from_bytes)
    }

    pub fn read_hex(&self, range: Range<usize>) -> Result<String, DecodeError> {
        self.read_slice(range).map(to_hex)
    }

    pub fn read_latin1(&self, range: Range<usize>) -> Result<String, DecodeError> {
        self.read_slice(range).map(latin1_text)
    }

    fn too_short(&self, needed: usize) -> DecodeError {
        DecodeError::TooShort {
            kind: self.kind,
            needed,
            actual: self.payload.len(),
        }
    }
}
