use super::common::insert_battery;
use super::error::DecodeError;
use super::kind::UplinkKind;
use super::layout::beacon as bc;
use super::reader::FrameReader;
use crate::record::DecodedRecord;

/// iBeacon advertisement seen by the tracker, plus battery and mode (fPort 6).
///
/// `POWER` is the last UUID byte; the layout never carries a separate TX
/// power field.
pub fn decode_beacon(payload: &[u8]) -> Result<DecodedRecord, DecodeError> {
    let reader = FrameReader::new(UplinkKind::Beacon, payload);
    reader.require_len(bc::MIN_LEN)?;

    let mut record = DecodedRecord::new();
    record.insert("UUID", reader.read_hex(bc::UUID_RANGE)?);
    record.insert("MAJOR", reader.read_u16_be(bc::MAJOR_RANGE)?);
    record.insert("MINOR", reader.read_u16_be(bc::MINOR_RANGE)?);
    record.insert("POWER", reader.read_u8(bc::POWER_OFFSET)?);
    record.insert("RSSI", reader.read_i8(bc::RSSI_OFFSET)?);
    record.insert("RSSI_at_1m", reader.read_i8(bc::RSSI_AT_1M_OFFSET)?);
    insert_battery(&mut record, reader.read_battery(bc::BATTERY_OFFSET)?);
    record.insert("Mode", reader.read_status(bc::STATUS_OFFSET)?.mode());
    Ok(record)
}
