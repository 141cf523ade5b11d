use super::common::insert_battery;
use super::error::DecodeError;
use super::kind::UplinkKind;
use super::layout::status as st;
use super::reader::FrameReader;
use crate::record::DecodedRecord;

/// Battery, alarm and status byte only (fPort 7).
pub fn decode_status(payload: &[u8]) -> Result<DecodedRecord, DecodeError> {
    let reader = FrameReader::new(UplinkKind::Status, payload);
    reader.require_len(st::MIN_LEN)?;

    let mut record = DecodedRecord::new();
    insert_battery(&mut record, reader.read_battery(st::BATTERY_OFFSET)?);
    let status = reader.read_status(st::STATUS_OFFSET)?;
    record.insert("Mode", status.mode());
    record.insert("LED_Status", status.led_label());
    Ok(record)
}
