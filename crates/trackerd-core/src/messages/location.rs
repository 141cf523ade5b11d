use super::common::{insert_battery, insert_date_time, insert_position};
use super::error::DecodeError;
use super::kind::UplinkKind;
use super::layout::location as loc;
use super::layout::location_timestamp as ts;
use super::reader::FrameReader;
use crate::record::DecodedRecord;

/// GPS position with battery and status byte (fPort 2 and 3).
///
/// The optional tail is either a timestamp (background upload with 18+ bytes)
/// or, on fPort 2 only, humidity and temperature (15+ bytes).
pub fn decode_location(payload: &[u8], climate: bool) -> Result<DecodedRecord, DecodeError> {
    let reader = FrameReader::new(UplinkKind::Location { climate }, payload);
    reader.require_len(loc::MIN_LEN)?;

    let mut record = DecodedRecord::new();
    insert_position(&mut record, &reader)?;
    insert_battery(&mut record, reader.read_battery(loc::BATTERY_OFFSET)?);

    let status = reader.read_status(loc::STATUS_OFFSET)?;
    record.insert("Mode", status.mode_unshifted());
    record.insert("LED_Status", status.led_label());
    record.insert("Movement", status.movement_label());
    record.insert("Background_Mode", u8::from(status.background()));

    if status.background() && reader.has_len(loc::DATE_TIME_MIN_LEN) {
        let date_time = reader.read_date_time(loc::DATE_TIME_RANGE)?;
        insert_date_time(&mut record, &date_time);
    } else if climate && reader.has_len(loc::CLIMATE_MIN_LEN) {
        let humidity = reader.read_u16_be(loc::HUMIDITY_RANGE)?;
        let temperature = reader.read_i16_split(loc::TEMPERATURE_RANGE)?;
        record.insert("Hum", f64::from(humidity) / 10.0);
        record.insert("Tem", f64::from(temperature) / 10.0);
    }

    Ok(record)
}

/// GPS position with the fix timestamp (fPort 4).
pub fn decode_location_timestamp(payload: &[u8]) -> Result<DecodedRecord, DecodeError> {
    let reader = FrameReader::new(UplinkKind::LocationTimestamp, payload);
    reader.require_len(ts::MIN_LEN)?;

    let mut record = DecodedRecord::new();
    insert_position(&mut record, &reader)?;
    let date_time = reader.read_date_time(ts::DATE_TIME_RANGE)?;
    insert_date_time(&mut record, &date_time);
    Ok(record)
}
