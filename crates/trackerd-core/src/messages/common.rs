use super::error::DecodeError;
use super::layout;
use super::reader::FrameReader;
use crate::fields::{BatteryStatus, DateTimeFields};
use crate::record::DecodedRecord;

pub(crate) fn insert_position(
    record: &mut DecodedRecord,
    reader: &FrameReader<'_>,
) -> Result<(), DecodeError> {
    record.insert("Latitude", reader.read_degrees(layout::LATITUDE_RANGE)?);
    record.insert("Longitude", reader.read_degrees(layout::LONGITUDE_RANGE)?);
    Ok(())
}

/// `BatV`, `BatP` and `Alarm` from a packed battery word.
pub(crate) fn insert_battery(record: &mut DecodedRecord, battery: BatteryStatus) {
    record.insert("BatV", battery.volts());
    record.insert("BatP", battery.percentage());
    record.insert("Alarm", battery.alarm);
}

pub(crate) fn insert_date_time(record: &mut DecodedRecord, date_time: &DateTimeFields) {
    record.insert("Date", date_time.date());
    record.insert("Time", date_time.time());
}
