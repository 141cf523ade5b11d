use super::common::insert_battery;
use super::error::DecodeError;
use super::kind::UplinkKind;
use super::layout::{mac_scan, wifi_scan};
use super::reader::FrameReader;
use crate::record::DecodedRecord;

const MAC_FIELDS: [(&str, &str); 3] = [("MAC1", "RSSI1"), ("MAC2", "RSSI2"), ("MAC3", "RSSI3")];

/// Strongest access point SSID with its RSSI (fPort 8).
///
/// The SSID is six raw bytes, one char per byte, padding included.
pub fn decode_wifi_scan(payload: &[u8]) -> Result<DecodedRecord, DecodeError> {
    let reader = FrameReader::new(UplinkKind::WifiScan, payload);
    reader.require_len(wifi_scan::MIN_LEN)?;

    let mut record = DecodedRecord::new();
    record.insert("WIFI_SSID", reader.read_latin1(wifi_scan::SSID_RANGE)?);
    record.insert("RSSI", reader.read_i8(wifi_scan::RSSI_OFFSET)?);
    insert_battery(&mut record, reader.read_battery(wifi_scan::BATTERY_OFFSET)?);
    let status = reader.read_status(wifi_scan::STATUS_OFFSET)?;
    record.insert("Mode", status.mode());
    record.insert("LED_Status", status.led_label());
    Ok(record)
}

/// Three strongest BSSIDs with their RSSI (fPort 10).
pub fn decode_mac_scan(payload: &[u8]) -> Result<DecodedRecord, DecodeError> {
    let reader = FrameReader::new(UplinkKind::MacScan, payload);
    reader.require_len(mac_scan::MIN_LEN)?;

    let mut record = DecodedRecord::new();
    for (entry, (mac_name, rssi_name)) in mac_scan::ENTRY_OFFSETS.into_iter().zip(MAC_FIELDS) {
        record.insert(mac_name, reader.read_hex(mac_scan::mac_range(entry))?);
        record.insert(rssi_name, reader.read_i8(mac_scan::rssi_offset(entry))?);
    }
    insert_battery(&mut record, reader.read_battery(mac_scan::BATTERY_OFFSET)?);
    record.insert("Mode", reader.read_status(mac_scan::STATUS_OFFSET)?.mode());
    Ok(record)
}
