use super::error::DecodeError;
use super::kind::UplinkKind;
use super::layout::device_info as info;
use super::reader::FrameReader;
use crate::fields::{battery_percentage, bits};
use crate::record::DecodedRecord;

/// Device model, firmware, radio region and battery (fPort 5).
pub fn decode_device_info(payload: &[u8]) -> Result<DecodedRecord, DecodeError> {
    let reader = FrameReader::new(UplinkKind::DeviceInfo, payload);
    reader.require_len(info::MIN_LEN)?;

    let model = reader.read_u8(info::SENSOR_MODEL_OFFSET)?;
    let [fw_hi, fw_lo] = reader.read_array::<2>(info::FIRMWARE_RANGE)?;
    let band = reader.read_u8(info::FREQUENCY_BAND_OFFSET)?;
    let sub_band = reader.read_u8(info::SUB_BAND_OFFSET)?;
    // Plain 16-bit millivolts here, no alarm bit.
    let volts = f64::from(reader.read_u16_be(info::BATTERY_RANGE)?) / 1000.0;

    let mut record = DecodedRecord::new();
    record.insert("Sensor_Mode", sensor_model_name(model));
    record.insert("Firmware_Version", firmware_version(fw_hi, fw_lo));
    record.insert("Frequency_Band", frequency_band(band));
    if sub_band == info::SUB_BAND_UNSET {
        record.insert("Sub_Band", "NULL");
    } else {
        record.insert("Sub_Band", sub_band);
    }
    record.insert("BatV", volts);
    record.insert("BatP", battery_percentage(volts));
    Ok(record)
}

pub fn sensor_model_name(model: u8) -> &'static str {
    if model == info::TRACKERD_MODEL {
        "TrackerD"
    } else {
        "NULL"
    }
}

/// `major.minor.patch` from the low nibble of `hi` and both nibbles of `lo`.
pub fn firmware_version(hi: u8, lo: u8) -> String {
    format!(
        "{}.{}.{}",
        bits::field(hi, 0x0F, 0),
        bits::field(lo, 0xF0, 4),
        bits::field(lo, 0x0F, 0)
    )
}

/// Region name for a band byte; the table starts at 1.
///
/// # Examples
/// ```
/// use trackerd_core::messages::device_info::frequency_band;
///
/// assert_eq!(frequency_band(1), "EU868");
/// assert_eq!(frequency_band(0), "Unknown");
/// ```
pub fn frequency_band(band: u8) -> &'static str {
    usize::from(band)
        .checked_sub(1)
        .and_then(|index| info::FREQUENCY_BANDS.get(index))
        .copied()
        .unwrap_or("Unknown")
}
