use std::fmt;

use super::error::DecodeError;
use super::layout;
use super::{beacon, device_info, location, scan, status};
use crate::record::DecodedRecord;

/// Message layout selected by the uplink fPort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UplinkKind {
    /// fPort 2 (`climate: true`, may carry humidity/temperature) and fPort 3.
    Location { climate: bool },
    /// fPort 4.
    LocationTimestamp,
    /// fPort 5.
    DeviceInfo,
    /// fPort 6.
    Beacon,
    /// fPort 7.
    Status,
    /// fPort 8.
    WifiScan,
    /// fPort 10.
    MacScan,
}

impl UplinkKind {
    /// Exact match on the fPort; `None` for anything unrecognized.
    ///
    /// # Examples
    /// ```
    /// use trackerd_core::UplinkKind;
    ///
    /// assert_eq!(UplinkKind::from_fport(7), Some(UplinkKind::Status));
    /// assert_eq!(UplinkKind::from_fport(9), None);
    /// ```
    pub fn from_fport(fport: i64) -> Option<Self> {
        let kind = match fport {
            2 => UplinkKind::Location { climate: true },
            3 => UplinkKind::Location { climate: false },
            4 => UplinkKind::LocationTimestamp,
            5 => UplinkKind::DeviceInfo,
            6 => UplinkKind::Beacon,
            7 => UplinkKind::Status,
            8 => UplinkKind::WifiScan,
            10 => UplinkKind::MacScan,
            _ => return None,
        };
        Some(kind)
    }

    /// Smallest payload the layout can be decoded from.
    pub fn min_len(self) -> usize {
        match self {
            UplinkKind::Location { .. } => layout::location::MIN_LEN,
            UplinkKind::LocationTimestamp => layout::location_timestamp::MIN_LEN,
            UplinkKind::DeviceInfo => layout::device_info::MIN_LEN,
            UplinkKind::Beacon => layout::beacon::MIN_LEN,
            UplinkKind::Status => layout::status::MIN_LEN,
            UplinkKind::WifiScan => layout::wifi_scan::MIN_LEN,
            UplinkKind::MacScan => layout::mac_scan::MIN_LEN,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            UplinkKind::Location { .. } => "location",
            UplinkKind::LocationTimestamp => "location with timestamp",
            UplinkKind::DeviceInfo => "device info",
            UplinkKind::Beacon => "beacon",
            UplinkKind::Status => "status",
            UplinkKind::WifiScan => "wifi scan",
            UplinkKind::MacScan => "mac scan",
        }
    }

    pub fn decode(self, payload: &[u8]) -> Result<DecodedRecord, DecodeError> {
        match self {
            UplinkKind::Location { climate } => location::decode_location(payload, climate),
            UplinkKind::LocationTimestamp => location::decode_location_timestamp(payload),
            UplinkKind::DeviceInfo => device_info::decode_device_info(payload),
            UplinkKind::Beacon => beacon::decode_beacon(payload),
            UplinkKind::Status => status::decode_status(payload),
            UplinkKind::WifiScan => scan::decode_wifi_scan(payload),
            UplinkKind::MacScan => scan::decode_mac_scan(payload),
        }
    }
}

impl fmt::Display for UplinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
