//! Byte offsets for every uplink layout.

use std::ops::Range;

pub const LATITUDE_RANGE: Range<usize> = 0..4;
pub const LONGITUDE_RANGE: Range<usize> = 4..8;

/// fPort 2 and 3.
pub mod location {
    use std::ops::Range;

    pub const BATTERY_OFFSET: usize = 8;
    pub const STATUS_OFFSET: usize = 10;
    pub const DATE_TIME_RANGE: Range<usize> = 11..18;
    pub const HUMIDITY_RANGE: Range<usize> = 11..13;
    pub const TEMPERATURE_RANGE: Range<usize> = 13..15;

    pub const MIN_LEN: usize = STATUS_OFFSET + 1;
    pub const DATE_TIME_MIN_LEN: usize = DATE_TIME_RANGE.end;
    pub const CLIMATE_MIN_LEN: usize = TEMPERATURE_RANGE.end;
}

/// fPort 4.
pub mod location_timestamp {
    use std::ops::Range;

    pub const DATE_TIME_RANGE: Range<usize> = 8..15;

    pub const MIN_LEN: usize = DATE_TIME_RANGE.end;
}

/// fPort 5.
pub mod device_info {
    use std::ops::Range;

    pub const SENSOR_MODEL_OFFSET: usize = 0;
    pub const FIRMWARE_RANGE: Range<usize> = 1..3;
    pub const FREQUENCY_BAND_OFFSET: usize = 3;
    pub const SUB_BAND_OFFSET: usize = 4;
    pub const BATTERY_RANGE: Range<usize> = 5..7;

    pub const MIN_LEN: usize = BATTERY_RANGE.end;

    pub const TRACKERD_MODEL: u8 = 0x13;
    pub const SUB_BAND_UNSET: u8 = 0xFF;

    /// Region names indexed by `band byte - 1`.
    pub const FREQUENCY_BANDS: [&str; 14] = [
        "EU868", "US915", "IN865", "AU915", "KZ865", "RU864", "AS923", "AS923_1", "AS923_2",
        "AS923_3", "CN470", "EU433", "KR920", "MA869",
    ];
}

/// fPort 6.
pub mod beacon {
    use std::ops::Range;

    pub const UUID_RANGE: Range<usize> = 0..16;
    /// Last UUID byte, reported separately as the TX power.
    pub const POWER_OFFSET: usize = 15;
    pub const MAJOR_RANGE: Range<usize> = 16..18;
    pub const MINOR_RANGE: Range<usize> = 18..20;
    pub const RSSI_AT_1M_OFFSET: usize = 21;
    pub const RSSI_OFFSET: usize = 23;
    pub const BATTERY_OFFSET: usize = 24;
    pub const STATUS_OFFSET: usize = 26;

    pub const MIN_LEN: usize = STATUS_OFFSET + 1;
}

/// fPort 7.
pub mod status {
    pub const BATTERY_OFFSET: usize = 0;
    pub const STATUS_OFFSET: usize = 2;

    pub const MIN_LEN: usize = STATUS_OFFSET + 1;
}

/// fPort 8.
pub mod wifi_scan {
    use std::ops::Range;

    pub const SSID_RANGE: Range<usize> = 0..6;
    pub const RSSI_OFFSET: usize = 6;
    pub const BATTERY_OFFSET: usize = 7;
    pub const STATUS_OFFSET: usize = 9;

    pub const MIN_LEN: usize = STATUS_OFFSET + 1;
}

/// fPort 10.
pub mod mac_scan {
    use std::ops::Range;

    pub const MAC_LEN: usize = 6;
    /// Each entry is a MAC followed by its RSSI byte.
    pub const ENTRY_OFFSETS: [usize; 3] = [0, 7, 14];
    pub const BATTERY_OFFSET: usize = 21;
    pub const STATUS_OFFSET: usize = 23;

    pub const MIN_LEN: usize = STATUS_OFFSET + 1;

    pub const fn mac_range(entry_offset: usize) -> Range<usize> {
        entry_offset..entry_offset + MAC_LEN
    }

    pub const fn rssi_offset(entry_offset: usize) -> usize {
        entry_offset + MAC_LEN
    }
}
