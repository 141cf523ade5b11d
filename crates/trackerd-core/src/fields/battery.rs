use super::bits;

/// Voltage mapped to 0 %.
pub const EMPTY_VOLTS: f64 = 2.8;
/// Voltage mapped to 100 %.
pub const FULL_VOLTS: f64 = 4.002;

/// Low 6 bits of the high byte carry the top of the 14-bit millivolt value.
pub const VOLTAGE_HI_MASK: u8 = 0x3F;
/// Bit 6 of the high byte is the alarm flag, independent of the voltage.
pub const ALARM_BIT: u8 = 6;

/// Battery word shared by most uplinks: 14 bits of millivolts plus the alarm
/// flag, packed into two big-endian bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatteryStatus {
    pub millivolts: u16,
    pub alarm: bool,
}

impl BatteryStatus {
    pub fn from_packed(hi: u8, lo: u8) -> Self {
        Self {
            millivolts: bits::be_u16(hi & VOLTAGE_HI_MASK, lo),
            alarm: bits::bit(hi, ALARM_BIT),
        }
    }

    pub fn volts(self) -> f64 {
        f64::from(self.millivolts) / 1000.0
    }

    pub fn percentage(self) -> i64 {
        battery_percentage(self.volts())
    }
}

/// Linear charge estimate between [`EMPTY_VOLTS`] and [`FULL_VOLTS`],
/// clamped to `0..=100` and rounded to the nearest integer.
///
/// # Examples
/// ```
/// use trackerd_core::fields::battery_percentage;
///
/// assert_eq!(battery_percentage(2.5), 0);
/// assert_eq!(battery_percentage(3.401), 50);
/// assert_eq!(battery_percentage(4.2), 100);
/// ```
pub fn battery_percentage(volts: f64) -> i64 {
    let level = (volts - EMPTY_VOLTS) / (FULL_VOLTS - EMPTY_VOLTS) * 100.0;
    // NaN survives clamp; the cast turns it into 0.
    level.clamp(0.0, 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_packed_splits_voltage_and_alarm() {
        let status = BatteryStatus::from_packed(0x4C, 0x80);
        assert_eq!(status.millivolts, 0x0C80);
        assert!(status.alarm);
        assert_eq!(status.volts(), 3.2);

        let status = BatteryStatus::from_packed(0x0C, 0x80);
        assert_eq!(status.millivolts, 3200);
        assert!(!status.alarm);
    }

    #[test]
    fn from_packed_ignores_top_bit() {
        let status = BatteryStatus::from_packed(0xBF, 0xFF);
        assert_eq!(status.millivolts, 0x3FFF);
        assert!(!status.alarm);
    }

    #[test]
    fn percentage_bounds() {
        assert_eq!(battery_percentage(EMPTY_VOLTS), 0);
        assert_eq!(battery_percentage(0.0), 0);
        assert_eq!(battery_percentage(FULL_VOLTS), 100);
        assert_eq!(battery_percentage(16.383), 100);
        assert_eq!(battery_percentage(f64::NAN), 0);
    }

    #[test]
    fn percentage_midpoints() {
        assert_eq!(battery_percentage(3.401), 50);
        assert_eq!(battery_percentage(3.2), 33);
        assert_eq!(BatteryStatus::from_packed(0x0F, 0xA2).percentage(), 100);
    }
}
