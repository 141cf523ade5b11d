use super::bits;

/// Size of the on-wire date/time block.
pub const DATE_TIME_LEN: usize = 7;

/// Raw date/time fields as sent by the device.
///
/// Values are not checked against the calendar: month 13 or day 32 are
/// rendered as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeFields {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTimeFields {
    pub fn from_bytes(bytes: [u8; DATE_TIME_LEN]) -> Self {
        let [y0, y1, month, day, hour, minute, second] = bytes;
        Self {
            year: bits::be_u16(y0, y1),
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// `YYYY-MM-DD`; the year is not padded.
    pub fn date(&self) -> String {
        format!("{}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// `HH:MM:SS`.
    pub fn time(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Formats a 7-byte date/time block into `(date, time)` strings.
///
/// # Examples
/// ```
/// use trackerd_core::fields::format_date_time;
///
/// let (date, time) = format_date_time([0x07, 0xE8, 3, 9, 7, 5, 0]);
/// assert_eq!(date, "2024-03-09");
/// assert_eq!(time, "07:05:00");
/// ```
pub fn format_date_time(bytes: [u8; DATE_TIME_LEN]) -> (String, String) {
    let fields = DateTimeFields::from_bytes(bytes);
    (fields.date(), fields.time())
}
