//! Field helpers shared by the message decoders.
//!
//! Everything here is a pure function over bytes or numbers: bit extraction
//! with explicit width and signedness, the packed battery word, the 7-byte
//! date/time block, and identifier rendering (hex, raw SSID text).

pub mod battery;
pub mod bits;
pub mod datetime;
pub mod flags;
pub mod ident;

pub use battery::{BatteryStatus, battery_percentage};
pub use datetime::{DATE_TIME_LEN, DateTimeFields, format_date_time};
pub use flags::StatusFlags;
pub use ident::{latin1_text, to_hex};
