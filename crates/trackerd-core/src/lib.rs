//! TrackerD core library: LoRaWAN uplink payload decoding.
//!
//! The Dragino TrackerD sends compact big-endian payloads whose layout is
//! selected by the LoRaWAN fPort. This crate maps `(fPort, bytes)` to a flat
//! record of labeled readings: position, battery, beacon and Wi-Fi scan data.
//! Decoding is byte-oriented and side-effect free; there is no I/O and no
//! state carried between calls, so every entry point is safe to call from
//! many threads at once.
//!
//! Invariants:
//! - Output depends only on `(fPort, bytes)`; `variables` are accepted and
//!   ignored.
//! - Records serialize with keys in stable (sorted) order.
//! - An unknown fPort is never an error for the network server: it produces
//!   `{ "data": { "error": "Unknown fPort" } }`.
//! - A payload shorter than its layout is never read past its end.
//!
//! Version française (résumé):
//! Cette crate décode les trames montantes du TrackerD selon le fPort
//! (position, batterie, balise, scan Wi-Fi). Le décodage est pur et sans
//! état. Un fPort inconnu donne `data.error = "Unknown fPort"` ; une trame
//! trop courte donne une erreur explicite.
//!
//! # Examples
//! ```
//! use trackerd_core::{FieldValue, UplinkInput, decode_uplink};
//!
//! let output = decode_uplink(&UplinkInput::new(7, vec![0x0C, 0x80, 0x40]));
//! assert_eq!(output.data.get("Mode"), Some(&FieldValue::Int(1)));
//! assert_eq!(
//!     output.data.get("LED_Status"),
//!     Some(&FieldValue::Text("OFF".to_string()))
//! );
//! ```

pub mod fields;
pub mod messages;
mod record;
mod uplink;

pub use messages::{DecodeError, UNKNOWN_FPORT_MESSAGE, UplinkKind};
pub use record::{DecodedRecord, FieldValue};
pub use uplink::{UplinkInput, UplinkOutput, decode, decode_uplink};
