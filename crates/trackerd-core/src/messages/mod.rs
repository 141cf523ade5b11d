//! TrackerD uplink decoding, one module per message layout.
//!
//! The layering follows the wire format:
//! - `layout`: byte offsets and ranges per fPort (source of truth)
//! - `reader`: bounds-checked reads and field conventions (battery word,
//!   status byte, RSSI sign extension)
//! - `kind`: fPort dispatch to exactly one decoder
//! - `location`, `device_info`, `beacon`, `status`, `scan`: the decoders,
//!   which never index the payload directly
//! - `error`: unknown fPort and short payload errors
//!
//! Every decoder checks its minimum length up front and then reads fixed
//! offsets; trailing bytes are ignored.
//!
//! Version française (résumé):
//! Un décodeur par fPort (2/3, 4, 5, 6, 7, 8, 10). Les positions sont dans
//! `layout`, les lectures sûres dans `reader`. Une charge utile trop courte
//! produit une erreur explicite au lieu d'une lecture hors limites.

pub mod beacon;
mod common;
pub mod device_info;
pub mod error;
pub mod kind;
pub mod layout;
pub mod location;
pub mod reader;
pub mod scan;
pub mod status;

pub use error::{DecodeError, UNKNOWN_FPORT_MESSAGE};
pub use kind::UplinkKind;
