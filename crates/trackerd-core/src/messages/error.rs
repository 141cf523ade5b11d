use thiserror::Error;

use super::kind::UplinkKind;

/// Text placed in `data.error` for an unrecognized fPort.
pub const UNKNOWN_FPORT_MESSAGE: &str = "Unknown fPort";

/// Errors returned by uplink decoding.
///
/// # Examples
/// ```
/// use trackerd_core::{DecodeError, decode};
///
/// let err = decode(99, &[0x00]).unwrap_err();
/// assert!(matches!(err, DecodeError::UnknownFPort { fport: 99 }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("unknown fPort: {fport}")]
    UnknownFPort { fport: i64 },
    #[error("payload too short for {kind}: need {needed} bytes, got {actual}")]
    TooShort {
        kind: UplinkKind,
        needed: usize,
        actual: usize,
    },
}
