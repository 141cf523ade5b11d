use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::messages::{DecodeError, UNKNOWN_FPORT_MESSAGE, UplinkKind};
use crate::record::DecodedRecord;

/// Uplink handed over by the network server.
///
/// # Examples
/// ```
/// use trackerd_core::UplinkInput;
///
/// let input: UplinkInput =
///     serde_json::from_str(r#"{"fPort":7,"bytes":[12,128,64]}"#).unwrap();
/// assert_eq!(input.f_port, 7);
/// assert!(input.variables.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UplinkInput {
    /// LoRaWAN fPort selecting the message layout.
    pub f_port: i64,
    /// Raw application payload.
    pub bytes: Vec<u8>,
    /// Device variables configured on the network server; not used by any
    /// layout.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub variables: BTreeMap<String, serde_json::Value>,
}

impl UplinkInput {
    pub fn new(f_port: i64, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            f_port,
            bytes: bytes.into(),
            variables: BTreeMap::new(),
        }
    }
}

/// Decoder result handed back to the network server.
///
/// `errors` is only present when the payload could not be decoded at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UplinkOutput {
    pub data: DecodedRecord,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl UplinkOutput {
    /// True when `data.error` is set or `errors` is non-empty.
    pub fn is_error(&self) -> bool {
        self.data.contains("error") || !self.errors.is_empty()
    }
}

/// Decodes `payload` with the layout selected by `fport`.
///
/// # Examples
/// ```
/// use trackerd_core::{FieldValue, decode};
///
/// let record = decode(7, &[0x0C, 0x80, 0x40])?;
/// assert_eq!(record.get("BatV"), Some(&FieldValue::Float(3.2)));
/// # Ok::<(), trackerd_core::DecodeError>(())
/// ```
pub fn decode(fport: i64, payload: &[u8]) -> Result<DecodedRecord, DecodeError> {
    let kind = UplinkKind::from_fport(fport).ok_or(DecodeError::UnknownFPort { fport })?;
    debug!(fport, %kind, len = payload.len(), "decoding uplink");
    kind.decode(payload)
}

/// Network-server entry point; never fails.
///
/// An unknown fPort yields `data.error = "Unknown fPort"` and nothing else. A
/// payload shorter than its layout yields empty `data` and one `errors`
/// entry.
///
/// # Examples
/// ```
/// use trackerd_core::{FieldValue, UplinkInput, decode_uplink};
///
/// let output = decode_uplink(&UplinkInput::new(99, vec![0x01]));
/// assert_eq!(
///     output.data.get("error"),
///     Some(&FieldValue::Text("Unknown fPort".to_string()))
/// );
/// ```
pub fn decode_uplink(input: &UplinkInput) -> UplinkOutput {
    match decode(input.f_port, &input.bytes) {
        Ok(data) => UplinkOutput {
            data,
            errors: Vec::new(),
        },
        Err(DecodeError::UnknownFPort { fport }) => {
            warn!(fport, "unknown fPort");
            let mut data = DecodedRecord::new();
            data.insert("error", UNKNOWN_FPORT_MESSAGE);
            UplinkOutput {
                data,
                errors: Vec::new(),
            }
        }
        Err(err) => {
            warn!(fport = input.f_port, error = %err, "uplink not decoded");
            UplinkOutput {
                data: DecodedRecord::new(),
                errors: vec![err.to_string()],
            }
        }
    }
}
