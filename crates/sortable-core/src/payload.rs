//! Cross-list drag payload.
//!
//! The only serialized surface: a JSON object carried in the native drag
//! transfer under the [`DRAG_DATA_KEY`] field. A plain-text `text` field
//! with the bare id is written alongside it, both because Firefox refuses
//! to start a drag without transfer data and because dropwells read it.

use serde::{Deserialize, Serialize};

/// Transfer field holding the JSON payload.
pub const DRAG_DATA_KEY: &str = "dragData";

/// Transfer field holding the bare item id.
pub const TEXT_KEY: &str = "text";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragPayload {
    pub pkid: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl DragPayload {
    pub fn new(pkid: impl Into<String>, kind: Option<String>) -> Self {
        Self {
            pkid: pkid.into(),
            kind,
        }
    }
}

/// Lenient parse: an empty or garbled payload means "no drag data" and the
/// drop is ignored, never an error surfaced to the browser.
pub fn parse_payload(raw: &str) -> Option<DragPayload> {
    if raw.is_empty() {
        return None;
    }
    match serde_json::from_str(raw) {
        Ok(payload) => Some(payload),
        Err(err) => {
            log::debug!("ignoring malformed drag payload: {err}");
            None
        }
    }
}

pub fn encode_payload(payload: &DragPayload) -> String {
    serde_json::to_string(payload).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_with_type_tag() {
        let payload = DragPayload::new("42", Some("card".into()));
        let encoded = encode_payload(&payload);
        assert_eq!(encoded, r#"{"pkid":"42","type":"card"}"#);
        assert_eq!(parse_payload(&encoded), Some(payload));
    }

    #[test]
    fn kind_is_optional_on_the_wire() {
        assert_eq!(
            parse_payload(r#"{"pkid":"7"}"#),
            Some(DragPayload::new("7", None))
        );
    }

    #[test]
    fn malformed_payloads_are_ignored() {
        assert_eq!(parse_payload(""), None);
        assert_eq!(parse_payload("not json"), None);
        assert_eq!(parse_payload(r#"{"other":1}"#), None);
    }
}
