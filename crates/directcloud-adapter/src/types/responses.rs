/*
[INPUT]:  Decoded response bodies from both API generations
[OUTPUT]: Envelope types handed back by dispatch
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use bytes::Bytes;
use serde_json::{Map, Value};

use crate::http::{DirectCloudError, Result};

/// Decoded JSON object body
pub type JsonObject = Map<String, Value>;

/// Successful v2 response
#[derive(Debug, Clone, PartialEq)]
pub enum V2Payload {
    /// JSON envelope whose `result` was `"success"`
    Json(JsonObject),
    /// Body without a `result` field, untouched
    Raw(Bytes),
}

impl V2Payload {
    pub fn is_success(&self) -> bool {
        matches!(self, V2Payload::Json(body) if body.get("result").and_then(Value::as_str) == Some("success"))
    }

    /// JSON object body; a raw body is accepted when it decodes to an object
    pub fn into_json(self) -> Result<JsonObject> {
        match self {
            V2Payload::Json(body) => Ok(body),
            V2Payload::Raw(bytes) => match serde_json::from_slice::<Value>(&bytes) {
                Ok(Value::Object(body)) => Ok(body),
                _ => Err(DirectCloudError::InvalidResponse(format!(
                    "expected a JSON object, got {} raw bytes",
                    bytes.len()
                ))),
            },
        }
    }

    pub fn into_bytes(self) -> Result<Bytes> {
        match self {
            V2Payload::Raw(bytes) => Ok(bytes),
            V2Payload::Json(_) => Err(DirectCloudError::InvalidResponse(
                "expected raw content, got a JSON envelope".to_string(),
            )),
        }
    }

    pub fn into_text(self) -> Result<String> {
        let bytes = self.into_bytes()?;
        String::from_utf8(bytes.to_vec())
            .map_err(|e| DirectCloudError::InvalidResponse(format!("body is not UTF-8: {e}")))
    }
}

/// `success` flag of a v1 body; absent counts as `false`
pub fn success_flag(body: &JsonObject) -> bool {
    body.get("success").and_then(Value::as_bool).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_is_success() {
        assert!(V2Payload::Json(object(json!({"result": "success"}))).is_success());
        assert!(!V2Payload::Raw(Bytes::from_static(b"{}")).is_success());
    }

    #[test]
    fn test_raw_payload_conversions() {
        let payload = V2Payload::Raw(Bytes::from_static(b"plain text"));
        assert_eq!(payload.clone().into_text().unwrap(), "plain text");
        assert!(matches!(
            payload.into_json(),
            Err(DirectCloudError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_raw_json_object_decodes() {
        let payload = V2Payload::Raw(Bytes::from_static(br#"{"file_seq": 1}"#));
        let body = payload.into_json().unwrap();
        assert_eq!(body["file_seq"], 1);

        let payload = V2Payload::Raw(Bytes::from_static(b"[1, 2]"));
        assert!(matches!(
            payload.into_json(),
            Err(DirectCloudError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_json_payload_is_not_bytes() {
        let payload = V2Payload::Json(object(json!({"result": "success"})));
        assert!(matches!(
            payload.into_bytes(),
            Err(DirectCloudError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_invalid_utf8_text() {
        let payload = V2Payload::Raw(Bytes::from_static(&[0xff, 0xfe]));
        assert!(matches!(
            payload.into_text(),
            Err(DirectCloudError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_success_flag() {
        assert!(success_flag(&object(json!({"success": true}))));
        assert!(!success_flag(&object(json!({"success": "true"}))));
        assert!(!success_flag(&JsonObject::new()));
    }
}
