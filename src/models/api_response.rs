use serde::Deserialize;
use serde_json::Value;

use crate::{ControllerError, ControllerResult};

/// Metadata field of the controller's response envelope.
#[derive(Debug, Deserialize)]
pub struct ApiMeta {
    /// Result code. "ok" indicates success.
    pub rc: String,

    /// Error message, if any.
    pub msg: Option<String>,
}

/// Unwraps a decoded response body per the controller's envelope rules.
///
/// If `meta.rc` is anything other than `"ok"` the call failed and `meta.msg`
/// carries the controller's error text. Otherwise a present `data` field is
/// returned as-is; a body with no `data` key is returned whole.
pub(crate) fn decode_envelope(body: Value) -> ControllerResult<Value> {
    if let Some(meta_value) = body.get("meta") {
        let meta: ApiMeta = serde_json::from_value(meta_value.clone())?;
        if meta.rc != "ok" {
            return Err(ControllerError::ApiError(
                meta.msg.unwrap_or_else(|| "unknown controller error".into()),
            ));
        }
    }
    match body {
        Value::Object(mut obj) if obj.contains_key("data") => {
            // presence checked above
            Ok(obj.remove("data").unwrap())
        }
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn ok_envelope_unwraps_data_unchanged() {
        let body = json!({
            "meta": { "rc": "ok" },
            "data": [{ "mac": "00:11:22:33:44:55", "state": 1 }]
        });
        let data = decode_envelope(body).unwrap();
        assert_eq!(data, json!([{ "mac": "00:11:22:33:44:55", "state": 1 }]));
    }

    #[test]
    fn error_envelope_carries_server_message() {
        let body = json!({
            "meta": { "rc": "error", "msg": "api.err.LoginRequired" }
        });
        match decode_envelope(body) {
            Err(ControllerError::ApiError(msg)) => assert_eq!(msg, "api.err.LoginRequired"),
            other => panic!("expected ApiError, got {other:?}"),
        }
    }

    #[test]
    fn error_envelope_without_message_gets_a_fallback() {
        let body = json!({ "meta": { "rc": "error" } });
        match decode_envelope(body) {
            Err(ControllerError::ApiError(msg)) => assert_eq!(msg, "unknown controller error"),
            other => panic!("expected ApiError, got {other:?}"),
        }
    }

    #[test]
    fn bare_object_passes_through_whole() {
        let body = json!({ "uptime": 1234, "version": "3.2.10" });
        let out = decode_envelope(body.clone()).unwrap();
        assert_eq!(out, body);
    }

    #[test]
    fn ok_envelope_without_data_returns_envelope_itself() {
        let body = json!({ "meta": { "rc": "ok" } });
        let out = decode_envelope(body.clone()).unwrap();
        assert_eq!(out, body);
    }
}
