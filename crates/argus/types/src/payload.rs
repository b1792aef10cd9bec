//! Rendered-payload helpers

use serde_json::Value;

/// The `name` field of a rendered resource payload.
///
/// Returns `None` unless the payload is a JSON object carrying a non-empty
/// string `name` — the controller's idempotency key. Callers reject such
/// payloads locally, before any network call.
pub fn payload_name(payload: &Value) -> Option<&str> {
    payload
        .as_object()?
        .get("name")?
        .as_str()
        .filter(|name| !name.is_empty())
}
