//! Per-resource creation outcomes

use serde::Serialize;
use serde_json::Value;

/// Result of one resource-creation call against the controller.
///
/// Every create produces one of these; a batch produces one per payload in
/// input order. `success` is true for 201 Created and for a 409 Conflict on
/// a kind that tolerates conflicts (see [`crate::ResourceKind`]).
#[derive(Debug, Clone, Serialize)]
pub struct CreationOutcome {
    /// Whether the resource now exists remotely.
    pub success: bool,

    /// Resource name, when the payload carried one.
    pub name: Option<String>,

    /// HTTP status of the create call, when one was made.
    pub status: Option<u16>,

    /// Failure detail, or a short note for conflict-as-success.
    pub message: Option<String>,

    /// Response body on success, when the controller returned one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl CreationOutcome {
    /// 201 Created. An empty response body falls back to `{"name": ...}`.
    pub fn created(name: Option<String>, status: u16, data: Option<Value>) -> Self {
        let data = data.or_else(|| {
            name.as_deref()
                .map(|n| serde_json::json!({ "name": n }))
        });
        Self {
            success: true,
            name,
            status: Some(status),
            message: None,
            data,
        }
    }

    /// 409 Conflict folded into success: the resource already exists.
    pub fn already_exists(name: Option<String>) -> Self {
        let data = name.as_deref().map(|n| serde_json::json!({ "name": n }));
        Self {
            success: true,
            name,
            status: Some(409),
            message: Some("already exists".into()),
            data,
        }
    }

    /// Creation rejected by the controller with a status code.
    pub fn rejected(name: Option<String>, status: u16, message: impl Into<String>) -> Self {
        Self {
            success: false,
            name,
            status: Some(status),
            message: Some(message.into()),
            data: None,
        }
    }

    /// Creation failed before or without an HTTP status (bad payload,
    /// transport failure after retries).
    pub fn failed(name: Option<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            name,
            status: None,
            message: Some(message.into()),
            data: None,
        }
    }

    /// Name reported by the controller response, falling back to the
    /// submitted name.
    pub fn reported_name(&self) -> Option<&str> {
        self.data
            .as_ref()
            .and_then(|d| d.get("name"))
            .and_then(Value::as_str)
            .or(self.name.as_deref())
    }
}
