//! Abstract controller API
//!
//! The provisioning core depends on this trait rather than the concrete
//! HTTP client, so its reconciliation logic can be exercised against a
//! recording fake.

use crate::error::ControllerResult;
use argus_types::{HealthRuleDocument, ResourceKind, ResourceSummary};
use async_trait::async_trait;
use serde_json::Value;

/// Outcome of a create call, including non-2xx business statuses.
///
/// Creation endpoints speak in status codes (201 Created, 409 Conflict);
/// those are data to the caller, not errors, so the client returns them
/// here instead of folding them into `ControllerError`.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Parsed JSON body, when the response body was JSON
    pub body: Option<Value>,
    /// Raw body text (empty when the response had no body)
    pub text: String,
}

impl ApiResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Failure message: the body's `message` field when present, otherwise
    /// the raw response text.
    pub fn message(&self) -> String {
        self.body
            .as_ref()
            .and_then(|body| body.get("message"))
            .and_then(Value::as_str)
            .map(str::to_owned)
            .unwrap_or_else(|| self.text.clone())
    }
}

/// Typed verbs against the controller's resource namespaces.
#[async_trait]
pub trait ControllerApi: Send + Sync {
    /// Resolve an application name to its numeric identifier.
    async fn application_id(&self, name: &str) -> ControllerResult<u64>;

    /// Resolve a tier's runtime type within an application.
    async fn tier_type(&self, app_id: u64, tier_name: &str) -> ControllerResult<String>;

    /// List a resource collection as `{id, name}` summaries.
    async fn list_resources(
        &self,
        app_id: u64,
        kind: ResourceKind,
    ) -> ControllerResult<Vec<ResourceSummary>>;

    /// Fetch one health rule's full document.
    async fn health_rule(&self, app_id: u64, rule_id: u64)
        -> ControllerResult<HealthRuleDocument>;

    /// Create a resource; business statuses (201, 409, ...) come back in
    /// the response, transport failures as errors.
    async fn create_resource(
        &self,
        app_id: u64,
        kind: ResourceKind,
        payload: &Value,
    ) -> ControllerResult<ApiResponse>;

    /// Replace one health rule's full document.
    async fn replace_health_rule(
        &self,
        app_id: u64,
        rule_id: u64,
        document: &HealthRuleDocument,
    ) -> ControllerResult<()>;

    /// Delete one resource by id.
    async fn delete_resource(
        &self,
        app_id: u64,
        kind: ResourceKind,
        resource_id: u64,
    ) -> ControllerResult<()>;
}
