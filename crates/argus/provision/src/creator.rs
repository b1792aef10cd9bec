//! Idempotent resource creation

use argus_controller::ControllerApi;
use argus_types::{payload_name, CreationOutcome, ResourceKind};
use serde_json::Value;
use tracing::{debug, info, warn};

/// Creates named alerting resources, folding "already exists" into success
/// for kinds that tolerate conflicts.
///
/// Every failure mode becomes a [`CreationOutcome`] value; nothing here
/// aborts a batch.
pub struct ResourceCreator<'a> {
    api: &'a dyn ControllerApi,
    app_id: u64,
}

impl<'a> ResourceCreator<'a> {
    pub fn new(api: &'a dyn ControllerApi, app_id: u64) -> Self {
        Self { api, app_id }
    }

    /// Create one resource from a rendered payload.
    ///
    /// Payloads without a non-empty string `name` are rejected locally,
    /// before any network call.
    pub async fn create(&self, kind: ResourceKind, payload: &Value) -> CreationOutcome {
        let Some(name) = payload_name(payload) else {
            warn!(kind = %kind, "rejecting payload without a usable 'name' field");
            return CreationOutcome::failed(
                None,
                format!("{kind} payload must be a JSON object with a non-empty 'name'"),
            );
        };
        let name = name.to_owned();

        debug!(kind = %kind, name = %name, app_id = self.app_id, "creating resource");
        match self.api.create_resource(self.app_id, kind, payload).await {
            Ok(response) if response.status == 409 && kind.tolerates_conflict() => {
                info!(kind = %kind, name = %name, "already exists; treating as success");
                CreationOutcome::already_exists(Some(name))
            }
            Ok(response) if response.status == 201 => {
                info!(kind = %kind, name = %name, "created");
                CreationOutcome::created(Some(name), response.status, response.body.clone())
            }
            Ok(response) => {
                let message = response.message();
                warn!(
                    kind = %kind,
                    name = %name,
                    status = response.status,
                    message = %message,
                    "creation failed",
                );
                CreationOutcome::rejected(Some(name), response.status, message)
            }
            Err(err) => {
                warn!(kind = %kind, name = %name, error = %err, "creation failed");
                CreationOutcome::failed(Some(name), err.to_string())
            }
        }
    }

    /// Create a batch of resources, one outcome per payload in input
    /// order. A failing element does not abort the rest.
    pub async fn create_batch(
        &self,
        kind: ResourceKind,
        payloads: &[Value],
    ) -> Vec<CreationOutcome> {
        let total = payloads.len();
        let mut outcomes = Vec::with_capacity(total);
        for (index, payload) in payloads.iter().enumerate() {
            info!(
                kind = %kind,
                app_id = self.app_id,
                "creating {} {}/{}",
                kind,
                index + 1,
                total,
            );
            let outcome = self.create(kind, payload).await;
            if !outcome.success {
                warn!(
                    kind = %kind,
                    "{} {}/{} failed: {}",
                    kind,
                    index + 1,
                    total,
                    outcome.message.as_deref().unwrap_or("unknown error"),
                );
            }
            outcomes.push(outcome);
        }
        outcomes
    }
}
