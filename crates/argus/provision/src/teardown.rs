//! Best-effort teardown
//!
//! Deletion flows receive human-provided names; the controller speaks
//! numeric ids. Names are resolved against the remote collection, names
//! already gone are skipped with a warning, and each delete is attempted
//! independently — teardown is best effort, not all-or-nothing.

use crate::error::ProvisionResult;
use argus_controller::ControllerApi;
use argus_types::ResourceKind;
use std::collections::HashMap;
use tracing::{info, warn};

/// Result of one attempted deletion.
#[derive(Debug)]
pub struct DeletionOutcome {
    /// The requested resource name
    pub name: String,
    /// Resolved remote id, when the name existed
    pub id: Option<u64>,
    /// False only for a failed delete call; an absent name is success
    pub success: bool,
    /// Failure detail or skip note
    pub message: Option<String>,
}

async fn name_lookup(
    api: &dyn ControllerApi,
    app_id: u64,
    kind: ResourceKind,
) -> ProvisionResult<HashMap<String, u64>> {
    let summaries = api.list_resources(app_id, kind).await?;
    Ok(summaries
        .into_iter()
        .map(|summary| (summary.name, summary.id))
        .collect())
}

/// Map resource names to remote ids, preserving input order.
///
/// Names absent remotely are skipped with a warning; deleting something
/// already gone is not a failure.
pub async fn resolve_ids(
    api: &dyn ControllerApi,
    app_id: u64,
    kind: ResourceKind,
    names: &[String],
) -> ProvisionResult<Vec<u64>> {
    let lookup = name_lookup(api, app_id, kind).await?;
    Ok(names
        .iter()
        .filter_map(|name| match lookup.get(name.as_str()) {
            Some(id) => Some(*id),
            None => {
                warn!(kind = %kind, name = %name, "not present remotely; skipping");
                None
            }
        })
        .collect())
}

/// Delete the named resources, one independent attempt per name.
pub async fn teardown(
    api: &dyn ControllerApi,
    app_id: u64,
    kind: ResourceKind,
    names: &[String],
) -> ProvisionResult<Vec<DeletionOutcome>> {
    let lookup = name_lookup(api, app_id, kind).await?;

    let mut outcomes = Vec::with_capacity(names.len());
    for name in names {
        let outcome = match lookup.get(name.as_str()) {
            None => {
                warn!(kind = %kind, name = %name, "not present remotely; nothing to delete");
                DeletionOutcome {
                    name: name.clone(),
                    id: None,
                    success: true,
                    message: Some("not present remotely".into()),
                }
            }
            Some(&id) => match api.delete_resource(app_id, kind, id).await {
                Ok(()) => {
                    info!(kind = %kind, name = %name, id, "deleted");
                    DeletionOutcome {
                        name: name.clone(),
                        id: Some(id),
                        success: true,
                        message: None,
                    }
                }
                Err(err) => {
                    warn!(kind = %kind, name = %name, id, error = %err, "delete failed");
                    DeletionOutcome {
                        name: name.clone(),
                        id: Some(id),
                        success: false,
                        message: Some(err.to_string()),
                    }
                }
            },
        };
        outcomes.push(outcome);
    }
    Ok(outcomes)
}
