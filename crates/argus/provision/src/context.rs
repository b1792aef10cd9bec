//! Run setup: application and tier resolution
//!
//! Setup failures are fatal — nothing downstream is meaningful without a
//! resolved application id, so errors here propagate instead of becoming
//! outcome values.

use crate::error::{ProvisionError, ProvisionResult};
use argus_controller::ControllerApi;
use argus_types::TierKind;
use tracing::info;

/// Resolved identifiers for one provisioning run.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Numeric application (container) id
    pub app_id: u64,
    /// Tier classification driving template selection
    pub tier: TierKind,
    /// Raw controller tier type, absent for synthetic runs
    pub tier_type: Option<String>,
}

/// Resolve the application id and tier kind for a run.
///
/// Synthetic monitoring skips the tier lookup entirely. Non-synthetic
/// runs require a tier name; an unknown application or tier aborts the
/// run.
pub async fn resolve_context(
    api: &dyn ControllerApi,
    application: &str,
    tier_name: Option<&str>,
    synthetic: bool,
) -> ProvisionResult<RunContext> {
    let app_id = api.application_id(application).await?;
    info!(application, app_id, "resolved application");

    if synthetic {
        return Ok(RunContext {
            app_id,
            tier: TierKind::Synthetic,
            tier_type: None,
        });
    }

    let tier_name = tier_name.ok_or(ProvisionError::TierRequired)?;
    let tier_type = api.tier_type(app_id, tier_name).await?;
    let tier = TierKind::classify(false, Some(&tier_type));
    info!(tier_name, tier_type, kind = %tier, "resolved tier");

    Ok(RunContext {
        app_id,
        tier,
        tier_type: Some(tier_type),
    })
}
