//! Best-effort teardown of provisioned resources

use super::RunSettings;
use crate::error::CliResult;
use crate::output::{print_output, print_success, print_warning, DeletionRow};
use argus_controller::{ControllerApi, ControllerClient};
use argus_provision::teardown;
use argus_types::ResourceKind;
use clap::Args;

/// Arguments for the teardown command
#[derive(Args)]
pub struct TeardownArgs {
    /// Monitored application name
    pub application: String,

    /// Health rule names to delete (repeatable)
    #[arg(long = "health-rule", value_name = "NAME")]
    pub health_rules: Vec<String>,

    /// Action names to delete (repeatable)
    #[arg(long = "action", value_name = "NAME")]
    pub actions: Vec<String>,

    /// Policy names to delete (repeatable)
    #[arg(long = "policy", value_name = "NAME")]
    pub policies: Vec<String>,
}

/// Delete the named resources, best effort.
///
/// Policies go first (they reference rules and actions), then actions,
/// then health rules. Names already absent are skipped; a failed delete
/// logs and moves on.
pub async fn execute(
    args: TeardownArgs,
    client: &ControllerClient,
    settings: &RunSettings,
) -> CliResult<()> {
    let app_id = client.application_id(&args.application).await?;

    let groups: [(ResourceKind, &[String]); 3] = [
        (ResourceKind::Policies, &args.policies),
        (ResourceKind::Actions, &args.actions),
        (ResourceKind::HealthRules, &args.health_rules),
    ];

    let mut rows = Vec::new();
    let mut failed = 0usize;
    for (kind, names) in groups {
        if names.is_empty() {
            continue;
        }
        let outcomes = teardown(client, app_id, kind, names).await?;
        failed += outcomes.iter().filter(|outcome| !outcome.success).count();
        rows.extend(
            outcomes
                .iter()
                .map(|outcome| DeletionRow::from_outcome(kind, outcome)),
        );
    }

    if rows.is_empty() {
        print_warning("nothing to delete; pass --health-rule/--action/--policy names");
        return Ok(());
    }

    print_output(rows, settings.output);
    if failed == 0 {
        print_success("teardown complete");
    } else {
        print_warning(&format!("{failed} deletion(s) failed; see output above"));
    }
    Ok(())
}
