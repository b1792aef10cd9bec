//! Threshold updates on one existing health rule

use crate::error::CliResult;
use crate::output::{print_success, print_warning};
use argus_controller::{ControllerApi, ControllerClient};
use argus_provision::ThresholdPatcher;
use clap::Args;

/// Arguments for the update-thresholds command
#[derive(Args)]
pub struct UpdateArgs {
    /// Monitored application name
    pub application: String,

    /// Health rule name to update
    #[arg(long = "rule", value_name = "NAME")]
    pub rule_name: String,

    /// New critical-severity threshold
    #[arg(long)]
    pub critical: Option<String>,

    /// New warning-severity threshold
    #[arg(long)]
    pub warning: Option<String>,
}

/// Patch the thresholds of one named health rule.
///
/// The application must resolve; everything after that is reported, not
/// escalated — an unknown rule or an ambiguous condition set leaves the
/// exit code at zero, matching the batch semantics of the other commands.
pub async fn execute(args: UpdateArgs, client: &ControllerClient) -> CliResult<()> {
    let app_id = client.application_id(&args.application).await?;

    let patcher = ThresholdPatcher::new(client, app_id);
    match patcher
        .update(
            &args.rule_name,
            args.critical.as_deref(),
            args.warning.as_deref(),
        )
        .await
    {
        Ok(()) => print_success(&format!("Thresholds updated for '{}'", args.rule_name)),
        Err(err) => print_warning(&err.to_string()),
    }
    Ok(())
}
