//! Controller connectivity check

use crate::error::CliResult;
use crate::output::{print_info, print_success};
use argus_controller::{ControllerApi, ControllerClient};
use clap::Args;

/// Arguments for the status command
#[derive(Args)]
pub struct StatusArgs {
    /// Application name to resolve as a deeper check
    pub application: Option<String>,
}

/// Verify authentication and, optionally, application resolution.
pub async fn execute(args: StatusArgs, client: &ControllerClient) -> CliResult<()> {
    // Reaching this point means the token exchange already succeeded.
    print_success("controller session established");

    if let Some(application) = args.application {
        let app_id = client.application_id(&application).await?;
        print_info(&format!("application '{application}' has id {app_id}"));
    }
    Ok(())
}
