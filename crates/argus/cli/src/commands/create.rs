//! One-off health-rule creation

use super::RunSettings;
use crate::config::PlanConfig;
use crate::error::CliResult;
use crate::output::{print_output, print_success, print_warning, OutcomeRow};
use crate::templates::{RenderParams, TemplateRenderer};
use argus_controller::ControllerClient;
use argus_provision::{resolve_context, ResourceCreator};
use argus_types::ResourceKind;
use clap::Args;

/// Arguments for the create-health-rules command
#[derive(Args)]
pub struct CreateArgs {
    /// Monitored application name
    pub application: String,

    /// Tier whose health rules to create (required unless --synthetic)
    #[arg(short, long)]
    pub tier: Option<String>,

    /// Create the synthetic-monitoring rule set instead
    #[arg(long)]
    pub synthetic: bool,

    /// Business unit name used in resource names
    #[arg(short, long, default_value = "")]
    pub business_name: String,

    /// Notification recipients (comma separated or repeated)
    #[arg(long = "email", value_delimiter = ',')]
    pub emails: Vec<String>,
}

/// Create the health rules for one tier, without actions or policies.
pub async fn execute(
    args: CreateArgs,
    client: &ControllerClient,
    settings: &RunSettings,
) -> CliResult<()> {
    let plan = PlanConfig::load(&settings.plan_path)?;
    let renderer = TemplateRenderer::new(&settings.templates_dir);

    let context = resolve_context(
        client,
        &args.application,
        args.tier.as_deref(),
        args.synthetic,
    )
    .await?;

    let params = RenderParams {
        environment: settings.environment.clone(),
        business_name: args.business_name.to_uppercase(),
        application_name: args.application.clone(),
        tier_name: args.tier.clone().unwrap_or_default(),
        user_email: args.emails.clone(),
    };

    let payloads = renderer.render_all(plan.health_rule_templates(context.tier), &params)?;
    let creator = ResourceCreator::new(client, context.app_id);
    let outcomes = creator
        .create_batch(ResourceKind::HealthRules, &payloads)
        .await;

    let failed = outcomes.iter().filter(|outcome| !outcome.success).count();
    let rows: Vec<OutcomeRow> = outcomes
        .iter()
        .map(|outcome| OutcomeRow::from_outcome(ResourceKind::HealthRules, outcome))
        .collect();
    print_output(rows, settings.output);

    if failed == 0 {
        print_success("health rules created or confirmed");
    } else {
        print_warning(&format!("{failed} health rule(s) failed; see output above"));
    }
    Ok(())
}
