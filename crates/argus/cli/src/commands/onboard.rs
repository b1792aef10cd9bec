//! Full onboarding: health rules, actions, and policies for one tier

use super::RunSettings;
use crate::config::PlanConfig;
use crate::error::CliResult;
use crate::output::{print_output, print_success, print_warning, OutcomeRow};
use crate::templates::{RenderParams, TemplateRenderer};
use argus_controller::ControllerClient;
use argus_provision::{resolve_context, PolicyLinker, ResourceCreator};
use argus_types::{CreationOutcome, ResourceKind};
use clap::Args;

/// Arguments for the onboard command
#[derive(Args)]
pub struct OnboardArgs {
    /// Monitored application name
    pub application: String,

    /// Tier to onboard (required unless --synthetic)
    #[arg(short, long)]
    pub tier: Option<String>,

    /// Onboard synthetic monitoring instead of a tier
    #[arg(long)]
    pub synthetic: bool,

    /// Business unit name used in resource names
    #[arg(short, long, default_value = "")]
    pub business_name: String,

    /// Notification recipients (comma separated or repeated)
    #[arg(long = "email", value_delimiter = ',')]
    pub emails: Vec<String>,
}

/// Run a full onboarding pass.
///
/// Setup failures (plan, application, tier) abort the run; per-resource
/// failures are reported in the outcome table and do not affect the exit
/// code.
pub async fn execute(
    args: OnboardArgs,
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

    if let Some(tier_type) = context.tier_type.as_deref() {
        if !plan.supports_tier_type(tier_type) {
            print_warning(&format!("skipping unsupported tier type: {tier_type}"));
            return Ok(());
        }
    }

    let params = RenderParams {
        environment: settings.environment.clone(),
        business_name: args.business_name.to_uppercase(),
        application_name: args.application.clone(),
        tier_name: args.tier.clone().unwrap_or_default(),
        user_email: args.emails.clone(),
    };

    let action_payloads = renderer.render_all(&plan.base_actions, &params)?;
    let rule_payloads = renderer.render_all(plan.health_rule_templates(context.tier), &params)?;
    let policy_payloads = renderer.render_all(&plan.policies, &params)?;

    let creator = ResourceCreator::new(client, context.app_id);
    let action_outcomes = creator
        .create_batch(ResourceKind::Actions, &action_payloads)
        .await;

    // Health rules land strictly before the policies that reference them.
    let linker = PolicyLinker::new(client, context.app_id);
    let provision = linker.build_and_create(&rule_payloads, policy_payloads).await;

    let all: Vec<(ResourceKind, &CreationOutcome)> = action_outcomes
        .iter()
        .map(|outcome| (ResourceKind::Actions, outcome))
        .chain(
            provision
                .rule_outcomes
                .iter()
                .map(|outcome| (ResourceKind::HealthRules, outcome)),
        )
        .chain(
            provision
                .policy_outcomes
                .iter()
                .map(|outcome| (ResourceKind::Policies, outcome)),
        )
        .collect();

    let failed = all.iter().filter(|(_, outcome)| !outcome.success).count();
    let rows: Vec<OutcomeRow> = all
        .iter()
        .map(|(kind, outcome)| OutcomeRow::from_outcome(*kind, outcome))
        .collect();
    print_output(rows, settings.output);

    if failed == 0 {
        print_success(&format!(
            "onboarding complete for '{}' ({})",
            args.application, context.tier,
        ));
    } else {
        print_warning(&format!("{failed} resource(s) failed; see output above"));
    }
    Ok(())
}
