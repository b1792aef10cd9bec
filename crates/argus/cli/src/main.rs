//! ARGUS CLI - alerting configuration onboarding for APM controllers
//!
//! This CLI gives platform operators a terminal interface to:
//! - Onboard health rules, actions, and policies for an application tier
//! - Patch numeric thresholds on an existing health rule
//! - Create a tier's health rules on their own
//! - Tear down previously provisioned resources by name
//! - Check controller connectivity

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

mod commands;
mod config;
mod error;
mod output;
mod secrets;
mod templates;

use argus_controller::ControllerClient;
use commands::{create, onboard, status, teardown, update, RunSettings};
use config::CliConfig;
use error::{CliError, CliResult};

/// ARGUS CLI application
#[derive(Parser)]
#[command(name = "argus")]
#[command(about = "ARGUS - Alerting configuration onboarding for APM controllers", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "ARGUS_CONFIG")]
    config: Option<String>,

    /// Controller account name
    #[arg(short, long, env = "ARGUS_ACCOUNT")]
    account: Option<String>,

    /// Deployment environment label (e.g. prod, staging)
    #[arg(short, long, env = "ARGUS_ENV")]
    environment: Option<String>,

    /// Controller base URL (defaults to the SaaS URL for the account)
    #[arg(long, env = "ARGUS_CONTROLLER_URL")]
    controller_url: Option<Url>,

    /// Secrets file path
    #[arg(long, env = "ARGUS_SECRETS")]
    secrets: Option<PathBuf>,

    /// Onboarding plan path [default: plan.json]
    #[arg(long, env = "ARGUS_PLAN")]
    plan: Option<PathBuf>,

    /// Payload templates directory [default: templates]
    #[arg(long, env = "ARGUS_TEMPLATES")]
    templates: Option<PathBuf>,

    /// Output format (table, json, yaml)
    #[arg(short, long, default_value = "table")]
    output: output::OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Provision health rules, actions, and policies for a tier
    Onboard(onboard::OnboardArgs),

    /// Patch numeric thresholds on one existing health rule
    UpdateThresholds(update::UpdateArgs),

    /// Create a tier's health rules without actions or policies
    CreateHealthRules(create::CreateArgs),

    /// Delete previously provisioned resources by name
    Teardown(teardown::TeardownArgs),

    /// Check controller connectivity
    Status(status::StatusArgs),
}

#[tokio::main]
async fn main() -> CliResult<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    // Resolve settings from arguments and the optional config file
    let file_config = CliConfig::load(cli.config.as_deref())?;
    let account = cli
        .account
        .or(file_config.account)
        .ok_or_else(|| CliError::Config("controller account is required (--account)".into()))?;
    let environment = cli
        .environment
        .or(file_config.environment)
        .ok_or_else(|| CliError::Config("environment is required (--environment)".into()))?;
    let secrets_path = cli
        .secrets
        .or(file_config.secrets_path)
        .ok_or_else(|| CliError::Config("secrets file is required (--secrets)".into()))?;
    let plan_path = cli
        .plan
        .or(file_config.plan_path)
        .unwrap_or_else(|| PathBuf::from("plan.json"));
    let templates_dir = cli
        .templates
        .or(file_config.templates_dir)
        .unwrap_or_else(|| PathBuf::from("templates"));

    // Authenticate once; the session lives for the whole run
    let credentials = secrets::load_credentials(&secrets_path, &account, &environment)?;
    let client = ControllerClient::connect(&credentials, cli.controller_url).await?;

    let settings = RunSettings {
        environment,
        plan_path,
        templates_dir,
        output: cli.output,
    };

    // Execute command
    match cli.command {
        Commands::Onboard(args) => onboard::execute(args, &client, &settings).await,
        Commands::UpdateThresholds(args) => update::execute(args, &client).await,
        Commands::CreateHealthRules(args) => create::execute(args, &client, &settings).await,
        Commands::Teardown(args) => teardown::execute(args, &client, &settings).await,
        Commands::Status(args) => status::execute(args, &client).await,
    }
}
