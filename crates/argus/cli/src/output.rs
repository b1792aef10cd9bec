//! Output formatting utilities

use argus_provision::DeletionOutcome;
use argus_types::{CreationOutcome, ResourceKind};
use colored::*;
use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Print a vector of items in the specified format
pub fn print_output<T: Serialize + Tabled>(data: Vec<T>, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if data.is_empty() {
                println!("{}", "No results".dimmed());
            } else {
                let table = Table::new(data).to_string();
                println!("{}", table);
            }
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&data) {
            Ok(rendered) => println!("{}", rendered),
            Err(err) => print_error(&format!("cannot render output: {err}")),
        },
        OutputFormat::Yaml => match serde_yaml::to_string(&data) {
            Ok(rendered) => println!("{}", rendered),
            Err(err) => print_error(&format!("cannot render output: {err}")),
        },
    }
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// Table row for per-resource creation outcomes
#[derive(Debug, Serialize, Tabled)]
pub struct OutcomeRow {
    /// Resource kind
    pub kind: String,
    /// Resource name
    pub name: String,
    /// HTTP status of the create call
    pub status: String,
    /// created / exists / failed
    pub result: String,
    /// Failure detail
    pub detail: String,
}

impl OutcomeRow {
    pub fn from_outcome(kind: ResourceKind, outcome: &CreationOutcome) -> Self {
        let result = match (outcome.success, outcome.status) {
            (true, Some(409)) => "exists",
            (true, _) => "created",
            (false, _) => "failed",
        };
        Self {
            kind: kind.label().to_string(),
            name: outcome
                .reported_name()
                .unwrap_or("<unnamed>")
                .to_string(),
            status: outcome
                .status
                .map(|status| status.to_string())
                .unwrap_or_else(|| "-".into()),
            result: result.into(),
            detail: match outcome.success {
                true => String::new(),
                false => outcome.message.clone().unwrap_or_default(),
            },
        }
    }
}

/// Table row for teardown outcomes
#[derive(Debug, Serialize, Tabled)]
pub struct DeletionRow {
    /// Resource kind
    pub kind: String,
    /// Resource name
    pub name: String,
    /// Remote id, when the name resolved
    pub id: String,
    /// deleted / skipped / failed
    pub result: String,
    /// Failure detail or skip note
    pub detail: String,
}

impl DeletionRow {
    pub fn from_outcome(kind: ResourceKind, outcome: &DeletionOutcome) -> Self {
        let result = match (outcome.success, outcome.id) {
            (true, Some(_)) => "deleted",
            (true, None) => "skipped",
            (false, _) => "failed",
        };
        Self {
            kind: kind.label().to_string(),
            name: outcome.name.clone(),
            id: outcome
                .id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".into()),
            result: result.into(),
            detail: outcome.message.clone().unwrap_or_default(),
        }
    }
}
