//! CLI and onboarding-plan configuration

use crate::error::{CliError, CliResult};
use argus_types::TierKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI configuration, loaded from a TOML file.
///
/// Every field is optional; command-line arguments and environment
/// variables take precedence.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CliConfig {
    /// Controller account name
    pub account: Option<String>,

    /// Deployment environment label
    pub environment: Option<String>,

    /// Path to the secrets JSON file
    pub secrets_path: Option<PathBuf>,

    /// Path to the onboarding plan JSON file
    pub plan_path: Option<PathBuf>,

    /// Directory holding payload templates
    pub templates_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Load configuration from file
    pub fn load(path: Option<&str>) -> CliResult<Self> {
        let config_path = match path {
            Some(p) => PathBuf::from(p),
            None => Self::default_config_path()?,
        };

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let config: CliConfig =
                toml::from_str(&contents).map_err(|e| CliError::Config(e.to_string()))?;
            Ok(config)
        } else {
            Ok(CliConfig::default())
        }
    }

    /// Get the default configuration file path
    fn default_config_path() -> CliResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CliError::Config("Cannot find config directory".into()))?;
        Ok(config_dir.join("argus").join("config.toml"))
    }
}

/// Onboarding plan: which templates to render per tier kind, plus the
/// action and policy template lists.
///
/// A missing or malformed plan file is fatal before any network call.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct PlanConfig {
    /// Tier types eligible for onboarding
    #[serde(default)]
    pub supported_tier_types: Vec<String>,

    /// Health-rule templates for JVM tiers
    #[serde(default)]
    pub jvm_health_rules: Vec<String>,

    /// Health-rule templates for CLR tiers
    #[serde(default)]
    pub clr_health_rules: Vec<String>,

    /// Health-rule templates for synthetic monitoring
    #[serde(default)]
    pub synthetic_health_rules: Vec<String>,

    /// Health-rule templates for any other tier type
    #[serde(default)]
    pub base_health_rules: Vec<String>,

    /// Action templates created on every onboarding pass
    #[serde(default)]
    pub base_actions: Vec<String>,

    /// Policy templates created after the health rules
    #[serde(default)]
    pub policies: Vec<String>,
}

impl PlanConfig {
    /// Load the plan from a JSON file.
    pub fn load(path: &Path) -> CliResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|err| {
            CliError::Config(format!("cannot read plan {}: {err}", path.display()))
        })?;
        serde_json::from_str(&contents)
            .map_err(|err| CliError::Config(format!("malformed plan {}: {err}", path.display())))
    }

    /// Health-rule template list for a tier kind.
    pub fn health_rule_templates(&self, tier: TierKind) -> &[String] {
        match tier {
            TierKind::Jvm => &self.jvm_health_rules,
            TierKind::Clr => &self.clr_health_rules,
            TierKind::Synthetic => &self.synthetic_health_rules,
            TierKind::Base => &self.base_health_rules,
        }
    }

    /// Whether a controller tier type is eligible for onboarding.
    pub fn supports_tier_type(&self, tier_type: &str) -> bool {
        self.supported_tier_types
            .iter()
            .any(|supported| supported == tier_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_missing_config_returns_default() {
        let config = CliConfig::load(Some("/nonexistent/path/config.toml")).unwrap();
        assert!(config.account.is_none());
        assert!(config.environment.is_none());
    }

    #[test]
    fn plan_selects_templates_by_tier_kind() {
        let plan = PlanConfig {
            jvm_health_rules: vec!["jvm_cpu.json.hbs".into()],
            base_health_rules: vec!["base_cpu.json.hbs".into()],
            ..PlanConfig::default()
        };
        assert_eq!(
            plan.health_rule_templates(TierKind::Jvm),
            ["jvm_cpu.json.hbs"]
        );
        assert_eq!(
            plan.health_rule_templates(TierKind::Base),
            ["base_cpu.json.hbs"]
        );
        assert!(plan.health_rule_templates(TierKind::Synthetic).is_empty());
    }

    #[test]
    fn plan_loads_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "supported_tier_types": ["Application Server"],
                "jvm_health_rules": ["jvm_cpu.json.hbs"],
                "base_actions": ["email.json.hbs"],
                "policies": ["default_policy.json.hbs"]
            }}"#
        )
        .unwrap();

        let plan = PlanConfig::load(file.path()).unwrap();
        assert!(plan.supports_tier_type("Application Server"));
        assert!(!plan.supports_tier_type("Node.js Server"));
        assert_eq!(plan.base_actions, ["email.json.hbs"]);
    }

    #[test]
    fn malformed_plan_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = PlanConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }
}
