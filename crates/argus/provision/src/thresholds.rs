//! Health-rule threshold patching
//!
//! Thresholds live deep inside a loosely-typed document shared with many
//! unrelated fields (schedule, scope, enablement). The safe strategy is
//! full fetch, targeted in-place mutation, full replace; never a partial
//! write. The document is fetched fresh on every update.

use crate::error::{ProvisionError, ProvisionResult};
use argus_controller::ControllerApi;
use argus_types::{ResourceKind, SeverityCriteria};
use serde_json::Value;
use tracing::{info, warn};

/// Applies numeric threshold changes to one named health rule.
pub struct ThresholdPatcher<'a> {
    api: &'a dyn ControllerApi,
    app_id: u64,
}

impl<'a> ThresholdPatcher<'a> {
    pub fn new(api: &'a dyn ControllerApi, app_id: u64) -> Self {
        Self { api, app_id }
    }

    /// Overwrite the critical and/or warning `compareValue` of the rule
    /// named `rule_name`.
    ///
    /// Refused without a PUT when either severity carries more than one
    /// condition: multiple conditions means ambiguous threshold ownership,
    /// and guessing is worse than skipping. A requested severity with no
    /// matching condition is logged and skipped, not an error.
    pub async fn update(
        &self,
        rule_name: &str,
        critical: Option<&str>,
        warning: Option<&str>,
    ) -> ProvisionResult<()> {
        let critical = parse_threshold(critical)?;
        let warning = parse_threshold(warning)?;

        let rules = self
            .api
            .list_resources(self.app_id, ResourceKind::HealthRules)
            .await?;
        let Some(rule) = rules.iter().find(|rule| rule.name == rule_name) else {
            warn!(name = rule_name, "health rule not found");
            return Err(ProvisionError::RuleNotFound {
                name: rule_name.to_owned(),
            });
        };

        let mut document = self.api.health_rule(self.app_id, rule.id).await?;

        let condition_count = |severity: &Option<SeverityCriteria>| {
            severity
                .as_ref()
                .map_or(0, |criteria| criteria.conditions.len())
        };
        let (critical_conditions, warning_conditions) = document
            .eval_criterias
            .as_ref()
            .map_or((0, 0), |criterias| {
                (
                    condition_count(&criterias.critical),
                    condition_count(&criterias.warning),
                )
            });

        if critical_conditions > 1 || warning_conditions > 1 {
            warn!(
                name = rule_name,
                critical_conditions, warning_conditions, "multiple conditions; update skipped",
            );
            return Err(ProvisionError::AmbiguousConditions {
                name: rule_name.to_owned(),
            });
        }

        if let Some(criterias) = document.eval_criterias.as_mut() {
            if let Some(value) = critical {
                apply_threshold(criterias.critical.as_mut(), value, "critical", rule_name);
            }
            if let Some(value) = warning {
                apply_threshold(criterias.warning.as_mut(), value, "warning", rule_name);
            }
        } else if critical.is_some() || warning.is_some() {
            info!(
                name = rule_name,
                "rule has no evaluation criteria; nothing to update"
            );
        }

        self.api
            .replace_health_rule(self.app_id, rule.id, &document)
            .await?;
        info!(name = rule_name, "thresholds updated");
        Ok(())
    }
}

fn apply_threshold(
    severity: Option<&mut SeverityCriteria>,
    value: f64,
    label: &str,
    rule_name: &str,
) {
    let Some(criteria) = severity else {
        info!(
            name = rule_name,
            severity = label,
            "no {label} criteria; skipping {label} update",
        );
        return;
    };
    match criteria.sole_compare_value_mut() {
        Some(slot) => {
            let old = slot.clone();
            *slot = Value::from(value);
            info!(
                name = rule_name,
                severity = label,
                old = %old,
                new = value,
                "threshold updated",
            );
        }
        None => info!(
            name = rule_name,
            severity = label,
            "condition carries no compareValue; skipping {label} update",
        ),
    }
}

fn parse_threshold(raw: Option<&str>) -> ProvisionResult<Option<f64>> {
    match raw {
        None => Ok(None),
        Some(text) => text
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| ProvisionError::InvalidThreshold {
                value: text.to_owned(),
            }),
    }
}
