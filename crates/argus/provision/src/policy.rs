//! Policy assembly and creation
//!
//! A policy may scope itself to specific health rules by name; those rules
//! must exist before the policy is posted. The linker creates (or
//! confirms) the rules, threads the resulting names into the policy
//! payload, and then posts the policy — once, with no second rule pass.

use crate::creator::ResourceCreator;
use argus_controller::ControllerApi;
use argus_types::{payload_name, CreationOutcome, ResourceKind};
use serde_json::{Map, Value};
use tracing::{error, info, warn};

/// Scope discriminator that requires a populated rule-name list.
const SPECIFIC_HEALTH_RULES: &str = "SPECIFIC_HEALTH_RULES";

/// Outcomes of one linked provisioning pass.
///
/// Rule outcomes are reported alongside, never merged into, the policy
/// outcomes.
#[derive(Debug)]
pub struct PolicyProvision {
    /// One outcome per health-rule payload, in input order
    pub rule_outcomes: Vec<CreationOutcome>,
    /// One outcome per policy payload, in input order
    pub policy_outcomes: Vec<CreationOutcome>,
}

/// Creates health rules and the policies that reference them.
pub struct PolicyLinker<'a> {
    creator: ResourceCreator<'a>,
}

impl<'a> PolicyLinker<'a> {
    pub fn new(api: &'a dyn ControllerApi, app_id: u64) -> Self {
        Self {
            creator: ResourceCreator::new(api, app_id),
        }
    }

    /// Create (or confirm) the given health rules, then each policy with
    /// the successful rule names injected into its health-rule scope.
    ///
    /// Rules are created exactly once, strictly before any policy; a
    /// policy referencing them is posted even when every rule failed
    /// (the controller owns that verdict).
    pub async fn build_and_create(
        &self,
        rule_payloads: &[Value],
        policy_payloads: Vec<Value>,
    ) -> PolicyProvision {
        let rule_outcomes = self
            .creator
            .create_batch(ResourceKind::HealthRules, rule_payloads)
            .await;

        let names = dedup_preserving_order(
            rule_outcomes
                .iter()
                .filter(|outcome| outcome.success)
                .filter_map(|outcome| outcome.reported_name())
                .map(str::to_owned)
                .collect(),
        );
        info!(?names, "health rules available to policies");

        let mut policy_outcomes = Vec::with_capacity(policy_payloads.len());
        for policy in policy_payloads {
            policy_outcomes.push(self.create_linked(&names, policy).await);
        }

        PolicyProvision {
            rule_outcomes,
            policy_outcomes,
        }
    }

    /// Inject `names` into one policy's health-rule scope and create it.
    /// Policies do not tolerate conflicts; a 409 here is a failure.
    async fn create_linked(&self, names: &[String], mut policy: Value) -> CreationOutcome {
        let policy_name = payload_name(&policy).map(str::to_owned);

        let Some(scope) = health_rule_scope_mut(&mut policy) else {
            error!(
                name = policy_name.as_deref().unwrap_or("<unnamed>"),
                "policy payload missing events.healthRuleEvents.healthRuleScope",
            );
            return CreationOutcome::failed(
                policy_name,
                "policy payload missing events.healthRuleEvents.healthRuleScope",
            );
        };

        let wants_specific_rules = scope
            .get("healthRuleScopeType")
            .and_then(Value::as_str)
            .map(|scope_type| scope_type == SPECIFIC_HEALTH_RULES)
            .unwrap_or(false);

        if wants_specific_rules {
            if names.is_empty() {
                warn!(
                    name = policy_name.as_deref().unwrap_or("<unnamed>"),
                    "policy requests specific health rules but none were created",
                );
            }
            scope.insert(
                "healthRules".into(),
                Value::Array(names.iter().cloned().map(Value::from).collect()),
            );
        }

        self.creator.create(ResourceKind::Policies, &policy).await
    }
}

fn health_rule_scope_mut(policy: &mut Value) -> Option<&mut Map<String, Value>> {
    policy
        .get_mut("events")?
        .get_mut("healthRuleEvents")?
        .get_mut("healthRuleScope")?
        .as_object_mut()
}

/// Drop repeated names, keeping the first occurrence of each.
///
/// A rule template list may legitimately repeat a name when reused across
/// tiers; the policy must not list it twice.
fn dedup_preserving_order(names: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_keeps_first_seen_order() {
        let names = vec!["A".into(), "B".into(), "A".into(), "C".into()];
        assert_eq!(dedup_preserving_order(names), vec!["A", "B", "C"]);
    }

    #[test]
    fn scope_lookup_requires_full_path() {
        let mut policy = serde_json::json!({ "name": "p", "events": {} });
        assert!(health_rule_scope_mut(&mut policy).is_none());

        let mut policy = serde_json::json!({
            "events": { "healthRuleEvents": { "healthRuleScope": {
                "healthRuleScopeType": "ALL_HEALTH_RULES"
            }}}
        });
        assert!(health_rule_scope_mut(&mut policy).is_some());
    }
}
