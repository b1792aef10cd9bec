//! Alerting resource kinds

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three alerting resource namespaces exposed by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Health rules (metric threshold / baseline definitions)
    HealthRules,
    /// Alert actions (notification behaviors)
    Actions,
    /// Alerting policies (bindings of rule violations to actions)
    Policies,
}

impl ResourceKind {
    /// REST path segment under `alerting/rest/v1/applications/{id}/`.
    pub fn path_segment(&self) -> &'static str {
        match self {
            ResourceKind::HealthRules => "health-rules",
            ResourceKind::Actions => "actions",
            ResourceKind::Policies => "policies",
        }
    }

    /// Human label used in logs and outcome messages.
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::HealthRules => "health rule",
            ResourceKind::Actions => "action",
            ResourceKind::Policies => "policy",
        }
    }

    /// Whether a 409 Conflict on creation is folded into success.
    ///
    /// Only health rules get this treatment: re-running onboarding must
    /// tolerate rules that already exist. A conflict on an action or a
    /// policy is a hard failure.
    pub fn tolerates_conflict(&self) -> bool {
        matches!(self, ResourceKind::HealthRules)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Element of a resource list endpoint; the same shape is returned for
/// health rules, actions, and policies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceSummary {
    /// Remote numeric identifier
    pub id: u64,
    /// Resource name (unique per application and kind)
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_segments_match_controller_namespaces() {
        assert_eq!(ResourceKind::HealthRules.path_segment(), "health-rules");
        assert_eq!(ResourceKind::Actions.path_segment(), "actions");
        assert_eq!(ResourceKind::Policies.path_segment(), "policies");
    }

    #[test]
    fn only_health_rules_tolerate_conflict() {
        assert!(ResourceKind::HealthRules.tolerates_conflict());
        assert!(!ResourceKind::Actions.tolerates_conflict());
        assert!(!ResourceKind::Policies.tolerates_conflict());
    }
}
