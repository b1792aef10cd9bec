//! Core types for ARGUS alerting-configuration provisioning
//!
//! Shared by the controller client, the provisioning core, and the CLI:
//! - Resource kinds and per-resource creation outcomes
//! - The typed health-rule document used for threshold patching
//! - Tier classification
//! - Controller credentials

mod credentials;
mod health_rule;
mod outcome;
mod payload;
mod resource;
mod tier;

pub use credentials::Credentials;
pub use health_rule::{
    Condition, EvalCriterias, EvalDetail, HealthRuleDocument, MetricEvalDetail, SeverityCriteria,
};
pub use outcome::CreationOutcome;
pub use payload::payload_name;
pub use resource::{ResourceKind, ResourceSummary};
pub use tier::TierKind;
