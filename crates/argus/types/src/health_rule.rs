//! Typed health-rule document
//!
//! The controller's health-rule detail document is large and loosely
//! specified; the threshold patcher only cares about the nested
//! `evalCriterias` tree. Every struct here carries a flattened extra-field
//! map so a fetch → mutate → replace round trip preserves all fields the
//! patcher does not touch.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Full remote representation of one health rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthRuleDocument {
    /// Rule name
    pub name: String,

    /// Evaluation criteria tree; absent on rules without criteria.
    #[serde(
        rename = "evalCriterias",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub eval_criterias: Option<EvalCriterias>,

    /// Fields the patcher never touches (schedule, scope, enablement, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `evalCriterias` block: one optional criteria set per severity.
///
/// The controller serializes both severity keys even when null, so neither
/// is skipped on output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvalCriterias {
    /// Critical-severity criteria
    #[serde(rename = "criticalCriteria", default)]
    pub critical: Option<SeverityCriteria>,

    /// Warning-severity criteria
    #[serde(rename = "warningCriteria", default)]
    pub warning: Option<SeverityCriteria>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Criteria for one severity: an ordered condition list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeverityCriteria {
    /// Conditions evaluated for this severity
    #[serde(default)]
    pub conditions: Vec<Condition>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One condition inside a severity block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Condition {
    /// Evaluation detail; absent on malformed rules.
    #[serde(rename = "evalDetail", default, skip_serializing_if = "Option::is_none")]
    pub eval_detail: Option<EvalDetail>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `evalDetail` block of a condition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalDetail {
    /// Metric comparison detail; absent for non-metric detail types.
    #[serde(
        rename = "metricEvalDetail",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub metric_eval_detail: Option<MetricEvalDetail>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `metricEvalDetail` block carrying the comparison threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricEvalDetail {
    /// Comparison threshold. Kept as a raw JSON value so an untouched
    /// integer round-trips as an integer; the patcher writes floats.
    #[serde(
        rename = "compareValue",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub compare_value: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SeverityCriteria {
    /// The single condition's threshold slot, when exactly one condition
    /// exists and it carries a `compareValue`.
    pub fn sole_compare_value_mut(&mut self) -> Option<&mut Value> {
        match self.conditions.as_mut_slice() {
            [condition] => condition
                .eval_detail
                .as_mut()?
                .metric_eval_detail
                .as_mut()?
                .compare_value
                .as_mut(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rule() -> Value {
        serde_json::json!({
            "id": 220,
            "name": "APP1 - DB Calls Per Min",
            "enabled": true,
            "useDataFromLastNMinutes": 30,
            "scheduleName": "Always",
            "evalCriterias": {
                "criticalCriteria": {
                    "conditionAggregationType": "ALL",
                    "conditionExpression": null,
                    "conditions": [{
                        "name": "High Number of Connections",
                        "shortName": "A",
                        "evaluateToTrueOnNoData": false,
                        "evalDetail": {
                            "evalDetailType": "SINGLE_METRIC",
                            "metricPath": "DB|KPI|Number of Connections",
                            "metricEvalDetail": {
                                "metricEvalDetailType": "SPECIFIC_TYPE",
                                "compareCondition": "GREATER_THAN_SPECIFIC_VALUE",
                                "compareValue": 200000
                            }
                        },
                        "triggerEnabled": true,
                        "minimumTriggers": 15
                    }]
                },
                "warningCriteria": null
            }
        })
    }

    #[test]
    fn round_trip_preserves_untouched_fields() {
        let original = sample_rule();
        let doc: HealthRuleDocument = serde_json::from_value(original.clone()).unwrap();
        let restored = serde_json::to_value(&doc).unwrap();

        assert_eq!(restored["id"], original["id"]);
        assert_eq!(restored["scheduleName"], original["scheduleName"]);
        assert_eq!(
            restored["evalCriterias"]["criticalCriteria"]["conditions"][0]["minimumTriggers"],
            original["evalCriterias"]["criticalCriteria"]["conditions"][0]["minimumTriggers"],
        );
        // Untouched integer threshold stays an integer.
        assert_eq!(
            restored["evalCriterias"]["criticalCriteria"]["conditions"][0]["evalDetail"]
                ["metricEvalDetail"]["compareValue"],
            serde_json::json!(200000),
        );
        // Null severity block survives the round trip.
        assert_eq!(restored["evalCriterias"]["warningCriteria"], Value::Null);
    }

    #[test]
    fn sole_compare_value_mut_requires_exactly_one_condition() {
        let doc: HealthRuleDocument = serde_json::from_value(sample_rule()).unwrap();
        let mut criterias = doc.eval_criterias.unwrap();
        assert!(criterias.critical.as_mut().unwrap().sole_compare_value_mut().is_some());

        let mut doubled = criterias.critical.clone().unwrap();
        let extra_condition = doubled.conditions[0].clone();
        doubled.conditions.push(extra_condition);
        assert!(doubled.sole_compare_value_mut().is_none());
    }

    #[test]
    fn missing_metric_detail_yields_no_threshold_slot() {
        let mut criteria: SeverityCriteria = serde_json::from_value(serde_json::json!({
            "conditions": [{ "evalDetail": { "evalDetailType": "CUSTOM" } }]
        }))
        .unwrap();
        assert!(criteria.sole_compare_value_mut().is_none());
    }
}
