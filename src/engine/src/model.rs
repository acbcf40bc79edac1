//! Key release policy and attestation claims data model.
//!
//! A policy is a set of constraint groups. The `claims` group lists the
//! acceptable string values of a claim; every other group is a comparison
//! operator (`gte`, `gt`, ...) mapping claim names to thresholds.
//! Thresholds keep the shape the operator authored (number or numeric
//! string) and are only coerced when the policy is evaluated.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::operators;

/// Acceptable values per claim name for the `claims` group.
pub type AllowedValues = BTreeMap<String, Vec<String>>;

/// Thresholds per claim name for one comparison group.
pub type ThresholdGroup = BTreeMap<String, Value>;

/// Key release policy.
///
/// Every group is optional. A policy that declares no group, or only
/// empty groups, is satisfied by any claims map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyReleasePolicy {
    /// Policy schema discriminator. Carried through, never interpreted.
    #[serde(rename = "type")]
    pub policy_type: String,

    /// Claim must equal one of the listed values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claims: Option<AllowedValues>,

    /// Comparison groups keyed by operator name (`gte`, `gt`, `lte`, `lt`).
    #[serde(flatten)]
    pub operators: BTreeMap<String, ThresholdGroup>,
}

impl KeyReleasePolicy {
    /// Create an empty policy of the given type.
    pub fn new(policy_type: impl Into<String>) -> Self {
        Self {
            policy_type: policy_type.into(),
            ..Default::default()
        }
    }

    /// Start building a policy of the given type.
    pub fn builder(policy_type: impl Into<String>) -> PolicyBuilder {
        PolicyBuilder {
            policy: Self::new(policy_type),
        }
    }

    /// Thresholds declared for an operator group, if the group is present.
    pub fn group(&self, operator: &str) -> Option<&ThresholdGroup> {
        self.operators.get(operator)
    }

    /// Number of individual sub-checks this policy declares.
    pub fn constraint_count(&self) -> usize {
        let allowed = self.claims.as_ref().map_or(0, BTreeMap::len);
        let compared: usize = self.operators.values().map(BTreeMap::len).sum();
        allowed + compared
    }

    /// True if the policy declares no sub-check at all.
    pub fn is_unconstrained(&self) -> bool {
        self.constraint_count() == 0
    }
}

/// Builder for [`KeyReleasePolicy`].
#[derive(Debug, Clone)]
pub struct PolicyBuilder {
    policy: KeyReleasePolicy,
}

impl PolicyBuilder {
    /// Accept any of `values` for `claim`. Repeated calls for the same
    /// claim extend its acceptable set.
    pub fn allow<I, S>(mut self, claim: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.policy
            .claims
            .get_or_insert_with(BTreeMap::new)
            .entry(claim.into())
            .or_default()
            .extend(values.into_iter().map(Into::into));
        self
    }

    /// Declare a threshold for `claim` under an operator group.
    pub fn threshold(
        mut self,
        operator: impl Into<String>,
        claim: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.policy
            .operators
            .entry(operator.into())
            .or_default()
            .insert(claim.into(), value.into());
        self
    }

    pub fn gte(self, claim: impl Into<String>, value: impl Into<Value>) -> Self {
        self.threshold(operators::GTE, claim, value)
    }

    pub fn gt(self, claim: impl Into<String>, value: impl Into<Value>) -> Self {
        self.threshold(operators::GT, claim, value)
    }

    pub fn lte(self, claim: impl Into<String>, value: impl Into<Value>) -> Self {
        self.threshold(operators::LTE, claim, value)
    }

    pub fn lt(self, claim: impl Into<String>, value: impl Into<Value>) -> Self {
        self.threshold(operators::LT, claim, value)
    }

    pub fn build(self) -> KeyReleasePolicy {
        self.policy
    }
}

/// Verified attestation claims, keyed by claim name.
///
/// Values arrive as strings or numbers in practice; any JSON shape is
/// accepted and left for the evaluator to judge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttestationClaims(BTreeMap<String, Value>);

impl AttestationClaims {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a claim, consuming and returning the map.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl From<BTreeMap<String, Value>> for AttestationClaims {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for AttestationClaims {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Short name of a JSON value's shape, for diagnostics.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
