//! Key release policy evaluator.
//!
//! Checks attestation claims against every constraint group a policy
//! declares. Groups combine with AND; within the `claims` group a claim
//! passes if it matches any of its acceptable values. Absent and empty
//! groups are vacuously satisfied. Anything that cannot be decided
//! (missing claim, non-numeric value, unknown operator) fails the
//! sub-check, so the evaluator never grants on ambiguous input.
//!
//! Evaluation is a pure function of its inputs: no I/O, no shared state.

use a3s_krp_core::{EvaluationMode, KrpConfig};
use serde_json::Value;

use crate::coerce::coerce_number;
use crate::model::{json_type_name, AttestationClaims, KeyReleasePolicy};
use crate::operators::{self, Operator, CLAIMS_GROUP};
use crate::result::{PolicyViolation, ValidationResult, ViolationKind};

/// Longest claim value echoed back in a violation reason.
const MAX_REASON_VALUE_CHARS: usize = 64;

/// Evaluation options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvaluationOptions {
    pub mode: EvaluationMode,
}

impl From<&KrpConfig> for EvaluationOptions {
    fn from(config: &KrpConfig) -> Self {
        Self { mode: config.mode }
    }
}

/// Validate attestation claims against a key release policy.
///
/// Stops at the first failing sub-check. Never panics; any outcome other
/// than `success == true` must be treated as deny.
pub fn validate(policy: &KeyReleasePolicy, claims: &AttestationClaims) -> ValidationResult {
    evaluate(policy, claims)
}

/// Evaluate a policy with default options.
pub fn evaluate(policy: &KeyReleasePolicy, claims: &AttestationClaims) -> ValidationResult {
    evaluate_with(policy, claims, EvaluationOptions::default())
}

/// Evaluate a policy.
///
/// Sub-checks run in a fixed order: the `claims` group first, then the
/// comparison groups by name, each group's claims by name. In
/// [`EvaluationMode::FailFast`] evaluation stops at the first violation;
/// in [`EvaluationMode::CollectAll`] every violation is reported. The
/// verdict is the same in both modes.
pub fn evaluate_with(
    policy: &KeyReleasePolicy,
    claims: &AttestationClaims,
    options: EvaluationOptions,
) -> ValidationResult {
    let membership = policy
        .claims
        .iter()
        .flatten()
        .map(|(name, allowed)| check_membership(name, allowed, claims));

    let comparisons = policy.operators.iter().flat_map(move |(group, thresholds)| {
        let operator = operators::lookup(group);
        thresholds.iter().map(move |(name, threshold)| {
            check_threshold(group, operator, name, threshold, claims)
        })
    });

    let mut failures = membership.chain(comparisons).flatten();
    let violations: Vec<PolicyViolation> = match options.mode {
        EvaluationMode::FailFast => failures.next().into_iter().collect(),
        EvaluationMode::CollectAll => failures.collect(),
    };

    let result = ValidationResult::from_violations(violations);
    tracing::debug!(
        policy_type = %policy.policy_type,
        constraints = policy.constraint_count(),
        success = result.success,
        violations = result.violations.len(),
        "Key release policy evaluated"
    );
    result
}

/// Check that a claim equals one of its acceptable values.
fn check_membership(
    name: &str,
    allowed: &[String],
    claims: &AttestationClaims,
) -> Option<PolicyViolation> {
    let violation = match claims.get(name) {
        None => missing(CLAIMS_GROUP, name),
        Some(value) => match value.as_str() {
            Some(actual) if allowed.iter().any(|candidate| candidate == actual) => return None,
            Some(actual) => PolicyViolation::new(
                CLAIMS_GROUP,
                name,
                ViolationKind::NotAllowed,
                format!(
                    "value \"{}\" is not one of {:?}",
                    abbreviate(actual),
                    allowed
                ),
            ),
            None => PolicyViolation::new(
                CLAIMS_GROUP,
                name,
                ViolationKind::NotComparable,
                format!("expected a string value, got {}", json_type_name(value)),
            ),
        },
    };
    tracing::debug!(group = CLAIMS_GROUP, claim = name, kind = ?violation.kind, "Sub-check failed");
    Some(violation)
}

/// Check a claim against one comparison threshold.
fn check_threshold(
    group: &str,
    operator: Option<&Operator>,
    name: &str,
    threshold: &Value,
    claims: &AttestationClaims,
) -> Option<PolicyViolation> {
    let violation = match compare(group, operator, name, threshold, claims) {
        Ok(()) => return None,
        Err(violation) => violation,
    };
    tracing::debug!(group, claim = name, kind = ?violation.kind, "Sub-check failed");
    Some(violation)
}

fn compare(
    group: &str,
    operator: Option<&Operator>,
    name: &str,
    threshold: &Value,
    claims: &AttestationClaims,
) -> Result<(), PolicyViolation> {
    let Some(operator) = operator else {
        return Err(PolicyViolation::new(
            group,
            name,
            ViolationKind::UnknownOperator,
            format!("no comparison registered for group '{}'", group),
        ));
    };

    let value = claims.get(name).ok_or_else(|| missing(group, name))?;

    let actual = coerce_number(value).ok_or_else(|| {
        PolicyViolation::new(
            group,
            name,
            ViolationKind::NotComparable,
            format!("claim value {} is not numeric", describe(value)),
        )
    })?;

    let limit = coerce_number(threshold).ok_or_else(|| {
        PolicyViolation::new(
            group,
            name,
            ViolationKind::InvalidThreshold,
            format!("threshold {} is not numeric", describe(threshold)),
        )
    })?;

    if operator.holds(actual, limit) {
        Ok(())
    } else {
        Err(PolicyViolation::new(
            group,
            name,
            ViolationKind::Unsatisfied,
            format!("{} {} {} does not hold", actual, operator.symbol, limit),
        ))
    }
}

fn missing(group: &str, name: &str) -> PolicyViolation {
    PolicyViolation::new(
        group,
        name,
        ViolationKind::MissingClaim,
        "claim not present in attestation",
    )
}

/// Render a JSON value for a violation reason.
fn describe(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{}\"", abbreviate(s)),
        Value::Array(_) | Value::Object(_) => json_type_name(value).to_string(),
        other => other.to_string(),
    }
}

fn abbreviate(s: &str) -> String {
    if s.chars().count() <= MAX_REASON_VALUE_CHARS {
        s.to_string()
    } else {
        let head: String = s.chars().take(MAX_REASON_VALUE_CHARS).collect();
        format!("{}...", head)
    }
}
