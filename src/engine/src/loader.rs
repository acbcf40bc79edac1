//! Policy and claims loading.
//!
//! This is the type layer in front of the evaluator. It accepts JSON or
//! YAML documents and rejects anything that is structurally not a policy
//! or claims map with a [`KrpError`]. Documents that pass here are always
//! evaluable; whether they grant is decided by the evaluator.

use std::path::Path;

pub use a3s_krp_core::DocumentFormat;

use a3s_krp_core::error::{KrpError, Result};
use serde_json::Value;

use crate::model::{json_type_name, AttestationClaims, KeyReleasePolicy};
use crate::operators::{self, CLAIMS_GROUP};

const TYPE_FIELD: &str = "type";

/// Parse a key release policy document.
pub fn parse_policy(input: &str, format: DocumentFormat) -> Result<KeyReleasePolicy> {
    policy_from_value(parse_document(input, format)?)
}

/// Read and parse a key release policy file.
pub fn load_policy(path: &Path) -> Result<KeyReleasePolicy> {
    let data = std::fs::read_to_string(path)?;
    let policy = parse_policy(&data, DocumentFormat::from_path(path))?;
    tracing::debug!(
        path = %path.display(),
        constraints = policy.constraint_count(),
        "Loaded key release policy"
    );
    Ok(policy)
}

/// Shape-check a JSON value and convert it into a policy.
///
/// Rejects non-object documents, a missing or non-string `type`, a
/// `claims` group that is not a map of string lists, comparison groups
/// that are not maps, and groups with no registered operator. Groups set
/// to `null` are treated as absent.
pub fn policy_from_value(value: Value) -> Result<KeyReleasePolicy> {
    let mut map = match value {
        Value::Object(map) => map,
        other => {
            return Err(KrpError::InvalidPolicy(format!(
                "expected an object, got {}",
                json_type_name(&other)
            )))
        }
    };

    match map.get(TYPE_FIELD) {
        Some(Value::String(_)) => {}
        Some(other) => {
            return Err(KrpError::InvalidPolicy(format!(
                "'type' must be a string, got {}",
                json_type_name(other)
            )))
        }
        None => {
            return Err(KrpError::InvalidPolicy(
                "missing 'type' discriminator".to_string(),
            ))
        }
    }

    map.retain(|_, group| !group.is_null());

    for (key, group) in &map {
        if key == TYPE_FIELD {
            continue;
        }
        if key == CLAIMS_GROUP {
            check_claims_group(group)?;
        } else if operators::is_registered(key) {
            if !group.is_object() {
                return Err(KrpError::InvalidPolicy(format!(
                    "'{}' must map claim names to thresholds, got {}",
                    key,
                    json_type_name(group)
                )));
            }
        } else {
            return Err(KrpError::UnknownOperator { group: key.clone() });
        }
    }

    Ok(serde_json::from_value(Value::Object(map))?)
}

fn check_claims_group(group: &Value) -> Result<()> {
    let Some(entries) = group.as_object() else {
        return Err(KrpError::InvalidPolicy(format!(
            "'claims' must map claim names to value lists, got {}",
            json_type_name(group)
        )));
    };
    for (claim, allowed) in entries {
        let all_strings = allowed
            .as_array()
            .map_or(false, |values| values.iter().all(Value::is_string));
        if !all_strings {
            return Err(KrpError::InvalidPolicy(format!(
                "'claims.{}' must be a list of strings",
                claim
            )));
        }
    }
    Ok(())
}

/// Parse an attestation claims document.
pub fn parse_claims(input: &str, format: DocumentFormat) -> Result<AttestationClaims> {
    claims_from_value(parse_document(input, format)?)
}

/// Read and parse an attestation claims file.
pub fn load_claims(path: &Path) -> Result<AttestationClaims> {
    let data = std::fs::read_to_string(path)?;
    let claims = parse_claims(&data, DocumentFormat::from_path(path))?;
    tracing::debug!(path = %path.display(), claims = claims.len(), "Loaded attestation claims");
    Ok(claims)
}

/// Convert a JSON value into a claims map. Only objects are accepted.
pub fn claims_from_value(value: Value) -> Result<AttestationClaims> {
    match value {
        Value::Object(map) => Ok(map.into_iter().collect()),
        other => Err(KrpError::InvalidClaims(format!(
            "expected an object, got {}",
            json_type_name(&other)
        ))),
    }
}

fn parse_document(input: &str, format: DocumentFormat) -> Result<Value> {
    let value = match format {
        DocumentFormat::Json => serde_json::from_str(input)?,
        DocumentFormat::Yaml => serde_yaml::from_str(input)?,
    };
    Ok(value)
}
