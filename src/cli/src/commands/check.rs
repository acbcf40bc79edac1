//! `a3s-krp check` command: validate a policy document's structure.
//!
//! Loads the policy through the same type layer `validate` uses and lists
//! every declared constraint. Claim names outside the well-known SEV-SNP
//! set are flagged, since a misspelled claim can never be satisfied.

use std::path::PathBuf;

use a3s_krp_core::claims::is_well_known;
use a3s_krp_engine::operators::CLAIMS_GROUP;
use a3s_krp_engine::KeyReleasePolicy;
use clap::Args;
use serde::Serialize;

use super::read_policy;
use crate::output::{format_allowed, format_threshold, new_table};

#[derive(Args)]
pub struct CheckArgs {
    /// Path to the key release policy (JSON or YAML)
    pub policy: PathBuf,

    /// Output as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// One declared sub-check.
#[derive(Debug, Serialize, PartialEq)]
struct ConstraintRow {
    group: String,
    claim: String,
    constraint: String,
    well_known: bool,
}

#[derive(Serialize)]
struct CheckOutput<'a> {
    #[serde(rename = "type")]
    policy_type: &'a str,
    constraints: Vec<ConstraintRow>,
}

pub async fn execute(args: CheckArgs) -> Result<(), Box<dyn std::error::Error>> {
    let policy = read_policy(&args.policy).await?;
    let rows = constraint_rows(&policy);

    if args.json {
        let output = CheckOutput {
            policy_type: &policy.policy_type,
            constraints: rows,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("Policy declares no constraints; any attestation satisfies it.");
        return Ok(());
    }

    let mut table = new_table(&["GROUP", "CLAIM", "CONSTRAINT", "WELL-KNOWN"]);
    for row in &rows {
        table.add_row(vec![
            row.group.clone(),
            row.claim.clone(),
            row.constraint.clone(),
            (if row.well_known { "yes" } else { "no" }).to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn constraint_rows(policy: &KeyReleasePolicy) -> Vec<ConstraintRow> {
    let mut rows = Vec::with_capacity(policy.constraint_count());
    for (claim, allowed) in policy.claims.iter().flatten() {
        rows.push(ConstraintRow {
            group: CLAIMS_GROUP.to_string(),
            claim: claim.clone(),
            constraint: format_allowed(allowed),
            well_known: is_well_known(claim),
        });
    }
    for (group, thresholds) in &policy.operators {
        for (claim, threshold) in thresholds {
            rows.push(ConstraintRow {
                group: group.clone(),
                claim: claim.clone(),
                constraint: format_threshold(threshold),
                well_known: is_well_known(claim),
            });
        }
    }
    rows
}
