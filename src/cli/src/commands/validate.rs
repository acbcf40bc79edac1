//! `a3s-krp validate` command: evaluate attestation claims against a
//! key release policy.
//!
//! Prints the validation result as JSON and exits with status 1 when the
//! policy is not satisfied.

use std::path::PathBuf;

use a3s_krp_core::{EvaluationMode, KrpConfig};
use a3s_krp_engine::{evaluate_with, EvaluationOptions};
use clap::Args;

use super::{read_claims, read_policy};

#[derive(Args)]
pub struct ValidateArgs {
    /// Path to the key release policy (JSON or YAML)
    #[arg(long, short)]
    pub policy: PathBuf,

    /// Path to the verified attestation claims (JSON or YAML)
    #[arg(long, short)]
    pub claims: PathBuf,

    /// Report every violation instead of stopping at the first.
    #[arg(long)]
    pub collect_all: bool,

    /// Only output the verdict (true/false), violations go to stderr.
    #[arg(long, short)]
    pub quiet: bool,
}

pub async fn execute(args: ValidateArgs, config: &KrpConfig) -> Result<(), Box<dyn std::error::Error>> {
    let policy = read_policy(&args.policy).await?;
    let claims = read_claims(&args.claims).await?;

    let mut options = EvaluationOptions::from(config);
    if args.collect_all {
        options.mode = EvaluationMode::CollectAll;
    }

    let result = evaluate_with(&policy, &claims, options);
    tracing::info!(
        policy = %args.policy.display(),
        mode = %options.mode,
        success = result.success,
        "Key release policy validated"
    );

    if args.quiet {
        println!("{}", result.success);
        for v in &result.violations {
            eprintln!("  {}", v);
        }
    } else {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    if !result.success {
        std::process::exit(1);
    }

    Ok(())
}
