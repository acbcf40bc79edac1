//! CLI command definitions and dispatch.

mod check;
mod operators;
mod validate;
mod version;

use std::path::{Path, PathBuf};

use a3s_krp_core::{KrpConfig, KrpError, LogLevel};
use a3s_krp_engine::{load_claims, load_policy, AttestationClaims, KeyReleasePolicy};
use clap::{Parser, Subcommand};

/// A3S KRP: key release policy evaluation for attestation claims.
#[derive(Parser)]
#[command(name = "a3s-krp", version, about)]
pub struct Cli {
    /// Path to a configuration file (JSON or YAML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Load the configuration file if one was given, defaults otherwise.
    pub fn load_config(&self) -> a3s_krp_core::Result<KrpConfig> {
        match &self.config {
            Some(path) => KrpConfig::from_file(path),
            None => Ok(KrpConfig::default()),
        }
    }
}

/// Available commands.
#[derive(Subcommand)]
pub enum Command {
    /// Validate attestation claims against a key release policy
    Validate(validate::ValidateArgs),
    /// Check that a policy document is well-formed and list its constraints
    Check(check::CheckArgs),
    /// List registered comparison operators
    Operators(operators::OperatorsArgs),
    /// Show version information
    Version(version::VersionArgs),
}

/// Read and parse a policy file.
pub(crate) async fn read_policy(path: &Path) -> Result<KeyReleasePolicy, Box<dyn std::error::Error>> {
    let owned = path.to_path_buf();
    let loaded = tokio::task::spawn_blocking(move || load_policy(&owned)).await?;
    loaded.map_err(|e| file_error("policy", path, e).into())
}

/// Read and parse an attestation claims file.
pub(crate) async fn read_claims(path: &Path) -> Result<AttestationClaims, Box<dyn std::error::Error>> {
    let owned = path.to_path_buf();
    let loaded = tokio::task::spawn_blocking(move || load_claims(&owned)).await?;
    loaded.map_err(|e| file_error("claims", path, e).into())
}

fn file_error(kind: &str, path: &Path, error: KrpError) -> String {
    match error {
        KrpError::IoError(e) => format!("Failed to read {} file {}: {}", kind, path.display(), e),
        other => format!("Failed to parse {} file {}: {}", kind, path.display(), other),
    }
}

/// Dispatch a parsed CLI to the appropriate command handler.
pub async fn dispatch(cli: Cli, config: KrpConfig) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Validate(args) => validate::execute(args, &config).await,
        Command::Check(args) => check::execute(args).await,
        Command::Operators(args) => operators::execute(args).await,
        Command::Version(args) => version::execute(args).await,
    }
}
