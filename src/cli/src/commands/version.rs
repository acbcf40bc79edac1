//! `a3s-krp version` command.

use clap::Args;

#[derive(Args)]
pub struct VersionArgs;

pub async fn execute(_args: VersionArgs) -> Result<(), Box<dyn std::error::Error>> {
    println!("a3s-krp version {}", a3s_krp_engine::VERSION);
    Ok(())
}
