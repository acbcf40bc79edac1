//! `a3s-krp operators` command.

use a3s_krp_engine::operators::{self, CLAIMS_GROUP};
use clap::Args;

use crate::output::new_table;

#[derive(Args)]
pub struct OperatorsArgs;

pub async fn execute(_args: OperatorsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut table = new_table(&["GROUP", "CHECK"]);
    table.add_row(vec![CLAIMS_GROUP.to_string(), "claim in [values]".to_string()]);
    for op in operators::all() {
        table.add_row(vec![op.name.to_string(), format!("claim {} threshold", op.symbol)]);
    }
    println!("{table}");
    Ok(())
}
