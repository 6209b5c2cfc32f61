// src/cli/handlers/cfgfile.rs

use crate::cli::{args::SelectionArgs, handlers::commons};
use crate::core::cfgfile;
use anyhow::Result;
use chrono::Utc;
use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(
    no_binary_name = true,
    about = "Prints the key=value configuration document."
)]
struct CfgfileArgs {
    #[command(flatten)]
    selection: SelectionArgs,

    /// Suppress the per-option documentation blocks.
    #[arg(long)]
    plain: bool,
}

/// The main handler for the `cfgfile` command.
pub fn handle(args: Vec<String>) -> Result<()> {
    let cfgfile_args = CfgfileArgs::try_parse_from(&args)?;
    let registry = commons::assemble_registry(&cfgfile_args.selection)?;
    let doc = cfgfile::build(&registry, Utc::now(), !cfgfile_args.plain)?;
    print!("{}", doc);
    Ok(())
}
