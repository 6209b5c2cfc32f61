// src/cli/handlers/cmdline.rs

use crate::cli::{args::SelectionArgs, handlers::commons};
use crate::core::cmdline;
use anyhow::Result;
use chrono::Utc;
use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(
    no_binary_name = true,
    about = "Prints the mbtrnpp invocation for a preset plus overrides."
)]
struct CmdlineArgs {
    #[command(flatten)]
    selection: SelectionArgs,
}

/// The main handler for the `cmdline` command. Placeholders resolve at the
/// current UTC instant; pipe the output straight into a shell or a launch
/// script.
pub fn handle(args: Vec<String>) -> Result<()> {
    let cmdline_args = CmdlineArgs::try_parse_from(&args)?;
    let registry = commons::assemble_registry(&cmdline_args.selection)?;
    let line = cmdline::build(&registry, Utc::now())?;
    println!("{}", line);
    Ok(())
}
