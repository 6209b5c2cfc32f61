// src/cli/handlers/show.rs

use crate::cli::{args::SelectionArgs, handlers::commons};
use anyhow::Result;
use clap::Parser;
use colored::*;

#[derive(Parser, Debug, Default)]
#[command(
    no_binary_name = true,
    about = "Shows the assembled option registry for a preset plus overrides."
)]
struct ShowArgs {
    #[command(flatten)]
    selection: SelectionArgs,
}

/// The main handler for the `show` command. Dumps every option with its
/// current (raw, unresolved) value in declared table order.
pub fn handle(args: Vec<String>) -> Result<()> {
    let show_args = ShowArgs::try_parse_from(&args)?;
    let registry = commons::assemble_registry(&show_args.selection)?;

    println!(
        "\n--- {} '{}' ---\n",
        t!("show.header"),
        show_args.selection.preset.yellow()
    );
    for (spec, value) in registry.entries() {
        let rendered = if value.is_empty() {
            t!("show.label.blank").dimmed().to_string()
        } else {
            value.to_string()
        };
        let marker = if value == spec.default {
            format!(" {}", t!("show.label.default_marker").dimmed())
        } else {
            String::new()
        };
        println!("  {:<26} {}{}", spec.name.cyan(), rendered, marker);
    }
    println!();
    Ok(())
}
