// src/cli/handlers/info.rs

use crate::{cli::handlers::commons, core::schema::OptionKey, models::EmissionRule};
use anyhow::Result;
use clap::Parser;
use colored::*;

#[derive(Parser, Debug, Default)]
#[command(
    no_binary_name = true,
    about = "Shows one option's documentation, default, and emission rule."
)]
struct InfoArgs {
    /// The option key to describe (flag spelling, e.g. 'median-filter').
    key: String,
}

/// The main handler for the `info` command.
pub fn handle(args: Vec<String>) -> Result<()> {
    let info_args = InfoArgs::try_parse_from(&args)?;
    let key = OptionKey::from_key(&info_args.key)
        .ok_or_else(|| commons::unknown_key_error(&info_args.key))?;
    let spec = key.spec();

    println!("\n--- {} '{}' ---\n", t!("info.header"), spec.name.yellow());
    for help_line in spec.help.lines() {
        println!("  {}", help_line);
    }
    println!();

    let default = if spec.default.is_empty() {
        t!("show.label.blank").dimmed().to_string()
    } else {
        spec.default.to_string()
    };
    println!("  {:<14} {}", t!("info.label.default").blue(), default);

    if !spec.tokens.is_empty() {
        let tokens = spec
            .tokens
            .iter()
            .map(|token| token.literal())
            .collect::<Vec<_>>()
            .join(", ");
        println!("  {:<14} {}", t!("info.label.tokens").blue(), tokens);
    }

    let emission = match spec.emission {
        EmissionRule::Value => t!("info.emission.value"),
        EmissionRule::TrnToggle => t!("info.emission.trn_toggle"),
        EmissionRule::BareFlag => t!("info.emission.bare_flag"),
        EmissionRule::Hidden => t!("info.emission.hidden"),
    };
    println!("  {:<14} {}", t!("info.label.emission").blue(), emission);
    println!();
    Ok(())
}
