// src/bin/trncfg.rs

use anyhow::Result;
use clap::Parser;
use colored::*;
use trncfg::cli::{Cli, build_help_string, handlers};

// --- Command Definition and Registry ---

/// Defines a system command, its aliases, and its synchronous handler function.
/// The handler signature is kept consistent across all commands for simplicity in the registry.
struct CommandDefinition {
    name: &'static str,
    aliases: &'static [&'static str],
    handler: fn(Vec<String>) -> Result<()>,
}

/// The single source of truth for all commands.
/// To add a new command, add an entry here and a handler module.
static COMMAND_REGISTRY: &[CommandDefinition] = &[
    CommandDefinition {
        name: "cfgfile",
        aliases: &["cfg"],
        handler: handlers::cfgfile::handle,
    },
    CommandDefinition {
        name: "cmdline",
        aliases: &["cmd"],
        handler: handlers::cmdline::handle,
    },
    CommandDefinition {
        name: "export",
        aliases: &[],
        handler: handlers::export::handle,
    },
    CommandDefinition {
        name: "info",
        aliases: &[],
        handler: handlers::info::handle,
    },
    CommandDefinition {
        name: "presets",
        aliases: &["ls"],
        handler: handlers::presets::handle,
    },
    CommandDefinition {
        name: "show",
        aliases: &[],
        handler: handlers::show::handle,
    },
];

/// Finds a command definition in the registry by its name or alias.
fn find_command(name: &str) -> Option<&'static CommandDefinition> {
    COMMAND_REGISTRY
        .iter()
        .find(|cmd| cmd.name == name || cmd.aliases.contains(&name))
}

/// The main entry point of the `trncfg` application.
/// It sets up logging, parses arguments, dispatches to the correct handler,
/// and performs centralized error handling.
fn main() {
    env_logger::init();

    if let Err(e) = run_cli(Cli::parse()) {
        eprintln!("\n{}: {:#}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// The application dispatcher: the first argument selects the command, the
/// rest is re-parsed by that command's handler.
fn run_cli(cli: Cli) -> Result<()> {
    log::debug!("CLI args parsed: {:?}", cli);

    let mut args = cli.args.into_iter();
    let Some(action_name) = args.next() else {
        println!("{}", build_help_string());
        return Ok(());
    };
    let action_args: Vec<String> = args.collect();

    match find_command(&action_name) {
        Some(command) => (command.handler)(action_args),
        None => Err(anyhow::anyhow!(format!(
            trncfg::t!("cli.error.unknown_command"),
            name = action_name.cyan()
        ))),
    }
}
