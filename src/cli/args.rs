// src/cli/args.rs
use clap::Args;

/// The shared registry-selection arguments: which preset to load and which
/// overrides to layer on top of it. Flattened into every generating
/// command (`show`, `cmdline`, `cfgfile`, `export`).
#[derive(Args, Debug, Default, Clone)]
pub struct SelectionArgs {
    /// Deployment preset loaded before overrides. Unknown ids fall back
    /// to the blank 'custom' context.
    #[arg(long, default_value = "custom")]
    pub preset: String,

    /// TOML file of option overrides (option name = value), applied after
    /// the preset.
    #[arg(long, value_name = "FILE")]
    pub options: Option<String>,

    /// Override a single option, e.g. --set verbose=-3. Repeatable;
    /// applied last.
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,
}
