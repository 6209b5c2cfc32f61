// src/cli/handlers/presets.rs

use crate::{constants::CUSTOM_PRESET_ID, core::presets::PresetCatalog, models::PresetContext};
use anyhow::Result;
use clap::Parser;
use colored::*;

#[derive(Parser, Debug, Default)]
#[command(
    no_binary_name = true,
    about = "Lists the available deployment presets."
)]
struct PresetsArgs {}

/// The main handler for the `presets` command. Lists built-in contexts and
/// any contexts contributed by the user presets file.
pub fn handle(args: Vec<String>) -> Result<()> {
    let _presets_args = PresetsArgs::try_parse_from(&args)?;
    let catalog = PresetCatalog::load()?;

    println!("\n--- {} ---", t!("presets.header"));
    for id in catalog.ids() {
        let context = catalog.lookup(id);
        println!("\n  {}", id.yellow());
        if id == CUSTOM_PRESET_ID {
            println!("    {}", t!("presets.note.custom").dimmed());
            continue;
        }
        print_context(context);
    }
    println!();
    Ok(())
}

fn print_context(context: &PresetContext) {
    print_field(t!("presets.label.reson_host"), &context.reson_host);
    print_field(t!("presets.label.trn_host"), &context.trn_host);
    print_field(t!("presets.label.logfiles"), &context.logfiles_dir);
    print_field(t!("presets.label.datafiles"), &context.datafiles_dir);
    print_field(t!("presets.label.mapfiles"), &context.mapfiles_dir);
    print_field(t!("presets.label.binaries"), &context.binaries_dir);

    let heartbeats = [
        &context.mb_heartbeat,
        &context.trn_heartbeat,
        &context.trnu_heartbeat,
    ];
    if heartbeats.iter().any(|hb| !hb.is_empty()) {
        print_field(
            t!("presets.label.heartbeats"),
            &format!(
                "{}/{}/{}",
                context.mb_heartbeat, context.trn_heartbeat, context.trnu_heartbeat
            ),
        );
    }
}

fn print_field(label: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    println!("    {:<22} {}", label.blue(), value);
}
