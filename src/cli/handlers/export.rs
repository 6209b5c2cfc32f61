// src/cli/handlers/export.rs

use crate::{
    cli::{args::SelectionArgs, handlers::commons},
    constants::{CMDLINE_EXPORT_FILENAME, CONFIG_EXPORT_FILENAME},
    core::{cfgfile, cmdline, paths},
};
use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use colored::*;
use dialoguer::{Confirm, theme::ColorfulTheme};
use std::fs;
use std::path::Path;

#[derive(Parser, Debug, Default)]
#[command(
    no_binary_name = true,
    about = "Writes the invocation and the configuration file to a directory."
)]
struct ExportArgs {
    #[command(flatten)]
    selection: SelectionArgs,

    /// Directory the artifacts are written into. Created when missing.
    #[arg(long, short = 'o', default_value = ".", value_name = "DIR")]
    output_dir: String,

    /// Overwrite existing artifacts without asking.
    #[arg(long)]
    force: bool,

    /// Suppress the per-option documentation blocks in the config file.
    #[arg(long)]
    plain: bool,
}

/// The main handler for the `export` command. Both artifacts derive from
/// one registry at one instant, so their session strings agree.
pub fn handle(args: Vec<String>) -> Result<()> {
    let export_args = ExportArgs::try_parse_from(&args)?;
    let registry = commons::assemble_registry(&export_args.selection)?;

    let at = Utc::now();
    let line = cmdline::build(&registry, at)?;
    let doc = cfgfile::build(&registry, at, !export_args.plain)?;

    let dir = paths::expand_user_path(&export_args.output_dir)?;
    fs::create_dir_all(&dir)
        .with_context(|| format!(t!("export.error.create_dir"), path = dir.display()))?;

    write_artifact(
        &dir.join(CMDLINE_EXPORT_FILENAME),
        &format!("{}\n", line),
        export_args.force,
    )?;
    write_artifact(&dir.join(CONFIG_EXPORT_FILENAME), &doc, export_args.force)?;
    Ok(())
}

/// Writes one artifact, asking before overwriting unless forced.
fn write_artifact(path: &Path, contents: &str, force: bool) -> Result<()> {
    if path.exists() && !force && !confirm_overwrite(path)? {
        println!(
            "{}",
            format!(t!("export.skipped"), path = path.display()).yellow()
        );
        return Ok(());
    }
    fs::write(path, contents)
        .with_context(|| format!(t!("export.error.write"), path = path.display()))?;
    println!(
        "{}",
        format!(t!("export.done"), path = path.display()).green()
    );
    Ok(())
}

fn confirm_overwrite(path: &Path) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!(t!("export.confirm.overwrite"), path = path.display()))
        .default(false)
        .interact()?)
}

// MARK: --- UNIT TESTS ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{presets::PresetCatalog, registry::Registry};
    use chrono::TimeZone;

    #[test]
    fn test_write_artifact_creates_and_overwrites_with_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CMDLINE_EXPORT_FILENAME);

        write_artifact(&path, "first\n", false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\n");

        // Existing file + force: no prompt, contents replaced.
        write_artifact(&path, "second\n", true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");
    }

    #[test]
    fn test_exported_artifacts_share_one_instant() {
        let mut registry = Registry::new();
        PresetCatalog::builtin().apply("win.reson", &mut registry);
        let at = Utc.with_ymd_and_hms(2024, 4, 9, 3, 5, 9).unwrap();

        let line = cmdline::build(&registry, at).unwrap();
        let doc = cfgfile::build(&registry, at, false).unwrap();

        assert!(line.contains("--output=file:mbtrnpp_20240409-030509.mb1"));
        assert!(doc.contains("output=file:mbtrnpp_20240409-030509.mb1"));
    }
}
