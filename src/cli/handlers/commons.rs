// src/cli/handlers/commons.rs

// This module contains shared functions used by multiple handlers.

use crate::{
    cli::args::SelectionArgs,
    core::{
        paths,
        presets::PresetCatalog,
        registry::Registry,
        schema::{OPTIONS, OptionKey},
    },
};
use anyhow::{Context, Result, anyhow};
use colored::Colorize;
use std::fs;
use std::path::Path;

/// Assembles the registry for a generation pass: defaults, then the
/// selected preset, then the overrides file, then `--set` pairs. Every
/// handler goes through here so the layering order is identical everywhere.
pub fn assemble_registry(selection: &SelectionArgs) -> Result<Registry> {
    let catalog = PresetCatalog::load()?;
    assemble_with_catalog(&catalog, selection)
}

/// Same as [`assemble_registry`] with an explicit catalog (tests inject the
/// built-in catalog to stay off the user's config directory).
pub fn assemble_with_catalog(
    catalog: &PresetCatalog,
    selection: &SelectionArgs,
) -> Result<Registry> {
    let mut registry = Registry::new();
    catalog.apply(&selection.preset, &mut registry);

    if let Some(raw_path) = &selection.options {
        let path = paths::expand_user_path(raw_path)?;
        apply_overrides_file(&mut registry, &path)?;
    }

    for pair in &selection.set {
        let (name, value) = split_override(pair)?;
        set_by_name(&mut registry, name, value)?;
    }

    Ok(registry)
}

/// Sets one option by its user-supplied name. Unknown names fail with the
/// legal-key list; the destination parser owns value syntax, so the value
/// itself is taken verbatim.
pub fn set_by_name(registry: &mut Registry, name: &str, value: &str) -> Result<()> {
    let key = OptionKey::from_key(name).ok_or_else(|| unknown_key_error(name))?;
    registry.set(key, value);
    Ok(())
}

/// The boundary error for an option name outside the schema.
pub fn unknown_key_error(name: &str) -> anyhow::Error {
    let legal = OPTIONS
        .iter()
        .map(|spec| spec.name)
        .collect::<Vec<_>>()
        .join(", ");
    anyhow!(
        "{}\n{} {}",
        format!(t!("commons.error.unknown_option"), key = name.cyan()),
        t!("commons.hint.legal_keys"),
        legal.dimmed()
    )
}

/// Applies a flat TOML table of option overrides. Scalar values are
/// stringified; nested tables and arrays are rejected.
pub fn apply_overrides_file(registry: &mut Registry, path: &Path) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!(t!("commons.error.read_overrides"), path = path.display()))?;
    let table: toml::Table = content
        .parse()
        .with_context(|| format!(t!("commons.error.parse_overrides"), path = path.display()))?;

    for (name, value) in &table {
        let rendered = scalar_to_string(value)
            .ok_or_else(|| anyhow!(format!(t!("commons.error.overrides_value"), key = name.cyan())))?;
        set_by_name(registry, name, &rendered)?;
    }
    Ok(())
}

fn scalar_to_string(value: &toml::Value) -> Option<String> {
    match value {
        toml::Value::String(s) => Some(s.clone()),
        toml::Value::Integer(i) => Some(i.to_string()),
        toml::Value::Float(f) => Some(f.to_string()),
        toml::Value::Boolean(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Splits a `--set KEY=VALUE` pair. The value may itself contain '='
/// (only the first one splits).
pub fn split_override(pair: &str) -> Result<(&str, &str)> {
    match pair.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => Ok((name.trim(), value)),
        _ => Err(anyhow!(format!(
            t!("commons.error.invalid_set"),
            pair = pair.cyan()
        ))),
    }
}

// MARK: --- UNIT TESTS ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_override_basic() {
        assert_eq!(split_override("verbose=-3").unwrap(), ("verbose", "-3"));
        // Only the first '=' splits; the rest belongs to the value.
        assert_eq!(
            split_override("mb-out=mb1svr:host:27000,file:x=y").unwrap(),
            ("mb-out", "mb1svr:host:27000,file:x=y")
        );
    }

    #[test]
    fn test_split_override_rejects_missing_separator_or_key() {
        assert!(split_override("verbose").is_err());
        assert!(split_override("=5").is_err());
    }

    #[test]
    fn test_set_by_name_rejects_unknown_keys() {
        let mut registry = Registry::new();
        let result = set_by_name(&mut registry, "swathwidth", "90");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("swathwidth"));
    }

    #[test]
    fn test_assemble_layers_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let overrides = dir.path().join("overrides.toml");
        std::fs::write(&overrides, "soundings = 21\nverbose = \"-4\"\n").unwrap();

        let selection = SelectionArgs {
            preset: "win.reson".to_string(),
            options: Some(overrides.display().to_string()),
            set: vec!["verbose=-5".to_string()],
        };
        let registry =
            assemble_with_catalog(&PresetCatalog::builtin(), &selection).unwrap();

        // Preset value survives where nothing overrides it.
        assert_eq!(registry.get(OptionKey::SwathWidth), "90");
        // Overrides file beats the preset; integers are stringified.
        assert_eq!(registry.get(OptionKey::Soundings), "21");
        // --set beats the overrides file.
        assert_eq!(registry.get(OptionKey::Verbose), "-5");
    }

    #[test]
    fn test_overrides_file_rejects_non_scalar_values() {
        let dir = tempfile::tempdir().unwrap();
        let overrides = dir.path().join("overrides.toml");
        std::fs::write(&overrides, "[soundings]\nn = 21\n").unwrap();

        let mut registry = Registry::new();
        assert!(apply_overrides_file(&mut registry, &overrides).is_err());
    }

    #[test]
    fn test_overrides_file_rejects_unknown_option_names() {
        let dir = tempfile::tempdir().unwrap();
        let overrides = dir.path().join("overrides.toml");
        std::fs::write(&overrides, "swathwidth = 120\n").unwrap();

        let mut registry = Registry::new();
        assert!(apply_overrides_file(&mut registry, &overrides).is_err());
    }
}
