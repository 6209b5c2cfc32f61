//! # Preset catalog
//!
//! Named deployment contexts. A preset fills the registry's deployment
//! fields and heartbeat timeouts, then re-applies the acquisition defaults
//! that are identical across deployments. Built-in contexts can be
//! extended (or shadowed) by `~/.config/trncfg/presets.toml`, so new
//! identifiers appear without a schema change.

use crate::constants::CUSTOM_PRESET_ID;
use crate::core::registry::Registry;
use crate::core::schema::OptionKey;
use crate::core::paths;
use crate::models::PresetContext;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PresetError {
    #[error("Failed to read presets file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse presets file '{path}': {source}")]
    TomlParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Acquisition-tool defaults re-applied after every preset load. These are
/// properties of the acquisition chain, not of a deployment site, so they
/// are not stored per-preset.
const CONTEXT_INDEPENDENT_KEYS: &[OptionKey] = &[
    OptionKey::SwathWidth,
    OptionKey::Soundings,
    OptionKey::Format,
    OptionKey::MedianFilter,
    OptionKey::TrnMweight,
    OptionKey::TrnNcov,
    OptionKey::TrnNerr,
    OptionKey::TrnEcov,
    OptionKey::TrnEerr,
    OptionKey::CovarianceMagnitudeMax,
    OptionKey::ConvergenceRepeatMin,
];

#[derive(Debug, Clone)]
pub struct PresetCatalog {
    // Insertion order is listing order: built-ins first, user additions after.
    contexts: Vec<(String, PresetContext)>,
}

impl PresetCatalog {
    /// The built-in contexts only.
    pub fn builtin() -> Self {
        let contexts = vec![
            (
                "win.reson".to_string(),
                PresetContext {
                    reson_host: "192.168.100.113".to_string(),
                    trn_host: "192.168.100.50".to_string(),
                    logfiles_dir: "/cygdrive/d/cygwin64/logs/mbtrn".to_string(),
                    datafiles_dir: "/cygdrive/d/cygwin64/mbtrn/config".to_string(),
                    mapfiles_dir: "/cygdrive/d/cygwin64/mbtrn/maps".to_string(),
                    binaries_dir: "/usr/local/bin".to_string(),
                    mb_heartbeat: "15".to_string(),
                    trn_heartbeat: "15".to_string(),
                    trnu_heartbeat: "15".to_string(),
                },
            ),
            (
                "linux.mbari".to_string(),
                PresetContext {
                    reson_host: "134.89.32.107".to_string(),
                    trn_host: "134.89.32.110".to_string(),
                    logfiles_dir: "/home/mappingauv/logs/mbtrn".to_string(),
                    datafiles_dir: "/home/mappingauv/config".to_string(),
                    mapfiles_dir: "/home/mappingauv/maps".to_string(),
                    binaries_dir: "/usr/local/bin".to_string(),
                    mb_heartbeat: "10".to_string(),
                    trn_heartbeat: "10".to_string(),
                    trnu_heartbeat: "10".to_string(),
                },
            ),
            (CUSTOM_PRESET_ID.to_string(), PresetContext::default()),
        ];
        Self { contexts }
    }

    /// Built-ins merged with the user presets file, when one exists.
    pub fn load() -> Result<Self, PresetError> {
        let mut catalog = Self::builtin();
        if let Ok(path) = paths::user_presets_path()
            && path.exists()
        {
            catalog.merge_user_file(&path)?;
        }
        Ok(catalog)
    }

    /// Merges contexts from a TOML file. Ids are top-level table keys
    /// (dotted ids must be quoted, e.g. `["auv.sentry"]`); an id matching
    /// an existing context replaces it.
    pub fn merge_user_file(&mut self, path: &Path) -> Result<(), PresetError> {
        let content = fs::read_to_string(path).map_err(|e| PresetError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let user: HashMap<String, PresetContext> =
            toml::from_str(&content).map_err(|e| PresetError::TomlParse {
                path: path.display().to_string(),
                source: e,
            })?;

        let mut ids: Vec<String> = user.keys().cloned().collect();
        ids.sort();
        for id in ids {
            let context = user.get(&id).cloned().unwrap_or_default();
            if let Some(slot) = self.contexts.iter_mut().find(|(known, _)| *known == id) {
                log::debug!("User presets file shadows built-in context '{}'.", id);
                slot.1 = context;
            } else {
                self.contexts.push((id, context));
            }
        }
        Ok(())
    }

    /// All known context ids, listing order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.contexts.iter().map(|(id, _)| id.as_str())
    }

    /// Resolves a context id. An unknown id falls back to the blank
    /// "custom" context rather than failing, so a stale identifier never
    /// hard-errors the surface.
    pub fn lookup(&self, id: &str) -> &PresetContext {
        if let Some((_, context)) = self.contexts.iter().find(|(known, _)| known == id) {
            return context;
        }
        log::warn!("Unknown preset '{}'; falling back to '{}'.", id, CUSTOM_PRESET_ID);
        self.contexts
            .iter()
            .find(|(known, _)| known == CUSTOM_PRESET_ID)
            .map(|(_, context)| context)
            .expect("catalog always contains the custom context")
    }

    /// Copies every field of the resolved context into the registry, then
    /// re-applies the context-independent acquisition defaults.
    pub fn apply(&self, id: &str, registry: &mut Registry) {
        let context = self.lookup(id);
        registry.set(OptionKey::ResonHost, context.reson_host.clone());
        registry.set(OptionKey::TrnHost, context.trn_host.clone());
        registry.set(OptionKey::LogfilesDir, context.logfiles_dir.clone());
        registry.set(OptionKey::DatafilesDir, context.datafiles_dir.clone());
        registry.set(OptionKey::MapfilesDir, context.mapfiles_dir.clone());
        registry.set(OptionKey::BinariesDir, context.binaries_dir.clone());
        registry.set(OptionKey::MbHbt, context.mb_heartbeat.clone());
        registry.set(OptionKey::TrnHbt, context.trn_heartbeat.clone());
        registry.set(OptionKey::TrnuHbt, context.trnu_heartbeat.clone());

        for key in CONTEXT_INDEPENDENT_KEYS {
            registry.reset(*key);
        }
    }
}

// MARK: --- UNIT TESTS ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_context() {
        let catalog = PresetCatalog::builtin();
        let context = catalog.lookup("win.reson");
        assert_eq!(context.binaries_dir, "/usr/local/bin");
        assert_eq!(context.logfiles_dir, "/cygdrive/d/cygwin64/logs/mbtrn");
    }

    #[test]
    fn test_lookup_unknown_context_falls_back_to_custom() {
        let catalog = PresetCatalog::builtin();
        let context = catalog.lookup("deck.of.the.western.flyer");
        assert_eq!(*context, PresetContext::default());
    }

    #[test]
    fn test_apply_is_idempotent() {
        let catalog = PresetCatalog::builtin();
        let mut registry = Registry::new();
        catalog.apply("win.reson", &mut registry);
        let first = registry.clone();
        catalog.apply("win.reson", &mut registry);
        assert_eq!(registry, first);
    }

    #[test]
    fn test_switching_presets_leaves_no_residue() {
        let catalog = PresetCatalog::builtin();
        let mut via_b = Registry::new();
        catalog.apply("win.reson", &mut via_b);
        catalog.apply("linux.mbari", &mut via_b);
        catalog.apply("win.reson", &mut via_b);

        let mut direct = Registry::new();
        catalog.apply("win.reson", &mut direct);

        assert_eq!(via_b, direct);
    }

    #[test]
    fn test_apply_restores_context_independent_defaults() {
        let catalog = PresetCatalog::builtin();
        let mut registry = Registry::new();
        registry.set(OptionKey::SwathWidth, "120");
        registry.set(OptionKey::Format, "89");
        catalog.apply("linux.mbari", &mut registry);
        assert_eq!(registry.get(OptionKey::SwathWidth), "90");
        assert_eq!(registry.get(OptionKey::Format), "88");
    }

    #[test]
    fn test_apply_custom_blanks_deployment_fields() {
        let catalog = PresetCatalog::builtin();
        let mut registry = Registry::new();
        catalog.apply("win.reson", &mut registry);
        catalog.apply("custom", &mut registry);
        assert_eq!(registry.get(OptionKey::ResonHost), "");
        assert_eq!(registry.get(OptionKey::BinariesDir), "");
        assert_eq!(registry.get(OptionKey::MbHbt), "");
    }

    #[test]
    fn test_merge_user_file_adds_and_shadows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("presets.toml");
        std::fs::write(
            &path,
            r#"
["auv.sentry"]
reson_host = "10.0.0.7"
trn_host = "10.0.0.8"

["win.reson"]
binaries_dir = "/opt/mbtrn/bin"
"#,
        )
        .unwrap();

        let mut catalog = PresetCatalog::builtin();
        catalog.merge_user_file(&path).unwrap();

        assert!(catalog.ids().any(|id| id == "auv.sentry"));
        assert_eq!(catalog.lookup("auv.sentry").reson_host, "10.0.0.7");
        // Shadowed built-in: unspecified fields fall back to blank.
        assert_eq!(catalog.lookup("win.reson").binaries_dir, "/opt/mbtrn/bin");
        assert_eq!(catalog.lookup("win.reson").logfiles_dir, "");
    }

    #[test]
    fn test_merge_user_file_rejects_unknown_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("presets.toml");
        std::fs::write(&path, "[site]\nreson_hots = \"10.0.0.7\"\n").unwrap();

        let mut catalog = PresetCatalog::builtin();
        let result = catalog.merge_user_file(&path);
        assert!(matches!(result, Err(PresetError::TomlParse { .. })));
    }
}
