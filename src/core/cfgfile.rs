//! # Config-file serializer
//!
//! Emits the full option schema as a line-oriented key=value document the
//! destination process can read back. Unlike the command line, nothing is
//! omitted: blank options are written commented-out so the file always
//! documents the complete schema, and the verbose mode precedes each entry
//! with its documentation block.

use crate::constants::{EXECUTABLE_NAME, TOGGLE_ENABLED};
use crate::core::registry::Registry;
use crate::core::resolver::{ResolveError, Resolver};
use crate::core::schema::OPTIONS;
use crate::core::session;
use crate::models::EmissionRule;
use chrono::{DateTime, Utc};

/// Builds the config-file text at the supplied instant. `verbose` adds a
/// `//` documentation block above every entry.
pub fn build(registry: &Registry, at: DateTime<Utc>, verbose: bool) -> Result<String, ResolveError> {
    let resolver = Resolver::new(registry, at);
    let mut doc = String::new();

    doc.push_str(&format!("## {} configuration\n", EXECUTABLE_NAME));
    doc.push_str(&format!("## session {}\n\n", session::timestamp(at)));

    for spec in OPTIONS {
        if verbose {
            for help_line in spec.help.lines() {
                doc.push_str(&format!("// {}\n", help_line));
            }
        }

        let value = if spec.tokens.is_empty() {
            registry.get(spec.key).to_string()
        } else {
            resolver.resolve(spec.key)?
        };

        match spec.emission {
            // The bare flag is a presence marker in the file too.
            EmissionRule::BareFlag => {
                if value == TOGGLE_ENABLED {
                    doc.push_str(&format!("{}\n", spec.name));
                } else {
                    doc.push_str(&format!("#{}\n", spec.name));
                }
            }
            _ => {
                if value.is_empty() {
                    doc.push_str(&format!("#{}=\n", spec.name));
                } else {
                    doc.push_str(&format!("{}={}\n", spec.name, value));
                }
            }
        }
        doc.push('\n');
    }

    Ok(doc)
}

// MARK: --- UNIT TESTS ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cmdline;
    use crate::core::presets::PresetCatalog;
    use crate::core::schema::OptionKey;
    use chrono::TimeZone;

    fn fixed_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, 9, 3, 5, 9).unwrap()
    }

    fn registry_for(preset: &str) -> Registry {
        let mut registry = Registry::new();
        PresetCatalog::builtin().apply(preset, &mut registry);
        registry
    }

    #[test]
    fn test_every_option_appears_exactly_once() {
        let registry = registry_for("custom");
        let doc = build(&registry, fixed_instant(), false).unwrap();
        for spec in OPTIONS {
            let live = format!("\n{}=", spec.name);
            let commented = format!("\n#{}=", spec.name);
            let bare = format!("\n{}\n", spec.name);
            let commented_bare = format!("\n#{}\n", spec.name);
            let count = doc.matches(&live).count()
                + doc.matches(&commented).count()
                + doc.matches(&bare).count()
                + doc.matches(&commented_bare).count();
            assert_eq!(count, 1, "option: {}", spec.name);
        }
    }

    #[test]
    fn test_blank_values_are_commented_not_omitted() {
        let registry = registry_for("custom");
        let doc = build(&registry, fixed_instant(), false).unwrap();
        assert!(doc.contains("\n#platform-file=\n"));
        assert!(doc.contains("\n#mbhbt=\n"));
        assert!(doc.contains("\n#trn-reson-host=\n"));
    }

    #[test]
    fn test_placeholders_are_resolved_in_the_file() {
        let registry = registry_for("win.reson");
        let doc = build(&registry, fixed_instant(), false).unwrap();
        assert!(doc.contains("\nlog-directory=/cygdrive/d/cygwin64/logs/mbtrn\n"));
        assert!(doc.contains("\noutput=file:mbtrnpp_20240409-030509.mb1\n"));
        assert!(doc.contains("\ntrn-mid=mb-2024.100\n"));
        assert!(!doc.contains("TRN_SESSION"));
    }

    #[test]
    fn test_bare_flag_line_tracks_enable_state() {
        let mut registry = registry_for("win.reson");
        let doc = build(&registry, fixed_instant(), false).unwrap();
        assert!(doc.contains("\n#reinit-gain\n"));

        registry.set(OptionKey::ReinitGain, "en");
        let doc = build(&registry, fixed_instant(), false).unwrap();
        assert!(doc.contains("\nreinit-gain\n"));
        assert!(!doc.contains("\n#reinit-gain\n"));
    }

    #[test]
    fn test_verbose_mode_adds_doc_blocks() {
        let registry = registry_for("win.reson");
        let doc = build(&registry, fixed_instant(), true).unwrap();
        assert!(doc.contains("// Verbosity of diagnostic output."));
        assert!(doc.contains("// median-filter=<threshold>/<n_across>/<n_along>"));

        let plain = build(&registry, fixed_instant(), false).unwrap();
        assert!(!plain.contains("// "));
    }

    #[test]
    fn test_file_covers_options_the_command_line_omits() {
        // Behavioral consistency: whatever the command line drops for being
        // empty still shows up in the file, commented.
        let registry = registry_for("custom");
        let line = cmdline::build(&registry, fixed_instant()).unwrap();
        let doc = build(&registry, fixed_instant(), false).unwrap();
        for spec in OPTIONS {
            if !line.contains(&format!("--{}=", spec.name)) {
                let present = doc.contains(&format!("\n{}=", spec.name))
                    || doc.contains(&format!("\n#{}=", spec.name))
                    || doc.contains(&format!("\n{}\n", spec.name))
                    || doc.contains(&format!("\n#{}\n", spec.name));
                assert!(present, "option missing from file: {}", spec.name);
            }
        }
    }

    #[test]
    fn test_header_names_the_session() {
        let registry = registry_for("win.reson");
        let doc = build(&registry, fixed_instant(), false).unwrap();
        assert!(doc.starts_with("## mbtrnpp configuration\n## session 20240409-030509\n"));
    }
}
