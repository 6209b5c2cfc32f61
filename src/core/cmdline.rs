//! # Command-line builder
//!
//! Derives the mbtrnpp invocation string from the registry: environment
//! prefix, binary path, fixed-order options, then the placeholder
//! whitelist resolved and appended. The whole line is rebuilt from
//! scratch on every call; there is no incremental patching.

use crate::constants::{ENV_LOGFILES_VAR, EXECUTABLE_NAME, TOGGLE_ENABLED};
use crate::core::registry::Registry;
use crate::core::resolver::{ResolveError, Resolver};
use crate::core::schema::{OPTIONS, OptionKey};
use crate::models::EmissionRule;
use chrono::{DateTime, Utc};

/// Builds the invocation string at the supplied instant.
///
/// Values are emitted verbatim: the destination parser takes no quoting,
/// so values containing the shell separator cannot be expressed. The
/// builder warns and emits them anyway rather than silently altering the
/// contract.
pub fn build(registry: &Registry, at: DateTime<Utc>) -> Result<String, ResolveError> {
    let resolver = Resolver::new(registry, at);
    let mut line = String::new();

    // Environment prefix. A shell environment assignment must precede the
    // command word, so the toggle prepends rather than appends.
    if registry.get(OptionKey::EnvLogfiles) == TOGGLE_ENABLED {
        let dir = registry.get(OptionKey::LogfilesDir);
        if !dir.is_empty() {
            line.push_str(&format!("{}=\"{}\" ", ENV_LOGFILES_VAR, dir));
        }
    }

    // Binary path. A blank binaries directory yields the bare executable.
    let bin_dir = registry.get(OptionKey::BinariesDir);
    if bin_dir.is_empty() {
        line.push_str(EXECUTABLE_NAME);
    } else {
        line.push_str(&format!(
            "{}/{}",
            bin_dir.trim_end_matches('/'),
            EXECUTABLE_NAME
        ));
    }

    // Fixed-order pass over the non-placeholder options.
    for spec in OPTIONS.iter().filter(|spec| spec.tokens.is_empty()) {
        let value = registry.get(spec.key);
        match spec.emission {
            EmissionRule::Hidden => {}
            EmissionRule::Value => {
                if !value.is_empty() {
                    warn_on_separator(spec.name, value);
                    line.push_str(&format!(" --{}={}", spec.name, value));
                }
            }
            EmissionRule::TrnToggle => {
                if !value.is_empty() {
                    line.push_str(&format!(" --trn-{}", value));
                }
            }
            EmissionRule::BareFlag => {
                if value == TOGGLE_ENABLED {
                    line.push_str(&format!(" --{}", spec.name));
                }
            }
        }
    }

    // Placeholder pass, whitelist order.
    for spec in OPTIONS.iter().filter(|spec| !spec.tokens.is_empty()) {
        let value = resolver.resolve(spec.key)?;
        if !value.is_empty() {
            warn_on_separator(spec.name, &value);
            line.push_str(&format!(" --{}={}", spec.name, value));
        }
    }

    Ok(line)
}

fn warn_on_separator(name: &str, value: &str) {
    if value.chars().any(char::is_whitespace) {
        log::warn!(
            "Value of '{}' contains whitespace; the destination parser takes no quoting, the invocation will split it.",
            name
        );
    }
}

// MARK: --- UNIT TESTS ---
