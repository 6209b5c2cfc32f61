//! # Parameter registry
//!
//! The live value store over the option schema. Values are plain strings;
//! the destination parser owns value syntax, so `set` never validates.
//! Iteration follows the declared table order, which is what both
//! serializers emit in.

use crate::core::schema::{OPTIONS, OptionKey};
use crate::models::OptionSpec;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    values: HashMap<OptionKey, String>,
}

impl Registry {
    /// A registry populated with every option's table default.
    pub fn new() -> Self {
        let values = OPTIONS
            .iter()
            .map(|spec| (spec.key, spec.default.to_string()))
            .collect();
        Self { values }
    }

    /// Current value of an option. Empty string means "unset".
    pub fn get(&self, key: OptionKey) -> &str {
        // Construction inserts every key, and `set` cannot add new ones.
        self.values.get(&key).map(String::as_str).unwrap_or_default()
    }

    /// Overwrites an option's value. The only mutation the registry has.
    pub fn set(&mut self, key: OptionKey, value: impl Into<String>) {
        self.values.insert(key, value.into());
    }

    /// Restores an option's table default and returns it.
    pub fn reset(&mut self, key: OptionKey) -> &'static str {
        let default = key.spec().default;
        self.values.insert(key, default.to_string());
        default
    }

    /// (spec, current value) pairs in declared table order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static OptionSpec, &str)> {
        OPTIONS.iter().map(|spec| (spec, self.get(spec.key)))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

// MARK: --- UNIT TESTS ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registry_carries_table_defaults() {
        let registry = Registry::new();
        assert_eq!(registry.get(OptionKey::Verbose), "-2");
        assert_eq!(registry.get(OptionKey::SwathWidth), "90");
        assert_eq!(registry.get(OptionKey::Soundings), "11");
        assert_eq!(registry.get(OptionKey::Format), "88");
        // Deployment fields start blank until a preset fills them.
        assert_eq!(registry.get(OptionKey::TrnHost), "");
    }

    #[test]
    fn test_set_then_get_roundtrips() {
        let mut registry = Registry::new();
        registry.set(OptionKey::Verbose, "-5");
        assert_eq!(registry.get(OptionKey::Verbose), "-5");
    }

    #[test]
    fn test_reset_restores_table_default() {
        let mut registry = Registry::new();
        registry.set(OptionKey::SwathWidth, "120");
        assert_eq!(registry.reset(OptionKey::SwathWidth), "90");
        assert_eq!(registry.get(OptionKey::SwathWidth), "90");
    }

    #[test]
    fn test_entries_follow_declared_order() {
        let registry = Registry::new();
        let names: Vec<&str> = registry.entries().map(|(spec, _)| spec.name).collect();
        let declared: Vec<&str> = OPTIONS.iter().map(|spec| spec.name).collect();
        assert_eq!(names, declared);
        assert_eq!(names.first().copied(), Some("verbose"));
        assert_eq!(names.last().copied(), Some("env-logfiles"));
    }
}
