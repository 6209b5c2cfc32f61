//! # Placeholder resolver
//!
//! Replaces the symbolic tokens embedded in an option's raw value with
//! their resolved values. The splice loop keeps replacing the first
//! occurrence until none remains, bounded by
//! [`MAX_SUBSTITUTION_PASSES`](crate::constants::MAX_SUBSTITUTION_PASSES)
//! so a resolved value that re-introduces its own token fails loudly
//! instead of hanging.

use crate::constants::MAX_SUBSTITUTION_PASSES;
use crate::core::registry::Registry;
use crate::core::schema::OptionKey;
use crate::core::session;
use crate::models::Token;
use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    // Audit regex for token literals left in a resolved value. Longer
    // literals first so TRN_SESSION is not reported as SESSION.
    static ref LEFTOVER_TOKEN_RE: Regex = Regex::new(
        "TRN_RESON_HOST|TRN_SESSION|TRN_LOGFILES|TRN_MAPFILES|TRN_DATAFILES|TRN_HOST|SESSION"
    )
    .expect("leftover token regex is valid");
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResolveError {
    #[error(
        "Substitution of '{token}' did not converge within {passes} passes; the resolved value re-introduces its own token."
    )]
    Unconverged { token: &'static str, passes: u32 },
}

/// One resolution pass over the registry at a fixed instant. Session
/// tokens are computed from `at`, context tokens read the registry's
/// deployment options, so every option resolved through the same resolver
/// shares one consistent instant.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    registry: &'a Registry,
    at: DateTime<Utc>,
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a Registry, at: DateTime<Utc>) -> Self {
        Self { registry, at }
    }

    /// Resolves an option's current value through its declared token
    /// bindings, in declared order. Options outside the placeholder
    /// whitelist pass through unchanged.
    pub fn resolve(&self, key: OptionKey) -> Result<String, ResolveError> {
        let spec = key.spec();
        let mut value = self.registry.get(key).to_string();
        for token in spec.tokens {
            value = self.substitute(&value, *token)?;
        }
        if let Some(leftover) = LEFTOVER_TOKEN_RE.find(&value) {
            log::debug!(
                "Option '{}' still carries token text '{}' after resolution.",
                spec.name,
                leftover.as_str()
            );
        }
        Ok(value)
    }

    /// The current replacement value of a token.
    fn token_value(&self, token: Token) -> String {
        match token {
            Token::Session => session::timestamp(self.at),
            Token::TrnSession => session::mission_day(self.at),
            Token::TrnHost => self.registry.get(OptionKey::TrnHost).to_string(),
            Token::ResonHost => self.registry.get(OptionKey::ResonHost).to_string(),
            Token::Logfiles => self.registry.get(OptionKey::LogfilesDir).to_string(),
            Token::Mapfiles => self.registry.get(OptionKey::MapfilesDir).to_string(),
            Token::Datafiles => self.registry.get(OptionKey::DatafilesDir).to_string(),
        }
    }

    /// Splices the token's replacement over every occurrence of its
    /// literal, first occurrence each pass, until none remains or the pass
    /// bound trips.
    fn substitute(&self, value: &str, token: Token) -> Result<String, ResolveError> {
        let literal = token.literal();
        let replacement = self.token_value(token);
        let mut current = value.to_string();
        let mut passes = 0u32;

        while let Some(idx) = current.find(literal) {
            if passes >= MAX_SUBSTITUTION_PASSES {
                return Err(ResolveError::Unconverged {
                    token: literal,
                    passes,
                });
            }
            let prefix = &current[..idx];
            let suffix = &current[idx + literal.len()..];
            current = format!("{}{}{}", prefix, replacement, suffix);
            passes += 1;
        }

        Ok(current)
    }
}

// MARK: --- UNIT TESTS ---
