// src/models.rs

use serde::{Deserialize, Serialize};

// --- PLACEHOLDER TOKENS ---

/// A symbolic token that may appear inside an option's raw value.
///
/// Session tokens are computed from the instant the caller supplies to the
/// resolver; context tokens read the registry's deployment options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// Full UTC timestamp, `YYYYMMDD-HHMMSS`. Used for log/output naming.
    Session,
    /// UTC mission-day string, `YYYY.DDD` (day-of-year, leap-year aware).
    TrnSession,
    /// Host address the TRN output servers bind to.
    TrnHost,
    /// Host address of the sonar data source.
    ResonHost,
    /// Log directory of the deployment.
    Logfiles,
    /// Map directory of the deployment.
    Mapfiles,
    /// TRN data/config directory of the deployment.
    Datafiles,
}

impl Token {
    /// The literal substring this token occupies in a raw option value.
    pub fn literal(self) -> &'static str {
        match self {
            Self::Session => "SESSION",
            Self::TrnSession => "TRN_SESSION",
            Self::TrnHost => "TRN_HOST",
            Self::ResonHost => "TRN_RESON_HOST",
            Self::Logfiles => "TRN_LOGFILES",
            Self::Mapfiles => "TRN_MAPFILES",
            Self::Datafiles => "TRN_DATAFILES",
        }
    }
}

// --- OPTION EMISSION RULES ---

/// How an option is rendered on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmissionRule {
    /// Ordinary `--name=value`; omitted entirely when the value is empty.
    Value,
    /// Boolean enable emitted as `--trn-en` / `--trn-dis` from the value
    /// suffix rather than as `--trn-en=<value>`.
    TrnToggle,
    /// No-argument flag (`--reinit-gain`) emitted only while enabled.
    BareFlag,
    /// Deployment field feeding tokens, the environment prefix, or the
    /// binary path. Never emitted as a flag; still serialized to the
    /// config file for traceability.
    Hidden,
}

/// One row of the declarative option table. Both serializers and the
/// registry derive from this single definition.
#[derive(Debug)]
pub struct OptionSpec {
    pub key: crate::core::schema::OptionKey,
    /// The flag/file spelling, a fixed contract with the destination parser.
    pub name: &'static str,
    pub default: &'static str,
    /// Documentation block emitted into the verbose config file; lines are
    /// split on '\n'.
    pub help: &'static str,
    /// Tokens substitutable in this option's value, in resolution order.
    /// Empty for options outside the placeholder whitelist.
    pub tokens: &'static [Token],
    pub emission: EmissionRule,
}

// --- PRESET MODELS ---

/// A named bundle of deployment-specific defaults. All fields are plain
/// strings; empty means "leave blank" (the destination parser, not this
/// tool, owns value syntax).
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PresetContext {
    pub reson_host: String,
    pub trn_host: String,
    pub logfiles_dir: String,
    pub datafiles_dir: String,
    pub mapfiles_dir: String,
    pub binaries_dir: String,
    pub mb_heartbeat: String,
    pub trn_heartbeat: String,
    pub trnu_heartbeat: String,
}
