// src/constants.rs

/// The fixed name of the destination executable, joined with the binaries
/// directory when the command line is built.
pub const EXECUTABLE_NAME: &str = "mbtrnpp";

/// The environment variable the destination process reads for its log root.
/// Emitted as a `VAR="dir"` prefix ahead of the invocation.
pub const ENV_LOGFILES_VAR: &str = "TRN_LOGFILES";

/// The identifier of the all-blank fallback preset.
pub const CUSTOM_PRESET_ID: &str = "custom";

/// The name of the user presets file (inside ~/.config/trncfg/).
pub const USER_PRESETS_FILENAME: &str = "presets.toml";

/// File names written by `trncfg export`.
pub const CMDLINE_EXPORT_FILENAME: &str = "mbtrnpp.cmd";
pub const CONFIG_EXPORT_FILENAME: &str = "mbtrnpp.cfg";

/// Upper bound on substitution passes for a single (option, token) pair.
/// A resolved value that re-introduces its own token trips this bound
/// instead of looping forever.
pub const MAX_SUBSTITUTION_PASSES: u32 = 32;

/// Canonical values of the two-state toggle options (`trn-en`,
/// `reinit-gain`, `env-logfiles`).
pub const TOGGLE_ENABLED: &str = "en";
pub const TOGGLE_DISABLED: &str = "dis";
