//! # Option schema
//!
//! The single declarative option table both serializers and the registry
//! derive from. Each row carries the flag spelling, the default value, the
//! documentation block, the placeholder tokens substitutable in the value,
//! and the command-line emission rule. Adding an option here updates the
//! command line, the config file, and the registry in one place.

use crate::models::{EmissionRule, OptionSpec, Token};

/// Enumerated key of every known option. The registry is keyed by this
/// type, so an unknown key inside the core is unrepresentable; string keys
/// are parsed once at the CLI boundary via [`OptionKey::from_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKey {
    Verbose,
    SwathWidth,
    Soundings,
    Format,
    MedianFilter,
    PlatformFile,
    PlatformTargetSensor,
    Projection,
    MbHbn,
    MbHbt,
    TrnHbt,
    TrnuHbt,
    Delay,
    StatSec,
    StatFlags,
    TrnEn,
    TrnUtm,
    TrnMtype,
    TrnFtype,
    TrnFgrade,
    TrnFreinit,
    TrnMweight,
    TrnNcov,
    TrnNerr,
    TrnEcov,
    TrnEerr,
    TrnDecn,
    ReinitGain,
    ReinitFile,
    ReinitXyOffset,
    ReinitZOffset,
    CovarianceMagnitudeMax,
    ConvergenceRepeatMin,
    Input,
    LogDirectory,
    TrnMap,
    TrnPar,
    TrnCfg,
    Output,
    MbOut,
    TrnOut,
    TrnMid,
    ResonHost,
    TrnHost,
    LogfilesDir,
    DatafilesDir,
    MapfilesDir,
    BinariesDir,
    EnvLogfiles,
}

impl OptionKey {
    /// The table row for this key.
    ///
    /// Every variant has exactly one row (asserted by the schema tests), so
    /// a miss here is a programming-contract violation, not a runtime
    /// condition.
    pub fn spec(self) -> &'static OptionSpec {
        OPTIONS
            .iter()
            .find(|spec| spec.key == self)
            .expect("option table covers every OptionKey variant")
    }

    /// The flag/file spelling of this option.
    pub fn name(self) -> &'static str {
        self.spec().name
    }

    /// Parses a user-supplied option name. Returns `None` for anything not
    /// in the table; callers at the CLI boundary turn that into an error
    /// listing the legal keys.
    pub fn from_key(name: &str) -> Option<Self> {
        OPTIONS
            .iter()
            .find(|spec| spec.name == name)
            .map(|spec| spec.key)
    }
}

/// The option table, in declared order. Command-line emission follows this
/// order for the fixed pass; the placeholder-bearing options (non-empty
/// `tokens`) are appended after it, and the config file serializes every
/// row top to bottom.
pub static OPTIONS: &[OptionSpec] = &[
    OptionSpec {
        key: OptionKey::Verbose,
        name: "verbose",
        default: "-2",
        help: "Verbosity of diagnostic output.\nverbose=<n>\nn<0 enables debug output; more negative is more verbose.",
        tokens: &[],
        emission: EmissionRule::Value,
    },
    OptionSpec {
        key: OptionKey::SwathWidth,
        name: "swath-width",
        default: "90",
        help: "Maximum angular width of the sonar swath processed.\nswath-width=<angle_deg>",
        tokens: &[],
        emission: EmissionRule::Value,
    },
    OptionSpec {
        key: OptionKey::Soundings,
        name: "soundings",
        default: "11",
        help: "Number of soundings retained across the swath after decimation.\nsoundings=<n>",
        tokens: &[],
        emission: EmissionRule::Value,
    },
    OptionSpec {
        key: OptionKey::Format,
        name: "format",
        default: "88",
        help: "MB-System format id of the input data.\nformat=<id>\n88: Reson 7k series multibeam",
        tokens: &[],
        emission: EmissionRule::Value,
    },
    OptionSpec {
        key: OptionKey::MedianFilter,
        name: "median-filter",
        default: "0.10/9/3",
        help: "Median filter applied to soundings before decimation.\nmedian-filter=<threshold>/<n_across>/<n_along>",
        tokens: &[],
        emission: EmissionRule::Value,
    },
    OptionSpec {
        key: OptionKey::PlatformFile,
        name: "platform-file",
        default: "",
        help: "MB-System platform file describing the survey platform.\nplatform-file=<path>",
        tokens: &[],
        emission: EmissionRule::Value,
    },
    OptionSpec {
        key: OptionKey::PlatformTargetSensor,
        name: "platform-target-sensor",
        default: "",
        help: "Index of the platform sensor whose data is processed.\nplatform-target-sensor=<n>",
        tokens: &[],
        emission: EmissionRule::Value,
    },
    OptionSpec {
        key: OptionKey::Projection,
        name: "projection",
        default: "",
        help: "Map projection applied to output positions.\nprojection=<projection_id>",
        tokens: &[],
        emission: EmissionRule::Value,
    },
    OptionSpec {
        key: OptionKey::MbHbn,
        name: "mbhbn",
        default: "0",
        help: "MB1 server heartbeat modulus, pings between heartbeats.\nmbhbn=<n>\n0 disables ping-count heartbeats.",
        tokens: &[],
        emission: EmissionRule::Value,
    },
    OptionSpec {
        key: OptionKey::MbHbt,
        name: "mbhbt",
        default: "",
        help: "MB1 server heartbeat timeout, seconds. Deployment-specific.\nmbhbt=<seconds>",
        tokens: &[],
        emission: EmissionRule::Value,
    },
    OptionSpec {
        key: OptionKey::TrnHbt,
        name: "trnhbt",
        default: "",
        help: "TRN server heartbeat timeout, seconds. Deployment-specific.\ntrnhbt=<seconds>",
        tokens: &[],
        emission: EmissionRule::Value,
    },
    OptionSpec {
        key: OptionKey::TrnuHbt,
        name: "trnuhbt",
        default: "",
        help: "TRN update server heartbeat timeout, seconds. Deployment-specific.\ntrnuhbt=<seconds>",
        tokens: &[],
        emission: EmissionRule::Value,
    },
    OptionSpec {
        key: OptionKey::Delay,
        name: "delay",
        default: "0",
        help: "Delay inserted between processed pings, milliseconds.\ndelay=<ms>",
        tokens: &[],
        emission: EmissionRule::Value,
    },
    OptionSpec {
        key: OptionKey::StatSec,
        name: "statsec",
        default: "30",
        help: "Statistics logging interval, seconds.\nstatsec=<seconds>",
        tokens: &[],
        emission: EmissionRule::Value,
    },
    OptionSpec {
        key: OptionKey::StatFlags,
        name: "statflags",
        default: "MSF_ASTAT|MSF_PSTAT",
        help: "Statistics channels, '|'-joined.\nstatflags=<MSF_STATUS|MSF_EVENT|MSF_ASTAT|MSF_PSTAT|MSF_READER>",
        tokens: &[],
        emission: EmissionRule::Value,
    },
    OptionSpec {
        key: OptionKey::TrnEn,
        name: "trn-en",
        default: "en",
        help: "Enable or disable terrain-relative navigation processing.\nLegal values: en, dis\nEmitted as --trn-en or --trn-dis.",
        tokens: &[],
        emission: EmissionRule::TrnToggle,
    },
    OptionSpec {
        key: OptionKey::TrnUtm,
        name: "trn-utm",
        default: "10",
        help: "UTM zone of the TRN map.\ntrn-utm=<zone> (1..60; 10 covers the California coast)",
        tokens: &[],
        emission: EmissionRule::Value,
    },
    OptionSpec {
        key: OptionKey::TrnMtype,
        name: "trn-mtype",
        default: "1",
        help: "TRN map type.\ntrn-mtype=<n>\n1: DEM grid\n2: octree",
        tokens: &[],
        emission: EmissionRule::Value,
    },
    OptionSpec {
        key: OptionKey::TrnFtype,
        name: "trn-ftype",
        default: "2",
        help: "TRN filter type.\ntrn-ftype=<n>\n0: none\n1: point mass\n2: particle\n3: bank",
        tokens: &[],
        emission: EmissionRule::Value,
    },
    OptionSpec {
        key: OptionKey::TrnFgrade,
        name: "trn-fgrade",
        default: "1",
        help: "TRN filter grade.\ntrn-fgrade=<n>\n0: low grade\n1: high grade",
        tokens: &[],
        emission: EmissionRule::Value,
    },
    OptionSpec {
        key: OptionKey::TrnFreinit,
        name: "trn-freinit",
        default: "1",
        help: "Allow filter reinitialization when convergence is lost.\ntrn-freinit=<0|1>",
        tokens: &[],
        emission: EmissionRule::Value,
    },
    OptionSpec {
        key: OptionKey::TrnMweight,
        name: "trn-mweight",
        default: "4",
        help: "Modified sounding weighting scheme.\ntrn-mweight=<n>\n0: none\n1: shandor\n2: crossbeam\n3: subcloud\n4: subcloud NISON",
        tokens: &[],
        emission: EmissionRule::Value,
    },
    OptionSpec {
        key: OptionKey::TrnNcov,
        name: "trn-ncov",
        default: "49",
        help: "Convergence gate: maximum northing covariance.\ntrn-ncov=<m^2>",
        tokens: &[],
        emission: EmissionRule::Value,
    },
    OptionSpec {
        key: OptionKey::TrnNerr,
        name: "trn-nerr",
        default: "50",
        help: "Convergence gate: maximum northing error.\ntrn-nerr=<m>",
        tokens: &[],
        emission: EmissionRule::Value,
    },
    OptionSpec {
        key: OptionKey::TrnEcov,
        name: "trn-ecov",
        default: "49",
        help: "Convergence gate: maximum easting covariance.\ntrn-ecov=<m^2>",
        tokens: &[],
        emission: EmissionRule::Value,
    },
    OptionSpec {
        key: OptionKey::TrnEerr,
        name: "trn-eerr",
        default: "50",
        help: "Convergence gate: maximum easting error.\ntrn-eerr=<m>",
        tokens: &[],
        emission: EmissionRule::Value,
    },
    OptionSpec {
        key: OptionKey::TrnDecn,
        name: "trn-decn",
        default: "9",
        help: "TRN update decimation modulus, pings between updates.\ntrn-decn=<n>",
        tokens: &[],
        emission: EmissionRule::Value,
    },
    OptionSpec {
        key: OptionKey::ReinitGain,
        name: "reinit-gain",
        default: "dis",
        help: "Reinitialize TRN when the sonar transmit gain drops below threshold.\nNo-argument flag; present on the command line only while enabled.\nLegal values: en, dis",
        tokens: &[],
        emission: EmissionRule::BareFlag,
    },
    OptionSpec {
        key: OptionKey::ReinitFile,
        name: "reinit-file",
        default: "0",
        help: "Reinitialize TRN at the start of each input file.\nreinit-file=<0|1>",
        tokens: &[],
        emission: EmissionRule::Value,
    },
    OptionSpec {
        key: OptionKey::ReinitXyOffset,
        name: "reinit-xyoffset",
        default: "150.0",
        help: "Reinitialize TRN when the lateral offset magnitude exceeds this value, meters.\nreinit-xyoffset=<m>",
        tokens: &[],
        emission: EmissionRule::Value,
    },
    OptionSpec {
        key: OptionKey::ReinitZOffset,
        name: "reinit-zoffset",
        default: "2.0/2.0",
        help: "Reinitialize TRN when the vertical offset leaves this window, meters.\nreinit-zoffset=<z_down>/<z_up>",
        tokens: &[],
        emission: EmissionRule::Value,
    },
    OptionSpec {
        key: OptionKey::CovarianceMagnitudeMax,
        name: "covariance-magnitude-max",
        default: "5.0",
        help: "Maximum covariance magnitude accepted as converged.\ncovariance-magnitude-max=<m>",
        tokens: &[],
        emission: EmissionRule::Value,
    },
    OptionSpec {
        key: OptionKey::ConvergenceRepeatMin,
        name: "convergence-repeat-min",
        default: "200",
        help: "Consecutive converged updates required before offsets are used.\nconvergence-repeat-min=<n>",
        tokens: &[],
        emission: EmissionRule::Value,
    },
    // Placeholder whitelist. Emitted after the fixed-order pass, resolved
    // per the token bindings below.
    OptionSpec {
        key: OptionKey::Input,
        name: "input",
        default: "socket:TRN_RESON_HOST:7000:0",
        help: "Input data source.\ninput=<datalist>|<file>|socket:<addr>:<port>:<bcast_group>\nTRN_RESON_HOST is replaced with the sonar host address.",
        tokens: &[Token::ResonHost],
        emission: EmissionRule::Value,
    },
    OptionSpec {
        key: OptionKey::LogDirectory,
        name: "log-directory",
        default: "TRN_LOGFILES",
        help: "Directory where mbtrnpp writes its log files.\nlog-directory=<path>\nTRN_LOGFILES is replaced with the deployment log directory.",
        tokens: &[Token::Logfiles],
        emission: EmissionRule::Value,
    },
    OptionSpec {
        key: OptionKey::TrnMap,
        name: "trn-map",
        default: "TRN_MAPFILES/PortTiles",
        help: "TRN map file (mtype 1) or tile directory (mtype 2).\ntrn-map=<path>\nTRN_MAPFILES is replaced with the deployment map directory.",
        tokens: &[Token::Mapfiles],
        emission: EmissionRule::Value,
    },
    OptionSpec {
        key: OptionKey::TrnPar,
        name: "trn-par",
        default: "TRN_DATAFILES/particles.cfg",
        help: "TRN particle file.\ntrn-par=<path>\nTRN_DATAFILES is replaced with the deployment data directory.",
        tokens: &[Token::Datafiles],
        emission: EmissionRule::Value,
    },
    OptionSpec {
        key: OptionKey::TrnCfg,
        name: "trn-cfg",
        default: "TRN_DATAFILES/mappingAUV_specs.cfg",
        help: "TRN configuration file.\ntrn-cfg=<path>\nTRN_DATAFILES is replaced with the deployment data directory.",
        tokens: &[Token::Datafiles],
        emission: EmissionRule::Value,
    },
    OptionSpec {
        key: OptionKey::Output,
        name: "output",
        default: "file:mbtrnpp_SESSION.mb1",
        help: "MB1 output destination(s), comma-joined.\noutput=file:<path>|socket:<addr>:<port>|socket\nSESSION is replaced with the UTC session timestamp (YYYYMMDD-HHMMSS).",
        tokens: &[Token::TrnHost, Token::Session],
        emission: EmissionRule::Value,
    },
    OptionSpec {
        key: OptionKey::MbOut,
        name: "mb-out",
        default: "mb1svr:TRN_HOST:27000",
        help: "MB1 record output channels, comma-joined.\nmb-out=mb1svr:<addr>:<port>|mb1|reson|file:<path>|nomb1|nomb1svr\nTRN_HOST is replaced with the output host address.",
        tokens: &[Token::TrnHost, Token::Session],
        emission: EmissionRule::Value,
    },
    OptionSpec {
        key: OptionKey::TrnOut,
        name: "trn-out",
        default: "trnsvr:TRN_HOST:28000,trnu",
        help: "TRN estimate output channels, comma-joined.\ntrn-out=trnsvr:<addr>:<port>|trnusvr:<addr>:<port>|trnu|sout|serr|debug\nTRN_HOST is replaced with the output host address.",
        tokens: &[Token::TrnHost],
        emission: EmissionRule::Value,
    },
    OptionSpec {
        key: OptionKey::TrnMid,
        name: "trn-mid",
        default: "mb-TRN_SESSION",
        help: "TRN mission id, names the TRN log session.\ntrn-mid=<id>\nTRN_SESSION is replaced with the UTC mission day (YYYY.DDD).",
        tokens: &[Token::TrnSession],
        emission: EmissionRule::Value,
    },
    // Deployment fields. Feed the placeholder tokens, the environment
    // prefix, and the binary path; never emitted as flags.
    OptionSpec {
        key: OptionKey::ResonHost,
        name: "trn-reson-host",
        default: "",
        help: "Deployment: sonar host address substituted for TRN_RESON_HOST.",
        tokens: &[],
        emission: EmissionRule::Hidden,
    },
    OptionSpec {
        key: OptionKey::TrnHost,
        name: "trn-host",
        default: "",
        help: "Deployment: output host address substituted for TRN_HOST.",
        tokens: &[],
        emission: EmissionRule::Hidden,
    },
    OptionSpec {
        key: OptionKey::LogfilesDir,
        name: "trn-logfiles",
        default: "",
        help: "Deployment: log directory substituted for TRN_LOGFILES and used by the\nTRN_LOGFILES environment prefix.",
        tokens: &[],
        emission: EmissionRule::Hidden,
    },
    OptionSpec {
        key: OptionKey::DatafilesDir,
        name: "trn-datafiles",
        default: "",
        help: "Deployment: TRN data directory substituted for TRN_DATAFILES.",
        tokens: &[],
        emission: EmissionRule::Hidden,
    },
    OptionSpec {
        key: OptionKey::MapfilesDir,
        name: "trn-mapfiles",
        default: "",
        help: "Deployment: map directory substituted for TRN_MAPFILES.",
        tokens: &[],
        emission: EmissionRule::Hidden,
    },
    OptionSpec {
        key: OptionKey::BinariesDir,
        name: "trn-binaries",
        default: "",
        help: "Deployment: directory containing the mbtrnpp executable.",
        tokens: &[],
        emission: EmissionRule::Hidden,
    },
    OptionSpec {
        key: OptionKey::EnvLogfiles,
        name: "env-logfiles",
        default: "en",
        help: "Emit the TRN_LOGFILES environment assignment ahead of the invocation.\nLegal values: en, dis",
        tokens: &[],
        emission: EmissionRule::Hidden,
    },
];

// MARK: --- UNIT TESTS ---

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_option_names_are_unique() {
        let mut seen = HashSet::new();
        for spec in OPTIONS {
            assert!(seen.insert(spec.name), "duplicate option name: {}", spec.name);
        }
    }

    #[test]
    fn test_option_keys_are_unique() {
        let mut seen = HashSet::new();
        for spec in OPTIONS {
            assert!(seen.insert(spec.key), "duplicate option key: {:?}", spec.key);
        }
    }

    #[test]
    fn test_every_key_resolves_its_spec() {
        // `spec()` panics on a table miss; walking the table round-trip
        // proves the panic is unreachable.
        for spec in OPTIONS {
            assert_eq!(spec.key.spec().name, spec.name);
            assert_eq!(OptionKey::from_key(spec.name), Some(spec.key));
        }
    }

    #[test]
    fn test_from_key_rejects_unknown_names() {
        assert_eq!(OptionKey::from_key("no-such-option"), None);
        assert_eq!(OptionKey::from_key(""), None);
    }

    #[test]
    fn test_placeholder_whitelist_is_fixed() {
        let whitelist: Vec<&str> = OPTIONS
            .iter()
            .filter(|spec| !spec.tokens.is_empty())
            .map(|spec| spec.name)
            .collect();
        assert_eq!(
            whitelist,
            vec![
                "input",
                "log-directory",
                "trn-map",
                "trn-par",
                "trn-cfg",
                "output",
                "mb-out",
                "trn-out",
                "trn-mid"
            ]
        );
    }

    #[test]
    fn test_hidden_options_bind_no_tokens() {
        for spec in OPTIONS {
            if spec.emission == crate::models::EmissionRule::Hidden {
                assert!(spec.tokens.is_empty(), "{} is hidden yet tokenized", spec.name);
            }
        }
    }
}
