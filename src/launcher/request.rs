//! launcher::request
//!
//! The structured result of option parsing.
//!
//! A [`LaunchRequest`] is built once per invocation by the CLI layer and
//! is immutable afterwards: the resolver reads it to pick a terminal
//! action, and the sequencer consumes it when driving the engine.

use std::path::PathBuf;

use super::flags::CapabilitySet;

/// Whether a login persists across launches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionKind {
    /// The login persists across subsequent launches.
    Continuous,
    /// The user is logged out when the application exits.
    #[default]
    Single,
}

impl std::fmt::Display for SessionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionKind::Continuous => write!(f, "continuous"),
            SessionKind::Single => write!(f, "single"),
        }
    }
}

/// Everything the command line asked for, in structured form.
///
/// Capability flags here reflect option-driven disables only (`-N`, `-T`,
/// `-V`, `-M`); mode-forced disables are applied later by the resolver's
/// override pass.
#[derive(Debug, Clone)]
pub struct LaunchRequest {
    /// Path to the JTF schema file. Required unless the run ends before
    /// validation (help, version, auth-database creation).
    pub schema_path: Option<PathBuf>,
    /// Alternate UI theme file.
    pub theme_path: Option<PathBuf>,
    /// Username for authentication.
    pub username: Option<String>,
    /// Password for authentication.
    pub password: Option<String>,
    /// Session kind. Defaults to [`SessionKind::Single`].
    pub session_kind: SessionKind,
    /// Directory holding the authentication database.
    pub auth_database_dir: Option<PathBuf>,
    /// Destination for a JXDB export. Presence selects the export action.
    pub jxdb_export_path: Option<PathBuf>,
    /// Whether `-C`/`--config` was given.
    pub create_config: bool,
    /// Optional output path attached to `-C`/`--config`.
    pub config_output_path: Option<PathBuf>,
    /// Destination for a new auth database. Presence selects that action.
    pub create_auth_db_path: Option<PathBuf>,
    /// Capability flags after option-driven disables.
    pub flags: CapabilitySet,
    /// Test mode (`-T`); module calls are disabled.
    pub test_mode: bool,
    /// `-h`/`--help` was given.
    pub want_help: bool,
    /// `-v`/`--version` was given (launcher version).
    pub want_version: bool,
    /// `-V` was given (application version).
    pub want_app_version: bool,
}

impl Default for LaunchRequest {
    fn default() -> Self {
        Self {
            schema_path: None,
            theme_path: None,
            username: None,
            password: None,
            session_kind: SessionKind::default(),
            auth_database_dir: None,
            jxdb_export_path: None,
            create_config: false,
            config_output_path: None,
            create_auth_db_path: None,
            flags: CapabilitySet::all(),
            test_mode: false,
            want_help: false,
            want_version: false,
            want_app_version: false,
        }
    }
}
