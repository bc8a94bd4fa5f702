//! launcher::resolve
//!
//! Mode resolution: turn a [`LaunchRequest`] into the single terminal
//! action for this run plus the final capability flags.
//!
//! # Precedence
//!
//! Rules are evaluated in a fixed order; the first match wins:
//!
//! 1. Help requested → [`ResolvedAction::ShowHelp`] (no validation at all)
//! 2. Launcher version requested → [`ResolvedAction::ShowVersion`] (same)
//! 3. Auth-database creation requested → [`ResolvedAction::CreateAuthDb`]
//!    (runs against a transient context, no schema needed)
//! 4. No schema path → validation error
//! 5. Authentication enabled but credentials incomplete → validation error
//! 6. Otherwise: JXDB export if requested, else default-config creation if
//!    requested, else run the application
//!
//! # Mode-forced disables
//!
//! After the action is chosen, [`apply_action_overrides`] disables the
//! capabilities the action is incompatible with. Overrides only ever
//! disable; a flag an option turned off stays off.

use super::flags::{Capability, CapabilitySet};
use super::request::{LaunchRequest, SessionKind};
use super::LaunchError;
use std::path::PathBuf;

/// Validation message when no JTF file was given.
pub const MISSING_SCHEMA: &str = "A JTF file name should be passed to the interpreter.";

/// Validation message when authentication is on but credentials are not.
pub const MISSING_CREDENTIALS: &str =
    "A username/password must be used to run the application!";

/// The single terminal action selected for a run.
///
/// Each variant carries only the data its branch needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedAction {
    /// Print usage and exit with the help sentinel.
    ShowHelp,
    /// Print the launcher version and exit with the version sentinel.
    ShowVersion,
    /// Create an authentication database at the given path.
    CreateAuthDb(PathBuf),
    /// Export the schema as a JXDB database at the given path.
    ExportDerivedDb(PathBuf),
    /// Create the application's default configuration file.
    CreateDefaultConfig(Option<PathBuf>),
    /// Run the application, or just print its version when `-V` was given.
    RunApplication {
        /// Print the application version instead of entering the UI.
        show_app_version: bool,
    },
}

/// Resolver output: the action plus the final flag set and session kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub action: ResolvedAction,
    pub flags: CapabilitySet,
    pub session_kind: SessionKind,
}

/// Resolve a launch request into exactly one terminal action.
///
/// # Errors
///
/// Returns [`LaunchError::Validation`] when the schema path is missing or
/// when authentication is enabled without complete credentials.
pub fn resolve(request: &LaunchRequest) -> Result<Resolution, LaunchError> {
    if request.want_help {
        return Ok(early(ResolvedAction::ShowHelp, request));
    }

    if request.want_version {
        return Ok(early(ResolvedAction::ShowVersion, request));
    }

    if let Some(path) = &request.create_auth_db_path {
        return Ok(early(ResolvedAction::CreateAuthDb(path.clone()), request));
    }

    if request.schema_path.is_none() {
        return Err(LaunchError::Validation(MISSING_SCHEMA.to_string()));
    }

    if request.flags.has(&Capability::UseAuth)
        && (request.username.is_none() || request.password.is_none())
    {
        return Err(LaunchError::Validation(MISSING_CREDENTIALS.to_string()));
    }

    let action = if let Some(path) = &request.jxdb_export_path {
        ResolvedAction::ExportDerivedDb(path.clone())
    } else if request.create_config {
        ResolvedAction::CreateDefaultConfig(request.config_output_path.clone())
    } else {
        ResolvedAction::RunApplication {
            show_app_version: request.want_app_version,
        }
    };

    let flags = apply_action_overrides(request.flags.clone(), &action);

    Ok(Resolution {
        action,
        flags,
        session_kind: request.session_kind,
    })
}

/// Apply the mode-forced capability disables for an action.
///
/// Pure function; testable without argument parsing. Only disables, never
/// enables:
///
/// - `CreateDefaultConfig` forces UseAuth and UseModule off
/// - `ExportDerivedDb` forces UseModule off and leaves UseAuth alone
pub fn apply_action_overrides(
    mut flags: CapabilitySet,
    action: &ResolvedAction,
) -> CapabilitySet {
    match action {
        ResolvedAction::CreateDefaultConfig(_) => {
            flags.remove(&Capability::UseAuth);
            flags.remove(&Capability::UseModule);
        }
        ResolvedAction::ExportDerivedDb(_) => {
            flags.remove(&Capability::UseModule);
        }
        _ => {}
    }
    flags
}

fn early(action: ResolvedAction, request: &LaunchRequest) -> Resolution {
    Resolution {
        action,
        flags: request.flags.clone(),
        session_kind: request.session_kind,
    }
}
