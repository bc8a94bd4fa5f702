//! launcher::sequence
//!
//! Lifecycle sequencing: issue the ordered engine calls for a resolved
//! action and guarantee teardown on every exit path.
//!
//! # State machine
//!
//! The application path moves through
//! `Initialized → ConfigLoaded → UIRan → ConfigWritten → ShutDown`, with a
//! direct failure-shortcut edge to `ShutDown` from any state: the first
//! failing step is reported through the sink and the remaining steps are
//! skipped, but the session is still asked for its exit value and shut
//! down exactly once. Help, version, and usage/validation failures exit
//! before a session ever exists.
//!
//! Ownership replaces the original goto-cleanup discipline: the session
//! handle is consumed by `shutdown`, so forgetting teardown or running it
//! twice is unrepresentable, and the request's strings are freed when the
//! request goes out of scope no matter which step failed.

use std::path::Path;

use super::exit;
use super::request::LaunchRequest;
use super::resolve::{Resolution, ResolvedAction};
use crate::engine::{Engine, EngineError, InitOptions};
use crate::ui::output::{self, ErrorSink};

/// Execute a resolved action against the engine.
///
/// Returns the process exit code: a fixed sentinel for the early-exit
/// actions, the engine's own exit value for any path that reached a live
/// session.
pub fn execute(
    request: LaunchRequest,
    resolution: Resolution,
    engine: &mut dyn Engine,
    sink: &dyn ErrorSink,
) -> i32 {
    match resolution.action {
        ResolvedAction::ShowHelp => {
            crate::cli::print_usage();
            exit::HELP
        }
        ResolvedAction::ShowVersion => {
            crate::cli::print_version();
            exit::VERSION
        }
        ResolvedAction::CreateAuthDb(ref path) => create_auth_database(path, engine, sink),
        _ => run_session(request, resolution, engine, sink),
    }
}

/// Create an authentication database against a transient context.
///
/// The exit code is the same sentinel whether creation succeeded or
/// failed; callers have to inspect the error output to tell. Matches the
/// observed behavior of the original launcher.
fn create_auth_database(path: &Path, engine: &mut dyn Engine, sink: &dyn ErrorSink) -> i32 {
    if let Err(err) = engine.create_auth_database(path, true) {
        sink.error("Error", &err.to_string());
    }
    exit::CREATE_AUTH_DB
}

/// Run the common init → dispatch → teardown sub-sequence.
fn run_session(
    request: LaunchRequest,
    resolution: Resolution,
    engine: &mut dyn Engine,
    sink: &dyn ErrorSink,
) -> i32 {
    // Deferred setters are applied at this single point, immediately
    // before init, so observable engine state at init time is fixed.
    if let Some(theme) = &request.theme_path {
        engine.set_theme_path(theme);
    }
    if let Some(dir) = &request.auth_database_dir {
        engine.set_auth_database_path(dir);
    }
    if let ResolvedAction::CreateDefaultConfig(Some(path)) = &resolution.action {
        engine.set_config_output_path(path);
    }

    let Some(schema_path) = request.schema_path.clone() else {
        // resolve() guarantees a schema path for session actions.
        sink.error("Error", super::resolve::MISSING_SCHEMA);
        return exit::FAILURE;
    };

    let mut session = match engine.init(InitOptions {
        program: env!("CARGO_PKG_NAME").to_string(),
        schema_path,
        flags: resolution.flags,
        session_kind: resolution.session_kind,
        username: request.username.clone(),
        password: request.password.clone(),
    }) {
        Ok(session) => session,
        Err(err) => {
            // The engine never came up, so there is no exit value to query.
            sink.error("Error", &err.to_string());
            return exit::FAILURE;
        }
    };

    let outcome: Result<(), EngineError> = match resolution.action {
        ResolvedAction::RunApplication {
            show_app_version: true,
        } => match session.application_version() {
            Ok(version) => {
                output::line(&version);
                Ok(())
            }
            Err(err) => Err(err),
        },
        ResolvedAction::RunApplication { .. } => (|| {
            session.load_config()?;
            session.run_ui()?;
            session.write_config()
        })(),
        ResolvedAction::ExportDerivedDb(ref path) => session.export_derived_database(path),
        ResolvedAction::CreateDefaultConfig(_) => {
            session.set_force_config_save(true);
            session.set_prompt_before_save(false);
            (|| {
                session.load_config()?;
                session.write_config()
            })()
        }
        // ShowHelp, ShowVersion and CreateAuthDb never reach run_session.
        _ => Ok(()),
    };

    if let Err(err) = outcome {
        sink.error("Error", &err.to_string());
    }

    // Teardown always runs once a session exists; the exit code is the
    // engine's own completion status, even after a failed step.
    let code = session.exit_value();
    session.shutdown();
    code
}
