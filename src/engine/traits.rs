//! engine::traits
//!
//! Engine trait definitions for the external application engine.
//!
//! # Design
//!
//! The engine is the collaborator that actually renders the interactive UI,
//! stores the authentication database, persists configuration, and
//! interprets the JTF schema. The launcher only needs the narrow contract
//! defined here.
//!
//! The contract is split across two traits:
//!
//! - [`Engine`] - operations valid before (or without) an initialized
//!   session: the stateless pre-init setters, auth-database creation, and
//!   `init` itself.
//! - [`EngineSession`] - operations that require a live handle. A session
//!   is obtained only from [`Engine::init`] and ends when
//!   [`EngineSession::shutdown`] consumes it, so calling a post-init
//!   operation without a live handle is a compile error rather than a
//!   runtime check.
//!
//! All calls are synchronous; the engine runs in-process and the launcher
//! is single-threaded.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::launcher::flags::CapabilitySet;
use crate::launcher::request::SessionKind;

/// Errors reported by the application engine.
///
/// The `Display` text of a variant is the engine's "last error" message
/// and is what the error sink shows to the user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Engine initialization failed.
    #[error("initialization failed: {0}")]
    InitFailed(String),

    /// The JTF schema file could not be read or interpreted.
    #[error("schema error: {0}")]
    Schema(String),

    /// Authentication against the auth database failed.
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// Configuration could not be loaded or written.
    #[error("config error: {0}")]
    Config(String),

    /// The interactive UI failed.
    #[error("ui error: {0}")]
    Ui(String),

    /// JXDB export failed.
    #[error("export failed: {0}")]
    ExportFailed(String),

    /// The authentication database could not be created.
    #[error("auth database error: {0}")]
    AuthDatabase(String),

    /// The operation is not supported by this engine backend.
    #[error("not implemented: {0}")]
    NotImplemented(String),
}

/// Options passed to [`Engine::init`].
///
/// Collected from the resolved launch request at the single point
/// immediately before initialization.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Program name reported to the engine.
    pub program: String,
    /// Path to the JTF schema file. Mandatory for every session.
    pub schema_path: PathBuf,
    /// Final capability flags after mode-forced disables.
    pub flags: CapabilitySet,
    /// Whether the login persists across launches.
    pub session_kind: SessionKind,
    /// Username, absent when authentication is disabled.
    pub username: Option<String>,
    /// Password, absent when authentication is disabled.
    pub password: Option<String>,
}

/// The engine boundary for operations that do not require a live session.
pub trait Engine {
    /// Get the backend name (e.g., "xante", "mock").
    fn name(&self) -> &'static str;

    /// Set the UI theme file to use for the next session.
    ///
    /// Stateless configuration call; takes effect at `init`.
    fn set_theme_path(&mut self, path: &Path);

    /// Set the directory holding the authentication database.
    fn set_auth_database_path(&mut self, path: &Path);

    /// Set the output path for a created default configuration.
    fn set_config_output_path(&mut self, path: &Path);

    /// Create an empty authentication database at `path`.
    ///
    /// Runs against a transient context; no session is created.
    ///
    /// # Errors
    ///
    /// - `AuthDatabase` if the database cannot be created
    fn create_auth_database(&mut self, path: &Path, overwrite: bool) -> Result<(), EngineError>;

    /// Initialize the engine and return a live session handle.
    ///
    /// # Errors
    ///
    /// - `Schema` if the JTF file cannot be interpreted
    /// - `AuthFailed` if the credentials are rejected
    /// - `InitFailed` for any other startup failure
    fn init(&mut self, options: InitOptions) -> Result<Box<dyn EngineSession>, EngineError>;
}

/// A live engine session.
///
/// Created by [`Engine::init`] and destroyed exactly once by
/// [`EngineSession::shutdown`], which consumes the handle.
pub trait EngineSession {
    /// Load the application's runtime configuration.
    fn load_config(&mut self) -> Result<(), EngineError>;

    /// Enter the interactive UI and block until the user leaves it.
    fn run_ui(&mut self) -> Result<(), EngineError>;

    /// Write back the (possibly changed) runtime configuration.
    fn write_config(&mut self) -> Result<(), EngineError>;

    /// Export the loaded schema as a compiled JXDB database at `path`.
    fn export_derived_database(&mut self, path: &Path) -> Result<(), EngineError>;

    /// Version string of the application described by the JTF file.
    fn application_version(&mut self) -> Result<String, EngineError>;

    /// Force configuration saving even when nothing changed.
    fn set_force_config_save(&mut self, on: bool);

    /// Toggle the save-confirmation prompt shown on exit.
    fn set_prompt_before_save(&mut self, on: bool);

    /// The engine's own completion status for this session.
    ///
    /// This becomes the launcher's process exit code on the main path.
    fn exit_value(&self) -> i32;

    /// Tear the session down. Consumes the handle, so a session can be
    /// shut down at most once.
    fn shutdown(self: Box<Self>);
}
