//! engine::xante
//!
//! Placeholder adapter for the libxante backend.
//!
//! The real backend links against libxante and owns UI rendering, the
//! authentication database, configuration persistence, and JTF schema
//! interpretation. Until it lands, this adapter records the pre-init
//! setters and refuses every fallible operation with
//! [`EngineError::NotImplemented`], so the launcher's early-exit paths
//! (help, version, usage and validation errors) remain fully usable.

use std::path::{Path, PathBuf};

use super::traits::{Engine, EngineError, EngineSession, InitOptions};

/// Stub engine standing in for the libxante backend.
#[derive(Debug, Default)]
pub struct XanteEngine {
    theme_path: Option<PathBuf>,
    auth_database_path: Option<PathBuf>,
    config_output_path: Option<PathBuf>,
}

impl XanteEngine {
    /// Create a new adapter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Theme file recorded by the last `set_theme_path` call.
    pub fn theme_path(&self) -> Option<&Path> {
        self.theme_path.as_deref()
    }

    /// Directory recorded by the last `set_auth_database_path` call.
    pub fn auth_database_path(&self) -> Option<&Path> {
        self.auth_database_path.as_deref()
    }

    /// Output path recorded by the last `set_config_output_path` call.
    pub fn config_output_path(&self) -> Option<&Path> {
        self.config_output_path.as_deref()
    }

    fn unavailable() -> EngineError {
        EngineError::NotImplemented("libxante backend is not built into this binary".into())
    }
}

impl Engine for XanteEngine {
    fn name(&self) -> &'static str {
        "xante"
    }

    fn set_theme_path(&mut self, path: &Path) {
        self.theme_path = Some(path.to_path_buf());
    }

    fn set_auth_database_path(&mut self, path: &Path) {
        self.auth_database_path = Some(path.to_path_buf());
    }

    fn set_config_output_path(&mut self, path: &Path) {
        self.config_output_path = Some(path.to_path_buf());
    }

    fn create_auth_database(&mut self, _path: &Path, _overwrite: bool) -> Result<(), EngineError> {
        Err(Self::unavailable())
    }

    fn init(&mut self, _options: InitOptions) -> Result<Box<dyn EngineSession>, EngineError> {
        Err(Self::unavailable())
    }
}
