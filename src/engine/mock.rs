//! engine::mock
//!
//! Mock engine implementation for deterministic testing.
//!
//! # Design
//!
//! The mock engine provides a deterministic implementation of the
//! [`Engine`] and [`EngineSession`] traits. It records every call in
//! order and allows configuring a single operation to fail, which is how
//! the lifecycle tests inject failures at each step.
//!
//! Sessions share state with the engine that created them, so a test can
//! run the full lifecycle and then inspect the complete call log (and the
//! shutdown count) from the engine handle it kept.
//!
//! # Example
//!
//! ```
//! use xanter::engine::mock::{MockEngine, MockOperation};
//! use xanter::engine::{Engine, EngineSession, InitOptions};
//! use xanter::launcher::flags::CapabilitySet;
//! use xanter::launcher::request::SessionKind;
//!
//! let mut engine = MockEngine::new().with_exit_value(7);
//! let mut session = engine
//!     .init(InitOptions {
//!         program: "xanter".into(),
//!         schema_path: "app.jtf".into(),
//!         flags: CapabilitySet::all(),
//!         session_kind: SessionKind::Single,
//!         username: Some("alice".into()),
//!         password: Some("secret".into()),
//!     })
//!     .unwrap();
//!
//! session.load_config().unwrap();
//! assert_eq!(session.exit_value(), 7);
//! session.shutdown();
//!
//! assert_eq!(engine.shutdown_count(), 1);
//! assert!(matches!(engine.operations()[1], MockOperation::LoadConfig));
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::traits::{Engine, EngineError, EngineSession, InitOptions};
use crate::launcher::request::SessionKind;

/// Mock engine for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping; clones share state.
#[derive(Debug, Clone)]
pub struct MockEngine {
    /// Internal state shared across clones and sessions.
    inner: Arc<Mutex<MockEngineInner>>,
}

/// Internal mutable state.
#[derive(Debug)]
struct MockEngineInner {
    /// Operation to fail (for testing error paths).
    fail_on: Option<FailOn>,
    /// Recorded operations for verification.
    operations: Vec<MockOperation>,
    /// Exit value reported by sessions.
    exit_value: i32,
    /// Version string reported by `application_version`.
    application_version: String,
    /// Number of times a session was shut down.
    shutdown_count: usize,
}

/// Configuration for which operation should fail.
#[derive(Debug, Clone)]
pub enum FailOn {
    /// Fail `create_auth_database` with the given error.
    CreateAuthDatabase(EngineError),
    /// Fail `init` with the given error.
    Init(EngineError),
    /// Fail `load_config` with the given error.
    LoadConfig(EngineError),
    /// Fail `run_ui` with the given error.
    RunUi(EngineError),
    /// Fail `write_config` with the given error.
    WriteConfig(EngineError),
    /// Fail `export_derived_database` with the given error.
    ExportDerivedDatabase(EngineError),
    /// Fail `application_version` with the given error.
    ApplicationVersion(EngineError),
}

/// Recorded operation for test verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockOperation {
    SetThemePath {
        path: PathBuf,
    },
    SetAuthDatabasePath {
        path: PathBuf,
    },
    SetConfigOutputPath {
        path: PathBuf,
    },
    CreateAuthDatabase {
        path: PathBuf,
        overwrite: bool,
    },
    Init {
        schema_path: PathBuf,
        use_auth: bool,
        use_module: bool,
        single_instance: bool,
        session_kind: SessionKind,
        username: Option<String>,
    },
    LoadConfig,
    RunUi,
    WriteConfig,
    ExportDerivedDatabase {
        path: PathBuf,
    },
    ApplicationVersion,
    SetForceConfigSave {
        on: bool,
    },
    SetPromptBeforeSave {
        on: bool,
    },
    Shutdown,
}

impl MockEngine {
    /// Create a new mock engine with exit value 0.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(MockEngineInner {
                fail_on: None,
                operations: Vec::new(),
                exit_value: 0,
                application_version: "mock-app 1.0".to_string(),
                shutdown_count: 0,
            })),
        }
    }

    /// Set the exit value sessions will report.
    pub fn with_exit_value(self, exit_value: i32) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.exit_value = exit_value;
        }
        self
    }

    /// Set the version string `application_version` will return.
    pub fn with_application_version(self, version: &str) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.application_version = version.to_string();
        }
        self
    }

    /// Configure the mock to fail on a specific operation.
    ///
    /// # Example
    ///
    /// ```
    /// use xanter::engine::mock::{FailOn, MockEngine};
    /// use xanter::engine::EngineError;
    ///
    /// let engine = MockEngine::new()
    ///     .fail_on(FailOn::Init(EngineError::Schema("bad JTF".into())));
    /// ```
    pub fn fail_on(self, fail_on: FailOn) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.fail_on = Some(fail_on);
        }
        self
    }

    /// Clear the failure configuration.
    pub fn clear_fail_on(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.fail_on = None;
    }

    /// Get all recorded operations.
    ///
    /// Useful for verifying call order across the whole lifecycle.
    pub fn operations(&self) -> Vec<MockOperation> {
        let inner = self.inner.lock().unwrap();
        inner.operations.clone()
    }

    /// Clear recorded operations.
    pub fn clear_operations(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.clear();
    }

    /// Number of times a session was shut down.
    pub fn shutdown_count(&self) -> usize {
        let inner = self.inner.lock().unwrap();
        inner.shutdown_count
    }

    /// Record an operation.
    fn record(&self, op: MockOperation) {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(op);
    }

    /// Check if the named operation should fail and return the error if so.
    fn check_fail(&self, expected: &str) -> Option<EngineError> {
        let inner = self.inner.lock().unwrap();
        match &inner.fail_on {
            Some(FailOn::CreateAuthDatabase(e)) if expected == "create_auth_database" => {
                Some(e.clone())
            }
            Some(FailOn::Init(e)) if expected == "init" => Some(e.clone()),
            Some(FailOn::LoadConfig(e)) if expected == "load_config" => Some(e.clone()),
            Some(FailOn::RunUi(e)) if expected == "run_ui" => Some(e.clone()),
            Some(FailOn::WriteConfig(e)) if expected == "write_config" => Some(e.clone()),
            Some(FailOn::ExportDerivedDatabase(e)) if expected == "export_derived_database" => {
                Some(e.clone())
            }
            Some(FailOn::ApplicationVersion(e)) if expected == "application_version" => {
                Some(e.clone())
            }
            _ => None,
        }
    }
}

impl Default for MockEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for MockEngine {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn set_theme_path(&mut self, path: &Path) {
        self.record(MockOperation::SetThemePath {
            path: path.to_path_buf(),
        });
    }

    fn set_auth_database_path(&mut self, path: &Path) {
        self.record(MockOperation::SetAuthDatabasePath {
            path: path.to_path_buf(),
        });
    }

    fn set_config_output_path(&mut self, path: &Path) {
        self.record(MockOperation::SetConfigOutputPath {
            path: path.to_path_buf(),
        });
    }

    fn create_auth_database(&mut self, path: &Path, overwrite: bool) -> Result<(), EngineError> {
        self.record(MockOperation::CreateAuthDatabase {
            path: path.to_path_buf(),
            overwrite,
        });
        match self.check_fail("create_auth_database") {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn init(&mut self, options: InitOptions) -> Result<Box<dyn EngineSession>, EngineError> {
        use crate::launcher::flags::Capability;

        self.record(MockOperation::Init {
            schema_path: options.schema_path.clone(),
            use_auth: options.flags.has(&Capability::UseAuth),
            use_module: options.flags.has(&Capability::UseModule),
            single_instance: options.flags.has(&Capability::SingleInstance),
            session_kind: options.session_kind,
            username: options.username.clone(),
        });
        if let Some(err) = self.check_fail("init") {
            return Err(err);
        }
        Ok(Box::new(MockSession {
            inner: Arc::clone(&self.inner),
        }))
    }
}

/// Session handle produced by [`MockEngine::init`].
///
/// Shares state with the engine that created it.
#[derive(Debug)]
struct MockSession {
    inner: Arc<Mutex<MockEngineInner>>,
}

impl MockSession {
    fn record(&self, op: MockOperation) {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(op);
    }

    fn check_fail(&self, expected: &str) -> Option<EngineError> {
        let inner = self.inner.lock().unwrap();
        match &inner.fail_on {
            Some(FailOn::LoadConfig(e)) if expected == "load_config" => Some(e.clone()),
            Some(FailOn::RunUi(e)) if expected == "run_ui" => Some(e.clone()),
            Some(FailOn::WriteConfig(e)) if expected == "write_config" => Some(e.clone()),
            Some(FailOn::ExportDerivedDatabase(e)) if expected == "export_derived_database" => {
                Some(e.clone())
            }
            Some(FailOn::ApplicationVersion(e)) if expected == "application_version" => {
                Some(e.clone())
            }
            _ => None,
        }
    }

    fn step(&mut self, name: &str, op: MockOperation) -> Result<(), EngineError> {
        self.record(op);
        match self.check_fail(name) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl EngineSession for MockSession {
    fn load_config(&mut self) -> Result<(), EngineError> {
        self.step("load_config", MockOperation::LoadConfig)
    }

    fn run_ui(&mut self) -> Result<(), EngineError> {
        self.step("run_ui", MockOperation::RunUi)
    }

    fn write_config(&mut self) -> Result<(), EngineError> {
        self.step("write_config", MockOperation::WriteConfig)
    }

    fn export_derived_database(&mut self, path: &Path) -> Result<(), EngineError> {
        self.step(
            "export_derived_database",
            MockOperation::ExportDerivedDatabase {
                path: path.to_path_buf(),
            },
        )
    }

    fn application_version(&mut self) -> Result<String, EngineError> {
        self.record(MockOperation::ApplicationVersion);
        if let Some(err) = self.check_fail("application_version") {
            return Err(err);
        }
        let inner = self.inner.lock().unwrap();
        Ok(inner.application_version.clone())
    }

    fn set_force_config_save(&mut self, on: bool) {
        self.record(MockOperation::SetForceConfigSave { on });
    }

    fn set_prompt_before_save(&mut self, on: bool) {
        self.record(MockOperation::SetPromptBeforeSave { on });
    }

    fn exit_value(&self) -> i32 {
        let inner = self.inner.lock().unwrap();
        inner.exit_value
    }

    fn shutdown(self: Box<Self>) {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(MockOperation::Shutdown);
        inner.shutdown_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launcher::flags::CapabilitySet;

    fn init_options() -> InitOptions {
        InitOptions {
            program: "xanter".into(),
            schema_path: PathBuf::from("app.jtf"),
            flags: CapabilitySet::all(),
            session_kind: SessionKind::Single,
            username: Some("alice".into()),
            password: Some("secret".into()),
        }
    }

    #[test]
    fn records_operations_in_order() {
        let mut engine = MockEngine::new();
        engine.set_theme_path(Path::new("dark.theme"));
        let mut session = engine.init(init_options()).unwrap();
        session.load_config().unwrap();
        session.run_ui().unwrap();
        session.write_config().unwrap();
        session.shutdown();

        let ops = engine.operations();
        assert!(matches!(ops[0], MockOperation::SetThemePath { .. }));
        assert!(matches!(ops[1], MockOperation::Init { .. }));
        assert_eq!(
            ops[2..],
            [
                MockOperation::LoadConfig,
                MockOperation::RunUi,
                MockOperation::WriteConfig,
                MockOperation::Shutdown,
            ]
        );
    }

    #[test]
    fn init_records_flag_state() {
        let mut engine = MockEngine::new();
        let mut flags = CapabilitySet::all();
        flags.remove(&crate::launcher::flags::Capability::UseModule);
        let options = InitOptions {
            flags,
            ..init_options()
        };
        let session = engine.init(options).unwrap();
        drop(session);

        match &engine.operations()[0] {
            MockOperation::Init {
                use_auth,
                use_module,
                single_instance,
                ..
            } => {
                assert!(*use_auth);
                assert!(!*use_module);
                assert!(*single_instance);
            }
            op => panic!("unexpected operation: {op:?}"),
        }
    }

    #[test]
    fn fail_on_init_returns_error() {
        let mut engine =
            MockEngine::new().fail_on(FailOn::Init(EngineError::Schema("bad JTF".into())));
        let err = engine.init(init_options()).err();
        assert_eq!(err, Some(EngineError::Schema("bad JTF".into())));
    }

    #[test]
    fn fail_on_load_config_only_affects_load_config() {
        let mut engine =
            MockEngine::new().fail_on(FailOn::LoadConfig(EngineError::Config("broken".into())));
        let mut session = engine.init(init_options()).unwrap();
        assert!(session.load_config().is_err());
        assert!(session.run_ui().is_ok());
        session.shutdown();
    }

    #[test]
    fn clear_fail_on_resets_failure() {
        let engine =
            MockEngine::new().fail_on(FailOn::Init(EngineError::InitFailed("boom".into())));
        engine.clear_fail_on();
        let mut handle = engine.clone();
        assert!(handle.init(init_options()).is_ok());
    }

    #[test]
    fn shutdown_count_tracks_sessions() {
        let mut engine = MockEngine::new();
        assert_eq!(engine.shutdown_count(), 0);
        let session = engine.init(init_options()).unwrap();
        session.shutdown();
        assert_eq!(engine.shutdown_count(), 1);
    }

    #[test]
    fn exit_value_is_configurable() {
        let mut engine = MockEngine::new().with_exit_value(42);
        let session = engine.init(init_options()).unwrap();
        assert_eq!(session.exit_value(), 42);
        session.shutdown();
    }

    #[test]
    fn application_version_is_configurable() {
        let mut engine = MockEngine::new().with_application_version("demo 2.3");
        let mut session = engine.init(init_options()).unwrap();
        assert_eq!(session.application_version().unwrap(), "demo 2.3");
        session.shutdown();
    }
}
