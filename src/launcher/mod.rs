//! launcher
//!
//! The launcher core: mode resolution and lifecycle sequencing.
//!
//! # Responsibilities
//!
//! - Validate a parsed [`request::LaunchRequest`] and pick exactly one
//!   terminal action ([`resolve`])
//! - Drive the engine through the ordered lifecycle for that action with
//!   guaranteed teardown ([`sequence`])
//! - Define the process exit sentinels ([`exit`])
//!
//! # Architecture
//!
//! The launcher owns no I/O of its own beyond the error sink it is given;
//! the CLI layer hands it a request, an engine backend, and a sink, and
//! gets back a process exit code.

pub mod flags;
pub mod request;
pub mod resolve;
pub mod sequence;

pub use flags::{Capability, CapabilitySet};
pub use request::{LaunchRequest, SessionKind};
pub use resolve::{Resolution, ResolvedAction};

use thiserror::Error;

use crate::engine::Engine;
use crate::ui::output::ErrorSink;

/// Process exit sentinels.
///
/// Help, version, and auth-database creation are "early exits" with fixed
/// codes, never application exit values. The main application path's exit
/// code is whatever the engine reports; callers must not assume 0 means
/// success there.
pub mod exit {
    /// Help was shown.
    pub const HELP: i32 = 1;
    /// The launcher version was shown.
    pub const VERSION: i32 = 2;
    /// An auth database was created (or the attempt failed; the code is
    /// the same either way).
    pub const CREATE_AUTH_DB: i32 = 3;
    /// Usage error, validation error, or engine init failure.
    ///
    /// The process-level status is 255 on Unix.
    pub const FAILURE: i32 = -1;
}

/// Errors detected locally by the launcher, before any engine interaction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LaunchError {
    /// Bad or missing command-line argument.
    #[error("{0}")]
    Usage(String),

    /// Semantically invalid option combination.
    #[error("{0}")]
    Validation(String),
}

/// Resolve a request and execute the resulting action.
///
/// Validation failures are reported through the sink and mapped to
/// [`exit::FAILURE`]; everything else follows the sequencer's contract.
pub fn run(request: LaunchRequest, engine: &mut dyn Engine, sink: &dyn ErrorSink) -> i32 {
    match resolve::resolve(&request) {
        Ok(resolution) => sequence::execute(request, resolution, engine, sink),
        Err(err) => {
            sink.error("Error", &err.to_string());
            exit::FAILURE
        }
    }
}
