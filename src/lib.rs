//! Xanter - a launcher for libxante-style interactive applications
//!
//! Xanter is a single-binary tool that configures and drives an external
//! interactive-application engine through a fixed lifecycle: parse options,
//! derive a run mode and capability flags, initialize the engine, perform
//! exactly one terminal action (run the interactive UI, export a JXDB
//! database, create a default configuration, create an authentication
//! database, or print a version), tear down, and return an exit code.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to launcher)
//! - [`launcher`] - Mode resolution and lifecycle sequencing
//! - [`engine`] - Abstraction for the application engine backend
//! - [`ui`] - Error reporting and output utilities
//!
//! # Correctness Invariants
//!
//! Xanter maintains the following invariants:
//!
//! 1. Exactly one terminal action is selected per invocation
//! 2. Engine operations flow through a session handle that exists only
//!    between a successful init and a single shutdown
//! 3. Validation failures never touch the engine
//! 4. The main application path's exit code is the engine's own exit value,
//!    never a value the launcher invents

pub mod cli;
pub mod engine;
pub mod launcher;
pub mod ui;
