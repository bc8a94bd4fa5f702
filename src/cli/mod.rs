//! cli
//!
//! Command-line interface layer for Xanter.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments into a [`crate::launcher::LaunchRequest`]
//! - Wire up the default engine backend and error sink
//! - Delegate to the launcher and hand its exit code to `main`
//!
//! The CLI layer is thin. All mode resolution and engine sequencing lives
//! in [`crate::launcher`].

pub mod args;

pub use args::{print_usage, print_version, Cli};

use crate::engine;
use crate::launcher;
use crate::ui::output::TextSink;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`. Returns the
/// process exit code; usage errors are printed to stderr and mapped to
/// the failure sentinel before any engine interaction.
pub fn run() -> i32 {
    let request = match args::parse(std::env::args_os()) {
        Ok(request) => request,
        Err(err) => {
            eprintln!("{err}");
            return launcher::exit::FAILURE;
        }
    };

    let mut engine = engine::create_engine();
    launcher::run(request, engine.as_mut(), &TextSink)
}
