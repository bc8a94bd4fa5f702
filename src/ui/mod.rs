//! ui
//!
//! Error reporting and output utilities.

pub mod output;

pub use output::{ErrorSink, RecordingSink, TextSink};
