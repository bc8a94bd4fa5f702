//! engine
//!
//! Abstraction for the external application engine.
//!
//! # Design
//!
//! The launcher never talks to a concrete backend directly; everything
//! flows through the [`Engine`] and [`EngineSession`] traits defined in
//! [`traits`]. This keeps the mode-resolution and sequencing logic
//! independent of any specific backend and makes the full lifecycle
//! testable against the deterministic [`mock::MockEngine`].
//!
//! Backends:
//! - [`xante::XanteEngine`] - placeholder adapter for the libxante backend
//! - [`mock::MockEngine`] - deterministic in-memory engine for tests

pub mod mock;
pub mod traits;
pub mod xante;

pub use traits::{Engine, EngineError, EngineSession, InitOptions};
pub use xante::XanteEngine;

/// Create the default engine backend.
///
/// Callers use this instead of importing a concrete implementation, so the
/// backend can change without touching the launcher.
pub fn create_engine() -> Box<dyn Engine> {
    Box::new(XanteEngine::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_engine_is_xante() {
        let engine = create_engine();
        assert_eq!(engine.name(), "xante");
    }
}
