//! Diagnostics for embedding applications.
//!
//! The chooser logs through `tracing` under the `datechooser` target. Hosts
//! that already run a subscriber see those events automatically; everyone
//! else can call [`logging::install_tracing`] once at startup.

pub mod logging;

pub use logging::{install_panic_logger, install_tracing, install_tracing_with_level};
