//! Logging utilities.
//!
//! The engine itself only speaks the `log` facade; hosts that want output
//! call [`init_logging`] once at startup.

mod init;

pub use init::{init_logging, LoggingConfig};
