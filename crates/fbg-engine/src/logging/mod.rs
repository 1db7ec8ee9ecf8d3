//! Logging utilities.
//!
//! The engine only talks to the `log` facade. Binaries and test harnesses pick
//! the backend; `init_logging` wires up `env_logger` for the common case.

mod init;

pub use init::{init_logging, LoggingConfig};
