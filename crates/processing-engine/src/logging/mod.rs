//! Logging utilities.
//!
//! Centralizes `env_logger` initialization behind the `log` facade; every
//! other module only uses `log` macros.

mod init;

pub use init::{init_logging, LoggingConfig};
