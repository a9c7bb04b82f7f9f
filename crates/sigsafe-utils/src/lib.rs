//! # Sigsafe Utilities
//!
//! Helpers for the tooling around `sigsafe-core`: logging setup, hexdump
//! rendering, and parsing of addresses and byte sizes.
//!
//! Nothing in this crate is async-signal-safe. It is meant for code that runs
//! in a normal context, such as the `sigsafe` CLI.

pub mod hexdump;
pub mod logging;
pub mod parse;

pub use hexdump::format_hexdump;
pub use logging::{init_logging, init_logging_with_level, LogFormat, LogLevel, LoggingError};
pub use parse::{parse_address, parse_byte_size, ParseError};
pub use tracing::{debug, error, info, trace, warn};
