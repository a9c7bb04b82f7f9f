//! # Types
//!
//! Platform-agnostic types shared by the remote reader and its callers.
//!
//! These hide whether a "task" is a Linux pid or a Mach task port, so crash
//! collectors can pass handles around without per-platform code.

pub mod address;
pub mod task;

pub use address::Address;
pub use task::{RawTask, TaskHandle};
