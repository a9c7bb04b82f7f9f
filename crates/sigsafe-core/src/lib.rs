//! # sigsafe-core
//!
//! Primitives that can be called from a restricted execution context, such as
//! a signal handler running after a crash, where the heap and locks may be in
//! an inconsistent state.
//!
//! This crate provides:
//! - An error catalog with fixed, allocation-free messages
//! - Byte copy and bounded compare routines that never call into libc
//! - Cross-process memory reads (`process_vm_readv` on Linux, Mach VM on macOS)
//! - A bounded, buffered, append-only writer over a raw file descriptor
//!
//! ## Platform Support
//!
//! - **Linux/Android**: `process_vm_readv(2)` and `write(2)`
//! - **macOS**: Mach APIs (`mach_vm_read_overwrite`, `task_for_pid`)
//! - **Other**: remote reads report `NotSupported`
//!
//! ## What "async-safe" means here
//!
//! Everything reachable from [`read_remote`], [`copy_bytes`],
//! [`bounded_compare`] and [`BoundedWriter`]'s inherent methods runs without
//! allocating, locking or unwinding. Functions that are *not* safe in a signal
//! handler (for example [`remote::read_remote_vec`] or
//! [`TaskHandle::for_pid`]) say so in their docs and may log through `tracing`.
//!
//! ## Why unsafe code is needed
//!
//! Reading another task's memory and writing to raw descriptors means calling
//! into the kernel directly. We wrap those calls in safe functions that
//! classify every failure instead of panicking.

#![allow(unsafe_code)] // Required for raw syscalls (process_vm_readv, write, Mach VM)

#[macro_use]
pub mod debug;

pub mod bytes;
pub mod catalog;
pub mod error;
pub mod platform;
pub mod prelude;
pub mod remote;
pub mod types;
pub mod writer;

pub use bytes::{bounded_compare, copy_bytes};
pub use catalog::{describe, describe_raw, ErrorCode};
pub use error::{Result, SigsafeError};
pub use remote::{read_remote, read_remote_u64, RemoteReadResult};
pub use types::{Address, TaskHandle};
#[cfg(unix)]
pub use writer::FileDescriptor;
pub use writer::{BoundedWriter, Errno, OutputHandle, WriteError, DEFAULT_BUFFER_CAPACITY};
