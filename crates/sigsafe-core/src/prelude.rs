//! Common module for library exports

pub use crate::bytes::{bounded_compare, copy_bytes};
pub use crate::catalog::{describe, describe_raw, ErrorCode};
pub use crate::error::{Result, SigsafeError};
pub use crate::remote::{read_remote, read_remote_u64, read_remote_vec, RemoteReadResult};
pub use crate::types::{Address, TaskHandle};
#[cfg(unix)]
pub use crate::writer::FileDescriptor;
pub use crate::writer::{BoundedWriter, Errno, OutputHandle, WriteError};
