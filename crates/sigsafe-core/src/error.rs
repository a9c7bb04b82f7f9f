//! # Error Types
//!
//! Errors for the setup and convenience layers that run outside restricted
//! contexts (resolving tasks, allocating reads, CLI plumbing).
//!
//! Async-safe operations never return this type: they report
//! [`RemoteReadResult`] or [`WriteError`], both `Copy` and allocation-free.
//! Both convert into [`SigsafeError`] for callers that want one error type.

use thiserror::Error;

use crate::remote::RemoteReadResult;
use crate::types::Address;
use crate::writer::WriteError;

/// Main error type for non-restricted operations
///
/// ## Error Categories
///
/// 1. **Process errors**: ProcessNotFound, PermissionDenied
/// 2. **Argument errors**: InvalidArgument
/// 3. **Memory errors**: RemoteRead
/// 4. **Output errors**: Write, Io
/// 5. **Platform errors**: MachError (macOS-specific)
#[derive(Error, Debug)]
pub enum SigsafeError
{
    /// No process with the given PID exists
    #[error("Process not found: PID {0}")]
    ProcessNotFound(u32),

    /// The process exists but cannot be inspected with our privileges
    ///
    /// On macOS this usually means `task_for_pid()` needs `sudo` or the
    /// `com.apple.security.cs.debugger` entitlement. On Linux, see
    /// `/proc/sys/kernel/yama/ptrace_scope`.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Invalid argument passed to an operation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A remote read did not succeed
    #[error("Remote read at {address} failed: {result}")]
    RemoteRead
    {
        /// Start of the requested range
        address: Address,
        /// How the read failed
        result: RemoteReadResult,
    },

    /// Bounded writer failure
    #[error("Write failed: {0}")]
    Write(#[from] WriteError),

    /// macOS-specific Mach API error
    #[cfg(target_os = "macos")]
    #[error("Mach API error: {0}")]
    MachError(#[from] crate::platform::macos::error::MachError),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for `Result<T, SigsafeError>`
///
/// ```rust
/// use sigsafe_core::error::Result;
/// fn foo() -> Result<()>
/// {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, SigsafeError>;
