//! # Cross-Process Reader
//!
//! Copies bytes out of another task's address space with a single OS request.
//!
//! [`read_remote`] is the async-safe entry point: it writes into a buffer the
//! caller already owns, allocates nothing, takes no locks, and never retries.
//! If any part of the range cannot be read, the whole call fails and the
//! failure is classified so the caller can tell a bad pointer apart from a
//! privilege problem.
//!
//! ## Platform facilities
//!
//! - **Linux/Android**: `process_vm_readv(2)`
//! - **macOS**: `mach_vm_read_overwrite()`
//!
//! ## References
//!
//! - [process_vm_readv(2)](https://man7.org/linux/man-pages/man2/process_vm_readv.2.html)
//! - [mach_vm_read_overwrite](https://developer.apple.com/documentation/kernel/1402127-mach_vm_read_overwrite)

use std::fmt;

use crate::catalog::ErrorCode;
use crate::error::{Result, SigsafeError};
use crate::platform;
use crate::types::{Address, TaskHandle};

/// Outcome of a cross-process read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteReadResult
{
    /// The destination buffer was fully populated
    Success,
    /// Some part of the range is not mapped in the target task
    AddressUnmapped,
    /// The range is mapped but our privileges do not allow reading it
    AccessDenied,
    /// Any other OS failure, with the raw errno / `kern_return_t`
    OtherFailure(i32),
}

impl RemoteReadResult
{
    /// Whether the read succeeded.
    pub const fn is_success(self) -> bool
    {
        matches!(self, RemoteReadResult::Success)
    }

    /// Closest catalog code for this outcome.
    pub const fn error_code(self) -> ErrorCode
    {
        match self {
            RemoteReadResult::Success => ErrorCode::Success,
            RemoteReadResult::AddressUnmapped => ErrorCode::InvalidArgument,
            RemoteReadResult::AccessDenied => ErrorCode::AccessDenied,
            RemoteReadResult::OtherFailure(_) => ErrorCode::InternalError,
        }
    }

    /// `Ok(())` on success, otherwise the failure itself.
    ///
    /// ## Errors
    ///
    /// Returns `self` for every variant other than `Success`.
    pub const fn into_result(self) -> std::result::Result<(), RemoteReadResult>
    {
        match self {
            RemoteReadResult::Success => Ok(()),
            failure => Err(failure),
        }
    }
}

impl fmt::Display for RemoteReadResult
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            RemoteReadResult::Success => f.write_str("success"),
            RemoteReadResult::AddressUnmapped => f.write_str("address range is not mapped"),
            RemoteReadResult::AccessDenied => f.write_str("access denied"),
            RemoteReadResult::OtherFailure(code) => write!(f, "os error {code}"),
        }
    }
}

/// Read `dest.len()` bytes at `source` in `task` into `dest`.
///
/// Async-safe. Exactly one OS request is made per call. On any result other
/// than [`RemoteReadResult::Success`] the contents of `dest` are unspecified.
///
/// ## Example
///
/// ```rust
/// use sigsafe_core::{read_remote, Address, RemoteReadResult, TaskHandle};
///
/// let secret = *b"frame";
/// let mut copy = [0u8; 5];
/// let result = read_remote(TaskHandle::current(), Address::from_ptr(secret.as_ptr()), &mut copy);
/// # #[cfg(any(target_os = "linux", target_os = "android", target_os = "macos"))]
/// assert_eq!(result, RemoteReadResult::Success);
/// # #[cfg(any(target_os = "linux", target_os = "android", target_os = "macos"))]
/// assert_eq!(copy, secret);
/// ```
pub fn read_remote(task: TaskHandle, source: Address, dest: &mut [u8]) -> RemoteReadResult
{
    if source.range_end(dest.len()).is_none() {
        return RemoteReadResult::AddressUnmapped;
    }
    platform::read_task_memory(task.raw(), source, dest)
}

/// Read one native-endian `u64` (a pointer-sized word on 64-bit targets).
///
/// Async-safe; the staging buffer lives on the stack.
///
/// ## Errors
///
/// Returns the read classification if the word could not be read.
pub fn read_remote_u64(task: TaskHandle, source: Address) -> std::result::Result<u64, RemoteReadResult>
{
    let mut word = [0u8; 8];
    read_remote(task, source, &mut word).into_result()?;
    Ok(u64::from_ne_bytes(word))
}

/// Allocate a buffer and read `len` bytes into it.
///
/// **Not async-safe**: allocates and logs. Intended for tooling that runs in a
/// normal context, such as the CLI.
///
/// ## Errors
///
/// Returns [`SigsafeError::RemoteRead`] carrying the classification.
pub fn read_remote_vec(task: TaskHandle, source: Address, len: usize) -> Result<Vec<u8>>
{
    let mut buffer = vec![0u8; len];
    let result = read_remote(task, source, &mut buffer);
    tracing::trace!(%task, %source, len, %result, "remote read");

    result
        .into_result()
        .map_err(|result| SigsafeError::RemoteRead { address: source, result })?;
    Ok(buffer)
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_error_code_mapping()
    {
        assert_eq!(RemoteReadResult::Success.error_code(), ErrorCode::Success);
        assert_eq!(RemoteReadResult::AddressUnmapped.error_code(), ErrorCode::InvalidArgument);
        assert_eq!(RemoteReadResult::AccessDenied.error_code(), ErrorCode::AccessDenied);
        assert_eq!(RemoteReadResult::OtherFailure(3).error_code(), ErrorCode::InternalError);
    }

    #[test]
    fn test_into_result()
    {
        assert_eq!(RemoteReadResult::Success.into_result(), Ok(()));
        assert_eq!(
            RemoteReadResult::AccessDenied.into_result(),
            Err(RemoteReadResult::AccessDenied)
        );
    }

    #[test]
    fn test_wrapping_range_is_unmapped()
    {
        let mut dest = [0u8; 16];
        let result = read_remote(TaskHandle::current(), Address::new(u64::MAX - 4), &mut dest);
        assert_eq!(result, RemoteReadResult::AddressUnmapped);
    }
}
