//! # macOS Mach API Errors
//!
//! Mach APIs return `kern_return_t` integer codes. This module turns the ones
//! task resolution can produce into a Rust error with descriptive messages.

use mach2::kern_return::{
    kern_return_t, KERN_FAILURE, KERN_INVALID_ADDRESS, KERN_INVALID_ARGUMENT, KERN_PROTECTION_FAILURE,
};
use thiserror::Error;

/// Mach kernel API error
///
/// ## References
///
/// - [kern_return_t documentation](https://developer.apple.com/documentation/kernel/kern_return_t)
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachError
{
    /// `KERN_PROTECTION_FAILURE`
    ///
    /// Blocked by the security system: `task_for_pid()` needs `sudo` or the
    /// `com.apple.security.cs.debugger` entitlement, or SIP protects the target.
    #[error("KERN_PROTECTION_FAILURE: Permission denied")]
    ProtectionFailure,

    /// `KERN_INVALID_ADDRESS`
    #[error("KERN_INVALID_ADDRESS: Address not mapped")]
    InvalidAddress,

    /// `KERN_INVALID_ARGUMENT`
    #[error("KERN_INVALID_ARGUMENT: Invalid PID or argument")]
    InvalidArgument,

    /// `KERN_FAILURE`
    ///
    /// Usually means the process does not exist, but `task_for_pid()` also
    /// returns it for denied requests. [`task_for_pid`](super::task::task_for_pid)
    /// disambiguates with `kill(pid, 0)`.
    #[error("KERN_FAILURE: Process not found")]
    Failure,

    /// Any other code, preserved for lookup
    #[error("Unknown Mach error: {0}")]
    Unknown(kern_return_t),
}

impl From<kern_return_t> for MachError
{
    fn from(code: kern_return_t) -> Self
    {
        match code {
            KERN_PROTECTION_FAILURE => MachError::ProtectionFailure,
            KERN_INVALID_ADDRESS => MachError::InvalidAddress,
            KERN_INVALID_ARGUMENT => MachError::InvalidArgument,
            KERN_FAILURE => MachError::Failure,
            _ => MachError::Unknown(code),
        }
    }
}
