//! Remote task handles.

use std::fmt;

use crate::error::Result;
use crate::platform;

/// Native task identifier: a pid on Linux, a Mach task port on macOS.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub type RawTask = libc::pid_t;

/// Native task identifier: a pid on Linux, a Mach task port on macOS.
#[cfg(target_os = "macos")]
pub type RawTask = mach2::port::mach_port_t;

/// Native task identifier: a pid on Linux, a Mach task port on macOS.
#[cfg(not(any(target_os = "linux", target_os = "android", target_os = "macos")))]
pub type RawTask = u32;

/// Identifies the address space a remote read targets
///
/// On Linux this is a process id handed to `process_vm_readv(2)`. On macOS it
/// is a Mach task port, as obtained from `task_for_pid()` or
/// `mach_task_self()`.
///
/// Handles are plain `Copy` values. Resolving one ([`TaskHandle::for_pid`])
/// is a setup step done before a crash, never inside a signal handler; using
/// one ([`read_remote`](crate::read_remote)) is async-safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(RawTask);

impl TaskHandle
{
    /// Wrap an already-resolved native handle.
    pub const fn from_raw(raw: RawTask) -> Self
    {
        TaskHandle(raw)
    }

    /// The native handle.
    pub const fn raw(self) -> RawTask
    {
        self.0
    }

    /// The calling process's own task.
    ///
    /// Async-safe: `getpid()` and `mach_task_self()` are both plain syscalls/traps.
    pub fn current() -> Self
    {
        TaskHandle(platform::current_task())
    }

    /// Resolve the task of another process.
    ///
    /// Not async-safe; call it during setup.
    ///
    /// ## Errors
    ///
    /// - `ProcessNotFound`: no process with this pid exists
    /// - `PermissionDenied`: the process exists but its task cannot be obtained
    ///   (macOS without debugging entitlements)
    /// - `InvalidArgument`: the pid does not fit the native type
    pub fn for_pid(pid: u32) -> Result<Self>
    {
        let raw = platform::task_for_pid(pid)?;
        tracing::debug!(pid, task = ?raw, "resolved task handle");
        Ok(TaskHandle(raw))
    }

    /// Release a handle returned by [`TaskHandle::for_pid`].
    ///
    /// Deallocates the Mach port on macOS; a no-op elsewhere. Releasing
    /// [`TaskHandle::current`] is always a no-op.
    ///
    /// ## Errors
    ///
    /// Returns the platform error if the port could not be deallocated.
    pub fn release(self) -> Result<()>
    {
        platform::release_task(self.0)
    }
}

impl fmt::Display for TaskHandle
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "task {}", self.0)
    }
}
