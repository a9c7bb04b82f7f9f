//! # Platform-Specific Implementations
//!
//! Each supported OS provides the same four functions, re-exported here so the
//! rest of the crate never needs its own `cfg` ladder:
//!
//! - `current_task()`: the caller's own task handle
//! - `task_for_pid(pid)`: resolve another process (setup only)
//! - `release_task(raw)`: undo `task_for_pid`
//! - `read_task_memory(raw, address, dest)`: one async-safe remote read
//!
//! Platforms:
//!
//! - **Linux/Android**: `process_vm_readv(2)`
//!   - See: [process_vm_readv(2) man page](https://man7.org/linux/man-pages/man2/process_vm_readv.2.html)
//! - **macOS**: Mach VM APIs through the `mach2` crate
//!   - See: [Apple Mach Kernel Programming](https://developer.apple.com/library/archive/documentation/Darwin/Conceptual/KernelProgramming/Mach/Mach.html)
//! - **Everything else**: remote reads report `NotSupported`

#[cfg(any(target_os = "linux", target_os = "android"))]
pub mod linux;
#[cfg(any(target_os = "linux", target_os = "android"))]
pub(crate) use linux::{current_task, read_task_memory, release_task, task_for_pid};

#[cfg(target_os = "macos")]
pub mod macos;
#[cfg(target_os = "macos")]
pub(crate) use macos::{current_task, read_task_memory, release_task, task_for_pid};

#[cfg(not(any(target_os = "linux", target_os = "android", target_os = "macos")))]
mod unsupported;
#[cfg(not(any(target_os = "linux", target_os = "android", target_os = "macos")))]
pub(crate) use unsupported::{current_task, read_task_memory, release_task, task_for_pid};
