//! # macOS Remote Memory
//!
//! macOS exposes other processes through Mach task ports rather than pids:
//!
//! - **Mach tasks**: represent a process's address space
//! - **Mach ports**: capabilities naming kernel objects, like file descriptors
//!
//! ## Key Mach APIs Used
//!
//! - `task_for_pid()`: get a task port for a pid (needs root or the debugger entitlement)
//! - `mach_task_self()`: our own task port, always available
//! - `mach_vm_read_overwrite()`: copy a range into a caller-supplied buffer
//! - `mach_port_deallocate()`: drop a port obtained from `task_for_pid()`
//!
//! All of them come from the `mach2` crate.
//!
//! ## References
//!
//! - [Apple Mach Kernel Programming](https://developer.apple.com/library/archive/documentation/Darwin/Conceptual/KernelProgramming/Mach/Mach.html)
//! - [XNU Kernel Source](https://github.com/apple-oss-distributions/xnu)

pub mod error;
pub mod memory;
pub mod task;

pub(crate) use memory::read_task_memory;
pub(crate) use task::{current_task, release_task, task_for_pid};
