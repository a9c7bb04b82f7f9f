//! # macOS Task Ports

use libc::c_int;
use mach2::kern_return::{KERN_FAILURE, KERN_SUCCESS};
use mach2::mach_port::mach_port_deallocate;
use mach2::port::MACH_PORT_NULL;
use mach2::traps::{mach_task_self, task_for_pid as mach_task_for_pid};

use crate::error::{Result, SigsafeError};
use crate::platform::macos::error::MachError;
use crate::types::RawTask;

pub(crate) fn current_task() -> RawTask
{
    // SAFETY: mach_task_self() is a trap with no preconditions.
    unsafe { mach_task_self() }
}

/// Resolve a pid to a task port with `task_for_pid()`.
pub(crate) fn task_for_pid(pid: u32) -> Result<RawTask>
{
    let raw_pid = c_int::try_from(pid).map_err(|_| SigsafeError::InvalidArgument(format!("pid {pid} is out of range")))?;
    let mut task: RawTask = MACH_PORT_NULL;

    // SAFETY: `task` is a valid out-pointer for the duration of the call.
    let result = unsafe { mach_task_for_pid(mach_task_self(), raw_pid, &mut task) };
    if result == KERN_SUCCESS {
        return Ok(task);
    }

    // task_for_pid() returns KERN_FAILURE both for missing processes and for
    // denied requests; kill(pid, 0) tells them apart.
    if result == KERN_FAILURE {
        // SAFETY: signal 0 only checks existence.
        let exists = unsafe { libc::kill(raw_pid, 0) } == 0 || std::io::Error::last_os_error().raw_os_error() == Some(libc::EPERM);
        if exists {
            return Err(SigsafeError::PermissionDenied(format!(
                "task_for_pid() failed for existing process {pid}; run with sudo or the debugger entitlement"
            )));
        }
        return Err(SigsafeError::ProcessNotFound(pid));
    }

    Err(MachError::from(result).into())
}

pub(crate) fn release_task(task: RawTask) -> Result<()>
{
    if task == MACH_PORT_NULL || task == current_task() {
        return Ok(());
    }

    // SAFETY: deallocating a send right we own; double release only yields an error code.
    let result = unsafe { mach_port_deallocate(mach_task_self(), task) };
    if result != KERN_SUCCESS {
        return Err(MachError::from(result).into());
    }
    Ok(())
}
