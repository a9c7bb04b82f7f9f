//! # Linux Remote Memory
//!
//! Cross-process reads use `process_vm_readv(2)`, which copies straight from
//! the target's pages into our buffer without attaching via `ptrace` or going
//! through `/proc/<pid>/mem`.
//!
//! ## Permissions
//!
//! The kernel applies the same check as `PTRACE_MODE_ATTACH_REALCREDS`: same
//! uid and no Yama restriction, or `CAP_SYS_PTRACE`. Reading our own process
//! is always allowed.
//!
//! ## Failure classification
//!
//! | kernel result | [`RemoteReadResult`] |
//! |---|---|
//! | `EFAULT`, or fewer bytes than requested | `AddressUnmapped` |
//! | `EPERM`, `EACCES` | `AccessDenied` |
//! | anything else (`ESRCH`, `ENOMEM`, ...) | `OtherFailure(errno)` |
//!
//! Linux reports unreadable (`PROT_NONE`) pages with `EFAULT` as well, and
//! telling them apart would require parsing `/proc/<pid>/maps`, which allocates.
//! Both therefore classify as `AddressUnmapped`.

use crate::error::{Result, SigsafeError};
use crate::remote::RemoteReadResult;
use crate::types::{Address, RawTask};
use crate::writer::Errno;

pub(crate) fn current_task() -> RawTask
{
    // SAFETY: getpid(2) cannot fail.
    unsafe { libc::getpid() }
}

pub(crate) fn task_for_pid(pid: u32) -> Result<RawTask>
{
    let raw = libc::pid_t::try_from(pid)
        .ok()
        .filter(|raw| *raw > 0)
        .ok_or_else(|| SigsafeError::InvalidArgument(format!("pid {pid} is out of range")))?;

    // Signal 0 performs the existence and permission checks without sending anything.
    // SAFETY: kill(2) with signal 0 has no side effects.
    if unsafe { libc::kill(raw, 0) } == 0 {
        return Ok(raw);
    }

    match Errno::last().raw() {
        // The process exists; reads may still be refused, and will say so.
        libc::EPERM => Ok(raw),
        libc::ESRCH => Err(SigsafeError::ProcessNotFound(pid)),
        code => Err(SigsafeError::Io(std::io::Error::from_raw_os_error(code))),
    }
}

pub(crate) fn release_task(_task: RawTask) -> Result<()>
{
    Ok(())
}

pub(crate) fn read_task_memory(task: RawTask, source: Address, dest: &mut [u8]) -> RemoteReadResult
{
    let Some(remote_base) = source.to_usize() else {
        return RemoteReadResult::AddressUnmapped;
    };

    let local = libc::iovec {
        iov_base: dest.as_mut_ptr().cast(),
        iov_len: dest.len(),
    };
    let remote = libc::iovec {
        iov_base: remote_base as *mut libc::c_void,
        iov_len: dest.len(),
    };

    // SAFETY: `local` describes a live, exclusively borrowed buffer. The kernel
    // validates `remote` against the target's mappings.
    let read = unsafe { libc::process_vm_readv(task, &local, 1, &remote, 1, 0) };

    match usize::try_from(read) {
        Ok(count) if count == dest.len() => RemoteReadResult::Success,
        // A partial read means the tail of the range crossed into unmapped pages.
        Ok(_) => RemoteReadResult::AddressUnmapped,
        Err(_) => classify_errno(Errno::last().raw()),
    }
}

fn classify_errno(code: i32) -> RemoteReadResult
{
    match code {
        libc::EFAULT => RemoteReadResult::AddressUnmapped,
        libc::EPERM | libc::EACCES => RemoteReadResult::AccessDenied,
        other => RemoteReadResult::OtherFailure(other),
    }
}
