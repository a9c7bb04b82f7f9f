//! Fallback for targets without a cross-process read facility.

use crate::catalog::ErrorCode;
use crate::error::{Result, SigsafeError};
use crate::remote::RemoteReadResult;
use crate::types::{Address, RawTask};

pub(crate) fn current_task() -> RawTask
{
    std::process::id()
}

pub(crate) fn task_for_pid(pid: u32) -> Result<RawTask>
{
    Err(SigsafeError::InvalidArgument(format!(
        "remote tasks are not supported on this platform (pid {pid})"
    )))
}

pub(crate) fn release_task(_task: RawTask) -> Result<()>
{
    Ok(())
}

pub(crate) fn read_task_memory(_task: RawTask, _source: Address, _dest: &mut [u8]) -> RemoteReadResult
{
    RemoteReadResult::OtherFailure(ErrorCode::NotSupported.raw())
}
