//! # macOS Memory Reads
//!
//! `mach_vm_read_overwrite()` copies a range of the target task straight into
//! a buffer we own. Unlike `vm_read()`, it does not hand back kernel-allocated
//! pages that would need `vm_deallocate()`, so it is usable in a signal handler.
//!
//! ```c
//! kern_return_t mach_vm_read_overwrite(
//!     vm_map_t target_task,       // task port
//!     mach_vm_address_t address,  // remote address
//!     mach_vm_size_t size,        // bytes to copy
//!     mach_vm_address_t data,     // local destination
//!     mach_vm_size_t *outsize     // bytes copied
//! );
//! ```

use mach2::kern_return::{KERN_INVALID_ADDRESS, KERN_PROTECTION_FAILURE, KERN_SUCCESS};
use mach2::vm::mach_vm_read_overwrite;
use mach2::vm_types::{mach_vm_address_t, mach_vm_size_t};

use crate::remote::RemoteReadResult;
use crate::types::{Address, RawTask};

pub(crate) fn read_task_memory(task: RawTask, source: Address, dest: &mut [u8]) -> RemoteReadResult
{
    let mut copied: mach_vm_size_t = 0;

    // SAFETY: `dest` is a live, exclusively borrowed buffer of exactly `size` bytes.
    let result = unsafe {
        mach_vm_read_overwrite(
            task,
            source.value(),
            dest.len() as mach_vm_size_t,
            dest.as_mut_ptr() as mach_vm_address_t,
            &mut copied,
        )
    };

    match result {
        KERN_SUCCESS if copied as usize == dest.len() => RemoteReadResult::Success,
        KERN_SUCCESS | KERN_INVALID_ADDRESS => RemoteReadResult::AddressUnmapped,
        KERN_PROTECTION_FAILURE => RemoteReadResult::AccessDenied,
        other => RemoteReadResult::OtherFailure(other),
    }
}
