//! The write-everything loop shared by the buffered writer and debug output.

use super::{OutputHandle, WriteError};

/// Hand every byte of `data` to `handle` exactly once.
///
/// Short writes advance through the remaining tail. `EINTR` retries the same
/// tail without counting as a failure. Any other error, or a write that accepts
/// zero bytes, fails immediately; how much was written before the failure is
/// not reported.
pub(crate) fn write_all<H: OutputHandle + ?Sized>(handle: &mut H, data: &[u8]) -> Result<(), WriteError>
{
    let mut remaining = data;
    while !remaining.is_empty() {
        match handle.write_raw(remaining) {
            Ok(0) => return Err(WriteError::WriteZero),
            Ok(written) => remaining = &remaining[written.min(remaining.len())..],
            Err(errno) if errno.is_interrupted() => {}
            Err(errno) => return Err(WriteError::Os(errno)),
        }
    }
    Ok(())
}
