//! Raw output handles.
//!
//! [`OutputHandle`] is the seam between the buffered writer and the kernel.
//! Production code uses [`FileDescriptor`]; tests substitute scripted handles
//! that simulate short writes, `EINTR` and permanent failures.

#[cfg(unix)]
use std::os::unix::io::{AsRawFd, RawFd};

use thiserror::Error;

/// Raw OS error number (`errno`).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("os error {0}")]
pub struct Errno(pub i32);

impl Errno
{
    /// Read the calling thread's current `errno`.
    ///
    /// `std::io::Error::last_os_error` stores the raw code inline, so this does
    /// not allocate.
    pub fn last() -> Self
    {
        Errno(std::io::Error::last_os_error().raw_os_error().unwrap_or(0))
    }

    /// Whether this is an interrupted-call condition that should be retried.
    pub const fn is_interrupted(self) -> bool
    {
        self.0 == libc::EINTR
    }

    /// The raw code.
    pub const fn raw(self) -> i32
    {
        self.0
    }
}

/// A writable, already-open output target.
///
/// Implementations must behave like POSIX `write(2)`: they may accept fewer
/// bytes than offered, and they report interruption as [`Errno`] with
/// `EINTR`. They must not allocate or lock.
pub trait OutputHandle
{
    /// Hand some prefix of `data` to the OS, returning how many bytes were taken.
    fn write_raw(&mut self, data: &[u8]) -> Result<usize, Errno>;

    /// Release the underlying handle.
    fn close_raw(&mut self) -> Result<(), Errno>;
}

impl<H: OutputHandle + ?Sized> OutputHandle for &mut H
{
    fn write_raw(&mut self, data: &[u8]) -> Result<usize, Errno>
    {
        (**self).write_raw(data)
    }

    fn close_raw(&mut self) -> Result<(), Errno>
    {
        (**self).close_raw()
    }
}

/// A borrowed POSIX file descriptor.
///
/// The descriptor is owned by the caller. Dropping a `FileDescriptor` does
/// nothing; only [`OutputHandle::close_raw`] (reached through
/// [`BoundedWriter::close`](super::BoundedWriter::close)) closes it.
#[cfg(unix)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileDescriptor(RawFd);

#[cfg(unix)]
impl FileDescriptor
{
    /// Wrap a raw descriptor that is open for writing.
    pub const fn from_raw(fd: RawFd) -> Self
    {
        FileDescriptor(fd)
    }

    /// Standard error.
    pub const fn stderr() -> Self
    {
        FileDescriptor(libc::STDERR_FILENO)
    }

    /// Borrow the descriptor of an open file or socket.
    pub fn borrowed<F: AsRawFd>(file: &F) -> Self
    {
        FileDescriptor(file.as_raw_fd())
    }
}

#[cfg(unix)]
impl AsRawFd for FileDescriptor
{
    fn as_raw_fd(&self) -> RawFd
    {
        self.0
    }
}

#[cfg(unix)]
impl OutputHandle for FileDescriptor
{
    fn write_raw(&mut self, data: &[u8]) -> Result<usize, Errno>
    {
        // SAFETY: the pointer/length pair comes from a live slice.
        let written = unsafe { libc::write(self.0, data.as_ptr().cast(), data.len()) };
        usize::try_from(written).map_err(|_| Errno::last())
    }

    fn close_raw(&mut self) -> Result<(), Errno>
    {
        // SAFETY: closing an invalid descriptor only yields EBADF.
        if unsafe { libc::close(self.0) } != 0 {
            return Err(Errno::last());
        }
        Ok(())
    }
}
