//! # Bounded Buffered Writer
//!
//! Append-only output for crash reports, safe to drive from a signal handler.
//!
//! Bytes accumulate in a fixed array embedded in the writer. The buffer is
//! flushed to the output handle when the next chunk would overflow it, or when
//! [`BoundedWriter::flush`]/[`BoundedWriter::close`] is called. Chunks larger
//! than the whole buffer bypass it and go straight to the handle.
//!
//! ## Output limit
//!
//! A nonzero `limit` caps the cumulative bytes the writer will ever accept. A
//! write that would cross the cap is rejected whole, with no partial
//! acceptance, and bytes accepted earlier are left alone. `0` means unlimited.
//!
//! Limit accounting is optimistic: a chunk is counted as soon as it passes the
//! limit check, even if the raw write that follows fails. Failed bytes are not
//! refunded.
//!
//! ## Failure policy
//!
//! - `EINTR` from the OS is retried on the same remaining bytes
//! - any other OS failure is reported immediately, with no retry or backoff
//! - a failed *implicit* flush inside [`BoundedWriter::write`] drops the
//!   buffered bytes, so a later call does not resend stale data
//! - a failed *explicit* [`BoundedWriter::flush`] keeps the bytes buffered so
//!   the caller can try again
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::fs::OpenOptions;
//! use std::os::unix::io::IntoRawFd;
//!
//! use sigsafe_core::{BoundedWriter, FileDescriptor};
//!
//! let file = OpenOptions::new().create(true).append(true).open("crash.log")?;
//! let mut writer: BoundedWriter<_> = BoundedWriter::new(FileDescriptor::from_raw(file.into_raw_fd()), 64 * 1024);
//! writer.write(b"signal 11\n")?;
//! writer.close()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod handle;
mod raw;

use std::{fmt, io};

use thiserror::Error;

#[cfg(unix)]
pub use handle::FileDescriptor;
pub use handle::{Errno, OutputHandle};
pub(crate) use raw::write_all;

/// Default buffer capacity in bytes.
///
/// Kept small because the writer usually lives on a signal alternate stack.
pub const DEFAULT_BUFFER_CAPACITY: usize = 256;

/// Why a write, flush or close failed.
///
/// `Copy` and allocation-free so it can be returned from a signal handler.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteError
{
    /// Accepting the chunk would push the total past the output limit
    #[error("output limit reached: {requested} bytes requested, {remaining} remaining")]
    LimitExceeded
    {
        /// Length of the rejected chunk
        requested: usize,
        /// Bytes still available under the limit
        remaining: u64,
    },

    /// The OS rejected a write or close
    #[error("raw write failed: {0}")]
    Os(Errno),

    /// The OS accepted zero bytes for a non-empty write
    #[error("raw write made no progress")]
    WriteZero,
}

/// Fixed-buffer, append-only writer with a cumulative byte ceiling
///
/// `N` is the buffer capacity. The buffer lives inline, so constructing a
/// writer never allocates.
///
/// The writer borrows `handle` conceptually: it never opens or creates
/// anything, and it only closes the handle from [`BoundedWriter::close`],
/// which consumes the writer so it cannot be reused afterwards.
///
/// ## Thread Safety
///
/// There is no internal synchronization. One writer serves one caller;
/// concurrent producers need their own writers over their own handles.
pub struct BoundedWriter<H: OutputHandle, const N: usize = DEFAULT_BUFFER_CAPACITY>
{
    handle: H,
    buffer: [u8; N],
    buffered: usize,
    total_written: u64,
    limit: u64,
}

impl<H: OutputHandle, const N: usize> BoundedWriter<H, N>
{
    /// Create a writer over an open, writable `handle`.
    ///
    /// `limit` is the maximum number of bytes the writer will ever accept;
    /// `0` disables the limit. No I/O happens here.
    pub const fn new(handle: H, limit: u64) -> Self
    {
        Self {
            handle,
            buffer: [0; N],
            buffered: 0,
            total_written: 0,
            limit,
        }
    }

    /// Append `data`.
    ///
    /// Fails without side effects when the limit would be exceeded. Otherwise
    /// the chunk is counted, the buffer is flushed first if the chunk does not
    /// fit, and the chunk is buffered or, if larger than the buffer, written
    /// directly.
    ///
    /// ## Errors
    ///
    /// - [`WriteError::LimitExceeded`] if the chunk would cross the limit
    /// - [`WriteError::Os`] / [`WriteError::WriteZero`] if an implicit flush
    ///   or direct write fails. A failed implicit flush discards the buffered
    ///   bytes.
    pub fn write(&mut self, data: &[u8]) -> Result<(), WriteError>
    {
        let len = data.len() as u64;
        if self.limit != 0 && self.total_written.saturating_add(len) > self.limit {
            return Err(WriteError::LimitExceeded {
                requested: data.len(),
                remaining: self.limit.saturating_sub(self.total_written),
            });
        }
        self.total_written = self.total_written.saturating_add(len);

        if data.len() > N - self.buffered {
            let flushed = write_all(&mut self.handle, &self.buffer[..self.buffered]);
            self.buffered = 0;
            if let Err(err) = flushed {
                async_debug!("error writing buffered output: {}", err);
                return Err(err);
            }
        }

        if data.len() <= N - self.buffered {
            crate::bytes::copy_bytes(&mut self.buffer[self.buffered..], data, data.len());
            self.buffered += data.len();
            return Ok(());
        }

        write_all(&mut self.handle, data).inspect_err(|err| {
            async_debug!("error writing unbuffered output: {}", err);
        })
    }

    /// Write any buffered bytes to the handle.
    ///
    /// ## Errors
    ///
    /// Returns the raw write failure. The bytes stay buffered, so calling
    /// `flush` again retries them.
    pub fn flush(&mut self) -> Result<(), WriteError>
    {
        if self.buffered == 0 {
            return Ok(());
        }

        if let Err(err) = write_all(&mut self.handle, &self.buffer[..self.buffered]) {
            async_debug!("error flushing output: {}", err);
            return Err(err);
        }
        self.buffered = 0;
        Ok(())
    }

    /// Flush, then close the handle.
    ///
    /// ## Errors
    ///
    /// - a flush failure is returned *without* closing the handle
    /// - a close failure is returned after the flush succeeded
    pub fn close(mut self) -> Result<(), WriteError>
    {
        self.flush()?;

        self.handle.close_raw().map_err(|errno| {
            async_debug!("error closing output: {}", errno);
            WriteError::Os(errno)
        })
    }

    /// Bytes currently held in the buffer.
    pub const fn buffered_len(&self) -> usize
    {
        self.buffered
    }

    /// Cumulative bytes accepted so far.
    pub const fn total_written(&self) -> u64
    {
        self.total_written
    }

    /// Configured limit (`0` = unlimited).
    pub const fn limit(&self) -> u64
    {
        self.limit
    }

    /// Bytes still accepted under the limit, or `None` when unlimited.
    pub const fn remaining(&self) -> Option<u64>
    {
        if self.limit == 0 {
            None
        } else {
            Some(self.limit.saturating_sub(self.total_written))
        }
    }

    /// Buffer capacity in bytes.
    pub const fn capacity(&self) -> usize
    {
        N
    }

    /// The underlying handle.
    pub const fn handle(&self) -> &H
    {
        &self.handle
    }
}

impl<H: OutputHandle, const N: usize> fmt::Debug for BoundedWriter<H, N>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_struct("BoundedWriter")
            .field("capacity", &N)
            .field("buffered", &self.buffered)
            .field("total_written", &self.total_written)
            .field("limit", &self.limit)
            .finish_non_exhaustive()
    }
}

/// Tallies formatted length without storing anything.
struct LengthCounter(u64);

impl fmt::Write for LengthCounter
{
    fn write_str(&mut self, s: &str) -> fmt::Result
    {
        self.0 = self.0.saturating_add(s.len() as u64);
        Ok(())
    }
}

/// Lets encoders `write!` straight into the writer without allocating.
///
/// With a limit set, one `write!` is a single record: its formatted length is
/// measured first and the whole record is rejected if it would cross the
/// limit, before any byte is accepted. The arguments are therefore formatted
/// twice. A `Display` impl that grows between the two passes can still leave a
/// partial record behind, as can an OS failure partway through.
impl<H: OutputHandle, const N: usize> fmt::Write for BoundedWriter<H, N>
{
    fn write_str(&mut self, s: &str) -> fmt::Result
    {
        self.write(s.as_bytes()).map_err(|_| fmt::Error)
    }

    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> fmt::Result
    {
        if let Some(remaining) = self.remaining() {
            let mut length = LengthCounter(0);
            fmt::write(&mut length, args)?;
            if length.0 > remaining {
                async_debug!("formatted record of {} bytes exceeds limit", length.0);
                return Err(fmt::Error);
            }
        }
        fmt::write(self, args)
    }
}

/// `std::io` adapter for callers outside restricted contexts.
impl<H: OutputHandle, const N: usize> io::Write for BoundedWriter<H, N>
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize>
    {
        match BoundedWriter::write(self, buf) {
            Ok(()) => Ok(buf.len()),
            Err(err) => {
                tracing::debug!(error = %err, total = self.total_written, "bounded write rejected");
                Err(err.into())
            }
        }
    }

    fn flush(&mut self) -> io::Result<()>
    {
        BoundedWriter::flush(self).map_err(Into::into)
    }
}

impl From<WriteError> for io::Error
{
    fn from(err: WriteError) -> Self
    {
        match err {
            WriteError::Os(errno) => io::Error::from_raw_os_error(errno.raw()),
            WriteError::LimitExceeded { .. } | WriteError::WriteZero => io::Error::from(io::ErrorKind::WriteZero),
        }
    }
}
