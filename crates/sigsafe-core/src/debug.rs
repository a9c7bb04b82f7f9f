//! # Async-safe debug output
//!
//! `tracing` may allocate and take locks inside the installed subscriber, so it
//! cannot be used on crash paths. This module formats a single line into a fixed
//! stack buffer with `core::fmt` and hands it straight to `write(2)` on stderr.
//!
//! Lines are capped at [`DEBUG_LINE_CAPACITY`] bytes; longer messages are
//! truncated. Output only happens in debug builds; release builds compile the
//! [`async_debug!`] call sites away.

use core::fmt;

/// Maximum length of one debug line, including the trailing newline.
pub const DEBUG_LINE_CAPACITY: usize = 128;

/// Fixed-capacity line buffer.
///
/// Writes past the capacity are dropped without error, and the last byte is
/// always reserved for the newline added by [`StackLine::finish`].
pub struct StackLine<const N: usize>
{
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> StackLine<N>
{
    /// Create an empty line.
    pub const fn new() -> Self
    {
        Self { buf: [0; N], len: 0 }
    }

    /// Bytes written so far.
    pub fn as_bytes(&self) -> &[u8]
    {
        &self.buf[..self.len]
    }

    /// Terminate the line with `\n` and return its bytes.
    pub fn finish(&mut self) -> &[u8]
    {
        if self.len >= N {
            return &self.buf[..self.len];
        }
        self.buf[self.len] = b'\n';
        self.len += 1;
        &self.buf[..self.len]
    }

    fn room(&self) -> usize
    {
        // One byte stays free for the newline.
        N.saturating_sub(1).saturating_sub(self.len)
    }
}

impl<const N: usize> Default for StackLine<N>
{
    fn default() -> Self
    {
        Self::new()
    }
}

impl<const N: usize> fmt::Write for StackLine<N>
{
    fn write_str(&mut self, s: &str) -> fmt::Result
    {
        let bytes = s.as_bytes();
        let count = bytes.len().min(self.room());
        crate::bytes::copy_bytes(&mut self.buf[self.len..], bytes, count);
        self.len += count;
        Ok(())
    }
}

/// Format and emit one line to stderr. Used by [`async_debug!`].
#[doc(hidden)]
pub fn emit_line(module: &str, line: u32, args: fmt::Arguments<'_>)
{
    use core::fmt::Write;

    // Debug output is best effort: truncation and write failures are ignored.
    let mut out = StackLine::<DEBUG_LINE_CAPACITY>::new();
    let _ = write!(out, "[sigsafe] {module}:{line}: ");
    let _ = out.write_fmt(args);

    #[cfg(unix)]
    {
        let mut stderr = crate::writer::FileDescriptor::stderr();
        let _ = crate::writer::write_all(&mut stderr, out.finish());
    }
    #[cfg(not(unix))]
    let _ = out.finish();
}

/// Emit an allocation-free debug line on stderr (debug builds only).
///
/// ```rust
/// sigsafe_core::async_debug!("flush failed: {}", 28);
/// ```
#[macro_export]
macro_rules! async_debug {
    ($($arg:tt)*) => {{
        #[cfg(debug_assertions)]
        $crate::debug::emit_line(module_path!(), line!(), format_args!($($arg)*));
        #[cfg(not(debug_assertions))]
        let _ = || {
            let _ = format_args!($($arg)*);
        };
    }};
}
