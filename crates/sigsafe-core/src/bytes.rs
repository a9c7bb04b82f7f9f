//! # Byte Primitives
//!
//! Hand-rolled copy and compare routines for restricted contexts.
//!
//! `core::ptr::copy_nonoverlapping` and slice comparisons may be lowered to
//! calls into the platform's `memcpy`/`memcmp`. Inside a crashed process those
//! symbols may be interposed, instrumented or simply not async-signal-safe, so
//! these routines walk the bytes one at a time. The copy uses volatile accesses
//! to keep the optimizer from recognizing the loop and emitting a `memcpy`
//! call anyway.
//!
//! The contracts are narrower than the libc equivalents:
//! - copies never handle overlapping ranges
//! - comparisons treat the end of a slice as a NUL terminator

use core::ptr;

/// Copy `n` bytes from `source` to `dest`, one byte at a time.
///
/// Returns `source`, not `dest`.
/// Uses no stack beyond a loop counter and never allocates.
///
/// # Safety
///
/// - `source` must be valid for reads of `n` bytes
/// - `dest` must be valid for writes of `n` bytes
/// - the two ranges must not overlap; overlapping ranges give unspecified contents
pub unsafe fn copy_bytes_raw(dest: *mut u8, source: *const u8, n: usize) -> *const u8
{
    let mut count = 0usize;
    while count < n {
        unsafe {
            ptr::write_volatile(dest.add(count), ptr::read_volatile(source.add(count)));
        }
        count += 1;
    }
    source
}

/// Copy up to `n` bytes from `source` into `dest`.
///
/// The count is clamped to the shorter of the two slices, so this never panics.
/// Returns `source`.
///
/// ## Example
///
/// ```rust
/// use sigsafe_core::copy_bytes;
///
/// let mut dest = [0u8; 4];
/// copy_bytes(&mut dest, b"crash", 4);
/// assert_eq!(&dest, b"cras");
/// ```
pub fn copy_bytes<'a>(dest: &mut [u8], source: &'a [u8], n: usize) -> &'a [u8]
{
    let count = n.min(dest.len()).min(source.len());
    // SAFETY: both ranges are in bounds and `&mut` excludes overlap.
    unsafe {
        copy_bytes_raw(dest.as_mut_ptr(), source.as_ptr(), count);
    }
    source
}

/// Compare two NUL-terminated byte strings, examining at most `n` bytes.
///
/// Each step checks the budget first, then compares the byte pair:
/// - differing bytes return `s1[i] - s2[i]` (as unsigned values widened to `i32`)
/// - a shared terminator returns `0`
/// - an exhausted budget returns `0`
///
/// A difference at index `n - 1` is therefore reported, and nothing at index
/// `n` or beyond is ever read. Reading past the end of either slice yields `0`,
/// so Rust byte strings without an explicit terminator compare like C strings.
///
/// ## Example
///
/// ```rust
/// use sigsafe_core::bounded_compare;
///
/// assert!(bounded_compare(b"abc", b"abd", 3) < 0);
/// assert_eq!(bounded_compare(b"abc", b"abd", 2), 0);
/// ```
pub fn bounded_compare(s1: &[u8], s2: &[u8], n: usize) -> i32
{
    let mut index = 0usize;
    while index < n {
        let a = s1.get(index).copied().unwrap_or(0);
        let b = s2.get(index).copied().unwrap_or(0);
        if a != b {
            return i32::from(a) - i32::from(b);
        }
        if a == 0 {
            return 0;
        }
        index += 1;
    }
    0
}

/// [`bounded_compare`] over raw C strings.
///
/// # Safety
///
/// Both pointers must be readable up to the first NUL or `n` bytes, whichever
/// comes first.
pub unsafe fn bounded_compare_raw(s1: *const u8, s2: *const u8, n: usize) -> i32
{
    let mut index = 0usize;
    while index < n {
        let (a, b) = unsafe { (ptr::read_volatile(s1.add(index)), ptr::read_volatile(s2.add(index))) };
        if a != b {
            return i32::from(a) - i32::from(b);
        }
        if a == 0 {
            return 0;
        }
        index += 1;
    }
    0
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_copy_returns_source()
    {
        let source = [1u8, 2, 3];
        let mut dest = [0u8; 3];
        let returned = copy_bytes(&mut dest, &source, 3);
        assert!(ptr::eq(returned, &source[..]));
    }

    #[test]
    fn test_copy_clamps_to_shorter_slice()
    {
        let mut dest = [0u8; 2];
        copy_bytes(&mut dest, b"abcdef", 6);
        assert_eq!(&dest, b"ab");

        let mut dest = [9u8; 6];
        copy_bytes(&mut dest, b"xy", 6);
        assert_eq!(&dest, b"xy\x09\x09\x09\x09");
    }

    #[test]
    fn test_copy_zero_leaves_dest_untouched()
    {
        let mut dest = [7u8; 4];
        copy_bytes(&mut dest, b"abcd", 0);
        assert_eq!(dest, [7u8; 4]);
    }

    #[test]
    fn test_copy_raw_returns_source_pointer()
    {
        let source = *b"signal";
        let mut dest = [0u8; 6];
        let returned = unsafe { copy_bytes_raw(dest.as_mut_ptr(), source.as_ptr(), source.len()) };
        assert_eq!(returned, source.as_ptr());
        assert_eq!(dest, source);
    }

    #[test]
    fn test_compare_budget_checked_before_byte()
    {
        // Difference sits exactly at index n - 1: reported.
        assert!(bounded_compare(b"abc", b"abd", 3) < 0);
        // Difference sits at index n: never read.
        assert_eq!(bounded_compare(b"abc", b"abd", 2), 0);
        assert_eq!(bounded_compare(b"x", b"y", 0), 0);
    }

    #[test]
    fn test_compare_stops_at_shared_terminator()
    {
        assert_eq!(bounded_compare(b"abc\0xyz", b"abc\0qrs", 16), 0);
    }

    #[test]
    fn test_compare_slice_end_is_terminator()
    {
        assert!(bounded_compare(b"ab", b"abc", 3) < 0);
        assert!(bounded_compare(b"abc", b"ab", 3) > 0);
        assert_eq!(bounded_compare(b"abc", b"abc\0", 8), 0);
    }

    #[test]
    fn test_compare_uses_unsigned_bytes()
    {
        assert_eq!(bounded_compare(&[0xff], &[0x01], 1), 0xfe);
        assert_eq!(bounded_compare(&[0x01], &[0xff], 1), -0xfe);
    }

    #[test]
    fn test_compare_raw_matches_slice_version()
    {
        let a = b"libsystem_kernel\0";
        let b = b"libsystem_c\0";
        for n in 0..a.len() {
            let raw = unsafe { bounded_compare_raw(a.as_ptr(), b.as_ptr(), n) };
            assert_eq!(raw, bounded_compare(a, b, n), "n = {n}");
        }
    }
}
