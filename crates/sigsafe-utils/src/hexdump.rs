//! Hex + ASCII rendering of memory snapshots.

use std::fmt::Write as _;

/// Narrowest accepted row width
pub const MIN_WIDTH: usize = 4;

/// Widest accepted row width
pub const MAX_WIDTH: usize = 32;

/// Format `bytes` as a traditional hexdump, one row per `width` bytes.
///
/// Each row starts with the address of its first byte (`base` plus the row
/// offset), followed by the bytes in hex and then their printable ASCII
/// form, with `.` for anything else. A short last row is padded so the ASCII
/// column lines up. `width` is clamped to `MIN_WIDTH..=MAX_WIDTH`.
///
/// ```rust
/// use sigsafe_utils::format_hexdump;
///
/// let dump = format_hexdump(0x1000, b"AB\n", 4);
/// assert_eq!(dump, "0000000000001000: 41 42 0a     AB.\n");
/// ```
pub fn format_hexdump(base: u64, bytes: &[u8], width: usize) -> String
{
    let width = width.clamp(MIN_WIDTH, MAX_WIDTH);
    let rows = bytes.len().div_ceil(width);
    let mut out = String::with_capacity(rows * (20 + width * 4));

    for (row, chunk) in bytes.chunks(width).enumerate() {
        let addr = base.saturating_add((row * width) as u64);
        let _ = write!(out, "{addr:016x}: ");

        for byte in chunk {
            let _ = write!(out, "{byte:02x} ");
        }
        for _ in chunk.len()..width {
            out.push_str("   ");
        }

        out.push(' ');
        out.extend(chunk.iter().map(|&byte| {
            if byte.is_ascii_graphic() || byte == b' ' {
                char::from(byte)
            } else {
                '.'
            }
        }));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_full_rows()
    {
        let dump = format_hexdump(0, b"0123abcd", 4);
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "0000000000000000: 30 31 32 33  0123");
        assert_eq!(lines[1], "0000000000000004: 61 62 63 64  abcd");
    }

    #[test]
    fn test_short_last_row_is_padded()
    {
        let dump = format_hexdump(0x10, &[0xff, 0x00, b'z', 0x41, 0x42], 4);
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines[1], "0000000000000014: 42           B");
        assert_eq!(lines[0].len(), lines[1].len() + 3);
    }

    #[test]
    fn test_width_is_clamped()
    {
        let dump = format_hexdump(0, &[0u8; 64], 1000);
        assert_eq!(dump.lines().count(), 2);

        let dump = format_hexdump(0, &[0u8; 8], 0);
        assert_eq!(dump.lines().count(), 2);
    }

    #[test]
    fn test_empty_input()
    {
        assert!(format_hexdump(0x1000, &[], 16).is_empty());
    }

    #[test]
    fn test_address_saturates()
    {
        let dump = format_hexdump(u64::MAX - 1, &[1, 2, 3, 4, 5, 6], 4);
        assert!(dump.lines().nth(1).unwrap().starts_with("ffffffffffffffff: "));
    }
}
