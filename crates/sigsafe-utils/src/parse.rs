//! Parsing for command-line addresses and sizes.

use thiserror::Error;

/// Argument parsing error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError
{
    /// Input was empty or whitespace
    #[error("empty value")]
    Empty,

    /// Not a number in the expected base
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    /// Unrecognized size suffix
    #[error("unknown size suffix '{0}', use K, M or G")]
    UnknownSuffix(String),

    /// The value does not fit in 64 bits
    #[error("'{0}' is too large")]
    Overflow(String),
}

/// Parse an address: hex with a `0x`/`0X` prefix, otherwise decimal.
///
/// Underscores are accepted as digit separators (`0x7fff_0000`).
///
/// ## Errors
///
/// [`ParseError::Empty`] for blank input, [`ParseError::InvalidNumber`] for
/// anything that is not a number, [`ParseError::Overflow`] above `u64::MAX`.
pub fn parse_address(input: &str) -> Result<u64, ParseError>
{
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let (digits, radix) = match trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (trimmed, 10),
    };
    parse_digits(digits, radix, trimmed)
}

/// Parse a byte count with an optional binary suffix.
///
/// `4096`, `64K`, `64KiB`, `2M`, `1g` are all accepted. Suffixes are powers
/// of 1024 and case-insensitive; a trailing `B` is optional.
///
/// ## Errors
///
/// [`ParseError::UnknownSuffix`] for unrecognized suffixes,
/// [`ParseError::Overflow`] if the scaled value exceeds `u64::MAX`, and the
/// same errors as [`parse_address`] for the numeric part.
pub fn parse_byte_size(input: &str) -> Result<u64, ParseError>
{
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let split = trimmed
        .find(|c: char| !(c.is_ascii_digit() || c == '_'))
        .unwrap_or(trimmed.len());
    let (digits, suffix) = trimmed.split_at(split);

    let shift = match suffix.to_ascii_lowercase().as_str() {
        "" | "b" => 0,
        "k" | "kb" | "kib" => 10,
        "m" | "mb" | "mib" => 20,
        "g" | "gb" | "gib" => 30,
        _ => return Err(ParseError::UnknownSuffix(suffix.to_string())),
    };

    let value = parse_digits(digits, 10, trimmed)?;
    value
        .checked_mul(1u64 << shift)
        .ok_or_else(|| ParseError::Overflow(trimmed.to_string()))
}

fn parse_digits(digits: &str, radix: u32, original: &str) -> Result<u64, ParseError>
{
    let cleaned: String = digits.chars().filter(|&c| c != '_').collect();
    if cleaned.is_empty() {
        return Err(ParseError::InvalidNumber(original.to_string()));
    }

    u64::from_str_radix(&cleaned, radix).map_err(|e| match e.kind() {
        std::num::IntErrorKind::PosOverflow => ParseError::Overflow(original.to_string()),
        _ => ParseError::InvalidNumber(original.to_string()),
    })
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_parse_address()
    {
        assert_eq!(parse_address("0x1000"), Ok(0x1000));
        assert_eq!(parse_address("0X7fff_0000"), Ok(0x7fff_0000));
        assert_eq!(parse_address("4096"), Ok(4096));
        assert_eq!(parse_address("  0xdeadBEEF "), Ok(0xdead_beef));
        assert_eq!(parse_address("0xffffffffffffffff"), Ok(u64::MAX));
    }

    #[test]
    fn test_parse_address_errors()
    {
        assert_eq!(parse_address(""), Err(ParseError::Empty));
        assert!(matches!(parse_address("0x"), Err(ParseError::InvalidNumber(_))));
        assert!(matches!(parse_address("12ab"), Err(ParseError::InvalidNumber(_))));
        assert!(matches!(parse_address("-1"), Err(ParseError::InvalidNumber(_))));
        assert!(matches!(parse_address("0x1_0000_0000_0000_0000"), Err(ParseError::Overflow(_))));
    }

    #[test]
    fn test_parse_byte_size()
    {
        assert_eq!(parse_byte_size("4096"), Ok(4096));
        assert_eq!(parse_byte_size("64K"), Ok(64 * 1024));
        assert_eq!(parse_byte_size("64kib"), Ok(64 * 1024));
        assert_eq!(parse_byte_size("2M"), Ok(2 * 1024 * 1024));
        assert_eq!(parse_byte_size("1GB"), Ok(1 << 30));
        assert_eq!(parse_byte_size("10b"), Ok(10));
        assert_eq!(parse_byte_size("1_000"), Ok(1000));
        assert_eq!(parse_byte_size("0"), Ok(0));
    }

    #[test]
    fn test_parse_byte_size_errors()
    {
        assert_eq!(parse_byte_size(" "), Err(ParseError::Empty));
        assert_eq!(parse_byte_size("5T"), Err(ParseError::UnknownSuffix("T".to_string())));
        assert!(matches!(parse_byte_size("K"), Err(ParseError::InvalidNumber(_))));
        assert!(matches!(parse_byte_size("17179869184G"), Err(ParseError::Overflow(_))));
    }
}
