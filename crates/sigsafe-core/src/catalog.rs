//! # Error Catalog
//!
//! A closed set of error codes shared by crash-reporting components, each with
//! exactly one fixed message.
//!
//! The lookup is a pure function returning `&'static str`, so it is safe to
//! call from a signal handler: no locale, no formatting, no allocation.

use std::fmt;

/// Message returned for numeric values outside the enumeration.
pub const UNHANDLED_ERROR_CODE: &str = "Unhandled error code";

/// Error codes understood by crash-reporting components
///
/// The discriminants are stable and start at zero, so codes can travel through
/// raw integer channels (for example a status word written by a signal handler)
/// and be mapped back with [`ErrorCode::try_from`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ErrorCode
{
    /// No error
    Success = 0,
    /// Unknown error (if found, is a bug)
    Unknown = 1,
    /// The output file can not be opened or written to
    OutputError = 2,
    /// No memory available
    NoMemory = 3,
    /// Unsupported operation
    NotSupported = 4,
    /// Invalid argument
    InvalidArgument = 5,
    /// Internal error
    InternalError = 6,
    /// Access to the requested resource is denied
    AccessDenied = 7,
    /// The requested resource could not be found
    NotFound = 8,
}

impl ErrorCode
{
    /// Every code, in discriminant order.
    pub const ALL: [ErrorCode; 9] = [
        ErrorCode::Success,
        ErrorCode::Unknown,
        ErrorCode::OutputError,
        ErrorCode::NoMemory,
        ErrorCode::NotSupported,
        ErrorCode::InvalidArgument,
        ErrorCode::InternalError,
        ErrorCode::AccessDenied,
        ErrorCode::NotFound,
    ];

    /// Raw numeric value of this code.
    pub const fn raw(self) -> i32
    {
        self as i32
    }

    /// Fixed human-readable message for this code.
    pub const fn message(self) -> &'static str
    {
        describe(self)
    }
}

/// Return the fixed message for `code`.
///
/// Total over the enumeration; never allocates.
///
/// ## Example
///
/// ```rust
/// use sigsafe_core::{describe, ErrorCode};
///
/// assert_eq!(describe(ErrorCode::AccessDenied), "Access denied");
/// ```
pub const fn describe(code: ErrorCode) -> &'static str
{
    match code {
        ErrorCode::Success => "No error",
        ErrorCode::Unknown => "Unknown error",
        ErrorCode::OutputError => "Output file can not be opened (or written to)",
        ErrorCode::NoMemory => "No memory available",
        ErrorCode::NotSupported => "Operation not supported",
        ErrorCode::InvalidArgument => "Invalid argument",
        ErrorCode::InternalError => "Internal error",
        ErrorCode::AccessDenied => "Access denied",
        ErrorCode::NotFound => "Not found",
    }
}

/// Return the fixed message for a raw numeric code.
///
/// Values outside the enumeration map to [`UNHANDLED_ERROR_CODE`].
pub fn describe_raw(code: i32) -> &'static str
{
    match ErrorCode::try_from(code) {
        Ok(code) => describe(code),
        Err(_) => UNHANDLED_ERROR_CODE,
    }
}

impl TryFrom<i32> for ErrorCode
{
    /// The unrecognized raw value.
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error>
    {
        match value {
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::OutputError),
            3 => Ok(ErrorCode::NoMemory),
            4 => Ok(ErrorCode::NotSupported),
            5 => Ok(ErrorCode::InvalidArgument),
            6 => Ok(ErrorCode::InternalError),
            7 => Ok(ErrorCode::AccessDenied),
            8 => Ok(ErrorCode::NotFound),
            other => Err(other),
        }
    }
}

impl From<ErrorCode> for i32
{
    fn from(code: ErrorCode) -> Self
    {
        code.raw()
    }
}

impl fmt::Display for ErrorCode
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(describe(*self))
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_raw_round_trips_through_try_from()
    {
        for code in ErrorCode::ALL {
            assert_eq!(ErrorCode::try_from(code.raw()), Ok(code));
        }
    }

    #[test]
    fn test_discriminants_are_dense()
    {
        for (index, code) in ErrorCode::ALL.iter().enumerate() {
            assert_eq!(code.raw(), i32::try_from(index).unwrap());
        }
    }

    #[test]
    fn test_try_from_rejects_out_of_range()
    {
        assert_eq!(ErrorCode::try_from(9), Err(9));
        assert_eq!(ErrorCode::try_from(-1), Err(-1));
    }

    #[test]
    fn test_display_matches_describe()
    {
        assert_eq!(ErrorCode::NotFound.to_string(), "Not found");
        assert_eq!(ErrorCode::OutputError.message(), describe(ErrorCode::OutputError));
    }
}
