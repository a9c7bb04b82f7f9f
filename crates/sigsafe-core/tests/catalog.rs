//! Tests for the error catalog

use std::collections::HashSet;

use sigsafe_core::catalog::UNHANDLED_ERROR_CODE;
use sigsafe_core::{describe, describe_raw, ErrorCode};

#[test]
fn test_every_code_has_a_nonempty_message()
{
    for code in ErrorCode::ALL {
        assert!(!describe(code).is_empty(), "{code:?} has an empty message");
    }
}

#[test]
fn test_messages_are_distinct()
{
    let messages: HashSet<&str> = ErrorCode::ALL.iter().map(|code| describe(*code)).collect();
    assert_eq!(messages.len(), ErrorCode::ALL.len());
}

#[test]
fn test_messages_are_fixed()
{
    assert_eq!(describe(ErrorCode::Success), "No error");
    assert_eq!(describe(ErrorCode::Unknown), "Unknown error");
    assert_eq!(
        describe(ErrorCode::OutputError),
        "Output file can not be opened (or written to)"
    );
    assert_eq!(describe(ErrorCode::NoMemory), "No memory available");
    assert_eq!(describe(ErrorCode::NotSupported), "Operation not supported");
    assert_eq!(describe(ErrorCode::InvalidArgument), "Invalid argument");
    assert_eq!(describe(ErrorCode::InternalError), "Internal error");
    assert_eq!(describe(ErrorCode::AccessDenied), "Access denied");
    assert_eq!(describe(ErrorCode::NotFound), "Not found");
}

#[test]
fn test_describe_raw_matches_enum()
{
    for code in ErrorCode::ALL {
        assert_eq!(describe_raw(code.raw()), describe(code));
    }
}

#[test]
fn test_describe_raw_falls_back_for_unknown_values()
{
    assert_eq!(describe_raw(9), UNHANDLED_ERROR_CODE);
    assert_eq!(describe_raw(-1), "Unhandled error code");
    assert_eq!(describe_raw(i32::MAX), UNHANDLED_ERROR_CODE);
}
