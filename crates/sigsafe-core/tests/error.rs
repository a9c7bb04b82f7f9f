//! Tests for error handling

use sigsafe_core::error::{Result, SigsafeError};
#[cfg(target_os = "macos")]
use sigsafe_core::platform::macos::error::MachError;
use sigsafe_core::{Address, Errno, RemoteReadResult, WriteError};

#[cfg(target_os = "macos")]
#[test]
fn test_mach_error_protection_failure()
{
    let message = MachError::ProtectionFailure.to_string();
    assert!(message.contains("Permission denied"));
}

#[cfg(target_os = "macos")]
#[test]
fn test_mach_error_to_sigsafe_error()
{
    let err: SigsafeError = MachError::Failure.into();
    assert!(matches!(err, SigsafeError::MachError(MachError::Failure)));
}

#[test]
fn test_process_not_found_display()
{
    let message = SigsafeError::ProcessNotFound(12345).to_string();
    assert!(message.contains("12345"));
    assert!(message.contains("not found"));
}

#[test]
fn test_permission_denied_display()
{
    let message = SigsafeError::PermissionDenied("yama".to_string()).to_string();
    assert!(message.contains("Permission denied"));
    assert!(message.contains("yama"));
}

#[test]
fn test_remote_read_display()
{
    let err = SigsafeError::RemoteRead {
        address: Address::new(0x1000),
        result: RemoteReadResult::AccessDenied,
    };
    let message = err.to_string();
    assert!(message.contains("0x0000000000001000"));
    assert!(message.contains("access denied"));
}

#[test]
fn test_write_error_converts()
{
    let err: SigsafeError = WriteError::Os(Errno(9)).into();
    assert!(matches!(err, SigsafeError::Write(WriteError::Os(Errno(9)))));
    assert!(err.to_string().starts_with("Write failed"));

    let limit: SigsafeError = WriteError::LimitExceeded {
        requested: 6,
        remaining: 4,
    }
    .into();
    assert!(limit.to_string().contains("6 bytes requested"));
}

#[test]
fn test_write_error_into_io_error()
{
    let io_err: std::io::Error = WriteError::Os(Errno(9)).into();
    assert_eq!(io_err.raw_os_error(), Some(9));

    let io_err: std::io::Error = WriteError::WriteZero.into();
    assert_eq!(io_err.kind(), std::io::ErrorKind::WriteZero);
}

#[test]
fn test_result_type()
{
    let ok: Result<u8> = Ok(1);
    let err: Result<u8> = Err(SigsafeError::InvalidArgument("pid".to_string()));
    assert!(ok.is_ok());
    assert!(err.is_err());
}
