//! Tests for cross-process reads against our own task

#![cfg(any(target_os = "linux", target_os = "android", target_os = "macos"))]

use sigsafe_core::remote::read_remote_vec;
use sigsafe_core::{read_remote, read_remote_u64, Address, RemoteReadResult, SigsafeError, TaskHandle};

#[test]
fn test_read_own_stack_buffer()
{
    let source: Vec<u8> = (0u8..64).collect();
    let mut dest = [0u8; 64];

    let result = read_remote(TaskHandle::current(), Address::from_ptr(source.as_ptr()), &mut dest);

    assert_eq!(result, RemoteReadResult::Success);
    assert_eq!(&dest[..], &source[..]);
}

#[test]
fn test_read_empty_range()
{
    let source = [1u8; 4];
    let mut dest: [u8; 0] = [];
    let result = read_remote(TaskHandle::current(), Address::from_ptr(source.as_ptr()), &mut dest);
    assert_eq!(result, RemoteReadResult::Success);
}

#[test]
fn test_null_page_is_unmapped()
{
    let mut dest = [0u8; 8];
    let result = read_remote(TaskHandle::current(), Address::ZERO, &mut dest);
    assert_eq!(result, RemoteReadResult::AddressUnmapped);
}

#[test]
fn test_read_word()
{
    let word: u64 = 0x0123_4567_89ab_cdef;
    let read = read_remote_u64(TaskHandle::current(), Address::from_ptr(&word as *const u64 as *const u8));
    assert_eq!(read, Ok(word));
}

#[test]
fn test_read_word_from_null_fails()
{
    let read = read_remote_u64(TaskHandle::current(), Address::ZERO);
    assert_eq!(read, Err(RemoteReadResult::AddressUnmapped));
}

#[test]
fn test_read_vec()
{
    let source = b"crash report".to_vec();
    let copy = read_remote_vec(TaskHandle::current(), Address::from_ptr(source.as_ptr()), source.len()).unwrap();
    assert_eq!(copy, source);
}

#[test]
fn test_read_vec_reports_address()
{
    let err = read_remote_vec(TaskHandle::current(), Address::ZERO, 16).unwrap_err();
    match err {
        SigsafeError::RemoteRead { address, result } => {
            assert_eq!(address, Address::ZERO);
            assert_eq!(result, RemoteReadResult::AddressUnmapped);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_for_pid_resolves_self()
{
    let task = TaskHandle::for_pid(std::process::id());
    // macOS may refuse task_for_pid even for ourselves without entitlements.
    if let Ok(task) = task {
        let value = 7u32;
        let mut dest = [0u8; 4];
        let result = read_remote(task, Address::from_ptr(&value as *const u32 as *const u8), &mut dest);
        assert_eq!(result, RemoteReadResult::Success);
        assert_eq!(u32::from_ne_bytes(dest), value);
        task.release().unwrap();
    }
}

#[cfg(any(target_os = "linux", target_os = "android"))]
#[test]
fn test_for_pid_missing_process()
{
    // Above the default pid_max, so nothing can be running there.
    let pid = 4_194_304 + 17;
    assert!(matches!(TaskHandle::for_pid(pid), Err(SigsafeError::ProcessNotFound(p)) if p == pid));
}
