//! Tests for the byte primitives

use proptest::prelude::*;
use sigsafe_core::bytes::bounded_compare_raw;
use sigsafe_core::{bounded_compare, copy_bytes};

#[test]
fn test_compare_reports_sign_of_differing_byte()
{
    let forward = bounded_compare(b"abc", b"abd", 3);
    assert!(forward < 0);
    assert_eq!(forward, i32::from(b'c') - i32::from(b'd'));

    let backward = bounded_compare(b"abd", b"abc", 3);
    assert!(backward > 0);
    assert_eq!(backward, -forward);
}

#[test]
fn test_compare_raw_over_c_strings()
{
    let a = c"__TEXT";
    let b = c"__DATA";
    let result = unsafe { bounded_compare_raw(a.as_ptr().cast(), b.as_ptr().cast(), 16) };
    assert_eq!(result, i32::from(b'T') - i32::from(b'D'));

    let same = unsafe { bounded_compare_raw(a.as_ptr().cast(), a.as_ptr().cast(), 16) };
    assert_eq!(same, 0);
}

proptest! {
    #[test]
    fn copy_populates_prefix(source in proptest::collection::vec(any::<u8>(), 0..512), extra in 0usize..32) {
        let n = source.len();
        let mut dest = vec![0xa5u8; n + extra];
        let returned = copy_bytes(&mut dest, &source, n);

        prop_assert_eq!(&dest[..n], &source[..]);
        prop_assert!(dest[n..].iter().all(|b| *b == 0xa5));
        prop_assert!(std::ptr::eq(returned, &source[..]));
    }

    #[test]
    fn compare_with_self_is_zero(s in proptest::collection::vec(any::<u8>(), 0..128), n in 0usize..256) {
        prop_assert_eq!(bounded_compare(&s, &s, n), 0);
    }

    #[test]
    fn compare_sign_matches_first_difference(
        a in proptest::collection::vec(1u8..=255, 1..64),
        b in proptest::collection::vec(1u8..=255, 1..64),
    ) {
        let n = a.len().max(b.len());
        let expected = a
            .iter()
            .chain(std::iter::repeat(&0))
            .zip(b.iter().chain(std::iter::repeat(&0)))
            .take(n)
            .find(|(x, y)| x != y)
            .map_or(0, |(x, y)| i32::from(*x) - i32::from(*y));
        prop_assert_eq!(bounded_compare(&a, &b, n), expected);
    }
}
