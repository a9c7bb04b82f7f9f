//! Remote address type.

use std::fmt;
use std::ops::Add;

/// An absolute address inside some task's address space
///
/// Remote addresses are always 64-bit, even when the caller is a 32-bit
/// process inspecting a 64-bit one, so this wraps a `u64` rather than a
/// `usize` or a pointer. Keeping it a distinct type stops lengths and offsets
/// from being passed where an address is expected.
///
/// ## Example
///
/// ```rust
/// use sigsafe_core::Address;
///
/// let base = Address::new(0x1000);
/// assert_eq!((base + 0x20).value(), 0x1020);
/// assert_eq!(base.range_end(0x10), Some(Address::new(0x1010)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address(u64);

impl Address
{
    /// The null address
    pub const ZERO: Self = Address(0);

    /// Create an address from a raw value. Usable in const contexts.
    pub const fn new(value: u64) -> Self
    {
        Address(value)
    }

    /// Address of a local pointer, for reads from the current task.
    pub fn from_ptr<T>(ptr: *const T) -> Self
    {
        Address(ptr as usize as u64)
    }

    /// Raw value.
    pub const fn value(self) -> u64
    {
        self.0
    }

    /// Add an offset, returning `None` on overflow.
    pub const fn checked_add(self, offset: u64) -> Option<Self>
    {
        match self.0.checked_add(offset) {
            Some(value) => Some(Address(value)),
            None => None,
        }
    }

    /// Add an offset, saturating at `u64::MAX`.
    pub const fn saturating_add(self, offset: u64) -> Self
    {
        Address(self.0.saturating_add(offset))
    }

    /// One past the last byte of a `len`-byte range starting here.
    ///
    /// `None` if the range wraps the address space.
    pub fn range_end(self, len: usize) -> Option<Self>
    {
        self.checked_add(u64::try_from(len).ok()?)
    }

    /// The address as a local `usize`, if it fits.
    ///
    /// Remote addresses above `usize::MAX` cannot be handed to 32-bit system
    /// calls; readers report those as unmapped.
    pub fn to_usize(self) -> Option<usize>
    {
        usize::try_from(self.0).ok()
    }
}

impl From<u64> for Address
{
    fn from(value: u64) -> Self
    {
        Address(value)
    }
}

impl From<Address> for u64
{
    fn from(address: Address) -> Self
    {
        address.0
    }
}

impl fmt::Display for Address
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "0x{:016x}", self.0)
    }
}

impl fmt::LowerHex for Address
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl Add<u64> for Address
{
    type Output = Address;

    fn add(self, rhs: u64) -> Self::Output
    {
        Address(self.0.wrapping_add(rhs))
    }
}
