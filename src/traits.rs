use crate::error::EraseError;

/// A mechanism that overwrites memory with zeros in a way the optimizer may
/// not elide
pub trait Zeroer {
	/// Zero `len` bytes starting at `addr`
	///
	/// # Safety
	///
	/// `addr` must be [valid](std::ptr#safety) for writes of `len` bytes, or
	/// `len` must be zero (in which case `addr` may be null).
	unsafe fn zero(&self, addr: *mut u8, len: usize) -> Result<(), EraseError>;
}
