use crate::backend::Volatile;
use crate::error::EraseError;
use crate::traits::Zeroer;

/// Windows `SecureZeroMemory`
///
/// The SDK provides this as a force‐inlined header function
/// (`RtlSecureZeroMemory`) rather than an exported symbol. Its body is the
/// same volatile store loop as [`Volatile`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SecureZeroMemory;

impl Zeroer for SecureZeroMemory {
	unsafe fn zero(&self, addr: *mut u8, len: usize) -> Result<(), EraseError> {
		Volatile.zero(addr, len)
	}
}
