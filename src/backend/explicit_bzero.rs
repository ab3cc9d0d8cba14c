use crate::error::EraseError;
use crate::traits::Zeroer;

use libc::{c_void, explicit_bzero, size_t};

/// libc `explicit_bzero`
#[derive(Debug, Default, Clone, Copy)]
pub struct ExplicitBzero;

impl Zeroer for ExplicitBzero {
	unsafe fn zero(&self, addr: *mut u8, len: usize) -> Result<(), EraseError> {
		if len != 0 {
			explicit_bzero(addr.cast::<c_void>(), len as size_t);
		}

		Ok(())
	}
}
