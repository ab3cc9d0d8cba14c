use crate::error::EraseError;
use crate::traits::Zeroer;

use libc::{c_void, explicit_memset, size_t};

/// libc `explicit_memset`
#[derive(Debug, Default, Clone, Copy)]
pub struct ExplicitMemset;

impl Zeroer for ExplicitMemset {
	unsafe fn zero(&self, addr: *mut u8, len: usize) -> Result<(), EraseError> {
		if len != 0 {
			explicit_memset(addr.cast::<c_void>(), 0, len as size_t);
		}

		Ok(())
	}
}
