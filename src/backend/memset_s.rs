use crate::error::EraseError;
use crate::traits::Zeroer;

use libc::{c_void, memset_s, size_t};

/// C11 Annex K `memset_s`
#[derive(Debug, Default, Clone, Copy)]
pub struct MemsetS;

impl Zeroer for MemsetS {
	unsafe fn zero(&self, addr: *mut u8, len: usize) -> Result<(), EraseError> {
		// A null destination is a constraint violation even for zero length
		if len == 0 {
			return Ok(());
		}

		match memset_s(addr.cast::<c_void>(), len as size_t, 0, len as size_t) {
			0 => Ok(()),
			errno => Err(EraseError::MemsetS { errno }),
		}
	}
}
