use crate::error::EraseError;
use crate::traits::Zeroer;

use std::ptr;
use std::sync::atomic::{compiler_fence, Ordering};

/// Byte‐wise volatile stores
///
/// Every store goes through [`ptr::write_volatile`], which the compiler must
/// emit even when the region is never read again. The trailing fence keeps
/// later code from being reordered ahead of the erase.
#[derive(Debug, Default, Clone, Copy)]
pub struct Volatile;

impl Zeroer for Volatile {
	unsafe fn zero(&self, addr: *mut u8, len: usize) -> Result<(), EraseError> {
		for i in 0..len {
			ptr::write_volatile(addr.add(i), 0);
		}

		compiler_fence(Ordering::SeqCst);
		Ok(())
	}
}
