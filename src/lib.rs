//! Secure memory erasure
//!
//! [`secure_zero`] overwrites a region with zeros using the best primitive the
//! target offers (`memset_s`, `SecureZeroMemory`, `explicit_bzero` or
//! `explicit_memset`). The choice is made by the build script, never at
//! runtime. Targets without such a primitive only build with the
//! `volatile-fallback` feature, which erases through volatile pointer writes.
//!
//! A failed erase is not an error the caller can handle: the process is
//! aborted through [`fatal`].
//!
//! ```
//! let mut key = [0xffu8; 16];
//! memerase::erase_slice(&mut key);
//! assert_eq!(key, [0u8; 16]);
//! ```

#[cfg(not(any(
	memerase = "memset_s",
	memerase = "secure_zero_memory",
	memerase = "explicit_bzero",
	memerase = "explicit_memset",
	memerase = "volatile",
)))]
compile_error!("No secure memset implementation selected");

pub mod auxiliary;
pub mod backend;
pub mod guard;

mod error;
mod traits;

pub use auxiliary::{fatal, trace, TraceRecord};
pub use backend::{Platform, Strategy, Volatile, STRATEGY};
pub use error::EraseError;
pub use guard::ZeroOnDrop;
pub use traits::Zeroer;

/// Securely zero `len` bytes at `addr` with the backend selected at build time
///
/// Aborts the process if the backend reports failure.
///
/// # Safety
///
/// `addr` must be [valid](std::ptr#safety) for writes of `len` bytes. A null
/// `addr` is permitted if `len` is zero.
pub unsafe fn secure_zero(addr: *mut u8, len: usize) {
	erase_with(&Platform::default(), addr, len)
}

/// Securely zero `len` bytes at `addr` with an explicit backend
///
/// Aborts the process if the backend reports failure. A zero `len` never
/// reaches the backend.
///
/// # Safety
///
/// Same as [`secure_zero`].
pub unsafe fn erase_with<Z: Zeroer + ?Sized>(zeroer: &Z, addr: *mut u8, len: usize) {
	if len == 0 {
		return;
	}

	if let Err(err) = zeroer.zero(addr, len) {
		fatal(&err.to_string());
	}
}

/// Erases a byte slice
pub fn erase_slice(mut s: impl AsMut<[u8]>) {
	let s = s.as_mut();
	unsafe { secure_zero(s.as_mut_ptr(), s.len()) }
}

/// Erases `count` elements of type `T` starting at `addr`
///
/// # Safety
///
/// `addr` must be [valid](std::ptr#safety) for writes of `count` elements.
/// The all‐zero bit pattern need not be a valid `T`; the caller must not read
/// the elements as `T` afterwards unless it is.
pub unsafe fn erase_ptr<T>(addr: *mut T, count: usize) {
	let len = match count.checked_mul(std::mem::size_of::<T>()) {
		Some(len) => len,
		None => fatal(&EraseError::Overflow.to_string()),
	};

	secure_zero(addr.cast::<u8>(), len)
}

#[cfg(test)]
mod tests {
	use super::*;

	use rand::prelude::*;
	use rand_xoshiro::Xoshiro256PlusPlus;

	#[test]
	fn ff_block() {
		let mut buf = [0xffu8; 16];
		unsafe { secure_zero(buf.as_mut_ptr(), 16) };
		assert_eq!(buf, [0u8; 16]);
	}

	#[test]
	fn null_empty() {
		unsafe { secure_zero(std::ptr::null_mut(), 0) };
	}

	#[test]
	fn dangling_empty() {
		let mut empty: [u8; 0] = [];
		unsafe { secure_zero(empty.as_mut_ptr(), 0) };
		erase_slice(&mut empty);
	}

	#[test]
	fn random_lengths() {
		let mut rng = Xoshiro256PlusPlus::seed_from_u64(0x6d656d6572617365);

		for _ in 0..256 {
			let len = rng.random_range(0..4096);
			let mut buf = vec![0u8; len];

			for b in buf.iter_mut() {
				*b = rng.random_range(1..=255);
			}

			erase_slice(&mut buf);
			assert!(buf.iter().all(|&b| b == 0), "length {}", len);
		}
	}

	#[test]
	fn erase_ptr_bounds() {
		let mut words = [u64::MAX; 8];
		unsafe { erase_ptr(words.as_mut_ptr().add(2), 4) };
		assert_eq!(words, [u64::MAX, u64::MAX, 0, 0, 0, 0, u64::MAX, u64::MAX]);
	}

	#[test]
	fn erase_ptr_struct() {
		#[derive(Debug, PartialEq)]
		struct Key {
			id: u32,
			material: [u8; 12],
		}

		let mut key = Key { id: 7, material: [0xaa; 12] };
		unsafe { erase_ptr(&mut key as *mut Key, 1) };
		assert_eq!(key, Key { id: 0, material: [0; 12] });
	}

	#[test]
	fn erase_with_reference() {
		let mut buf = vec![0x3cu8; 1000];
		unsafe { erase_with(&Volatile, buf.as_mut_ptr(), buf.len()) };
		assert!(buf.iter().all(|&b| b == 0));
	}

	#[test]
	fn erase_with_dyn() {
		let zeroer: &dyn Zeroer = &Volatile;
		let mut buf = [1u8; 3];
		unsafe { erase_with(zeroer, buf.as_mut_ptr(), buf.len()) };
		assert_eq!(buf, [0; 3]);
	}

	#[test]
	fn failing_backend_skipped_for_empty() {
		struct Refuse;

		impl Zeroer for Refuse {
			unsafe fn zero(&self, _addr: *mut u8, _len: usize) -> Result<(), EraseError> {
				Err(EraseError::MemsetS { errno: 22 })
			}
		}

		unsafe { erase_with(&Refuse, std::ptr::null_mut(), 0) };
	}
}
