use crate::erase_slice;

use std::fmt;
use std::ops::{Deref, DerefMut, Drop};

/// Owns a byte buffer and securely erases it when dropped
///
/// Only the bytes visible through [`AsMut<[u8]>`] are erased; spare capacity
/// of a growable container is not.
pub struct ZeroOnDrop<B: AsRef<[u8]> + AsMut<[u8]>>(B);

impl<B: AsRef<[u8]> + AsMut<[u8]>> ZeroOnDrop<B> {
	pub fn new(inner: B) -> Self {
		let guard = Self(inner);

		#[cfg(feature = "trace")]
		guard.trace('+');

		guard
	}

	#[cfg(feature = "trace")]
	fn trace(&self, prefix: char) {
		let bytes = self.0.as_ref();
		crate::auxiliary::trace(prefix, bytes.as_ptr(), bytes.len(), bytes.len(), std::mem::align_of::<u8>());
	}

	/// Erase the contents now without giving up the buffer
	pub fn erase(&mut self) {
		erase_slice(self.0.as_mut());
	}
}

impl<B: AsRef<[u8]> + AsMut<[u8]> + Default> Default for ZeroOnDrop<B> {
	fn default() -> Self {
		Self::new(B::default())
	}
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> From<B> for ZeroOnDrop<B> {
	fn from(inner: B) -> Self {
		Self::new(inner)
	}
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> Deref for ZeroOnDrop<B> {
	type Target = [u8];

	fn deref(&self) -> &Self::Target {
		self.0.as_ref()
	}
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> DerefMut for ZeroOnDrop<B> {
	fn deref_mut(&mut self) -> &mut Self::Target {
		self.0.as_mut()
	}
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> Drop for ZeroOnDrop<B> {
	fn drop(&mut self) {
		#[cfg(feature = "trace")]
		self.trace('-');

		self.erase();
	}
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> fmt::Debug for ZeroOnDrop<B> {
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(fmt, "ZeroOnDrop({} bytes, {})", self.0.as_ref().len(), std::any::type_name::<B>())
	}
}
