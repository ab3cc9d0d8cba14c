//! Erase backends
//!
//! `build.rs` selects exactly one of these for the target and exposes it as
//! [`Platform`]. [`Volatile`] is compiled everywhere as the portable
//! reference.

use std::fmt;

mod volatile;
pub use volatile::Volatile;

#[cfg(memerase = "memset_s")]
mod memset_s;
#[cfg(memerase = "memset_s")]
pub use memset_s::MemsetS;

#[cfg(memerase = "secure_zero_memory")]
mod secure_zero_memory;
#[cfg(memerase = "secure_zero_memory")]
pub use secure_zero_memory::SecureZeroMemory;

#[cfg(memerase = "explicit_bzero")]
mod explicit_bzero;
#[cfg(memerase = "explicit_bzero")]
pub use explicit_bzero::ExplicitBzero;

#[cfg(memerase = "explicit_memset")]
mod explicit_memset;
#[cfg(memerase = "explicit_memset")]
pub use explicit_memset::ExplicitMemset;

/// The backend selected at build time
#[cfg(memerase = "memset_s")]
pub type Platform = MemsetS;
#[cfg(memerase = "secure_zero_memory")]
pub type Platform = SecureZeroMemory;
#[cfg(memerase = "explicit_bzero")]
pub type Platform = ExplicitBzero;
#[cfg(memerase = "explicit_memset")]
pub type Platform = ExplicitMemset;
#[cfg(memerase = "volatile")]
pub type Platform = Volatile;

/// Erase mechanisms in order of preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
	/// C11 Annex K `memset_s`
	MemsetS,
	/// Windows `SecureZeroMemory`
	SecureZeroMemory,
	/// libc `explicit_bzero`
	ExplicitBzero,
	/// libc `explicit_memset`
	ExplicitMemset,
	/// Byte‐wise volatile stores
	Volatile,
}

impl Strategy {
	/// Name as accepted by `MEMERASE_STRATEGY`
	pub const fn name(self) -> &'static str {
		match self {
			Self::MemsetS => "memset_s",
			Self::SecureZeroMemory => "secure_zero_memory",
			Self::ExplicitBzero => "explicit_bzero",
			Self::ExplicitMemset => "explicit_memset",
			Self::Volatile => "volatile",
		}
	}
}

impl fmt::Display for Strategy {
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt.write_str(self.name())
	}
}

/// The strategy compiled into this build
#[cfg(memerase = "memset_s")]
pub const STRATEGY: Strategy = Strategy::MemsetS;
#[cfg(memerase = "secure_zero_memory")]
pub const STRATEGY: Strategy = Strategy::SecureZeroMemory;
#[cfg(memerase = "explicit_bzero")]
pub const STRATEGY: Strategy = Strategy::ExplicitBzero;
#[cfg(memerase = "explicit_memset")]
pub const STRATEGY: Strategy = Strategy::ExplicitMemset;
#[cfg(memerase = "volatile")]
pub const STRATEGY: Strategy = Strategy::Volatile;
