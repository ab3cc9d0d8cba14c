//! Auxiliary functions

use std::fmt;
use std::io::{self, Write};

/// A single memory event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceRecord {
	/// Event kind (`+` for acquisition, `-` for release)
	pub prefix: char,
	pub ptr: *const u8,
	pub requested: usize,
	pub allocated: usize,
	pub alignment: usize,
}

impl fmt::Display for TraceRecord {
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(fmt, "{} {:p}  [{} => {} @{}]",
			self.prefix, self.ptr, self.requested, self.allocated, self.alignment)
	}
}

/// Print one trace line to standard error
///
/// Write errors are ignored.
pub fn trace(prefix: char, ptr: *const u8, requested: usize, allocated: usize, alignment: usize) {
	let record = TraceRecord { prefix, ptr, requested, allocated, alignment };
	let _ = writeln!(io::stderr().lock(), "{}", record);
}

/// Print `message` to standard error and abort the process
pub fn fatal(message: &str) -> ! {
	log::error!("{}", message);

	let _ = writeln!(io::stderr().lock(), "{}", message);
	std::process::abort()
}
