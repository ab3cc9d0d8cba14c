use thiserror::Error;

/// Failure reported by a guaranteed‐erase primitive
///
/// None of these are recoverable: [`crate::secure_zero`] turns every one of
/// them into a process abort.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EraseError {
	/// `memset_s` returned a non‐zero error code
	#[error("`memset_s` failed")]
	MemsetS { errno: i32 },

	/// `count * size_of::<T>()` does not fit in `usize`
	#[error("erase length overflows usize")]
	Overflow,
}
