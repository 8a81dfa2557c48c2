//! Contains error types used throughout the library.



//		Modules

#[cfg(test)]
#[path = "tests/errors.rs"]
mod tests;



//		Packages

use thiserror::Error as ThisError;



//		Enums

//		FixedIntError
/// Represents all possible errors that fixed-width integer operations can
/// produce.
///
/// Arithmetic never fails: overflow always wraps modulo `2^BITS`. Errors only
/// arise when an operand or source value is of the wrong kind, when a view is
/// requested that the width cannot support, or when a value is encoded into a
/// space too small to hold it.
///
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum FixedIntError {
	/// The incoming value is not of a supported kind, e.g. a non-integral
	/// float given to an operator that requires an integer, or a value that is
	/// neither an integer, bytes, an ASCII string, nor a fixed-width integer.
	#[error("Type mismatch: {0}")]
	TypeMismatch(String),

	/// The requested operation does not exist for this width, e.g. a float
	/// view of an 8-bit integer.
	#[error("Unsupported operation: {0}")]
	UnsupportedOperation(String),

	/// The value does not fit into the requested number of bytes.
	#[error("Value too large for {size} bytes")]
	ValueTooLarge {
		/// The number of bytes that were available.
		size: usize,
	},
}

//󰭅		FixedIntError
impl FixedIntError {
	//		integer_required
	/// The error raised by operators that require an integral operand.
	#[must_use]
	pub fn integer_required() -> Self {
		Self::TypeMismatch("Integer argument required".to_owned())
	}

	//		no_float_for
	/// The error raised when there is no IEEE-754 format for a width.
	///
	/// # Parameters
	///
	/// * `bytes` - The width of the integer type, in bytes.
	///
	#[must_use]
	pub fn no_float_for(bytes: usize) -> Self {
		Self::UnsupportedOperation(format!("No float type for size {bytes} bytes"))
	}

	//		not_invertible
	/// The error raised when a negative power needs an inverse that does not
	/// exist.
	#[must_use]
	pub fn not_invertible() -> Self {
		Self::UnsupportedOperation("Base is not invertible for the given modulus".to_owned())
	}
}
