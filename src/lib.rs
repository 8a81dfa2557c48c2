//! The Fixedint crate is a library of fixed-width unsigned integers that wrap
//! like machine integers.
//!
//! Each type has a bit width (8, 16, 32, or 64) and a byte order (little or
//! big endian). Arithmetic, bitwise, and shift operators wrap modulo `2^BITS`
//! instead of overflowing, and the byte order governs how values are packed
//! into and read from bytes.
//!
//! ```
//! use fixedint::{UInt8, UInt16, UInt32};
//!
//! let x = UInt8::new(250).unwrap();
//! assert_eq!(x + 10, 4);
//! assert_eq!(format!("{:?}", UInt8::new(21).unwrap()), "UInt8(0x15) # 21");
//! assert_eq!(UInt16::from_bytes(b"AB"), 0x4241);
//! assert_eq!(UInt32::from_float(420.75).unwrap(), 0x43D2_6000);
//! ```



//		Global configuration

//	Customisations of the standard linting configuration
#![allow(clippy::items_after_test_module, reason = "Not needed with separated tests")]

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_snake_case,
	clippy::cast_lossless,
	clippy::cast_possible_truncation,
	clippy::cast_precision_loss,
	clippy::cognitive_complexity,
	clippy::default_numeric_fallback,
	clippy::erasing_op,
	clippy::exhaustive_enums,
	clippy::exhaustive_structs,
	clippy::expect_used,
	clippy::float_cmp,
	clippy::identity_op,
	clippy::indexing_slicing,
	clippy::let_underscore_must_use,
	clippy::let_underscore_untyped,
	clippy::missing_assert_message,
	clippy::missing_panics_doc,
	clippy::must_use_candidate,
	clippy::panic,
	clippy::print_stdout,
	clippy::unreadable_literal,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	reason = "Not useful in unit tests"
))]



//		Modules

mod errors;
mod float;
mod int;
mod operand;
mod ops;
mod order;
mod width;



//		Packages

pub use errors::FixedIntError;
pub use float::FloatFormat;
pub use int::{FixedInt, UInt8, UInt16, UInt32, UInt64, UInt8_be, UInt16_be, UInt32_be, UInt64_be};
pub use operand::{Number, Operand};
pub use order::{BigEndian, Endian, LittleEndian, Order};
pub use typenum::{U8, U16, U32, U64};
pub use width::Width;
