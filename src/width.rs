//! Bit widths supported by fixed-width integers.



//		Packages

use crate::float::FloatFormat;
use generic_array::ArrayLength;
use typenum::{U1, U2, U4, U8, U16, U32, U64, Unsigned};



//		Traits

//		Sealed
mod sealed {
	pub trait Sealed {}

	impl Sealed for super::U8  {}
	impl Sealed for super::U16 {}
	impl Sealed for super::U32 {}
	impl Sealed for super::U64 {}
}

//		Width
/// A compile-time bit width for a fixed-width integer type.
///
/// The width is a [`typenum`] number of bits. Only the machine widths `U8`,
/// `U16`, `U32`, and `U64` implement this trait.
///
pub trait Width: Unsigned + sealed::Sealed + 'static {
	/// The number of bytes needed for the width, as a [`typenum`] number, so
	/// that packed representations can be sized at compile time.
	type Bytes: ArrayLength;

	/// The IEEE-754 format with the same width, if there is one.
	const FLOAT: Option<FloatFormat>;
}

//󰭅		Width: U8
impl Width for U8 {
	type Bytes = U1;
	const FLOAT: Option<FloatFormat> = None;
}

//󰭅		Width: U16
impl Width for U16 {
	type Bytes = U2;
	const FLOAT: Option<FloatFormat> = Some(FloatFormat::Half);
}

//󰭅		Width: U32
impl Width for U32 {
	type Bytes = U4;
	const FLOAT: Option<FloatFormat> = Some(FloatFormat::Single);
}

//󰭅		Width: U64
impl Width for U64 {
	type Bytes = U8;
	const FLOAT: Option<FloatFormat> = Some(FloatFormat::Double);
}
