//! Operands and results of mixed integer/float arithmetic.
//!
//! Fixed-width integers accept plain integers, floats, and other fixed-width
//! integers on the right-hand side of their operators. An [`Operand`] is that
//! right-hand side with its kind made explicit, and a [`Number`] is the
//! result of an operation that may or may not stay fixed-width.



//		Modules

#[cfg(test)]
#[path = "tests/operand.rs"]
mod tests;



//		Packages

use crate::{
	int::FixedInt,
	order::Order,
	width::Width,
};
use core::fmt::{Display, Formatter, self};



//		Constants

/// `2^127`, the first float magnitude outside the range of [`i128`].
const I128_LIMIT: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;



//		Enums

//		Integral
/// The integral value of an operand, as far as fixed-width arithmetic needs
/// to know it.
///
/// Floats of magnitude `2^127` or more are integral but do not fit an
/// [`i128`]. Their spacing is at least `2^75`, so they are always multiples of
/// `2^64` and vanish modulo every supported width.
///
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Integral {
	/// A value within the range of [`i128`].
	Exact(i128),

	/// A value beyond the range of [`i128`], with its sign.
	Beyond {
		/// Whether the value is negative.
		negative: bool,
	},
}

//󰭅		Integral
impl Integral {
	//		residue
	/// A value congruent to this one modulo `2^64`.
	///
	/// Addition, subtraction, multiplication, and the bitwise operations only
	/// depend on this, once their results are masked.
	///
	pub(crate) const fn residue(self) -> i128 {
		match self {
			Self::Exact(v)      => v,
			Self::Beyond { .. } => 0,
		}
	}

	//		saturated
	/// The value, clamped into the range of [`i128`].
	///
	/// A clamped value keeps its sign and stays beyond any 64-bit dividend or
	/// shift amount, so floored division, remainders, and shifts of a 64-bit
	/// value give the same results modulo `2^64` as for the true value.
	///
	pub(crate) const fn saturated(self) -> i128 {
		match self {
			Self::Exact(v)                   => v,
			Self::Beyond { negative: true }  => i128::MIN,
			Self::Beyond { negative: false } => i128::MAX,
		}
	}
}

//		Operand
/// A right-hand operand of a fixed-width integer operation.
///
/// Every primitive integer up to 64 bits, [`i128`], [`f32`], [`f64`], and
/// every [`FixedInt`] converts into an [`Operand`].
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand {
	/// An integer value.
	Int(i128),

	/// A floating-point value, which may or may not be integral.
	Float(f64),
}

//󰭅		Operand
impl Operand {
	//		as_integer
	/// Returns the integral value of the operand, if it has one that fits in
	/// an [`i128`].
	///
	/// Integers are always integral. A float is integral if it is finite and
	/// equal to its own truncation. Integral floats of magnitude `2^127` or
	/// more give [`None`] here, although [`is_integral()`](Operand::is_integral())
	/// is true for them.
	///
	#[must_use]
	pub fn as_integer(self) -> Option<i128> {
		match self.integral()? {
			Integral::Exact(v)      => Some(v),
			Integral::Beyond { .. } => None,
		}
	}

	//		is_integral
	/// Determines whether the operand has an integral value.
	///
	/// This is the single test that decides whether an operation proceeds
	/// with integer semantics (and a fixed-width result) or with float
	/// semantics. Every finite float equal to its own truncation passes,
	/// whatever its magnitude.
	///
	#[must_use]
	pub fn is_integral(self) -> bool {
		self.integral().is_some()
	}

	//		to_f64
	/// Represents the operand as a float, rounding large integers.
	#[expect(clippy::cast_precision_loss, reason = "Float semantics are wanted here")]
	#[must_use]
	pub fn to_f64(self) -> f64 {
		match self {
			Self::Int(v)   => v as f64,
			Self::Float(v) => v,
		}
	}

	//		integral
	/// Returns the integral value of the operand, of any magnitude.
	#[expect(clippy::cast_possible_truncation, reason = "Range checked beforehand")]
	pub(crate) fn integral(self) -> Option<Integral> {
		match self {
			Self::Int(v)   => Some(Integral::Exact(v)),
			Self::Float(v) if !v.is_finite() || v.trunc() != v => None,
			Self::Float(v) if (-I128_LIMIT..I128_LIMIT).contains(&v) => Some(Integral::Exact(v as i128)),
			Self::Float(v) => Some(Integral::Beyond { negative: v < 0.0 }),
		}
	}
}

//󰭅		Display
impl Display for Operand {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Self::Int(v)   => write!(f, "{v}"),
			Self::Float(v) => write!(f, "{v}"),
		}
	}
}

//󰭅		From: f32 -> Operand
impl From<f32> for Operand {
	//		from
	fn from(v: f32) -> Self {
		Self::Float(f64::from(v))
	}
}

//󰭅		From: f64 -> Operand
impl From<f64> for Operand {
	//		from
	fn from(v: f64) -> Self {
		Self::Float(v)
	}
}

//󰭅		From: FixedInt -> Operand
impl<BITS: Width, ORDER: Order> From<FixedInt<BITS, ORDER>> for Operand {
	//		from
	fn from(v: FixedInt<BITS, ORDER>) -> Self {
		Self::Int(i128::from(v.as_u64()))
	}
}

//		PlainInt
/// A primitive integer that can take part in fixed-width arithmetic.
pub(crate) trait PlainInt: Copy {
	/// Widens the value to an [`i128`], which holds every supported type.
	fn to_i128(self) -> i128;
}

/// Implements [`PlainInt`] and [`Operand`] conversion for primitive integers.
macro_rules! plain_int {
	($($t:ty),*) => {$(
		//󰭅		PlainInt: $t
		impl PlainInt for $t {
			//		to_i128
			#[allow(clippy::cast_lossless, clippy::cast_possible_wrap, clippy::unnecessary_cast, reason = "All supported types fit")]
			fn to_i128(self) -> i128 {
				self as i128
			}
		}
		
		//󰭅		From: $t -> Operand
		impl From<$t> for Operand {
			//		from
			fn from(v: $t) -> Self {
				Self::Int(v.to_i128())
			}
		}
	)*};
}

plain_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, i128, isize);



//		Number
/// The result of an operation that keeps integer semantics when it can.
///
/// Addition, subtraction, multiplication, and true division produce a
/// [`Number::Fixed`] when they were computed with integer semantics, and a
/// [`Number::Float`] otherwise.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number<T> {
	/// An integral result, wrapped into the fixed-width type.
	Fixed(T),

	/// A fractional (or otherwise non-integral) result.
	Float(f64),
}

//󰭅		Number
impl<T> Number<T> {
	//		fixed
	/// Returns the fixed-width result, if there is one.
	#[must_use]
	pub fn fixed(self) -> Option<T> {
		match self {
			Self::Fixed(v) => Some(v),
			Self::Float(_) => None,
		}
	}

	//		float
	/// Returns the float result, if there is one.
	#[must_use]
	pub fn float(self) -> Option<f64> {
		match self {
			Self::Fixed(_) => None,
			Self::Float(v) => Some(v),
		}
	}

	//		is_fixed
	/// Determines whether the result stayed fixed-width.
	#[must_use]
	pub const fn is_fixed(&self) -> bool {
		matches!(self, Self::Fixed(_))
	}

	//		is_float
	/// Determines whether the result became a float.
	#[must_use]
	pub const fn is_float(&self) -> bool {
		matches!(self, Self::Float(_))
	}
}

//󰭅		Number<FixedInt>
impl<BITS: Width, ORDER: Order> Number<FixedInt<BITS, ORDER>> {
	//		to_f64
	/// Represents the result as a float, whichever kind it is.
	#[expect(clippy::cast_precision_loss, reason = "Float semantics are wanted here")]
	#[must_use]
	pub fn to_f64(self) -> f64 {
		match self {
			Self::Fixed(v) => v.as_u64() as f64,
			Self::Float(v) => v,
		}
	}
}

//󰭅		Display
impl<T: Display> Display for Number<T> {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Self::Fixed(v) => Display::fmt(v, f),
			Self::Float(v) => Display::fmt(v, f),
		}
	}
}

//󰭅		PartialEq: Number == f64
impl<BITS: Width, ORDER: Order> PartialEq<f64> for Number<FixedInt<BITS, ORDER>> {
	//		eq
	fn eq(&self, other: &f64) -> bool {
		match self {
			Self::Fixed(v) => v == other,
			Self::Float(v) => v == other,
		}
	}
}

//󰭅		PartialEq: Number == FixedInt
impl<BITS, ORDER, B2, O2> PartialEq<FixedInt<B2, O2>> for Number<FixedInt<BITS, ORDER>>
where
	BITS:  Width,
	ORDER: Order,
	B2:    Width,
	O2:    Order,
{
	//		eq
	fn eq(&self, other: &FixedInt<B2, O2>) -> bool {
		match self {
			Self::Fixed(v) => v == other,
			Self::Float(v) => other == v,
		}
	}
}

/// Implements comparison of fixed-width results against primitive integers.
macro_rules! number_eq_int {
	($($t:ty),*) => {$(
		//󰭅		PartialEq: Number == $t
		impl<BITS: Width, ORDER: Order> PartialEq<$t> for Number<FixedInt<BITS, ORDER>> {
			//		eq
			fn eq(&self, other: &$t) -> bool {
				match self {
					Self::Fixed(v) => v == other,
					Self::Float(v) => Operand::Float(*v).as_integer() == Some(other.to_i128()),
				}
			}
		}
	)*};
}

number_eq_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, i128, isize);
