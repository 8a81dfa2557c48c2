//! Operators for fixed-width integers.
//!
//! Operators follow two policies. The *soft-cast* operators (`+`, `-`, `*`,
//! `/`) keep the fixed-width type when the right-hand side is integral, and
//! fall back to plain float arithmetic otherwise. The *hard-cast* operators
//! (`%`, `&`, `|`, `^`, `<<`, `>>`, and the floor division methods) require an
//! integral right-hand side and always produce a fixed-width result.

//	This lint check is unnecessary in this module because wrapping is the
//	whole point of the arithmetic here. Every result is masked to the width,
//	and the remaining panics (division by zero, negative shifts) mirror the
//	standard library behaviour.
#![allow(clippy::arithmetic_side_effects, reason = "Needs to emulate wrapping machine integers")]



//		Modules

#[cfg(test)]
#[path = "tests/ops.rs"]
mod tests;



//		Packages

use crate::{
	errors::FixedIntError,
	int::FixedInt,
	operand::{Integral, Number, Operand, PlainInt},
	order::Order,
	width::Width,
};
use core::{
	iter::{Product, Sum},
	ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Not, Rem, RemAssign, Sub, SubAssign},
	ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Shl, ShlAssign, Shr, ShrAssign},
};



//		Implementations

//󰭅		FixedInt
impl<BITS: Width, ORDER: Order> FixedInt<BITS, ORDER> {
	//		Public methods

	//		bitand_with
	/// Bitwise AND with an integral operand of any kind.
	///
	/// Negative operands take part in two's complement, so e.g. `x & -1` is
	/// `x`.
	///
	/// # Errors
	///
	/// Returns [`FixedIntError::TypeMismatch`] if the operand is not integral.
	///
	pub fn bitand_with(self, rhs: impl Into<Operand>) -> Result<Self, FixedIntError> {
		Ok(self.and_int(Self::integral(rhs.into())?.residue()))
	}

	//		bitor_with
	/// Bitwise OR with an integral operand of any kind.
	///
	/// # Errors
	///
	/// Returns [`FixedIntError::TypeMismatch`] if the operand is not integral.
	///
	pub fn bitor_with(self, rhs: impl Into<Operand>) -> Result<Self, FixedIntError> {
		Ok(self.or_int(Self::integral(rhs.into())?.residue()))
	}

	//		bitxor_with
	/// Bitwise XOR with an integral operand of any kind.
	///
	/// # Errors
	///
	/// Returns [`FixedIntError::TypeMismatch`] if the operand is not integral.
	///
	pub fn bitxor_with(self, rhs: impl Into<Operand>) -> Result<Self, FixedIntError> {
		Ok(self.xor_int(Self::integral(rhs.into())?.residue()))
	}

	//		div_mod
	/// Floor division and remainder in one step.
	///
	/// This is the same as `(self.floor_div(rhs)?, self.rem_floor(rhs)?)`.
	///
	/// # Errors
	///
	/// Returns [`FixedIntError::TypeMismatch`] if the operand is not integral.
	///
	/// # Panics
	///
	/// Panics if the operand is zero.
	///
	pub fn div_mod(self, rhs: impl Into<Operand>) -> Result<(Self, Self), FixedIntError> {
		let (quotient, remainder) = self.div_mod_int(Self::integral(rhs.into())?.saturated());
		Ok((Self::wrapping(quotient), Self::wrapping(remainder)))
	}

	//		floor_div
	/// Floor division by an integral operand of any kind.
	///
	/// The quotient rounds towards negative infinity before being wrapped, so
	/// e.g. `UInt8(7).floor_div(-2)` is `-4`, which wraps to 252.
	///
	/// # Errors
	///
	/// Returns [`FixedIntError::TypeMismatch`] if the operand is not integral,
	/// e.g. `1.5`. Integral floats such as `5.0` are accepted.
	///
	/// # Panics
	///
	/// Panics if the operand is zero.
	///
	pub fn floor_div(self, rhs: impl Into<Operand>) -> Result<Self, FixedIntError> {
		Ok(Self::wrapping(self.div_mod_int(Self::integral(rhs.into())?.saturated()).0))
	}

	//		rem_floor
	/// Remainder of floor division by an integral operand of any kind.
	///
	/// The remainder takes the sign of the divisor before being wrapped, so
	/// e.g. `UInt8(7).rem_floor(-2)` is `-1`, which wraps to 255.
	///
	/// # Errors
	///
	/// Returns [`FixedIntError::TypeMismatch`] if the operand is not integral.
	///
	/// # Panics
	///
	/// Panics if the operand is zero.
	///
	pub fn rem_floor(self, rhs: impl Into<Operand>) -> Result<Self, FixedIntError> {
		Ok(self.rem_int(Self::integral(rhs.into())?.saturated()))
	}

	//		shl_by
	/// Shifts left by an integral amount of any kind.
	///
	/// Bits shifted beyond the width are lost, so shifting by the width or
	/// more gives zero.
	///
	/// # Errors
	///
	/// Returns [`FixedIntError::TypeMismatch`] if the amount is not integral.
	///
	/// # Panics
	///
	/// Panics if the amount is negative.
	///
	pub fn shl_by(self, rhs: impl Into<Operand>) -> Result<Self, FixedIntError> {
		Ok(self.shl_int(Self::integral(rhs.into())?.saturated()))
	}

	//		shr_by
	/// Logical shift right by an integral amount of any kind.
	///
	/// Shifting by the width or more gives zero. See
	/// [`sar()`](FixedInt::sar()) for the sign-extending variant.
	///
	/// # Errors
	///
	/// Returns [`FixedIntError::TypeMismatch`] if the amount is not integral.
	///
	/// # Panics
	///
	/// Panics if the amount is negative.
	///
	pub fn shr_by(self, rhs: impl Into<Operand>) -> Result<Self, FixedIntError> {
		Ok(self.shr_int(Self::integral(rhs.into())?.saturated()))
	}

	//		soft_add
	/// Adds an operand of any kind.
	///
	/// An integral operand gives a wrapped fixed-width result, and a
	/// fractional one gives a plain float.
	///
	#[must_use]
	pub fn soft_add(self, rhs: impl Into<Operand>) -> Number<Self> {
		self.soft(rhs.into(), |a, b| Number::Fixed(a.add_int(b.residue())), |a, b| a + b)
	}

	//		soft_mul
	/// Multiplies by an operand of any kind.
	///
	/// An integral operand gives a wrapped fixed-width result, and a
	/// fractional one gives a plain float.
	///
	#[must_use]
	pub fn soft_mul(self, rhs: impl Into<Operand>) -> Number<Self> {
		self.soft(rhs.into(), |a, b| Number::Fixed(a.mul_int(b.residue())), |a, b| a * b)
	}

	//		soft_sub
	/// Subtracts an operand of any kind.
	///
	/// An integral operand gives a wrapped fixed-width result, and a
	/// fractional one gives a plain float.
	///
	#[must_use]
	pub fn soft_sub(self, rhs: impl Into<Operand>) -> Number<Self> {
		self.soft(rhs.into(), |a, b| Number::Fixed(a.sub_int(b.residue())), |a, b| a - b)
	}

	//		true_div
	/// Divides by an operand of any kind, without flooring.
	///
	/// The result is fixed-width only when the operand is integral and the
	/// quotient is exact, e.g. `42 / 2`. Otherwise it is a plain float, e.g.
	/// `42 / 4` is `10.5`. An inexact quotient of two integers is rounded once,
	/// to the nearest float.
	///
	/// # Panics
	///
	/// Panics if the operand is zero.
	///
	#[must_use]
	pub fn true_div(self, rhs: impl Into<Operand>) -> Number<Self> {
		let rhs = rhs.into();
		self.soft(rhs, |a, b| match b {
			Integral::Exact(v)                     => a.true_div_int(v),
			Integral::Beyond { .. } if a.is_zero() => Number::Fixed(Self::ZERO),
			Integral::Beyond { .. }                => Number::Float(a.to_f64() / rhs.to_f64()),
		}, |a, b| a / b)
	}

	//		Private methods

	//		add_int
	/// Wrapping addition of a plain integer.
	fn add_int(self, rhs: i128) -> Self {
		Self::wrapping(self.as_i128().wrapping_add(rhs))
	}

	//		and_int
	/// Bitwise AND with a plain integer.
	fn and_int(self, rhs: i128) -> Self {
		Self::wrapping(self.as_i128() & rhs)
	}

	//		div_mod_int
	/// Floored quotient and remainder by a plain integer, before wrapping.
	fn div_mod_int(self, rhs: i128) -> (i128, i128) {
		assert!(rhs != 0, "Attempt to divide by zero");
		//	The dividend is never negative, so this cannot overflow
		let lhs       = self.as_i128();
		let quotient  = lhs / rhs;
		let remainder = lhs % rhs;
		if remainder != 0 && (remainder < 0) != (rhs < 0) {
			(quotient - 1, remainder + rhs)
		} else {
			(quotient, remainder)
		}
	}

	//		integral
	/// Extracts the integral value of an operand for a hard-cast operation.
	fn integral(operand: Operand) -> Result<Integral, FixedIntError> {
		operand.integral().ok_or_else(FixedIntError::integer_required)
	}

	//		mul_int
	/// Wrapping multiplication by a plain integer.
	fn mul_int(self, rhs: i128) -> Self {
		Self::wrapping(self.as_i128().wrapping_mul(rhs))
	}

	//		or_int
	/// Bitwise OR with a plain integer.
	fn or_int(self, rhs: i128) -> Self {
		Self::wrapping(self.as_i128() | rhs)
	}

	//		rem_int
	/// Floored remainder by a plain integer.
	fn rem_int(self, rhs: i128) -> Self {
		Self::wrapping(self.div_mod_int(rhs).1)
	}

	//		shl_int
	/// Left shift by a plain integer.
	#[expect(clippy::cast_sign_loss, clippy::cast_possible_truncation, reason = "Range checked beforehand")]
	fn shl_int(self, rhs: i128) -> Self {
		assert!(rhs >= 0, "Attempt to shift by a negative amount");
		if rhs >= 64 {
			return Self::ZERO;
		}
		Self::from_raw(self.as_u64() << rhs as u32)
	}

	//		shr_int
	/// Logical right shift by a plain integer.
	#[expect(clippy::cast_sign_loss, clippy::cast_possible_truncation, reason = "Range checked beforehand")]
	fn shr_int(self, rhs: i128) -> Self {
		assert!(rhs >= 0, "Attempt to shift by a negative amount");
		if rhs >= 64 {
			return Self::ZERO;
		}
		Self::from_raw(self.as_u64() >> rhs as u32)
	}

	//		soft
	/// Applies a soft-cast operation.
	///
	/// Integral operands go through `int_op`. Anything else goes through
	/// `float_op` on the float value of `self`, and is never re-wrapped.
	///
	fn soft<I, F>(self, rhs: Operand, int_op: I, float_op: F) -> Number<Self>
	where
		I: FnOnce(Self, Integral) -> Number<Self>,
		F: FnOnce(f64, f64) -> f64,
	{
		match rhs.integral() {
			Some(int) => int_op(self, int),
			None      => Number::Float(float_op(self.to_f64(), rhs.to_f64())),
		}
	}

	//		sub_int
	/// Wrapping subtraction of a plain integer.
	fn sub_int(self, rhs: i128) -> Self {
		Self::wrapping(self.as_i128().wrapping_sub(rhs))
	}

	//		true_div_int
	/// True division by a plain integer, staying fixed-width when exact.
	fn true_div_int(self, rhs: i128) -> Number<Self> {
		assert!(rhs != 0, "Attempt to divide by zero");
		let lhs = self.as_i128();
		if lhs % rhs == 0 {
			return Number::Fixed(Self::wrapping(lhs / rhs));
		}
		let quotient = ratio_to_f64(lhs.unsigned_abs(), rhs.unsigned_abs());
		Number::Float(if rhs < 0 { -quotient } else { quotient })
	}

	//		xor_int
	/// Bitwise XOR with a plain integer.
	fn xor_int(self, rhs: i128) -> Self {
		Self::wrapping(self.as_i128() ^ rhs)
	}
}

//󰭅		Add: FixedInt + FixedInt
impl<BITS, ORDER, B2, O2> Add<FixedInt<B2, O2>> for FixedInt<BITS, ORDER>
where
	BITS:  Width,
	ORDER: Order,
	B2:    Width,
	O2:    Order,
{
	type Output = Self;

	//		add
	fn add(self, rhs: FixedInt<B2, O2>) -> Self::Output {
		self.add_int(rhs.as_i128())
	}
}

//󰭅		AddAssign: FixedInt += FixedInt
impl<BITS, ORDER, B2, O2> AddAssign<FixedInt<B2, O2>> for FixedInt<BITS, ORDER>
where
	BITS:  Width,
	ORDER: Order,
	B2:    Width,
	O2:    Order,
{
	//		add_assign
	fn add_assign(&mut self, rhs: FixedInt<B2, O2>) {
		*self = *self + rhs;
	}
}

//󰭅		BitAnd: FixedInt & FixedInt
impl<BITS, ORDER, B2, O2> BitAnd<FixedInt<B2, O2>> for FixedInt<BITS, ORDER>
where
	BITS:  Width,
	ORDER: Order,
	B2:    Width,
	O2:    Order,
{
	type Output = Self;

	//		bitand
	fn bitand(self, rhs: FixedInt<B2, O2>) -> Self::Output {
		Self::from_raw(self.as_u64() & rhs.as_u64())
	}
}

//󰭅		BitAndAssign: FixedInt &= FixedInt
impl<BITS, ORDER, B2, O2> BitAndAssign<FixedInt<B2, O2>> for FixedInt<BITS, ORDER>
where
	BITS:  Width,
	ORDER: Order,
	B2:    Width,
	O2:    Order,
{
	//		bitand_assign
	fn bitand_assign(&mut self, rhs: FixedInt<B2, O2>) {
		*self = *self & rhs;
	}
}

//󰭅		BitOr: FixedInt | FixedInt
impl<BITS, ORDER, B2, O2> BitOr<FixedInt<B2, O2>> for FixedInt<BITS, ORDER>
where
	BITS:  Width,
	ORDER: Order,
	B2:    Width,
	O2:    Order,
{
	type Output = Self;

	//		bitor
	fn bitor(self, rhs: FixedInt<B2, O2>) -> Self::Output {
		Self::from_raw(self.as_u64() | rhs.as_u64())
	}
}

//󰭅		BitOrAssign: FixedInt |= FixedInt
impl<BITS, ORDER, B2, O2> BitOrAssign<FixedInt<B2, O2>> for FixedInt<BITS, ORDER>
where
	BITS:  Width,
	ORDER: Order,
	B2:    Width,
	O2:    Order,
{
	//		bitor_assign
	fn bitor_assign(&mut self, rhs: FixedInt<B2, O2>) {
		*self = *self | rhs;
	}
}

//󰭅		BitXor: FixedInt ^ FixedInt
impl<BITS, ORDER, B2, O2> BitXor<FixedInt<B2, O2>> for FixedInt<BITS, ORDER>
where
	BITS:  Width,
	ORDER: Order,
	B2:    Width,
	O2:    Order,
{
	type Output = Self;

	//		bitxor
	fn bitxor(self, rhs: FixedInt<B2, O2>) -> Self::Output {
		Self::from_raw(self.as_u64() ^ rhs.as_u64())
	}
}

//󰭅		BitXorAssign: FixedInt ^= FixedInt
impl<BITS, ORDER, B2, O2> BitXorAssign<FixedInt<B2, O2>> for FixedInt<BITS, ORDER>
where
	BITS:  Width,
	ORDER: Order,
	B2:    Width,
	O2:    Order,
{
	//		bitxor_assign
	fn bitxor_assign(&mut self, rhs: FixedInt<B2, O2>) {
		*self = *self ^ rhs;
	}
}

//󰭅		Div: FixedInt / FixedInt
impl<BITS, ORDER, B2, O2> Div<FixedInt<B2, O2>> for FixedInt<BITS, ORDER>
where
	BITS:  Width,
	ORDER: Order,
	B2:    Width,
	O2:    Order,
{
	type Output = Number<Self>;

	//		div
	fn div(self, rhs: FixedInt<B2, O2>) -> Self::Output {
		self.true_div_int(rhs.as_i128())
	}
}

//󰭅		Mul: FixedInt * FixedInt
impl<BITS, ORDER, B2, O2> Mul<FixedInt<B2, O2>> for FixedInt<BITS, ORDER>
where
	BITS:  Width,
	ORDER: Order,
	B2:    Width,
	O2:    Order,
{
	type Output = Self;

	//		mul
	fn mul(self, rhs: FixedInt<B2, O2>) -> Self::Output {
		self.mul_int(rhs.as_i128())
	}
}

//󰭅		MulAssign: FixedInt *= FixedInt
impl<BITS, ORDER, B2, O2> MulAssign<FixedInt<B2, O2>> for FixedInt<BITS, ORDER>
where
	BITS:  Width,
	ORDER: Order,
	B2:    Width,
	O2:    Order,
{
	//		mul_assign
	fn mul_assign(&mut self, rhs: FixedInt<B2, O2>) {
		*self = *self * rhs;
	}
}

//󰭅		Neg
impl<BITS: Width, ORDER: Order> Neg for FixedInt<BITS, ORDER> {
	type Output = Self;

	//		neg
	fn neg(self) -> Self::Output {
		Self::wrapping(-self.as_i128())
	}
}

//󰭅		Not
impl<BITS: Width, ORDER: Order> Not for FixedInt<BITS, ORDER> {
	type Output = Self;

	//		not
	fn not(self) -> Self::Output {
		Self::from_raw(!self.as_u64())
	}
}

//󰭅		Product
impl<BITS: Width, ORDER: Order> Product for FixedInt<BITS, ORDER> {
	//		product
	fn product<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self::ONE, |acc, x| acc * x)
	}
}

//󰭅		Product<&>
impl<'a, BITS: Width, ORDER: Order> Product<&'a Self> for FixedInt<BITS, ORDER> {
	//		product
	fn product<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.fold(Self::ONE, |acc, &x| acc * x)
	}
}

//󰭅		Rem: FixedInt % FixedInt
impl<BITS, ORDER, B2, O2> Rem<FixedInt<B2, O2>> for FixedInt<BITS, ORDER>
where
	BITS:  Width,
	ORDER: Order,
	B2:    Width,
	O2:    Order,
{
	type Output = Self;

	//		rem
	fn rem(self, rhs: FixedInt<B2, O2>) -> Self::Output {
		self.rem_int(rhs.as_i128())
	}
}

//󰭅		RemAssign: FixedInt %= FixedInt
impl<BITS, ORDER, B2, O2> RemAssign<FixedInt<B2, O2>> for FixedInt<BITS, ORDER>
where
	BITS:  Width,
	ORDER: Order,
	B2:    Width,
	O2:    Order,
{
	//		rem_assign
	fn rem_assign(&mut self, rhs: FixedInt<B2, O2>) {
		*self = *self % rhs;
	}
}

//󰭅		Shl: FixedInt << FixedInt
impl<BITS, ORDER, B2, O2> Shl<FixedInt<B2, O2>> for FixedInt<BITS, ORDER>
where
	BITS:  Width,
	ORDER: Order,
	B2:    Width,
	O2:    Order,
{
	type Output = Self;

	//		shl
	fn shl(self, rhs: FixedInt<B2, O2>) -> Self::Output {
		self.shl_int(rhs.as_i128())
	}
}

//󰭅		ShlAssign: FixedInt <<= FixedInt
impl<BITS, ORDER, B2, O2> ShlAssign<FixedInt<B2, O2>> for FixedInt<BITS, ORDER>
where
	BITS:  Width,
	ORDER: Order,
	B2:    Width,
	O2:    Order,
{
	//		shl_assign
	fn shl_assign(&mut self, rhs: FixedInt<B2, O2>) {
		*self = *self << rhs;
	}
}

//󰭅		Shr: FixedInt >> FixedInt
impl<BITS, ORDER, B2, O2> Shr<FixedInt<B2, O2>> for FixedInt<BITS, ORDER>
where
	BITS:  Width,
	ORDER: Order,
	B2:    Width,
	O2:    Order,
{
	type Output = Self;

	//		shr
	fn shr(self, rhs: FixedInt<B2, O2>) -> Self::Output {
		self.shr_int(rhs.as_i128())
	}
}

//󰭅		ShrAssign: FixedInt >>= FixedInt
impl<BITS, ORDER, B2, O2> ShrAssign<FixedInt<B2, O2>> for FixedInt<BITS, ORDER>
where
	BITS:  Width,
	ORDER: Order,
	B2:    Width,
	O2:    Order,
{
	//		shr_assign
	fn shr_assign(&mut self, rhs: FixedInt<B2, O2>) {
		*self = *self >> rhs;
	}
}

//󰭅		Sub: FixedInt - FixedInt
impl<BITS, ORDER, B2, O2> Sub<FixedInt<B2, O2>> for FixedInt<BITS, ORDER>
where
	BITS:  Width,
	ORDER: Order,
	B2:    Width,
	O2:    Order,
{
	type Output = Self;

	//		sub
	fn sub(self, rhs: FixedInt<B2, O2>) -> Self::Output {
		self.sub_int(rhs.as_i128())
	}
}

//󰭅		SubAssign: FixedInt -= FixedInt
impl<BITS, ORDER, B2, O2> SubAssign<FixedInt<B2, O2>> for FixedInt<BITS, ORDER>
where
	BITS:  Width,
	ORDER: Order,
	B2:    Width,
	O2:    Order,
{
	//		sub_assign
	fn sub_assign(&mut self, rhs: FixedInt<B2, O2>) {
		*self = *self - rhs;
	}
}

//󰭅		Sum
impl<BITS: Width, ORDER: Order> Sum for FixedInt<BITS, ORDER> {
	//		sum
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self::ZERO, |acc, x| acc + x)
	}
}

//󰭅		Sum<&>
impl<'a, BITS: Width, ORDER: Order> Sum<&'a Self> for FixedInt<BITS, ORDER> {
	//		sum
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.fold(Self::ZERO, |acc, &x| acc + x)
	}
}

/// Implements the operators between fixed-width integers and primitive
/// integers.
///
/// With the fixed-width integer on the left, the result keeps its type. With
/// the primitive on the left, the result is a plain [`i128`] that does not
/// wrap, or an [`f64`] for true division.
///
macro_rules! int_ops {
	($($t:ty),*) => {$(
		//󰭅		Add: FixedInt + $t
		impl<BITS: Width, ORDER: Order> Add<$t> for FixedInt<BITS, ORDER> {
			type Output = Self;

			//		add
			fn add(self, rhs: $t) -> Self::Output {
				self.add_int(rhs.to_i128())
			}
		}

		//󰭅		AddAssign: FixedInt += $t
		impl<BITS: Width, ORDER: Order> AddAssign<$t> for FixedInt<BITS, ORDER> {
			//		add_assign
			fn add_assign(&mut self, rhs: $t) {
				*self = self.add_int(rhs.to_i128());
			}
		}

		//󰭅		BitAnd: FixedInt & $t
		impl<BITS: Width, ORDER: Order> BitAnd<$t> for FixedInt<BITS, ORDER> {
			type Output = Self;

			//		bitand
			fn bitand(self, rhs: $t) -> Self::Output {
				self.and_int(rhs.to_i128())
			}
		}

		//󰭅		BitAndAssign: FixedInt &= $t
		impl<BITS: Width, ORDER: Order> BitAndAssign<$t> for FixedInt<BITS, ORDER> {
			//		bitand_assign
			fn bitand_assign(&mut self, rhs: $t) {
				*self = self.and_int(rhs.to_i128());
			}
		}

		//󰭅		BitOr: FixedInt | $t
		impl<BITS: Width, ORDER: Order> BitOr<$t> for FixedInt<BITS, ORDER> {
			type Output = Self;

			//		bitor
			fn bitor(self, rhs: $t) -> Self::Output {
				self.or_int(rhs.to_i128())
			}
		}

		//󰭅		BitOrAssign: FixedInt |= $t
		impl<BITS: Width, ORDER: Order> BitOrAssign<$t> for FixedInt<BITS, ORDER> {
			//		bitor_assign
			fn bitor_assign(&mut self, rhs: $t) {
				*self = self.or_int(rhs.to_i128());
			}
		}

		//󰭅		BitXor: FixedInt ^ $t
		impl<BITS: Width, ORDER: Order> BitXor<$t> for FixedInt<BITS, ORDER> {
			type Output = Self;

			//		bitxor
			fn bitxor(self, rhs: $t) -> Self::Output {
				self.xor_int(rhs.to_i128())
			}
		}

		//󰭅		BitXorAssign: FixedInt ^= $t
		impl<BITS: Width, ORDER: Order> BitXorAssign<$t> for FixedInt<BITS, ORDER> {
			//		bitxor_assign
			fn bitxor_assign(&mut self, rhs: $t) {
				*self = self.xor_int(rhs.to_i128());
			}
		}

		//󰭅		Div: FixedInt / $t
		impl<BITS: Width, ORDER: Order> Div<$t> for FixedInt<BITS, ORDER> {
			type Output = Number<Self>;

			//		div
			fn div(self, rhs: $t) -> Self::Output {
				self.true_div_int(rhs.to_i128())
			}
		}

		//󰭅		Mul: FixedInt * $t
		impl<BITS: Width, ORDER: Order> Mul<$t> for FixedInt<BITS, ORDER> {
			type Output = Self;

			//		mul
			fn mul(self, rhs: $t) -> Self::Output {
				self.mul_int(rhs.to_i128())
			}
		}

		//󰭅		MulAssign: FixedInt *= $t
		impl<BITS: Width, ORDER: Order> MulAssign<$t> for FixedInt<BITS, ORDER> {
			//		mul_assign
			fn mul_assign(&mut self, rhs: $t) {
				*self = self.mul_int(rhs.to_i128());
			}
		}

		//󰭅		Rem: FixedInt % $t
		impl<BITS: Width, ORDER: Order> Rem<$t> for FixedInt<BITS, ORDER> {
			type Output = Self;

			//		rem
			fn rem(self, rhs: $t) -> Self::Output {
				self.rem_int(rhs.to_i128())
			}
		}

		//󰭅		RemAssign: FixedInt %= $t
		impl<BITS: Width, ORDER: Order> RemAssign<$t> for FixedInt<BITS, ORDER> {
			//		rem_assign
			fn rem_assign(&mut self, rhs: $t) {
				*self = self.rem_int(rhs.to_i128());
			}
		}

		//󰭅		Shl: FixedInt << $t
		impl<BITS: Width, ORDER: Order> Shl<$t> for FixedInt<BITS, ORDER> {
			type Output = Self;

			//		shl
			fn shl(self, rhs: $t) -> Self::Output {
				self.shl_int(rhs.to_i128())
			}
		}

		//󰭅		ShlAssign: FixedInt <<= $t
		impl<BITS: Width, ORDER: Order> ShlAssign<$t> for FixedInt<BITS, ORDER> {
			//		shl_assign
			fn shl_assign(&mut self, rhs: $t) {
				*self = self.shl_int(rhs.to_i128());
			}
		}

		//󰭅		Shr: FixedInt >> $t
		impl<BITS: Width, ORDER: Order> Shr<$t> for FixedInt<BITS, ORDER> {
			type Output = Self;

			//		shr
			fn shr(self, rhs: $t) -> Self::Output {
				self.shr_int(rhs.to_i128())
			}
		}

		//󰭅		ShrAssign: FixedInt >>= $t
		impl<BITS: Width, ORDER: Order> ShrAssign<$t> for FixedInt<BITS, ORDER> {
			//		shr_assign
			fn shr_assign(&mut self, rhs: $t) {
				*self = self.shr_int(rhs.to_i128());
			}
		}

		//󰭅		Sub: FixedInt - $t
		impl<BITS: Width, ORDER: Order> Sub<$t> for FixedInt<BITS, ORDER> {
			type Output = Self;

			//		sub
			fn sub(self, rhs: $t) -> Self::Output {
				self.sub_int(rhs.to_i128())
			}
		}

		//󰭅		SubAssign: FixedInt -= $t
		impl<BITS: Width, ORDER: Order> SubAssign<$t> for FixedInt<BITS, ORDER> {
			//		sub_assign
			fn sub_assign(&mut self, rhs: $t) {
				*self = self.sub_int(rhs.to_i128());
			}
		}

		//󰭅		Add: $t + FixedInt
		impl<BITS: Width, ORDER: Order> Add<FixedInt<BITS, ORDER>> for $t {
			type Output = i128;

			//		add
			#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
			fn add(self, rhs: FixedInt<BITS, ORDER>) -> Self::Output {
				self.to_i128().checked_add(rhs.as_i128()).expect("Attempt to add overflowed")
			}
		}

		//󰭅		BitAnd: $t & FixedInt
		impl<BITS: Width, ORDER: Order> BitAnd<FixedInt<BITS, ORDER>> for $t {
			type Output = i128;

			//		bitand
			fn bitand(self, rhs: FixedInt<BITS, ORDER>) -> Self::Output {
				self.to_i128() & rhs.as_i128()
			}
		}

		//󰭅		BitOr: $t | FixedInt
		impl<BITS: Width, ORDER: Order> BitOr<FixedInt<BITS, ORDER>> for $t {
			type Output = i128;

			//		bitor
			fn bitor(self, rhs: FixedInt<BITS, ORDER>) -> Self::Output {
				self.to_i128() | rhs.as_i128()
			}
		}

		//󰭅		BitXor: $t ^ FixedInt
		impl<BITS: Width, ORDER: Order> BitXor<FixedInt<BITS, ORDER>> for $t {
			type Output = i128;

			//		bitxor
			fn bitxor(self, rhs: FixedInt<BITS, ORDER>) -> Self::Output {
				self.to_i128() ^ rhs.as_i128()
			}
		}

		//󰭅		Div: $t / FixedInt
		impl<BITS: Width, ORDER: Order> Div<FixedInt<BITS, ORDER>> for $t {
			type Output = f64;

			//		div
			fn div(self, rhs: FixedInt<BITS, ORDER>) -> Self::Output {
				assert!(!rhs.is_zero(), "Attempt to divide by zero");
				let lhs      = self.to_i128();
				let quotient = ratio_to_f64(lhs.unsigned_abs(), rhs.as_i128().unsigned_abs());
				if lhs < 0 { -quotient } else { quotient }
			}
		}

		//󰭅		Mul: $t * FixedInt
		impl<BITS: Width, ORDER: Order> Mul<FixedInt<BITS, ORDER>> for $t {
			type Output = i128;

			//		mul
			#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
			fn mul(self, rhs: FixedInt<BITS, ORDER>) -> Self::Output {
				self.to_i128().checked_mul(rhs.as_i128()).expect("Attempt to multiply overflowed")
			}
		}

		//󰭅		Rem: $t % FixedInt
		impl<BITS: Width, ORDER: Order> Rem<FixedInt<BITS, ORDER>> for $t {
			type Output = i128;

			//		rem
			fn rem(self, rhs: FixedInt<BITS, ORDER>) -> Self::Output {
				assert!(!rhs.is_zero(), "Attempt to divide by zero");
				//	The divisor is positive, so floored and Euclidean agree
				self.to_i128().rem_euclid(rhs.as_i128())
			}
		}

		//󰭅		Sub: $t - FixedInt
		impl<BITS: Width, ORDER: Order> Sub<FixedInt<BITS, ORDER>> for $t {
			type Output = i128;

			//		sub
			#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
			fn sub(self, rhs: FixedInt<BITS, ORDER>) -> Self::Output {
				self.to_i128().checked_sub(rhs.as_i128()).expect("Attempt to subtract overflowed")
			}
		}
	)*};
}

int_ops!(u8, u16, u32, u64, usize, i8, i16, i32, i64, i128, isize);

//󰭅		Add: FixedInt + f64
impl<BITS: Width, ORDER: Order> Add<f64> for FixedInt<BITS, ORDER> {
	type Output = Number<Self>;

	//		add
	fn add(self, rhs: f64) -> Self::Output {
		self.soft_add(rhs)
	}
}

//󰭅		BitAnd: FixedInt & f64
impl<BITS: Width, ORDER: Order> BitAnd<f64> for FixedInt<BITS, ORDER> {
	type Output = Result<Self, FixedIntError>;

	//		bitand
	fn bitand(self, rhs: f64) -> Self::Output {
		self.bitand_with(rhs)
	}
}

//󰭅		BitOr: FixedInt | f64
impl<BITS: Width, ORDER: Order> BitOr<f64> for FixedInt<BITS, ORDER> {
	type Output = Result<Self, FixedIntError>;

	//		bitor
	fn bitor(self, rhs: f64) -> Self::Output {
		self.bitor_with(rhs)
	}
}

//󰭅		BitXor: FixedInt ^ f64
impl<BITS: Width, ORDER: Order> BitXor<f64> for FixedInt<BITS, ORDER> {
	type Output = Result<Self, FixedIntError>;

	//		bitxor
	fn bitxor(self, rhs: f64) -> Self::Output {
		self.bitxor_with(rhs)
	}
}

//󰭅		Div: FixedInt / f64
impl<BITS: Width, ORDER: Order> Div<f64> for FixedInt<BITS, ORDER> {
	type Output = Number<Self>;

	//		div
	fn div(self, rhs: f64) -> Self::Output {
		self.true_div(rhs)
	}
}

//󰭅		Mul: FixedInt * f64
impl<BITS: Width, ORDER: Order> Mul<f64> for FixedInt<BITS, ORDER> {
	type Output = Number<Self>;

	//		mul
	fn mul(self, rhs: f64) -> Self::Output {
		self.soft_mul(rhs)
	}
}

//󰭅		Rem: FixedInt % f64
impl<BITS: Width, ORDER: Order> Rem<f64> for FixedInt<BITS, ORDER> {
	type Output = Result<Self, FixedIntError>;

	//		rem
	fn rem(self, rhs: f64) -> Self::Output {
		self.rem_floor(rhs)
	}
}

//󰭅		Shl: FixedInt << f64
impl<BITS: Width, ORDER: Order> Shl<f64> for FixedInt<BITS, ORDER> {
	type Output = Result<Self, FixedIntError>;

	//		shl
	fn shl(self, rhs: f64) -> Self::Output {
		self.shl_by(rhs)
	}
}

//󰭅		Shr: FixedInt >> f64
impl<BITS: Width, ORDER: Order> Shr<f64> for FixedInt<BITS, ORDER> {
	type Output = Result<Self, FixedIntError>;

	//		shr
	fn shr(self, rhs: f64) -> Self::Output {
		self.shr_by(rhs)
	}
}

//󰭅		Sub: FixedInt - f64
impl<BITS: Width, ORDER: Order> Sub<f64> for FixedInt<BITS, ORDER> {
	type Output = Number<Self>;

	//		sub
	fn sub(self, rhs: f64) -> Self::Output {
		self.soft_sub(rhs)
	}
}

//󰭅		Add: f64 + FixedInt
impl<BITS: Width, ORDER: Order> Add<FixedInt<BITS, ORDER>> for f64 {
	type Output = Self;

	//		add
	fn add(self, rhs: FixedInt<BITS, ORDER>) -> Self::Output {
		self + rhs.to_f64()
	}
}

//󰭅		Div: f64 / FixedInt
impl<BITS: Width, ORDER: Order> Div<FixedInt<BITS, ORDER>> for f64 {
	type Output = Self;

	//		div
	fn div(self, rhs: FixedInt<BITS, ORDER>) -> Self::Output {
		assert!(!rhs.is_zero(), "Attempt to divide by zero");
		self / rhs.to_f64()
	}
}

//󰭅		Mul: f64 * FixedInt
impl<BITS: Width, ORDER: Order> Mul<FixedInt<BITS, ORDER>> for f64 {
	type Output = Self;

	//		mul
	fn mul(self, rhs: FixedInt<BITS, ORDER>) -> Self::Output {
		self * rhs.to_f64()
	}
}

//󰭅		Sub: f64 - FixedInt
impl<BITS: Width, ORDER: Order> Sub<FixedInt<BITS, ORDER>> for f64 {
	type Output = Self;

	//		sub
	fn sub(self, rhs: FixedInt<BITS, ORDER>) -> Self::Output {
		self - rhs.to_f64()
	}
}



//		Functions

//		ratio_to_f64
/// Divides two unsigned integers, rounding the quotient once to the nearest
/// float.
///
/// The quotient is developed bit by bit until it has at least 55 significant
/// bits, and any remainder is folded into the lowest bit, so that the final
/// conversion rounds correctly.
///
#[expect(clippy::cast_precision_loss, reason = "The final rounding is the intent")]
fn ratio_to_f64(numerator: u128, denominator: u128) -> f64 {
	if numerator == 0 {
		return 0.0;
	}
	let mut quotient  = numerator / denominator;
	let mut remainder = numerator % denominator;
	let mut scale     = 0_i32;
	while quotient < 1 << 54_u32 {
		quotient  <<= 1_u32;
		remainder <<= 1_u32;
		if remainder >= denominator {
			quotient  |= 1;
			remainder -= denominator;
		}
		scale += 1;
	}
	(quotient | u128::from(remainder != 0)) as f64 * 2.0_f64.powi(-scale)
}
