//! Fixed-width unsigned integer type.

//	Every result is masked to the width, so wrapping is the intended behaviour
//	of the arithmetic here rather than something to guard against.
#![allow(clippy::arithmetic_side_effects, reason = "Wrapping is the intended behaviour")]



//		Modules

#[cfg(test)]
#[path = "tests/int.rs"]
mod tests;



//		Packages

use crate::{
	errors::FixedIntError,
	operand::{Integral, Number, Operand, PlainInt},
	order::{BigEndian, Endian, LittleEndian, Order},
	width::Width,
};
use bytes::{Bytes, BytesMut};
use core::{
	cmp::Ordering,
	error::Error,
	fmt::{Binary, Debug, Display, Formatter, LowerHex, Octal, UpperHex, self},
	hash::{Hash, Hasher},
	marker::PhantomData,
};
use generic_array::GenericArray;
use serde::{
	Deserialize,
	Deserializer,
	Serialize,
	Serializer,
	de::{Error as SerdeError, SeqAccess, Visitor},
};
use serde_json::{Error as JsonError, Value as JsonValue};
use std::io::{Error as IoError, ErrorKind as IoErrorKind};
use tokio_postgres::types::{FromSql, IsNull, ToSql, Type, to_sql_checked};
use typenum::{U8, U16, U32, U64, Unsigned};



//		Type aliases

/// An 8-bit little-endian fixed-width integer.
pub type UInt8  = FixedInt<U8,  LittleEndian>;

/// A 16-bit little-endian fixed-width integer.
pub type UInt16 = FixedInt<U16, LittleEndian>;

/// A 32-bit little-endian fixed-width integer.
pub type UInt32 = FixedInt<U32, LittleEndian>;

/// A 64-bit little-endian fixed-width integer.
pub type UInt64 = FixedInt<U64, LittleEndian>;

/// An 8-bit big-endian fixed-width integer.
#[expect(non_camel_case_types, reason = "Needed to fit with convention")]
pub type UInt8_be  = FixedInt<U8,  BigEndian>;

/// A 16-bit big-endian fixed-width integer.
#[expect(non_camel_case_types, reason = "Needed to fit with convention")]
pub type UInt16_be = FixedInt<U16, BigEndian>;

/// A 32-bit big-endian fixed-width integer.
#[expect(non_camel_case_types, reason = "Needed to fit with convention")]
pub type UInt32_be = FixedInt<U32, BigEndian>;

/// A 64-bit big-endian fixed-width integer.
#[expect(non_camel_case_types, reason = "Needed to fit with convention")]
pub type UInt64_be = FixedInt<U64, BigEndian>;



//		Structs

//		FixedInt
/// A fixed-width unsigned integer that behaves like a machine integer.
///
/// The value is always held modulo `2^BITS`. Every construction path and
/// every operation masks its result, so overflow and underflow wrap silently
/// and no operation ever fails because of the size of a result.
///
/// # Type parameters
///
/// * `BITS`  - The bit width, as a [`typenum`] number: `U8`, `U16`, `U32`, or
///             `U64`.
/// * `ORDER` - The byte order used when packing and unpacking bytes:
///             [`LittleEndian`] (the default) or [`BigEndian`].
///
/// The aliases [`UInt8`], [`UInt16`], [`UInt32`], [`UInt64`], and their
/// `_be` counterparts cover every combination.
///
/// # Arithmetic
///
/// Operators take a fixed-width integer on the left, and on the right any
/// primitive integer, any float, or any other fixed-width integer. Two
/// policies apply:
///
///   1. Addition, subtraction, multiplication, and true division are
///      *soft-cast*. An integral right-hand side gives a wrapped result of
///      the same type; a fractional one gives a plain float, wrapped in a
///      [`Number`]. True division (`/`) only stays fixed-width when the
///      quotient is exact.
///   2. Remainder, floor division, shifts, and bitwise operations are
///      *hard-cast*. The right-hand side must be integral; a fractional float
///      gives [`FixedIntError::TypeMismatch`].
///
/// When a plain integer is on the left and a fixed-width integer is on the
/// right, the result is a plain [`i128`] computed without wrapping. Only the
/// left-hand operand decides whether the type is kept.
///
/// Division by zero and shifting by a negative amount panic, as they do for
/// the primitive integers. The plain [`i128`] results of `+`, `-`, and `*`
/// with a plain integer on the left panic if they overflow an [`i128`].
///
/// # Representation
///
/// The value is stored in a [`u64`] regardless of width. The byte order only
/// matters at the boundary: [`from_bytes()`](FixedInt::from_bytes()),
/// [`to_bytes()`](FixedInt::to_bytes()), [`pack()`](FixedInt::pack()), and
/// the binary serialisation formats.
///
/// Two fixed-width integers compare equal when their numeric values are
/// equal, whatever their widths or byte orders.
///
pub struct FixedInt<BITS: Width, ORDER: Order = LittleEndian>(u64, PhantomData<fn() -> (BITS, ORDER)>);

//󰭅		FixedInt
impl<BITS: Width, ORDER: Order> FixedInt<BITS, ORDER> {
	//		Public constants
	/// Number of bits in the value.
	pub const BITS:  u32   = BITS::U32;

	/// Number of bytes in the packed value.
	pub const BYTES: usize = <BITS::Bytes as Unsigned>::USIZE;

	/// All valid bits set, i.e. `2^BITS - 1`.
	pub const MASK:  u64   = u64::MAX >> (64 - BITS::U32);

	/// The smallest value, zero.
	pub const MIN:   Self  = Self(0, PhantomData);

	/// The largest value, equal to [`Self::MASK`].
	pub const MAX:   Self  = Self(Self::MASK, PhantomData);

	/// The value `0`.
	pub const ZERO:  Self  = Self(0, PhantomData);

	/// The value `1`.
	pub const ONE:   Self  = Self(1, PhantomData);

	//		Constructors

	//		new
	/// Creates a new fixed-width integer from an integer, float, or other
	/// fixed-width integer.
	///
	/// Integral values are reduced modulo `2^BITS`, so e.g. `UInt8::new(256)`
	/// is zero and `UInt8::new(-1)` is 255. A fixed-width integer of another
	/// width is narrowed or widened in the same way.
	///
	/// # Parameters
	///
	/// * `value` - The value to create the integer from.
	///
	/// # Errors
	///
	/// Returns [`FixedIntError::TypeMismatch`] if the value is a float that is
	/// not integral.
	///
	pub fn new(value: impl Into<Operand>) -> Result<Self, FixedIntError> {
		let operand = value.into();
		operand.integral()
			.map(|v| Self::wrapping(v.residue()))
			.ok_or_else(|| Self::type_mismatch(operand))
	}

	//		cast
	/// Casts a value into this type.
	///
	/// This is the same as [`new()`](FixedInt::new()), and exists so that
	/// conversions read naturally at the call site, e.g.
	/// `UInt32::cast(small)`.
	///
	/// # Errors
	///
	/// As for [`new()`](FixedInt::new()).
	///
	pub fn cast(value: impl Into<Operand>) -> Result<Self, FixedIntError> {
		Self::new(value)
	}

	//		from_ascii
	/// Creates a fixed-width integer from the bytes of an ASCII string.
	///
	/// The bytes are read in the type's byte order, so for a little-endian
	/// type `"AB"` is `0x4241`.
	///
	/// # Errors
	///
	/// Returns [`FixedIntError::TypeMismatch`] if the string contains
	/// non-ASCII characters.
	///
	pub fn from_ascii(s: &str) -> Result<Self, FixedIntError> {
		if !s.is_ascii() {
			return Err(Self::type_mismatch(format!("Non-ASCII string {s:?}")));
		}
		Ok(Self::from_bytes(s.as_bytes()))
	}

	//		from_bytes
	/// Creates a fixed-width integer from bytes in the type's byte order.
	///
	/// The bytes are read as one integer of arbitrary length, which is then
	/// masked to the width. Only [`Self::BYTES`] bytes are meaningful; for
	/// longer input a little-endian type keeps the leading bytes and a
	/// big-endian type keeps the trailing bytes. Empty input is zero.
	///
	/// # Parameters
	///
	/// * `bytes` - The bytes to read.
	///
	#[must_use]
	pub fn from_bytes(bytes: &[u8]) -> Self {
		Self::from_raw(ORDER::ENDIAN.read_wrapping(bytes))
	}

	//		from_float
	/// Creates a fixed-width integer holding the IEEE-754 bit pattern of a
	/// float of the same width.
	///
	/// This is the inverse of [`as_float()`](FixedInt::as_float()).
	///
	/// # Errors
	///
	/// Returns [`FixedIntError::UnsupportedOperation`] for widths without a
	/// float format (i.e. 8-bit), and [`FixedIntError::ValueTooLarge`] if a
	/// finite value overflows the float format.
	///
	pub fn from_float(value: f64) -> Result<Self, FixedIntError> {
		let format = BITS::FLOAT.ok_or_else(|| FixedIntError::no_float_for(Self::BYTES))?;
		Ok(Self::from_raw(format.encode(value)?))
	}

	//		from_json
	/// Deserialises a JSON string into this integer type.
	///
	/// # Errors
	///
	/// If the JSON is invalid, or holds a value that cannot be converted, an
	/// error will be returned.
	///
	pub fn from_json(json: &str) -> Result<Self, JsonError> {
		serde_json::from_str(json)
	}

	//		from_raw
	/// Creates a fixed-width integer from a raw value, masking it to the
	/// width.
	#[must_use]
	pub const fn from_raw(value: u64) -> Self {
		Self(value & Self::MASK, PhantomData)
	}

	//		wrapping
	/// Creates a fixed-width integer from any integer, reducing it modulo
	/// `2^BITS`.
	///
	/// Negative values wrap in two's complement, e.g. `-3` becomes
	/// `2^BITS - 3`.
	///
	#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss, reason = "Truncation is the intent")]
	#[must_use]
	pub const fn wrapping(value: i128) -> Self {
		Self::from_raw(value as u64)
	}

	//		Public methods

	//		as_float
	/// Reinterprets the bit pattern as an IEEE-754 float of the same width:
	/// half precision for 16 bits, single for 32, and double for 64.
	///
	/// # Errors
	///
	/// Returns [`FixedIntError::UnsupportedOperation`] for widths without a
	/// float format, i.e. 8-bit.
	///
	pub fn as_float(&self) -> Result<f64, FixedIntError> {
		BITS::FLOAT
			.map(|format| format.decode(self.0))
			.ok_or_else(|| FixedIntError::no_float_for(Self::BYTES))
	}

	//		as_i128
	/// Represents the value as a plain signed 128-bit integer.
	#[must_use]
	pub fn as_i128(&self) -> i128 {
		i128::from(self.0)
	}

	//		as_signed
	/// Interprets the value as a two's-complement signed integer of the same
	/// width, e.g. 255 as an 8-bit value is `-1`.
	#[expect(clippy::cast_possible_wrap, reason = "Sign reinterpretation is the intent")]
	#[must_use]
	pub const fn as_signed(&self) -> i64 {
		let shift = 64 - Self::BITS;
		((self.0 << shift) as i64) >> shift
	}

	//		as_u64
	/// Represents the value as an unsigned 64-bit integer.
	#[must_use]
	pub const fn as_u64(&self) -> u64 {
		self.0
	}

	//		bit
	/// Gets the value of a specific bit, where `0` is the least-significant
	/// bit.
	///
	/// Returns `false` if the position is out of range.
	///
	#[must_use]
	pub const fn bit(&self, pos: u32) -> bool {
		pos < Self::BITS && (self.0 >> pos) & 1 == 1
	}

	//		cast_to
	/// Converts the value into another fixed-width type, masking it to the
	/// new width.
	#[must_use]
	pub const fn cast_to<B2: Width, O2: Order>(self) -> FixedInt<B2, O2> {
		FixedInt::<B2, O2>::from_raw(self.0)
	}

	//		count_ones
	/// Counts the number of ones in the binary representation of the value.
	#[must_use]
	pub const fn count_ones(&self) -> u32 {
		self.0.count_ones()
	}

	//		count_zeros
	/// Counts the number of zeroes in the binary representation of the value.
	#[must_use]
	pub const fn count_zeros(&self) -> u32 {
		Self::BITS - self.0.count_ones()
	}

	//		is_zero
	/// Determines if the value is zero.
	#[must_use]
	pub const fn is_zero(&self) -> bool {
		self.0 == 0
	}

	//		leading_zeros
	/// Counts the number of leading zeroes within the width.
	#[must_use]
	pub const fn leading_zeros(&self) -> u32 {
		self.0.leading_zeros() - (64 - Self::BITS)
	}

	//		lsb
	/// The least-significant bit, as `0` or `1`.
	#[must_use]
	pub fn lsb(&self) -> u8 {
		u8::from(self.0 & 1 == 1)
	}

	//		mask
	/// All bits set for this width, as a value of the same type.
	#[must_use]
	pub const fn mask(&self) -> Self {
		Self::MAX
	}

	//		msb
	/// The most-significant bit, as `0` or `1`.
	#[must_use]
	pub fn msb(&self) -> u8 {
		u8::from(self.bit(Self::BITS - 1))
	}

	//		p8
	/// Packs the value into one byte, in the type's byte order.
	///
	/// # Errors
	///
	/// Returns [`FixedIntError::ValueTooLarge`] if the value does not fit.
	///
	pub fn p8(&self) -> Result<Bytes, FixedIntError> {
		self.pack(Some(1), None)
	}

	//		p16
	/// Packs the value into two bytes, in the type's byte order.
	///
	/// # Errors
	///
	/// Returns [`FixedIntError::ValueTooLarge`] if the value does not fit.
	///
	pub fn p16(&self) -> Result<Bytes, FixedIntError> {
		self.pack(Some(2), None)
	}

	//		p32
	/// Packs the value into four bytes, in the type's byte order.
	///
	/// # Errors
	///
	/// Returns [`FixedIntError::ValueTooLarge`] if the value does not fit.
	///
	pub fn p32(&self) -> Result<Bytes, FixedIntError> {
		self.pack(Some(4), None)
	}

	//		p64
	/// Packs the value into eight bytes, in the type's byte order.
	///
	/// # Errors
	///
	/// Never fails in practice, as every value fits in eight bytes.
	///
	pub fn p64(&self) -> Result<Bytes, FixedIntError> {
		self.pack(Some(8), None)
	}

	//		p128
	/// Packs the value into sixteen bytes, in the type's byte order.
	///
	/// # Errors
	///
	/// Never fails in practice, as every value fits in sixteen bytes.
	///
	pub fn p128(&self) -> Result<Bytes, FixedIntError> {
		self.pack(Some(16), None)
	}

	//		pack
	/// Packs the value into bytes.
	///
	/// # Parameters
	///
	/// * `size`  - The number of bytes to produce. Defaults to the width of
	///             the type. Larger sizes are zero-extended.
	/// * `order` - The byte order to use. Defaults to the type's own order.
	///
	/// # Errors
	///
	/// Returns [`FixedIntError::ValueTooLarge`] if the value does not fit in
	/// `size` bytes. The value is never silently truncated.
	///
	pub fn pack(&self, size: Option<usize>, order: Option<Endian>) -> Result<Bytes, FixedIntError> {
		let size  = size.unwrap_or(Self::BYTES);
		let order = order.unwrap_or(ORDER::ENDIAN);
		Ok(Bytes::from(order.write(self.0, size)?))
	}

	//		pow
	/// Raises the value to an integral power, wrapping modulo `2^BITS`.
	#[must_use]
	pub const fn pow(self, exponent: u32) -> Self {
		Self::from_raw(self.0.wrapping_pow(exponent))
	}

	//		pow_mod
	/// Computes `self^exponent mod modulus`.
	///
	/// A negative exponent raises the modular inverse of the value instead, so
	/// e.g. `UInt8(3).pow_mod(-1, 7)` is 5. The result is wrapped into this
	/// type, so a modulus larger than `2^BITS` still gives a result masked to
	/// the width.
	///
	/// # Parameters
	///
	/// * `exponent` - The power to raise the value to.
	/// * `modulus`  - The modulus of the result.
	///
	/// # Errors
	///
	/// Returns [`FixedIntError::UnsupportedOperation`] if the exponent is
	/// negative and the value has no inverse modulo `modulus`.
	///
	/// # Panics
	///
	/// Panics if `modulus` is zero, as a remainder by zero would.
	///
	#[expect(clippy::cast_possible_truncation, reason = "Masked to the width")]
	pub fn pow_mod(self, exponent: i128, modulus: u128) -> Result<Self, FixedIntError> {
		assert!(modulus != 0, "Attempt to calculate the remainder with a divisor of zero");
		let value = u128::from(self.0) % modulus;
		let mut base = if exponent < 0 {
			inverse_mod(value, modulus).ok_or_else(FixedIntError::not_invertible)?
		} else {
			value
		};
		let mut exp  = exponent.unsigned_abs();
		let mut acc  = 1 % modulus;
		while exp > 0 {
			if exp & 1 == 1 {
				acc = mul_mod(acc, base, modulus);
			}
			base  = mul_mod(base, base, modulus);
			exp >>= 1_i32;
		}
		Ok(Self::from_raw(acc as u64))
	}

	//		powf
	/// Raises the value to a power of any kind.
	///
	/// An integral exponent gives modular exponentiation modulo `2^BITS`, and
	/// the result stays fixed-width. A negative integral exponent raises the
	/// inverse of the value, e.g. `UInt8(3).powf(-1)` is 171. A fractional
	/// exponent gives the plain float power.
	///
	/// # Errors
	///
	/// Returns [`FixedIntError::UnsupportedOperation`] if the exponent is
	/// negative and the value is even, as even values have no inverse modulo
	/// `2^BITS`.
	///
	pub fn powf(self, exponent: impl Into<Operand>) -> Result<Number<Self>, FixedIntError> {
		let operand = exponent.into();
		match operand.integral() {
			Some(Integral::Exact(exp))          => self.pow_mod(exp, 1_u128 << Self::BITS).map(Number::Fixed),
			//	Such exponents are multiples of 2^75, and odd values have an
			//	order modulo 2^64 that divides 2^62
			Some(Integral::Beyond { negative }) => match (self.0 & 1 == 1, negative) {
				(true,  _)     => Ok(Number::Fixed(Self::ONE)),
				(false, false) => Ok(Number::Fixed(Self::ZERO)),
				(false, true)  => Err(FixedIntError::not_invertible()),
			},
			None                                => Ok(Number::Float(self.to_f64().powf(operand.to_f64()))),
		}
	}

	//		rol
	/// Rotates the bits left within the width. The amount is taken modulo the
	/// width, so rotating by a multiple of the width has no effect.
	#[must_use]
	pub const fn rol(self, n: u32) -> Self {
		let shift = n % Self::BITS;
		if shift == 0 {
			return self;
		}
		Self::from_raw((self.0 << shift) | (self.0 >> (Self::BITS - shift)))
	}

	//		ror
	/// Rotates the bits right within the width. The amount is taken modulo
	/// the width, so rotating by a multiple of the width has no effect.
	#[must_use]
	pub const fn ror(self, n: u32) -> Self {
		let shift = n % Self::BITS;
		if shift == 0 {
			return self;
		}
		Self::from_raw((self.0 >> shift) | (self.0 << (Self::BITS - shift)))
	}

	//		sar
	/// Arithmetic (sign-extending) shift right.
	///
	/// The vacated high bits are filled with copies of the most-significant
	/// bit. Shifting by the width or more gives zero for values with a clear
	/// top bit, and all ones otherwise.
	///
	#[must_use]
	pub fn sar(self, n: u32) -> Self {
		Self::wrapping(i128::from(self.as_signed() >> n.min(Self::BITS - 1)))
	}

	//		to_bytes
	/// Packs the value into exactly [`Self::BYTES`] bytes in the type's byte
	/// order.
	///
	/// Unlike [`pack()`](FixedInt::pack()) this cannot fail, and the length is
	/// part of the type.
	///
	#[must_use]
	pub fn to_bytes(&self) -> GenericArray<u8, BITS::Bytes> {
		let mut bytes = GenericArray::<u8, BITS::Bytes>::default();
		ORDER::write_uint(&mut bytes, self.0, Self::BYTES);
		bytes
	}

	//		to_f64
	/// Represents the value as a float, rounding above `2^53`.
	#[expect(clippy::cast_precision_loss, reason = "Float semantics are wanted here")]
	#[must_use]
	pub fn to_f64(&self) -> f64 {
		self.0 as f64
	}

	//		to_json
	/// Serialises this integer to a JSON string.
	///
	/// # Errors
	///
	/// If the number cannot be serialised for whatever reason, an error will be
	/// returned. In reality this should be infallible.
	///
	pub fn to_json(&self) -> Result<String, JsonError> {
		serde_json::to_string(self)
	}

	//		to_vec
	/// Packs the value into a [`Vec`] of [`Self::BYTES`] bytes in the type's
	/// byte order.
	#[must_use]
	pub fn to_vec(&self) -> Vec<u8> {
		self.to_bytes().to_vec()
	}

	//		trailing_zeros
	/// Counts the number of trailing zeroes within the width.
	#[must_use]
	pub const fn trailing_zeros(&self) -> u32 {
		if self.0 == 0 { Self::BITS } else { self.0.trailing_zeros() }
	}

	//		type_name
	/// The name of the type, e.g. `UInt16` or `UInt32_be`.
	#[must_use]
	pub fn type_name() -> String {
		format!("UInt{}{}", Self::BITS, ORDER::SUFFIX)
	}

	//		Private methods

	//		type_mismatch
	/// Builds the error for a value that cannot become this type.
	fn type_mismatch(what: impl Display) -> FixedIntError {
		FixedIntError::TypeMismatch(format!(
			"{what} cannot be converted to {}, which requires an integer, bytes, an ASCII string, or a fixed-width integer",
			Self::type_name(),
		))
	}
}

//󰭅		Binary
impl<BITS: Width, ORDER: Order> Binary for FixedInt<BITS, ORDER> {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Binary::fmt(&self.0, f)
	}
}

//󰭅		Clone
impl<BITS: Width, ORDER: Order> Clone for FixedInt<BITS, ORDER> {
	//		clone
	fn clone(&self) -> Self {
		*self
	}
}

//󰭅		Copy
impl<BITS: Width, ORDER: Order> Copy for FixedInt<BITS, ORDER> {}

//󰭅		Debug
impl<BITS: Width, ORDER: Order> Debug for FixedInt<BITS, ORDER> {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		//	Canonical form: UInt8(0x15) # 21
		write!(f, "{}(0x{:0width$x}) # {}", Self::type_name(), self.0, self.0, width = Self::BYTES * 2)
	}
}

//󰭅		Default
impl<BITS: Width, ORDER: Order> Default for FixedInt<BITS, ORDER> {
	//		default
	fn default() -> Self {
		Self::ZERO
	}
}

//󰭅		Deserialize
impl<'de, BITS: Width, ORDER: Order> Deserialize<'de> for FixedInt<BITS, ORDER> {
	//		deserialize
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		if deserializer.is_human_readable() {
			//	Human-readable formats may hold numbers, strings, or byte arrays
			deserializer.deserialize_any(FixedIntVisitor::<BITS, ORDER>(PhantomData))
		} else {
			//	Binary formats hold the packed bytes
			deserializer.deserialize_bytes(FixedIntVisitor::<BITS, ORDER>(PhantomData))
		}
	}
}

//󰭅		Display
impl<BITS: Width, ORDER: Order> Display for FixedInt<BITS, ORDER> {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

//󰭅		Eq
impl<BITS: Width, ORDER: Order> Eq for FixedInt<BITS, ORDER> {}

//󰭅		From: &[u8] -> FixedInt
impl<BITS: Width, ORDER: Order> From<&[u8]> for FixedInt<BITS, ORDER> {
	//		from
	fn from(bytes: &[u8]) -> Self {
		Self::from_bytes(bytes)
	}
}

//󰭅		From: FixedInt -> i128
impl<BITS: Width, ORDER: Order> From<FixedInt<BITS, ORDER>> for i128 {
	//		from
	fn from(v: FixedInt<BITS, ORDER>) -> Self {
		Self::from(v.0)
	}
}

//󰭅		From: FixedInt -> u64
impl<BITS: Width, ORDER: Order> From<FixedInt<BITS, ORDER>> for u64 {
	//		from
	fn from(v: FixedInt<BITS, ORDER>) -> Self {
		v.0
	}
}

//󰭅		From: FixedInt -> u128
impl<BITS: Width, ORDER: Order> From<FixedInt<BITS, ORDER>> for u128 {
	//		from
	fn from(v: FixedInt<BITS, ORDER>) -> Self {
		Self::from(v.0)
	}
}

//󰭅		FromSql
impl<'a, BITS: Width, ORDER: Order> FromSql<'a> for FixedInt<BITS, ORDER> {
	//		from_sql
	fn from_sql(ty: &Type, raw: &'a [u8]) -> Result<Self, Box<dyn Error + Sync + Send>> {
		match ty {
			&Type::INT2  => Ok(Self::wrapping(i128::from(i16::from_sql(ty, raw)?))),
			&Type::INT4  => Ok(Self::wrapping(i128::from(i32::from_sql(ty, raw)?))),
			&Type::INT8  => Ok(Self::wrapping(i128::from(i64::from_sql(ty, raw)?))),
			&Type::BYTEA => Ok(Self::from_bytes(<&[u8]>::from_sql(ty, raw)?)),
			unknown      => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for {}: {unknown}", Self::type_name()),
			))),
		}
	}

	//		accepts
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8 | Type::BYTEA)
	}
}

//󰭅		Hash
impl<BITS: Width, ORDER: Order> Hash for FixedInt<BITS, ORDER> {
	//		hash
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.0.hash(state);
	}
}

//󰭅		LowerHex
impl<BITS: Width, ORDER: Order> LowerHex for FixedInt<BITS, ORDER> {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		LowerHex::fmt(&self.0, f)
	}
}

//󰭅		Octal
impl<BITS: Width, ORDER: Order> Octal for FixedInt<BITS, ORDER> {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Octal::fmt(&self.0, f)
	}
}

//󰭅		Ord
impl<BITS: Width, ORDER: Order> Ord for FixedInt<BITS, ORDER> {
	//		cmp
	fn cmp(&self, other: &Self) -> Ordering {
		self.0.cmp(&other.0)
	}
}

//󰭅		PartialEq: FixedInt == FixedInt
impl<BITS, ORDER, B2, O2> PartialEq<FixedInt<B2, O2>> for FixedInt<BITS, ORDER>
where
	BITS:  Width,
	ORDER: Order,
	B2:    Width,
	O2:    Order,
{
	//		eq
	fn eq(&self, other: &FixedInt<B2, O2>) -> bool {
		self.0 == other.0
	}
}

//󰭅		PartialEq: FixedInt == f64
impl<BITS: Width, ORDER: Order> PartialEq<f64> for FixedInt<BITS, ORDER> {
	//		eq
	fn eq(&self, other: &f64) -> bool {
		Operand::Float(*other).as_integer() == Some(self.as_i128())
	}
}

//󰭅		PartialEq: f64 == FixedInt
impl<BITS: Width, ORDER: Order> PartialEq<FixedInt<BITS, ORDER>> for f64 {
	//		eq
	fn eq(&self, other: &FixedInt<BITS, ORDER>) -> bool {
		other == self
	}
}

//󰭅		PartialOrd: FixedInt <=> FixedInt
impl<BITS, ORDER, B2, O2> PartialOrd<FixedInt<B2, O2>> for FixedInt<BITS, ORDER>
where
	BITS:  Width,
	ORDER: Order,
	B2:    Width,
	O2:    Order,
{
	//		partial_cmp
	fn partial_cmp(&self, other: &FixedInt<B2, O2>) -> Option<Ordering> {
		Some(self.0.cmp(&other.0))
	}
}

//󰭅		PartialOrd: FixedInt <=> f64
impl<BITS: Width, ORDER: Order> PartialOrd<f64> for FixedInt<BITS, ORDER> {
	//		partial_cmp
	fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
		match Operand::Float(*other).as_integer() {
			Some(v) => Some(self.as_i128().cmp(&v)),
			None    => self.to_f64().partial_cmp(other),
		}
	}
}

//󰭅		PartialOrd: f64 <=> FixedInt
impl<BITS: Width, ORDER: Order> PartialOrd<FixedInt<BITS, ORDER>> for f64 {
	//		partial_cmp
	fn partial_cmp(&self, other: &FixedInt<BITS, ORDER>) -> Option<Ordering> {
		other.partial_cmp(self).map(Ordering::reverse)
	}
}

//󰭅		Serialize
impl<BITS: Width, ORDER: Order> Serialize for FixedInt<BITS, ORDER> {
	//		serialize
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		if serializer.is_human_readable() {
			serializer.serialize_u64(self.0)
		} else {
			serializer.serialize_bytes(&self.to_bytes())
		}
	}
}

//󰭅		ToSql
impl<BITS: Width, ORDER: Order> ToSql for FixedInt<BITS, ORDER> {
	//		to_sql
	fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
		match ty {
			&Type::INT2  => i16::try_from(*self)?.to_sql(ty, out),
			&Type::INT4  => i32::try_from(*self)?.to_sql(ty, out),
			&Type::INT8  => i64::try_from(*self)?.to_sql(ty, out),
			&Type::BYTEA => self.to_vec().to_sql(ty, out),
			unknown      => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for {}: {unknown}", Self::type_name()),
			))),
		}
	}

	//		accepts
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8 | Type::BYTEA)
	}

	to_sql_checked!();
}

//󰭅		TryFrom: &JsonValue -> FixedInt
impl<BITS: Width, ORDER: Order> TryFrom<&JsonValue> for FixedInt<BITS, ORDER> {
	type Error = FixedIntError;

	//		try_from
	fn try_from(value: &JsonValue) -> Result<Self, Self::Error> {
		match value {
			JsonValue::Number(n) => {
				if let Some(v) = n.as_u64() {
					Ok(Self::from_raw(v))
				} else if let Some(v) = n.as_i64() {
					Ok(Self::wrapping(i128::from(v)))
				} else {
					n.as_f64().map_or_else(|| Err(Self::type_mismatch(n)), Self::new)
				}
			},
			JsonValue::String(s) => Self::from_ascii(s),
			JsonValue::Array(a)  => a.iter()
				.map(|item| item.as_u64().and_then(|b| u8::try_from(b).ok()))
				.collect::<Option<Vec<u8>>>()
				.map(|bytes| Self::from_bytes(&bytes))
				.ok_or_else(|| Self::type_mismatch(format!("Array {value}"))),
			JsonValue::Null      => Err(Self::type_mismatch("Null")),
			JsonValue::Bool(b)   => Err(Self::type_mismatch(format!("Boolean {b}"))),
			JsonValue::Object(_) => Err(Self::type_mismatch(format!("Object {value}"))),
		}
	}
}

//󰭅		TryFrom: &str -> FixedInt
impl<BITS: Width, ORDER: Order> TryFrom<&str> for FixedInt<BITS, ORDER> {
	type Error = FixedIntError;

	//		try_from
	fn try_from(s: &str) -> Result<Self, Self::Error> {
		Self::from_ascii(s)
	}
}

/// Implements narrowing conversion into primitive integers.
macro_rules! try_from_fixed {
	($($t:ty),*) => {$(
		//󰭅		TryFrom: FixedInt -> $t
		impl<BITS: Width, ORDER: Order> TryFrom<FixedInt<BITS, ORDER>> for $t {
			type Error = FixedIntError;

			//		try_from
			fn try_from(v: FixedInt<BITS, ORDER>) -> Result<Self, Self::Error> {
				Self::try_from(v.0).map_err(|_| FixedIntError::ValueTooLarge { size: size_of::<Self>() })
			}
		}
	)*};
}

try_from_fixed!(u8, u16, u32, usize, i8, i16, i32, i64, isize);

/// Implements comparison against primitive integers, in both directions.
macro_rules! cmp_int {
	($($t:ty),*) => {$(
		//󰭅		PartialEq: FixedInt == $t
		impl<BITS: Width, ORDER: Order> PartialEq<$t> for FixedInt<BITS, ORDER> {
			//		eq
			fn eq(&self, other: &$t) -> bool {
				self.as_i128() == other.to_i128()
			}
		}

		//󰭅		PartialEq: $t == FixedInt
		impl<BITS: Width, ORDER: Order> PartialEq<FixedInt<BITS, ORDER>> for $t {
			//		eq
			fn eq(&self, other: &FixedInt<BITS, ORDER>) -> bool {
				self.to_i128() == other.as_i128()
			}
		}

		//󰭅		PartialOrd: FixedInt <=> $t
		impl<BITS: Width, ORDER: Order> PartialOrd<$t> for FixedInt<BITS, ORDER> {
			//		partial_cmp
			fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
				Some(self.as_i128().cmp(&other.to_i128()))
			}
		}

		//󰭅		PartialOrd: $t <=> FixedInt
		impl<BITS: Width, ORDER: Order> PartialOrd<FixedInt<BITS, ORDER>> for $t {
			//		partial_cmp
			fn partial_cmp(&self, other: &FixedInt<BITS, ORDER>) -> Option<Ordering> {
				Some(self.to_i128().cmp(&other.as_i128()))
			}
		}
	)*};
}

cmp_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, i128, isize);

//󰭅		UpperHex
impl<BITS: Width, ORDER: Order> UpperHex for FixedInt<BITS, ORDER> {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		UpperHex::fmt(&self.0, f)
	}
}



//		Visitors

//		FixedIntVisitor
/// A visitor for building fixed-width integers from any supported kind of
/// serialised value.
struct FixedIntVisitor<BITS, ORDER>(PhantomData<fn() -> (BITS, ORDER)>);

//󰭅		Visitor
impl<'de, BITS: Width, ORDER: Order> Visitor<'de> for FixedIntVisitor<BITS, ORDER> {
	type Value = FixedInt<BITS, ORDER>;

	//		expecting
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "an integer, bytes, or an ASCII string for {}", FixedInt::<BITS, ORDER>::type_name())
	}

	//		visit_bool
	fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Err(E::custom(FixedInt::<BITS, ORDER>::type_mismatch(format!("Boolean {v}"))))
	}

	//		visit_bytes
	fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(FixedInt::from_bytes(v))
	}

	//		visit_f64
	fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		FixedInt::new(v).map_err(E::custom)
	}

	//		visit_i64
	fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(FixedInt::wrapping(i128::from(v)))
	}

	//		visit_i128
	fn visit_i128<E>(self, v: i128) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(FixedInt::wrapping(v))
	}

	//		visit_none
	fn visit_none<E>(self) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Err(E::custom(FixedInt::<BITS, ORDER>::type_mismatch("None")))
	}

	//		visit_seq
	fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
	where
		A: SeqAccess<'de>,
	{
		let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(FixedInt::<BITS, ORDER>::BYTES));
		while let Some(byte) = seq.next_element::<u8>()? {
			bytes.push(byte);
		}
		Ok(FixedInt::from_bytes(&bytes))
	}

	//		visit_str
	fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		FixedInt::from_ascii(v).map_err(E::custom)
	}

	//		visit_u64
	fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(FixedInt::from_raw(v))
	}

	//		visit_u128
	#[expect(clippy::cast_possible_truncation, reason = "Truncation is the intent")]
	fn visit_u128<E>(self, v: u128) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(FixedInt::from_raw(v as u64))
	}

	//		visit_unit
	fn visit_unit<E>(self) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Err(E::custom(FixedInt::<BITS, ORDER>::type_mismatch("Unit")))
	}
}



//		Functions

//		add_mod
/// Adds two residues modulo `modulus` without overflowing.
const fn add_mod(a: u128, b: u128, modulus: u128) -> u128 {
	if a >= modulus - b { a - (modulus - b) } else { a + b }
}

//		inverse_mod
/// Finds the inverse of `value` modulo `modulus`, if the two are coprime.
///
/// This is the extended Euclidean algorithm, with the coefficient kept
/// reduced modulo `modulus` so that it never needs a sign.
///
fn inverse_mod(value: u128, modulus: u128) -> Option<u128> {
	let (mut r0, mut r1) = (modulus, value % modulus);
	let (mut t0, mut t1) = (0_u128, 1_u128 % modulus);
	while r1 != 0 {
		let quotient = r0 / r1;
		(r0, r1) = (r1, r0 - quotient * r1);
		(t0, t1) = (t1, sub_mod(t0, mul_mod(quotient % modulus, t1, modulus), modulus));
	}
	(r0 == 1).then_some(t0)
}

//		mul_mod
/// Multiplies two residues modulo `modulus` without overflowing.
fn mul_mod(a: u128, b: u128, modulus: u128) -> u128 {
	if modulus <= 1 << 64_u32 {
		return a * b % modulus;
	}
	let (mut a, mut b) = (a, b);
	let mut product    = 0;
	while b > 0 {
		if b & 1 == 1 {
			product = add_mod(product, a, modulus);
		}
		a    = add_mod(a, a, modulus);
		b  >>= 1_u32;
	}
	product
}

//		sub_mod
/// Subtracts two residues modulo `modulus` without overflowing.
const fn sub_mod(a: u128, b: u128, modulus: u128) -> u128 {
	if a >= b { a - b } else { modulus - (b - a) }
}
