//! IEEE-754 reinterpretation of fixed-width integer bit patterns.
//!
//! Half precision has no stable primitive in Rust, so it is encoded and
//! decoded here directly from the bit layout.

//	The conversions below move between integer and float bit layouts. Every
//	cast is bounded by a preceding mask or range check.
#![allow(
	clippy::cast_possible_truncation,
	clippy::cast_precision_loss,
	clippy::cast_sign_loss,
	reason = "Bit-level float codec"
)]



//		Modules

#[cfg(test)]
#[path = "tests/float.rs"]
mod tests;



//		Packages

use crate::errors::FixedIntError;



//		Constants

/// Exponent bias of a half-precision float.
const HALF_BIAS:     i32 = 15;

/// Exponent bias of a double-precision float.
const DOUBLE_BIAS:   i32 = 1023;

/// Number of explicit mantissa bits in a half-precision float.
const HALF_MANTISSA: u32 = 10;

/// Number of explicit mantissa bits in a double-precision float.
const DOUBLE_MANTISSA: u32 = 52;



//		Enums

//		FloatFormat
/// The IEEE-754 interchange formats that a fixed-width integer can be viewed
/// as.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum FloatFormat {
	/// 16-bit half precision (binary16).
	Half,

	/// 32-bit single precision (binary32).
	Single,

	/// 64-bit double precision (binary64).
	Double,
}

//󰭅		FloatFormat
impl FloatFormat {
	//		bytes
	/// The storage size of the format, in bytes.
	#[must_use]
	pub const fn bytes(self) -> usize {
		match self {
			Self::Half   => 2,
			Self::Single => 4,
			Self::Double => 8,
		}
	}

	//		decode
	/// Interprets a bit pattern as a float of this format.
	///
	/// Bits above the width of the format are ignored.
	///
	/// # Parameters
	///
	/// * `bits` - The raw bit pattern.
	///
	#[must_use]
	pub fn decode(self, bits: u64) -> f64 {
		match self {
			Self::Half   => half_to_f64(bits as u16),
			Self::Single => f64::from(f32::from_bits(bits as u32)),
			Self::Double => f64::from_bits(bits),
		}
	}

	//		encode
	/// Produces the bit pattern of a value in this format.
	///
	/// Values are rounded to the nearest representable value, ties to even.
	/// Infinities and NaN are carried over.
	///
	/// # Parameters
	///
	/// * `value` - The value to encode.
	///
	/// # Errors
	///
	/// Returns [`FixedIntError::ValueTooLarge`] if a finite value rounds
	/// beyond the largest finite value of the format.
	///
	pub fn encode(self, value: f64) -> Result<u64, FixedIntError> {
		let too_large = FixedIntError::ValueTooLarge { size: self.bytes() };
		match self {
			Self::Half   => f64_to_half(value).map(u64::from).ok_or(too_large),
			Self::Single => {
				let single = value as f32;
				if value.is_finite() && single.is_infinite() {
					Err(too_large)
				} else {
					Ok(u64::from(single.to_bits()))
				}
			},
			Self::Double => Ok(value.to_bits()),
		}
	}
}



//		Functions

//		half_to_f64
/// Widens a half-precision bit pattern to a double. This is always exact.
fn half_to_f64(bits: u16) -> f64 {
	let sign     = u64::from(bits >> 15) << 63;
	let exponent = i32::from((bits >> HALF_MANTISSA) & 0x1F);
	let mantissa = u64::from(bits & 0x03FF);

	match exponent {
		//	Zero and subnormals: mantissa * 2^-24
		0    => {
			let magnitude = mantissa as f64 * f64::powi(2.0, 1 - HALF_BIAS - HALF_MANTISSA as i32);
			if sign == 0 { magnitude } else { -magnitude }
		},
		//	Infinity and NaN, keeping the payload
		0x1F => f64::from_bits(sign | (0x7FF << DOUBLE_MANTISSA) | (mantissa << (DOUBLE_MANTISSA - HALF_MANTISSA))),
		_    => {
			let biased = (exponent - HALF_BIAS + DOUBLE_BIAS) as u64;
			f64::from_bits(sign | (biased << DOUBLE_MANTISSA) | (mantissa << (DOUBLE_MANTISSA - HALF_MANTISSA)))
		},
	}
}

//		f64_to_half
/// Narrows a double to a half-precision bit pattern.
///
/// Returns [`None`] if a finite value overflows the half-precision range.
///
fn f64_to_half(value: f64) -> Option<u16> {
	let bits     = value.to_bits();
	let sign     = ((bits >> 48) & 0x8000) as u16;
	let exponent = ((bits >> DOUBLE_MANTISSA) & 0x7FF) as i32;
	let mantissa = bits & ((1 << DOUBLE_MANTISSA) - 1);

	if exponent == 0x7FF {
		if mantissa == 0 {
			return Some(sign | 0x7C00);
		}
		//	Keep NaN quiet and carry the top of the payload
		return Some(sign | 0x7E00 | (mantissa >> (DOUBLE_MANTISSA - HALF_MANTISSA)) as u16);
	}

	//	Double subnormals are far below the smallest half subnormal
	if exponent == 0 {
		return Some(sign);
	}

	let unbiased    = exponent - DOUBLE_BIAS;
	let significand = mantissa | (1 << DOUBLE_MANTISSA);
	let half_exp    = unbiased + HALF_BIAS;

	if half_exp >= 0x1F {
		return None;
	}

	let magnitude = if half_exp <= 0 {
		//	Subnormal: significand * 2^(unbiased - 52) expressed in units of 2^-24.
		//	A rounding carry into bit 10 lands exactly on the smallest normal.
		round_shift(significand, (DOUBLE_MANTISSA as i32 - HALF_MANTISSA as i32 - HALF_BIAS + 1 - unbiased) as u32)
	} else {
		//	Normal: the carry from rounding propagates into the exponent field
		((half_exp as u64) << HALF_MANTISSA)
			+ round_shift(significand, DOUBLE_MANTISSA - HALF_MANTISSA)
			- (1 << HALF_MANTISSA)
	};

	(magnitude < 0x7C00).then_some(sign | magnitude as u16)
}

//		round_shift
/// Shifts right, rounding to nearest with ties to even.
///
/// `value` must be below `2^63`, which holds for any double significand.
///
fn round_shift(value: u64, shift: u32) -> u64 {
	if shift == 0 {
		return value;
	}
	if shift >= 64 {
		return 0;
	}
	let quotient  = value >> shift;
	let remainder = value & ((1 << shift) - 1);
	let halfway   = 1 << (shift - 1);
	if remainder > halfway || (remainder == halfway && quotient & 1 == 1) {
		quotient + 1
	} else {
		quotient
	}
}
