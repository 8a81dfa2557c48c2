//! Byte orders for packing and unpacking fixed-width integers.

//	All slicing below is bounded by the length checks that precede it.
#![allow(clippy::indexing_slicing, reason = "Lengths are checked beforehand")]



//		Modules

#[cfg(test)]
#[path = "tests/order.rs"]
mod tests;



//		Packages

use crate::errors::FixedIntError;
use byteorder::ByteOrder;
use core::{
	fmt::{Display, Formatter, self},
	str::FromStr,
};
use serde::{Deserialize, Serialize};

pub use byteorder::{BigEndian, LittleEndian};



//		Traits

//		Sealed
mod sealed {
	pub trait Sealed {}

	impl Sealed for super::BigEndian {}
	impl Sealed for super::LittleEndian {}
}

//		Order
/// A compile-time byte order for a fixed-width integer type.
///
/// This is implemented for [`LittleEndian`] and [`BigEndian`] only, which
/// are re-exported from the [`byteorder`] crate so that their codecs can be
/// used directly.
///
pub trait Order: ByteOrder + sealed::Sealed + 'static {
	/// The runtime equivalent of this byte order.
	const ENDIAN: Endian;

	/// The suffix appended to type names using this byte order.
	const SUFFIX: &'static str;
}

//󰭅		Order: BigEndian
impl Order for BigEndian {
	const ENDIAN: Endian       = Endian::Big;
	const SUFFIX: &'static str = "_be";
}

//󰭅		Order: LittleEndian
impl Order for LittleEndian {
	const ENDIAN: Endian       = Endian::Little;
	const SUFFIX: &'static str = "";
}



//		Enums

//		Endian
/// A byte order chosen at runtime, e.g. to override a type's own order when
/// packing.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Endian {
	/// Least-significant byte first.
	#[default]
	Little,

	/// Most-significant byte first.
	Big,
}

//󰭅		Endian
impl Endian {
	//		read_wrapping
	/// Reads an unsigned integer of any length, keeping only the low 64 bits.
	///
	/// This matches interpreting the whole sequence as one (arbitrarily large)
	/// integer and then reducing it modulo `2^64`. An empty slice reads as
	/// zero.
	///
	/// # Parameters
	///
	/// * `bytes` - The bytes to read, in this byte order.
	///
	#[must_use]
	pub fn read_wrapping(self, bytes: &[u8]) -> u64 {
		let len = bytes.len().min(8);
		if len == 0 {
			return 0;
		}
		match self {
			Self::Little => LittleEndian::read_uint(&bytes[..len], len),
			Self::Big    => BigEndian::read_uint(&bytes[bytes.len() - len..], len),
		}
	}

	//		write
	/// Writes an unsigned integer into exactly `size` bytes.
	///
	/// Any size beyond what the value needs is zero-extended on the
	/// most-significant side.
	///
	/// # Parameters
	///
	/// * `value` - The value to write.
	/// * `size`  - The number of bytes to produce.
	///
	/// # Errors
	///
	/// Returns [`FixedIntError::ValueTooLarge`] if the value cannot be
	/// represented in `size` bytes.
	///
	pub fn write(self, value: u64, size: usize) -> Result<Vec<u8>, FixedIntError> {
		let needed = (64 - value.leading_zeros() as usize).div_ceil(8);
		if needed > size {
			return Err(FixedIntError::ValueTooLarge { size });
		}

		let mut buf = vec![0_u8; size];
		if needed == 0 {
			return Ok(buf);
		}
		match self {
			Self::Little => LittleEndian::write_uint(&mut buf[..needed], value, needed),
			Self::Big    => BigEndian::write_uint(&mut buf[size - needed..], value, needed),
		}
		Ok(buf)
	}
}

//󰭅		Display
impl Display for Endian {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Little => "little",
			Self::Big    => "big",
		})
	}
}

//󰭅		FromStr
impl FromStr for Endian {
	type Err = FixedIntError;

	//		from_str
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"little" => Ok(Self::Little),
			"big"    => Ok(Self::Big),
			other    => Err(FixedIntError::TypeMismatch(format!("Unknown byte order: {other}"))),
		}
	}
}
