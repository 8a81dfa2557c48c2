//		Packages

use super::*;
use claims::{assert_err_eq, assert_ok_eq};



//		Tests

mod public_methods {
	use super::*;

	//		bytes
	#[test]
	fn bytes() {
		assert_eq!(FloatFormat::Half.bytes(),   2);
		assert_eq!(FloatFormat::Single.bytes(), 4);
		assert_eq!(FloatFormat::Double.bytes(), 8);
	}

	//		decode
	#[test]
	fn decode__half() {
		assert_eq!(FloatFormat::Half.decode(0x3C00), 1.0);
		assert_eq!(FloatFormat::Half.decode(0xC000), -2.0);
		assert_eq!(FloatFormat::Half.decode(0x7BFF), 65504.0);
		assert_eq!(FloatFormat::Half.decode(0x0001), f64::powi(2.0, -24));
		assert_eq!(FloatFormat::Half.decode(0x0400), f64::powi(2.0, -14));
		assert_eq!(FloatFormat::Half.decode(0x7C00), f64::INFINITY);
		assert_eq!(FloatFormat::Half.decode(0xFC00), f64::NEG_INFINITY);
		assert!(FloatFormat::Half.decode(0x7E00).is_nan());
	}
	#[test]
	fn decode__half_negative_zero() {
		let zero = FloatFormat::Half.decode(0x8000);
		assert_eq!(zero, 0.0);
		assert!(zero.is_sign_negative());
	}
	#[test]
	fn decode__single() {
		assert_eq!(FloatFormat::Single.decode(0x43D2_6000), 420.75);
		assert_eq!(FloatFormat::Single.decode(0x3F80_0000), 1.0);
	}
	#[test]
	fn decode__double() {
		assert_eq!(FloatFormat::Double.decode(0x3FF0_0000_0000_0000), 1.0);
		assert_eq!(FloatFormat::Double.decode(420.75_f64.to_bits()), 420.75);
	}

	//		encode
	#[test]
	fn encode__half() {
		assert_ok_eq!(FloatFormat::Half.encode(1.0),                0x3C00);
		assert_ok_eq!(FloatFormat::Half.encode(-2.0),               0xC000);
		assert_ok_eq!(FloatFormat::Half.encode(65504.0),            0x7BFF);
		assert_ok_eq!(FloatFormat::Half.encode(0.0),                0x0000);
		assert_ok_eq!(FloatFormat::Half.encode(-0.0),               0x8000);
		assert_ok_eq!(FloatFormat::Half.encode(f64::INFINITY),      0x7C00);
		assert_ok_eq!(FloatFormat::Half.encode(f64::NEG_INFINITY),  0xFC00);
	}
	#[test]
	fn encode__half_subnormal() {
		assert_ok_eq!(FloatFormat::Half.encode(f64::powi(2.0, -24)), 0x0001);
		assert_ok_eq!(FloatFormat::Half.encode(f64::powi(2.0, -14)), 0x0400);
		//	Half of the smallest subnormal ties to even, i.e. zero
		assert_ok_eq!(FloatFormat::Half.encode(f64::powi(2.0, -25)), 0x0000);
		assert_ok_eq!(FloatFormat::Half.encode(1e-300),              0x0000);
	}
	#[test]
	fn encode__half_rounding() {
		//	1 + 2^-11 is exactly between 1.0 and the next half, so ties to even
		assert_ok_eq!(FloatFormat::Half.encode(1.0 + f64::powi(2.0, -11)), 0x3C00);
		//	1 + 3 * 2^-11 ties upwards to the even mantissa
		assert_ok_eq!(FloatFormat::Half.encode(1.0 + 3.0 * f64::powi(2.0, -11)), 0x3C02);
		//	Rounding up into the next binade
		assert_ok_eq!(FloatFormat::Half.encode(2.0 - f64::powi(2.0, -12)), 0x4000);
	}
	#[test]
	fn encode__half_nan() {
		let bits = FloatFormat::Half.encode(f64::NAN).unwrap();
		assert_eq!(bits & 0x7C00, 0x7C00);
		assert_ne!(bits & 0x03FF, 0);
	}
	#[test]
	fn encode__half_overflow() {
		assert_err_eq!(FloatFormat::Half.encode(65520.0), FixedIntError::ValueTooLarge { size: 2 });
		assert_err_eq!(FloatFormat::Half.encode(-1e10),   FixedIntError::ValueTooLarge { size: 2 });
	}
	#[test]
	fn encode__single() {
		assert_ok_eq!(FloatFormat::Single.encode(420.75), 0x43D2_6000);
		assert_ok_eq!(FloatFormat::Single.encode(2.5),    0x4020_0000);
	}
	#[test]
	fn encode__single_overflow() {
		assert_err_eq!(FloatFormat::Single.encode(1e300), FixedIntError::ValueTooLarge { size: 4 });
		assert_ok_eq!(FloatFormat::Single.encode(f64::INFINITY), u64::from(f32::INFINITY.to_bits()));
	}
	#[test]
	fn encode__double() {
		assert_ok_eq!(FloatFormat::Double.encode(420.75), 420.75_f64.to_bits());
	}
	#[test]
	fn encode__decode() {
		for value in [0.5, -1.25, 1024.0, 0.000_061_035_156_25] {
			let bits = FloatFormat::Half.encode(value).unwrap();
			assert_eq!(FloatFormat::Half.decode(bits), value);
		}
	}
}

mod private_functions {
	use super::*;

	//		round_shift
	#[test]
	fn round_shift__exact() {
		assert_eq!(round_shift(0b1000, 3), 1);
		assert_eq!(round_shift(42,     0), 42);
	}
	#[test]
	fn round_shift__ties_to_even() {
		assert_eq!(round_shift(0b0100, 3), 0);
		assert_eq!(round_shift(0b1100, 3), 2);
	}
	#[test]
	fn round_shift__nearest() {
		assert_eq!(round_shift(0b0101, 3), 1);
		assert_eq!(round_shift(0b0011, 3), 0);
	}
	#[test]
	fn round_shift__large_shift() {
		assert_eq!(round_shift(1 << 52, 64), 0);
		assert_eq!(round_shift(1 << 52, 90), 0);
	}
}
