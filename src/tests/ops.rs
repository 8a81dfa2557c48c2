//		Packages

use super::*;
use crate::int::{UInt8, UInt8_be, UInt16, UInt16_be, UInt32, UInt64};
use claims::{assert_err_eq, assert_ok_eq};



//		Tests

mod public_methods {
	use super::*;

	//		bitand_with
	#[test]
	fn bitand_with() {
		let spam = UInt8::new(21).unwrap();
		assert_ok_eq!(spam.bitand_with(0xF),  5);
		assert_ok_eq!(spam.bitand_with(15.0), 5);
		assert_ok_eq!(spam.bitand_with(-1),   21);
		assert_err_eq!(spam.bitand_with(1.5), FixedIntError::integer_required());
	}

	//		bitor_with
	#[test]
	fn bitor_with() {
		let spam = UInt8::new(21).unwrap();
		assert_ok_eq!(spam.bitor_with(0x3),  23);
		assert_ok_eq!(spam.bitor_with(-256), 21);
		assert_ok_eq!(spam.bitor_with(-1),   255);
		assert_err_eq!(spam.bitor_with(0.5), FixedIntError::integer_required());
	}

	//		bitxor_with
	#[test]
	fn bitxor_with() {
		let spam = UInt8::new(21).unwrap();
		assert_ok_eq!(spam.bitxor_with(0x4), 17);
		assert_ok_eq!(spam.bitxor_with(-1),  0xEA);
		assert_err_eq!(spam.bitxor_with(f64::NAN), FixedIntError::integer_required());
	}
	#[test]
	fn bitwise__huge_float() {
		//	Floats this large are multiples of 2^64
		let spam = UInt16::new(42).unwrap();
		assert_ok_eq!(spam.bitand_with(1e40),  0);
		assert_ok_eq!(spam.bitor_with(1e40),   42);
		assert_ok_eq!(spam.bitxor_with(-1e40), 42);
	}

	//		div_mod
	#[test]
	fn div_mod() {
		let spam = UInt16::new(42).unwrap();
		assert_ok_eq!(spam.div_mod(5),   (UInt16::new(8).unwrap(), UInt16::new(2).unwrap()));
		assert_ok_eq!(spam.div_mod(5.0), (UInt16::new(8).unwrap(), UInt16::new(2).unwrap()));
		assert_err_eq!(spam.div_mod(1.5), FixedIntError::integer_required());
	}
	#[test]
	fn div_mod__negative_divisor() {
		//	7 = -4 * -2 + -1
		assert_ok_eq!(UInt8::new(7).unwrap().div_mod(-2), (UInt8::new(-4).unwrap(), UInt8::new(-1).unwrap()));
		assert_ok_eq!(UInt8::new(6).unwrap().div_mod(-2), (UInt8::new(-3).unwrap(), UInt8::ZERO));
	}
	#[test]
	#[should_panic(expected = "Attempt to divide by zero")]
	fn div_mod__zero() {
		let _ = UInt8::new(7).unwrap().div_mod(0);
	}

	//		floor_div
	#[test]
	fn floor_div() {
		let spam = UInt16::new(42).unwrap();
		assert_ok_eq!(spam.floor_div(5),   8);
		assert_ok_eq!(spam.floor_div(5.0), 8);
		assert_ok_eq!(UInt8::new(21).unwrap().floor_div(2), 10);
		assert_ok_eq!(UInt8::new(21).unwrap().floor_div(3), 7);
		assert_ok_eq!(spam.floor_div(UInt8::new(4).unwrap()), 10);
	}
	#[test]
	fn floor_div__negative_divisor() {
		assert_ok_eq!(UInt8::new(7).unwrap().floor_div(-2), 252);
		assert_ok_eq!(UInt8::new(7).unwrap().floor_div(-7), 255);
		assert_ok_eq!(UInt8::new(0).unwrap().floor_div(-7), 0);
	}
	#[test]
	fn floor_div__huge_float() {
		let spam = UInt16::new(42).unwrap();
		assert_ok_eq!(spam.floor_div(1e40),   0);
		assert_ok_eq!(spam.floor_div(-1e40),  UInt16::MAX);
		assert_ok_eq!(spam.div_mod(1e40),     (UInt16::ZERO, spam));
		assert_ok_eq!(UInt16::ZERO.div_mod(-1e40), (UInt16::ZERO, UInt16::ZERO));
	}
	#[test]
	fn floor_div__fractional() {
		let err = UInt16::new(42).unwrap().floor_div(1.5);
		assert_err_eq!(&err, &FixedIntError::integer_required());
		assert_eq!(err.unwrap_err().to_string(), "Type mismatch: Integer argument required");
	}
	#[test]
	#[should_panic(expected = "Attempt to divide by zero")]
	fn floor_div__zero() {
		let _ = UInt16::new(42).unwrap().floor_div(0.0);
	}

	//		rem_floor
	#[test]
	fn rem_floor() {
		assert_ok_eq!(UInt16::new(42).unwrap().rem_floor(5),    2);
		assert_ok_eq!(UInt16::new(42).unwrap().rem_floor(-5),   UInt16::new(-3).unwrap());
		assert_ok_eq!(UInt8::new(7).unwrap().rem_floor(-2),     255);
		assert_ok_eq!(UInt8::new(200).unwrap().rem_floor(1000), 200);
		assert_err_eq!(UInt8::new(7).unwrap().rem_floor(2.5),   FixedIntError::integer_required());
	}
	#[test]
	fn rem_floor__huge_float() {
		//	42 - 1e40 is congruent to 42
		assert_ok_eq!(UInt16::new(42).unwrap().rem_floor(1e40),  42);
		assert_ok_eq!(UInt16::new(42).unwrap().rem_floor(-1e40), 42);
		assert_err_eq!(UInt16::new(42).unwrap().rem_floor(f64::INFINITY), FixedIntError::integer_required());
	}

	//		shl_by
	#[test]
	fn shl_by() {
		let spam = UInt8::new(21).unwrap();
		assert_ok_eq!(spam.shl_by(1),    42);
		assert_ok_eq!(spam.shl_by(1.0),  42);
		assert_ok_eq!(spam.shl_by(8),    0);
		assert_ok_eq!(spam.shl_by(1000), 0);
		assert_err_eq!(spam.shl_by(0.5), FixedIntError::integer_required());
	}
	#[test]
	fn shl_by__huge_float() {
		assert_ok_eq!(UInt8::new(21).unwrap().shl_by(1e40), 0);
		assert_ok_eq!(UInt8::new(21).unwrap().shr_by(1e40), 0);
	}
	#[test]
	#[should_panic(expected = "Attempt to shift by a negative amount")]
	fn shl_by__negative_huge_float() {
		let _ = UInt8::new(21).unwrap().shl_by(-1e40);
	}
	#[test]
	#[should_panic(expected = "Attempt to shift by a negative amount")]
	fn shl_by__negative() {
		let _ = UInt8::new(21).unwrap().shl_by(-1);
	}

	//		shr_by
	#[test]
	fn shr_by() {
		let spam = UInt8::new(21).unwrap();
		assert_ok_eq!(spam.shr_by(1),  10);
		assert_ok_eq!(spam.shr_by(8),  0);
		assert_ok_eq!(spam.shr_by(64), 0);
		assert_ok_eq!(UInt64::MAX.shr_by(63), 1);
		assert_err_eq!(spam.shr_by(0.5), FixedIntError::integer_required());
	}
	#[test]
	#[should_panic(expected = "Attempt to shift by a negative amount")]
	fn shr_by__negative() {
		let _ = UInt8::new(21).unwrap().shr_by(-3);
	}

	//		soft_add
	#[test]
	fn soft_add__integral() {
		let eggs = UInt16::new(42).unwrap().soft_add(1);
		assert!(eggs.is_fixed());
		assert_eq!(eggs, 43);
		assert_eq!(UInt16::new(42).unwrap().soft_add(1.0), Number::Fixed(UInt16::new(43).unwrap()));
	}
	#[test]
	fn soft_add__fractional() {
		let eggs = UInt16::new(42).unwrap().soft_add(1.5);
		assert!(eggs.is_float());
		assert_eq!(eggs, 43.5);
	}
	#[test]
	fn soft_add__wraparound() {
		assert_eq!(UInt8::new(250).unwrap().soft_add(10),    4);
		assert_eq!(UInt8::new(250).unwrap().soft_add(-251),  255);
		assert_eq!(UInt8::new(250).unwrap().soft_add(i128::MAX), 249);
	}
	#[test]
	fn soft_add__non_finite() {
		let result = UInt8::new(1).unwrap().soft_add(f64::INFINITY);
		assert!(result.is_float());
		assert_eq!(result, f64::INFINITY);
	}
	#[test]
	fn soft_add__huge_float() {
		let eggs = UInt16::new(42).unwrap().soft_add(1e40);
		assert!(eggs.is_fixed());
		assert_eq!(eggs, 42);
		assert_eq!(UInt16::new(42).unwrap().soft_sub(-1e40), 42);
		assert_eq!(UInt16::new(42).unwrap().soft_mul(1e40),  0);
	}

	//		soft_mul
	#[test]
	fn soft_mul() {
		assert_eq!(UInt8::new(21).unwrap().soft_mul(3),    63);
		assert_eq!(UInt8::new(21).unwrap().soft_mul(13),   273 - 256);
		assert_eq!(UInt8::new(21).unwrap().soft_mul(-1),   235);
		assert_eq!(UInt8::new(21).unwrap().soft_mul(0.5),  10.5);
		//	A fractional operand never re-wraps, even when the product is whole
		assert_eq!(UInt8::new(42).unwrap().soft_mul(0.5),  Number::<UInt8>::Float(21.0));
	}

	//		soft_sub
	#[test]
	fn soft_sub() {
		assert_eq!(UInt8::new(5).unwrap().soft_sub(6),    255);
		assert_eq!(UInt8::new(5).unwrap().soft_sub(-6),   11);
		assert_eq!(UInt8::new(5).unwrap().soft_sub(0.25), 4.75);
		assert_eq!(UInt8::new(5).unwrap().soft_sub(UInt16::new(6).unwrap()), 255);
	}

	//		true_div
	#[test]
	fn true_div__exact() {
		let result = UInt16::new(42).unwrap().true_div(2);
		assert!(result.is_fixed());
		assert_eq!(result, 21);
		assert_eq!(UInt16::new(42).unwrap().true_div(2.0), 21);
		assert_eq!(UInt8::new(42).unwrap().true_div(-2),   UInt8::new(-21).unwrap());
	}
	#[test]
	fn true_div__inexact() {
		let result = UInt16::new(42).unwrap().true_div(4);
		assert!(result.is_float());
		assert_eq!(result, 10.5);
		assert_eq!(UInt16::new(42).unwrap().true_div(0.5), 84.0);
		assert!(UInt16::new(42).unwrap().true_div(0.5).is_float());
	}
	#[test]
	fn true_div__rounding() {
		//	Rounding the dividend to a float first would give 0x1.a5bcb50c1b601p59
		let spam = UInt64::new(12_345_678_901_234_567_891_u64).unwrap();
		assert_eq!(spam.true_div(13),   9.496_676_077_872_745e17);
		assert_eq!(UInt64::MAX.true_div(2), 9_223_372_036_854_775_808.0);
		assert_eq!(UInt64::MAX.true_div(-2), -9_223_372_036_854_775_808.0);
	}
	#[test]
	fn true_div__huge_float() {
		let result = UInt16::new(42).unwrap().true_div(1e40);
		assert!(result.is_float());
		assert_eq!(result, 42.0 / 1e40);
		assert_eq!(UInt16::ZERO.true_div(1e40), Number::Fixed(UInt16::ZERO));
	}
	#[test]
	#[should_panic(expected = "Attempt to divide by zero")]
	fn true_div__zero() {
		let _ = UInt16::new(42).unwrap().true_div(0);
	}
}

mod operators {
	use super::*;

	//		Add
	#[test]
	fn add__int() {
		let spam = UInt16::new(42).unwrap();
		let eggs: UInt16 = spam + 1;
		assert_eq!(eggs, 43);
		assert_eq!(UInt8::new(255).unwrap() + 1_u64, 0);
		assert_eq!(UInt8::new(0).unwrap()   + -1,    255);
	}
	#[test]
	fn add__float() {
		let spam = UInt16::new(42).unwrap();
		assert_eq!(spam + 1.0,     Number::Fixed(UInt16::new(43).unwrap()));
		assert_eq!(spam + 1.5,     Number::<UInt16>::Float(43.5));
		assert_eq!(spam.soft_add(1.5_f32), 43.5);
	}
	#[test]
	fn add__fixed_int() {
		//	The left-hand type is kept
		let sum: UInt8 = UInt8::new(200).unwrap() + UInt16::new(100).unwrap();
		assert_eq!(sum, 44);
		let sum: UInt16 = UInt16::new(100).unwrap() + UInt8::new(200).unwrap();
		assert_eq!(sum, 300);
	}
	#[test]
	fn add__reflected() {
		let spam = UInt16::new(42).unwrap();
		let eggs: i128 = 1 + spam;
		assert_eq!(eggs, 43);
		//	Plain integers on the left do not wrap
		assert_eq!(1_u8 + UInt8::MAX, 256);
		assert_eq!(1.5 + spam,        43.5);
	}
	#[test]
	#[should_panic(expected = "Attempt to add overflowed")]
	fn add__reflected_overflow() {
		let _ = i128::MAX + UInt8::new(1).unwrap();
	}

	//		AddAssign
	#[test]
	fn add_assign() {
		let mut spam = UInt8::new(250).unwrap();
		spam += 10;
		assert_eq!(spam, 4);
		spam += UInt16::new(0x1_01).unwrap();
		assert_eq!(spam, 5);
	}

	//		BitAnd
	#[test]
	fn bitand() {
		let spam = UInt8::new(21).unwrap();
		assert_eq!(spam & 0xF,                    5);
		assert_eq!(spam & UInt8::new(0xF).unwrap(), 5);
		assert_ok_eq!(spam & 15.0,                5);
		assert_err_eq!(spam & 1.5,                FixedIntError::integer_required());
		assert_eq!(0xFF_i32 & spam,               21);
	}

	//		BitAndAssign
	#[test]
	fn bitand_assign() {
		let mut spam = UInt8::new(21).unwrap();
		spam &= 0xF;
		assert_eq!(spam, 5);
		spam &= UInt8::new(4).unwrap();
		assert_eq!(spam, 4);
	}

	//		BitOr
	#[test]
	fn bitor() {
		let spam = UInt8::new(21).unwrap();
		assert_eq!(spam | 0x3,                      23);
		assert_eq!(spam | UInt16::new(0x300).unwrap(), 21);
		assert_err_eq!(spam | 0.5,                  FixedIntError::integer_required());
		assert_eq!(0x100_i32 | spam,                0x115);
	}

	//		BitOrAssign
	#[test]
	fn bitor_assign() {
		let mut spam = UInt8::new(21).unwrap();
		spam |= 1;
		assert_eq!(spam, 21);
		spam |= UInt8::new(0x80).unwrap();
		assert_eq!(spam, 0x95);
	}

	//		BitXor
	#[test]
	fn bitxor() {
		let spam = UInt8::new(21).unwrap();
		assert_eq!(spam ^ 0x4,  17);
		assert_ok_eq!(spam ^ 4.0, 17);
		assert_eq!(4_u8 ^ spam,  17);
	}

	//		BitXorAssign
	#[test]
	fn bitxor_assign() {
		let mut spam = UInt8::new(21).unwrap();
		spam ^= 0xFF;
		assert_eq!(spam, 0xEA);
		spam ^= UInt8::MAX;
		assert_eq!(spam, 21);
	}

	//		Div
	#[test]
	fn div__int() {
		let spam = UInt16::new(42).unwrap();
		assert_eq!(spam / 2,    Number::Fixed(UInt16::new(21).unwrap()));
		assert_eq!(spam / 4,    Number::<UInt16>::Float(10.5));
		assert_eq!(spam / -2,   UInt16::new(-21).unwrap());
	}
	#[test]
	fn div__float() {
		let spam = UInt16::new(42).unwrap();
		assert_eq!(spam / 2.0,     21);
		assert_eq!(spam / 0.5,     84.0);
		assert_eq!(spam.true_div(4.0_f32), 10.5);
	}
	#[test]
	fn div__fixed_int() {
		assert_eq!(UInt16::new(42).unwrap() / UInt8::new(6).unwrap(), 7);
		assert_eq!(UInt16::new(42).unwrap() / UInt8::new(8).unwrap(), 5.25);
	}
	#[test]
	fn div__reflected() {
		assert_eq!(1_u16 / UInt8::new(2).unwrap(), 0.5);
		assert_eq!(1.5 / UInt8::new(3).unwrap(), 0.5);
		assert_eq!(-1_i8 / UInt8::new(4).unwrap(), -0.25);
	}
	#[test]
	fn div__reflected_rounding() {
		let eggs = UInt8::new(13).unwrap();
		assert_eq!(12_345_678_901_234_567_891_u64 / eggs, 9.496_676_077_872_745e17);
	}
	#[test]
	#[should_panic(expected = "Attempt to divide by zero")]
	fn div__zero() {
		let _ = UInt16::new(42).unwrap() / 0;
	}
	#[test]
	#[should_panic(expected = "Attempt to divide by zero")]
	fn div__reflected_zero() {
		let _ = 1 / UInt16::ZERO;
	}

	//		Mul
	#[test]
	fn mul() {
		let spam = UInt8::new(21).unwrap();
		assert_eq!(spam * 3,                      63);
		assert_eq!(spam * 16,                     0x50);
		assert_eq!(spam * UInt8::new(2).unwrap(), 42);
		assert_eq!(spam * 0.5,                    10.5);
		assert_eq!(spam * 2.0,                    42);
		assert_eq!(3_i64 * spam,                  63);
		assert_eq!(0.5 * spam,                    10.5);
	}
	#[test]
	#[should_panic(expected = "Attempt to multiply overflowed")]
	fn mul__reflected_overflow() {
		let _ = i128::MIN * UInt8::new(2).unwrap();
	}

	//		MulAssign
	#[test]
	fn mul_assign() {
		let mut spam = UInt8::new(21).unwrap();
		spam *= 16;
		assert_eq!(spam, 0x50);
		spam *= UInt8::new(4).unwrap();
		assert_eq!(spam, 0x40);
	}

	//		Neg
	#[test]
	fn neg() {
		let spam = UInt16::new(3).unwrap();
		let eggs: UInt16 = -spam;
		assert_eq!(eggs, UInt16::new(-3).unwrap());
		assert_eq!(eggs, 0xFFFD);
		assert_eq!(-UInt8::ZERO, 0);
		assert_eq!(-UInt64::ONE, u64::MAX);
	}

	//		Not
	#[test]
	fn not() {
		let spam = UInt16::new(3).unwrap();
		let eggs: UInt16 = !spam;
		assert_eq!(eggs, 0xFFFC);
		assert_eq!(eggs, UInt16::new(!3).unwrap());
		assert_eq!(!UInt8::new(21).unwrap(), 0xEA);
		assert_eq!(!UInt8_be::MAX, 0);
	}

	//		Product
	#[test]
	fn product() {
		let values = [UInt8::new(16).unwrap(), UInt8::new(16).unwrap(), UInt8::new(3).unwrap()];
		assert_eq!(values.iter().product::<UInt8>(),        0);
		assert_eq!(values[1..].iter().copied().product::<UInt8>(), 48);
		assert_eq!(core::iter::empty::<UInt8>().product::<UInt8>(), 1);
	}

	//		Rem
	#[test]
	fn rem() {
		let spam = UInt16::new(42).unwrap();
		assert_eq!(spam % 5,                      2);
		assert_eq!(spam % -5,                     UInt16::new(-3).unwrap());
		assert_eq!(spam % UInt8::new(4).unwrap(), 2);
		assert_ok_eq!(spam % 5.0,                 2);
		assert_err_eq!(spam % 1.5,                FixedIntError::integer_required());
		assert_eq!(-7_i8 % UInt8::new(3).unwrap(), 2);
	}
	#[test]
	#[should_panic(expected = "Attempt to divide by zero")]
	fn rem__zero() {
		let _ = UInt16::new(42).unwrap() % UInt8::ZERO;
	}

	//		RemAssign
	#[test]
	fn rem_assign() {
		let mut spam = UInt16::new(42).unwrap();
		spam %= 10;
		assert_eq!(spam, 2);
		spam %= UInt16::new(2).unwrap();
		assert_eq!(spam, 0);
	}

	//		Shl
	#[test]
	fn shl() {
		let spam = UInt8::new(21).unwrap();
		assert_eq!(spam << 1,                        42);
		assert_eq!(spam << 3,                        0xA8);
		assert_eq!(spam << 8,                        0);
		assert_eq!(spam << UInt8::new(2).unwrap(),   84);
		assert_ok_eq!(spam << 1.0,                   42);
		assert_err_eq!(spam << 1.5,                  FixedIntError::integer_required());
	}
	#[test]
	#[should_panic(expected = "Attempt to shift by a negative amount")]
	fn shl__negative() {
		let _ = UInt8::new(21).unwrap() << -1;
	}

	//		ShlAssign
	#[test]
	fn shl_assign() {
		let mut spam = UInt8::new(10).unwrap();
		spam <<= 3;
		assert_eq!(spam, 80);
		spam <<= 5;
		assert_eq!(spam, 0);
	}

	//		Shr
	#[test]
	fn shr() {
		let spam = UInt8::new(21).unwrap();
		assert_eq!(spam >> 1,                    10);
		assert_eq!(spam >> 8,                    0);
		assert_eq!(spam >> u64::MAX,             0);
		assert_eq!(UInt8::new(0xFD).unwrap() >> 1, 0x7E);
		assert_ok_eq!(spam >> 2.0,               5);
	}

	//		ShrAssign
	#[test]
	fn shr_assign() {
		let mut spam = UInt8::new(21).unwrap();
		spam >>= 1;
		assert_eq!(spam, 10);
		spam >>= UInt8::new(1).unwrap();
		assert_eq!(spam, 5);
	}

	//		Sub
	#[test]
	fn sub() {
		let spam = UInt8::new(5).unwrap();
		assert_eq!(spam - 6,                      255);
		assert_eq!(spam - UInt64::new(6).unwrap(), 255);
		assert_eq!(spam - 0.5,                    4.5);
		assert_eq!(spam - 1.0,                    4);
		assert_eq!(3_u32 - spam,                  -2);
		assert_eq!(5.5 - spam,                    0.5);
	}
	#[test]
	#[should_panic(expected = "Attempt to subtract overflowed")]
	fn sub__reflected_overflow() {
		let _ = i128::MIN - UInt8::new(1).unwrap();
	}

	//		SubAssign
	#[test]
	fn sub_assign() {
		let mut spam = UInt16::new(0).unwrap();
		spam -= 1;
		assert_eq!(spam, 0xFFFF);
		spam -= UInt8::new(0xFF).unwrap();
		assert_eq!(spam, 0xFF00);
	}

	//		Sum
	#[test]
	fn sum() {
		let values = [UInt8::new(200).unwrap(), UInt8::new(100).unwrap(), UInt8::new(1).unwrap()];
		assert_eq!(values.iter().sum::<UInt8>(),          45);
		assert_eq!(values.into_iter().sum::<UInt8>(),     45);
		assert_eq!(core::iter::empty::<UInt16_be>().sum::<UInt16_be>(), 0);
	}
}

mod scenarios {
	use super::*;

	//		Type preservation
	#[test]
	fn math_preserves_type() {
		let mut spam = UInt8::new(21).unwrap();
		spam >>= 1;
		spam |= 1;
		spam += 2;
		let typed: UInt8 = spam;
		assert_eq!(typed, 13);
	}

	//		Ordered promotion
	#[test]
	fn ordered_promotion() {
		let spam = UInt16::new(42).unwrap();
		let eggs: UInt16 = spam + 1;
		assert_eq!(eggs, 43);
		let eggs: i128 = 1 + spam;
		assert_eq!(eggs, 43);
	}

	//		Modular power
	#[test]
	fn modular_power() {
		let spam   = UInt32::new(0xDEAD_BEEF_u32).unwrap();
		let result = (0..17).fold(1_u128, |acc, _| acc * 0xDEAD_BEEF % (1 << 32));
		assert_eq!(spam.pow(17), u64::try_from(result).unwrap());
		assert_ok_eq!(spam.pow_mod(17, 2048), u64::try_from(result % 2048).unwrap());
		assert_ok_eq!(spam.powf(17),          u64::try_from(result).unwrap());
	}

	//		Shifts
	#[test]
	fn shifts() {
		let mut spam = UInt8::new(21).unwrap();
		assert_eq!(spam >> 1, 10);
		assert_eq!(spam << 1, 42);
		spam >>= 1;
		assert_eq!(spam, 10);
		spam <<= 3;
		assert_eq!(spam, 80);
		spam <<= 5;
		assert_eq!(spam, 0);
		assert_eq!(UInt8::new(21).unwrap() >> 8, 0);
	}

	//		Unary
	#[test]
	fn unary() {
		let spam = UInt16::new(3).unwrap();
		assert_eq!(-spam, UInt16::new(-3).unwrap());
		assert_eq!(-spam, 0xFFFD);
		assert_eq!(!spam, 0xFFFC);
		assert_eq!(!spam, UInt16_be::new(!3).unwrap());
		assert_eq!(-(-spam), spam);
	}
}
