//! Fixed point kernels for the transcendental functions.
//!
//! Every routine works on integers scaled by ten to `Context::digits`, the
//! caller converts its operands with a few guard digits and rounds the result back.

use num::{BigInt, Integer, Signed};
use num_traits::{One, Zero};

/// Square roots taken before the logarithm series.
const LN_ROOTS: usize = 10;
/// Halvings of the argument before the exponential series.
const EXP_HALVINGS: usize = 16;
/// Argument halvings before the arctangent series.
const ATAN_HALVINGS: usize = 8;

pub(super) fn ten_to(digits: u32) -> BigInt {
	num::pow(BigInt::from(10u8), digits as usize)
}

/// Number of decimal digits in the magnitude, zero has none.
pub(super) fn decimal_digits(value: &BigInt) -> u32 {
	if value.is_zero() {
		return 0;
	}
	let magnitude = value.abs();
	// Estimated from the bit length, never above the real count
	let estimate = ((magnitude.bits() - 1) as f64 * std::f64::consts::LOG10_2 - 1e-6).max(0.0);
	let mut digits = estimate as u32 + 1;
	while magnitude >= ten_to(digits) {
		digits += 1;
	}
	digits
}

/// Divides and rounds half away from zero.
pub(super) fn round_div(numerator: BigInt, denominator: &BigInt) -> BigInt {
	let (quotient, remainder) = numerator.div_rem(denominator);
	if remainder.abs() * 2u32 < denominator.abs() {
		return quotient;
	}
	match numerator.is_negative() == denominator.is_negative() {
		true => quotient + 1u32,
		false => quotient - 1u32,
	}
}

pub(super) struct Context {
	digits: u32,
	one: BigInt,
}

impl Context {
	pub fn new(digits: u32) -> Self {
		Self {
			digits,
			one: ten_to(digits),
		}
	}

	pub fn digits(&self) -> u32 {
		self.digits
	}

	pub fn one(&self) -> &BigInt {
		&self.one
	}

	pub fn mul(&self, lhs: &BigInt, rhs: &BigInt) -> BigInt {
		round_div(lhs * rhs, &self.one)
	}

	pub fn div(&self, lhs: &BigInt, rhs: &BigInt) -> BigInt {
		round_div(lhs * &self.one, rhs)
	}

	/// The value must not be negative.
	pub fn sqrt(&self, value: &BigInt) -> BigInt {
		(value * &self.one).sqrt()
	}

	/// Sum of 1 / ((2k + 1) n^(2k + 1)) with alternating signs, that is atan(1 / n).
	fn atan_inverse(&self, n: u32) -> BigInt {
		self.inverse_series(n, true)
	}

	/// Same series without the sign changes, atanh(1 / n).
	fn atanh_inverse(&self, n: u32) -> BigInt {
		self.inverse_series(n, false)
	}

	fn inverse_series(&self, n: u32, alternating: bool) -> BigInt {
		let square = n * n;
		let mut power = &self.one / n;
		let mut sum = power.clone();
		let mut k = 1u32;
		loop {
			power /= square;
			let term = &power / (2 * k + 1);
			if term.is_zero() {
				break;
			}
			match alternating && k % 2 == 1 {
				true => sum -= term,
				false => sum += term,
			}
			k += 1;
		}
		sum
	}

	/// Machin's formula.
	pub fn pi(&self) -> BigInt {
		self.atan_inverse(5) * 16u32 - self.atan_inverse(239) * 4u32
	}

	pub fn ln2(&self) -> BigInt {
		self.atanh_inverse(3) * 2u32
	}

	/// ln(10) = ln(8) + ln(1.25)
	pub fn ln10(&self) -> BigInt {
		self.ln2() * 3u32 + self.atanh_inverse(9) * 2u32
	}

	/// Meant for arguments around one in magnitude, the squarings lose digits on larger ones.
	pub fn exp(&self, value: &BigInt) -> BigInt {
		let reduced = round_div(value.clone(), &(BigInt::one() << EXP_HALVINGS));
		let mut sum = self.one.clone();
		let mut term = self.one.clone();
		let mut n = 1u32;
		loop {
			term = self.mul(&term, &reduced) / n;
			if term.is_zero() {
				break;
			}
			sum += &term;
			n += 1;
		}
		for _ in 0..EXP_HALVINGS {
			sum = self.mul(&sum, &sum);
		}
		sum
	}

	/// The value must be positive.
	pub fn ln(&self, value: &BigInt) -> BigInt {
		// Bring the value near one with a power of two, then with square roots
		let shift = value.bits() as i64 - self.one.bits() as i64;
		let mut reduced = match shift >= 0 {
			true => round_div(value.clone(), &(BigInt::one() << shift as usize)),
			false => value << (-shift) as usize,
		};
		for _ in 0..LN_ROOTS {
			reduced = self.sqrt(&reduced);
		}
		// ln(x) = 2 atanh((x - 1) / (x + 1))
		let ratio = self.div(&(&reduced - &self.one), &(&reduced + &self.one));
		let square = self.mul(&ratio, &ratio);
		let mut power = ratio.clone();
		let mut sum = ratio;
		let mut k = 1u32;
		loop {
			power = self.mul(&power, &square);
			let term = &power / (2 * k + 1);
			if term.is_zero() {
				break;
			}
			sum += term;
			k += 1;
		}
		(sum << (LN_ROOTS + 1)) + self.ln2() * shift
	}

	/// Reduces an angle to the range -pi..=pi.
	fn reduce_angle(&self, angle: &BigInt) -> BigInt {
		let turn = self.pi() * 2u32;
		let turns = round_div(angle.clone(), &turn);
		angle - turns * turn
	}

	pub fn sin(&self, angle: &BigInt) -> BigInt {
		let angle = self.reduce_angle(angle);
		self.trig_series(angle.clone(), &angle, 1)
	}

	pub fn cos(&self, angle: &BigInt) -> BigInt {
		let angle = self.reduce_angle(angle);
		self.trig_series(self.one.clone(), &angle, 0)
	}

	/// Taylor series of sine (offset 1) or cosine (offset 0).
	fn trig_series(&self, first: BigInt, angle: &BigInt, offset: u32) -> BigInt {
		let square = self.mul(angle, angle);
		let mut term = first;
		let mut sum = term.clone();
		let mut n = offset;
		loop {
			term = -self.mul(&term, &square) / ((n + 1) * (n + 2));
			n += 2;
			if term.is_zero() {
				break;
			}
			sum += &term;
		}
		sum
	}

	pub fn atan(&self, value: &BigInt) -> BigInt {
		if value.abs() > self.one {
			let half_pi = self.pi() / 2u32;
			let inverse = self.atan(&self.div(&self.one, value));
			return match value.is_negative() {
				true => -half_pi - inverse,
				false => half_pi - inverse,
			};
		}
		// atan(x) = 2 atan(x / (1 + sqrt(1 + x^2)))
		let mut value = value.clone();
		for _ in 0..ATAN_HALVINGS {
			let root = self.sqrt(&(&self.one + self.mul(&value, &value)));
			value = self.div(&value, &(&self.one + root));
		}
		let square = self.mul(&value, &value);
		let mut power = value.clone();
		let mut sum = value;
		let mut k = 1u32;
		loop {
			power = -self.mul(&power, &square);
			let term = &power / (2 * k + 1);
			if term.is_zero() {
				break;
			}
			sum += term;
			k += 1;
		}
		sum << ATAN_HALVINGS
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn context() -> Context {
		Context::new(60)
	}

	/// Compares the leading 50 fractional digits.
	fn assert_digits(value: BigInt, expected: &str) {
		let truncated = round_div(value, &ten_to(10));
		assert_eq!(truncated.to_string(), expected);
	}

	#[test]
	fn rounding_is_half_away_from_zero() {
		assert_eq!(round_div(BigInt::from(5), &BigInt::from(2)), BigInt::from(3));
		assert_eq!(round_div(BigInt::from(-5), &BigInt::from(2)), BigInt::from(-3));
		assert_eq!(round_div(BigInt::from(7), &BigInt::from(-3)), BigInt::from(-2));
		assert_eq!(round_div(BigInt::from(4), &BigInt::from(3)), BigInt::from(1));
	}

	#[test]
	fn constants() {
		let context = context();
		assert_digits(context.pi(), "314159265358979323846264338327950288419716939937511");
		assert_digits(context.ln2(), "69314718055994530941723212145817656807550013436026");
		assert_digits(context.ln10(), "230258509299404568401799145468436420760110148862877");
	}

	#[test]
	fn exp_of_one() {
		let context = context();
		let e = context.exp(context.one());
		assert_digits(e, "271828182845904523536028747135266249775724709369996");
	}

	#[test]
	fn ln_inverts_exp() {
		let context = context();
		let three = context.one() * 3u32;
		let e = context.exp(&three);
		assert_digits(context.ln(&e), "300000000000000000000000000000000000000000000000000");
	}

	#[test]
	fn atan_of_one_is_quarter_pi() {
		let context = context();
		assert_digits(context.atan(context.one()) * 4u32, "314159265358979323846264338327950288419716939937511");
	}

	#[test]
	fn digit_counts() {
		assert_eq!(decimal_digits(&BigInt::zero()), 0);
		assert_eq!(decimal_digits(&BigInt::from(9)), 1);
		assert_eq!(decimal_digits(&BigInt::from(-10)), 2);
		assert_eq!(decimal_digits(&ten_to(1000)), 1001);
		assert_eq!(decimal_digits(&(ten_to(1000) - 1u32)), 1000);
	}
}
