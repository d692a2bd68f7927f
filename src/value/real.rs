use std::{cmp::Ordering, fmt::Display, ops::{Add, Mul, Neg, Sub}, str::FromStr};

use num::{bigint::Sign, BigInt, Integer, Signed, ToPrimitive};
use num_traits::{One, Zero};

use crate::error::{EvalError, Result};

use super::power;

mod math;

use math::{decimal_digits, round_div, ten_to, Context};

/// Number of significant decimal digits every real is carried with.
pub const WORKING_PRECISION: u32 = 1000;
/// Magnitudes reach up to ten to this, anything below its reciprocal becomes zero.
pub const MAX_ORDER: i64 = 1_000_000;
/// Extra digits the transcendental functions compute with before rounding.
const GUARD_DIGITS: u32 = 24;
/// Arguments of exp from ten to this on leave the range whatever their digits.
const MAX_EXP_ORDER: i64 = 8;

/// A decimal floating point number, the significand times ten to the exponent.
///
/// The significand has at most `WORKING_PRECISION` digits and no trailing zeros, so every
/// value has exactly one representation. Zero has a zero exponent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Real {
	significand: BigInt,
	exponent: i64,
}

impl Real {
	/// Rounds to the working precision and strips trailing zeros.
	fn normalize(significand: BigInt, exponent: i64) -> Self {
		if significand.is_zero() {
			return Self::zero();
		}
		let digits = decimal_digits(&significand);
		let (mut significand, mut exponent) = match digits > WORKING_PRECISION {
			true => {
				let excess = digits - WORKING_PRECISION;
				(round_div(significand, &ten_to(excess)), exponent.saturating_add(excess as i64))
			}
			false => (significand, exponent),
		};
		let ten = BigInt::from(10u8);
		while significand.is_multiple_of(&ten) {
			significand /= 10u32;
			exponent = exponent.saturating_add(1);
		}
		Self { significand, exponent }
	}

	/// A fixed point integer scaled by ten to digits.
	fn from_fixed(value: BigInt, digits: u32) -> Self {
		Self::normalize(value, -(digits as i64))
	}

	pub fn zero() -> Self {
		Self { significand: BigInt::zero(), exponent: 0 }
	}

	pub fn is_zero(&self) -> bool {
		self.significand.is_zero()
	}

	pub fn is_negative(&self) -> bool {
		self.significand.is_negative()
	}

	/// The magnitude is below ten to the order and at least a tenth of it. Zero has none.
	fn order(&self) -> Option<i64> {
		match self.is_zero() {
			true => None,
			false => Some(self.exponent.saturating_add(decimal_digits(&self.significand) as i64)),
		}
	}

	/// Fails above the largest magnitude and flushes values below the smallest to zero.
	pub fn in_range(self) -> Result<Self> {
		match self.order() {
			Some(order) if order > MAX_ORDER => Err(EvalError::domain("Real number is out of range.")),
			Some(order) if order < -MAX_ORDER => Ok(Self::zero()),
			_ => Ok(self),
		}
	}

	/// Converts an integer, failing if it is beyond the range of reals.
	pub fn from_integer(value: BigInt) -> Result<Self> {
		Self::from(value).in_range()
	}

	/// Returns true if there are no fractional digits.
	pub fn is_integral(&self) -> bool {
		self.exponent >= 0
	}

	/// The integer part, rounded toward zero.
	pub fn trunc_to_integer(&self) -> BigInt {
		match (self.exponent >= 0, self.order()) {
			(true, _) => &self.significand * ten_to(self.exponent as u32),
			(false, Some(order)) if order > 0 => &self.significand / ten_to(self.exponent.unsigned_abs() as u32),
			(false, _) => BigInt::zero(),
		}
	}

	/// Digits left of the point.
	fn integer_digits(&self) -> u32 {
		match self.order() {
			Some(order) if order > 0 => order as u32,
			_ => 0,
		}
	}

	/// Zeros right of the point before the first significant digit.
	fn fraction_digits(&self) -> u32 {
		match self.order() {
			Some(order) if order < 0 => order.unsigned_abs() as u32,
			_ => 0,
		}
	}

	/// The value times ten to digits, rounded to an integer.
	fn fixed(&self, digits: u32) -> BigInt {
		let shift = self.exponent.saturating_add(digits as i64);
		match shift >= 0 {
			true => &self.significand * ten_to(shift as u32),
			// Less than a tenth of a unit after scaling
			false if shift.unsigned_abs() > decimal_digits(&self.significand) as u64 => BigInt::zero(),
			false => round_div(self.significand.clone(), &ten_to(shift.unsigned_abs() as u32)),
		}
	}

	/// The significand rescaled to an exponent at or below its own.
	fn aligned(&self, exponent: i64) -> BigInt {
		&self.significand * ten_to((self.exponent - exponent) as u32)
	}

	pub fn abs(&self) -> Self {
		Self { significand: self.significand.abs(), exponent: self.exponent }
	}

	pub fn floor(&self) -> Self {
		if self.is_integral() {
			return self.clone();
		}
		let truncated = Self::from(self.trunc_to_integer());
		match self.is_negative() {
			true => truncated - Self::one(),
			false => truncated,
		}
	}

	pub fn ceil(&self) -> Self {
		-(-self.clone()).floor()
	}

	pub fn checked_add(&self, rhs: &Self) -> Result<Self> {
		(self.clone() + rhs.clone()).in_range()
	}

	pub fn checked_sub(&self, rhs: &Self) -> Result<Self> {
		(self.clone() - rhs.clone()).in_range()
	}

	pub fn checked_mul(&self, rhs: &Self) -> Result<Self> {
		(self.clone() * rhs.clone()).in_range()
	}

	pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
		if rhs.is_zero() {
			return Err(EvalError::domain("Division by zero."));
		}
		// Two digits past the working precision before the final rounding
		let shift = WORKING_PRECISION + 2 + decimal_digits(&rhs.significand) - decimal_digits(&self.significand);
		let quotient = round_div(&self.significand * ten_to(shift), &rhs.significand);
		let exponent = self.exponent.saturating_sub(rhs.exponent).saturating_sub(shift as i64);
		Self::normalize(quotient, exponent).in_range()
	}

	/// self - trunc(self / rhs) * rhs
	pub fn checked_rem(&self, rhs: &Self) -> Result<Self> {
		if rhs.is_zero() {
			return Err(EvalError::domain("Modulus by zero."));
		}
		if self.abs() < rhs.abs() {
			return Ok(self.clone());
		}
		let exponent = self.exponent.min(rhs.exponent);
		Self::normalize(self.aligned(exponent) % rhs.aligned(exponent), exponent).in_range()
	}

	/// Runs a kernel with guard and extra digits and rounds its fixed point result.
	fn computed(extra_digits: u32, kernel: impl FnOnce(&Context) -> BigInt) -> Self {
		let context = Context::new(WORKING_PRECISION + GUARD_DIGITS + extra_digits);
		Self::from_fixed(kernel(&context), context.digits())
	}

	pub fn pi() -> Self {
		Self::computed(0, |context| context.pi())
	}

	fn half_pi() -> Self {
		Self::computed(0, |context| context.pi() / 2u32)
	}

	pub fn e() -> Self {
		Self::computed(0, |context| context.exp(context.one()))
	}

	/// True where x^2 no longer shows against x at the working precision, so sin, tan and atan return x.
	fn is_negligible_square(&self) -> bool {
		match self.order() {
			None => true,
			Some(order) => order < -(WORKING_PRECISION as i64 / 2 + 2),
		}
	}

	/// Digits an angle spends on its whole turns.
	fn angle_digits(&self) -> Result<u32> {
		match self.integer_digits() > WORKING_PRECISION {
			true => Err(EvalError::domain(format!("Angle {} is too large.", self.abbreviated()))),
			false => Ok(self.integer_digits()),
		}
	}

	pub fn sqrt(&self) -> Result<Self> {
		if self.is_negative() {
			return Err(EvalError::domain(format!("Square root of negative number {}.", self.abbreviated())));
		}
		if self.is_zero() {
			return Ok(Self::zero());
		}
		// Twice the digits wanted under the root, over an even power of ten
		let mut shift = 2 * (WORKING_PRECISION + GUARD_DIGITS) - decimal_digits(&self.significand);
		if (self.exponent - shift as i64) % 2 != 0 {
			shift += 1;
		}
		let root = (&self.significand * ten_to(shift)).sqrt();
		Ok(Self::normalize(root, (self.exponent - shift as i64) / 2))
	}

	pub fn exp(&self) -> Result<Self> {
		if self.order().is_some_and(|order| order > MAX_EXP_ORDER) {
			return match self.is_negative() {
				true => Ok(Self::zero()),
				false => Err(EvalError::domain(format!("Exponential of {} is out of range.", self.abbreviated()))),
			};
		}
		Self::exponential(self.integer_digits(), |context| self.fixed(context.digits()))
	}

	/// e to a fixed point argument, split as k ln(10) + r so that k becomes the decimal exponent.
	fn exponential(extra_digits: u32, argument: impl FnOnce(&Context) -> BigInt) -> Result<Self> {
		let context = Context::new(WORKING_PRECISION + GUARD_DIGITS + extra_digits);
		let value = argument(&context);
		let ln10 = context.ln10();
		let decimal_exponent = round_div(value.clone(), &ln10);
		let decimal_exponent = match decimal_exponent.to_i64().filter(|exponent| exponent.abs() <= MAX_ORDER + 1) {
			Some(exponent) => exponent,
			None if decimal_exponent.is_negative() => return Ok(Self::zero()),
			None => return Err(EvalError::domain("Exponential is out of range.")),
		};
		let reduced = value - &ln10 * decimal_exponent;
		let exponent = decimal_exponent - context.digits() as i64;
		Self::normalize(context.exp(&reduced), exponent).in_range()
	}

	fn require_positive(&self, operation: &str) -> Result<()> {
		match self.is_negative() || self.is_zero() {
			true => Err(EvalError::domain(format!("{operation} of non-positive number {}.", self.abbreviated()))),
			false => Ok(()),
		}
	}

	/// ln(self) in the context's fixed point. The value must be positive.
	fn ln_fixed(&self, context: &Context) -> BigInt {
		// self = m 10^order with m in [0.1, 1)
		let digits = decimal_digits(&self.significand);
		let mantissa = &self.significand * ten_to(context.digits() - digits);
		let order = self.exponent + digits as i64;
		context.ln(&mantissa) + context.ln10() * order
	}

	/// ln(self) / ln(base), where the kernel gives ln(base).
	fn logarithm(&self, base: fn(&Context) -> BigInt) -> Result<Self> {
		self.require_positive("Logarithm")?;
		// Logarithms of values near one are near zero
		let extra_digits = (self.clone() - Self::one()).fraction_digits();
		Ok(Self::computed(extra_digits, |context| context.div(&self.ln_fixed(context), &base(context))))
	}

	/// Natural logarithm.
	pub fn ln(&self) -> Result<Self> {
		self.logarithm(|context| context.one().clone())
	}

	/// Binary logarithm.
	pub fn lb(&self) -> Result<Self> {
		self.logarithm(Context::ln2)
	}

	/// Decimal logarithm.
	pub fn log(&self) -> Result<Self> {
		self.logarithm(Context::ln10)
	}

	pub fn sin(&self) -> Result<Self> {
		if self.is_negligible_square() {
			return Ok(self.clone());
		}
		let extra_digits = self.angle_digits()? + self.fraction_digits();
		Ok(Self::computed(extra_digits, |context| context.sin(&self.fixed(context.digits()))))
	}

	pub fn cos(&self) -> Result<Self> {
		let extra_digits = self.angle_digits()?;
		Ok(Self::computed(extra_digits, |context| context.cos(&self.fixed(context.digits()))))
	}

	pub fn tan(&self) -> Result<Self> {
		if self.is_negligible_square() {
			return Ok(self.clone());
		}
		let extra_digits = self.angle_digits()? + self.fraction_digits();
		let context = Context::new(WORKING_PRECISION + GUARD_DIGITS + extra_digits);
		let angle = self.fixed(context.digits());
		let cosine = context.cos(&angle);
		if round_div(cosine.clone(), &ten_to(GUARD_DIGITS + extra_digits)).is_zero() {
			return Err(EvalError::domain(format!("Tangent is undefined at {}.", self.abbreviated())));
		}
		Ok(Self::from_fixed(context.div(&context.sin(&angle), &cosine), context.digits()))
	}

	pub fn arctan(&self) -> Result<Self> {
		if self.is_negligible_square() {
			return Ok(self.clone());
		}
		// The reciprocal no longer shows next to pi / 2
		if self.order().is_some_and(|order| order > WORKING_PRECISION as i64 + 2) {
			return Ok(match self.is_negative() {
				true => -Self::half_pi(),
				false => Self::half_pi(),
			});
		}
		Ok(Self::computed(self.fraction_digits(), |context| context.atan(&self.fixed(context.digits()))))
	}

	/// sqrt(1 - x^2), the other leg of the triangle arcsin and arccos work on.
	fn complement(&self) -> Result<Self> {
		if self.abs() > Self::one() {
			return Err(EvalError::domain(format!("Inverse sine or cosine of {} is undefined.", self.abbreviated())));
		}
		((Self::one() - self.clone()) * (Self::one() + self.clone())).sqrt()
	}

	pub fn arcsin(&self) -> Result<Self> {
		self.arctan2(&self.complement()?)
	}

	pub fn arccos(&self) -> Result<Self> {
		self.complement()?.arctan2(self)
	}

	/// Angle of the point (x, y) where self is the ordinate y, in -pi..=pi.
	pub fn arctan2(&self, x: &Self) -> Result<Self> {
		let y = self;
		if x.is_zero() {
			return Ok(match y.significand.sign() {
				Sign::Plus => Self::half_pi(),
				Sign::Minus => -Self::half_pi(),
				Sign::NoSign => Self::zero(),
			});
		}
		// Steep angles go through the reciprocal slope
		if y.abs() > x.abs() {
			let angle = x.checked_div(y)?.arctan()?;
			return Ok(match y.is_negative() {
				true => -Self::half_pi() - angle,
				false => Self::half_pi() - angle,
			});
		}
		let angle = y.checked_div(x)?.arctan()?;
		Ok(match (x.is_negative(), y.is_negative()) {
			(false, _) => angle,
			(true, false) => angle + Self::pi(),
			(true, true) => angle - Self::pi(),
		})
	}

	/// Integral exponents use repeated multiplication or squaring, others go through exp(e * ln(b)).
	pub fn power(&self, exponent: &Self) -> Result<Self> {
		if exponent.is_integral() {
			return self.integral_power(exponent);
		}
		if self.is_zero() {
			return match exponent.is_negative() {
				true => Err(EvalError::domain("Zero cannot be raised to a negative power.")),
				false => Ok(Self::zero()),
			};
		}
		if self.is_negative() {
			return Err(EvalError::domain(format!(
				"Negative base {} cannot be raised to a fractional exponent.", self.abbreviated()
			)));
		}
		// |ln(b)| stays below 2.31 (|order| + 1), the product needs its integer digits on top
		let order = self.order().unwrap_or(0).unsigned_abs();
		let logarithm_digits = decimal_digits(&BigInt::from(3 * (order + 1)));
		let extra_digits = exponent.integer_digits() + logarithm_digits;
		Self::exponential(extra_digits, |context| {
			context.mul(&self.ln_fixed(context), &exponent.fixed(context.digits()))
		})
	}

	fn integral_power(&self, exponent: &Self) -> Result<Self> {
		// Trailing zeros are stripped, so a positive exponent field means an even number
		let is_odd = exponent.exponent == 0 && exponent.significand.is_odd();
		if self.is_zero() || self.abs() == Self::one() {
			return match (self.is_zero(), exponent.is_negative()) {
				(true, true) => Err(EvalError::domain("Zero cannot be raised to a negative power.")),
				(true, false) if !exponent.is_zero() => Ok(Self::zero()),
				(false, _) if self.is_negative() && is_odd => Ok(-Self::one()),
				_ => Ok(Self::one()),
			};
		}
		// No base other than 0, 1 and -1 stays in range this long
		if exponent.order().is_some_and(|order| order > WORKING_PRECISION as i64 + 10) {
			return match (self.abs() > Self::one()) == exponent.is_negative() {
				true => Ok(Self::zero()),
				false => Err(EvalError::domain("Real power is out of range.")),
			};
		}
		let count = exponent.trunc_to_integer();
		let raised = power::power(self, &count.abs());
		match count.is_negative() {
			true => Self::one().checked_div(&raised),
			false => raised.in_range(),
		}
	}

	/// Short rendering for messages and token listings, scientific far from one.
	pub fn abbreviated(&self) -> String {
		let order = match self.order() {
			Some(order) => order,
			None => return "0".to_string(),
		};
		if (-8..=40).contains(&order) {
			let rendered = self.to_string();
			let trimmed = rendered.trim_end_matches('0').trim_end_matches('.');
			return match trimmed.len() > 40 {
				true => format!("{}...", &trimmed[..40]),
				false => trimmed.to_string(),
			};
		}
		let digits = self.significand.abs().to_string();
		let (lead, rest) = digits.split_at(1);
		let sign = match self.is_negative() {
			true => "-",
			false => "",
		};
		let rest = match rest.len() {
			0 => String::new(),
			1..=20 => format!(".{rest}"),
			_ => format!(".{}...", &rest[..20]),
		};
		format!("{sign}{lead}{rest}e{}", order - 1)
	}
}

impl From<BigInt> for Real {
	fn from(value: BigInt) -> Self {
		Self::normalize(value, 0)
	}
}

impl From<i64> for Real {
	fn from(value: i64) -> Self {
		BigInt::from(value).into()
	}
}

impl Add for Real {
	type Output = Self;

	fn add(self, rhs: Self) -> Self {
		let (left, right) = match (self.order(), rhs.order()) {
			(None, _) => return rhs,
			(_, None) => return self,
			(Some(left), Some(right)) => (left, right),
		};
		// An operand this far below the other cannot move the rounded sum
		let negligible = WORKING_PRECISION as i64 + 1;
		if left.saturating_sub(right) > negligible {
			return self;
		}
		if right.saturating_sub(left) > negligible {
			return rhs;
		}
		let exponent = self.exponent.min(rhs.exponent);
		Self::normalize(self.aligned(exponent) + rhs.aligned(exponent), exponent)
	}
}

impl Sub for Real {
	type Output = Self;

	fn sub(self, rhs: Self) -> Self {
		self + -rhs
	}
}

impl Mul for Real {
	type Output = Self;

	fn mul(self, rhs: Self) -> Self {
		Self::normalize(self.significand * rhs.significand, self.exponent.saturating_add(rhs.exponent))
	}
}

impl Neg for Real {
	type Output = Self;

	fn neg(self) -> Self {
		Self { significand: -self.significand, exponent: self.exponent }
	}
}

impl One for Real {
	fn one() -> Self {
		Self { significand: BigInt::one(), exponent: 0 }
	}
}

impl Ord for Real {
	fn cmp(&self, other: &Self) -> Ordering {
		match (self.clone() - other.clone()).significand.sign() {
			Sign::Minus => Ordering::Less,
			Sign::NoSign => Ordering::Equal,
			Sign::Plus => Ordering::Greater,
		}
	}
}

impl PartialOrd for Real {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl FromStr for Real {
	type Err = EvalError;

	/// Parses decimal literals such as "12", "3.25", ".5" and "6.02e23".
	fn from_str(text: &str) -> Result<Self> {
		let unknown = || EvalError::UnknownToken(text.to_string());
		let out_of_range = || EvalError::domain(format!("Real literal {text} is out of range."));
		let (digits, exponent) = match text.find(|chr: char| chr == 'e' || chr == 'E') {
			Some(index) => {
				let exponent = &text[index + 1..];
				let magnitude = exponent.trim_start_matches(['+', '-']);
				let is_numeric = !magnitude.is_empty() && magnitude.chars().all(|chr| chr.is_ascii_digit());
				match exponent.parse::<i64>() {
					Ok(exponent) => (&text[..index], exponent),
					Err(_) if is_numeric => return Err(out_of_range()),
					Err(_) => return Err(unknown()),
				}
			}
			None => (text, 0),
		};
		let (integer_part, fraction_part) = digits.split_once('.').unwrap_or((digits, ""));
		let all_digits = format!("{integer_part}{fraction_part}");
		if all_digits.is_empty() || !all_digits.chars().all(|chr| chr.is_ascii_digit()) {
			return Err(unknown());
		}
		let value: BigInt = all_digits.parse().map_err(|_| unknown())?;
		let real = Self::normalize(value, exponent.saturating_sub(fraction_part.len() as i64));
		// Literals outside the range fail instead of flushing to zero
		match real.order() {
			Some(order) if !(-MAX_ORDER..=MAX_ORDER).contains(&order) => Err(out_of_range()),
			_ => Ok(real),
		}
	}
}

impl Display for Real {
	/// Fixed notation with as many fractional digits as the working precision.
	fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let scaled = self.fixed(WORKING_PRECISION);
		let (integer, fraction) = scaled.abs().div_rem(&ten_to(WORKING_PRECISION));
		let sign = match scaled.is_negative() {
			true => "-",
			false => "",
		};
		let fraction = fraction.to_string();
		write!(formatter, "{sign}{integer}.{fraction:0>width$}", width = WORKING_PRECISION as usize)
	}
}
