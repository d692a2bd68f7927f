use num::{BigInt, Integer, Signed, ToPrimitive};
use num_traits::{One, Zero};

use crate::error::{EvalError, Result};

use super::power;

/// Largest result, in bits, an integer power may produce.
const MAX_POWER_BITS: u64 = 1 << 22;
/// Largest argument of the factorial.
const MAX_FACTORIAL: u32 = 100_000;

/// Truncating integer division, the quotient rounds toward zero.
pub fn truncated_div(lhs: &BigInt, rhs: &BigInt) -> Result<BigInt> {
	match rhs.is_zero() {
		true => Err(EvalError::domain("Division by zero.")),
		false => Ok(lhs / rhs),
	}
}

/// Remainder of truncating division, takes the sign of the dividend.
pub fn truncated_rem(lhs: &BigInt, rhs: &BigInt) -> Result<BigInt> {
	match rhs.is_zero() {
		true => Err(EvalError::domain("Modulus by zero.")),
		false => Ok(lhs % rhs),
	}
}

/// Raises base to a non-negative exponent, failing when the result would be too large to hold.
pub fn checked_power(base: &BigInt, exponent: &BigInt) -> Result<BigInt> {
	let bits = base.bits();
	// 0, 1 and -1 only depend on the parity
	if bits <= 1 {
		let reduced = match (exponent.is_zero(), exponent.is_odd()) {
			(true, _) => BigInt::zero(),
			(false, true) => BigInt::one(),
			(false, false) => BigInt::from(2u8),
		};
		return Ok(power::power(base, &reduced));
	}
	let fits = exponent
		.to_u64()
		.and_then(|exponent| exponent.checked_mul(bits - 1))
		.is_some_and(|result_bits| result_bits <= MAX_POWER_BITS);
	match fits {
		true => Ok(power::power(base, exponent)),
		false => Err(EvalError::domain(format!("{base} to the power of {exponent} is too large."))),
	}
}

pub fn factorial(value: &BigInt) -> Result<BigInt> {
	if value.is_negative() {
		return Err(EvalError::domain(format!("Factorial of negative number {value}.")));
	}
	if *value > BigInt::from(MAX_FACTORIAL) {
		return Err(EvalError::domain(format!("Factorial of {value} is too large.")));
	}
	let mut product = BigInt::one();
	let mut counter = BigInt::from(2u32);
	while counter <= *value {
		product *= &counter;
		counter += 1u32;
	}
	Ok(product)
}
