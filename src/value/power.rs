use num::{BigInt, Integer};
use num_traits::{One, Zero};

/// Exponents up to and including this use repeated multiplication, larger ones use squaring.
pub const SQUARING_THRESHOLD: u32 = 8;

/// Raises base to a non-negative exponent, picking the algorithm by the size of the exponent.
pub fn power<T: Clone + One>(base: &T, exponent: &BigInt) -> T {
	match *exponent <= BigInt::from(SQUARING_THRESHOLD) {
		true => simple_power(base, exponent),
		false => fast_power(base, exponent),
	}
}

/// Multiplies base into an accumulator exponent times.
pub fn simple_power<T: Clone + One>(base: &T, exponent: &BigInt) -> T {
	let mut product = T::one();
	let mut counter = BigInt::zero();
	while counter < *exponent {
		product = product * base.clone();
		counter += 1u32;
	}
	product
}

/// Exponentiation by recursive squaring.
/// The exponent must not be negative.
pub fn fast_power<T: Clone + One>(base: &T, exponent: &BigInt) -> T {
	if exponent.is_zero() {
		return T::one();
	}
	let half = fast_power(base, &(exponent / 2u32));
	let square = half.clone() * half;
	match exponent.is_even() {
		true => square,
		false => square * base.clone(),
	}
}
