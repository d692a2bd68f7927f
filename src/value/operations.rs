//! Arithmetic, comparison, logic and the mathematical functions on values.
//!
//! Two integers stay integers, any other pair of numbers is promoted to reals.
//! Booleans only take part in logic and in comparisons against other booleans.

use std::cmp::Ordering;

use num::{BigInt, Signed};

use crate::error::{EvalError, Result};

use super::{integer, real::Real, Value};

/// A pair of numeric operands after promotion.
enum Promoted {
	Integers(BigInt, BigInt),
	Reals(Real, Real),
}

fn promote(lhs: Value, rhs: Value, operation: &'static str) -> Result<Promoted> {
	Ok(match (lhs.dereference()?, rhs.dereference()?) {
		(Value::Integer(left), Value::Integer(right)) => Promoted::Integers(left, right),
		(left, right) => Promoted::Reals(left.into_real(operation)?, right.into_real(operation)?),
	})
}

impl Value {
	pub fn add(self, rhs: Self) -> Result<Self> {
		Ok(match promote(self, rhs, "Addition")? {
			Promoted::Integers(left, right) => Self::Integer(left + right),
			Promoted::Reals(left, right) => Self::Real(left.checked_add(&right)?),
		})
	}

	pub fn sub(self, rhs: Self) -> Result<Self> {
		Ok(match promote(self, rhs, "Subtraction")? {
			Promoted::Integers(left, right) => Self::Integer(left - right),
			Promoted::Reals(left, right) => Self::Real(left.checked_sub(&right)?),
		})
	}

	pub fn mul(self, rhs: Self) -> Result<Self> {
		Ok(match promote(self, rhs, "Multiplication")? {
			Promoted::Integers(left, right) => Self::Integer(left * right),
			Promoted::Reals(left, right) => Self::Real(left.checked_mul(&right)?),
		})
	}

	pub fn div(self, rhs: Self) -> Result<Self> {
		Ok(match promote(self, rhs, "Division")? {
			Promoted::Integers(left, right) => Self::Integer(integer::truncated_div(&left, &right)?),
			Promoted::Reals(left, right) => Self::Real(left.checked_div(&right)?),
		})
	}

	pub fn modulus(self, rhs: Self) -> Result<Self> {
		Ok(match promote(self, rhs, "Modulus")? {
			Promoted::Integers(left, right) => Self::Integer(integer::truncated_rem(&left, &right)?),
			Promoted::Reals(left, right) => Self::Real(left.checked_rem(&right)?),
		})
	}

	/// Integer powers with a non-negative exponent stay exact, everything else is computed on reals.
	pub fn power(self, exponent: Self) -> Result<Self> {
		Ok(match promote(self, exponent, "Power")? {
			Promoted::Integers(base, exponent) if !exponent.is_negative() => Self::Integer(integer::checked_power(&base, &exponent)?),
			Promoted::Integers(base, exponent) => Self::Real(Real::from_integer(base)?.power(&Real::from_integer(exponent)?)?),
			Promoted::Reals(base, exponent) => Self::Real(base.power(&exponent)?),
		})
	}

	pub fn identity(self) -> Result<Self> {
		Ok(match self.dereference()? {
			value @ (Self::Integer(_) | Self::Real(_)) => value,
			other => return Err(EvalError::TypeMismatch { operation: "Identity", kind: other.kind() }),
		})
	}

	pub fn negate(self) -> Result<Self> {
		Ok(match self.dereference()? {
			Self::Integer(value) => Self::Integer(-value),
			Self::Real(value) => Self::Real(-value),
			other => return Err(EvalError::TypeMismatch { operation: "Negation", kind: other.kind() }),
		})
	}

	pub fn factorial(self) -> Result<Self> {
		match self.dereference()? {
			Self::Integer(value) => Ok(Self::Integer(integer::factorial(&value)?)),
			other => Err(EvalError::TypeMismatch { operation: "Factorial", kind: other.kind() }),
		}
	}

	/// Stores the dereferenced value in the target variable and returns the target.
	pub fn assign(self, value: Self) -> Result<Self> {
		match self {
			Self::Variable(variable) => {
				variable.bind(value.dereference()?);
				Ok(Self::Variable(variable))
			}
			other => Err(EvalError::InvalidAssignmentTarget(other.to_string())),
		}
	}

	/// Orders two numbers or two booleans.
	pub fn compare(self, rhs: Self, operation: &'static str) -> Result<Ordering> {
		match (self.dereference()?, rhs.dereference()?) {
			(Self::Boolean(left), Self::Boolean(right)) => Ok(left.cmp(&right)),
			(Self::Boolean(_), _) | (_, Self::Boolean(_)) => Err(EvalError::TypeMismatch { operation, kind: super::ValueKind::Boolean }),
			(left, right) => Ok(match promote(left, right, operation)? {
				Promoted::Integers(left, right) => left.cmp(&right),
				Promoted::Reals(left, right) => left.cmp(&right),
			}),
		}
	}

	pub fn equal(self, rhs: Self) -> Result<Self> {
		Ok(Self::Boolean(self.compare(rhs, "Equality")?.is_eq()))
	}

	pub fn not_equal(self, rhs: Self) -> Result<Self> {
		Ok(Self::Boolean(self.compare(rhs, "Inequality")?.is_ne()))
	}

	pub fn less(self, rhs: Self) -> Result<Self> {
		Ok(Self::Boolean(self.compare(rhs, "Less")?.is_lt()))
	}

	pub fn less_equal(self, rhs: Self) -> Result<Self> {
		Ok(Self::Boolean(self.compare(rhs, "LessEqual")?.is_le()))
	}

	pub fn greater(self, rhs: Self) -> Result<Self> {
		Ok(Self::Boolean(self.compare(rhs, "Greater")?.is_gt()))
	}

	pub fn greater_equal(self, rhs: Self) -> Result<Self> {
		Ok(Self::Boolean(self.compare(rhs, "GreaterEqual")?.is_ge()))
	}

	pub fn not(self) -> Result<Self> {
		Ok(Self::Boolean(!self.into_boolean("Not")?))
	}

	/// Applies a truth function to two boolean operands.
	pub fn logic(self, rhs: Self, operation: &'static str, function: fn(bool, bool) -> bool) -> Result<Self> {
		let left = self.into_boolean(operation)?;
		let right = rhs.into_boolean(operation)?;
		Ok(Self::Boolean(function(left, right)))
	}

	pub fn abs(self) -> Result<Self> {
		Ok(match self.dereference()? {
			Self::Integer(value) => Self::Integer(value.abs()),
			Self::Real(value) => Self::Real(value.abs()),
			other => return Err(EvalError::TypeMismatch { operation: "Abs", kind: other.kind() }),
		})
	}

	pub fn floor(self) -> Result<Self> {
		Ok(match self.dereference()? {
			Self::Integer(value) => Self::Integer(value),
			Self::Real(value) => Self::Real(value.floor()),
			other => return Err(EvalError::TypeMismatch { operation: "Floor", kind: other.kind() }),
		})
	}

	pub fn ceil(self) -> Result<Self> {
		Ok(match self.dereference()? {
			Self::Integer(value) => Self::Integer(value),
			Self::Real(value) => Self::Real(value.ceil()),
			other => return Err(EvalError::TypeMismatch { operation: "Ceil", kind: other.kind() }),
		})
	}

	pub fn min(self, rhs: Self) -> Result<Self> {
		Ok(match promote(self, rhs, "Min")? {
			Promoted::Integers(left, right) => Self::Integer(left.min(right)),
			Promoted::Reals(left, right) => Self::Real(left.min(right)),
		})
	}

	pub fn max(self, rhs: Self) -> Result<Self> {
		Ok(match promote(self, rhs, "Max")? {
			Promoted::Integers(left, right) => Self::Integer(left.max(right)),
			Promoted::Reals(left, right) => Self::Real(left.max(right)),
		})
	}

	/// Runs a real valued function after promoting the operand.
	pub fn real_function(self, operation: &'static str, function: fn(&Real) -> Result<Real>) -> Result<Self> {
		let operand = self.into_real(operation)?;
		Ok(Self::Real(function(&operand)?))
	}

	/// Angle of the point (x, y), self is the ordinate y.
	pub fn arctan2(self, x: Self) -> Result<Self> {
		let y = self.into_real("Arctan2")?;
		let x = x.into_real("Arctan2")?;
		Ok(Self::Real(y.arctan2(&x)?))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{error::ErrorKind, value::{Variable, ValueKind}};

	fn real(text: &str) -> Value {
		Value::Real(text.parse().unwrap())
	}

	#[test]
	fn integers_stay_integers() {
		assert_eq!(Value::from(2).add(Value::from(3)).unwrap(), Value::from(5));
		assert_eq!(Value::from(7).div(Value::from(2)).unwrap(), Value::from(3));
		assert_eq!(Value::from(-7).modulus(Value::from(3)).unwrap(), Value::from(-1));
	}

	#[test]
	fn mixed_operands_promote() {
		assert_eq!(Value::from(2).add(real("3.5")).unwrap(), real("5.5"));
		assert_eq!(real("1.5").mul(Value::from(2)).unwrap(), real("3"));
		assert_eq!(Value::from(1).div(real("4")).unwrap(), real("0.25"));
	}

	#[test]
	fn division_by_zero() {
		assert_eq!(Value::from(1).div(Value::from(0)).unwrap_err().kind(), ErrorKind::DomainError);
		assert_eq!(real("1").modulus(real("0")).unwrap_err().kind(), ErrorKind::DomainError);
	}

	#[test]
	fn powers() {
		assert_eq!(Value::from(2).power(Value::from(10)).unwrap(), Value::from(1024));
		assert_eq!(Value::from(2).power(Value::from(-1)).unwrap(), real("0.5"));
		assert_eq!(real("2").power(Value::from(3)).unwrap(), real("8"));
		assert_eq!(Value::from(-8).power(real("0.5")).unwrap_err().kind(), ErrorKind::DomainError);
	}

	#[test]
	fn results_beyond_the_real_range() {
		assert_eq!(real("9e999999").mul(Value::from(10)).unwrap_err().kind(), ErrorKind::DomainError);
		assert_eq!(real("9e999999").add(real("9e999999")).unwrap_err().kind(), ErrorKind::DomainError);
		assert_eq!(real("1e-999999").div(Value::from(100)).unwrap(), real("0"));
		assert_eq!(Value::from(2).power(Value::from(1_000_000_000_000_000_000i64)).unwrap_err().kind(), ErrorKind::DomainError);
		assert_eq!(Value::from(-1).power(Value::from(1_000_000_000_000_000_001i64)).unwrap(), Value::from(-1));
	}

	#[test]
	fn comparisons() {
		assert_eq!(Value::from(2).less(real("2.5")).unwrap(), Value::from(true));
		assert_eq!(Value::from(2).equal(real("2")).unwrap(), Value::from(true));
		assert_eq!(Value::from(true).greater(Value::from(false)).unwrap(), Value::from(true));
		let error = Value::from(true).equal(Value::from(1)).unwrap_err();
		assert_eq!(error, EvalError::TypeMismatch { operation: "Equality", kind: ValueKind::Boolean });
	}

	#[test]
	fn logic_needs_booleans() {
		assert_eq!(Value::from(true).logic(Value::from(false), "Xor", |l, r| l ^ r).unwrap(), Value::from(true));
		assert_eq!(Value::from(false).not().unwrap(), Value::from(true));
		assert_eq!(Value::from(1).logic(Value::from(true), "And", |l, r| l && r).unwrap_err().kind(), ErrorKind::TypeMismatch);
	}

	#[test]
	fn unary_operations() {
		assert_eq!(Value::from(5).negate().unwrap(), Value::from(-5));
		assert_eq!(real("-2.5").abs().unwrap(), real("2.5"));
		assert_eq!(real("2.5").floor().unwrap(), real("2"));
		assert_eq!(Value::from(4).factorial().unwrap(), Value::from(24));
		assert_eq!(real("4").factorial().unwrap_err().kind(), ErrorKind::TypeMismatch);
		assert_eq!(Value::from(true).negate().unwrap_err().kind(), ErrorKind::TypeMismatch);
	}

	#[test]
	fn assignment() {
		let variable = Variable::new("x");
		let result = Value::Variable(variable.clone()).assign(Value::from(5)).unwrap();
		assert_eq!(result.dereference().unwrap(), Value::from(5));
		assert_eq!(variable.value().unwrap(), Value::from(5));
		assert_eq!(Value::from(1).assign(Value::from(5)).unwrap_err().kind(), ErrorKind::InvalidAssignmentTarget);
	}

	#[test]
	fn min_and_max() {
		assert_eq!(Value::from(3).min(Value::from(-1)).unwrap(), Value::from(-1));
		assert_eq!(Value::from(3).max(real("3.5")).unwrap(), real("3.5"));
	}
}
