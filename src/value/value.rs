use std::fmt;

use num::BigInt;
use strum_macros::{Display, EnumDiscriminants};

use crate::error::{EvalError, Result};

use super::{real::Real, variable::Variable};

#[derive(Debug, Clone, EnumDiscriminants)]
#[strum_discriminants(name(ValueKind), derive(Display, Hash))]
pub enum Value {
	/// An integer of any magnitude
	Integer(BigInt),
	/// A decimal carried at the working precision
	Real(Real),
	Boolean(bool),
	/// A reference to a named slot in the variable table
	Variable(Variable),
}

impl Value {
	pub fn kind(&self) -> ValueKind {
		self.into()
	}

	/// Replaces a variable with its bound value, other values are returned unchanged.
	pub fn dereference(self) -> Result<Self> {
		match self {
			Self::Variable(variable) => variable.value()?.dereference(),
			other => Ok(other),
		}
	}

	/// Converts a numeric value to a real.
	pub fn into_real(self, operation: &'static str) -> Result<Real> {
		Ok(match self.dereference()? {
			Self::Integer(value) => Real::from_integer(value)?,
			Self::Real(value) => value,
			other => return Err(EvalError::TypeMismatch { operation, kind: other.kind() }),
		})
	}

	pub fn into_boolean(self, operation: &'static str) -> Result<bool> {
		match self.dereference()? {
			Self::Boolean(value) => Ok(value),
			other => Err(EvalError::TypeMismatch { operation, kind: other.kind() }),
		}
	}
}

impl PartialEq for Value {
	/// Structural equality, variables compare by slot.
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Integer(left), Self::Integer(right)) => left == right,
			(Self::Real(left), Self::Real(right)) => left == right,
			(Self::Boolean(left), Self::Boolean(right)) => left == right,
			(Self::Variable(left), Self::Variable(right)) => left == right,
			_ => false,
		}
	}
}

impl From<BigInt> for Value {
	fn from(value: BigInt) -> Self {
		Self::Integer(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Self::Integer(value.into())
	}
}

impl From<Real> for Value {
	fn from(value: Real) -> Self {
		Self::Real(value)
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Boolean(value)
	}
}

impl fmt::Display for Value {
	fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Integer(value) => write!(formatter, "{value}"),
			Self::Real(value) => write!(formatter, "{value}"),
			Self::Boolean(true) => write!(formatter, "True"),
			Self::Boolean(false) => write!(formatter, "False"),
			Self::Variable(variable) => match variable.value() {
				Ok(value) => write!(formatter, "{value}"),
				Err(_) => write!(formatter, "{}", variable.name()),
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::ErrorKind;

	#[test]
	fn booleans_render_capitalised() {
		assert_eq!(Value::from(true).to_string(), "True");
		assert_eq!(Value::from(false).to_string(), "False");
	}

	#[test]
	fn dereference() {
		let variable = Variable::new("x");
		let value = Value::Variable(variable.clone());
		assert_eq!(value.clone().dereference().unwrap_err().kind(), ErrorKind::UnboundVariable);
		assert_eq!(value.to_string(), "x");
		variable.bind(Value::from(7));
		assert_eq!(value.clone().dereference().unwrap(), Value::from(7));
		assert_eq!(value.to_string(), "7");
	}

	#[test]
	fn conversions() {
		assert_eq!(Value::from(3).into_real("Addition").unwrap(), Real::from(3));
		let error = Value::from(true).into_real("Addition").unwrap_err();
		assert_eq!(error, EvalError::TypeMismatch { operation: "Addition", kind: ValueKind::Boolean });
		assert_eq!(Value::from(1).into_boolean("Not").unwrap_err().kind(), ErrorKind::TypeMismatch);
	}

	#[test]
	fn integer_and_real_are_distinct() {
		assert_ne!(Value::from(2), Value::from(Real::from(2)));
		assert_eq!(Value::from(2).kind(), ValueKind::Integer);
	}
}
