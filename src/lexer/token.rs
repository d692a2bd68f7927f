use std::fmt::Display;

use crate::{
	error::{EvalError, Result},
	operation::{Catalog, Function, Operation, Operator},
	value::Value,
};

use super::separator::Separator;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
	Operand(Value),
	Operator(Operator),
	Function(Function),
	Separator(Separator),
}

impl Token {
	/// Builds a token from a symbolic name such as "Addition", "sin" or "(".
	pub fn from_name(catalog: &Catalog, name: &str) -> Result<Self> {
		if let [chr] = name.chars().collect::<Vec<char>>().as_slice() {
			if let Some(separator) = Separator::from_char(*chr) {
				return Ok(Self::Separator(separator));
			}
		}
		match catalog.get(name) {
			Some(operation) => Ok(operation.into()),
			None => Err(EvalError::UnknownToken(name.to_string())),
		}
	}

	/// The symbolic name, as used in error messages.
	pub fn get_name(&self) -> String {
		match self {
			Self::Operand(value) => value.kind().to_string(),
			Self::Operator(operator) => operator.get_name().to_string(),
			Self::Function(function) => function.get_name().to_string(),
			Self::Separator(separator) => separator.get_name().to_string(),
		}
	}
}

impl From<Operation> for Token {
	fn from(operation: Operation) -> Self {
		match operation {
			Operation::Operator(operator) => Self::Operator(operator),
			Operation::Function(function) => Self::Function(function),
		}
	}
}

impl From<Value> for Token {
	fn from(value: Value) -> Self {
		Self::Operand(value)
	}
}

impl Display for Token {
	fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Operand(Value::Real(value)) => write!(formatter, "{}", value.abbreviated()),
			Self::Operand(Value::Variable(variable)) => write!(formatter, "{}", variable.name()),
			Self::Operand(value) => write!(formatter, "{value}"),
			// Prefix signs would read as their binary forms
			Self::Operator(Operator::Identity) => write!(formatter, "pos"),
			Self::Operator(Operator::Negation) => write!(formatter, "neg"),
			Self::Operator(operator) => write!(formatter, "{}", operator.get_symbol()),
			Self::Function(function) => write!(formatter, "{}", function.get_name()),
			Self::Separator(separator) => write!(formatter, "{}", separator.get_symbol_char()),
		}
	}
}
