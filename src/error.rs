use strum_macros::{Display, EnumDiscriminants};
use thiserror::Error;

use crate::value::ValueKind;

/// Every way converting or evaluating an expression can fail.
/// An error aborts the whole expression, nothing is recovered internally.
#[derive(Debug, Clone, PartialEq, Eq, Error, EnumDiscriminants)]
#[strum_discriminants(name(ErrorKind), derive(Display, Hash))]
pub enum EvalError {
	/// A symbolic name or character with no catalog or lexer mapping.
	#[error("Unknown token \"{0}\".")]
	UnknownToken(String),
	/// Unbalanced grouping markers during conversion.
	#[error("Mismatched parenthesis: {0}.")]
	MismatchedParenthesis(&'static str),
	/// An operation ran against a stack shallower than its arity, or the input was empty.
	#[error("{operation} needs {expected} operand(s) but only {found} are available.")]
	InsufficientOperands {
		operation: &'static str,
		expected: usize,
		found: usize,
	},
	/// Evaluation finished with more than one value left on the stack.
	#[error("Too many operands, {0} values are left on the stack.")]
	TooManyOperands(usize),
	#[error("Cannot assign to {0}, it is not a variable.")]
	InvalidAssignmentTarget(String),
	#[error("Variable \"{0}\" has no value.")]
	UnboundVariable(String),
	/// The operation is undefined for the given operand values.
	#[error("{0}")]
	DomainError(String),
	/// A token the evaluator cannot execute reached it.
	#[error("Token \"{0}\" cannot be evaluated.")]
	UnsupportedToken(String),
	/// The operand's runtime type is not accepted by the operation.
	#[error("{operation} does not accept {kind} operands.")]
	TypeMismatch {
		operation: &'static str,
		kind: ValueKind,
	},
}

impl EvalError {
	/// The kind of the error without its payload.
	pub fn kind(&self) -> ErrorKind {
		self.into()
	}

	pub(crate) fn domain(message: impl Into<String>) -> Self {
		Self::DomainError(message.into())
	}
}

pub type Result<T> = std::result::Result<T, EvalError>;
