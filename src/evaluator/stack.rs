use crate::{
	error::{EvalError, Result},
	value::Value,
};

/// ## Operand stack of a single evaluation

#[derive(Debug, Default)]
pub struct ValueStack {
	vec: Vec<Value>,
}

impl ValueStack {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.vec.len()
	}

	pub fn is_empty(&self) -> bool {
		self.vec.is_empty()
	}

	pub fn push(&mut self, value: Value) {
		self.vec.push(value);
	}

	/// Fails unless at least arity values are on the stack.
	pub fn require(&self, operation: &'static str, arity: usize) -> Result<()> {
		match self.vec.len() < arity {
			true => Err(EvalError::InsufficientOperands { operation, expected: arity, found: self.vec.len() }),
			false => Ok(()),
		}
	}

	pub fn pop(&mut self) -> Result<Value> {
		self.vec.pop().ok_or(EvalError::InsufficientOperands { operation: "Pop", expected: 1, found: 0 })
	}

	/// Pops the top two values, returned in the order they were pushed.
	pub fn pop_2(&mut self) -> Result<(Value, Value)> {
		self.require("Pop", 2)?;
		let two = self.pop()?;
		let one = self.pop()?;
		Ok((one, two))
	}
}
