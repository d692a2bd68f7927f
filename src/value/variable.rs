use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::error::{EvalError, Result};

use super::Value;

/// A named slot. Clones share the slot, so a binding made through one is seen by all.
#[derive(Debug, Clone)]
pub struct Variable {
	name: Rc<str>,
	binding: Rc<RefCell<Option<Value>>>,
}

impl Variable {
	/// Creates an unbound variable with a slot of its own.
	pub fn new(name: &str) -> Self {
		Self {
			name: name.into(),
			binding: Rc::new(RefCell::new(None)),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn is_bound(&self) -> bool {
		self.binding.borrow().is_some()
	}

	/// The bound value, or an error if nothing was assigned yet.
	pub fn value(&self) -> Result<Value> {
		self.binding.borrow().clone()
			.ok_or_else(|| EvalError::UnboundVariable(self.name.to_string()))
	}

	/// Replaces the binding.
	pub fn bind(&self, value: Value) {
		*self.binding.borrow_mut() = Some(value);
	}

	/// Returns true if both handles refer to the same slot.
	pub fn shares_binding(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.binding, &other.binding)
	}
}

impl PartialEq for Variable {
	fn eq(&self, other: &Self) -> bool {
		self.name == other.name && self.shares_binding(other)
	}
}

/// Where the lexer resolves identifiers.
pub trait VariableTable {
	/// The value bound to a name, if any.
	fn lookup(&self, name: &str) -> Option<Value>;
	/// Binds a name, creating the variable if needed.
	fn bind(&mut self, name: &str, value: Value);
	/// A handle for a name, created unbound the first time it is asked for.
	fn variable(&mut self, name: &str) -> Variable;
}

/// The default table, holds variables for the life of a session.
#[derive(Debug, Default)]
pub struct Variables {
	slots: HashMap<String, Variable>,
}

impl Variables {
	pub fn new() -> Self {
		Self::default()
	}

	/// Every bound variable with its value, sorted by name.
	pub fn bound(&self) -> Vec<(String, Value)> {
		let mut bound: Vec<(String, Value)> = self.slots.iter()
			.filter_map(|(name, variable)| variable.value().ok().map(|value| (name.clone(), value)))
			.collect();
		bound.sort_by(|(left, _), (right, _)| left.cmp(right));
		bound
	}
}

impl VariableTable for Variables {
	fn lookup(&self, name: &str) -> Option<Value> {
		self.slots.get(name)?.value().ok()
	}

	fn bind(&mut self, name: &str, value: Value) {
		self.variable(name).bind(value);
	}

	fn variable(&mut self, name: &str) -> Variable {
		self.slots.entry(name.to_string())
			.or_insert_with(|| Variable::new(name))
			.clone()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::ErrorKind;

	#[test]
	fn handles_share_a_slot() {
		let mut variables = Variables::new();
		let first = variables.variable("x");
		let second = variables.variable("x");
		assert!(first.shares_binding(&second));
		assert!(!first.is_bound());
		first.bind(Value::from(5));
		assert_eq!(second.value().unwrap(), Value::from(5));
		assert_eq!(variables.lookup("x"), Some(Value::from(5)));
	}

	#[test]
	fn unbound_variable() {
		let variable = Variable::new("y");
		assert_eq!(variable.value().unwrap_err().kind(), ErrorKind::UnboundVariable);
	}

	#[test]
	fn bound_is_sorted() {
		let mut variables = Variables::new();
		variables.bind("b", Value::from(2));
		variables.bind("a", Value::from(1));
		variables.variable("c");
		let names: Vec<String> = variables.bound().into_iter().map(|(name, _)| name).collect();
		assert_eq!(names, vec!["a".to_string(), "b".to_string()]);
	}
}
