use std::{collections::HashMap, sync::OnceLock};

use strum::IntoEnumIterator;

use crate::error::{EvalError, Result};

use super::{Function, Operation, OperationDescriptor, Operator};

/// Maps operation names and aliases, case insensitively, to operations.
#[derive(Debug, Clone)]
pub struct Catalog {
	string_to_operation_mapping: HashMap<String, Operation>,
}

impl Catalog {
	pub fn new() -> Self {
		let mut mapping = HashMap::new();
		for operator in Operator::iter() {
			let (name, aliases) = operator.get_names();
			mapping.insert(name.to_lowercase(), Operation::Operator(operator));
			for alias in aliases {
				mapping.insert(alias.to_lowercase(), Operation::Operator(operator));
			}
		}
		for function in Function::iter() {
			let (name, aliases) = function.get_names();
			mapping.insert(name.to_lowercase(), Operation::Function(function));
			for alias in aliases {
				mapping.insert(alias.to_lowercase(), Operation::Function(function));
			}
		}
		Self {
			string_to_operation_mapping: mapping,
		}
	}

	/// The catalog shared by every lexer.
	pub fn global() -> &'static Self {
		static CATALOG: OnceLock<Catalog> = OnceLock::new();
		CATALOG.get_or_init(Self::new)
	}

	pub fn get(&self, name: &str) -> Option<Operation> {
		self.string_to_operation_mapping.get(name.to_lowercase().as_str()).copied()
	}

	pub fn lookup(&self, name: &str) -> Result<Operation> {
		self.get(name).ok_or_else(|| EvalError::UnknownToken(name.to_string()))
	}

	pub fn descriptor(&self, name: &str) -> Result<OperationDescriptor> {
		Ok(self.lookup(name)?.descriptor())
	}
}

impl Default for Catalog {
	fn default() -> Self {
		Self::new()
	}
}
