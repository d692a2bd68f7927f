use strum_macros::EnumIter;

use super::{BinaryBehavior, Behavior, OperationDescriptor, UnaryBehavior};

#[derive(Debug, Clone, Copy, EnumIter, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Function {
	Abs,
	Arccos,
	Arcsin,
	Arctan,
	Arctan2,
	Ceil,
	Cos,
	Exp,
	Floor,
	Lb,
	Ln,
	Log,
	Max,
	Min,
	Pow,
	Result,
	Sin,
	Sqrt,
	Tan,
}

impl Function {
	/// Returns the name of the function and a list of aliases.
	#[inline(always)]
	pub const fn get_names(self) -> (&'static str, &'static [&'static str]) {
		match self {
			Self::Abs => ("abs", &[]),
			Self::Arccos => ("arccos", &["acos"]),
			Self::Arcsin => ("arcsin", &["asin"]),
			Self::Arctan => ("arctan", &["atan"]),
			Self::Arctan2 => ("arctan2", &["atan2"]),
			Self::Ceil => ("ceil", &[]),
			Self::Cos => ("cos", &[]),
			Self::Exp => ("exp", &[]),
			Self::Floor => ("floor", &[]),
			Self::Lb => ("lb", &["log2"]),
			Self::Ln => ("ln", &[]),
			Self::Log => ("log", &["log10"]),
			Self::Max => ("max", &[]),
			Self::Min => ("min", &[]),
			Self::Pow => ("pow", &[]),
			Self::Result => ("result", &[]),
			Self::Sin => ("sin", &[]),
			Self::Sqrt => ("sqrt", &[]),
			Self::Tan => ("tan", &[]),
		}
	}

	pub const fn get_name(self) -> &'static str {
		self.get_names().0
	}

	pub const fn behavior(self) -> Behavior {
		match self {
			Self::Abs => Behavior::Unary(UnaryBehavior::Abs),
			Self::Arccos => Behavior::Unary(UnaryBehavior::Arccos),
			Self::Arcsin => Behavior::Unary(UnaryBehavior::Arcsin),
			Self::Arctan => Behavior::Unary(UnaryBehavior::Arctan),
			Self::Arctan2 => Behavior::Binary(BinaryBehavior::Arctan2),
			Self::Ceil => Behavior::Unary(UnaryBehavior::Ceil),
			Self::Cos => Behavior::Unary(UnaryBehavior::Cos),
			Self::Exp => Behavior::Unary(UnaryBehavior::Exp),
			Self::Floor => Behavior::Unary(UnaryBehavior::Floor),
			Self::Lb => Behavior::Unary(UnaryBehavior::Lb),
			Self::Ln => Behavior::Unary(UnaryBehavior::Ln),
			Self::Log => Behavior::Unary(UnaryBehavior::Log),
			Self::Max => Behavior::Binary(BinaryBehavior::Max),
			Self::Min => Behavior::Binary(BinaryBehavior::Min),
			Self::Pow => Behavior::Binary(BinaryBehavior::Power),
			Self::Result => Behavior::Unary(UnaryBehavior::Result),
			Self::Sin => Behavior::Unary(UnaryBehavior::Sin),
			Self::Sqrt => Behavior::Unary(UnaryBehavior::Sqrt),
			Self::Tan => Behavior::Unary(UnaryBehavior::Tan),
		}
	}

	pub const fn descriptor(self) -> OperationDescriptor {
		OperationDescriptor::function(self.behavior())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::operation::Associativity;
	use strum::IntoEnumIterator;

	#[test]
	fn functions_have_no_precedence() {
		for function in Function::iter() {
			let descriptor = function.descriptor();
			assert_eq!(descriptor.precedence, None);
			assert_eq!(descriptor.associativity, Associativity::None);
		}
	}

	#[test]
	fn two_argument_functions() {
		let binary: Vec<Function> = Function::iter().filter(|function| function.descriptor().arity == 2).collect();
		assert_eq!(binary, vec![Function::Arctan2, Function::Max, Function::Min, Function::Pow]);
	}
}
