pub mod catalog;
pub mod function;
pub mod operator;
pub mod precedence;

pub use catalog::Catalog;
pub use function::Function;
pub use operator::Operator;
pub use precedence::{Associativity, Precedence};

/// What an operation does once its operands are popped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Behavior {
	Unary(UnaryBehavior),
	Binary(BinaryBehavior),
}

impl Behavior {
	#[inline(always)]
	pub const fn arity(self) -> usize {
		match self {
			Self::Unary(_) => 1,
			Self::Binary(_) => 2,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryBehavior {
	Identity,
	Negation,
	Not,
	Factorial,
	Abs,
	Arccos,
	Arcsin,
	Arctan,
	Ceil,
	Cos,
	Exp,
	Floor,
	Lb,
	Ln,
	Log,
	Result,
	Sin,
	Sqrt,
	Tan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryBehavior {
	Addition,
	Subtraction,
	Multiplication,
	Division,
	Modulus,
	Power,
	Assignment,
	Equality,
	Inequality,
	Less,
	LessEqual,
	Greater,
	GreaterEqual,
	And,
	Nand,
	Or,
	Nor,
	Xor,
	Xnor,
	Arctan2,
	Max,
	Min,
}

/// Everything the converter and evaluator need to know about an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperationDescriptor {
	pub arity: usize,
	/// Only operators have a precedence
	pub precedence: Option<Precedence>,
	pub associativity: Associativity,
	pub behavior: Behavior,
}

impl OperationDescriptor {
	pub const fn operator(precedence: Precedence, associativity: Associativity, behavior: Behavior) -> Self {
		Self {
			arity: behavior.arity(),
			precedence: Some(precedence),
			associativity,
			behavior,
		}
	}

	pub const fn function(behavior: Behavior) -> Self {
		Self {
			arity: behavior.arity(),
			precedence: None,
			associativity: Associativity::None,
			behavior,
		}
	}
}

/// An operator or a function, as found in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
	Operator(Operator),
	Function(Function),
}

impl Operation {
	pub const fn descriptor(self) -> OperationDescriptor {
		match self {
			Self::Operator(operator) => operator.descriptor(),
			Self::Function(function) => function.descriptor(),
		}
	}
}
