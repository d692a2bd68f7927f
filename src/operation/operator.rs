use strum_macros::EnumIter;

use super::{Associativity, BinaryBehavior, Behavior, OperationDescriptor, Precedence, UnaryBehavior};

#[derive(Debug, Clone, Copy, EnumIter, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Operator {
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
	Not,
	Identity,
	Negation,
	Factorial,
}

impl Operator {
	/// Returns the name of the operator and a list of word aliases.
	#[inline(always)]
	pub const fn get_names(self) -> (&'static str, &'static [&'static str]) {
		match self {
			Self::Addition => ("Addition", &[]),
			Self::Subtraction => ("Subtraction", &[]),
			Self::Multiplication => ("Multiplication", &[]),
			Self::Division => ("Division", &[]),
			Self::Modulus => ("Modulus", &["mod"]),
			Self::Power => ("Power", &[]),
			Self::Assignment => ("Assignment", &[]),
			Self::Equality => ("Equality", &[]),
			Self::Inequality => ("Inequality", &[]),
			Self::Less => ("Less", &[]),
			Self::LessEqual => ("LessEqual", &[]),
			Self::Greater => ("Greater", &[]),
			Self::GreaterEqual => ("GreaterEqual", &[]),
			Self::And => ("And", &[]),
			Self::Nand => ("Nand", &[]),
			Self::Or => ("Or", &[]),
			Self::Nor => ("Nor", &[]),
			Self::Xor => ("Xor", &[]),
			Self::Xnor => ("Xnor", &[]),
			Self::Not => ("Not", &[]),
			Self::Identity => ("Identity", &[]),
			Self::Negation => ("Negation", &["neg"]),
			Self::Factorial => ("Factorial", &[]),
		}
	}

	pub const fn get_name(self) -> &'static str {
		self.get_names().0
	}

	/// The symbol the operator is written with, or its name if it only has a word form.
	pub const fn get_symbol(self) -> &'static str {
		match self {
			Self::Addition | Self::Identity => "+",
			Self::Subtraction | Self::Negation => "-",
			Self::Multiplication => "*",
			Self::Division => "/",
			Self::Modulus => "%",
			Self::Power => "^",
			Self::Assignment => "=",
			Self::Equality => "==",
			Self::Inequality => "!=",
			Self::Less => "<",
			Self::LessEqual => "<=",
			Self::Greater => ">",
			Self::GreaterEqual => ">=",
			Self::Not | Self::Factorial => "!",
			Self::And => "and",
			Self::Nand => "nand",
			Self::Or => "or",
			Self::Nor => "nor",
			Self::Xor => "xor",
			Self::Xnor => "xnor",
		}
	}

	pub const fn precedence(self) -> Precedence {
		match self {
			Self::Assignment => Precedence::Assignment,
			Self::Or | Self::Nor | Self::Xor | Self::Xnor => Precedence::LogicalOr,
			Self::And | Self::Nand => Precedence::LogicalAnd,
			Self::Equality | Self::Inequality => Precedence::Equality,
			Self::Less | Self::LessEqual | Self::Greater | Self::GreaterEqual => Precedence::Relational,
			Self::Addition | Self::Subtraction => Precedence::Additive,
			Self::Multiplication | Self::Division | Self::Modulus => Precedence::Multiplicative,
			Self::Not | Self::Identity | Self::Negation => Precedence::Unary,
			Self::Power => Precedence::Power,
			Self::Factorial => Precedence::Postfix,
		}
	}

	pub const fn associativity(self) -> Associativity {
		match self {
			Self::Assignment | Self::Power => Associativity::Right,
			Self::Not | Self::Identity | Self::Negation | Self::Factorial => Associativity::None,
			_ => Associativity::Left,
		}
	}

	pub const fn behavior(self) -> Behavior {
		match self {
			Self::Addition => Behavior::Binary(BinaryBehavior::Addition),
			Self::Subtraction => Behavior::Binary(BinaryBehavior::Subtraction),
			Self::Multiplication => Behavior::Binary(BinaryBehavior::Multiplication),
			Self::Division => Behavior::Binary(BinaryBehavior::Division),
			Self::Modulus => Behavior::Binary(BinaryBehavior::Modulus),
			Self::Power => Behavior::Binary(BinaryBehavior::Power),
			Self::Assignment => Behavior::Binary(BinaryBehavior::Assignment),
			Self::Equality => Behavior::Binary(BinaryBehavior::Equality),
			Self::Inequality => Behavior::Binary(BinaryBehavior::Inequality),
			Self::Less => Behavior::Binary(BinaryBehavior::Less),
			Self::LessEqual => Behavior::Binary(BinaryBehavior::LessEqual),
			Self::Greater => Behavior::Binary(BinaryBehavior::Greater),
			Self::GreaterEqual => Behavior::Binary(BinaryBehavior::GreaterEqual),
			Self::And => Behavior::Binary(BinaryBehavior::And),
			Self::Nand => Behavior::Binary(BinaryBehavior::Nand),
			Self::Or => Behavior::Binary(BinaryBehavior::Or),
			Self::Nor => Behavior::Binary(BinaryBehavior::Nor),
			Self::Xor => Behavior::Binary(BinaryBehavior::Xor),
			Self::Xnor => Behavior::Binary(BinaryBehavior::Xnor),
			Self::Not => Behavior::Unary(UnaryBehavior::Not),
			Self::Identity => Behavior::Unary(UnaryBehavior::Identity),
			Self::Negation => Behavior::Unary(UnaryBehavior::Negation),
			Self::Factorial => Behavior::Unary(UnaryBehavior::Factorial),
		}
	}

	pub const fn descriptor(self) -> OperationDescriptor {
		OperationDescriptor::operator(self.precedence(), self.associativity(), self.behavior())
	}
}
