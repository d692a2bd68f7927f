use strum_macros::EnumIter;

/// Binding strength of operators, from loosest to tightest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[repr(u8)]
pub enum Precedence {
	Assignment = 1,
	LogicalOr,
	LogicalXor,
	LogicalAnd,
	BitwiseOr,
	BitwiseXor,
	BitwiseAnd,
	Equality,
	Relational,
	BitShift,
	Additive,
	Multiplicative,
	Unary,
	Power,
	Postfix,
}

/// Which way a chain of equal precedence operators groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
	Left,
	Right,
	/// Unary and postfix operators, never yield to another operator
	None,
}

#[cfg(test)]
mod tests {
	use super::*;
	use strum::IntoEnumIterator;

	#[test]
	fn levels_are_dense_and_ordered() {
		for (index, precedence) in Precedence::iter().enumerate() {
			assert_eq!(precedence as usize, index + 1);
		}
		assert!(Precedence::Power > Precedence::Unary);
		assert!(Precedence::Assignment < Precedence::LogicalOr);
	}
}
