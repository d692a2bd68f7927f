//! Postfix evaluation over a single value stack.

pub mod stack;

use num::{BigInt, ToPrimitive};
use tracing::{debug, trace};

use crate::{
	converter::convert,
	error::{EvalError, Result},
	lexer::token::Token,
	operation::{BinaryBehavior, Behavior, OperationDescriptor, UnaryBehavior},
	value::{Real, Value},
};

use stack::ValueStack;

/// Evaluates postfix expressions and remembers every result for `result(n)`.
#[derive(Debug, Default)]
pub struct Evaluator {
	results: Vec<Value>,
}

impl Evaluator {
	pub fn new() -> Self {
		Self::default()
	}

	/// Results of earlier evaluations, oldest first.
	pub fn results(&self) -> &[Value] {
		&self.results
	}

	/// Runs a postfix token sequence and returns the single value it leaves, dereferenced.
	pub fn evaluate(&mut self, postfix: impl IntoIterator<Item = Token>) -> Result<Value> {
		let result = self.run(postfix);
		match &result {
			Ok(value) => {
				debug!(kind = %value.kind(), "evaluated expression");
				self.results.push(value.clone());
			}
			Err(error) => debug!(%error, "evaluation failed"),
		}
		result
	}

	fn run(&self, postfix: impl IntoIterator<Item = Token>) -> Result<Value> {
		let mut stack = ValueStack::new();
		let mut is_empty = true;
		for token in postfix {
			is_empty = false;
			match token {
				Token::Operand(value) => stack.push(value),
				Token::Operator(operator) => self.perform(&mut stack, operator.get_name(), operator.descriptor())?,
				Token::Function(function) => self.perform(&mut stack, function.get_name(), function.descriptor())?,
				Token::Separator(separator) => return Err(EvalError::UnsupportedToken(separator.get_name().to_string())),
			}
		}
		if is_empty {
			return Err(EvalError::InsufficientOperands { operation: "Expression", expected: 1, found: 0 });
		}
		if stack.len() > 1 {
			return Err(EvalError::TooManyOperands(stack.len()));
		}
		stack.pop()?.dereference()
	}

	/// Converts infix tokens and evaluates them.
	pub fn evaluate_infix(&mut self, infix: impl IntoIterator<Item = Token>) -> Result<Value> {
		self.evaluate(convert(infix)?)
	}

	/// Checks the arity, pops the operands and pushes the result.
	fn perform(&self, stack: &mut ValueStack, name: &'static str, descriptor: OperationDescriptor) -> Result<()> {
		trace!(operation = name, arity = descriptor.arity, depth = stack.len(), "performing operation");
		stack.require(name, descriptor.arity)?;
		let result = match descriptor.behavior {
			Behavior::Unary(behavior) => {
				let operand = stack.pop()?;
				self.apply_unary(behavior, operand)?
			}
			Behavior::Binary(behavior) => {
				let (lhs, rhs) = stack.pop_2()?;
				apply_binary(behavior, lhs, rhs)?
			}
		};
		stack.push(result);
		Ok(())
	}

	fn apply_unary(&self, behavior: UnaryBehavior, operand: Value) -> Result<Value> {
		match behavior {
			UnaryBehavior::Identity => operand.identity(),
			UnaryBehavior::Negation => operand.negate(),
			UnaryBehavior::Not => operand.not(),
			UnaryBehavior::Factorial => operand.factorial(),
			UnaryBehavior::Abs => operand.abs(),
			UnaryBehavior::Ceil => operand.ceil(),
			UnaryBehavior::Floor => operand.floor(),
			UnaryBehavior::Result => self.result(operand),
			UnaryBehavior::Arccos => operand.real_function("arccos", Real::arccos),
			UnaryBehavior::Arcsin => operand.real_function("arcsin", Real::arcsin),
			UnaryBehavior::Arctan => operand.real_function("arctan", Real::arctan),
			UnaryBehavior::Cos => operand.real_function("cos", Real::cos),
			UnaryBehavior::Exp => operand.real_function("exp", Real::exp),
			UnaryBehavior::Lb => operand.real_function("lb", Real::lb),
			UnaryBehavior::Ln => operand.real_function("ln", Real::ln),
			UnaryBehavior::Log => operand.real_function("log", Real::log),
			UnaryBehavior::Sin => operand.real_function("sin", Real::sin),
			UnaryBehavior::Sqrt => operand.real_function("sqrt", Real::sqrt),
			UnaryBehavior::Tan => operand.real_function("tan", Real::tan),
		}
	}

	/// The result of the nth earlier evaluation, counting from one.
	fn result(&self, index: Value) -> Result<Value> {
		let index: BigInt = match index.dereference()? {
			Value::Integer(index) => index,
			other => return Err(EvalError::TypeMismatch { operation: "result", kind: other.kind() }),
		};
		index.to_usize()
			.and_then(|index| index.checked_sub(1))
			.and_then(|index| self.results.get(index))
			.cloned()
			.ok_or_else(|| EvalError::domain(format!("There is no result {index}, {} are stored.", self.results.len())))
	}
}

fn apply_binary(behavior: BinaryBehavior, lhs: Value, rhs: Value) -> Result<Value> {
	match behavior {
		BinaryBehavior::Addition => lhs.add(rhs),
		BinaryBehavior::Subtraction => lhs.sub(rhs),
		BinaryBehavior::Multiplication => lhs.mul(rhs),
		BinaryBehavior::Division => lhs.div(rhs),
		BinaryBehavior::Modulus => lhs.modulus(rhs),
		BinaryBehavior::Power => lhs.power(rhs),
		BinaryBehavior::Assignment => lhs.assign(rhs),
		BinaryBehavior::Equality => lhs.equal(rhs),
		BinaryBehavior::Inequality => lhs.not_equal(rhs),
		BinaryBehavior::Less => lhs.less(rhs),
		BinaryBehavior::LessEqual => lhs.less_equal(rhs),
		BinaryBehavior::Greater => lhs.greater(rhs),
		BinaryBehavior::GreaterEqual => lhs.greater_equal(rhs),
		BinaryBehavior::And => lhs.logic(rhs, "And", |left, right| left && right),
		BinaryBehavior::Nand => lhs.logic(rhs, "Nand", |left, right| !(left && right)),
		BinaryBehavior::Or => lhs.logic(rhs, "Or", |left, right| left || right),
		BinaryBehavior::Nor => lhs.logic(rhs, "Nor", |left, right| !(left || right)),
		BinaryBehavior::Xor => lhs.logic(rhs, "Xor", |left, right| left != right),
		BinaryBehavior::Xnor => lhs.logic(rhs, "Xnor", |left, right| left == right),
		BinaryBehavior::Arctan2 => lhs.arctan2(rhs),
		BinaryBehavior::Max => lhs.max(rhs),
		BinaryBehavior::Min => lhs.min(rhs),
	}
}

/// Evaluates a postfix sequence without a result history.
pub fn evaluate(postfix: impl IntoIterator<Item = Token>) -> Result<Value> {
	Evaluator::new().evaluate(postfix)
}
