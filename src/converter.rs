//! Infix to postfix conversion with the shunting-yard algorithm.

use tracing::{debug, trace};

use crate::{
	error::{EvalError, Result},
	lexer::{separator::Separator, token::Token},
	operation::{Associativity, OperationDescriptor},
};

/// Returns true if the pending operator has to be emitted before the incoming one is pushed.
fn yields_to(incoming: &OperationDescriptor, pending: &OperationDescriptor) -> bool {
	match incoming.associativity {
		Associativity::Left => incoming.precedence <= pending.precedence,
		Associativity::Right => incoming.precedence < pending.precedence,
		Associativity::None => false,
	}
}

/// Reorders infix tokens into postfix order.
/// Operands pass straight through, operators and functions wait on a pending stack.
pub fn convert(tokens: impl IntoIterator<Item = Token>) -> Result<Vec<Token>> {
	let postfix = shunt(tokens);
	match &postfix {
		Ok(postfix) => debug!(length = postfix.len(), postfix = %render(postfix), "converted expression"),
		Err(error) => debug!(%error, "conversion failed"),
	}
	postfix
}

fn shunt(tokens: impl IntoIterator<Item = Token>) -> Result<Vec<Token>> {
	let mut out = Vec::new();
	let mut pending: Vec<Token> = Vec::new();
	for token in tokens {
		match token {
			Token::Operand(_) => {
				trace!(%token, "emitting operand");
				out.push(token);
			}
			Token::Function(_) | Token::Separator(Separator::LeftParenthesis) => pending.push(token),
			Token::Separator(Separator::RightParenthesis) => {
				// Emit everything back to the matching left parenthesis
				loop {
					match pending.pop() {
						None => return Err(EvalError::MismatchedParenthesis("right parenthesis without a left parenthesis")),
						Some(Token::Separator(Separator::LeftParenthesis)) => break,
						Some(token) => out.push(token),
					}
				}
				// A function owns the parenthesis just closed
				if let Some(Token::Function(_)) = pending.last() {
					out.extend(pending.pop());
				}
			}
			Token::Separator(Separator::ArgumentSeparator) => {
				loop {
					match pending.last() {
						None => return Err(EvalError::MismatchedParenthesis("argument separator outside of parentheses")),
						Some(Token::Separator(Separator::LeftParenthesis)) => break,
						Some(_) => out.extend(pending.pop()),
					}
				}
			}
			Token::Operator(operator) => {
				let descriptor = operator.descriptor();
				while let Some(&Token::Operator(top)) = pending.last() {
					if !yields_to(&descriptor, &top.descriptor()) {
						break;
					}
					pending.pop();
					out.push(Token::Operator(top));
				}
				pending.push(Token::Operator(operator));
			}
		}
	}
	// Drain what is left, any left parenthesis here was never closed
	while let Some(token) = pending.pop() {
		if token == Token::Separator(Separator::LeftParenthesis) {
			return Err(EvalError::MismatchedParenthesis("left parenthesis without a right parenthesis"));
		}
		out.push(token);
	}
	Ok(out)
}

/// Space separated rendering of a token sequence.
pub fn render(tokens: &[Token]) -> String {
	tokens.iter()
		.map(Token::to_string)
		.collect::<Vec<String>>()
		.join(" ")
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{error::ErrorKind, lexer::tokenize::tokenize_line, operation::{Catalog, Operator}, value::Variables};
	use pretty_assertions::assert_eq;

	fn postfix(line: &str) -> Result<String> {
		let tokens = tokenize_line(Catalog::global(), &mut Variables::new(), line)?;
		Ok(render(&convert(tokens)?))
	}

	#[test]
	fn precedence() {
		assert_eq!(postfix("2+3*4").unwrap(), "2 3 4 * +");
		assert_eq!(postfix("2*3+4").unwrap(), "2 3 * 4 +");
		assert_eq!(postfix("1 < 2 and 3 == 3").unwrap(), "1 2 < 3 3 == and");
	}

	#[test]
	fn associativity() {
		assert_eq!(postfix("2-3-4").unwrap(), "2 3 - 4 -");
		assert_eq!(postfix("2^3^2").unwrap(), "2 3 2 ^ ^");
		assert_eq!(postfix("x = y = 1").unwrap(), "x y 1 = =");
	}

	#[test]
	fn unary_operators() {
		assert_eq!(postfix("-2^2").unwrap(), "2 2 ^ neg");
		assert_eq!(postfix("2^-1").unwrap(), "2 1 neg ^");
		assert_eq!(postfix("--3").unwrap(), "3 neg neg");
		assert_eq!(postfix("3!+1").unwrap(), "3 ! 1 +");
		assert_eq!(postfix("2*3!").unwrap(), "2 3 ! *");
	}

	#[test]
	fn grouping() {
		assert_eq!(postfix("(1+2)*(3+4)").unwrap(), "1 2 + 3 4 + *");
		assert_eq!(postfix("((7))").unwrap(), "7");
	}

	#[test]
	fn functions() {
		assert_eq!(postfix("sin(0)").unwrap(), "0 sin");
		assert_eq!(postfix("max(1, 2+3)").unwrap(), "1 2 3 + max");
		assert_eq!(postfix("pow(2, max(1, 3)) * 2").unwrap(), "2 1 3 max pow 2 *");
	}

	#[test]
	fn mismatched_parentheses() {
		assert_eq!(postfix("(1+2").unwrap_err().kind(), ErrorKind::MismatchedParenthesis);
		assert_eq!(postfix("1+2)").unwrap_err().kind(), ErrorKind::MismatchedParenthesis);
		assert_eq!(postfix("1, 2").unwrap_err().kind(), ErrorKind::MismatchedParenthesis);
	}

	#[test]
	fn yields_to_respects_associativity() {
		let addition = Operator::Addition.descriptor();
		let multiplication = Operator::Multiplication.descriptor();
		let power = Operator::Power.descriptor();
		let negation = Operator::Negation.descriptor();
		assert!(yields_to(&addition, &multiplication));
		assert!(yields_to(&addition, &addition));
		assert!(!yields_to(&multiplication, &addition));
		assert!(!yields_to(&power, &power));
		assert!(!yields_to(&negation, &power));
	}
}
