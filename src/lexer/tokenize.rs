use std::mem;

use num::BigInt;
use tracing::trace;

use crate::{
	error::{EvalError, Result},
	operation::{Catalog, Operator},
	value::{Real, Value, VariableTable},
};

use super::{separator::Separator, token::Token};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[repr(u8)]
enum ParsingType {
	None,
	NumericalLiteral,
	OperatorNonAlphabetic,
	IdentifierKeyword,
}

const NON_ALPHABETIC_CHARACTER_SET: [char; 10] = ['+', '-', '*', '/', '%', '^', '=', '<', '>', '!'];

/// Symbols made of two characters, matched before single characters.
const TWO_CHARACTER_SYMBOLS: [(&str, Operator); 6] = [
	("**", Operator::Power),
	("==", Operator::Equality),
	("!=", Operator::Inequality),
	("<>", Operator::Inequality),
	("<=", Operator::LessEqual),
	(">=", Operator::GreaterEqual),
];

fn is_operator_char(chr: char) -> bool {
	NON_ALPHABETIC_CHARACTER_SET.contains(&chr)
}

/// Returns true if the previous token ends an operand, so a sign is binary and "!" is a factorial.
fn follows_operand(previous: Option<&Token>) -> bool {
	matches!(
		previous,
		Some(Token::Operand(_) | Token::Separator(Separator::RightParenthesis) | Token::Operator(Operator::Factorial))
	)
}

/// The operator written with a single character.
fn single_character_operator(chr: char, after_operand: bool) -> Option<Operator> {
	Some(match (chr, after_operand) {
		('+', true) => Operator::Addition,
		('+', false) => Operator::Identity,
		('-', true) => Operator::Subtraction,
		('-', false) => Operator::Negation,
		('!', true) => Operator::Factorial,
		('!', false) => Operator::Not,
		('*', _) => Operator::Multiplication,
		('/', _) => Operator::Division,
		('%', _) => Operator::Modulus,
		('^', _) => Operator::Power,
		('=', _) => Operator::Assignment,
		('<', _) => Operator::Less,
		('>', _) => Operator::Greater,
		_ => return None,
	})
}

/// Splits a run of operator characters into operators, longest symbol first.
fn push_operators(out: &mut Vec<Token>, symbols: &str) -> Result<()> {
	let mut rest = symbols;
	while let Some(chr) = rest.chars().next() {
		if let Some((symbol, operator)) = TWO_CHARACTER_SYMBOLS.iter().find(|(symbol, _)| rest.starts_with(symbol)) {
			out.push(Token::Operator(*operator));
			rest = &rest[symbol.len()..];
			continue;
		}
		let operator = single_character_operator(chr, follows_operand(out.last()))
			.ok_or_else(|| EvalError::UnknownToken(chr.to_string()))?;
		out.push(Token::Operator(operator));
		rest = &rest[chr.len_utf8()..];
	}
	Ok(())
}

/// Named constants, matched case insensitively before the catalog.
fn constant(name: &str) -> Option<Value> {
	Some(match name.to_lowercase().as_str() {
		"pi" => Value::Real(Real::pi()),
		"e" => Value::Real(Real::e()),
		"true" => Value::Boolean(true),
		"false" => Value::Boolean(false),
		_ => return None,
	})
}

fn parse_number(literal: &str) -> Result<Token> {
	let is_real = literal.contains(|chr: char| matches!(chr, '.' | 'e' | 'E'));
	let value = match is_real {
		true => Value::Real(literal.parse()?),
		false => Value::Integer(
			literal.parse::<BigInt>().map_err(|_| EvalError::UnknownToken(literal.to_string()))?
		),
	};
	Ok(Token::Operand(value))
}

/// Returns true if the char at index keeps extending the numeric literal parsed so far.
fn continues_number(literal: &str, chars: &[char], index: usize) -> bool {
	let has_exponent = literal.contains(|chr: char| chr == 'e' || chr == 'E');
	let is_digit_at = |index: usize| chars.get(index).is_some_and(|chr| chr.is_ascii_digit());
	match chars.get(index) {
		Some(chr) if chr.is_ascii_digit() => true,
		Some('.') => !literal.contains('.') && !has_exponent,
		Some('e' | 'E') if !has_exponent => {
			is_digit_at(index + 1) || (matches!(chars.get(index + 1), Some('+' | '-')) && is_digit_at(index + 2))
		}
		Some('+' | '-') => literal.ends_with(|chr: char| chr == 'e' || chr == 'E'),
		_ => false,
	}
}

/// Converts a line of infix text into tokens.
/// Identifiers that are neither constants nor catalog names become variables from the table.
pub fn tokenize_line(catalog: &Catalog, variables: &mut impl VariableTable, line: &str) -> Result<Vec<Token>> {
	let mut out = Vec::new();
	let mut current_token_string = String::new();
	let mut parsing_type = ParsingType::None;
	let chars: Vec<char> = line.chars().collect();
	// For each char in the line
	for (index, this_char) in chars.iter().enumerate() {
		let this_char = *this_char;
		// If we are not parsing a token (we should be at the start of a token or whitespace)
		if parsing_type == ParsingType::None {
			// Separators are single-char so just convert them to a token and continue to the next char
			if let Some(separator) = Separator::from_char(this_char) {
				out.push(Token::Separator(separator));
				continue;
			}
			// Determine what we are parsing
			parsing_type = match this_char {
				chr if chr.is_whitespace() => continue,
				chr if chr.is_ascii_digit() => ParsingType::NumericalLiteral,
				'.' if chars.get(index + 1).is_some_and(|chr| chr.is_ascii_digit()) => ParsingType::NumericalLiteral,
				chr if is_operator_char(chr) => ParsingType::OperatorNonAlphabetic,
				chr if chr.is_alphabetic() || chr == '_' => ParsingType::IdentifierKeyword,
				chr => return Err(EvalError::UnknownToken(chr.to_string())),
			};
		}
		current_token_string.push(this_char);
		// Check if we should end the token here
		let next_char = chars.get(index + 1).copied();
		let end_token = match (parsing_type, next_char) {
			(_, None) => true,
			(ParsingType::NumericalLiteral, _) => !continues_number(&current_token_string, &chars, index + 1),
			(ParsingType::OperatorNonAlphabetic, Some(next_char)) => !is_operator_char(next_char),
			(ParsingType::IdentifierKeyword, Some(next_char)) => !(next_char.is_alphanumeric() || next_char == '_'),
			(ParsingType::None, _) => true,
		};
		// Continue if the token does not end with this char
		if !end_token {
			continue;
		}
		let token_string = mem::take(&mut current_token_string);
		match parsing_type {
			ParsingType::NumericalLiteral => out.push(parse_number(&token_string)?),
			ParsingType::OperatorNonAlphabetic => push_operators(&mut out, &token_string)?,
			ParsingType::IdentifierKeyword => {
				let token = match (constant(&token_string), catalog.get(&token_string)) {
					(Some(value), _) => Token::Operand(value),
					(None, Some(operation)) => operation.into(),
					(None, None) => Token::Operand(Value::Variable(variables.variable(&token_string))),
				};
				out.push(token);
			}
			ParsingType::None => {}
		}
		parsing_type = ParsingType::None;
	}
	trace!(line, tokens = out.len(), "tokenized line");
	Ok(out)
}
