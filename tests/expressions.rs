use pretty_assertions::assert_eq;
use strum::IntoEnumIterator;
use swamp_rpn::{
	evaluate, evaluate_line, ErrorKind, EvalError, Evaluator, Function, Operator, Real, Result, Token, Value,
	VariableTable, Variables,
};

fn calculate(line: &str) -> Result<Value> {
	evaluate_line(&mut Evaluator::new(), &mut Variables::new(), line)
}

fn real(text: &str) -> Value {
	Value::Real(text.parse().unwrap())
}

#[test]
fn left_associativity() {
	assert_eq!(calculate("2 - 3 - 4").unwrap(), Value::from(-5));
	assert_eq!(calculate("100 / 10 / 5").unwrap(), Value::from(2));
}

#[test]
fn right_associativity() {
	assert_eq!(calculate("2 ^ 3 ^ 2").unwrap(), Value::from(512));
	assert_eq!(calculate("2 ** 3 ** 2").unwrap(), Value::from(512));
}

#[test]
fn precedence() {
	assert_eq!(calculate("2 + 3 * 4").unwrap(), Value::from(14));
	assert_eq!(calculate("-2 ^ 2").unwrap(), Value::from(-4));
	assert_eq!(calculate("2 * 3! + 1").unwrap(), Value::from(13));
	assert_eq!(calculate("1 + 2 < 4 and 3 != 4").unwrap(), Value::from(true));
}

#[test]
fn grouping() {
	assert_eq!(calculate("(1 + 2) * (3 + 4)").unwrap(), Value::from(21));
	assert_eq!(calculate("-(2 + 3)").unwrap(), Value::from(-5));
}

#[test]
fn promotion() {
	assert_eq!(calculate("2 + 3.5").unwrap(), real("5.5"));
	assert_eq!(calculate("2 + 3").unwrap().kind(), swamp_rpn::ValueKind::Integer);
	assert_eq!(calculate("7 / 2").unwrap(), Value::from(3));
	assert_eq!(calculate("7.0 / 2").unwrap(), real("3.5"));
	assert_eq!(calculate("2 ^ -2").unwrap(), real("0.25"));
}

#[test]
fn mismatched_parentheses() {
	assert_eq!(calculate("(1 + 2").unwrap_err().kind(), ErrorKind::MismatchedParenthesis);
	assert_eq!(calculate("1 + 2)").unwrap_err().kind(), ErrorKind::MismatchedParenthesis);
}

#[test]
fn assignment_chaining() {
	let mut evaluator = Evaluator::new();
	let mut variables = Variables::new();
	assert_eq!(evaluate_line(&mut evaluator, &mut variables, "x = 5").unwrap(), Value::from(5));
	assert_eq!(evaluate_line(&mut evaluator, &mut variables, "x + 1").unwrap(), Value::from(6));
	assert_eq!(evaluate_line(&mut evaluator, &mut variables, "a = b = x * 2").unwrap(), Value::from(10));
	assert_eq!(variables.lookup("a"), Some(Value::from(10)));
	assert_eq!(variables.lookup("b"), Some(Value::from(10)));
	assert_eq!(evaluate_line(&mut evaluator, &mut variables, "x = x + 1").unwrap(), Value::from(6));
	assert_eq!(variables.lookup("x"), Some(Value::from(6)));
}

#[test]
fn assignment_errors() {
	assert_eq!(calculate("3 = 4").unwrap_err().kind(), ErrorKind::InvalidAssignmentTarget);
	assert_eq!(calculate("y + 1").unwrap_err(), EvalError::UnboundVariable("y".into()));
}

#[test]
fn stack_balance() {
	let mut postfix = vec![Token::Operand(Value::from(1))];
	postfix.push(Token::Operand(Value::from(2)));
	assert_eq!(evaluate(postfix).unwrap_err(), EvalError::TooManyOperands(2));
	assert_eq!(calculate("").unwrap_err().kind(), ErrorKind::InsufficientOperands);
	assert_eq!(calculate("1 2").unwrap_err().kind(), ErrorKind::TooManyOperands);
}

#[test]
fn factorial_domain() {
	assert_eq!(calculate("0!").unwrap(), Value::from(1));
	assert_eq!(calculate("(-1)!").unwrap_err().kind(), ErrorKind::DomainError);
	assert_eq!(calculate("2.5!").unwrap_err().kind(), ErrorKind::TypeMismatch);
	assert_eq!(calculate("25!").unwrap(), Value::from("15511210043330985984000000".parse::<num::BigInt>().unwrap()));
}

#[test]
fn every_operation_checks_its_arity() {
	let operations = Operator::iter().map(|operator| (Token::Operator(operator), operator.descriptor().arity))
		.chain(Function::iter().map(|function| (Token::Function(function), function.descriptor().arity)));
	for (token, arity) in operations {
		let mut postfix: Vec<Token> = (1..arity as i64).map(|value| Token::Operand(Value::from(value))).collect();
		postfix.push(token.clone());
		let error = evaluate(postfix).unwrap_err();
		assert_eq!(error.kind(), ErrorKind::InsufficientOperands, "{token:?}");
	}
}

#[test]
fn functions() {
	assert_eq!(calculate("max(3, 7.5)").unwrap(), real("7.5"));
	assert_eq!(calculate("min(3, -7)").unwrap(), Value::from(-7));
	assert_eq!(calculate("pow(2, 10)").unwrap(), Value::from(1024));
	assert_eq!(calculate("abs(-4)").unwrap(), Value::from(4));
	assert_eq!(calculate("floor(-2.5)").unwrap(), real("-3"));
	assert_eq!(calculate("ceil(2.1)").unwrap(), real("3"));
	assert_eq!(calculate("sqrt(16)").unwrap(), real("4"));
	assert_eq!(calculate("sin(0)").unwrap(), real("0"));
	assert_eq!(calculate("sqrt(-1)").unwrap_err().kind(), ErrorKind::DomainError);
	assert_eq!(calculate("ln(0)").unwrap_err().kind(), ErrorKind::DomainError);
	assert_eq!(calculate("arcsin(2)").unwrap_err().kind(), ErrorKind::DomainError);
}

#[test]
fn transcendental_values() {
	let close = |line: &str, expected: &str| {
		let Value::Real(value) = calculate(line).unwrap() else {
			panic!("{line} did not produce a real");
		};
		let expected: Real = expected.parse().unwrap();
		let difference = (value - expected).abs();
		assert!(difference < "1e-900".parse().unwrap(), "{line}");
	};
	close("log(1000)", "3");
	close("lb(1024)", "10");
	close("ln(e)", "1");
	close("exp(0)", "1");
	close("cos(pi)", "-1");
	close("arctan2(1, 0) * 2", &Real::pi().to_string());
	close("tan(pi / 4)", "1");
	close("4 ^ 0.5", "2");
}

#[test]
fn booleans() {
	assert_eq!(calculate("true and not false").unwrap(), Value::from(true));
	assert_eq!(calculate("true xor true").unwrap(), Value::from(false));
	assert_eq!(calculate("true == false").unwrap(), Value::from(false));
	assert_eq!(calculate("1 and true").unwrap_err().kind(), ErrorKind::TypeMismatch);
	assert_eq!(calculate("true < 1").unwrap_err().kind(), ErrorKind::TypeMismatch);
	assert_eq!(calculate("2 > 1").unwrap().to_string(), "True");
}

#[test]
fn not_reads_through_variables() {
	let mut evaluator = Evaluator::new();
	let mut variables = Variables::new();
	evaluate_line(&mut evaluator, &mut variables, "b = true").unwrap();
	assert_eq!(evaluate_line(&mut evaluator, &mut variables, "not b").unwrap(), Value::from(false));
	assert_eq!(evaluate_line(&mut evaluator, &mut variables, "not not b").unwrap(), Value::from(true));
}

#[test]
fn extreme_magnitudes() {
	assert_eq!(calculate("1 / 1e-1001").unwrap(), real("1e1001"));
	assert_eq!(calculate("1e-1001 == 0").unwrap(), Value::from(false));
	assert_eq!(calculate("1e-1500 * 1e1500").unwrap(), real("1"));
	assert_eq!(calculate("1e-999999 / 1e10").unwrap(), real("0"));
	assert_eq!(calculate("2e999999 * 10").unwrap_err().kind(), ErrorKind::DomainError);
}

#[test]
fn negative_power_of_a_fraction() {
	let Value::Real(value) = calculate("0.5 ^ -4000").unwrap() else {
		panic!("0.5 ^ -4000 did not produce a real");
	};
	let expected = Real::from(num::pow(num::BigInt::from(2), 4000));
	let tolerance = expected.clone() * "1e-990".parse::<Real>().unwrap();
	assert!((value - expected).abs() < tolerance);
}

#[test]
fn oversized_results_are_rejected() {
	assert_eq!(calculate("1e3000000000").unwrap_err().kind(), ErrorKind::DomainError);
	assert_eq!(calculate("2 ^ 1000000000000000000").unwrap_err().kind(), ErrorKind::DomainError);
	assert_eq!(calculate("1000000!").unwrap_err().kind(), ErrorKind::DomainError);
	assert_eq!(calculate("exp(1e10)").unwrap_err().kind(), ErrorKind::DomainError);
	assert_eq!(calculate("(-1) ^ 1000000000000000001").unwrap(), Value::from(-1));
}

#[test]
fn division_by_zero() {
	assert_eq!(calculate("1 / 0").unwrap_err().kind(), ErrorKind::DomainError);
	assert_eq!(calculate("1.5 % 0").unwrap_err().kind(), ErrorKind::DomainError);
}

#[test]
fn result_history() {
	let mut evaluator = Evaluator::new();
	let mut variables = Variables::new();
	evaluate_line(&mut evaluator, &mut variables, "6 * 7").unwrap();
	evaluate_line(&mut evaluator, &mut variables, "1 + 1").unwrap();
	assert_eq!(evaluate_line(&mut evaluator, &mut variables, "result(1) + result(2)").unwrap(), Value::from(44));
	assert_eq!(evaluate_line(&mut evaluator, &mut variables, "result(9)").unwrap_err().kind(), ErrorKind::DomainError);
}

#[test]
fn unknown_tokens() {
	assert_eq!(calculate("2 # 3").unwrap_err().kind(), ErrorKind::UnknownToken);
	assert_eq!(Token::from_name(swamp_rpn::Catalog::global(), "Frobnicate").unwrap_err().kind(), ErrorKind::UnknownToken);
}
