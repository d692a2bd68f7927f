pub mod converter;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operation;
pub mod value;

use std::sync::Once;

pub use converter::convert;
pub use error::{ErrorKind, EvalError, Result};
pub use evaluator::{evaluate, Evaluator};
pub use lexer::{separator::Separator, token::Token, tokenize::tokenize_line};
pub use operation::{Catalog, Function, Operator};
pub use value::{Real, Value, ValueKind, Variable, VariableTable, Variables, WORKING_PRECISION};

static TRACING_INIT: Once = Once::new();

/// Installs a tracing subscriber filtered by `RUST_LOG`.
/// Nothing is installed when the variable is unset.
pub fn init_tracing() {
	TRACING_INIT.call_once(|| {
		use tracing_subscriber::{fmt, prelude::*, EnvFilter};

		// Only initialize if RUST_LOG is set
		if std::env::var("RUST_LOG").is_ok() {
			let filter = EnvFilter::from_default_env();
			tracing_subscriber::registry()
				.with(fmt::layer().with_target(true).with_level(true))
				.with(filter)
				.init();
		}
	});
}

/// Tokenizes, converts and evaluates one line of infix text.
pub fn evaluate_line(evaluator: &mut Evaluator, variables: &mut impl VariableTable, line: &str) -> Result<Value> {
	let tokens = tokenize_line(Catalog::global(), variables, line)?;
	evaluator.evaluate_infix(tokens)
}
