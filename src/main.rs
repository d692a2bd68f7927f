use std::io::{stdin, stdout, Write};

use swamp_rpn::{
	converter::{convert, render},
	init_tracing, tokenize_line, Catalog, Evaluator, Variables,
};

fn main() {
	init_tracing();
	// Create main struct
	let mut main_struct = Main::new();
	// Starting message
	println!("--- Swamp RPN {}, type \"exit\" to exit. ---", env!("CARGO_PKG_VERSION"));
	// Main loop until exit typed or input ends
	'main_loop: loop {
		print!(">");
		if stdout().flush().is_err() {
			break;
		}
		// Get lines
		let mut input_text = String::new();
		match stdin().read_line(&mut input_text) {
			Ok(0) | Err(_) => break,
			Ok(_) => {}
		}
		// For each line
		for line in input_text.lines() {
			// Exit if the line asked to
			if interpret_line(&mut main_struct, line) {
				break 'main_loop;
			}
		}
	}
}

/// Interpret a line that is a string slice.
/// Should not contain any newline chars.
/// Returns whether to exit.
fn interpret_line(main_struct: &mut Main, line: &str) -> bool {
	// Remove starting whitespaces
	let line = line.trim_start();
	// Get first word of line
	let first_word_end = line.find(|chr: char| chr.is_whitespace()).unwrap_or(line.len());
	let first_word = &line[..first_word_end];
	let line_without_first_word = &line[first_word_end..];

	if first_word.is_empty() {
		return false;
	}
	// Exit if exit is entered
	if first_word.eq_ignore_ascii_case("exit") {
		return true;
	}
	// List bound variables
	if first_word.eq_ignore_ascii_case("vars") {
		for (name, value) in main_struct.variables.bound() {
			println!("{name} = {value}");
		}
		return false;
	}
	// "tokens" and "postfix" print an intermediate stage instead of evaluating
	let (line_body, print_tokens, print_postfix) = if first_word.eq_ignore_ascii_case("tokens") {
		(line_without_first_word, true, false)
	}
	else if first_word.eq_ignore_ascii_case("postfix") {
		(line_without_first_word, false, true)
	}
	else {
		(line, false, false)
	};

	// Tokenize line body
	let tokens = match tokenize_line(main_struct.catalog, &mut main_struct.variables, line_body) {
		Ok(tokens) => tokens,
		Err(error) => {
			println!("Lexer error: {error}");
			return false;
		}
	};
	// Print tokens if asked to and return
	if print_tokens {
		for token in tokens {
			println!("{token:?}");
		}
		return false;
	}
	// Convert to postfix
	let postfix = match convert(tokens) {
		Ok(postfix) => postfix,
		Err(error) => {
			println!("Conversion error: {error}");
			return false;
		}
	};
	if print_postfix {
		println!("{}", render(&postfix));
		return false;
	}
	// Evaluate
	match main_struct.evaluator.evaluate(postfix) {
		Ok(value) => println!("{value}"),
		Err(error) => println!("Evaluation error: {error}"),
	}
	false
}

pub struct Main {
	catalog: &'static Catalog,
	variables: Variables,
	evaluator: Evaluator,
}

impl Main {
	pub fn new() -> Self {
		Self {
			catalog: Catalog::global(),
			variables: Variables::new(),
			evaluator: Evaluator::new(),
		}
	}
}
