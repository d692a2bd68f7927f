use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// Grouping and argument punctuation. Only the converter consumes these.
#[derive(Debug, Clone, Copy, EnumIter, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Separator {
	LeftParenthesis,
	RightParenthesis,
	ArgumentSeparator,
}

impl Separator {
	/// Takes a char and returns the separator written with it, if any.
	pub fn from_char(chr: char) -> Option<Self> {
		Self::iter().find(|separator| separator.get_symbol_char() == chr)
	}

	/// Returns the separator character
	pub const fn get_symbol_char(&self) -> char {
		match self {
			Self::LeftParenthesis => '(',
			Self::RightParenthesis => ')',
			Self::ArgumentSeparator => ',',
		}
	}

	pub const fn get_name(&self) -> &'static str {
		match self {
			Self::LeftParenthesis => "LeftParenthesis",
			Self::RightParenthesis => "RightParenthesis",
			Self::ArgumentSeparator => "ArgumentSeparator",
		}
	}
}
