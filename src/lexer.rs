pub mod separator;
pub mod token;
pub mod tokenize;
