pub mod integer;
pub mod power;
pub mod real;
pub mod value;
pub mod variable;
mod operations;

pub use real::{Real, WORKING_PRECISION};
pub use value::{Value, ValueKind};
pub use variable::{Variable, VariableTable, Variables};
