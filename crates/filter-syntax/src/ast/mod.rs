pub mod clause;
pub mod filter;
pub mod literal;
pub mod operator;
pub mod target;
