pub mod literal;
pub mod node;
pub mod operator;
pub mod span;
