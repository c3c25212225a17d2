/// Binary operator evaluation: dispatch, broadcasting, arithmetic,
/// exponentiation and comparisons.
pub mod binary;
/// The interpreter core: statement execution, expression evaluation, and the
/// non-local `return` signal.
pub mod core;
/// Built-in functions and user-function calls.
pub mod function;
/// Unary operator evaluation.
pub mod unary;
