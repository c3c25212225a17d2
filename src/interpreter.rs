/// The environment module implements lexical scoping.
///
/// Bindings live in frames that form a parent-linked chain; lookup walks
/// from the innermost frame outward. Function values hold handles into this
/// chain, which is what gives closures their captured scope.
pub mod env;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic with broadcasting, manages scopes, dispatches calls
/// to user functions and built-ins, and reports runtime errors.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads raw source text and produces a stream of tokens paired
/// with their line numbers. Unicode Greek identifier characters (μ, σ, Σ)
/// are handled here, as are multi-character operators such as `**`, `=>`
/// and `..`.
pub mod lexer;
/// The parser module builds the abstract syntax tree from tokens.
///
/// A recursive-descent parser with one token of lookahead. The only place
/// that needs more is the function-declaration commit, which clones the
/// token iterator to peek past a balanced parameter list.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Declares the `Value` enum and its display, truthiness, and conversion
/// behavior, including the promotion rules between integers and floats.
pub mod value;
