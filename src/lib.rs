//! # shark
//!
//! Shark is a small dynamically-typed interpreted language for statistics:
//! vectorized arithmetic on numeric arrays, a built-in library of
//! statistical reductions, `?`/`otherwise` conditionals, `=>` function
//! definitions, and the Greek letters μ, σ and Σ as first-class aliases for
//! `mean`, `stdev` and `sum`.
//!
//! ```
//! use shark::Session;
//!
//! let mut session = Session::new();
//! session.evaluate_line("var v = [1, 2, 3, 4, 5];").unwrap();
//! assert_eq!(session.evaluate_line("sum(v * 2);").unwrap(),
//!            Some("30".to_string()));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Stmt,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Flow, Interp},
        lexer::lex,
        parser::core::parse_program,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Stmt` enums that represent the
/// syntactic structure of source code as a tree, with source line numbers
/// attached to every node for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// Every failure mode carries the source line it was raised on and renders
/// as `<ErrorKind>: <message> (line <N>)`. The `SharkError` sum unifies the
/// three pipeline stages for the public entry points.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together the lexer, parser, value model, environment
/// and evaluator to provide a complete runtime for Shark source code.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

pub use error::SharkError;

/// Drives a fresh interpreter session over an entire source text.
///
/// The text is parsed completely up front, then evaluated statement by
/// statement against a new global frame. The first error of any stage
/// aborts execution and is returned.
///
/// # Errors
/// Returns the first lex, parse, or runtime error encountered.
///
/// # Examples
/// ```
/// use shark::evaluate_source;
///
/// assert!(evaluate_source("var x = 1 + 2;").is_ok());
///
/// // 'y' is never defined, so evaluation fails.
/// assert!(evaluate_source("var z = y + 1;").is_err());
/// ```
pub fn evaluate_source(source: &str) -> Result<(), SharkError> {
    let tokens = lex(source)?;
    let mut iter = tokens.iter().peekable();
    let program = parse_program(&mut iter)?;

    let interp = Interp::new();
    interp.run(&program)?;
    Ok(())
}

/// A persistent interpreter session for REPL use.
///
/// The global frame survives across calls to [`Session::evaluate_line`]. A
/// statement that fails leaves no partial effects: the global frame's
/// bindings are checkpointed before each top-level statement and restored
/// if it errors.
pub struct Session {
    interp: Interp,
}

#[allow(clippy::new_without_default)]
impl Session {
    /// Creates a session whose global frame holds the built-ins and the
    /// Greek aliases.
    #[must_use]
    pub fn new() -> Self {
        Self { interp: Interp::new() }
    }

    /// Parses and evaluates zero or more top-level statements against the
    /// session's global frame.
    ///
    /// Returns the display form of the last expression statement that
    /// produced a value, if any. Statements and `Unit`-valued expressions
    /// produce nothing.
    ///
    /// # Errors
    /// Returns the first lex, parse, or runtime error. On a runtime error
    /// the global frame is rolled back to its state before the failing
    /// statement, so the session remains usable.
    ///
    /// # Examples
    /// ```
    /// use shark::Session;
    ///
    /// let mut session = Session::new();
    /// session.evaluate_line("var μ = mean([1, 2, 3]);").unwrap();
    /// assert_eq!(session.evaluate_line("μ;").unwrap(), Some("2.0".to_string()));
    ///
    /// // A failing statement does not corrupt the session.
    /// assert!(session.evaluate_line("var broken = nope;").is_err());
    /// assert!(session.evaluate_line("broken;").is_err());
    /// assert_eq!(session.evaluate_line("μ;").unwrap(), Some("2.0".to_string()));
    /// ```
    pub fn evaluate_line(&mut self, source: &str) -> Result<Option<String>, SharkError> {
        let tokens = lex(source)?;
        let mut iter = tokens.iter().peekable();
        let program = parse_program(&mut iter)?;

        let mut last = None;
        for stmt in &program {
            let checkpoint = self.interp.globals().snapshot();
            match self.exec_top(stmt) {
                Ok(Some(display)) => last = Some(display),
                Ok(None) => {},
                Err(e) => {
                    self.interp.globals().restore(checkpoint);
                    return Err(e.into());
                },
            }
        }
        Ok(last)
    }

    /// Executes one top-level statement, capturing the display form of
    /// expression statements.
    fn exec_top(&self, stmt: &Stmt) -> EvalResult<Option<String>> {
        match stmt {
            Stmt::Expression { expr, .. } => {
                match self.interp.eval_expr(expr, self.interp.globals())? {
                    Value::Unit => Ok(None),
                    value => Ok(Some(value.to_string())),
                }
            },
            _ => match self.interp.exec_stmt(stmt, self.interp.globals())? {
                Flow::Normal => Ok(None),
                Flow::Return(_) => {
                    Err(RuntimeError::Type { details:
                                                 "'return' used outside of a function".to_string(),
                                             line:    stmt.line_number(), })
                },
            },
        }
    }
}
