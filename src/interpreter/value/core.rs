use std::rc::Rc;

use crate::{
    ast::{LiteralValue, Param, Stmt},
    error::RuntimeError,
    interpreter::{
        env::Env,
        evaluator::{core::EvalResult, function::core::BuiltinDef},
    },
    util::num::i64_to_f64_checked,
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// assignments, function returns, and conditions.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer. Integer arithmetic is exact and checked.
    Int(i64),
    /// A 64-bit IEEE-754 floating-point number, promoted from `Int` as
    /// needed.
    Float(f64),
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// An immutable string.
    Str(String),
    /// An ordered sequence of values. Arrays are value-typed: every
    /// operation that would modify one returns a new array instead.
    Array(Rc<Vec<Self>>),
    /// The result of statements that produce no value.
    Unit,
    /// A user-defined function together with its captured environment.
    Function(Rc<FunctionValue>),
    /// A native built-in function registered in the global frame.
    Builtin(&'static BuiltinDef),
}

/// A user-defined function value: parameters, body, and the environment
/// handle captured at the point of declaration.
///
/// The environment is captured by reference, so top-level recursion and
/// mutually recursive declarations resolve each other through the shared
/// global frame.
pub struct FunctionValue {
    /// The declared name, used in arity error messages.
    pub name:   String,
    /// The parameter list. Type annotations are already discarded here.
    pub params: Vec<Param>,
    /// The body statements.
    pub body:   Vec<Stmt>,
    /// The environment the function was declared in.
    pub env:    Env,
}

impl std::fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The captured environment may be cyclic through this very value, so
        // it is deliberately left out.
        f.debug_struct("FunctionValue")
         .field("name", &self.name)
         .field("params", &self.params)
         .finish_non_exhaustive()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Unit, Self::Unit) => true,
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => std::ptr::eq(*a, *b),
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Int(i) => (*i).into(),
            LiteralValue::Float(r) => (*r).into(),
            LiteralValue::Bool(b) => (*b).into(),
            LiteralValue::Str(s) => Self::Str(s.clone()),
        }
    }
}

impl Value {
    /// A short lowercase name for the value's kind, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::Str(_) => "string",
            Self::Array(_) => "array",
            Self::Unit => "unit",
            Self::Function(_) => "function",
            Self::Builtin(_) => "builtin",
        }
    }

    /// Decides the truth value of this value.
    ///
    /// `false`, `0`, `0.0`, the empty string, the empty array and `Unit` are
    /// falsy; everything else is truthy.
    ///
    /// # Example
    /// ```
    /// use shark::interpreter::value::core::Value;
    ///
    /// assert!(Value::Int(3).is_truthy());
    /// assert!(!Value::Float(0.0).is_truthy());
    /// assert!(!Value::Str(String::new()).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Int(n) => *n != 0,
            Self::Float(r) => *r != 0.0,
            Self::Str(s) => !s.is_empty(),
            Self::Array(a) => !a.is_empty(),
            Self::Unit => false,
            Self::Function(_) | Self::Builtin(_) => true,
        }
    }

    /// Returns `true` if the value is numeric (`Int` or `Float`).
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Integers convert only when exactly representable.
    ///
    /// # Errors
    /// - `RuntimeError::Type` if the value is not numeric.
    /// - `RuntimeError::Overflow` if an integer exceeds the exact `f64`
    ///   range.
    pub fn as_f64(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Float(r) => Ok(*r),
            Self::Int(n) => i64_to_f64_checked(*n, line),
            other => Err(RuntimeError::Type { details: format!("expected a number, found {}",
                                                               other.kind()),
                                              line }),
        }
    }

    /// Converts the value to an `i64`, or returns an error if it is not an
    /// integer.
    ///
    /// # Errors
    /// Returns `RuntimeError::Type` for any non-`Int` value; floats are not
    /// silently truncated.
    pub fn as_int(&self, line: usize) -> EvalResult<i64> {
        match self {
            Self::Int(n) => Ok(*n),
            other => Err(RuntimeError::Type { details: format!("expected an integer, found {}",
                                                               other.kind()),
                                              line }),
        }
    }

}

/// Formats a float with at least one fractional digit, trimming trailing
/// zeros but keeping `.0` on whole numbers.
fn fmt_float(f: &mut std::fmt::Formatter<'_>, r: f64) -> std::fmt::Result {
    if r.is_finite() && r.fract() == 0.0 {
        write!(f, "{r:.1}")
    } else {
        write!(f, "{r}")
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(r) => fmt_float(f, *r),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Array(a) => {
                write!(f, "[")?;
                for (index, value) in a.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, "]")
            },
            Self::Unit => Ok(()),
            Self::Function(_) => write!(f, "<function>"),
            Self::Builtin(def) => write!(f, "<builtin:{}>", def.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Value;

    #[test]
    fn float_display_keeps_a_fractional_digit() {
        assert_eq!(Value::Float(55.0).to_string(), "55.0");
        assert_eq!(Value::Float(30.28).to_string(), "30.28");
        assert_eq!(Value::Float(-0.5).to_string(), "-0.5");
    }

    #[test]
    fn array_display_joins_with_comma_space() {
        let v = Value::from(vec![Value::Int(1), Value::Float(2.5), Value::Bool(true)]);
        assert_eq!(v.to_string(), "[1, 2.5, true]");
    }

    #[test]
    fn unit_displays_as_empty() {
        assert_eq!(Value::Unit.to_string(), "");
    }
}
