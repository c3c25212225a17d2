#[derive(Debug, PartialEq)]
/// Represents all errors that can be raised during evaluation.
pub enum RuntimeError {
    /// Read of an unbound identifier, or assignment to one.
    Name {
        /// The name that failed to resolve.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operator or built-in was applied to incompatible kinds of values.
    Type {
        /// Details about the mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The wrong number of arguments was supplied to a function.
    Arity {
        /// The name of the callee.
        name:     String,
        /// A description of the accepted argument count.
        expected: String,
        /// The number of arguments actually supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An elementwise operation received arrays of differing length.
    ShapeMismatch {
        /// Length of the left operand.
        left:  usize,
        /// Length of the right operand.
        right: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Attempted division (or modulo) by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A reduction received fewer elements than it requires.
    EmptyReduction {
        /// The name of the reduction.
        name:   String,
        /// The minimum number of elements it accepts.
        needed: usize,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// Tried to access an array element outside the valid bounds.
    IndexOutOfBounds {
        /// The index that was requested.
        index: i64,
        /// The length of the indexed array.
        len:   usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// 64-bit integer arithmetic overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name { name, line } => {
                write!(f, "NameError: name '{name}' is not defined (line {line})")
            },
            Self::Type { details, line } => write!(f, "TypeError: {details} (line {line})"),
            Self::Arity { name,
                          expected,
                          found,
                          line, } => write!(f,
                                            "ArityError: {name} expects {expected} argument(s), got {found} (line {line})"),
            Self::ShapeMismatch { left, right, line } => write!(f,
                                                               "ShapeMismatch: operands have lengths {left} and {right} (line {line})"),
            Self::DivisionByZero { line } => {
                write!(f, "DivisionByZero: division by zero (line {line})")
            },
            Self::EmptyReduction { name, needed, line } => write!(f,
                                                                 "EmptyReduction: {name} requires at least {needed} element(s) (line {line})"),
            Self::IndexOutOfBounds { index, len, line } => write!(f,
                                                                 "IndexError: index {index} out of range for length {len} (line {line})"),
            Self::Overflow { line } => write!(f, "Overflow: integer overflow (line {line})"),
        }
    }
}

impl std::error::Error for RuntimeError {}
