use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Orders two values.
///
/// Numbers order numerically after promotion; strings order
/// lexicographically. Every other pairing, arrays included, is a type
/// error; ordering comparisons do not broadcast.
///
/// # Errors
/// Returns `RuntimeError::Type` for unordered kinds or NaN operands.
pub fn compare_values(left: &Value, right: &Value, line: usize) -> EvalResult<Ordering> {
    match (left, right) {
        (Value::Str(a), Value::Str(b)) => Ok(a.cmp(b)),
        _ if left.is_numeric() && right.is_numeric() => {
            let l = left.as_f64(line)?;
            let r = right.as_f64(line)?;
            l.partial_cmp(&r)
             .ok_or_else(|| RuntimeError::Type { details: "cannot order NaN values".to_string(),
                                                 line })
        },
        _ => Err(RuntimeError::Type { details: format!("cannot compare {} and {}",
                                                       left.kind(),
                                                       right.kind()),
                                      line }),
    }
}

/// Evaluates an ordering comparison (`<`, `>`, `<=`, `>=`).
pub fn eval_ordering(op: BinaryOperator,
                     left: &Value,
                     right: &Value,
                     line: usize)
                     -> EvalResult<Value> {
    let ordering = compare_values(left, right, line)?;
    let result = match op {
        BinaryOperator::Less => ordering == Ordering::Less,
        BinaryOperator::Greater => ordering == Ordering::Greater,
        BinaryOperator::LessEqual => ordering != Ordering::Greater,
        BinaryOperator::GreaterEqual => ordering != Ordering::Less,
        _ => unreachable!("not an ordering operator"),
    };
    Ok(Value::Bool(result))
}

/// Checks loose equality between two values, the semantics of `==`.
///
/// Numbers compare numerically across the `Int`/`Float` divide, so
/// `1 == 1.0`. Arrays compare element-wise and collapse to a single
/// boolean; differing lengths are simply unequal. Values of differing,
/// non-numeric kinds are unequal rather than an error.
///
/// # Example
/// ```
/// use shark::interpreter::{evaluator::binary::comparison::loose_eq, value::core::Value};
///
/// assert!(loose_eq(&Value::Int(1), &Value::Float(1.0)));
/// assert!(!loose_eq(&Value::Int(0), &Value::Str("0".to_string())));
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn loose_eq(left: &Value, right: &Value) -> bool {
    use Value::{Array, Float, Int};

    match (left, right) {
        (Int(a), Int(b)) => a == b,
        (Float(a), Float(b)) => a == b,
        (Int(a), Float(b)) | (Float(b), Int(a)) => (*a as f64) == *b,
        (Array(a), Array(b)) => {
            a.len() == b.len() && a.iter().zip(b.iter()).all(|(l, r)| loose_eq(l, r))
        },
        _ => left == right,
    }
}
