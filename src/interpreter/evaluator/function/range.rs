use crate::interpreter::{evaluator::core::EvalResult, value::core::Value};

/// Builds the half-open integer range `[lo, lo+1, ..., hi-1]` as an array.
///
/// Empty when `lo >= hi`.
#[must_use]
pub fn materialize(lo: i64, hi: i64) -> Value {
    Value::from((lo..hi).map(Value::Int).collect::<Vec<_>>())
}

/// The `range` builtin.
///
/// `range(hi)` counts from zero; `range(lo, hi)` counts from `lo`. Both
/// bounds must be integers and the upper bound is exclusive.
///
/// # Errors
/// `RuntimeError::Type` when a bound is not an integer.
pub fn range(args: &[Value], line: usize) -> EvalResult<Value> {
    let (lo, hi) = match args {
        [hi] => (0, hi.as_int(line)?),
        [lo, hi] => (lo.as_int(line)?, hi.as_int(line)?),
        _ => unreachable!("arity checked by the dispatcher"),
    };
    Ok(materialize(lo, hi))
}
