use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::i64_to_u32_checked,
};

/// Evaluates an exponentiation operation.
///
/// An integer base with a non-negative integer exponent uses checked
/// integer arithmetic and stays `Int` (so `0 ** 0` is `1`). A negative
/// integer exponent, or any float on either side, promotes to `Float` and
/// uses `powf`.
///
/// # Parameters
/// - `base`: The base value.
/// - `exponent`: The exponent value.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing `base ** exponent`.
///
/// # Example
/// ```
/// use shark::interpreter::{evaluator::binary::power::eval_pow, value::core::Value};
///
/// assert_eq!(eval_pow(&Value::Int(2), &Value::Int(10), 1).unwrap(),
///            Value::Int(1024));
/// assert_eq!(eval_pow(&Value::Int(2), &Value::Int(-1), 1).unwrap(),
///            Value::Float(0.5));
/// ```
pub fn eval_pow(base: &Value, exponent: &Value, line: usize) -> EvalResult<Value> {
    use Value::{Float, Int};

    match (base, exponent) {
        (Int(b), Int(e)) => {
            if *e < 0 {
                Ok(Float(base.as_f64(line)?.powf(exponent.as_f64(line)?)))
            } else {
                b.checked_pow(i64_to_u32_checked(*e, line)?)
                 .map(Int)
                 .ok_or(RuntimeError::Overflow { line })
            }
        },
        _ if base.is_numeric() && exponent.is_numeric() => {
            Ok(Float(base.as_f64(line)?.powf(exponent.as_f64(line)?)))
        },
        _ => Err(RuntimeError::Type { details: format!("cannot apply '**' to {} and {}",
                                                       base.kind(),
                                                       exponent.kind()),
                                      line }),
    }
}
