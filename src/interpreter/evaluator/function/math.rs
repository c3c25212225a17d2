use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::power::eval_pow, core::EvalResult},
        value::core::Value,
    },
    util::num::f64_to_i64_checked,
};

/// Square root of a non-negative number, always a `Float`.
///
/// # Errors
/// `RuntimeError::Type` for non-numeric or negative arguments.
pub fn sqrt(args: &[Value], line: usize) -> EvalResult<Value> {
    let x = args[0].as_f64(line)?;
    if x < 0.0 {
        return Err(RuntimeError::Type { details: "sqrt of a negative number".to_string(),
                                        line });
    }
    Ok(Value::Float(x.sqrt()))
}

/// Absolute value, preserving the numeric variant.
///
/// # Errors
/// `RuntimeError::Type` for non-numeric arguments; `RuntimeError::Overflow`
/// for `abs(i64::MIN)`.
pub fn abs(args: &[Value], line: usize) -> EvalResult<Value> {
    match &args[0] {
        Value::Int(n) => n.checked_abs()
                          .map(Value::Int)
                          .ok_or(RuntimeError::Overflow { line }),
        Value::Float(r) => Ok(Value::Float(r.abs())),
        other => Err(RuntimeError::Type { details: format!("expected a number, found {}",
                                                           other.kind()),
                                          line }),
    }
}

/// Applies a rounding operation (`floor`, `ceil`, or `round`) to a number.
///
/// The operation is selected by name. The result is always an `Int`:
/// integers pass through unchanged, floats are rounded and converted
/// exactly.
///
/// # Errors
/// `RuntimeError::Type` for non-numeric arguments; `RuntimeError::Overflow`
/// when the rounded value does not fit an `i64`.
pub fn unary_round(name: &str, args: &[Value], line: usize) -> EvalResult<Value> {
    let op = match name {
        "floor" => f64::floor,
        "ceil" => f64::ceil,
        "round" => f64::round,
        _ => unreachable!(),
    };

    match &args[0] {
        Value::Int(n) => Ok(Value::Int(*n)),
        Value::Float(r) => Ok(Value::Int(f64_to_i64_checked(op(*r), line)?)),
        other => Err(RuntimeError::Type { details: format!("expected a number, found {}",
                                                           other.kind()),
                                          line }),
    }
}

/// `pow(x, y)`, identical to `x ** y`.
///
/// # Errors
/// Same as the `**` operator: `RuntimeError::Type` for non-numeric
/// operands, `RuntimeError::Overflow` for out-of-range integer results.
pub fn pow(args: &[Value], line: usize) -> EvalResult<Value> {
    eval_pow(&args[0], &args[1], line)
}
