use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a scalar arithmetic operation.
///
/// Integer operands stay exact through `+`, `-` and `*` using checked
/// arithmetic. Division always promotes to `Float`, even for two integers.
/// Mixed operands are promoted to `Float`. `Str + Str` concatenates; any
/// other involvement of non-numeric values is a type error, including
/// string + number.
///
/// # Parameters
/// - `op`: The arithmetic operator (`Add`, `Sub`, `Mul` or `Div`).
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing the computed scalar.
///
/// # Example
/// ```
/// use shark::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::scalar::eval_scalar_op, value::core::Value},
/// };
///
/// let r = eval_scalar_op(BinaryOperator::Div, &Value::Int(10), &Value::Int(4), 1).unwrap();
/// assert_eq!(r, Value::Float(2.5));
/// ```
pub fn eval_scalar_op(op: BinaryOperator,
                      left: &Value,
                      right: &Value,
                      line: usize)
                      -> EvalResult<Value> {
    use BinaryOperator::{Add, Div, Mul, Sub};
    use Value::{Float, Int, Str};

    match (left, right) {
        (Str(a), Str(b)) if op == Add => Ok(Str(format!("{a}{b}"))),

        (Int(a), Int(b)) if op != Div => {
            let result = match op {
                Add => a.checked_add(*b),
                Sub => a.checked_sub(*b),
                Mul => a.checked_mul(*b),
                _ => unreachable!(),
            };
            result.map(Int).ok_or(RuntimeError::Overflow { line })
        },

        _ if left.is_numeric() && right.is_numeric() => {
            let l = left.as_f64(line)?;
            let r = right.as_f64(line)?;

            Ok(Float(match op {
                         Add => l + r,
                         Sub => l - r,
                         Mul => l * r,
                         Div => {
                             if r == 0.0 {
                                 return Err(RuntimeError::DivisionByZero { line });
                             }
                             l / r
                         },
                         _ => unreachable!(),
                     }))
        },

        _ => Err(RuntimeError::Type { details: format!("cannot apply '{op}' to {} and {}",
                                                       left.kind(),
                                                       right.kind()),
                                      line }),
    }
}

/// Evaluates a modulo operation.
///
/// Modulo does not broadcast. Two integers stay integer; any float promotes
/// both sides. A zero divisor of either kind is a `DivisionByZero`.
pub fn eval_mod(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    use Value::{Float, Int};

    match (left, right) {
        (Int(_), Int(0)) => Err(RuntimeError::DivisionByZero { line }),
        (Int(a), Int(b)) => Ok(Int(a % b)),
        _ if left.is_numeric() && right.is_numeric() => {
            let l = left.as_f64(line)?;
            let r = right.as_f64(line)?;
            if r == 0.0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            Ok(Float(l % r))
        },
        _ => Err(RuntimeError::Type { details: format!("cannot apply '%' to {} and {}",
                                                       left.kind(),
                                                       right.kind()),
                                      line }),
    }
}
