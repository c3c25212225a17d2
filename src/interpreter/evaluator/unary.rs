use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a unary operator applied to a value.
///
/// Negation keeps the numeric variant (`Int` stays `Int`, checked against
/// overflow at `i64::MIN`). `not` applies truthiness and always yields a
/// `Bool`.
///
/// # Example
/// ```
/// use shark::{
///     ast::UnaryOperator,
///     interpreter::{evaluator::unary::eval_unary, value::core::Value},
/// };
///
/// assert_eq!(eval_unary(UnaryOperator::Negate, &Value::Int(5), 1).unwrap(),
///            Value::Int(-5));
/// assert_eq!(eval_unary(UnaryOperator::Not, &Value::Int(0), 1).unwrap(),
///            Value::Bool(true));
/// ```
pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
    match op {
        UnaryOperator::Negate => match value {
            Value::Int(n) => n.checked_neg()
                              .map(Value::Int)
                              .ok_or(RuntimeError::Overflow { line }),
            Value::Float(r) => Ok(Value::Float(-r)),
            other => Err(RuntimeError::Type { details: format!("cannot negate a {}",
                                                               other.kind()),
                                              line }),
        },
        UnaryOperator::Not => Ok(Value::Bool(!value.is_truthy())),
    }
}
