use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Applies an elementwise binary operation across arrays and scalars.
///
/// This function unifies all broadcasting paths:
/// - Array with array: pairwise, with a length check at each nesting level.
/// - Array with scalar, and scalar with array: the scalar is applied to
///   every element.
/// - Scalar with scalar: the supplied operation `f` is applied directly.
///
/// Nested arrays are handled recursively, so `[[1, 2], [3, 4]] * 2` works
/// the same way as a flat array.
///
/// # Parameters
/// - `left`: Left-hand operand.
/// - `right`: Right-hand operand.
/// - `line`: Current line number for error reporting.
/// - `f`: Scalar operation applied once both operands are non-arrays.
///
/// # Returns
/// A `Value` mirroring the structure of the array operand(s).
///
/// # Errors
/// Returns `RuntimeError::ShapeMismatch` when two arrays at the same level
/// have different lengths, and propagates any error from `f`.
///
/// # Example
/// ```
/// use shark::{
///     ast::BinaryOperator,
///     interpreter::{
///         evaluator::binary::{array::map_array_binary, scalar::eval_scalar_op},
///         value::core::Value,
///     },
/// };
///
/// let left = Value::from(vec![Value::Int(1), Value::Int(2)]);
/// let right = Value::from(vec![Value::Int(10), Value::Int(20)]);
///
/// let r = map_array_binary(&left, &right, 1, &|l, r| {
///             eval_scalar_op(BinaryOperator::Add, l, r, 1)
///         }).unwrap();
///
/// assert_eq!(r, Value::from(vec![Value::Int(11), Value::Int(22)]));
/// ```
pub fn map_array_binary<F>(left: &Value, right: &Value, line: usize, f: &F) -> EvalResult<Value>
    where F: Fn(&Value, &Value) -> EvalResult<Value>
{
    match (left, right) {
        // Array with array
        (Value::Array(larr), Value::Array(rarr)) => {
            if larr.len() != rarr.len() {
                return Err(RuntimeError::ShapeMismatch { left:  larr.len(),
                                                         right: rarr.len(),
                                                         line });
            }

            let mut out = Vec::with_capacity(larr.len());
            for (l, r) in larr.iter().zip(rarr.iter()) {
                out.push(map_array_binary(l, r, line, f)?);
            }
            Ok(Value::from(out))
        },

        // Array with scalar
        (Value::Array(arr), scalar) => {
            let mut out = Vec::with_capacity(arr.len());
            for l in arr.iter() {
                out.push(map_array_binary(l, scalar, line, f)?);
            }
            Ok(Value::from(out))
        },

        // Scalar with array
        (scalar, Value::Array(arr)) => {
            let mut out = Vec::with_capacity(arr.len());
            for r in arr.iter() {
                out.push(map_array_binary(scalar, r, line, f)?);
            }
            Ok(Value::from(out))
        },

        // Scalar with scalar
        (l, r) => f(l, r),
    }
}
