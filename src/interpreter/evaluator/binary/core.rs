use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::{array, comparison, power, scalar},
            core::EvalResult,
        },
        value::core::Value,
    },
};

/// Evaluates a binary operation between two already-evaluated values.
///
/// Arithmetic operators (`+ - * / **`) broadcast when either operand is an
/// array; modulo is scalar-only. Ordering comparisons require numbers or
/// strings. `==`/`!=` never fail: differing kinds simply compare unequal,
/// and arrays compare element-wise to a single boolean. The logical
/// operators are absent here because they short-circuit in the expression
/// evaluator before both operands exist.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing the evaluated result.
///
/// # Example
/// ```
/// use shark::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::core::eval_binary, value::core::Value},
/// };
///
/// let left = Value::from(vec![Value::Int(1), Value::Int(2)]);
/// let right = Value::Int(10);
///
/// let result = eval_binary(BinaryOperator::Mul, &left, &right, 1).unwrap();
/// assert_eq!(result, Value::from(vec![Value::Int(10), Value::Int(20)]));
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   line: usize)
                   -> EvalResult<Value> {
    use BinaryOperator::{
        Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or, Pow,
        Sub,
    };

    match op {
        Add | Sub | Mul | Div | Pow => match (left, right) {
            (Value::Array(_), _) | (_, Value::Array(_)) => {
                array::map_array_binary(left, right, line, &|l, r| scalar_dispatch(op, l, r, line))
            },
            _ => scalar_dispatch(op, left, right, line),
        },

        Mod => scalar::eval_mod(left, right, line),

        Less | Greater | LessEqual | GreaterEqual => {
            comparison::eval_ordering(op, left, right, line)
        },

        Equal => Ok(Value::Bool(comparison::loose_eq(left, right))),
        NotEqual => Ok(Value::Bool(!comparison::loose_eq(left, right))),

        And | Or => unreachable!("logical operators short-circuit in the evaluator"),
    }
}

/// Routes a scalar pair to the right arithmetic handler.
fn scalar_dispatch(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   line: usize)
                   -> EvalResult<Value> {
    if op == BinaryOperator::Pow {
        power::eval_pow(left, right, line)
    } else {
        scalar::eval_scalar_op(op, left, right, line)
    }
}
