use std::cmp::Ordering;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::comparison::compare_values, core::EvalResult},
        value::core::Value,
    },
};

/// Computes the minimum or maximum of the arguments.
///
/// Accepts either a single array argument or a list of scalar arguments.
/// Comparisons use numeric ordering with promotion; all-string input orders
/// lexicographically. The winning element is returned unchanged, so
/// `min([1, 2.5])` stays an `Int`.
///
/// The operation is selected by the `name` parameter, which must be
/// `"min"` or `"max"`.
///
/// # Parameters
/// - `name`: Either `"min"` or `"max"`.
/// - `args`: The evaluated arguments.
/// - `line`: Line number for error reporting.
///
/// # Errors
/// - `RuntimeError::EmptyReduction` for an empty array.
/// - `RuntimeError::Type` for incomparable element kinds.
pub fn min_max(name: &str, args: &[Value], line: usize) -> EvalResult<Value> {
    let items: &[Value] = match args {
        [Value::Array(items)] => items,
        _ => args,
    };

    if items.is_empty() {
        return Err(RuntimeError::EmptyReduction { name: name.to_string(),
                                                  needed: 1,
                                                  line });
    }

    let wanted = if name == "min" {
        Ordering::Less
    } else {
        Ordering::Greater
    };

    let mut best = &items[0];
    for item in &items[1..] {
        if compare_values(item, best, line)? == wanted {
            best = item;
        }
    }

    Ok(best.clone())
}
