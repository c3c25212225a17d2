use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::usize_to_i64_checked,
};

/// Prints the display form of every argument, separated by single spaces
/// and terminated by a newline.
///
/// This is the language's only channel to standard output. Returns `Unit`.
pub fn print(args: &[Value], _line: usize) -> EvalResult<Value> {
    let rendered = args.iter()
                       .map(ToString::to_string)
                       .collect::<Vec<_>>()
                       .join(" ");
    println!("{rendered}");
    Ok(Value::Unit)
}

/// Element count of an array, or code-point count of a string.
///
/// # Errors
/// `RuntimeError::Type` for any other kind of value.
pub fn len(args: &[Value], line: usize) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(items) => Ok(Value::Int(usize_to_i64_checked(items.len(), line)?)),
        Value::Str(s) => Ok(Value::Int(usize_to_i64_checked(s.chars().count(), line)?)),
        other => Err(RuntimeError::Type { details: format!("len expects an array or string, found {}",
                                                           other.kind()),
                                          line }),
    }
}
