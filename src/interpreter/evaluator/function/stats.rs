use std::collections::HashMap;

use ordered_float::OrderedFloat;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Borrows the single array argument of a reduction.
fn elements<'a>(name: &str, args: &'a [Value], line: usize) -> EvalResult<&'a [Value]> {
    match &args[0] {
        Value::Array(items) => Ok(items),
        other => Err(RuntimeError::Type { details: format!("{name} expects an array, found {}",
                                                           other.kind()),
                                          line }),
    }
}

/// Summation over an array.
///
/// The result stays `Int` if and only if every element is an `Int`;
/// otherwise every element is promoted and the sum is a `Float`. The empty
/// sum is `0`.
///
/// # Errors
/// - `RuntimeError::Type` for non-numeric elements.
/// - `RuntimeError::Overflow` when an exact integer sum overflows.
pub fn sum(args: &[Value], line: usize) -> EvalResult<Value> {
    let items = elements("sum", args, line)?;

    if items.iter().all(|v| matches!(v, Value::Int(_))) {
        let mut total: i64 = 0;
        for item in items {
            if let Value::Int(n) = item {
                total = total.checked_add(*n).ok_or(RuntimeError::Overflow { line })?;
            }
        }
        Ok(Value::Int(total))
    } else {
        let mut total = 0.0;
        for item in items {
            total += item.as_f64(line)?;
        }
        Ok(Value::Float(total))
    }
}

/// Arithmetic mean over a non-empty array, always a `Float`.
///
/// # Errors
/// `RuntimeError::EmptyReduction` on an empty array; `RuntimeError::Type`
/// for non-numeric elements.
#[allow(clippy::cast_precision_loss)]
pub fn mean(args: &[Value], line: usize) -> EvalResult<Value> {
    let items = elements("mean", args, line)?;
    if items.is_empty() {
        return Err(RuntimeError::EmptyReduction { name: "mean".to_string(),
                                                  needed: 1,
                                                  line });
    }

    let mut total = 0.0;
    for item in items {
        total += item.as_f64(line)?;
    }
    Ok(Value::Float(total / items.len() as f64))
}

/// Median of a non-empty numeric array.
///
/// A sorted copy is taken; the middle element is returned unchanged for odd
/// lengths, and the two middles average to a `Float` for even lengths.
///
/// # Errors
/// `RuntimeError::EmptyReduction` on an empty array; `RuntimeError::Type`
/// for non-numeric elements.
pub fn median(args: &[Value], line: usize) -> EvalResult<Value> {
    let items = elements("median", args, line)?;
    if items.is_empty() {
        return Err(RuntimeError::EmptyReduction { name: "median".to_string(),
                                                  needed: 1,
                                                  line });
    }

    let mut keyed = Vec::with_capacity(items.len());
    for item in items {
        keyed.push((OrderedFloat(item.as_f64(line)?), item.clone()));
    }
    keyed.sort_by_key(|(key, _)| *key);

    let mid = keyed.len() / 2;
    if keyed.len() % 2 == 1 {
        Ok(keyed[mid].1.clone())
    } else {
        Ok(Value::Float((keyed[mid - 1].0.0 + keyed[mid].0.0) / 2.0))
    }
}

/// The key type used to count element frequencies in `mode`.
///
/// Numbers are unified across `Int`/`Float` so that `1` and `1.0` count as
/// the same element, matching the loose equality of `==`.
#[derive(Hash, PartialEq, Eq)]
enum ModeKey {
    Num(OrderedFloat<f64>),
    Bool(bool),
    Str(String),
}

fn mode_key(value: &Value, line: usize) -> EvalResult<ModeKey> {
    match value {
        Value::Int(_) | Value::Float(_) => Ok(ModeKey::Num(OrderedFloat(value.as_f64(line)?))),
        Value::Bool(b) => Ok(ModeKey::Bool(*b)),
        Value::Str(s) => Ok(ModeKey::Str(s.clone())),
        other => Err(RuntimeError::Type { details: format!("mode cannot count {} elements",
                                                           other.kind()),
                                          line }),
    }
}

/// Most frequent element of a non-empty array.
///
/// Ties are broken by first occurrence, so an all-unique array yields its
/// first element.
///
/// # Errors
/// `RuntimeError::EmptyReduction` on an empty array; `RuntimeError::Type`
/// for elements that cannot be counted (arrays, functions).
pub fn mode(args: &[Value], line: usize) -> EvalResult<Value> {
    let items = elements("mode", args, line)?;
    if items.is_empty() {
        return Err(RuntimeError::EmptyReduction { name: "mode".to_string(),
                                                  needed: 1,
                                                  line });
    }

    let mut counts: HashMap<ModeKey, usize> = HashMap::with_capacity(items.len());
    for item in items {
        *counts.entry(mode_key(item, line)?).or_insert(0) += 1;
    }

    // Scanning in source order makes the earliest occurrence win ties.
    let mut best = &items[0];
    let mut best_count = 0;
    for item in items {
        let count = counts[&mode_key(item, line)?];
        if count > best_count {
            best = item;
            best_count = count;
        }
    }

    Ok(best.clone())
}

/// Sample variance of the elements, with the `n - 1` divisor.
#[allow(clippy::cast_precision_loss)]
fn sample_variance(name: &str, items: &[Value], line: usize) -> EvalResult<f64> {
    if items.len() < 2 {
        return Err(RuntimeError::EmptyReduction { name: name.to_string(),
                                                  needed: 2,
                                                  line });
    }

    let mut total = 0.0;
    for item in items {
        total += item.as_f64(line)?;
    }
    let mean = total / items.len() as f64;

    let mut squared_deviations = 0.0;
    for item in items {
        let deviation = item.as_f64(line)? - mean;
        squared_deviations += deviation * deviation;
    }

    Ok(squared_deviations / (items.len() - 1) as f64)
}

/// Sample standard deviation (divisor `n - 1`); requires length >= 2.
///
/// # Errors
/// `RuntimeError::EmptyReduction` for fewer than two elements;
/// `RuntimeError::Type` for non-numeric elements.
pub fn stdev(args: &[Value], line: usize) -> EvalResult<Value> {
    let items = elements("stdev", args, line)?;
    Ok(Value::Float(sample_variance("stdev", items, line)?.sqrt()))
}

/// Sample variance (divisor `n - 1`); requires length >= 2.
///
/// # Errors
/// `RuntimeError::EmptyReduction` for fewer than two elements;
/// `RuntimeError::Type` for non-numeric elements.
pub fn variance(args: &[Value], line: usize) -> EvalResult<Value> {
    let items = elements("variance", args, line)?;
    Ok(Value::Float(sample_variance("variance", items, line)?))
}
