use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest signed integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INT: i64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` if the value exceeds `MAX_SAFE_INT` in
/// absolute value.
///
/// ## Example
/// ```
/// use shark::util::num::i64_to_f64_checked;
///
/// assert_eq!(i64_to_f64_checked(42, 1).unwrap(), 42.0);
/// assert!(i64_to_f64_checked(i64::MAX, 1).is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub const fn i64_to_f64_checked(value: i64, line: usize) -> EvalResult<f64> {
    if value.unsigned_abs() > MAX_SAFE_INT as u64 {
        return Err(RuntimeError::Overflow { line });
    }
    Ok(value as f64)
}

/// Safely converts an `f64` to `i64` if the value is finite, within range, and
/// not fractional.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` for non-finite or out-of-range values, and
/// `RuntimeError::Type` for fractional ones.
///
/// ## Example
/// ```
/// use shark::util::num::f64_to_i64_checked;
///
/// assert_eq!(f64_to_i64_checked(1000.0, 1).unwrap(), 1000);
/// assert!(f64_to_i64_checked(1.5, 1).is_err());
/// assert!(f64_to_i64_checked(1e20, 1).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_checked(value: f64, line: usize) -> EvalResult<i64> {
    if !value.is_finite() || value < i64::MIN as f64 || value > i64::MAX as f64 {
        return Err(RuntimeError::Overflow { line });
    }
    if value.fract() != 0.0 {
        return Err(RuntimeError::Type { details: format!("cannot convert fractional value {value} to an integer"),
                                        line });
    }
    Ok(value as i64)
}

/// Safely converts an `i64` to a `u32` exponent.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` if the value is negative or exceeds
/// `u32::MAX`.
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
pub const fn i64_to_u32_checked(value: i64, line: usize) -> EvalResult<u32> {
    if value < 0 || value > u32::MAX as i64 {
        return Err(RuntimeError::Overflow { line });
    }
    Ok(value as u32)
}

/// Safely converts a `usize` length to an `i64`.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` if the value exceeds `i64::MAX`.
pub fn usize_to_i64_checked(value: usize, line: usize) -> EvalResult<i64> {
    i64::try_from(value).map_or(Err(RuntimeError::Overflow { line }), Ok)
}
