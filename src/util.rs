/// General utilities for safe numeric conversion.
///
/// This module provides conversion routines used throughout the parser and
/// evaluator: lossless `i64`/`f64` round-trips, index conversions, and
/// exponent narrowing. All conversions report failure through the runtime
/// error types instead of truncating silently.
pub mod num;
