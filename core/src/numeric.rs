//! Numeric aggregation utility.

/// Multiply a sequence of integers; the empty product is `1`.
///
/// The accumulator is widened to `i128` so multiplying `i64` inputs does
/// not silently wrap at 64 bits. Products large enough to exceed `i128`
/// follow the host overflow policy.
pub fn product<I>(numbers: I) -> i128
where
    I: IntoIterator<Item = i64>,
{
    numbers
        .into_iter()
        .fold(1i128, |acc, n| acc * i128::from(n))
}
