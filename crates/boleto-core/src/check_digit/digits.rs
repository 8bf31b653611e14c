//! Decimal digit sums.

/// Sum the base-10 digits of `value` (`2244 -> 12`, `0 -> 0`).
pub fn digit_sum(mut value: u32) -> u32 {
    let mut sum = 0;
    while value > 0 {
        sum += value % 10;
        value /= 10;
    }
    sum
}
