//! Cyclic weighted multiplication of digit strings.

use super::{parse_digits, Result};

/// Weights for the Modulo 10 family.
pub const FACTOR_2_1: [u32; 2] = [2, 1];

/// Weights for the Modulo 11, 2-to-9 family.
pub const FACTOR_2_TO_9: [u32; 8] = [2, 3, 4, 5, 6, 7, 8, 9];

/// Weights for the Modulo 11, 2-to-7 family.
pub const FACTOR_2_TO_7: [u32; 6] = [2, 3, 4, 5, 6, 7];

/// Weights for the Modulo 11, 9-to-2 family.
pub const FACTOR_9_TO_2: [u32; 8] = [9, 8, 7, 6, 5, 4, 3, 2];

/// Multiply each digit of `number` by a cyclic sequence of `weights`.
///
/// The first weight applies to the rightmost digit. Products are returned
/// in the original digit order, so `("1234", [2, 1])` yields `[1, 4, 3, 8]`.
pub fn weighted_products(number: &str, weights: &[u32]) -> Result<Vec<u32>> {
    let digits = parse_digits(number)?;

    let mut products: Vec<u32> = digits
        .iter()
        .rev()
        .zip(weights.iter().cycle())
        .map(|(digit, weight)| digit * weight)
        .collect();
    products.reverse();

    Ok(products)
}

/// Sum of the weighted products, reduced modulo 11.
pub(crate) fn weighted_remainder_11(number: &str, weights: &[u32]) -> Result<u32> {
    let total: u32 = weighted_products(number, weights)?.iter().sum();
    Ok(total % 11)
}
