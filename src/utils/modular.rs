//! Modular arithmetic helpers shared by the digit transform and the
//! position permutation.

/// Reduces `value` modulo `modulus`, always returning a value in `[0, modulus)`.
///
/// Negative inputs wrap toward positive, so `wrap_to_positive(-1, 5) == 4`.
///
/// # Parameters
/// - `value`: The (possibly negative) value to reduce.
/// - `modulus`: The modulus, must be greater than 0.
///
/// # Returns
/// The least non-negative residue of `value`.
pub(crate) fn wrap_to_positive(value: i128, modulus: u64) -> u64 {
    debug_assert!(modulus > 0, "modulus must be positive");
    // rem_euclid never returns a negative residue and the result is below
    // `modulus`, so it always fits back into u64.
    value.rem_euclid(modulus as i128) as u64
}
