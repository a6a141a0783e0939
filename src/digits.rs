//! Digit transform: fixed-width positional numerals with a shift-dependent
//! additive perturbation.
//!
//! A value is written in base `radix` (the alphabet size), least significant
//! digit first. Each digit is then offset by `shift + power`, so the same
//! digit looks different in every position and under every shift.

use crate::utils::modular::wrap_to_positive;

/// Splits `value` into `width` perturbed digits, least significant first.
///
/// The digit at `power` is `floor(value / radix^power) mod radix`, emitted
/// as `(digit + shift + power) mod radix`. Digits above `width` are dropped,
/// which truncates values outside `[0, radix^width)` modulo `radix^width`.
///
/// # Parameters
/// - `value`: The number to write.
/// - `width`: Number of digits to produce.
/// - `shift`: Perturbation key.
/// - `radix`: Base of the numeral system, at least 2.
///
/// # Returns
/// `width` digits, each in `[0, radix)`.
pub(crate) fn to_digits(value: u64, width: usize, shift: usize, radix: usize) -> Vec<usize> {
    let base = radix as u64;
    let mut rest = value;
    let mut digits = Vec::with_capacity(width);
    for power in 0..width {
        let digit = rest % base;
        rest /= base;
        let perturbed = (digit as u128 + shift as u128 + power as u128) % base as u128;
        digits.push(perturbed as usize);
    }
    digits
}

/// Reassembles the value written by [`to_digits`] with the same `shift`.
///
/// Each digit is unperturbed as `(digit - shift - power) mod radix` and the
/// value is rebuilt from the most significant digit down, so every partial
/// result stays below `radix^width`.
///
/// # Parameters
/// - `digits`: Perturbed digits, least significant first, each in `[0, radix)`.
/// - `shift`: The shift used when encoding.
/// - `radix`: Base of the numeral system.
///
/// # Returns
/// The decoded value. A mismatched `shift` yields a wrong value silently.
pub(crate) fn from_digits(digits: &[usize], shift: usize, radix: usize) -> u64 {
    let base = radix as u64;
    digits
        .iter()
        .enumerate()
        .rev()
        .fold(0u64, |value, (power, &digit)| {
            let raw = wrap_to_positive(digit as i128 - shift as i128 - power as i128, base);
            value * base + raw
        })
}
