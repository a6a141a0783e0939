//! Position permutation: shift-dependent rotation of digit order.
//!
//! Encoding rotates the perturbed digits left by `shift` positions, maps them
//! to symbols and reverses the result. Decoding undoes the three steps in the
//! opposite order.

use crate::alphabet::Alphabet;
use crate::error::RevCodeError;

/// Writes perturbed digits as a code segment.
///
/// Output position `i` (before reversal) holds the digit at
/// `(shift + i) mod width`; the symbol sequence is then reversed.
///
/// # Parameters
/// - `digits`: Perturbed digits from the digit transform, each `< alphabet.len()`.
/// - `shift`: Rotation key.
/// - `alphabet`: Symbol set to write with.
///
/// # Returns
/// A segment of `digits.len()` symbols.
pub(crate) fn permute_for_encode(digits: &[usize], shift: usize, alphabet: &Alphabet) -> String {
    let width = digits.len();
    (0..width)
        .rev()
        .map(|i| alphabet.symbol_at(digits[(shift + i) % width]))
        .collect()
}

/// Reads a code segment back into the perturbed digits it was written from.
///
/// After undoing the reversal, the symbol at position `i` belongs to digit
/// slot `(shift + i) mod width`.
///
/// # Parameters
/// - `segment`: Symbols of one segment, as they appear in the code.
/// - `shift`: The rotation key used when encoding.
/// - `alphabet`: Symbol set the segment is written with.
///
/// # Errors
/// Returns [`RevCodeError::UnknownSymbol`] for a symbol outside the alphabet.
pub(crate) fn permute_for_decode(
    segment: &[char],
    shift: usize,
    alphabet: &Alphabet,
) -> Result<Vec<usize>, RevCodeError> {
    let width = segment.len();
    let mut digits = vec![0usize; width];
    for (i, &symbol) in segment.iter().rev().enumerate() {
        digits[(shift + i) % width] = alphabet.index_of(symbol)?;
    }
    Ok(digits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::REFERENCE_ALPHABET;

    fn digits_alphabet() -> Alphabet {
        Alphabet::new("0123456789").unwrap()
    }

    #[test]
    fn test_encode_without_rotation_reverses() {
        let alphabet = digits_alphabet();
        assert_eq!(permute_for_encode(&[1, 2, 3], 0, &alphabet), "321");
        // A full turn is the same as no rotation.
        assert_eq!(permute_for_encode(&[1, 2, 3], 3, &alphabet), "321");
    }

    #[test]
    fn test_encode_rotates_then_reverses() {
        let alphabet = digits_alphabet();
        // shift 1: [d1, d2, d0] -> reversed [d0, d2, d1]
        assert_eq!(permute_for_encode(&[1, 2, 3], 1, &alphabet), "132");
        // shift 2: [d2, d0, d1] -> reversed [d1, d0, d2]
        assert_eq!(permute_for_encode(&[1, 2, 3], 2, &alphabet), "213");
    }

    #[test]
    fn test_decode_inverts_encode() {
        let alphabet = Alphabet::new(REFERENCE_ALPHABET).unwrap();
        let digits = vec![4, 0, 26, 13, 7, 7, 1, 22];
        for shift in 0..30 {
            let segment: Vec<char> = permute_for_encode(&digits, shift, &alphabet)
                .chars()
                .collect();
            assert_eq!(
                permute_for_decode(&segment, shift, &alphabet).unwrap(),
                digits,
                "shift={}",
                shift
            );
        }
    }

    #[test]
    fn test_decode_matches_segment_position_formula() {
        // The symbol at segment position i lands at reversed slot (i - shift) mod width.
        let alphabet = digits_alphabet();
        let segment: Vec<char> = "132".chars().collect();
        let digits = permute_for_decode(&segment, 1, &alphabet).unwrap();
        assert_eq!(digits, vec![1, 2, 3]);
    }

    #[test]
    fn test_decode_unknown_symbol() {
        let alphabet = digits_alphabet();
        let segment: Vec<char> = "1X3".chars().collect();
        assert_eq!(
            permute_for_decode(&segment, 2, &alphabet),
            Err(RevCodeError::UnknownSymbol('X'))
        );
    }

    #[test]
    fn test_single_digit_segment() {
        let alphabet = digits_alphabet();
        assert_eq!(permute_for_encode(&[7], 5, &alphabet), "7");
        assert_eq!(permute_for_decode(&['7'], 5, &alphabet).unwrap(), vec![7]);
    }
}
