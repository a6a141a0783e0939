//! Alphabet: the ordered symbol set codes are written in.
//!
//! A symbol's position in the alphabet is its numeric value, so order is
//! significant. Alphabets are immutable once built and are shared freely
//! between threads.

use std::fmt;

use crate::error::RevCodeError;

/// Alphabet used by the reference configuration (27 symbols).
///
/// Leaves out `A`, `I`, `L`, `O`, `Q`, `U`, `Z`, `0` and `1`.
pub const REFERENCE_ALPHABET: &str = "BCDEFGHJKMNPRSTVWXY23456789";

/// Alphabet used by the legacy configuration (29 symbols).
pub const LEGACY_ALPHABET: &str = "BCDEFGHJKMNPQRSTVWXYZ23456789";

/// Ordered set of distinct, printable symbols.
///
/// # Examples
///
/// ```
/// use revcode::Alphabet;
///
/// let alphabet = Alphabet::new("BCD234").unwrap();
/// assert_eq!(alphabet.len(), 6);
/// assert_eq!(alphabet.index_of('D').unwrap(), 2);
/// assert_eq!(alphabet.symbol_at(3), '2');
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alphabet {
    symbols: Vec<char>,
    text: String,
}

impl Alphabet {
    /// Builds an alphabet from the characters of `symbols`, in order.
    ///
    /// # Errors
    /// Returns [`RevCodeError::InvalidConfig`] if the alphabet has fewer than
    /// two symbols, repeats a symbol, or contains whitespace or control
    /// characters.
    pub fn new(symbols: &str) -> Result<Self, RevCodeError> {
        let chars: Vec<char> = symbols.chars().collect();
        if chars.len() < 2 {
            return Err(RevCodeError::InvalidConfig(format!(
                "alphabet needs at least 2 symbols, found {}",
                chars.len()
            )));
        }
        for (i, &symbol) in chars.iter().enumerate() {
            if symbol.is_whitespace() || symbol.is_control() {
                return Err(RevCodeError::InvalidConfig(format!(
                    "alphabet symbol {:?} at position {} is not printable",
                    symbol, i
                )));
            }
            if chars[..i].contains(&symbol) {
                return Err(RevCodeError::InvalidConfig(format!(
                    "alphabet symbol {:?} appears more than once",
                    symbol
                )));
            }
        }
        Ok(Alphabet {
            symbols: chars,
            text: symbols.to_string(),
        })
    }

    /// Returns the number of symbols (`NUM_CHARS`).
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`: construction rejects empty alphabets.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns the numeric value of `symbol`.
    ///
    /// # Errors
    /// Returns [`RevCodeError::UnknownSymbol`] if `symbol` is not in the alphabet.
    pub fn index_of(&self, symbol: char) -> Result<usize, RevCodeError> {
        self.symbols
            .iter()
            .position(|&s| s == symbol)
            .ok_or(RevCodeError::UnknownSymbol(symbol))
    }

    /// Returns the symbol whose value is `position`.
    ///
    /// Callers reduce `position` modulo [`len`](Self::len) first.
    ///
    /// # Panics
    /// Panics if `position >= self.len()`.
    pub fn symbol_at(&self, position: usize) -> char {
        self.symbols[position]
    }

    /// Returns `true` if `symbol` belongs to the alphabet.
    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Returns the alphabet as the string it was built from.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
