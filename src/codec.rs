//! Codec façade: joins a store and a sequence value into one code and splits
//! a code back into its two values.
//!
//! A code is laid out as `[store segment][shift symbol][sequence segment]`.
//! The shift is derived from the sequence and written in the clear, so a
//! code carries everything needed to decode it.

use tracing::{debug, trace};

use crate::config::{Config, Preset};
use crate::digits::{from_digits, to_digits};
use crate::error::RevCodeError;
use crate::permutation::{permute_for_decode, permute_for_encode};

/// Encodes a `(store, sequence)` pair.
///
/// Values outside the configured domain are truncated to their low-order
/// digits, so `store + config.store_capacity()` encodes exactly like `store`.
/// This keeps codes compatible with ones issued before range checks existed;
/// use [`try_encode`] to reject such values instead.
///
/// # Examples
///
/// ```
/// use revcode::{decode, encode, Config};
///
/// let config = Config::default();
/// let code = encode(20, 2000, &config);
/// assert_eq!(code, "7W86DCB9BX8E");
/// assert_eq!(decode(&code, &config).unwrap(), (20, 2000));
/// ```
pub fn encode(store: u64, sequence: u64, config: &Config) -> String {
    let shift = shift_for(sequence, config);
    let radix = config.num_chars();
    let alphabet = config.alphabet();

    let mut code = String::with_capacity(config.code_len());
    code.push_str(&permute_for_encode(
        &to_digits(store, config.store_width(), shift, radix),
        shift,
        alphabet,
    ));
    code.push(alphabet.symbol_at(shift));
    code.push_str(&permute_for_encode(
        &to_digits(sequence, config.sequence_width(), shift, radix),
        shift,
        alphabet,
    ));

    trace!(store, sequence, shift, code = %code, "encoded");
    code
}

/// Encodes a `(store, sequence)` pair, rejecting values outside the domain.
///
/// # Errors
/// Returns [`RevCodeError::ValueOutOfRange`] if `store > config.max_store()`
/// or `sequence > config.max_sequence()`.
///
/// # Examples
///
/// ```
/// use revcode::{try_encode, Config};
///
/// let config = Config::default();
/// assert!(try_encode(19_682, 0, &config).is_ok());
/// assert!(try_encode(19_683, 0, &config).is_err());
/// ```
pub fn try_encode(store: u64, sequence: u64, config: &Config) -> Result<String, RevCodeError> {
    check_range("store", store, config.max_store())?;
    check_range("sequence", sequence, config.max_sequence())?;
    Ok(encode(store, sequence, config))
}

/// Decodes a code into its `(store, sequence)` pair.
///
/// # Errors
/// Returns [`RevCodeError::MalformedCode`] if the code has the wrong length,
/// contains a symbol outside the alphabet, or carries a shift symbol that no
/// encoder under `config` could have produced.
pub fn decode(code: &str, config: &Config) -> Result<(u64, u64), RevCodeError> {
    let symbols: Vec<char> = code.chars().collect();
    if symbols.len() != config.code_len() {
        debug!(code, "rejected code with wrong length");
        return Err(RevCodeError::MalformedCode(format!(
            "expected {} characters, found {}",
            config.code_len(),
            symbols.len()
        )));
    }

    let shift_index = config.shift_index();
    let shift = config
        .alphabet()
        .index_of(symbols[shift_index])
        .map_err(|err| malformed(code, err))?;
    if shift == 0 || shift as u64 > config.modulus() {
        debug!(code, shift, "rejected code with impossible shift");
        return Err(RevCodeError::MalformedCode(format!(
            "shift symbol {:?} is outside the range 1..={}",
            symbols[shift_index],
            config.modulus()
        )));
    }

    let radix = config.num_chars();
    let store_digits = permute_for_decode(&symbols[..shift_index], shift, config.alphabet())
        .map_err(|err| malformed(code, err))?;
    let sequence_digits =
        permute_for_decode(&symbols[shift_index + 1..], shift, config.alphabet())
            .map_err(|err| malformed(code, err))?;

    let store = from_digits(&store_digits, shift, radix);
    let sequence = from_digits(&sequence_digits, shift, radix);
    trace!(code, store, sequence, shift, "decoded");
    Ok((store, sequence))
}

/// Returns `true` if `code` has the right length and only alphabet symbols.
///
/// This is a shape check; it does not verify the shift symbol.
pub fn is_valid_code(code: &str, config: &Config) -> bool {
    code.chars().count() == config.code_len()
        && code.chars().all(|symbol| config.alphabet().contains(symbol))
}

/// Shift for a sequence value, always in `[1, modulus]`.
fn shift_for(sequence: u64, config: &Config) -> usize {
    ((sequence % config.modulus()) + 1) as usize
}

fn check_range(field: &'static str, value: u64, max: u64) -> Result<(), RevCodeError> {
    if value > max {
        return Err(RevCodeError::ValueOutOfRange { field, value, max });
    }
    Ok(())
}

fn malformed(code: &str, err: RevCodeError) -> RevCodeError {
    debug!(code, error = %err, "rejected code");
    match err {
        RevCodeError::UnknownSymbol(symbol) => {
            RevCodeError::MalformedCode(format!("symbol {:?} is not in the alphabet", symbol))
        }
        other => other,
    }
}

/// A codec bound to one [`Config`].
///
/// Cheap to clone and safe to share between threads.
///
/// # Examples
///
/// ```
/// use revcode::{Preset, RevCodec};
///
/// let codec = RevCodec::from_preset(Preset::Legacy);
/// let code = codec.encode(20, 2000);
/// assert_eq!(code, "TSREQTV4PYXWV");
/// assert_eq!(codec.decode(&code).unwrap(), (20, 2000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RevCodec {
    config: Config,
}

impl RevCodec {
    /// Creates a codec for `config`.
    pub fn new(config: Config) -> Self {
        RevCodec { config }
    }

    /// Creates a codec for a named preset.
    pub fn from_preset(preset: Preset) -> Self {
        Self::new(Config::from_preset(preset))
    }

    /// The configuration codes are written under.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// See [`encode`].
    pub fn encode(&self, store: u64, sequence: u64) -> String {
        encode(store, sequence, &self.config)
    }

    /// See [`try_encode`].
    pub fn try_encode(&self, store: u64, sequence: u64) -> Result<String, RevCodeError> {
        try_encode(store, sequence, &self.config)
    }

    /// See [`decode`].
    pub fn decode(&self, code: &str) -> Result<(u64, u64), RevCodeError> {
        decode(code, &self.config)
    }

    /// See [`is_valid_code`].
    pub fn is_valid_code(&self, code: &str) -> bool {
        is_valid_code(code, &self.config)
    }
}
