//! Codec configuration: alphabet, segment widths and shift modulus.
//!
//! A [`Config`] is validated once at construction and is immutable afterwards.
//! Every derived constant (code length, shift offset, domain bounds) is
//! computed with exact integer arithmetic when the config is built.
//!
//! Historical parameter sets are available as named [`Preset`]s so that codes
//! issued under any of them can still be decoded by picking the matching
//! config.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::alphabet::{Alphabet, LEGACY_ALPHABET, REFERENCE_ALPHABET};
use crate::error::RevCodeError;

/// Immutable codec parameters.
///
/// # Examples
///
/// ```
/// use revcode::Config;
///
/// let config = Config::new("BCDEFGHJKMNPRSTVWXY23456789", 3, 8, 23).unwrap();
/// assert_eq!(config.code_len(), 12);
/// assert_eq!(config.shift_index(), 3);
///
/// // The shift must be an alphabet index.
/// assert!(Config::new("BCD234", 2, 2, 7).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ConfigRepr", into = "ConfigRepr")]
pub struct Config {
    alphabet: Alphabet,
    store_width: usize,
    sequence_width: usize,
    modulus: u64,
    store_capacity: u64,
    sequence_capacity: u64,
}

/// On-disk shape of a [`Config`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigRepr {
    alphabet: String,
    store_width: usize,
    sequence_width: usize,
    modulus: u64,
}

impl Config {
    /// Builds and validates a configuration.
    ///
    /// # Parameters
    /// - `alphabet`: Ordered symbol set; see [`Alphabet::new`].
    /// - `store_width`: Number of digits reserved for the store value.
    /// - `sequence_width`: Number of digits reserved for the sequence value.
    /// - `modulus`: Shift modulus; shifts fall in `[1, modulus]`.
    ///
    /// The modulus must be strictly smaller than the alphabet size. This is
    /// stricter than `modulus <= alphabet.len()`: with `modulus ==
    /// alphabet.len()` the largest shift would be `alphabet.len()`, which has
    /// no symbol to write it with, so such parameter sets are rejected.
    ///
    /// # Errors
    /// Returns [`RevCodeError::InvalidConfig`] if the alphabet is invalid,
    /// either width is zero, `modulus` is zero or not below the alphabet
    /// size, or `alphabet.len()^width` does not fit in a `u64`.
    pub fn new(
        alphabet: &str,
        store_width: usize,
        sequence_width: usize,
        modulus: u64,
    ) -> Result<Self, RevCodeError> {
        Self::with_alphabet(Alphabet::new(alphabet)?, store_width, sequence_width, modulus)
    }

    /// Same as [`new`](Self::new) for an already built [`Alphabet`].
    pub fn with_alphabet(
        alphabet: Alphabet,
        store_width: usize,
        sequence_width: usize,
        modulus: u64,
    ) -> Result<Self, RevCodeError> {
        let num_chars = alphabet.len() as u64;
        if modulus == 0 {
            return Err(RevCodeError::InvalidConfig(
                "modulus must be at least 1".to_string(),
            ));
        }
        // shift = sequence % modulus + 1 reaches `modulus`, which must index the alphabet.
        if modulus >= num_chars {
            return Err(RevCodeError::InvalidConfig(format!(
                "modulus {} must be smaller than the alphabet size {}",
                modulus, num_chars
            )));
        }
        let store_capacity = capacity("store", num_chars, store_width)?;
        let sequence_capacity = capacity("sequence", num_chars, sequence_width)?;

        debug!(
            num_chars,
            store_width, sequence_width, modulus, "built codec configuration"
        );

        Ok(Config {
            alphabet,
            store_width,
            sequence_width,
            modulus,
            store_capacity,
            sequence_capacity,
        })
    }

    /// Builds the configuration for a named preset.
    pub fn from_preset(preset: Preset) -> Self {
        let (alphabet, store_width, sequence_width, modulus) = preset.parameters();
        match Self::new(alphabet, store_width, sequence_width, modulus) {
            Ok(config) => config,
            Err(err) => unreachable!("preset {} is invalid: {}", preset, err),
        }
    }

    /// Parses a configuration from TOML text.
    ///
    /// The document is a flat table with the keys `alphabet`, `store_width`,
    /// `sequence_width` and `modulus`.
    ///
    /// # Errors
    /// Returns [`RevCodeError::ConfigFile`] if the text is not a valid
    /// document, or [`RevCodeError::InvalidConfig`] if the values violate a
    /// codec invariant.
    ///
    /// # Examples
    ///
    /// ```
    /// use revcode::{Config, Preset};
    ///
    /// let config = Config::from_toml_str(
    ///     r#"
    ///     alphabet = "BCDEFGHJKMNPQRSTVWXYZ23456789"
    ///     store_width = 4
    ///     sequence_width = 8
    ///     modulus = 17
    ///     "#,
    /// )
    /// .unwrap();
    /// assert_eq!(config, Config::from_preset(Preset::Legacy));
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, RevCodeError> {
        Self::parse_toml(text, "<inline>")
    }

    /// Loads a configuration from a TOML file.
    ///
    /// # Errors
    /// Returns [`RevCodeError::ConfigFile`] if the file cannot be read or
    /// parsed, or [`RevCodeError::InvalidConfig`] if the values are invalid.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, RevCodeError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| RevCodeError::ConfigFile {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::parse_toml(&text, &path.display().to_string())
    }

    fn parse_toml(text: &str, origin: &str) -> Result<Self, RevCodeError> {
        let repr: ConfigRepr = toml::from_str(text).map_err(|e| RevCodeError::ConfigFile {
            path: origin.to_string(),
            reason: e.message().to_string(),
        })?;
        Config::try_from(repr)
    }

    /// Renders the configuration as a TOML document accepted by
    /// [`from_toml_str`](Self::from_toml_str).
    ///
    /// # Errors
    /// Returns [`RevCodeError::InvalidConfig`] if the configuration cannot be
    /// rendered as TOML.
    pub fn to_toml_string(&self) -> Result<String, RevCodeError> {
        toml::to_string(&ConfigRepr::from(self.clone())).map_err(|e| {
            RevCodeError::InvalidConfig(format!("cannot render configuration as TOML: {}", e))
        })
    }

    /// The symbol set.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Alphabet size, the radix of the numeral system (`NUM_CHARS`).
    pub fn num_chars(&self) -> usize {
        self.alphabet.len()
    }

    /// Digits reserved for the store value (`STORE_WIDTH`).
    pub fn store_width(&self) -> usize {
        self.store_width
    }

    /// Digits reserved for the sequence value (`SEQUENCE_WIDTH`).
    pub fn sequence_width(&self) -> usize {
        self.sequence_width
    }

    /// Shift modulus (`MODULUS`).
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Character offset of the shift symbol in a code (`SHIFT_INDEX`).
    pub fn shift_index(&self) -> usize {
        self.store_width
    }

    /// Length of every code, in characters.
    pub fn code_len(&self) -> usize {
        self.store_width + 1 + self.sequence_width
    }

    /// Number of distinct store values, `NUM_CHARS^STORE_WIDTH`.
    pub fn store_capacity(&self) -> u64 {
        self.store_capacity
    }

    /// Number of distinct sequence values, `NUM_CHARS^SEQUENCE_WIDTH`.
    pub fn sequence_capacity(&self) -> u64 {
        self.sequence_capacity
    }

    /// Largest encodable store value.
    pub fn max_store(&self) -> u64 {
        self.store_capacity - 1
    }

    /// Largest encodable sequence value.
    pub fn max_sequence(&self) -> u64 {
        self.sequence_capacity - 1
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_preset(Preset::default())
    }
}

impl TryFrom<ConfigRepr> for Config {
    type Error = RevCodeError;

    fn try_from(repr: ConfigRepr) -> Result<Self, Self::Error> {
        Config::new(
            &repr.alphabet,
            repr.store_width,
            repr.sequence_width,
            repr.modulus,
        )
    }
}

impl From<Config> for ConfigRepr {
    fn from(config: Config) -> Self {
        ConfigRepr {
            alphabet: config.alphabet.as_str().to_string(),
            store_width: config.store_width,
            sequence_width: config.sequence_width,
            modulus: config.modulus,
        }
    }
}

/// Computes `radix^width`, rejecting zero widths and `u64` overflow.
fn capacity(field: &str, radix: u64, width: usize) -> Result<u64, RevCodeError> {
    if width == 0 {
        return Err(RevCodeError::InvalidConfig(format!(
            "{} width must be at least 1",
            field
        )));
    }
    u32::try_from(width)
        .ok()
        .and_then(|exp| radix.checked_pow(exp))
        .ok_or_else(|| {
            RevCodeError::InvalidConfig(format!(
                "{} width {} overflows 64-bit values for an alphabet of {} symbols",
                field, width, radix
            ))
        })
}

/// Named parameter sets that codes have been issued under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Preset {
    /// 27-symbol alphabet, store width 3, sequence width 8, modulus 23.
    #[default]
    Reference,
    /// 29-symbol alphabet, store width 4, sequence width 8, modulus 17.
    Legacy,
}

impl Preset {
    /// All presets, in declaration order.
    pub const ALL: [Preset; 2] = [Preset::Reference, Preset::Legacy];

    /// Returns `(alphabet, store_width, sequence_width, modulus)`.
    fn parameters(self) -> (&'static str, usize, usize, u64) {
        match self {
            Preset::Reference => (REFERENCE_ALPHABET, 3, 8, 23),
            Preset::Legacy => (LEGACY_ALPHABET, 4, 8, 17),
        }
    }

    /// Lower-case preset name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Preset::Reference => "reference",
            Preset::Legacy => "legacy",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = RevCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                RevCodeError::InvalidConfig(format!(
                    "unknown preset {:?} (expected one of: reference, legacy)",
                    s
                ))
            })
    }
}
