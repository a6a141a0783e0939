//! Reversible short codes for `(store, sequence)` identifier pairs.
//!
//! revcode maps two bounded integers to a fixed-length string over a small,
//! unambiguous alphabet, and back. The transform is deterministic and
//! stateless: no table or database is needed to decode a code, and
//! consecutive sequence numbers produce codes that look unrelated.
//!
//! It obfuscates; it does not encrypt. Anyone who knows the configuration can
//! decode a code.
//!
//! # Architecture
//!
//! ```text
//! Config / Alphabet  (immutable parameters, validated once)
//!     ↓
//! digits             (fixed-width numeral + shift/position perturbation)
//!     ↓
//! permutation        (shift-dependent rotation, then reversal)
//!     ↓
//! codec              ([store segment][shift symbol][sequence segment])
//! ```
//!
//! # Examples
//!
//! Encode and decode with the reference configuration:
//!
//! ```
//! use revcode::{decode, encode, Config};
//!
//! let config = Config::default();
//!
//! let code = encode(20, 2000, &config);
//! assert_eq!(code.len(), 12);
//! assert_eq!(decode(&code, &config).unwrap(), (20, 2000));
//!
//! // The next sequence number looks nothing like the previous code.
//! let next = encode(20, 2001, &config);
//! assert_ne!(code[..11], next[..11]);
//! ```
//!
//! Decode codes issued under an older parameter set:
//!
//! ```
//! use revcode::{Preset, RevCodec};
//!
//! let legacy = RevCodec::from_preset(Preset::Legacy);
//! assert_eq!(legacy.decode("FQPNMZVTSRQR5").unwrap(), (24, 2099));
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod config;
pub mod error;

mod codec;
pub(crate) mod digits;
pub(crate) mod permutation;
pub(crate) mod utils;

pub use alphabet::{Alphabet, LEGACY_ALPHABET, REFERENCE_ALPHABET};
pub use codec::{decode, encode, is_valid_code, try_encode, RevCodec};
pub use config::{Config, Preset};
pub use error::RevCodeError;
