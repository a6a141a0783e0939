//! Frozen code snapshots for every named configuration.
//!
//! Codes that have already been handed out must keep decoding to the same
//! values, and the encoder must keep producing the same codes. Any change in
//! these vectors is a compatibility break.

use revcode::{decode, encode, Config, Preset, RevCodec, RevCodeError};

// ═══════════════════════════════════════════════════════════════════════
// Reference configuration
// ═══════════════════════════════════════════════════════════════════════

/// Frozen `(store, sequence, code)` triples for the reference preset.
const REFERENCE_VECTORS: [(u64, u64, &str); 9] = [
    (0, 0, "CEDCCKJHGFED"),
    (1, 1, "EEFDEEMKJHGF"),
    (0, 22, "7686DCB987YE"),
    (0, 23, "CEDC7KJHGFED"),
    (20, 2000, "7W86DCB9BX8E"),
    (20, 2001, "4EDCFKJHGFG5"),
    (21, 2050, "8HGFJK9DPNMK"),
    (24, 2099, "FMKJSRPNPFBT"),
    (19_682, 282_429_536_480, "NMKMKVTSRPNM"),
];

#[test]
fn reference_encode_frozen_vectors() {
    let config = Config::from_preset(Preset::Reference);
    for &(store, sequence, code) in REFERENCE_VECTORS.iter() {
        assert_eq!(
            encode(store, sequence, &config),
            code,
            "encode({}, {}) mismatch",
            store,
            sequence
        );
    }
}

#[test]
fn reference_decode_frozen_vectors() {
    let config = Config::from_preset(Preset::Reference);
    for &(store, sequence, code) in REFERENCE_VECTORS.iter() {
        assert_eq!(
            decode(code, &config).unwrap(),
            (store, sequence),
            "decode({}) mismatch",
            code
        );
    }
}

/// Sequence 0 and 23 share a shift, so only the shift-free parts agree.
#[test]
fn reference_same_shift_shares_layout() {
    let config = Config::from_preset(Preset::Reference);
    let a = encode(0, 0, &config);
    let b = encode(0, 23, &config);
    assert_eq!(a[..3], b[..3]);
    assert_ne!(a, b);
}

/// 5 stores x 100 sequences (500 codes), zero mismatches.
#[test]
fn reference_end_to_end_scenario() {
    let codec = RevCodec::from_preset(Preset::Reference);
    let mut cases = 0;
    for store in 20..25u64 {
        for sequence in 2000..2100u64 {
            let code = codec.encode(store, sequence);
            assert_eq!(
                codec.decode(&code).unwrap(),
                (store, sequence),
                "round trip failed for {}",
                code
            );
            cases += 1;
        }
    }
    assert_eq!(cases, 500);
}

#[test]
fn reference_consecutive_sequences_look_unrelated() {
    let config = Config::from_preset(Preset::Reference);
    let a = encode(20, 2000, &config);
    let b = encode(20, 2001, &config);
    let differing = a.chars().zip(b.chars()).filter(|(x, y)| x != y).count();
    assert!(differing > 1, "{} and {} differ only once", a, b);
}

#[test]
fn reference_sequence_segments_share_no_long_prefix() {
    let config = Config::from_preset(Preset::Reference);
    let width = config.sequence_width();
    let start = config.shift_index() + 1;
    for sequence in 2000..2100u64 {
        let a = encode(20, sequence, &config);
        let b = encode(20, sequence + 1, &config);
        let common = a[start..]
            .chars()
            .zip(b[start..].chars())
            .take_while(|(x, y)| x == y)
            .count();
        assert!(
            common < width - 1,
            "{} and {} share a {}-symbol prefix",
            a,
            b,
            common
        );
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Legacy configuration (codes issued by the first generation of tools)
// ═══════════════════════════════════════════════════════════════════════

/// Rows of the original demonstration table.
const LEGACY_VECTORS: [(u64, u64, &str); 16] = [
    (0, 0, "CFEDCCKJHGFED"),
    (20, 2000, "TSREQTV4PYXWV"),
    (20, 2001, "FVTSRWVW6RZYX"),
    (20, 2037, "WVHXT2ZYXY933"),
    (20, 2074, "2FEDCVKJHGFGT"),
    (21, 2011, "J8MKHPNMNXVRQ"),
    (21, 2048, "CQPNM8VTSRQR3"),
    (21, 2085, "TSRFQTV7MYXWV"),
    (22, 2022, "NZYXWM5432Z2B"),
    (22, 2059, "GF6HEJWENMKJH"),
    (22, 2096, "J9MKHPNMN2SRQ"),
    (23, 2033, "RQGSPT5SXWVTS"),
    (23, 2070, "TKWVSYXWX962Z"),
    (24, 2007, "E7GFDSKMKJHGH"),
    (24, 2044, "BKJHGMKMXYQPN"),
    (24, 2099, "FQPNMZVTSRQR5"),
];

#[test]
fn legacy_encode_frozen_vectors() {
    let codec = RevCodec::from_preset(Preset::Legacy);
    for &(store, sequence, code) in LEGACY_VECTORS.iter() {
        assert_eq!(codec.encode(store, sequence), code);
    }
}

#[test]
fn legacy_decode_frozen_vectors() {
    let codec = RevCodec::from_preset(Preset::Legacy);
    for &(store, sequence, code) in LEGACY_VECTORS.iter() {
        assert_eq!(codec.decode(code).unwrap(), (store, sequence));
    }
}

/// The most significant store digit is non-zero here; it must survive decoding.
#[test]
fn legacy_high_store_keeps_top_digit() {
    let codec = RevCodec::from_preset(Preset::Legacy);
    assert_eq!(codec.encode(700_000, 123_456_789), "QBF5DZ2MKRHZE");
    assert_eq!(codec.decode("QBF5DZ2MKRHZE").unwrap(), (700_000, 123_456_789));
}

/// A code is only meaningful under the configuration it was issued with.
#[test]
fn legacy_code_rejected_by_reference_config() {
    let reference = Config::from_preset(Preset::Reference);
    assert!(matches!(
        decode("TSREQTV4PYXWV", &reference),
        Err(RevCodeError::MalformedCode(_))
    ));
}
