#![no_main]

use dbc::{soft_equiv, soft_equiv_with};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Three f64s: value, reference, precision
    if data.len() < 24 {
        return;
    }
    let word = |i: usize| {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&data[i * 8..i * 8 + 8]);
        f64::from_le_bytes(bytes)
    };
    let (x, y, p) = (word(0), word(1), word(2).abs());

    let default = soft_equiv(x, y);
    let explicit = soft_equiv_with(x, y, f64::EPSILON.sqrt());
    assert_eq!(default, explicit);

    if x.is_finite() && x != 0.0 && p.is_normal() && (x.abs() * p).is_normal() {
        assert!(soft_equiv_with(x, x, p));
    }
    if x.is_nan() || y.is_nan() {
        assert!(!default);
    }
});
