#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: VersionKey::normalize on arbitrary floats.
//
// Catches bugs in:
// - Decimal text generation for extreme magnitudes
// - Prefix parsing of exponent forms
fuzz_target!(|version: f64| {
    if let Some(key) = corsika_wire::VersionKey::normalize(version) {
        // A key's own value normalizes back to itself.
        assert_eq!(corsika_wire::VersionKey::normalize(f64::from(key)), Some(key));
    }
});
