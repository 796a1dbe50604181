#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: decode then re-encode every registered layout.
//
// Input format:
//   - First byte: index into the registry listing
//   - Remaining bytes: records to decode
fuzz_target!(|data: &[u8]| {
    let Some((&index, buf)) = data.split_first() else {
        return;
    };
    let entries = corsika_types::registry().entries();
    let entry = &entries[usize::from(index) % entries.len()];

    if let Ok(records) = corsika_decoder::decode(buf, entry.layout) {
        let rebuilt: Vec<u8> = records
            .iter()
            .flat_map(|r| entry.layout.encode(&r.values()).expect("values match their layout"))
            .collect();
        assert_eq!(rebuilt, buf);
    }
});
