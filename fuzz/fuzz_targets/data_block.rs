#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: particle data blocks through filter and typed rows.
//
// Catches bugs in:
// - View vs copy selection in the sentinel filter
// - Typed row casts on filtered output
fuzz_target!(|data: &[u8]| {
    if let Ok(records) = corsika_decoder::parse_particle_data(data) {
        let rows = records
            .rows::<corsika_decoder::ParticleRow>()
            .expect("particle layout matches ParticleRow");
        assert_eq!(rows.len(), records.len());
        assert!(records.iter().all(|r| !r.is_unoccupied()));
    }
});
