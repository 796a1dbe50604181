#![no_main]

use arbitrary::Arbitrary;
use corsika_types::RecordKind;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    kind: u8,
    thinned: bool,
    version: f64,
    buf: &'a [u8],
}

// Fuzz target: SubBlockDecoder::parse for every record kind.
//
// Catches bugs in:
// - Version word reads past the end of short buffers
// - Version normalization of NaN, infinities and huge values
// - Record size checks on arbitrary lengths
// - Sentinel filtering of partially zero rows
fuzz_target!(|input: Input<'_>| {
    let kind = RecordKind::ALL[usize::from(input.kind) % RecordKind::ALL.len()];
    let decoder = corsika_decoder::SubBlockDecoder::default();
    if let Ok(records) = decoder.parse(kind, input.buf, input.thinned, Some(input.version)) {
        assert_eq!(records.as_bytes().len(), records.len() * records.layout().record_size());
        for record in &records {
            let _ = record.values();
        }
    }
    let _ = corsika_decoder::SubBlockDecoder::detect(input.buf);
});
