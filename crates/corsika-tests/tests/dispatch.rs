//! End-to-end dispatch tests: synthetic sub-blocks through every `parse_*`
//! entry point.
//!
//! Header fixtures carry the requested version in their version word, so
//! these tests exercise the full path from raw bytes through version
//! normalization and registry lookup to decoded records.

use corsika_decoder::{
    DecodeError, DecoderConfig, LongitudinalRow, ParticleRow, PhotonBunchThin, SubBlockDecoder,
};
use corsika_tests::{data_block, padded_block, run_end_block, versioned_block};
use corsika_types::constants::{ROWS_PER_LONGITUDINAL_BLOCK, SUBBLOCK_WORDS, WORD_SIZE};
use corsika_types::{RecordKind, TypeError, Value, registry};
use corsika_wire::VersionKey;

// ── Headers ──────────────────────────────────────────────────────────────────

#[test]
fn event_header_7_41_decodes_with_the_7_4_layout() {
    let buf = versioned_block(RecordKind::EventHeader, 7.41, false).unwrap();
    let records = corsika_decoder::parse_event_header(&buf).unwrap();

    let expected = registry()
        .lookup(RecordKind::EventHeader, VersionKey::new(7, 4), false)
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records.layout(), expected);

    let header = records.get(0).unwrap();
    assert_eq!(header.get("event_header"), Some(Value::Tag(*b"EVTH")));
    assert_eq!(header.f32("version"), Some(7.41));
    assert_eq!(header.f32("event_number"), Some(2.0));
    assert_eq!(header.element("random_seeds", 2), Some(Value::F32(16.0)));
}

#[test]
fn every_registered_header_version_dispatches() {
    for kind in [RecordKind::RunHeader, RecordKind::EventHeader] {
        for thinned in [false, true] {
            for version in registry().versions(kind, thinned) {
                #[allow(clippy::cast_possible_truncation)]
                let raw = f64::from(version) as f32;
                let buf = versioned_block(kind, raw, thinned).unwrap();
                let records = SubBlockDecoder::default()
                    .parse(kind, &buf, thinned, None)
                    .unwrap_or_else(|e| panic!("{kind} {version} thinned={thinned}: {e}"));
                assert_eq!(
                    records.layout(),
                    registry().lookup(kind, version, thinned).unwrap()
                );
            }
        }
    }
}

#[test]
fn thinned_headers_keep_unthinned_fields() {
    let buf = versioned_block(RecordKind::RunHeader, 7.6, true).unwrap();
    let records = corsika_decoder::parse_run_header_thin(&buf).unwrap();
    let header = records.get(0).unwrap();
    assert_eq!(header.f32("version"), Some(7.6));
    assert_eq!(header.element("unused_thin", 0), Some(Value::F32(274.0)));
}

#[test]
fn revision_specific_fields_follow_the_version() {
    let v74 = versioned_block(RecordKind::EventHeader, 7.4, false).unwrap();
    let v76 = versioned_block(RecordKind::EventHeader, 7.6, false).unwrap();
    let old = corsika_decoder::parse_event_header(&v74).unwrap();
    let new = corsika_decoder::parse_event_header(&v76).unwrap();
    assert_eq!(old.get(0).unwrap().get("inclined_observation_plane_x"), None);
    assert!(new.get(0).unwrap().get("inclined_observation_plane_x").is_some());
}

#[test]
fn unsupported_version_names_the_key() {
    let mut patched = versioned_block(RecordKind::EventHeader, 7.4, false).unwrap();
    let offset = 45 * WORD_SIZE;
    patched[offset..offset + 4].copy_from_slice(&5.0f32.to_le_bytes());

    let err = corsika_decoder::parse_event_header(&patched).unwrap_err();
    let DecodeError::Type(TypeError::UnsupportedVersion {
        kind,
        version,
        thinned,
    }) = err
    else {
        panic!("expected UnsupportedVersion, got {err:?}");
    };
    assert_eq!(kind, RecordKind::EventHeader);
    assert_eq!(version, VersionKey::new(5, 0));
    assert!(!thinned);
}

#[test]
fn truncated_header_cannot_reach_its_version_word() {
    let buf = versioned_block(RecordKind::EventHeader, 7.4, false).unwrap();
    let err = corsika_decoder::parse_event_header(&buf[..40 * WORD_SIZE]).unwrap_err();
    assert!(matches!(err, DecodeError::Wire(_)), "{err:?}");
}

#[test]
fn thinned_header_read_as_unthinned_is_malformed() {
    let buf = versioned_block(RecordKind::EventHeader, 7.4, true).unwrap();
    let err = corsika_decoder::parse_event_header(&buf).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::MalformedBuffer {
            len: 1248,
            record_size: 1092
        }
    ));
}

#[test]
fn custom_version_word_position() {
    let mut buf = versioned_block(RecordKind::RunHeader, 7.5, false).unwrap();
    // Move the version to word 10; word 4 now reads as 7.8.
    buf[9 * WORD_SIZE..10 * WORD_SIZE].copy_from_slice(&7.5f32.to_le_bytes());
    buf[3 * WORD_SIZE..4 * WORD_SIZE].copy_from_slice(&7.8f32.to_le_bytes());

    let config = DecoderConfig {
        runh_version_position: 10,
        ..DecoderConfig::default()
    };
    let records = SubBlockDecoder::new(config).parse_run_header(&buf).unwrap();
    assert_eq!(
        records.layout(),
        registry()
            .lookup(RecordKind::RunHeader, VersionKey::new(7, 5), false)
            .unwrap()
    );
}

// ── End records ──────────────────────────────────────────────────────────────

#[test]
fn event_end_takes_the_run_version() {
    let buf = versioned_block(RecordKind::EventEnd, 6.5, false).unwrap();
    let records = corsika_decoder::parse_event_end(&buf, 6.5).unwrap();
    assert_eq!(records.get(0).unwrap().get("event_end"), Some(Value::Tag(*b"EVTE")));

    let thin = versioned_block(RecordKind::EventEnd, 7.7, true).unwrap();
    assert!(corsika_decoder::parse_event_end_thin(&thin, 7.7499).is_ok());
}

#[test]
fn event_end_accepts_the_version_read_from_its_header() {
    let header = versioned_block(RecordKind::EventHeader, 7.7, false).unwrap();
    let records = corsika_decoder::parse_event_header(&header).unwrap();
    let version = records.get(0).unwrap().f32("version").unwrap();

    let end = versioned_block(RecordKind::EventEnd, 7.7, false).unwrap();
    let decoded = corsika_decoder::parse_event_end(&end, f64::from(version)).unwrap();
    assert_eq!(
        decoded.layout(),
        registry()
            .lookup(RecordKind::EventEnd, VersionKey::new(7, 7), false)
            .unwrap()
    );
}

#[test]
fn event_end_rejects_an_unknown_version() {
    let buf = versioned_block(RecordKind::EventEnd, 7.4, false).unwrap();
    assert!(matches!(
        corsika_decoder::parse_event_end(&buf, 8.0),
        Err(DecodeError::Type(TypeError::UnsupportedVersion { .. }))
    ));
    assert!(matches!(
        corsika_decoder::parse_event_end(&buf, f64::NAN),
        Err(DecodeError::Type(TypeError::InvalidVersion { .. }))
    ));
}

#[test]
fn run_end_is_version_independent() {
    let plain = run_end_block(false).unwrap();
    let thin = run_end_block(true).unwrap();
    assert_eq!(corsika_decoder::parse_run_end(&plain).unwrap().len(), 1);
    assert_eq!(corsika_decoder::parse_run_end_thin(&thin).unwrap().len(), 1);
}

#[test]
fn header_records_outlive_the_buffer() {
    let records = {
        let buf = versioned_block(RecordKind::RunHeader, 7.4, false).unwrap();
        corsika_decoder::parse_run_header(&buf).unwrap()
    };
    assert!(!records.is_view());
    assert_eq!(records.get(0).unwrap().get("run_header"), Some(Value::Tag(*b"RUNH")));
}

// ── Data blocks ──────────────────────────────────────────────────────────────

#[test]
fn particle_block_drops_trailing_padding_without_copying() {
    let buf = padded_block(RecordKind::ParticleData, false, 5).unwrap();
    assert_eq!(buf.len(), SUBBLOCK_WORDS * WORD_SIZE);

    let records = corsika_decoder::parse_particle_data(&buf).unwrap();
    assert_eq!(records.len(), 5);
    assert!(records.is_view());

    let rows = records.rows::<ParticleRow>().unwrap();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].particle_description.get(), 1001.0);
    assert_eq!(rows[0].particle_id(), 1);
    assert_eq!(rows[4].px.get(), 5002.0);
}

#[test]
fn photon_block_with_gaps_keeps_order() {
    let pattern = [true, false, true, false, false, true];
    let buf = data_block(RecordKind::CherenkovPhotons, true, &pattern).unwrap();
    let records = corsika_decoder::parse_cherenkov_photons_thin(&buf).unwrap();

    let rows = records.rows::<PhotonBunchThin>().unwrap();
    let photons: Vec<f32> = rows.iter().map(|r| r.n_photons.get()).collect();
    assert_eq!(photons, [1001.0, 3001.0, 6001.0]);
    assert!(!records.is_view());
}

#[test]
fn empty_photon_block_has_no_records() {
    let buf = padded_block(RecordKind::CherenkovPhotons, false, 0).unwrap();
    assert!(corsika_decoder::parse_cherenkov_photons(&buf).unwrap().is_empty());
}

#[test]
fn thinned_particles_carry_weights() {
    let buf = padded_block(RecordKind::ParticleData, true, 39).unwrap();
    let records = corsika_decoder::parse_particle_data_thin(&buf).unwrap();
    assert_eq!(records.len(), 39);
    assert_eq!(records.get(38).unwrap().f32("weight"), Some(39_008.0));
}

#[test]
fn longitudinal_rows_decode() {
    let pattern = vec![true; ROWS_PER_LONGITUDINAL_BLOCK];
    let buf = data_block(RecordKind::Longitudinal, false, &pattern).unwrap();
    let records = corsika_decoder::parse_longitudinal(&buf).unwrap();
    let rows = records.rows::<LongitudinalRow>().unwrap();
    assert_eq!(rows.len(), ROWS_PER_LONGITUDINAL_BLOCK);
    assert_eq!(rows[0].vertical_depth.get(), 1001.0);
}

#[test]
fn longitudinal_block_drops_trailing_and_interleaved_padding() {
    let mut pattern = vec![false; ROWS_PER_LONGITUDINAL_BLOCK];
    for row in [0, 1, 4, 9] {
        pattern[row] = true;
    }
    let buf = data_block(RecordKind::Longitudinal, false, &pattern).unwrap();
    let records = corsika_decoder::parse_longitudinal(&buf).unwrap();
    assert!(!records.is_view());
    let depths: Vec<f32> = records
        .rows::<LongitudinalRow>()
        .unwrap()
        .iter()
        .map(|r| r.vertical_depth.get())
        .collect();
    assert_eq!(depths, [1001.0, 2001.0, 5001.0, 10_001.0]);
}

#[test]
fn empty_longitudinal_block_has_no_records() {
    let pattern = [false; ROWS_PER_LONGITUDINAL_BLOCK];
    let buf = data_block(RecordKind::Longitudinal, false, &pattern).unwrap();
    assert!(corsika_decoder::parse_longitudinal(&buf).unwrap().is_empty());
}

#[test]
fn typed_rows_reject_other_layouts() {
    let buf = padded_block(RecordKind::ParticleData, true, 2).unwrap();
    let records = corsika_decoder::parse_particle_data_thin(&buf).unwrap();
    assert!(matches!(
        records.rows::<ParticleRow>(),
        Err(DecodeError::LayoutMismatch {
            kind: RecordKind::ParticleData,
            record_size: 32,
            ..
        })
    ));
}

#[test]
fn truncated_particle_block_is_malformed() {
    let buf = padded_block(RecordKind::ParticleData, false, 5).unwrap();
    assert!(matches!(
        corsika_decoder::parse_particle_data(&buf[..buf.len() - 4]),
        Err(DecodeError::MalformedBuffer { record_size: 28, .. })
    ));
}

// ── Detection ────────────────────────────────────────────────────────────────

#[test]
fn detect_identifies_marked_subblocks() {
    let cases = [
        (versioned_block(RecordKind::RunHeader, 7.4, false).unwrap(), RecordKind::RunHeader, false),
        (versioned_block(RecordKind::EventHeader, 7.4, true).unwrap(), RecordKind::EventHeader, true),
        (versioned_block(RecordKind::EventEnd, 6.9, false).unwrap(), RecordKind::EventEnd, false),
        (run_end_block(true).unwrap(), RecordKind::RunEnd, true),
    ];
    for (buf, kind, thinned) in cases {
        assert_eq!(SubBlockDecoder::detect(&buf), Some((kind, thinned)));
    }

    let particles = padded_block(RecordKind::ParticleData, false, 39).unwrap();
    assert_eq!(SubBlockDecoder::detect(&particles), None);
}
