//! Synthetic CORSIKA sub-blocks for integration tests and benchmarks.
//!
//! Every builder encodes through [`Layout::encode`], so a fixture always
//! matches the registered layout byte for byte. Field values are chosen
//! to be non-zero and distinct per row, which keeps them clear of the
//! sentinel filter:
//!
//! ```text
//! ┌──────────────┬──────────────────────────────────────┐
//! │ Field type   │ Value                                │
//! ├──────────────┼──────────────────────────────────────┤
//! │ tag          │ the kind's marker ("EVTH", ...)      │
//! │ version word │ the requested version                │
//! │ other f32    │ row * 1000 + word + element index    │
//! │ i32          │ same, as an integer                  │
//! └──────────────┴──────────────────────────────────────┘
//! ```

use corsika_types::constants::ROWS_PER_DATA_BLOCK;
use corsika_types::{Layout, RecordKind, ScalarType, TypeError, Value, registry};
use corsika_wire::VersionKey;

/// Encode one record of `layout` for row number `row`.
///
/// # Errors
///
/// Propagates [`Layout::encode`] errors; none occur for registered layouts.
#[allow(clippy::cast_precision_loss)]
pub fn record(layout: &Layout, row: usize, version: Option<f32>) -> Result<Vec<u8>, TypeError> {
    let mut values = Vec::with_capacity(layout.element_count());
    for f in layout.fields() {
        for index in 0..usize::from(f.field.count) {
            let seed = row * 1000 + usize::from(f.field.word) + index;
            let value = match f.field.ty {
                ScalarType::Tag => Value::Tag(layout.kind().tag().copied().unwrap_or(*b"DATA")),
                ScalarType::Int32 => Value::I32(i32::try_from(seed).unwrap_or(i32::MAX)),
                ScalarType::Float32 => match version {
                    Some(version) if f.field.name == "version" => Value::F32(version),
                    _ => Value::F32(seed as f32),
                },
            };
            values.push(value);
        }
    }
    layout.encode(&values)
}

/// A complete header or end sub-block of a versioned kind.
///
/// # Errors
///
/// [`TypeError::UnsupportedVersion`] if no layout is registered for
/// `version`; [`TypeError::InvalidVersion`] if it cannot be normalized.
pub fn versioned_block(
    kind: RecordKind,
    version: f32,
    thinned: bool,
) -> Result<Vec<u8>, TypeError> {
    let raw = f64::from(version);
    let key = VersionKey::normalize(raw).ok_or(TypeError::InvalidVersion { raw })?;
    let layout = registry().lookup(kind, key, thinned)?;
    record(layout, 0, Some(version))
}

/// A run end sub-block.
///
/// # Errors
///
/// Propagates layout lookup errors.
pub fn run_end_block(thinned: bool) -> Result<Vec<u8>, TypeError> {
    record(registry().fixed(RecordKind::RunEnd, thinned)?, 0, None)
}

/// A data block with one row per entry of `occupied`: `true` rows hold
/// data, `false` rows are zero-filled padding.
///
/// # Errors
///
/// Propagates layout lookup errors.
pub fn data_block(
    kind: RecordKind,
    thinned: bool,
    occupied: &[bool],
) -> Result<Vec<u8>, TypeError> {
    let layout = registry().fixed(kind, thinned)?;
    let mut buf = Vec::with_capacity(layout.record_size() * occupied.len());
    for (row, &filled) in occupied.iter().enumerate() {
        if filled {
            buf.extend(record(layout, row + 1, None)?);
        } else {
            buf.resize(buf.len() + layout.record_size(), 0);
        }
    }
    Ok(buf)
}

/// A full 39-row particle or photon block with the first `n` rows used.
///
/// # Errors
///
/// Propagates layout lookup errors.
pub fn padded_block(kind: RecordKind, thinned: bool, n: usize) -> Result<Vec<u8>, TypeError> {
    let occupied: Vec<bool> = (0..ROWS_PER_DATA_BLOCK).map(|row| row < n).collect();
    data_block(kind, thinned, &occupied)
}
