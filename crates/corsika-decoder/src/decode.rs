use std::borrow::Cow;

use corsika_types::Layout;

use crate::error::DecodeError;
use crate::records::Records;

/// Decode a buffer as back-to-back records of `layout`.
///
/// Returns a view into `buf`; nothing is copied. An empty buffer decodes
/// to zero records.
///
/// # Errors
///
/// - [`DecodeError::EmptyLayout`] if the layout has no fields.
/// - [`DecodeError::MalformedBuffer`] if `buf.len()` is not a multiple of
///   the record size.
pub fn decode<'b>(buf: &'b [u8], layout: &Layout) -> Result<Records<'b>, DecodeError> {
    let record_size = layout.record_size();
    if record_size == 0 {
        return Err(DecodeError::EmptyLayout {
            kind: layout.kind(),
        });
    }
    if buf.len() % record_size != 0 {
        return Err(DecodeError::MalformedBuffer {
            len: buf.len(),
            record_size,
        });
    }
    Ok(Records::new(layout.clone(), Cow::Borrowed(buf)))
}

/// Drop every record whose fields are all zero, keeping order.
///
/// CORSIKA pads data blocks to a fixed row count with zero-filled rows.
/// When those rows are all at the end (the usual case) the result is still
/// a view of the input; zero rows in the middle force a copy. A genuine
/// all-zero row is indistinguishable from padding and is dropped too.
#[must_use]
pub fn filter_occupied(records: Records<'_>) -> Records<'_> {
    let keep: Vec<bool> = records.iter().map(|r| !r.is_unoccupied()).collect();
    let occupied = keep.iter().filter(|&&k| k).count();
    let dropped = keep.len() - occupied;
    if dropped == 0 {
        return records;
    }

    tracing::debug!(
        kind = %records.layout().kind(),
        occupied,
        dropped,
        "filtered unoccupied rows"
    );

    if keep[..occupied].iter().all(|&k| k) {
        records.truncate(occupied)
    } else {
        records.retain_copied(&keep)
    }
}
