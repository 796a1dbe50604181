use crate::error::WireError;

// CORSIKA writes everything as 4-byte words. Floats are IEEE-754 single
// precision in the byte order of the machine that ran the simulation;
// every supported producer is little-endian, so that is what we read.

/// Size of one CORSIKA word in bytes.
pub const WORD_SIZE: usize = 4;

/// Byte offset of the word at 1-based `position`.
///
/// # Errors
///
/// Returns [`WireError::InvalidPosition`] for position 0 and for positions
/// whose offset does not fit in `usize`.
pub fn word_offset(position: usize) -> Result<usize, WireError> {
    position
        .checked_sub(1)
        .and_then(|index| index.checked_mul(WORD_SIZE))
        .ok_or(WireError::InvalidPosition)
}

/// Read the raw 4 bytes starting at `offset`.
///
/// # Errors
///
/// Returns [`WireError::UnexpectedEof`] if `buf` holds fewer than
/// `offset + 4` bytes.
pub fn read_word(buf: &[u8], offset: usize) -> Result<[u8; WORD_SIZE], WireError> {
    let needed = offset.saturating_add(WORD_SIZE);
    buf.get(offset..needed)
        .and_then(|bytes| <[u8; WORD_SIZE]>::try_from(bytes).ok())
        .ok_or(WireError::UnexpectedEof { offset, needed })
}

/// Read a little-endian `f32` starting at `offset`.
///
/// # Errors
///
/// Same as [`read_word`].
pub fn read_f32(buf: &[u8], offset: usize) -> Result<f32, WireError> {
    read_word(buf, offset).map(f32::from_le_bytes)
}

/// Read a little-endian `i32` starting at `offset`.
///
/// # Errors
///
/// Same as [`read_word`].
pub fn read_i32(buf: &[u8], offset: usize) -> Result<i32, WireError> {
    read_word(buf, offset).map(i32::from_le_bytes)
}
