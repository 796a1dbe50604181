/// Errors raised while reading raw CORSIKA words out of a byte buffer.
///
/// These sit at the bottom of the error stack: `corsika-types` wraps them
/// in `TypeError`, and `corsika-decoder` wraps both in `DecodeError`.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// The buffer ended before the requested word could be read.
    ///
    /// `offset` is the byte offset the read started at and `needed` is the
    /// buffer length that read would have required.
    #[error("unexpected end of input: read at offset {offset} needs {needed} bytes")]
    UnexpectedEof { offset: usize, needed: usize },

    /// Word positions follow the CORSIKA manual and start at 1.
    #[error("invalid word position 0: positions are 1-based")]
    InvalidPosition,
}
