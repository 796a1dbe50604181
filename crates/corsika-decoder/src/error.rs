use corsika_types::{RecordKind, TypeError};
use corsika_wire::WireError;

/// Errors that can occur while decoding a sub-block.
///
/// Error hierarchy:
///
/// ```text
///   DecodeError
///   ├── MalformedBuffer    ← length is not a whole number of records
///   ├── EmptyLayout        ← layout has no fields, records would be 0 bytes
///   ├── LayoutMismatch     ← typed rows requested for the wrong layout
///   ├── Type(TypeError)    ← unsupported or unparseable version, no layout
///   └── Wire(WireError)    ← version word out of range
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The buffer length is not an exact multiple of the record size.
    ///
    /// Sub-blocks are fixed-size, so a partial trailing record means the
    /// caller cut the sub-block at the wrong boundary or picked the wrong
    /// thinning mode.
    #[error("buffer of {len} bytes is not a whole number of {record_size}-byte records")]
    MalformedBuffer { len: usize, record_size: usize },

    /// A layout without fields cannot delimit records.
    #[error("{kind} layout has no fields")]
    EmptyLayout { kind: RecordKind },

    /// Typed rows were requested from records of another shape.
    #[error("{row} rows cannot view {kind} records of {record_size} bytes")]
    LayoutMismatch {
        row: &'static str,
        kind: RecordKind,
        record_size: usize,
    },

    /// Layout resolution failed.
    ///
    /// The common case is [`TypeError::UnsupportedVersion`] for files from
    /// a CORSIKA release the registry does not cover.
    #[error(transparent)]
    Type(#[from] TypeError),

    /// The version word could not be read.
    #[error(transparent)]
    Wire(#[from] WireError),
}
