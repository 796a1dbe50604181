use corsika_wire::{VersionKey, WireError};

use crate::field::ScalarType;
use crate::kind::RecordKind;

/// Errors raised while resolving or using record layouts.
///
/// These are higher-level than [`WireError`]: they deal with which layout
/// describes a sub-block rather than with reading raw words. A
/// `TypeError` wraps a `WireError` when the version word itself could not
/// be read.
///
/// ```text
/// ┌─────────────────────────────────────────────────────────┐
/// │ TypeError (this crate)                                  │
/// │   ├── UnsupportedVersion for unregistered versions      │
/// │   ├── InvalidVersion for versions that yield no key     │
/// │   ├── NoFixedLayout for version-independent lookups     │
/// │   ├── UnknownRecordKind for unparseable kind names      │
/// │   ├── ValueCount / ValueType when encoding records      │
/// │   └── wraps WireError for short header reads            │
/// └─────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, thiserror::Error)]
pub enum TypeError {
    /// No layout is registered for this kind, version and thinning mode.
    ///
    /// The usual cause is a file written by a CORSIKA release the registry
    /// does not know yet. There is no fallback to a neighbouring version.
    #[error("unsupported {kind} version {version} (thinned: {thinned})")]
    UnsupportedVersion {
        kind: RecordKind,
        version: VersionKey,
        thinned: bool,
    },

    /// The version float could not be normalized into a key at all
    /// (NaN, infinity, or a value whose text has no `d.d` prefix).
    #[error("version value {raw} cannot be normalized to a registry key")]
    InvalidVersion { raw: f64 },

    /// A version-independent layout was requested for a kind that has
    /// none in this thinning mode.
    #[error("no fixed {kind} layout (thinned: {thinned})")]
    NoFixedLayout { kind: RecordKind, thinned: bool },

    /// A record kind name did not match any known kind.
    #[error("unknown record kind: {name}")]
    UnknownRecordKind { name: String },

    /// The number of values handed to [`Layout::encode`](crate::Layout::encode)
    /// differs from the number of elements in the layout.
    #[error("layout has {expected} elements, got {found} values")]
    ValueCount { expected: usize, found: usize },

    /// A value's type does not match the field it is encoded into.
    #[error("field {field} expects {expected:?}, got {found:?}")]
    ValueType {
        field: &'static str,
        expected: ScalarType,
        found: ScalarType,
    },

    /// Reading the version word failed.
    #[error(transparent)]
    Wire(#[from] WireError),
}
