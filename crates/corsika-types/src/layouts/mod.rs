//! Static field tables for every record kind.
//!
//! Word numbers follow the sub-block tables of the CORSIKA user guide.
//! Header and end records that changed between releases are described as
//! shared segments plus per-revision segments; [`crate::registry`] stitches
//! them into one [`Layout`](crate::Layout) per registered version.

pub mod data;
pub mod event_end;
pub mod event_header;
pub mod longitudinal;
pub mod run_end;
pub mod run_header;

use corsika_wire::VersionKey;

/// Releases every versioned table is registered for.
pub const LEGACY_VERSIONS: [VersionKey; 2] = [VersionKey::new(6, 5), VersionKey::new(6, 9)];

/// 7.x releases with a known layout.
pub const MODERN_VERSIONS: [VersionKey; 5] = [
    VersionKey::new(7, 4),
    VersionKey::new(7, 5),
    VersionKey::new(7, 6),
    VersionKey::new(7, 7),
    VersionKey::new(7, 8),
];
