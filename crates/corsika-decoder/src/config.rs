use corsika_types::constants::{EVTH_VERSION_POSITION, RUNH_VERSION_POSITION};

/// Configuration for [`SubBlockDecoder`](crate::SubBlockDecoder).
///
/// ```text
/// ┌───────────────────────┬─────────┬───────────────────────────────────┐
/// │ Field                 │ Default │ Purpose                           │
/// ├───────────────────────┼─────────┼───────────────────────────────────┤
/// │ runh_version_position │ 4       │ Word holding the version in RUNH  │
/// │ evth_version_position │ 46      │ Word holding the version in EVTH  │
/// └───────────────────────┴─────────┴───────────────────────────────────┘
/// ```
///
/// Positions are 1-based word numbers. The defaults match every CORSIKA
/// release; overriding them is only useful for patched builds that moved
/// the version word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecoderConfig {
    pub runh_version_position: usize,
    pub evth_version_position: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            runh_version_position: RUNH_VERSION_POSITION,
            evth_version_position: EVTH_VERSION_POSITION,
        }
    }
}
