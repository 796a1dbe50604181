//! Format constants of CORSIKA sub-blocks.

/// Word holding the format version in a run header (`RUNH`).
pub const RUNH_VERSION_POSITION: usize = 4;

/// Word holding the format version in an event header (`EVTH`).
pub const EVTH_VERSION_POSITION: usize = 46;

/// Words per sub-block without thinning.
pub const SUBBLOCK_WORDS: usize = 273;

/// Words per sub-block with thinning.
pub const SUBBLOCK_WORDS_THIN: usize = 312;

/// Particle or photon rows per data sub-block (both thinning modes).
pub const ROWS_PER_DATA_BLOCK: usize = 39;

/// Depth steps per longitudinal sub-block, after its 13 leading words.
pub const ROWS_PER_LONGITUDINAL_BLOCK: usize = 26;

pub use corsika_wire::WORD_SIZE;
