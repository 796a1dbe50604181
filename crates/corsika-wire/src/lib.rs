#![warn(clippy::pedantic)]

pub mod error;
pub mod primitive;
pub mod version;

pub use error::WireError;
pub use primitive::WORD_SIZE;
pub use version::{VersionKey, extract_version, round_version};
