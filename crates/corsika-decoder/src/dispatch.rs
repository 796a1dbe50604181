//! Free-function entry points over the default decoder.
//!
//! Each function is `SubBlockDecoder::default().<same name>(..)`: the
//! built-in registry and the standard version word positions.

use crate::decoder::SubBlockDecoder;
use crate::error::DecodeError;
use crate::records::Records;

macro_rules! header_fn {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        ///
        /// # Errors
        ///
        /// See [`SubBlockDecoder`].
        pub fn $name(buf: &[u8]) -> Result<Records<'static>, DecodeError> {
            SubBlockDecoder::default().$name(buf)
        }
    };
}

macro_rules! data_fn {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        ///
        /// # Errors
        ///
        /// See [`SubBlockDecoder`].
        pub fn $name(buf: &[u8]) -> Result<Records<'_>, DecodeError> {
            SubBlockDecoder::default().$name(buf)
        }
    };
}

header_fn!(
    /// Decode a run header.
    parse_run_header
);
header_fn!(
    /// Decode a thinned run header.
    parse_run_header_thin
);
header_fn!(
    /// Decode a run end record.
    parse_run_end
);
header_fn!(
    /// Decode a thinned run end record.
    parse_run_end_thin
);
header_fn!(
    /// Decode an event header.
    parse_event_header
);
header_fn!(
    /// Decode a thinned event header.
    parse_event_header_thin
);

data_fn!(
    /// Decode a Cherenkov photon block.
    parse_cherenkov_photons
);
data_fn!(
    /// Decode a thinned Cherenkov photon block.
    parse_cherenkov_photons_thin
);
data_fn!(
    /// Decode a particle data block.
    parse_particle_data
);
data_fn!(
    /// Decode a thinned particle data block.
    parse_particle_data_thin
);
data_fn!(
    /// Decode longitudinal profile rows.
    parse_longitudinal
);

/// Decode an event end record with the version of its run.
///
/// # Errors
///
/// See [`SubBlockDecoder::parse_event_end`].
pub fn parse_event_end(buf: &[u8], version: f64) -> Result<Records<'static>, DecodeError> {
    SubBlockDecoder::default().parse_event_end(buf, version)
}

/// Decode a thinned event end record.
///
/// # Errors
///
/// See [`SubBlockDecoder::parse_event_end`].
pub fn parse_event_end_thin(buf: &[u8], version: f64) -> Result<Records<'static>, DecodeError> {
    SubBlockDecoder::default().parse_event_end_thin(buf, version)
}
