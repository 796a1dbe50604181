#![warn(clippy::pedantic)]

pub mod config;
pub mod decode;
pub mod decoder;
pub mod dispatch;
pub mod error;
pub mod records;
pub mod rows;

pub use config::DecoderConfig;
pub use decode::{decode, filter_occupied};
pub use decoder::SubBlockDecoder;
pub use dispatch::{
    parse_cherenkov_photons, parse_cherenkov_photons_thin, parse_event_end, parse_event_end_thin,
    parse_event_header, parse_event_header_thin, parse_longitudinal, parse_particle_data,
    parse_particle_data_thin, parse_run_end, parse_run_end_thin, parse_run_header,
    parse_run_header_thin,
};
pub use error::DecodeError;
pub use records::{Record, Records};
pub use rows::{
    LongitudinalRow, ParticleRow, ParticleRowThin, PhotonBunch, PhotonBunchThin, TypedRow,
};
