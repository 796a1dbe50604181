//! Typed, zero-copy rows for the data sub-blocks.
//!
//! Each struct mirrors one registered data layout word for word, so a
//! decoded block can be reinterpreted as `&[Row]` instead of being read
//! field by field:
//!
//! ```text
//! ┌─────────────────┬──────────────────┬─────────┬───────┐
//! │ Row             │ Kind             │ Thinned │ Words │
//! ├─────────────────┼──────────────────┼─────────┼───────┤
//! │ ParticleRow     │ ParticleData     │ no      │ 7     │
//! │ ParticleRowThin │ ParticleData     │ yes     │ 8     │
//! │ PhotonBunch     │ CherenkovPhotons │ no      │ 7     │
//! │ PhotonBunchThin │ CherenkovPhotons │ yes     │ 8     │
//! │ LongitudinalRow │ Longitudinal     │ no      │ 10    │
//! └─────────────────┴──────────────────┴─────────┴───────┘
//! ```
//!
//! All fields are little-endian `F32` wrappers with alignment 1, so any
//! byte slice of the right length is a valid row slice.

use corsika_types::RecordKind;
use zerocopy::byteorder::little_endian::F32;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

/// A fixed-size row type that can view records of one layout.
///
/// [`Records::rows`](crate::Records::rows) checks `KIND` and the row size
/// against the records' layout before casting.
pub trait TypedRow: FromBytes + KnownLayout + Immutable + Unaligned {
    const KIND: RecordKind;
}

/// Particle description word: `id * 1000 + hadronic generation * 10 + level`.
fn split_description(description: f32) -> (i32, i32) {
    #[allow(clippy::cast_possible_truncation)]
    let description = description as i32;
    (description / 1000, description % 10)
}

/// One particle of an unthinned particle data block.
#[repr(C)]
#[derive(Clone, Copy, Debug, FromBytes, IntoBytes, KnownLayout, Immutable, Unaligned)]
pub struct ParticleRow {
    pub particle_description: F32,
    pub px: F32,
    pub py: F32,
    pub pz: F32,
    pub x: F32,
    pub y: F32,
    pub t: F32,
}

impl ParticleRow {
    /// CORSIKA particle code.
    #[must_use]
    pub fn particle_id(&self) -> i32 {
        split_description(self.particle_description.get()).0
    }

    /// Observation level the particle was recorded at (1-based).
    #[must_use]
    pub fn observation_level(&self) -> i32 {
        split_description(self.particle_description.get()).1
    }
}

impl TypedRow for ParticleRow {
    const KIND: RecordKind = RecordKind::ParticleData;
}

/// One particle of a thinned particle data block.
#[repr(C)]
#[derive(Clone, Copy, Debug, FromBytes, IntoBytes, KnownLayout, Immutable, Unaligned)]
pub struct ParticleRowThin {
    pub particle_description: F32,
    pub px: F32,
    pub py: F32,
    pub pz: F32,
    pub x: F32,
    pub y: F32,
    pub t: F32,
    pub weight: F32,
}

impl ParticleRowThin {
    #[must_use]
    pub fn particle_id(&self) -> i32 {
        split_description(self.particle_description.get()).0
    }

    #[must_use]
    pub fn observation_level(&self) -> i32 {
        split_description(self.particle_description.get()).1
    }
}

impl TypedRow for ParticleRowThin {
    const KIND: RecordKind = RecordKind::ParticleData;
}

#[repr(C)]
#[derive(Clone, Copy, Debug, FromBytes, IntoBytes, KnownLayout, Immutable, Unaligned)]
pub struct PhotonBunch {
    pub n_photons: F32,
    pub x: F32,
    pub y: F32,
    pub u: F32,
    pub v: F32,
    pub t: F32,
    pub production_height: F32,
}

impl TypedRow for PhotonBunch {
    const KIND: RecordKind = RecordKind::CherenkovPhotons;
}

#[repr(C)]
#[derive(Clone, Copy, Debug, FromBytes, IntoBytes, KnownLayout, Immutable, Unaligned)]
pub struct PhotonBunchThin {
    pub n_photons: F32,
    pub x: F32,
    pub y: F32,
    pub u: F32,
    pub v: F32,
    pub t: F32,
    pub production_height: F32,
    pub weight: F32,
}

impl TypedRow for PhotonBunchThin {
    const KIND: RecordKind = RecordKind::CherenkovPhotons;
}

/// One depth step of a longitudinal profile.
#[repr(C)]
#[derive(Clone, Copy, Debug, FromBytes, IntoBytes, KnownLayout, Immutable, Unaligned)]
pub struct LongitudinalRow {
    pub vertical_depth: F32,
    pub n_photons: F32,
    pub n_positrons: F32,
    pub n_electrons: F32,
    pub n_mu_plus: F32,
    pub n_mu_minus: F32,
    pub n_hadrons: F32,
    pub n_charged: F32,
    pub n_nuclei: F32,
    pub n_cherenkov: F32,
}

impl TypedRow for LongitudinalRow {
    const KIND: RecordKind = RecordKind::Longitudinal;
}

#[cfg(test)]
mod tests {
    use super::*;
    use corsika_types::registry;

    fn row_matches<T: TypedRow>(thinned: bool) -> bool {
        registry()
            .fixed(T::KIND, thinned)
            .is_ok_and(|layout| layout.record_size() == size_of::<T>())
    }

    #[test]
    fn rows_match_registered_layouts() {
        assert!(row_matches::<ParticleRow>(false));
        assert!(row_matches::<ParticleRowThin>(true));
        assert!(row_matches::<PhotonBunch>(false));
        assert!(row_matches::<PhotonBunchThin>(true));
        assert!(row_matches::<LongitudinalRow>(false));
    }

    #[test]
    fn particle_description_splits() {
        let mut bytes = [0u8; 28];
        bytes[..4].copy_from_slice(&5002.0f32.to_le_bytes());
        let row = ParticleRow::ref_from_bytes(&bytes).unwrap();
        assert_eq!(row.particle_id(), 5);
        assert_eq!(row.observation_level(), 2);
    }

    #[test]
    fn thin_rows_carry_weight() {
        let mut bytes = [0u8; 32];
        bytes[..4].copy_from_slice(&1011.0f32.to_le_bytes());
        bytes[28..].copy_from_slice(&12.5f32.to_le_bytes());
        let row = ParticleRowThin::ref_from_bytes(&bytes).unwrap();
        assert_eq!(row.particle_id(), 1);
        assert_eq!(row.observation_level(), 1);
        assert_eq!(row.weight.get(), 12.5);
    }
}
