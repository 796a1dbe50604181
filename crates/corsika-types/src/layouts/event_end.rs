use corsika_wire::VersionKey;

use crate::field::Field;

/// Words 1-262: identical in every release.
pub const HEAD: &[Field] = &[
    Field::new(1, "event_end").tag(),
    Field::new(2, "event_number"),
    Field::new(3, "n_photons_weighted"),
    Field::new(4, "n_electrons_weighted"),
    Field::new(5, "n_hadrons_weighted"),
    Field::new(6, "n_muons_weighted"),
    Field::new(7, "n_particles_written_weighted"),
    Field::new(8, "nkg_output").repeat(248),
    Field::new(256, "longitudinal_fit_parameters").repeat(6),
    Field::new(262, "longitudinal_fit_chi2_per_dof"),
];

/// Words 263-273 before 7.x.
pub const LEGACY_TAIL: &[Field] = &[Field::new(263, "unused").repeat(11)];

/// Words 263-273 from 7.4 on: unweighted counts of written particles.
pub const MODERN_TAIL: &[Field] = &[
    Field::new(263, "n_photons_written"),
    Field::new(264, "n_electrons_written"),
    Field::new(265, "n_hadrons_written"),
    Field::new(266, "n_muons_written"),
    Field::new(267, "n_preshower_em_particles"),
    Field::new(268, "unused").repeat(6),
];

/// Segments making up the event end of `version`.
#[must_use]
pub fn segments(version: VersionKey) -> [&'static [Field]; 2] {
    if version < VersionKey::new(7, 0) {
        [HEAD, LEGACY_TAIL]
    } else {
        [HEAD, MODERN_TAIL]
    }
}
