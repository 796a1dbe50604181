use corsika_wire::VersionKey;

use crate::field::Field;

/// Words 1-74: identical in every release.
pub const HEAD: &[Field] = &[
    Field::new(1, "run_header").tag(),
    Field::new(2, "run_number"),
    Field::new(3, "date"),
    Field::new(4, "version"),
    Field::new(5, "n_observation_levels"),
    Field::new(6, "observation_height").repeat(10).unit("cm"),
    Field::new(16, "energy_spectrum_slope"),
    Field::new(17, "energy_min").unit("GeV"),
    Field::new(18, "energy_max").unit("GeV"),
    Field::new(19, "egs4_flag"),
    Field::new(20, "nkg_flag"),
    Field::new(21, "energy_cutoff_hadrons").unit("GeV"),
    Field::new(22, "energy_cutoff_muons").unit("GeV"),
    Field::new(23, "energy_cutoff_electrons").unit("GeV"),
    Field::new(24, "energy_cutoff_photons").unit("GeV"),
    Field::new(25, "physical_constants").repeat(50),
];

/// Words 75-93 before 7.x.
pub const OBSERVATION_PLANE_UNUSED: &[Field] =
    &[Field::new(75, "unused_observation_plane").repeat(19)];

/// Words 75-93 from 7.4 on.
pub const INCLINED_OBSERVATION_PLANE: &[Field] = &[
    Field::new(75, "inclined_observation_plane_x").unit("cm"),
    Field::new(76, "inclined_observation_plane_y").unit("cm"),
    Field::new(77, "inclined_observation_plane_z").unit("cm"),
    Field::new(78, "inclined_observation_plane_theta").unit("deg"),
    Field::new(79, "inclined_observation_plane_phi").unit("deg"),
    Field::new(80, "unused_observation_plane").repeat(14),
];

/// Words 94-273: identical in every release.
pub const TAIL: &[Field] = &[
    Field::new(94, "cka").repeat(40),
    Field::new(134, "ceta").repeat(5),
    Field::new(139, "cstrba").repeat(11),
    Field::new(150, "unused").repeat(98),
    Field::new(248, "x_scatter").unit("cm"),
    Field::new(249, "y_scatter").unit("cm"),
    Field::new(250, "hlay").repeat(5).unit("cm"),
    Field::new(255, "aatm").repeat(5).unit("g/cm2"),
    Field::new(260, "batm").repeat(5).unit("g/cm2"),
    Field::new(265, "catm").repeat(5).unit("cm"),
    Field::new(270, "nflain"),
    Field::new(271, "nfdif"),
    Field::new(272, "nflpi0_100nflpif"),
    Field::new(273, "nflche_100nfragm"),
];

/// Segments making up the run header of `version`.
#[must_use]
pub fn segments(version: VersionKey) -> [&'static [Field]; 3] {
    if version < VersionKey::new(7, 0) {
        [HEAD, OBSERVATION_PLANE_UNUSED, TAIL]
    } else {
        [HEAD, INCLINED_OBSERVATION_PLANE, TAIL]
    }
}
