use corsika_wire::VersionKey;

use crate::field::Field;

/// Words 1-155: identical in every release.
pub const HEAD: &[Field] = &[
    Field::new(1, "event_header").tag(),
    Field::new(2, "event_number"),
    Field::new(3, "particle_id"),
    Field::new(4, "total_energy").unit("GeV"),
    Field::new(5, "starting_altitude").unit("g/cm2"),
    Field::new(6, "first_target_id"),
    Field::new(7, "first_interaction_height").unit("cm"),
    Field::new(8, "momentum_x").unit("GeV/c"),
    Field::new(9, "momentum_y").unit("GeV/c"),
    Field::new(10, "momentum_minus_z").unit("GeV/c"),
    Field::new(11, "zenith").unit("rad"),
    Field::new(12, "azimuth").unit("rad"),
    Field::new(13, "n_random_sequences"),
    Field::new(14, "random_seeds").repeat(30),
    Field::new(44, "run_number"),
    Field::new(45, "date"),
    Field::new(46, "version"),
    Field::new(47, "n_observation_levels"),
    Field::new(48, "observation_height").repeat(10).unit("cm"),
    Field::new(58, "energy_spectrum_slope"),
    Field::new(59, "energy_min").unit("GeV"),
    Field::new(60, "energy_max").unit("GeV"),
    Field::new(61, "energy_cutoff_hadrons").unit("GeV"),
    Field::new(62, "energy_cutoff_muons").unit("GeV"),
    Field::new(63, "energy_cutoff_electrons").unit("GeV"),
    Field::new(64, "energy_cutoff_photons").unit("GeV"),
    Field::new(65, "nflain"),
    Field::new(66, "nfdif"),
    Field::new(67, "nflpi0"),
    Field::new(68, "nflpif"),
    Field::new(69, "nflche"),
    Field::new(70, "nfragm"),
    Field::new(71, "earth_magnetic_field_x").unit("uT"),
    Field::new(72, "earth_magnetic_field_z").unit("uT"),
    Field::new(73, "egs4_flag"),
    Field::new(74, "nkg_flag"),
    Field::new(75, "low_energy_hadron_model"),
    Field::new(76, "high_energy_hadron_model"),
    Field::new(77, "cherenkov_flag"),
    Field::new(78, "neutrino_flag"),
    Field::new(79, "curved_flag"),
    Field::new(80, "computer"),
    Field::new(81, "theta_min").unit("deg"),
    Field::new(82, "theta_max").unit("deg"),
    Field::new(83, "phi_min").unit("deg"),
    Field::new(84, "phi_max").unit("deg"),
    Field::new(85, "cherenkov_bunch_size"),
    Field::new(86, "n_cherenkov_detectors_x"),
    Field::new(87, "n_cherenkov_detectors_y"),
    Field::new(88, "cherenkov_grid_spacing_x").unit("cm"),
    Field::new(89, "cherenkov_grid_spacing_y").unit("cm"),
    Field::new(90, "cherenkov_detector_length_x").unit("cm"),
    Field::new(91, "cherenkov_detector_length_y").unit("cm"),
    Field::new(92, "cherenkov_output_separate_file"),
    Field::new(93, "angle_array_x_magnetic_north").unit("rad"),
    Field::new(94, "muon_info_flag"),
    Field::new(95, "egs4_multiple_scattering_step_length_factor"),
    Field::new(96, "cherenkov_wavelength_min").unit("nm"),
    Field::new(97, "cherenkov_wavelength_max").unit("nm"),
    Field::new(98, "n_reuse"),
    Field::new(99, "reuse_x").repeat(20).unit("cm"),
    Field::new(119, "reuse_y").repeat(20).unit("cm"),
    Field::new(139, "sibyll_interaction_flag"),
    Field::new(140, "sibyll_cross_section_flag"),
    Field::new(141, "qgsjet_interaction_flag"),
    Field::new(142, "qgsjet_cross_section_flag"),
    Field::new(143, "dpmjet_interaction_flag"),
    Field::new(144, "dpmjet_cross_section_flag"),
    Field::new(145, "venus_nexus_epos_cross_section_flag"),
    Field::new(146, "muon_multiple_scattering_flag"),
    Field::new(147, "nkg_radial_distribution_range").unit("cm"),
    Field::new(148, "energy_fraction_thinning_level_hadronic"),
    Field::new(149, "energy_fraction_thinning_level_em"),
    Field::new(150, "max_weight_hadronic"),
    Field::new(151, "max_weight_em"),
    Field::new(152, "max_radius_radial_thinning").unit("cm"),
    Field::new(153, "viewcone_inner_angle").unit("deg"),
    Field::new(154, "viewcone_outer_angle").unit("deg"),
    Field::new(155, "transition_energy_low_high_energy_model").unit("GeV"),
];

/// Words 156-175 from 7.4 on.
pub const SKIMMING_AND_CONEX: &[Field] = &[
    Field::new(156, "skimming_incidence_flag"),
    Field::new(157, "horizontal_shower_axis_altitude").unit("cm"),
    Field::new(158, "starting_height").unit("cm"),
    Field::new(159, "explicit_charm_generation_flag"),
    Field::new(160, "electromagnetic_subshower_hadronic_origin_flag"),
    Field::new(161, "unused_conex").repeat(6),
    Field::new(167, "conex_min_vertical_depth").unit("g/cm2"),
    Field::new(168, "conex_high_energy_threshold_hadrons"),
    Field::new(169, "conex_high_energy_threshold_em"),
    Field::new(170, "conex_low_energy_threshold_hadrons"),
    Field::new(171, "conex_low_energy_threshold_em"),
    Field::new(172, "observation_level_curvature_flag"),
    Field::new(173, "conex_weight_limit_hadrons"),
    Field::new(174, "conex_weight_limit_em"),
    Field::new(175, "conex_weight_limit_sampling"),
];

/// Words 176-180 from 7.5 on.
pub const INCLINED_OBSERVATION_PLANE: &[Field] = &[
    Field::new(176, "inclined_observation_plane_x").unit("cm"),
    Field::new(177, "inclined_observation_plane_y").unit("cm"),
    Field::new(178, "inclined_observation_plane_z").unit("cm"),
    Field::new(179, "inclined_observation_plane_theta").unit("deg"),
    Field::new(180, "inclined_observation_plane_phi").unit("deg"),
];

const UNUSED_FROM_156: &[Field] = &[Field::new(156, "unused").repeat(118)];
const UNUSED_FROM_176: &[Field] = &[Field::new(176, "unused").repeat(98)];
const UNUSED_FROM_181: &[Field] = &[Field::new(181, "unused").repeat(93)];

const LEGACY: &[&[Field]] = &[HEAD, UNUSED_FROM_156];
const V7_4: &[&[Field]] = &[HEAD, SKIMMING_AND_CONEX, UNUSED_FROM_176];
const V7_5: &[&[Field]] = &[
    HEAD,
    SKIMMING_AND_CONEX,
    INCLINED_OBSERVATION_PLANE,
    UNUSED_FROM_181,
];

/// Segments making up the event header of `version`.
#[must_use]
pub fn segments(version: VersionKey) -> &'static [&'static [Field]] {
    if version < VersionKey::new(7, 0) {
        LEGACY
    } else if version < VersionKey::new(7, 5) {
        V7_4
    } else {
        V7_5
    }
}
