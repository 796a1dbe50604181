use crate::field::Field;

/// One particle of a particle data sub-block (39 per block).
pub const PARTICLE: &[Field] = &[
    Field::new(1, "particle_description"),
    Field::new(2, "px").unit("GeV/c"),
    Field::new(3, "py").unit("GeV/c"),
    Field::new(4, "pz").unit("GeV/c"),
    Field::new(5, "x").unit("cm"),
    Field::new(6, "y").unit("cm"),
    Field::new(7, "t").unit("ns"),
];

/// Thinned particle: adds the statistical weight.
pub const PARTICLE_THIN: &[Field] = &[
    Field::new(1, "particle_description"),
    Field::new(2, "px").unit("GeV/c"),
    Field::new(3, "py").unit("GeV/c"),
    Field::new(4, "pz").unit("GeV/c"),
    Field::new(5, "x").unit("cm"),
    Field::new(6, "y").unit("cm"),
    Field::new(7, "t").unit("ns"),
    Field::new(8, "weight"),
];

/// One Cherenkov photon bunch (39 per block).
pub const CHERENKOV_PHOTONS: &[Field] = &[
    Field::new(1, "n_photons"),
    Field::new(2, "x").unit("cm"),
    Field::new(3, "y").unit("cm"),
    Field::new(4, "u"),
    Field::new(5, "v"),
    Field::new(6, "t").unit("ns"),
    Field::new(7, "production_height").unit("cm"),
];

/// Thinned photon bunch: adds the statistical weight.
pub const CHERENKOV_PHOTONS_THIN: &[Field] = &[
    Field::new(1, "n_photons"),
    Field::new(2, "x").unit("cm"),
    Field::new(3, "y").unit("cm"),
    Field::new(4, "u"),
    Field::new(5, "v"),
    Field::new(6, "t").unit("ns"),
    Field::new(7, "production_height").unit("cm"),
    Field::new(8, "weight"),
];
