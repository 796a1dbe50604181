use crate::field::Field;

/// One depth step of a longitudinal profile sub-block.
///
/// A `LONG` sub-block opens with 13 bookkeeping words; the caller strips
/// those and hands over the 26 rows that follow.
pub const FIELDS: &[Field] = &[
    Field::new(1, "vertical_depth").unit("g/cm2"),
    Field::new(2, "n_photons"),
    Field::new(3, "n_positrons"),
    Field::new(4, "n_electrons"),
    Field::new(5, "n_mu_plus"),
    Field::new(6, "n_mu_minus"),
    Field::new(7, "n_hadrons"),
    Field::new(8, "n_charged"),
    Field::new(9, "n_nuclei"),
    Field::new(10, "n_cherenkov"),
];
