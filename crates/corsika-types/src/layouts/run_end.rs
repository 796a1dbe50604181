use crate::field::Field;

/// `RUNE` sub-block. Identical in every release.
pub const FIELDS: &[Field] = &[
    Field::new(1, "run_end").tag(),
    Field::new(2, "run_number"),
    Field::new(3, "n_events"),
    Field::new(4, "unused").repeat(270),
];
