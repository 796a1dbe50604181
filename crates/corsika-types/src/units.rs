use std::collections::BTreeMap;

use crate::field::Field;

/// Collect the physical units of a field list, keyed by field name.
///
/// Dimensionless fields are left out, so a missing key means "no unit",
/// not "unknown field".
///
/// ```rust
/// use corsika_types::{Field, units_of};
///
/// let fields = [
///     Field::new(1, "x").unit("cm"),
///     Field::new(2, "y"),
///     Field::new(3, "z").unit("cm"),
/// ];
/// let units = units_of(&fields);
/// assert_eq!(units.len(), 2);
/// assert_eq!(units["x"], "cm");
/// assert!(!units.contains_key("y"));
/// ```
pub fn units_of<'f>(
    fields: impl IntoIterator<Item = &'f Field>,
) -> BTreeMap<&'static str, &'static str> {
    fields
        .into_iter()
        .filter_map(|field| field.unit.map(|unit| (field.name, unit)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unitless_fields_are_excluded() {
        let fields = [
            Field::new(1, "x").unit("cm"),
            Field::new(2, "y"),
            Field::new(3, "z").unit("cm"),
        ];
        let units = units_of(&fields);
        assert_eq!(units, BTreeMap::from([("x", "cm"), ("z", "cm")]));
    }

    #[test]
    fn empty_list_gives_empty_table() {
        let fields: &[Field] = &[];
        assert!(units_of(fields).is_empty());
    }
}
