use corsika_wire::WORD_SIZE;

/// Primitive type of one CORSIKA word.
///
/// Every word is 4 bytes wide, so a layout's byte size is simply its
/// word count times four. Nearly everything is a float; the marker word
/// at the start of header and end blocks is four ASCII bytes.
///
/// ```text
/// ┌─────────┬───────┬──────────────────────────────┐
/// │ Type    │ Bytes │ Used for                     │
/// ├─────────┼───────┼──────────────────────────────┤
/// │ Float32 │ 4     │ almost every field           │
/// │ Int32   │ 4     │ integer words (custom tables)│
/// │ Tag     │ 4     │ "RUNH", "EVTH", "EVTE", ...  │
/// └─────────┴───────┴──────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Float32,
    Int32,
    Tag,
}

impl ScalarType {
    /// Width in bytes.
    #[must_use]
    pub const fn size(self) -> usize {
        WORD_SIZE
    }

    /// Short display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Float32 => "f32",
            Self::Int32 => "i32",
            Self::Tag => "tag",
        }
    }
}

/// One named field of a record layout.
///
/// `word` is the 1-based word number the field starts at, as printed in
/// the CORSIKA user guide tables. Array fields (observation levels,
/// random seeds, atmosphere parameters) set `count` to their length.
///
/// Fields are built with `const` builders so layout tables can live in
/// `const` slices:
///
/// ```rust
/// use corsika_types::{Field, ScalarType};
///
/// const HEIGHTS: Field = Field::new(6, "observation_height").repeat(10).unit("cm");
/// assert_eq!(HEIGHTS.ty, ScalarType::Float32);
/// assert_eq!(HEIGHTS.size(), 40);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    pub word: u16,
    pub name: &'static str,
    pub ty: ScalarType,
    pub count: u16,
    pub unit: Option<&'static str>,
}

impl Field {
    /// A single unitless `f32` word.
    #[must_use]
    pub const fn new(word: u16, name: &'static str) -> Self {
        Self {
            word,
            name,
            ty: ScalarType::Float32,
            count: 1,
            unit: None,
        }
    }

    /// Attach a physical unit.
    #[must_use]
    pub const fn unit(self, unit: &'static str) -> Self {
        Self {
            unit: Some(unit),
            ..self
        }
    }

    /// Make this a 4-byte ASCII marker.
    #[must_use]
    pub const fn tag(self) -> Self {
        Self {
            ty: ScalarType::Tag,
            ..self
        }
    }

    /// Make this a signed integer word.
    #[must_use]
    pub const fn int(self) -> Self {
        Self {
            ty: ScalarType::Int32,
            ..self
        }
    }

    /// Make this an array of `count` consecutive words.
    #[must_use]
    pub const fn repeat(self, count: u16) -> Self {
        Self { count, ..self }
    }

    /// Byte size of the whole field.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.ty.size() * self.count as usize
    }

    /// Word number just past this field.
    #[must_use]
    pub const fn next_word(&self) -> u16 {
        self.word + self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_compose() {
        let field = Field::new(8, "px").unit("GeV/c");
        assert_eq!(field.word, 8);
        assert_eq!(field.count, 1);
        assert_eq!(field.unit, Some("GeV/c"));
        assert_eq!(field.size(), 4);

        let marker = Field::new(1, "run_header").tag();
        assert_eq!(marker.ty, ScalarType::Tag);
        assert_eq!(marker.unit, None);
    }

    #[test]
    fn arrays_span_several_words() {
        let seeds = Field::new(14, "random_seeds").repeat(30);
        assert_eq!(seeds.size(), 120);
        assert_eq!(seeds.next_word(), 44);
    }

    #[test]
    fn every_scalar_is_one_word() {
        for ty in [ScalarType::Float32, ScalarType::Int32, ScalarType::Tag] {
            assert_eq!(ty.size(), WORD_SIZE, "{}", ty.name());
        }
    }
}
