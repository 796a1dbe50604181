use std::fmt;

use crate::field::ScalarType;

/// A single decoded word.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    F32(f32),
    I32(i32),
    Tag([u8; 4]),
}

impl Value {
    /// Interpret a little-endian word as `ty`.
    #[must_use]
    pub fn from_word(ty: ScalarType, word: [u8; 4]) -> Self {
        match ty {
            ScalarType::Float32 => Self::F32(f32::from_le_bytes(word)),
            ScalarType::Int32 => Self::I32(i32::from_le_bytes(word)),
            ScalarType::Tag => Self::Tag(word),
        }
    }

    /// The little-endian word this value was decoded from.
    #[must_use]
    pub fn to_word(self) -> [u8; 4] {
        match self {
            Self::F32(v) => v.to_le_bytes(),
            Self::I32(v) => v.to_le_bytes(),
            Self::Tag(bytes) => bytes,
        }
    }

    #[must_use]
    pub fn ty(&self) -> ScalarType {
        match self {
            Self::F32(_) => ScalarType::Float32,
            Self::I32(_) => ScalarType::Int32,
            Self::Tag(_) => ScalarType::Tag,
        }
    }

    /// Whether this is the zero value of its type.
    ///
    /// Floats compare by value: `-0.0` counts as zero, NaN never does.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::F32(v) => *v == 0.0,
            Self::I32(v) => *v == 0,
            Self::Tag(bytes) => bytes.iter().all(|&b| b == 0),
        }
    }

    /// Numeric value as `f32`, or `None` for tags.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Self::F32(v) => Some(*v),
            Self::I32(v) => Some(*v as f32),
            Self::Tag(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::F32(v) => write!(f, "{v}"),
            Self::I32(v) => write!(f, "{v}"),
            Self::Tag(bytes) => f.write_str(&String::from_utf8_lossy(bytes)),
        }
    }
}
