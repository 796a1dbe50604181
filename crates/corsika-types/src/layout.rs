use std::collections::BTreeMap;
use std::sync::Arc;

use corsika_wire::WORD_SIZE;

use crate::error::TypeError;
use crate::field::Field;
use crate::kind::RecordKind;
use crate::units::units_of;
use crate::value::Value;

/// A [`Field`] placed at its byte offset within a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutField {
    pub field: Field,
    pub offset: usize,
}

impl LayoutField {
    /// Byte offset of array element `index`, if it exists.
    #[must_use]
    pub fn element_offset(&self, index: usize) -> Option<usize> {
        (index < usize::from(self.field.count)).then(|| self.offset + index * self.field.ty.size())
    }

    /// Byte range of the whole field within a record.
    #[must_use]
    pub fn byte_range(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.field.size()
    }
}

/// The exact byte shape of one record.
///
/// Fields are laid out back to back in declaration order with no hidden
/// alignment; padding words appear as explicit `unused*` fields. A
/// layout is immutable once built; clones share the field list.
///
/// ```text
///   record:  ┌────────┬────────┬────────┬─────┬────────┐
///            │ field0 │ field1 │ field2 │ ... │ fieldN │
///            └────────┴────────┴────────┴─────┴────────┘
///   offset:  0        4        ...                    record_size
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    kind: RecordKind,
    fields: Arc<[LayoutField]>,
    record_size: usize,
}

impl Layout {
    /// Build a layout from fields in record order.
    #[must_use]
    pub fn new(kind: RecordKind, fields: &[Field]) -> Self {
        Self::from_segments(kind, &[fields])
    }

    /// Build a layout by concatenating field segments.
    ///
    /// Version revisions of a header share most of their words; the
    /// tables describe the shared runs once and stitch them together.
    #[must_use]
    pub fn from_segments(kind: RecordKind, segments: &[&[Field]]) -> Self {
        let mut fields = Vec::new();
        let mut offset = 0;
        for field in segments.iter().flat_map(|segment| segment.iter()) {
            fields.push(LayoutField {
                field: *field,
                offset,
            });
            offset += field.size();
        }
        Self {
            kind,
            fields: fields.into(),
            record_size: offset,
        }
    }

    /// Extend the record with one unused array field up to `words` words.
    ///
    /// Thinned runs write 312-word sub-blocks; headers and end records
    /// keep their unthinned fields and leave the extra words unused.
    #[must_use]
    pub fn padded_to(mut self, words: usize) -> Self {
        let current = self.words();
        if words > current
            && let (Ok(word), Ok(count)) =
                (u16::try_from(current + 1), u16::try_from(words - current))
        {
            let field = Field::new(word, "unused_thin").repeat(count);
            let mut fields = self.fields.to_vec();
            fields.push(LayoutField {
                field,
                offset: self.record_size,
            });
            self.fields = fields.into();
            self.record_size += field.size();
        }
        self
    }

    #[must_use]
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    #[must_use]
    pub fn fields(&self) -> &[LayoutField] {
        &self.fields
    }

    /// Size of one record in bytes.
    #[must_use]
    pub fn record_size(&self) -> usize {
        self.record_size
    }

    /// Size of one record in CORSIKA words.
    #[must_use]
    pub fn words(&self) -> usize {
        self.record_size / WORD_SIZE
    }

    /// Total number of scalar elements, counting array fields element-wise.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.fields.iter().map(|f| usize::from(f.field.count)).sum()
    }

    /// Look a field up by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&LayoutField> {
        self.fields.iter().find(|f| f.field.name == name)
    }

    /// Name-to-unit table of this layout; see [`units_of`].
    #[must_use]
    pub fn units(&self) -> BTreeMap<&'static str, &'static str> {
        units_of(self.fields.iter().map(|f| &f.field))
    }

    /// Encode one record from its values, flattened element-wise in
    /// field order.
    ///
    /// # Errors
    ///
    /// - [`TypeError::ValueCount`] if `values` does not hold exactly
    ///   [`element_count`](Self::element_count) values.
    /// - [`TypeError::ValueType`] if a value's type differs from its field.
    pub fn encode(&self, values: &[Value]) -> Result<Vec<u8>, TypeError> {
        let expected = self.element_count();
        if values.len() != expected {
            return Err(TypeError::ValueCount {
                expected,
                found: values.len(),
            });
        }

        let mut buf = Vec::with_capacity(self.record_size);
        let mut values = values.iter();
        for LayoutField { field, .. } in self.fields.iter() {
            for value in values.by_ref().take(usize::from(field.count)) {
                if value.ty() != field.ty {
                    return Err(TypeError::ValueType {
                        field: field.name,
                        expected: field.ty,
                        found: value.ty(),
                    });
                }
                buf.extend_from_slice(&value.to_word());
            }
        }
        Ok(buf)
    }
}
