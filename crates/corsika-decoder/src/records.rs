use std::borrow::Cow;

use corsika_types::{Layout, LayoutField, Value};
use corsika_wire::primitive::read_word;
use zerocopy::FromBytes;

use crate::error::DecodeError;
use crate::rows::TypedRow;

/// A decoded sub-block: a run of fixed-size records sharing one layout.
///
/// The record bytes are either a **view** into the caller's buffer or an
/// **owned copy**:
///
/// ```text
/// ┌──────────────────────────┬───────────┬──────────────────────────────┐
/// │ Produced by              │ Storage   │ Lifetime                     │
/// ├──────────────────────────┼───────────┼──────────────────────────────┤
/// │ decode                   │ view      │ borrows the input buffer     │
/// │ particle / photon / long │ view*     │ borrows the input buffer     │
/// │ headers and end records  │ copy      │ 'static, buffer can be freed │
/// │ into_owned               │ copy      │ 'static                      │
/// └──────────────────────────┴───────────┴──────────────────────────────┘
///   * a copy when the sentinel filter removed rows that were not trailing
/// ```
///
/// A view cannot outlive its buffer and the buffer cannot be mutated while
/// the view exists; the borrow checker enforces both. Call
/// [`into_owned`](Self::into_owned) to keep records past the buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct Records<'b> {
    layout: Layout,
    bytes: Cow<'b, [u8]>,
}

impl<'b> Records<'b> {
    /// Callers guarantee a non-empty layout and a whole number of records.
    pub(crate) fn new(layout: Layout, bytes: Cow<'b, [u8]>) -> Self {
        debug_assert!(layout.record_size() > 0);
        debug_assert_eq!(bytes.len() % layout.record_size(), 0);
        Self { layout, bytes }
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len() / self.layout.record_size()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether the records alias the buffer they were decoded from.
    #[must_use]
    pub fn is_view(&self) -> bool {
        matches!(self.bytes, Cow::Borrowed(_))
    }

    /// Raw bytes of all records, back to back.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Record at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Record<'_>> {
        let size = self.layout.record_size();
        let start = index.checked_mul(size)?;
        let bytes = self.bytes.get(start..start.checked_add(size)?)?;
        Some(Record {
            layout: &self.layout,
            bytes,
        })
    }

    /// Records in buffer order.
    pub fn iter(&self) -> impl Iterator<Item = Record<'_>> {
        self.bytes
            .chunks_exact(self.layout.record_size())
            .map(|bytes| Record {
                layout: &self.layout,
                bytes,
            })
    }

    /// Detach from the source buffer by copying the record bytes.
    #[must_use]
    pub fn into_owned(self) -> Records<'static> {
        Records {
            layout: self.layout,
            bytes: Cow::Owned(self.bytes.into_owned()),
        }
    }

    /// View the records as typed rows without copying.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::LayoutMismatch`] when `T` describes another
    /// record kind or record size than this layout.
    pub fn rows<T: TypedRow>(&self) -> Result<&[T], DecodeError> {
        let mismatch = || DecodeError::LayoutMismatch {
            row: std::any::type_name::<T>(),
            kind: self.layout.kind(),
            record_size: self.layout.record_size(),
        };
        if self.layout.kind() != T::KIND || self.layout.record_size() != size_of::<T>() {
            return Err(mismatch());
        }
        <[T]>::ref_from_bytes(&self.bytes).map_err(|_| mismatch())
    }

    /// Keep the first `n` records. A view stays a view.
    pub(crate) fn truncate(self, n: usize) -> Self {
        let end = (n * self.layout.record_size()).min(self.bytes.len());
        let bytes = match self.bytes {
            Cow::Borrowed(bytes) => Cow::Borrowed(&bytes[..end]),
            Cow::Owned(mut bytes) => {
                bytes.truncate(end);
                Cow::Owned(bytes)
            }
        };
        Self {
            layout: self.layout,
            bytes,
        }
    }

    /// Keep the records for which `keep` is true, copying them.
    pub(crate) fn retain_copied(self, keep: &[bool]) -> Records<'static> {
        let bytes: Vec<u8> = self
            .bytes
            .chunks_exact(self.layout.record_size())
            .zip(keep)
            .filter(|&(_, &keep)| keep)
            .flat_map(|(record, _)| record.iter().copied())
            .collect();
        Records {
            layout: self.layout,
            bytes: Cow::Owned(bytes),
        }
    }
}

impl<'r> IntoIterator for &'r Records<'_> {
    type Item = Record<'r>;
    type IntoIter = Box<dyn Iterator<Item = Record<'r>> + 'r>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// One record, borrowed from a [`Records`].
///
/// Field access goes through the layout: each read is bounds-checked
/// against the record's bytes.
#[derive(Clone, Copy, Debug)]
pub struct Record<'r> {
    layout: &'r Layout,
    bytes: &'r [u8],
}

impl<'r> Record<'r> {
    #[must_use]
    pub fn layout(&self) -> &'r Layout {
        self.layout
    }

    /// The record's raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &'r [u8] {
        self.bytes
    }

    /// First element of field `name`. For scalar fields this is the value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        self.element(name, 0)
    }

    /// Element `index` of field `name`.
    #[must_use]
    pub fn element(&self, name: &str, index: usize) -> Option<Value> {
        let field = self.layout.field(name)?;
        self.read(field, index)
    }

    /// Shorthand for numeric fields.
    #[must_use]
    pub fn f32(&self, name: &str) -> Option<f32> {
        self.get(name).and_then(|value| value.as_f32())
    }

    /// All elements of one layout field.
    #[must_use]
    pub fn field_values(&self, field: &LayoutField) -> Vec<Value> {
        (0..usize::from(field.field.count))
            .filter_map(|index| self.read(field, index))
            .collect()
    }

    /// Every element of the record, flattened in field order.
    ///
    /// [`Layout::encode`] turns this back into the record's bytes.
    #[must_use]
    pub fn values(&self) -> Vec<Value> {
        self.layout
            .fields()
            .iter()
            .flat_map(|field| self.field_values(field))
            .collect()
    }

    /// Whether every field holds its type's zero value, the marker of an
    /// unused slot in a zero-filled data block.
    #[must_use]
    pub fn is_unoccupied(&self) -> bool {
        self.layout
            .fields()
            .iter()
            .all(|field| self.field_values(field).iter().all(Value::is_zero))
    }

    fn read(&self, field: &LayoutField, index: usize) -> Option<Value> {
        let offset = field.element_offset(index)?;
        let word = read_word(self.bytes, offset).ok()?;
        Some(Value::from_word(field.field.ty, word))
    }
}
