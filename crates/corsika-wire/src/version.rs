use std::fmt;

use crate::error::WireError;
use crate::primitive::{read_f32, word_offset};

/// Read the version word of a header sub-block.
///
/// `position` is the 1-based word number holding the version float
/// (word 4 in a run header, word 46 in an event header). The raw `f32`
/// is widened and rounded to 4 decimal digits to absorb the noise of
/// single precision storage, so a stored `7.41` comes back as exactly
/// `7.41` rather than `7.409999847412109`.
///
/// # Errors
///
/// - [`WireError::InvalidPosition`] if `position` is 0.
/// - [`WireError::UnexpectedEof`] if `buf` is shorter than `4 * position`.
pub fn extract_version(buf: &[u8], position: usize) -> Result<f64, WireError> {
    let raw = read_f32(buf, word_offset(position)?)?;
    Ok(round_version(f64::from(raw)))
}

/// Round a version to 4 decimal digits, as [`extract_version`] does.
///
/// Apply this to versions that did not come through [`extract_version`]
/// before normalizing them: an `f32` widened to `f64` (`7.7` becomes
/// `7.699999809265137`) would otherwise truncate into the wrong key.
/// Fixed precision formatting is correctly rounded on the exact binary
/// value; `(x * 1e4).round() / 1e4` is not. Non-finite values pass
/// through unchanged.
#[must_use]
pub fn round_version(value: f64) -> f64 {
    format!("{value:.4}").parse().unwrap_or(value)
}

/// Registry key for a CORSIKA `major.minor` format version.
///
/// Stored as tenths, so `VersionKey::new(7, 4)` is `7.4`. A key is derived
/// from a version float by [`VersionKey::normalize`], which truncates the
/// decimal text after the first fractional digit:
///
/// ```text
/// ┌──────────┬──────────┬──────┐
/// │ Raw      │ Text     │ Key  │
/// ├──────────┼──────────┼──────┤
/// │ 7.41     │ "7.41"   │ 7.4  │
/// │ 7.4499   │ "7.4499" │ 7.4  │
/// │ 7.45     │ "7.45"   │ 7.4  │
/// │ 6.999    │ "6.999"  │ 6.9  │
/// │ 7.0      │ "7.0"    │ 7.0  │
/// │ 10.5     │ "10.5"   │ 10.0 │
/// └──────────┴──────────┴──────┘
/// ```
///
/// Truncation, not rounding: `7.45` must stay in the `7.4` bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VersionKey(i64);

impl VersionKey {
    /// Key for version `major.minor`. `minor` is a single digit.
    #[must_use]
    pub const fn new(major: u8, minor: u8) -> Self {
        Self(major as i64 * 10 + minor as i64)
    }

    /// Key from a value in tenths (`74` is `7.4`).
    #[must_use]
    pub const fn from_tenths(tenths: i64) -> Self {
        Self(tenths)
    }

    /// The key in tenths.
    #[must_use]
    pub const fn tenths(self) -> i64 {
        self.0
    }

    /// Normalize a version float into a registry key.
    ///
    /// The value is printed as its shortest round-trip decimal text (with
    /// a trailing `.0` for integral values, exponent form above `1e16`),
    /// cut to its first 3 characters and parsed back. Returns `None` when
    /// the value is not finite or the 3-character prefix is not a number
    /// (for example `"1e+20"` gives `"1e+"`).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn normalize(version: f64) -> Option<Self> {
        let text = decimal_text(version)?;
        let truncated: f64 = text.get(..3).unwrap_or(text.as_str()).parse().ok()?;
        Some(Self((truncated * 10.0).round() as i64))
    }
}

impl fmt::Display for VersionKey {
    #[allow(clippy::cast_precision_loss)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0 as f64 / 10.0)
    }
}

impl From<VersionKey> for f64 {
    #[allow(clippy::cast_precision_loss)]
    fn from(key: VersionKey) -> Self {
        key.0 as f64 / 10.0
    }
}

/// Shortest round-trip decimal text of `value`.
///
/// Matches the conventional float repr: plain notation between `1e-4` and
/// `1e16` with at least one fractional digit, exponent notation with a
/// signed two-digit exponent outside that range.
fn decimal_text(value: f64) -> Option<String> {
    if !value.is_finite() {
        return None;
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-4..1e16).contains(&magnitude) {
        let mut text = format!("{value}");
        if !text.contains('.') {
            text.push_str(".0");
        }
        return Some(text);
    }

    let text = format!("{value:e}");
    let (mantissa, exponent) = text.split_once('e')?;
    let exponent: i32 = exponent.parse().ok()?;
    let sign = if exponent < 0 { '-' } else { '+' };
    Some(format!("{mantissa}e{sign}{:02}", exponent.abs()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_with_version(position: usize, version: f32) -> Vec<u8> {
        let mut buf = vec![0u8; position * 4];
        let offset = (position - 1) * 4;
        buf[offset..offset + 4].copy_from_slice(&version.to_le_bytes());
        buf
    }

    fn key_of(raw: f32) -> VersionKey {
        let buf = header_with_version(1, raw);
        let version = extract_version(&buf, 1).unwrap();
        VersionKey::normalize(version).unwrap()
    }

    #[test]
    fn normalization_truncates_text() {
        assert_eq!(key_of(7.41), VersionKey::new(7, 4));
        assert_eq!(key_of(7.4499), VersionKey::new(7, 4));
        assert_eq!(key_of(6.999), VersionKey::new(6, 9));
    }

    #[test]
    fn normalization_never_rounds_up() {
        assert_eq!(key_of(7.45), VersionKey::new(7, 4));
        assert_ne!(key_of(7.4499), VersionKey::new(7, 5));
    }

    #[test]
    fn extraction_absorbs_single_precision_noise() {
        let buf = header_with_version(4, 7.41);
        assert_eq!(extract_version(&buf, 4).unwrap(), 7.41);
    }

    #[test]
    fn integral_versions_keep_their_minor_digit() {
        assert_eq!(VersionKey::normalize(7.0), Some(VersionKey::new(7, 0)));
    }

    #[test]
    fn two_digit_majors_lose_their_minor() {
        // "10.5" is cut to "10." which parses as 10.0
        assert_eq!(VersionKey::normalize(10.5), Some(VersionKey::from_tenths(100)));
    }

    #[test]
    fn non_finite_versions_have_no_key() {
        assert_eq!(VersionKey::normalize(f64::NAN), None);
        assert_eq!(VersionKey::normalize(f64::INFINITY), None);
    }

    #[test]
    fn exponent_form_needs_a_fractional_digit() {
        assert_eq!(VersionKey::normalize(1e20), None);
        assert_eq!(VersionKey::normalize(1.5e20), Some(VersionKey::new(1, 5)));
    }

    #[test]
    fn display_uses_one_decimal() {
        assert_eq!(VersionKey::new(7, 4).to_string(), "7.4");
        assert_eq!(VersionKey::from_tenths(100).to_string(), "10.0");
        assert_eq!(f64::from(VersionKey::new(6, 5)), 6.5);
    }

    #[test]
    fn short_buffer_is_out_of_range() {
        let buf = [0u8; 12];
        assert!(matches!(
            extract_version(&buf, 4),
            Err(WireError::UnexpectedEof {
                offset: 12,
                needed: 16
            })
        ));
    }

    #[test]
    fn widened_f32_rounds_back_to_its_release() {
        let widened = f64::from(7.7f32);
        assert_eq!(VersionKey::normalize(widened), Some(VersionKey::new(7, 6)));
        assert_eq!(
            VersionKey::normalize(round_version(widened)),
            Some(VersionKey::new(7, 7))
        );
        assert_eq!(
            VersionKey::normalize(round_version(7.39999)),
            Some(VersionKey::new(7, 4))
        );
        assert!(round_version(f64::NAN).is_nan());
    }

    #[test]
    fn event_header_position() {
        let buf = header_with_version(46, 7.56);
        let version = extract_version(&buf, 46).unwrap();
        assert_eq!(VersionKey::normalize(version), Some(VersionKey::new(7, 5)));
    }
}
