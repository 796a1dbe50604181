use std::collections::HashMap;
use std::sync::LazyLock;

use corsika_wire::VersionKey;

use crate::constants::SUBBLOCK_WORDS_THIN;
use crate::error::TypeError;
use crate::field::Field;
use crate::kind::RecordKind;
use crate::layout::Layout;
use crate::layouts::{
    LEGACY_VERSIONS, MODERN_VERSIONS, data, event_end, event_header, longitudinal, run_end,
    run_header,
};

static BUILTIN: LazyLock<Registry> = LazyLock::new(Registry::builtin);

/// The process-wide registry of built-in layouts.
///
/// Built on first use and never mutated afterwards, so it can be shared
/// across threads freely.
#[must_use]
pub fn registry() -> &'static Registry {
    &BUILTIN
}

/// One row of [`Registry::entries`].
#[derive(Clone, Copy, Debug)]
pub struct RegistryEntry<'r> {
    pub kind: RecordKind,
    /// `None` for version-independent layouts.
    pub version: Option<VersionKey>,
    pub thinned: bool,
    pub layout: &'r Layout,
}

/// Flat dispatch table from `(kind, version, thinned)` to [`Layout`].
///
/// Versioned kinds (run header, event header, event end) are keyed by
/// their normalized version; the other kinds have one layout per
/// thinning mode. Supporting a new CORSIKA release means inserting new
/// keys, never changing existing ones.
///
/// ```text
/// ┌──────────────────────────────────────────┐      ┌────────┐
/// │ (EventHeader, 7.4, false)                │ ───▶ │ Layout │
/// │ (EventHeader, 7.4, true)                 │ ───▶ │ Layout │
/// │ (ParticleData, -, true)                  │ ───▶ │ Layout │
/// └──────────────────────────────────────────┘      └────────┘
/// ```
#[derive(Debug, Default)]
pub struct Registry {
    versioned: HashMap<(RecordKind, VersionKey, bool), Layout>,
    fixed: HashMap<(RecordKind, bool), Layout>,
}

impl Registry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in tables for every known CORSIKA release.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();

        for version in LEGACY_VERSIONS.into_iter().chain(MODERN_VERSIONS) {
            registry.insert_header_pair(
                RecordKind::RunHeader,
                version,
                &run_header::segments(version),
            );
            registry.insert_header_pair(
                RecordKind::EventHeader,
                version,
                event_header::segments(version),
            );
            registry.insert_header_pair(
                RecordKind::EventEnd,
                version,
                &event_end::segments(version),
            );
        }

        let run_end = Layout::new(RecordKind::RunEnd, run_end::FIELDS);
        registry.insert_fixed(false, run_end.clone());
        registry.insert_fixed(true, run_end.padded_to(SUBBLOCK_WORDS_THIN));

        registry.insert_fixed(false, Layout::new(RecordKind::ParticleData, data::PARTICLE));
        registry.insert_fixed(true, Layout::new(RecordKind::ParticleData, data::PARTICLE_THIN));
        registry.insert_fixed(
            false,
            Layout::new(RecordKind::CherenkovPhotons, data::CHERENKOV_PHOTONS),
        );
        registry.insert_fixed(
            true,
            Layout::new(RecordKind::CherenkovPhotons, data::CHERENKOV_PHOTONS_THIN),
        );
        registry.insert_fixed(
            false,
            Layout::new(RecordKind::Longitudinal, longitudinal::FIELDS),
        );

        registry
    }

    /// Register a thinned and an unthinned layout built from the same
    /// segments.
    fn insert_header_pair(&mut self, kind: RecordKind, version: VersionKey, segments: &[&[Field]]) {
        let layout = Layout::from_segments(kind, segments);
        let thin = layout.clone().padded_to(SUBBLOCK_WORDS_THIN);
        self.insert_versioned(version, false, layout);
        self.insert_versioned(version, true, thin);
    }

    /// Register a layout for one version of a versioned kind. Replaces
    /// any layout already registered under the same key.
    pub fn insert_versioned(&mut self, version: VersionKey, thinned: bool, layout: Layout) {
        self.versioned
            .insert((layout.kind(), version, thinned), layout);
    }

    /// Register the version-independent layout of a kind.
    pub fn insert_fixed(&mut self, thinned: bool, layout: Layout) {
        self.fixed.insert((layout.kind(), thinned), layout);
    }

    /// Resolve the layout of a versioned kind.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::UnsupportedVersion`] when nothing is registered
    /// under exactly this key. Neighbouring versions are never tried.
    pub fn lookup(
        &self,
        kind: RecordKind,
        version: VersionKey,
        thinned: bool,
    ) -> Result<&Layout, TypeError> {
        self.versioned
            .get(&(kind, version, thinned))
            .ok_or(TypeError::UnsupportedVersion {
                kind,
                version,
                thinned,
            })
    }

    /// Resolve the version-independent layout of a kind.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::NoFixedLayout`] for versioned kinds and for
    /// thinning modes the kind does not have (longitudinal rows are only
    /// registered unthinned).
    pub fn fixed(&self, kind: RecordKind, thinned: bool) -> Result<&Layout, TypeError> {
        self.fixed
            .get(&(kind, thinned))
            .ok_or(TypeError::NoFixedLayout { kind, thinned })
    }

    /// Registered versions of `kind`, ascending.
    #[must_use]
    pub fn versions(&self, kind: RecordKind, thinned: bool) -> Vec<VersionKey> {
        let mut versions: Vec<_> = self
            .versioned
            .keys()
            .filter(|(k, _, t)| *k == kind && *t == thinned)
            .map(|(_, version, _)| *version)
            .collect();
        versions.sort_unstable();
        versions
    }

    /// Every registered layout, ordered by kind, version, then thinning.
    #[must_use]
    pub fn entries(&self) -> Vec<RegistryEntry<'_>> {
        let versioned = self
            .versioned
            .iter()
            .map(|(&(kind, version, thinned), layout)| RegistryEntry {
                kind,
                version: Some(version),
                thinned,
                layout,
            });
        let fixed = self
            .fixed
            .iter()
            .map(|(&(kind, thinned), layout)| RegistryEntry {
                kind,
                version: None,
                thinned,
                layout,
            });

        let mut entries: Vec<_> = versioned.chain(fixed).collect();
        entries.sort_by_key(|e| (e.kind, e.version, e.thinned));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{EVTH_VERSION_POSITION, RUNH_VERSION_POSITION, SUBBLOCK_WORDS, WORD_SIZE};

    fn contiguous(layout: &Layout) -> bool {
        let mut next = 1;
        for f in layout.fields() {
            if f.field.word != next || f.offset != usize::from(next - 1) * WORD_SIZE {
                return false;
            }
            next = f.field.next_word();
        }
        true
    }

    #[test]
    fn every_layout_is_contiguous() {
        for entry in registry().entries() {
            assert!(
                contiguous(entry.layout),
                "{} {:?} thinned={} has gaps",
                entry.kind,
                entry.version,
                entry.thinned
            );
        }
    }

    #[test]
    fn headers_fill_a_whole_subblock() {
        for entry in registry().entries() {
            if entry.kind.is_variable_occupancy() {
                continue;
            }
            let expected = if entry.thinned {
                SUBBLOCK_WORDS_THIN
            } else {
                SUBBLOCK_WORDS
            };
            assert_eq!(entry.layout.words(), expected, "{}", entry.kind);
        }
    }

    #[test]
    fn thirty_nine_rows_fill_a_data_subblock() {
        let r = registry();
        assert_eq!(r.fixed(RecordKind::ParticleData, false).unwrap().words() * 39, SUBBLOCK_WORDS);
        assert_eq!(r.fixed(RecordKind::ParticleData, true).unwrap().words() * 39, SUBBLOCK_WORDS_THIN);
        assert_eq!(
            r.fixed(RecordKind::CherenkovPhotons, false).unwrap().words() * 39,
            SUBBLOCK_WORDS
        );
        assert_eq!(
            r.fixed(RecordKind::CherenkovPhotons, true).unwrap().words() * 39,
            SUBBLOCK_WORDS_THIN
        );
    }

    #[test]
    fn version_words_sit_at_their_positions() {
        for version in registry().versions(RecordKind::RunHeader, false) {
            let layout = registry().lookup(RecordKind::RunHeader, version, false).unwrap();
            let field = layout.field("version").unwrap();
            assert_eq!(usize::from(field.field.word), RUNH_VERSION_POSITION);
        }
        for version in registry().versions(RecordKind::EventHeader, true) {
            let layout = registry().lookup(RecordKind::EventHeader, version, true).unwrap();
            let field = layout.field("version").unwrap();
            assert_eq!(usize::from(field.field.word), EVTH_VERSION_POSITION);
        }
    }

    #[test]
    fn unknown_version_does_not_fall_back() {
        let result = registry().lookup(RecordKind::EventHeader, VersionKey::new(7, 3), false);
        assert!(matches!(
            result,
            Err(TypeError::UnsupportedVersion {
                kind: RecordKind::EventHeader,
                thinned: false,
                ..
            })
        ));
    }

    #[test]
    fn versioned_kinds_have_no_fixed_layout() {
        assert!(matches!(
            registry().fixed(RecordKind::EventHeader, false),
            Err(TypeError::NoFixedLayout { .. })
        ));
        assert!(matches!(
            registry().fixed(RecordKind::Longitudinal, true),
            Err(TypeError::NoFixedLayout { .. })
        ));
    }

    #[test]
    fn revisions_differ_where_the_format_changed() {
        let r = registry();
        let legacy = r.lookup(RecordKind::EventEnd, VersionKey::new(6, 5), false).unwrap();
        let modern = r.lookup(RecordKind::EventEnd, VersionKey::new(7, 4), false).unwrap();
        assert!(legacy.field("n_muons_written").is_none());
        assert!(modern.field("n_muons_written").is_some());

        let v74 = r.lookup(RecordKind::EventHeader, VersionKey::new(7, 4), false).unwrap();
        let v76 = r.lookup(RecordKind::EventHeader, VersionKey::new(7, 6), false).unwrap();
        assert!(v74.field("inclined_observation_plane_x").is_none());
        assert!(v76.field("inclined_observation_plane_x").is_some());
    }

    #[test]
    fn all_releases_are_registered() {
        let expected: Vec<_> = LEGACY_VERSIONS.into_iter().chain(MODERN_VERSIONS).collect();
        for kind in [RecordKind::RunHeader, RecordKind::EventHeader, RecordKind::EventEnd] {
            assert_eq!(registry().versions(kind, false), expected, "{kind}");
            assert_eq!(registry().versions(kind, true), expected, "{kind}");
        }
    }

    #[test]
    fn custom_registries_start_empty() {
        let mut custom = Registry::new();
        assert!(custom.entries().is_empty());

        let layout = Layout::new(RecordKind::EventEnd, event_end::HEAD);
        custom.insert_versioned(VersionKey::new(8, 0), false, layout.clone());
        assert_eq!(
            custom.lookup(RecordKind::EventEnd, VersionKey::new(8, 0), false).unwrap(),
            &layout
        );
    }
}
