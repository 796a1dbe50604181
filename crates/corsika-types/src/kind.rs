use std::fmt;
use std::str::FromStr;

use crate::error::TypeError;

/// Record kinds a CORSIKA sub-block can hold.
///
/// Header and end blocks start with a 4-byte ASCII marker; data blocks
/// carry no marker and must be identified by the caller from context
/// (their position after an event header).
///
/// ```text
/// ┌──────────────────┬────────┬───────────┬─────────────────────┐
/// │ Kind             │ Marker │ Versioned │ Variable occupancy  │
/// ├──────────────────┼────────┼───────────┼─────────────────────┤
/// │ RunHeader        │ RUNH   │ yes       │ no                  │
/// │ RunEnd           │ RUNE   │ no        │ no                  │
/// │ EventHeader      │ EVTH   │ yes       │ no                  │
/// │ EventEnd         │ EVTE   │ yes       │ no                  │
/// │ CherenkovPhotons │ -      │ no        │ yes                 │
/// │ ParticleData     │ -      │ no        │ yes                 │
/// │ Longitudinal     │ -      │ no        │ yes                 │
/// └──────────────────┴────────┴───────────┴─────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordKind {
    RunHeader,
    RunEnd,
    EventHeader,
    EventEnd,
    CherenkovPhotons,
    ParticleData,
    Longitudinal,
}

impl RecordKind {
    pub const ALL: [Self; 7] = [
        Self::RunHeader,
        Self::RunEnd,
        Self::EventHeader,
        Self::EventEnd,
        Self::CherenkovPhotons,
        Self::ParticleData,
        Self::Longitudinal,
    ];

    /// Snake-case name used in diagnostics and on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::RunHeader => "run_header",
            Self::RunEnd => "run_end",
            Self::EventHeader => "event_header",
            Self::EventEnd => "event_end",
            Self::CherenkovPhotons => "cherenkov_photons",
            Self::ParticleData => "particle_data",
            Self::Longitudinal => "longitudinal",
        }
    }

    /// The ASCII marker in word 1, for kinds that have one.
    #[must_use]
    pub const fn tag(self) -> Option<&'static [u8; 4]> {
        match self {
            Self::RunHeader => Some(b"RUNH"),
            Self::RunEnd => Some(b"RUNE"),
            Self::EventHeader => Some(b"EVTH"),
            Self::EventEnd => Some(b"EVTE"),
            Self::CherenkovPhotons | Self::ParticleData | Self::Longitudinal => None,
        }
    }

    /// Identify a marked sub-block from its first word.
    ///
    /// Returns `None` for anything that is not one of the four markers,
    /// including every data block.
    #[must_use]
    pub fn from_tag(buf: &[u8]) -> Option<Self> {
        let head = buf.get(..4)?;
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag().is_some_and(|tag| tag.as_slice() == head))
    }

    /// Whether the layout depends on the CORSIKA version.
    #[must_use]
    pub const fn is_versioned(self) -> bool {
        matches!(self, Self::RunHeader | Self::EventHeader | Self::EventEnd)
    }

    /// Whether blocks of this kind are fixed-capacity tables whose unused
    /// rows are zero-filled.
    #[must_use]
    pub const fn is_variable_occupancy(self) -> bool {
        matches!(
            self,
            Self::CherenkovPhotons | Self::ParticleData | Self::Longitudinal
        )
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RecordKind {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.replace('-', "_").to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| TypeError::UnknownRecordKind { name: s.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_roundtrip() {
        for kind in RecordKind::ALL {
            if let Some(tag) = kind.tag() {
                assert_eq!(RecordKind::from_tag(tag), Some(kind), "{kind}");
            }
        }
    }

    #[test]
    fn marker_detection_ignores_trailing_words() {
        let mut buf = b"EVTH".to_vec();
        buf.extend_from_slice(&1.0f32.to_le_bytes());
        assert_eq!(RecordKind::from_tag(&buf), Some(RecordKind::EventHeader));
    }

    #[test]
    fn data_blocks_have_no_marker() {
        assert_eq!(RecordKind::from_tag(&[0u8; 28]), None);
        assert_eq!(RecordKind::from_tag(b"RUN"), None);
        assert_eq!(RecordKind::from_tag(b"LONG"), None);
    }

    #[test]
    fn only_data_kinds_are_variable_occupancy() {
        let variable: Vec<_> = RecordKind::ALL
            .into_iter()
            .filter(|kind| kind.is_variable_occupancy())
            .collect();
        assert_eq!(
            variable,
            [
                RecordKind::CherenkovPhotons,
                RecordKind::ParticleData,
                RecordKind::Longitudinal
            ]
        );
        assert!(variable.iter().all(|kind| kind.tag().is_none()));
    }

    #[test]
    fn names_parse_back() {
        for kind in RecordKind::ALL {
            assert_eq!(kind.name().parse::<RecordKind>().unwrap(), kind);
        }
        assert_eq!(
            "event-end".parse::<RecordKind>().unwrap(),
            RecordKind::EventEnd
        );
        assert!(matches!(
            "evth".parse::<RecordKind>(),
            Err(TypeError::UnknownRecordKind { .. })
        ));
    }
}
