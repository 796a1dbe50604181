use corsika_types::constants::{SUBBLOCK_WORDS, SUBBLOCK_WORDS_THIN, WORD_SIZE};
use corsika_types::{Layout, RecordKind, Registry, TypeError, registry};
use corsika_wire::{VersionKey, extract_version, round_version};

use crate::config::DecoderConfig;
use crate::decode::{decode, filter_occupied};
use crate::error::DecodeError;
use crate::records::Records;

/// Sub-block decoder: resolves the layout for a kind, then decodes.
///
/// Each `parse_*` method handles one sub-block kind. Versioned kinds
/// resolve their layout through the registry; the rest use the fixed
/// layout for their thinning mode:
///
/// ```text
///   &[u8] ──▶ version word ──▶ VersionKey ──▶ Registry ──▶ Layout
///                                                             │
///   &[u8] ──────────────────────────────────────────▶ decode ◀┘
///                                                       │
///                                  data kinds ──▶ filter_occupied
/// ```
///
/// Header and end records are copied out so they outlive the buffer;
/// data blocks stay views into it.
#[derive(Clone, Copy, Debug)]
pub struct SubBlockDecoder<'r> {
    config: DecoderConfig,
    registry: &'r Registry,
}

impl Default for SubBlockDecoder<'static> {
    fn default() -> Self {
        Self::new(DecoderConfig::default())
    }
}

impl SubBlockDecoder<'static> {
    /// A decoder over the built-in registry.
    #[must_use]
    pub fn new(config: DecoderConfig) -> Self {
        Self {
            config,
            registry: registry(),
        }
    }
}

impl<'r> SubBlockDecoder<'r> {
    /// A decoder over a caller-built registry.
    #[must_use]
    pub fn with_registry(config: DecoderConfig, registry: &'r Registry) -> Self {
        Self { config, registry }
    }

    #[must_use]
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Identify a sub-block from its marker word and length.
    ///
    /// Returns `None` for anything without a known marker, which in a
    /// well-formed file means a data block. Thinning is inferred from the
    /// length: 312 words is thinned, 273 words is not.
    #[must_use]
    pub fn detect(buf: &[u8]) -> Option<(RecordKind, bool)> {
        let kind = RecordKind::from_tag(buf)?;
        match buf.len() / WORD_SIZE {
            n if n == SUBBLOCK_WORDS && buf.len() % WORD_SIZE == 0 => Some((kind, false)),
            n if n == SUBBLOCK_WORDS_THIN && buf.len() % WORD_SIZE == 0 => Some((kind, true)),
            _ => None,
        }
    }

    /// Decode any kind. `version` is required for event end records and
    /// ignored otherwise.
    ///
    /// # Errors
    ///
    /// Whatever the kind's `parse_*` method returns. Event end records
    /// without a version fail with [`TypeError::InvalidVersion`] for NaN.
    pub fn parse<'b>(
        &self,
        kind: RecordKind,
        buf: &'b [u8],
        thinned: bool,
        version: Option<f64>,
    ) -> Result<Records<'b>, DecodeError> {
        match kind {
            RecordKind::RunHeader => {
                self.versioned(kind, buf, thinned, self.config.runh_version_position)
            }
            RecordKind::EventHeader => {
                self.versioned(kind, buf, thinned, self.config.evth_version_position)
            }
            RecordKind::EventEnd => self.event_end(buf, thinned, version.unwrap_or(f64::NAN)),
            RecordKind::RunEnd => self.fixed(kind, buf, thinned),
            RecordKind::CherenkovPhotons | RecordKind::ParticleData | RecordKind::Longitudinal => {
                self.data(kind, buf, thinned)
            }
        }
    }

    /// Decode a 273-word run header; the version sits in word 4.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::Wire`] if the buffer is too short to hold the version.
    /// - [`DecodeError::Type`] if the version is unparseable or unsupported.
    /// - [`DecodeError::MalformedBuffer`] if the length is not a whole record.
    pub fn parse_run_header(&self, buf: &[u8]) -> Result<Records<'static>, DecodeError> {
        self.versioned(RecordKind::RunHeader, buf, false, self.config.runh_version_position)
    }

    /// Decode a 312-word thinned run header.
    ///
    /// # Errors
    ///
    /// See [`parse_run_header`](Self::parse_run_header).
    pub fn parse_run_header_thin(&self, buf: &[u8]) -> Result<Records<'static>, DecodeError> {
        self.versioned(RecordKind::RunHeader, buf, true, self.config.runh_version_position)
    }

    /// Decode a run end record.
    ///
    /// # Errors
    ///
    /// [`DecodeError::MalformedBuffer`] if the length is not a whole record.
    pub fn parse_run_end(&self, buf: &[u8]) -> Result<Records<'static>, DecodeError> {
        self.fixed(RecordKind::RunEnd, buf, false)
    }

    /// Decode a thinned run end record.
    ///
    /// # Errors
    ///
    /// [`DecodeError::MalformedBuffer`] if the length is not a whole record.
    pub fn parse_run_end_thin(&self, buf: &[u8]) -> Result<Records<'static>, DecodeError> {
        self.fixed(RecordKind::RunEnd, buf, true)
    }

    /// Decode an event header; the version sits in word 46.
    ///
    /// # Errors
    ///
    /// See [`parse_run_header`](Self::parse_run_header).
    pub fn parse_event_header(&self, buf: &[u8]) -> Result<Records<'static>, DecodeError> {
        self.versioned(RecordKind::EventHeader, buf, false, self.config.evth_version_position)
    }

    /// Decode a thinned event header.
    ///
    /// # Errors
    ///
    /// See [`parse_run_header`](Self::parse_run_header).
    pub fn parse_event_header_thin(&self, buf: &[u8]) -> Result<Records<'static>, DecodeError> {
        self.versioned(RecordKind::EventHeader, buf, true, self.config.evth_version_position)
    }

    /// Decode an event end record.
    ///
    /// Event end records carry no version word, so the caller passes the
    /// version read from the enclosing run or event header. It is rounded
    /// to 4 decimal digits and normalized exactly like an extracted one,
    /// so a widened `f32` such as `f64::from(7.7f32)` still selects 7.7.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::Type`] if `version` is unparseable or unsupported.
    /// - [`DecodeError::MalformedBuffer`] if the length is not a whole record.
    pub fn parse_event_end(
        &self,
        buf: &[u8],
        version: f64,
    ) -> Result<Records<'static>, DecodeError> {
        self.event_end(buf, false, version)
    }

    /// Decode a thinned event end record.
    ///
    /// # Errors
    ///
    /// See [`parse_event_end`](Self::parse_event_end).
    pub fn parse_event_end_thin(
        &self,
        buf: &[u8],
        version: f64,
    ) -> Result<Records<'static>, DecodeError> {
        self.event_end(buf, true, version)
    }

    /// Decode a block of Cherenkov photon bunches, dropping empty slots.
    ///
    /// # Errors
    ///
    /// [`DecodeError::MalformedBuffer`] if the length is not a whole
    /// number of bunches.
    pub fn parse_cherenkov_photons<'b>(&self, buf: &'b [u8]) -> Result<Records<'b>, DecodeError> {
        self.data(RecordKind::CherenkovPhotons, buf, false)
    }

    /// Decode a thinned block of photon bunches.
    ///
    /// # Errors
    ///
    /// See [`parse_cherenkov_photons`](Self::parse_cherenkov_photons).
    pub fn parse_cherenkov_photons_thin<'b>(
        &self,
        buf: &'b [u8],
    ) -> Result<Records<'b>, DecodeError> {
        self.data(RecordKind::CherenkovPhotons, buf, true)
    }

    /// Decode a particle data block, dropping empty slots.
    ///
    /// # Errors
    ///
    /// [`DecodeError::MalformedBuffer`] if the length is not a whole
    /// number of particles.
    pub fn parse_particle_data<'b>(&self, buf: &'b [u8]) -> Result<Records<'b>, DecodeError> {
        self.data(RecordKind::ParticleData, buf, false)
    }

    /// Decode a thinned particle data block.
    ///
    /// # Errors
    ///
    /// See [`parse_particle_data`](Self::parse_particle_data).
    pub fn parse_particle_data_thin<'b>(&self, buf: &'b [u8]) -> Result<Records<'b>, DecodeError> {
        self.data(RecordKind::ParticleData, buf, true)
    }

    /// Decode the rows of a longitudinal profile block.
    ///
    /// # Errors
    ///
    /// [`DecodeError::MalformedBuffer`] if the length is not a whole
    /// number of rows.
    pub fn parse_longitudinal<'b>(&self, buf: &'b [u8]) -> Result<Records<'b>, DecodeError> {
        self.data(RecordKind::Longitudinal, buf, false)
    }

    fn versioned(
        &self,
        kind: RecordKind,
        buf: &[u8],
        thinned: bool,
        position: usize,
    ) -> Result<Records<'static>, DecodeError> {
        let raw = extract_version(buf, position)?;
        let layout = self.resolve(kind, raw, thinned)?;
        owned(kind, buf, layout, thinned)
    }

    fn event_end(
        &self,
        buf: &[u8],
        thinned: bool,
        version: f64,
    ) -> Result<Records<'static>, DecodeError> {
        let layout = self.resolve(RecordKind::EventEnd, round_version(version), thinned)?;
        owned(RecordKind::EventEnd, buf, layout, thinned)
    }

    fn resolve(&self, kind: RecordKind, raw: f64, thinned: bool) -> Result<&'r Layout, TypeError> {
        let version = VersionKey::normalize(raw).ok_or(TypeError::InvalidVersion { raw })?;
        tracing::debug!(%kind, raw, %version, thinned, "resolving layout");
        self.registry.lookup(kind, version, thinned)
    }

    fn fixed(
        &self,
        kind: RecordKind,
        buf: &[u8],
        thinned: bool,
    ) -> Result<Records<'static>, DecodeError> {
        let layout = self.registry.fixed(kind, thinned)?;
        owned(kind, buf, layout, thinned)
    }

    fn data<'b>(
        &self,
        kind: RecordKind,
        buf: &'b [u8],
        thinned: bool,
    ) -> Result<Records<'b>, DecodeError> {
        let layout = self.registry.fixed(kind, thinned)?;
        let records = filter_occupied(decode(buf, layout)?);
        tracing::debug!(%kind, thinned, records = records.len(), "decoded data block");
        Ok(records)
    }
}

/// Decode a header or end record and detach it from `buf`.
fn owned(
    kind: RecordKind,
    buf: &[u8],
    layout: &Layout,
    thinned: bool,
) -> Result<Records<'static>, DecodeError> {
    let records = decode(buf, layout)?.into_owned();
    tracing::debug!(%kind, thinned, records = records.len(), "decoded sub-block");
    Ok(records)
}
