/// Implementation of `corsika units`.
///
/// Prints the name-to-unit table of one layout, one field per line.
/// Dimensionless fields are not listed.
///
/// ```text
/// $ corsika units particle_data --thin
/// px  GeV/c
/// py  GeV/c
/// pz  GeV/c
/// t   ns
/// x   cm
/// y   cm
/// ```
use anyhow::{Context, Result, bail};
use corsika_types::{Layout, RecordKind, registry};
use corsika_wire::VersionKey;

use crate::UnitsArgs;

/// Run the `corsika units` command.
///
/// # Errors
///
/// Returns an error for unknown kinds, a missing or unsupported version on
/// a versioned kind, or a thinning mode the kind does not have.
pub fn run(args: &UnitsArgs) -> Result<()> {
    let kind: RecordKind = args.kind.parse()?;
    let layout = resolve_layout(kind, args.format_version, args.thin)?;

    let units = layout.units();
    let width = units.keys().map(|name| name.len()).max().unwrap_or(0);
    for (name, unit) in units {
        println!("{name:<width$}  {unit}");
    }
    Ok(())
}

/// Find the registered layout for `kind` without decoding anything.
fn resolve_layout(
    kind: RecordKind,
    version: Option<f64>,
    thinned: bool,
) -> Result<&'static Layout> {
    if !kind.is_versioned() {
        return Ok(registry().fixed(kind, thinned)?);
    }
    let Some(raw) = version else {
        bail!("{kind} layouts depend on the CORSIKA version; pass --version");
    };
    let version = VersionKey::normalize(raw).with_context(|| format!("invalid version {raw}"))?;
    Ok(registry().lookup(kind, version, thinned)?)
}
