/// Implementation of `corsika layouts`.
///
/// Lists the built-in registry, one layout per line:
///
/// ```text
/// Kind                 Version  Thinned  Words  Fields
/// ─────────────────────────────────────────────────────
/// run_header           6.5      no         273     100
/// run_header           6.5      yes        312     101
/// ...
/// particle_data        -        yes          8       8
/// ```
use anyhow::Result;
use corsika_types::registry;

/// Run the `corsika layouts` command.
///
/// # Errors
///
/// Never fails; returns `Result` for symmetry with the other commands.
#[allow(clippy::unnecessary_wraps)]
pub fn run() -> Result<()> {
    println!(
        "{:<20} {:<8} {:<8} {:>5}  {:>6}",
        "Kind", "Version", "Thinned", "Words", "Fields"
    );
    println!("{}", "─".repeat(53));
    for entry in registry().entries() {
        let version = entry
            .version
            .map_or_else(|| "-".to_owned(), |v| v.to_string());
        println!(
            "{:<20} {:<8} {:<8} {:>5}  {:>6}",
            entry.kind.name(),
            version,
            if entry.thinned { "yes" } else { "no" },
            entry.layout.words(),
            entry.layout.fields().len(),
        );
    }
    Ok(())
}
