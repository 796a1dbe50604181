/// CORSIKA command-line tool: decode single sub-blocks cut from CORSIKA
/// binary output and print their fields.
///
/// # Command overview
///
/// ```text
/// corsika <COMMAND> [OPTIONS]
///
/// Commands:
///   inspect    Decode one sub-block and print its records
///   units      Print the physical units of a record kind
///   layouts    List every registered layout
///   help       Print help information
///
/// Global options:
///   -v, --verbose    Log decoder diagnostics to stderr
///   -h, --help       Print help
///   -V, --version    Print version
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                          |
/// |------|--------------------------------------------------|
/// | 0    | Success                                          |
/// | 1    | Error (I/O failure, unsupported version, etc.)   |
///
/// All error details are written to stderr so stdout can be piped cleanly.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing::Level;

mod cmd_inspect;
mod cmd_layouts;
mod cmd_units;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// Decode CORSIKA sub-blocks.
#[derive(Parser)]
#[command(name = "corsika", version, about = "CORSIKA sub-block decoder")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log layout resolution and filtering details to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Decode one sub-block and print its records.
    Inspect(InspectArgs),
    /// Print the name-to-unit table of a record kind.
    Units(UnitsArgs),
    /// List every registered layout.
    Layouts,
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `corsika inspect`.
///
/// The file must hold exactly one sub-block. Marked sub-blocks (`RUNH`,
/// `RUNE`, `EVTH`, `EVTE`) are detected from their first word and length;
/// data blocks need `--kind`.
///
/// ```text
/// ┌─────────────────────┬──────────────────────────────────────────────┐
/// │ Flag                │ Effect                                       │
/// ├─────────────────────┼──────────────────────────────────────────────┤
/// │ --kind K            │ Decode as kind K instead of detecting it     │
/// │ --thin              │ Use the 312-word thinned layouts             │
/// │ --version V         │ Format version, required for event_end       │
/// │ --record N          │ Show only the record at index N              │
/// │ --json              │ Print JSON instead of text                   │
/// │ --runh-version-word │ Word holding the version in run headers      │
/// │ --evth-version-word │ Word holding the version in event headers    │
/// └─────────────────────┴──────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to a file holding one sub-block.
    pub file: PathBuf,

    /// Record kind, e.g. `event_header` or `particle-data`.
    #[arg(long)]
    pub kind: Option<String>,

    /// Decode with the thinned layouts.
    #[arg(long)]
    pub thin: bool,

    /// CORSIKA version for event end records, e.g. `7.4`.
    #[arg(long = "version")]
    pub format_version: Option<f64>,

    /// Show only the record at this zero-based index.
    #[arg(long)]
    pub record: Option<usize>,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// 1-based word number of the version in run headers.
    #[arg(long)]
    pub runh_version_word: Option<usize>,

    /// 1-based word number of the version in event headers.
    #[arg(long)]
    pub evth_version_word: Option<usize>,
}

/// Arguments for `corsika units`.
#[derive(clap::Args)]
pub struct UnitsArgs {
    /// Record kind, e.g. `particle_data`.
    pub kind: String,

    /// CORSIKA version, required for versioned kinds.
    #[arg(long = "version")]
    pub format_version: Option<f64>,

    /// Use the thinned layout.
    #[arg(long)]
    pub thin: bool,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Inspect(args) => cmd_inspect::run(&args),
        Commands::Units(args) => cmd_units::run(&args),
        Commands::Layouts => cmd_layouts::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
