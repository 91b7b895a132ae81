//! mudmap CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mudmap_runtime::config::DEFAULT_STORE;
use mudmap_runtime::{RunConfig, run};

/// Rebuilds a room map from a MUD session transcript.
#[derive(Debug, Parser)]
#[command(name = "mudmap")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Reconstructs a MUD room map from a session transcript")]
#[command(long_about = r#"
Reads a plain-text MUD session log, finds every room the player looked at,
links rooms through the movement commands typed between them, and merges
revisits into one map.

EXAMPLES:
  # Preview a map without touching the store
  mudmap session.log --dry-run --export map.json

  # Assign every room to zone 30 and persist
  mudmap session.log --zone-id 30

ENVIRONMENT VARIABLES:
  MUDMAP_STORE    Store file path (default: mudmap-store.json)
  RUST_LOG        Log filter, overrides -v and -q
"#)]
struct Cli {
    /// Transcript file to read
    transcript: PathBuf,

    /// Put every room in this zone instead of detecting zones
    #[arg(long, value_name = "INT")]
    zone_id: Option<u64>,

    /// Write the map here (.msgpack or .mpk for MessagePack, JSON otherwise)
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,

    /// Do not write to the store
    #[arg(long)]
    dry_run: bool,

    /// Store file to persist into
    #[arg(long, value_name = "PATH", env = "MUDMAP_STORE", default_value = DEFAULT_STORE)]
    store: PathBuf,

    /// More log output (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn default_filter(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    fn into_config(self) -> RunConfig {
        RunConfig::new(self.transcript)
            .with_zone_id(self.zone_id)
            .with_export(self.export)
            .with_dry_run(self.dry_run)
            .with_store(self.store)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| cli.default_filter().into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli.into_config()) {
        Ok(report) => {
            println!("{report}");
            if let Some(summary) = &report.persist {
                for failure in &summary.failures {
                    eprintln!("failed: {failure}");
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            if let Some(context) = &e.context {
                eprintln!("  {context}");
            }
            ExitCode::FAILURE
        }
    }
}
