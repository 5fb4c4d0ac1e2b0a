// crates/vs_cli/src/args.rs
//
// Argument surface for `vs`. Parameter flags and `--scenario` are mutually
// exclusive; every parameter flag has the simulator form's default.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use vs_core::{AdministrativeScale, CoreError, ElectionModel, GovernanceDisruption};

#[derive(Debug, Parser)]
#[command(
    name = "vs",
    version,
    disable_help_subcommand = true,
    about = "Election-synchronization scenario simulator"
)]
pub struct Cli {
    /// Result store file.
    #[arg(long, global = true, env = "VS_STORE", default_value = "simulations.json")]
    pub store: PathBuf,

    /// Only log errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Raise the log level (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Simulate one scenario (saved to the store unless --no-save).
    Run(RunArgs),
    /// Stored results, newest first.
    List,
    /// Print one stored result.
    Show {
        id: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Compare two or more stored results.
    Compare {
        #[arg(required = true, num_args = 2..)]
        ids: Vec<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Write the export document of a stored result.
    Export {
        id: String,
        /// File or directory (default: stdout).
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Remove one stored result.
    Delete { id: String },
    /// Remove every stored result.
    Clear,
    /// Dashboard statistics over the store.
    Stats {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Scenario JSON file (camelCase ScenarioParams; `id` optional).
    #[arg(long, conflicts_with_all = ["name", "model", "states", "frequency", "admin_scale", "disruption"])]
    pub scenario: Option<PathBuf>,

    #[arg(long, required_unless_present = "scenario")]
    pub name: Option<String>,

    /// current | partial | full
    #[arg(long, value_parser = parse_token::<ElectionModel>)]
    pub model: Option<ElectionModel>,

    /// Number of regions involved.
    #[arg(long, allow_hyphen_values = true)]
    pub states: Option<i32>,

    /// Years between election cycles.
    #[arg(long, allow_hyphen_values = true)]
    pub frequency: Option<i32>,

    /// low | medium | high
    #[arg(long, value_parser = parse_token::<AdministrativeScale>)]
    pub admin_scale: Option<AdministrativeScale>,

    /// minimal | moderate | significant
    #[arg(long, value_parser = parse_token::<GovernanceDisruption>)]
    pub disruption: Option<GovernanceDisruption>,

    /// Fallback-cost RNG seed: decimal u64 or 0x-hex (1..=16 digits).
    #[arg(long, value_parser = parse_seed)]
    pub seed: Option<u64>,

    /// Do not write the result to the store.
    #[arg(long)]
    pub no_save: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also write the export document (file or directory).
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub const DEFAULT_STATES: i32 = 15;
pub const DEFAULT_FREQUENCY: i32 = 5;

fn parse_token<T: FromStr<Err = CoreError>>(s: &str) -> Result<T, String> {
    s.parse::<T>().map_err(|e| e.to_string())
}

/// Seed parser: decimal u64 or 0x-hex (1..=16 nybbles).
pub fn parse_seed(s: &str) -> Result<u64, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty seed".into());
    }
    if let Some(rest) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        if rest.is_empty() || rest.len() > 16 || !rest.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err("hex seed must be 1..16 hex digits".into());
        }
        u64::from_str_radix(rest, 16).map_err(|_| "hex seed out of range".into())
    } else {
        s.parse::<u64>().map_err(|_| "decimal seed must be a valid u64".into())
    }
}
