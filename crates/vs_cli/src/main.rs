// crates/vs_cli/src/main.rs
//
// Host wiring: parse flags, init logging, dispatch one subcommand against the
// result store, map typed errors onto the exit-code table.

mod args;
mod text;

mod exitcodes {
    pub const OK: u8 = 0;
    pub const VALIDATION: u8 = 2;
    pub const NOT_FOUND: u8 = 3;
    pub const IO: u8 = 4;
}

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use serde::Deserialize;
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vs_core::{
    AdministrativeScale, ElectionModel, GovernanceDisruption, ResultId, ScenarioId, ScenarioParams, SimulationResult,
};
use vs_io::{IoError, JsonFileStore, ResultStore};
use vs_pipeline::{run_with_ctx, EngineError, RunCtx};
use vs_report::ReportError;

use args::{Cli, Command, OutputFormat, RunArgs, DEFAULT_FREQUENCY, DEFAULT_STATES};

/// Central error type for CLI → exit-code mapping.
#[derive(Debug)]
enum MainError {
    /// Engine parameter errors, malformed ids and scenario files.
    Validation(String),
    /// Unknown result id.
    NotFound(String),
    /// Store, export or output failures.
    Io(String),
}

impl std::fmt::Display for MainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MainError::Validation(m) | MainError::Io(m) => f.write_str(m),
            MainError::NotFound(id) => write!(f, "no stored result with id {id}"),
        }
    }
}

impl From<EngineError> for MainError {
    fn from(e: EngineError) -> Self {
        MainError::Validation(e.to_string())
    }
}

impl From<IoError> for MainError {
    fn from(e: IoError) -> Self {
        MainError::Io(format!("store: {e}"))
    }
}

impl From<ReportError> for MainError {
    fn from(e: ReportError) -> Self {
        MainError::Io(e.to_string())
    }
}

fn main() -> ExitCode {
    // clap prints usage errors itself and exits with 2.
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose);

    let rc = match dispatch(&cli) {
        Ok(()) => exitcodes::OK,
        Err(e) => {
            eprintln!("vs: error: {e}");
            map_error(&e)
        }
    };
    ExitCode::from(rc)
}

fn map_error(e: &MainError) -> u8 {
    match e {
        MainError::Validation(_) => exitcodes::VALIDATION,
        MainError::NotFound(_) => exitcodes::NOT_FOUND,
        MainError::Io(_) => exitcodes::IO,
    }
}

fn init_tracing(quiet: bool, verbose: u8) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        _ => "debug",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn dispatch(cli: &Cli) -> Result<(), MainError> {
    let open = || JsonFileStore::open(&cli.store).map_err(MainError::from);
    match &cli.command {
        Command::Run(run) => cmd_run(run, cli),
        Command::List => {
            for r in open()?.list()? {
                println!("{}", text::list_row(&r));
            }
            Ok(())
        }
        Command::Show { id, format } => {
            let r = fetch(&open()?, id)?;
            match format {
                OutputFormat::Text => print!("{}", text::result(&r)),
                OutputFormat::Json => println!("{}", vs_report::render_result_json(&r)?),
            }
            Ok(())
        }
        Command::Compare { ids, format } => {
            let store = open()?;
            let results = ids.iter().map(|id| fetch(&store, id)).collect::<Result<Vec<_>, _>>()?;
            let summary = vs_report::compare(&results);
            match format {
                OutputFormat::Text => print!("{}", text::comparison(&summary)),
                OutputFormat::Json => println!("{}", vs_report::render_comparison_json(&summary)?),
            }
            Ok(())
        }
        Command::Export { id, out } => {
            let r = fetch(&open()?, id)?;
            match out {
                Some(dest) => write_export(&r, dest),
                None => {
                    println!("{}", vs_report::export(&r));
                    Ok(())
                }
            }
        }
        Command::Delete { id } => {
            let id = parse_result_id(id)?;
            if !open()?.delete(&id)? {
                return Err(MainError::NotFound(id.to_string()));
            }
            info!(%id, "deleted");
            Ok(())
        }
        Command::Clear => {
            open()?.clear()?;
            info!("store cleared");
            Ok(())
        }
        Command::Stats { format } => {
            let stats = vs_report::dashboard_stats(&open()?.list()?);
            match format {
                OutputFormat::Text => print!("{}", text::stats(&stats)),
                OutputFormat::Json => println!("{}", vs_report::render_stats_json(&stats)?),
            }
            Ok(())
        }
    }
}

fn cmd_run(run: &RunArgs, cli: &Cli) -> Result<(), MainError> {
    let params = match &run.scenario {
        Some(path) => load_scenario(path)?,
        None => ScenarioParams {
            id: ScenarioId::generate(chrono::Utc::now()),
            name: run.name.as_deref().unwrap_or_default().trim().to_string(),
            model: run.model.unwrap_or(ElectionModel::Current),
            states_involved: run.states.unwrap_or(DEFAULT_STATES),
            election_frequency: run.frequency.unwrap_or(DEFAULT_FREQUENCY),
            administrative_scale: run.admin_scale.unwrap_or(AdministrativeScale::Medium),
            governance_disruption: run.disruption.unwrap_or(GovernanceDisruption::Moderate),
        },
    };

    let mut ctx = match run.seed {
        Some(seed) => RunCtx::seeded(seed),
        None => RunCtx::from_entropy(),
    };
    info!(seed = ctx.seed(), "fallback seed");
    let result = run_with_ctx(&params, &mut ctx)?;

    if !run.no_save {
        JsonFileStore::open(&cli.store)?.create(result.clone())?;
        info!(id = %result.id, store = %cli.store.display(), "saved");
    }
    if let Some(dest) = &run.export {
        write_export(&result, dest)?;
    }

    match run.format {
        OutputFormat::Text => print!("{}", text::result(&result)),
        OutputFormat::Json => println!("{}", vs_report::render_result_json(&result)?),
    }
    Ok(())
}

/// Scenario file shape: `ScenarioParams` with an optional id.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ScenarioFile {
    #[serde(default)]
    id: Option<ScenarioId>,
    name: String,
    model: ElectionModel,
    states_involved: i32,
    election_frequency: i32,
    administrative_scale: AdministrativeScale,
    governance_disruption: GovernanceDisruption,
}

fn load_scenario(path: &Path) -> Result<ScenarioParams, MainError> {
    let bytes = std::fs::read(path).map_err(|e| MainError::Io(format!("read {}: {e}", path.display())))?;
    let file: ScenarioFile = serde_json::from_slice(&bytes)
        .map_err(|e| MainError::Validation(format!("scenario {}: {e}", path.display())))?;
    debug!(path = %path.display(), "scenario loaded");
    Ok(ScenarioParams {
        id: file.id.unwrap_or_else(|| ScenarioId::generate(chrono::Utc::now())),
        name: file.name.trim().to_string(),
        model: file.model,
        states_involved: file.states_involved,
        election_frequency: file.election_frequency,
        administrative_scale: file.administrative_scale,
        governance_disruption: file.governance_disruption,
    })
}

fn parse_result_id(raw: &str) -> Result<ResultId, MainError> {
    raw.parse::<ResultId>().map_err(|e| MainError::Validation(format!("result id {raw:?}: {e}")))
}

fn fetch(store: &JsonFileStore, raw: &str) -> Result<SimulationResult, MainError> {
    let id = parse_result_id(raw)?;
    store.get(&id)?.ok_or_else(|| MainError::NotFound(id.to_string()))
}

/// `dest` may be a directory (existing, or spelled with a trailing separator).
fn export_target(result: &SimulationResult, dest: &Path) -> PathBuf {
    let as_dir = dest.is_dir() || dest.as_os_str().to_string_lossy().ends_with(std::path::MAIN_SEPARATOR);
    if as_dir {
        dest.join(vs_report::export_file_name(result))
    } else {
        dest.to_path_buf()
    }
}

fn write_export(result: &SimulationResult, dest: &Path) -> Result<(), MainError> {
    let path = export_target(result, dest);
    vs_io::write_atomic(&path, vs_report::export(result).as_bytes())
        .map_err(|e| MainError::Io(format!("export {}: {e}", path.display())))?;
    info!(path = %path.display(), "export written");
    Ok(())
}
