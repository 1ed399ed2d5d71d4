// BuildSleuth - main.rs
//
// Command-line entry point. Handles:
// 1. CLI argument parsing
// 2. Configuration loading and logging initialisation
// 3. Loading the build log into application state
// 4. Writing the report in the requested format

use buildsleuth::app::{load, state::AppState};
use buildsleuth::core::export;
use buildsleuth::platform::{config, fs};
use buildsleuth::util::{
    self,
    error::{BuildSleuthError, ExportError, LoadError},
};
use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Exit code when the log has no asset report.
const EXIT_NO_REPORT: u8 = 2;

/// BuildSleuth - Unity build log analyser.
///
/// Reads the asset size report from a Unity editor build log and prints it
/// as a table, CSV, JSON, or chart data.
#[derive(Parser, Debug)]
#[command(name = "BuildSleuth", version, about)]
struct Cli {
    /// Build log to read (defaults to the Unity Editor.log location).
    path: Option<PathBuf>,

    /// Hide assets smaller than this many megabytes.
    #[arg(short = 'm', long = "merge-size")]
    merge_size: Option<f64>,

    /// Output format.
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Write the report to a file instead of stdout.
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Read configuration from this file instead of the platform default.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Aligned size table with totals.
    Table,
    /// `path,size_mb` rows.
    Csv,
    /// Array of `{ path, size_mb }` objects.
    Json,
    /// Chart.js pie chart data.
    Chart,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| config::PlatformPaths::resolve().config_file());
    let (app_config, config_warnings) = config::load_config(&config_path);

    util::logging::init(cli.debug, app_config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "BuildSleuth starting"
    );
    for warning in &config_warnings {
        tracing::warn!("{}", warning);
    }

    match run(&cli, AppState::new(app_config.merge_size)) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "BuildSleuth failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, mut state: AppState) -> Result<ExitCode, BuildSleuthError> {
    let log_path = match &cli.path {
        Some(path) => path.clone(),
        None => fs::default_editor_log_path().ok_or(LoadError::NoDefaultLocation)?,
    };

    let outcome = load::load_log_file(&mut state, &log_path)?;
    if !outcome.committed {
        eprintln!("{}", state.status_message);
        return Ok(ExitCode::from(EXIT_NO_REPORT));
    }
    tracing::info!("{}", state.status_message);

    if let Some(size) = cli.merge_size {
        if !state.set_merge_size(size) {
            eprintln!(
                "Warning: merge size {size} is out of range ({}-{}); using {}.",
                util::constants::MIN_MERGE_SIZE_MB,
                util::constants::MAX_MERGE_SIZE_MB,
                state.merge_size()
            );
        }
    }

    match &cli.output {
        Some(path) => {
            let file = std::fs::File::create(path).map_err(|e| BuildSleuthError::Io {
                path: path.clone(),
                operation: "create report",
                source: e,
            })?;
            let count = write_report(&state, cli.format, std::io::BufWriter::new(file), path)?;
            tracing::info!(file = %path.display(), count, "Report written");
        }
        None => {
            let stdout = std::io::stdout();
            write_report(&state, cli.format, stdout.lock(), Path::new("<stdout>"))?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn write_report<W: Write>(
    state: &AppState,
    format: OutputFormat,
    mut writer: W,
    path: &Path,
) -> Result<usize, ExportError> {
    let visible = state.visible();
    let count = match format {
        OutputFormat::Table => {
            export::render_table(&visible, state.merge_size(), &mut writer, path)?
        }
        OutputFormat::Csv => export::export_csv(&visible.kept, &mut writer, path)?,
        OutputFormat::Json => export::export_json(&visible.kept, &mut writer, path)?,
        OutputFormat::Chart => export::export_chart_json(state.chart_data(), &mut writer, path)?,
    };
    writer.flush().map_err(|e| ExportError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(count)
}
