//! Command-line interface for the unifilar utility
//!
//! Provides a CLI that turns an equipment table into a single-line DXF
//! diagram and a PDF technical report.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use unifilar::core::logging::init_logging;
use unifilar::plugins::table::{EquipmentDatabase, COLUMNS};
use unifilar::plugins::{Artifact, Orchestrator};
use unifilar::{Database, MissingValuePolicy, RenderConfig};

/// Unifilar - Generate single-line diagrams and technical reports
#[derive(Parser)]
#[command(name = "unifilar")]
#[command(about = "Generate a single-line DXF diagram and a PDF report from an equipment table")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error) [default: info]
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Set log format (compact|pretty|json) [default: compact]
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

impl Cli {
    /// Logging settings given on the command line, if any
    ///
    /// Unset values are resolved by `init_logging` from `UNIFILAR_LOG_LEVEL`,
    /// `RUST_LOG` and `UNIFILAR_LOG_FORMAT`.
    pub fn logging_overrides(&self) -> (Option<&'static str>, Option<&'static str>) {
        (
            self.log_level.map(|level| level.as_str()),
            self.log_format.map(|format| format.as_str()),
        )
    }
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the DXF diagram and the PDF report
    Generate {
        /// Input file containing the JSON equipment table (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Directory the documents are written to
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// Path of the diagram, overriding the default name in --out-dir
        #[arg(long)]
        diagram: Option<PathBuf>,

        /// Path of the report, overriding the default name in --out-dir
        #[arg(long)]
        report: Option<PathBuf>,

        /// How absent ratings are printed in the report
        #[arg(long, value_enum, default_value_t = MissingChoice::Raw)]
        missing: MissingChoice,
    },

    /// Print the parsed equipment table
    Preview {
        /// Input file containing the JSON equipment table (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file for the preview (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Validate an equipment table without generating documents
    Validate {
        /// Input file to validate (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

/// Report rendering of absent ratings
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum MissingChoice {
    /// Print the literal `nan`
    #[default]
    Raw,
    /// Leave the cell empty
    Blank,
}

impl From<MissingChoice> for MissingValuePolicy {
    fn from(value: MissingChoice) -> Self {
        match value {
            MissingChoice::Raw => MissingValuePolicy::RenderRawPlaceholder,
            MissingChoice::Blank => MissingValuePolicy::RenderBlank,
        }
    }
}

/// Main CLI application
pub struct UnifilarApp {
    orchestrator: Orchestrator,
}

impl UnifilarApp {
    /// Create a new application instance with default settings
    pub fn new() -> Self {
        Self::with_config(RenderConfig::default())
    }

    /// Create a new application instance with a render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            orchestrator: Orchestrator::with_config(config),
        }
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        // Flags win; init_logging falls back to the environment for the rest
        let (log_level, log_format) = cli.logging_overrides();
        if let Err(e) = init_logging(log_level, log_format) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Unifilar v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Generate {
                input,
                out_dir,
                diagram,
                report,
                missing,
            } => self.generate_command(input, &out_dir, diagram, report, missing, cli.verbose),
            Commands::Preview {
                input,
                output,
                json,
            } => self.preview_command(input, output, json, cli.verbose),
            Commands::Validate { input } => self.validate_command(input, cli.verbose),
        }
    }

    /// Handle the generate command
    fn generate_command(
        &mut self,
        input: Option<PathBuf>,
        out_dir: &Path,
        diagram: Option<PathBuf>,
        report: Option<PathBuf>,
        missing: MissingChoice,
        verbose: bool,
    ) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        self.orchestrator = Orchestrator::with_config(RenderConfig::new(missing.into()));
        let artifacts = self.orchestrator.process(&content)?;

        let diagram_path = diagram.unwrap_or_else(|| out_dir.join(&artifacts.diagram.file_name));
        let report_path = report.unwrap_or_else(|| out_dir.join(&artifacts.report.file_name));

        self.write_artifacts(&[
            (diagram_path.as_path(), &artifacts.diagram),
            (report_path.as_path(), &artifacts.report),
        ])?;
        info!(
            diagram = %diagram_path.display(),
            report = %report_path.display(),
            "Documents written"
        );

        if verbose {
            eprintln!("Wrote {}", diagram_path.display());
            eprintln!("Wrote {}", report_path.display());
        }
        Ok(())
    }

    /// Handle the preview command
    fn preview_command(
        &self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        json: bool,
        verbose: bool,
    ) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let database = self.orchestrator.parse(&content)?;
        let rendered = if json {
            let records: Vec<_> = database.records().collect();
            serde_json::to_string_pretty(&records)?
        } else {
            format_preview(&database, MissingValuePolicy::default())
        };
        self.write_output(output, &rendered)
    }

    /// Handle the validate command
    fn validate_command(&self, input: Option<PathBuf>, verbose: bool) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        match self.orchestrator.parse(&content) {
            Ok(database) => {
                println!(
                    "✓ Valid equipment table ({} records)",
                    database.record_count()
                );
                Ok(())
            }
            Err(e) => {
                println!("✗ Invalid equipment table: {}", e);
                Err(e)
            }
        }
    }

    /// Read input from file or stdin
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) if path.to_string_lossy() != "-" => fs::read_to_string(&path)
                .map_err(|e| anyhow!("Failed to read input file '{}': {}", path.display(), e)),
            _ => {
                let mut content = String::new();
                io::stdin().read_to_string(&mut content)?;
                Ok(content)
            }
        }
    }

    /// Write text output to file or stdout
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        let stdout_content = if content.is_empty() || content.ends_with('\n') {
            content.to_string()
        } else {
            format!("{}\n", content)
        };

        match output {
            Some(path) if path.to_string_lossy() != "-" => {
                fs::write(&path, content).map_err(|e| {
                    anyhow!("Failed to write output file '{}': {}", path.display(), e)
                })?;
            }
            _ => {
                print!("{}", stdout_content);
                io::stdout().flush()?;
            }
        }
        Ok(())
    }

    /// Write generated documents so that either all of them land or none do
    ///
    /// Files are staged next to their targets and renamed into place once
    /// every one of them has been written. A path of `-` goes to stdout after
    /// the files are committed.
    pub fn write_artifacts(&self, outputs: &[(&Path, &Artifact)]) -> Result<()> {
        let mut staged: Vec<(PathBuf, &Path)> = Vec::new();
        for (path, artifact) in outputs.iter().filter(|(p, _)| !is_stdout(p)) {
            match stage_artifact(path, artifact) {
                Ok(staging) => staged.push((staging, *path)),
                Err(e) => {
                    discard(staged.iter().map(|(staging, _)| staging.as_path()));
                    return Err(e);
                }
            }
        }

        let mut committed: Vec<&Path> = Vec::new();
        for (i, (staging, path)) in staged.iter().enumerate() {
            if let Err(e) = fs::rename(staging, path) {
                discard(staged[i..].iter().map(|(staging, _)| staging.as_path()));
                discard(committed.iter().copied());
                return Err(anyhow!(
                    "Failed to write output file '{}': {}",
                    path.display(),
                    e
                ));
            }
            committed.push(*path);
        }

        for (_, artifact) in outputs.iter().filter(|(p, _)| is_stdout(p)) {
            io::stdout().write_all(&artifact.bytes)?;
            io::stdout().flush()?;
        }
        Ok(())
    }

    /// Get a reference to the orchestrator (for testing)
    #[cfg(test)]
    pub fn orchestrator(&self) -> &Orchestrator {
        &self.orchestrator
    }
}

impl Default for UnifilarApp {
    fn default() -> Self {
        Self::new()
    }
}

fn is_stdout(path: &Path) -> bool {
    path.to_string_lossy() == "-"
}

/// Write one document to a sibling `.partial` file, creating parent directories
fn stage_artifact(path: &Path, artifact: &Artifact) -> Result<PathBuf> {
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("Output path '{}' has no file name", path.display()))?;
    let mut staging_name = file_name.to_os_string();
    staging_name.push(".partial");
    let staging = path.with_file_name(staging_name);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| anyhow!("Failed to create directory '{}': {}", parent.display(), e))?;
    }
    debug!(path = %path.display(), len = artifact.bytes.len(), mime = artifact.mime_type, "Writing artifact");
    if let Err(e) = fs::write(&staging, &artifact.bytes) {
        let _ = fs::remove_file(&staging);
        return Err(anyhow!(
            "Failed to write output file '{}': {}",
            path.display(),
            e
        ));
    }
    Ok(staging)
}

/// Best-effort removal after a failed write
fn discard<'a>(paths: impl Iterator<Item = &'a Path>) {
    for path in paths {
        if let Err(e) = fs::remove_file(path) {
            debug!(path = %path.display(), error = %e, "Could not remove partial output");
        }
    }
}

/// Format the parsed table as aligned text columns
pub fn format_preview(database: &EquipmentDatabase, policy: MissingValuePolicy) -> String {
    let rows: Vec<[String; 4]> = database
        .records()
        .map(|record| {
            [
                record.name.clone(),
                record.kind.to_string(),
                policy.render(record.power_mva),
                policy.render(record.voltage_kv),
            ]
        })
        .collect();

    let mut widths = COLUMNS.map(|column| column.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &COLUMNS.map(str::to_string), &widths);
    push_line(&mut out, &widths.map(|w| "-".repeat(w)), &widths);
    for row in &rows {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}
