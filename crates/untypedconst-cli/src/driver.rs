//! Input discovery, parallel checking and output assembly.

use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use untypedconst_checker::CompilationUnit;
use untypedconst_common::{Diagnostic, LineMap};

use crate::args::{CliArgs, OutputFormat};
use crate::reporter::{JsonDiagnostic, Reporter};

/// One loaded snapshot with the findings of the pass.
#[derive(Debug)]
pub struct CheckedUnit {
    pub path: PathBuf,
    pub unit: CompilationUnit,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Default)]
pub struct RunResult {
    /// In sorted input order.
    pub units: Vec<CheckedUnit>,
}

impl RunResult {
    pub fn diagnostic_count(&self) -> usize {
        self.units.iter().map(|u| u.diagnostics.len()).sum()
    }
}

/// Expand `paths` into the sorted, de-duplicated list of snapshot files.
///
/// Files are taken as given; directories contribute every `*.json` file
/// below them.
pub fn collect_inputs(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut inputs = Vec::new();
    for path in paths {
        if path.is_file() {
            inputs.push(path.clone());
        } else if path.is_dir() {
            for entry in WalkDir::new(path).sort_by_file_name() {
                let entry =
                    entry.with_context(|| format!("failed to walk {}", path.display()))?;
                if entry.file_type().is_file() && is_snapshot(entry.path()) {
                    inputs.push(entry.into_path());
                }
            }
        } else {
            bail!("no such file or directory: {}", path.display());
        }
    }
    inputs.sort();
    inputs.dedup();
    Ok(inputs)
}

fn is_snapshot(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

pub fn load_unit(path: &Path) -> Result<CompilationUnit> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    CompilationUnit::from_json(&json)
        .with_context(|| format!("failed to parse snapshot {}", path.display()))
}

pub fn check_path(path: &Path) -> Result<CheckedUnit> {
    let unit = load_unit(path)?;
    let diagnostics = unit.check();
    tracing::debug!(
        path = %path.display(),
        package = unit.package(),
        diagnostics = diagnostics.len(),
        "checked unit"
    );
    Ok(CheckedUnit {
        path: path.to_path_buf(),
        unit,
        diagnostics,
    })
}

/// Check every input; the first load failure aborts the run.
pub fn check_all(inputs: &[PathBuf], jobs: Option<u16>) -> Result<Vec<CheckedUnit>> {
    let check = || {
        inputs
            .par_iter()
            .map(|path| check_path(path))
            .collect::<Result<Vec<_>>>()
    };
    match jobs {
        Some(threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(usize::from(threads))
            .build()
            .context("failed to start worker threads")?
            .install(check),
        None => check(),
    }
}

pub fn run(args: &CliArgs) -> Result<RunResult> {
    let inputs = collect_inputs(&args.paths)?;
    if inputs.is_empty() {
        tracing::warn!("no snapshot files found");
    }
    tracing::info!(inputs = inputs.len(), jobs = ?args.jobs, "checking units");
    let units = check_all(&inputs, args.jobs)?;
    Ok(RunResult { units })
}

/// Render the whole run in the requested format.
pub fn render(result: &RunResult, format: OutputFormat, color: bool) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(result, color)),
        OutputFormat::Json => render_json(result),
    }
}

fn render_text(result: &RunResult, color: bool) -> String {
    let reporter = Reporter::new(color);
    let mut blocks = Vec::new();
    for checked in &result.units {
        blocks.extend(reporter.render_unit(&checked.diagnostics, checked.unit.source.as_deref()));
    }
    blocks.push(reporter.summary(result.diagnostic_count(), result.units.len()));
    blocks.join("\n")
}

fn render_json(result: &RunResult) -> Result<String> {
    let mut entries = Vec::new();
    for checked in &result.units {
        let map = checked.unit.source.as_deref().map(LineMap::build);
        entries.extend(
            checked
                .diagnostics
                .iter()
                .map(|diagnostic| JsonDiagnostic::new(diagnostic, map.as_ref())),
        );
    }
    serde_json::to_string_pretty(&entries).context("failed to serialize diagnostics")
}
