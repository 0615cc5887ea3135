use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the untypedconst binary.
#[derive(Parser, Debug)]
#[command(name = "untypedconst", version, about = untypedconst_common::ANALYZER_DOC)]
pub struct CliArgs {
    /// Snapshot files, or directories searched recursively for `*.json` snapshots.
    #[arg(value_name = "PATHS", required = true)]
    pub paths: Vec<PathBuf>,

    /// Output format for diagnostics.
    #[arg(long, value_enum, ignore_case = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Force colored output with source snippets.
    #[arg(long, overrides_with = "no_color")]
    pub pretty: bool,

    /// Disable colored output.
    #[arg(long = "no-color", overrides_with = "pretty")]
    pub no_color: bool,

    /// Number of worker threads (defaults to one per core).
    #[arg(short = 'j', long, value_parser = clap::value_parser!(u16).range(1..))]
    pub jobs: Option<u16>,
}

impl CliArgs {
    /// Whether text output is colored, given whether stdout is a terminal.
    pub const fn color(&self, stdout_is_terminal: bool) -> bool {
        if self.no_color {
            false
        } else {
            self.pretty || stdout_is_terminal
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// `file:line:col - warning UC9001: message` lines.
    Text,
    /// One JSON array of diagnostics.
    Json,
}
