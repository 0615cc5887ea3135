#![allow(clippy::print_stderr)]

use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;

use untypedconst_cli::args::CliArgs;
use untypedconst_cli::{driver, tracing_config};

/// No diagnostics reported.
const EXIT_SUCCESS: u8 = 0;
/// At least one diagnostic reported.
const EXIT_DIAGNOSTICS: u8 = 1;
/// A snapshot could not be found, read or parsed.
const EXIT_FAILURE: u8 = 2;

fn main() -> ExitCode {
    tracing_config::init_tracing();

    let args = CliArgs::parse();
    match run(&args) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn run(args: &CliArgs) -> anyhow::Result<u8> {
    let result = driver::run(args)?;
    let color = args.color(std::io::stdout().is_terminal());
    colored::control::set_override(color);

    let output = driver::render(&result, args.format, color)?;
    println!("{output}");

    Ok(if result.diagnostic_count() > 0 {
        EXIT_DIAGNOSTICS
    } else {
        EXIT_SUCCESS
    })
}
