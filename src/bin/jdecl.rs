#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{IsTerminal, Write};

use jdecl::cli::args::CliArgs;
use jdecl::cli::{driver, reporter::Reporter};

const EXIT_SUCCESS: i32 = 0;
const EXIT_ERRORS: i32 = 1;

fn main() -> Result<()> {
    // Initialize tracing if JDECL_LOG or RUST_LOG is set (zero cost otherwise).
    // Supports JDECL_LOG_FORMAT=tree|json|text (see src/tracing_config.rs).
    jdecl::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let result = driver::run(&args)?;

    if args.out.is_none() {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(result.output.as_bytes())
            .context("failed to write declarations to stdout")?;
        stdout.flush().context("failed to flush stdout")?;
    }

    let pretty = args
        .pretty
        .unwrap_or_else(|| std::io::stderr().is_terminal());
    let reporter = Reporter::new(pretty);
    if !result.diagnostics.is_empty() {
        eprintln!("{}", reporter.render(&result.diagnostics));
    }
    for failure in &result.failures {
        eprintln!("{}", reporter.format_failure(failure));
    }

    if !result.has_errors() {
        std::process::exit(EXIT_SUCCESS);
    }
    let errors = result
        .diagnostics
        .iter()
        .filter(|diagnostic| diagnostic.is_error())
        .count();
    eprintln!(
        "{}",
        reporter.format_summary(result.type_count, result.failures.len(), errors)
    );
    std::process::exit(EXIT_ERRORS);
}
