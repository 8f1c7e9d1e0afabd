//! Command implementations for the CLI

use crate::{config::Config, core::convert, utils::input};
use anyhow::Context;
use std::io::Write;
use tracing::{debug, instrument};

/// Resolve input, convert it and print the result to stdout
#[instrument(skip(config), fields(rule = %config.rule))]
pub fn execute_command(config: &Config) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    execute_to(config, &mut stdout.lock())
}

/// Same as [`execute_command`] but writing to `out`
pub fn execute_to<W: Write>(config: &Config, out: &mut W) -> anyhow::Result<()> {
    if config.reads_stdin() {
        debug!("No text arguments given, falling back to stdin");
    }
    let text = input::resolve(&config.text)?;
    let converted = convert(&text, config.rule);
    debug!("Converted {} byte(s) into {} byte(s)", text.len(), converted.len());

    writeln!(out, "{}", converted).context("Failed to write output")?;
    out.flush().context("Failed to flush output")?;
    Ok(())
}
