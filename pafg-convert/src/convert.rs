use std::fs;

use anyhow::{Context, Result};
use config_tree::parse_file;
use pafg_convert::defaults::embedded_defaults;
use pafg_convert::translate::translate;

use crate::cli::Cli;

/// Translate the input export and write `<hostname>.txt` to the working
/// directory.
///
/// The whole script is rendered before the file is opened, so parse and
/// translation faults never create or truncate the output. An existing file
/// with the same name is overwritten.
pub fn run_convert(cli: Cli) -> Result<()> {
    let tree = parse_file(&cli.input)
        .with_context(|| format!("failed to parse {}", cli.input.display()))?;

    let defaults = embedded_defaults();
    let translation = translate(&tree, &defaults)
        .with_context(|| format!("failed to translate {}", cli.input.display()))?;

    let output = translation.output_file_name();
    tracing::debug!(input = %cli.input.display(), %output, "writing FortiGate script");
    fs::write(&output, &translation.script)
        .with_context(|| format!("failed to write output file {output}"))?;

    println!("FortiGate configuration has been written to {output}");
    Ok(())
}
