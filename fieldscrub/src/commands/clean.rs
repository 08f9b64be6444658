//! Clean command implementation: sanitise a JSON document of raw fields.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use fieldscrub_core::{raw_fields_from_json, FieldPolicy, FieldSanitizer};

/// Options for the clean operation.
pub struct CleanOptions {
    pub policy: PathBuf,
    pub input_file: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub only: Vec<String>,
    pub drop: Vec<String>,
    pub pretty: bool,
}

/// The main operation runner for the `clean` command.
pub fn run_clean(opts: CleanOptions) -> Result<()> {
    info!("Starting clean operation.");

    let mut policy = FieldPolicy::load_from_file(&opts.policy)?;
    if !opts.only.is_empty() || !opts.drop.is_empty() {
        policy.restrict(&opts.only, &opts.drop);
    }

    let input = read_input(opts.input_file.as_deref())?;
    let doc: serde_json::Value =
        serde_json::from_str(&input).context("Input is not valid JSON")?;
    let raw = raw_fields_from_json(&doc)?;

    let cleaned = FieldSanitizer::new(policy)
        .clean(&raw)
        .context("Sanitisation failed")?;
    debug!("Cleaned {} of {} input field(s).", cleaned.len(), raw.len());

    let rendered = if opts.pretty {
        serde_json::to_string_pretty(&cleaned)?
    } else {
        serde_json::to_string(&cleaned)?
    };
    write_output(opts.output.as_deref(), &rendered)?;

    info!("Clean operation completed.");
    Ok(())
}

fn read_input(input_file: Option<&std::path::Path>) -> Result<String> {
    match input_file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

fn write_output(output: Option<&std::path::Path>, rendered: &str) -> Result<()> {
    match output {
        Some(path) => {
            info!("Writing cleaned output to file: {}", path.display());
            let mut file = fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            writeln!(file, "{}", rendered)?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            writeln!(writer, "{}", rendered)?;
        }
    }
    Ok(())
}
