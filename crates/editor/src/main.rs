// Chunk: docs/chunks/command_script - Headless editor driven by a command script
//!
//! textflow: headless driver for the editing core
//!
//! ```text
//! textflow <file> [debug]
//! ```
//!
//! Opens `<file>` (a missing file starts an empty document), applies the
//! commands read line by line from stdin, then prints the wrapped visual
//! lines to stdout. See [`textflow::command`] for the command syntax.
//!
//! Logging goes to stderr; `RUST_LOG` overrides the default filter.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use textflow::{EditorCommand, EditorConfig, EditorState, MonospaceMetrics};

fn main() -> anyhow::Result<ExitCode> {
    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: textflow <file> [debug]");
        return Ok(ExitCode::from(2));
    };
    let debug = args.next().is_some_and(|arg| arg == "debug");

    // Debug mode comes from the argument or the config file, so the config
    // is read before the log filter is chosen
    let (mut config, config_error) = match EditorConfig::from_default_location() {
        Ok(config) => (config, None),
        Err(e) => (EditorConfig::default(), Some(e)),
    };
    config.debug |= debug;

    let default_level = if config.debug { "textflow=debug" } else { "textflow=info" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    if let Some(e) = config_error {
        tracing::warn!(error = %e, "using default configuration");
    }

    let mut editor = EditorState::open(&path, config, MonospaceMetrics::default())
        .with_context(|| format!("failed to open {path}"))?;

    for (number, line) in io::stdin().lock().lines().enumerate() {
        let line = line.context("failed to read commands from stdin")?;
        let command = match EditorCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                tracing::warn!(line = number + 1, error = %e, "skipping command");
                continue;
            }
        };
        if let Err(e) = editor.apply(&command) {
            tracing::error!(line = number + 1, error = %e, "command failed");
        }
    }

    let mut stdout = io::stdout().lock();
    for line in editor.visual_lines() {
        writeln!(stdout, "{line}")?;
    }
    Ok(ExitCode::SUCCESS)
}
