//! Bytepad - A minimal terminal byte editor.
//!
//! # Usage
//!
//! ```bash
//! bytepad
//! bytepad --body-capacity 4096
//! bytepad --debug-log bytepad.log --save
//! ```
//!
//! Ctrl+Q quits, Ctrl+F and Ctrl+O open the prompt line, Backspace deletes.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use bytepad::app::{App, DEFAULT_BODY_CAPACITY, DEFAULT_STATUS_CAPACITY};
use bytepad::config::{
    clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags, ConfigFlags,
};
use bytepad::perf;

/// A minimal terminal byte editor
#[derive(Parser, Debug)]
#[command(name = "bytepad", version, about, long_about = None)]
struct Cli {
    /// Initial capacity of the document buffer in bytes
    #[arg(long, value_name = "BYTES")]
    body_capacity: Option<usize>,

    /// Initial capacity of the prompt line buffer in bytes
    #[arg(long, value_name = "BYTES")]
    status_capacity: Option<usize>,

    /// Enable startup performance logging
    #[arg(long)]
    perf: bool,

    /// Write detailed input/render debug events to a file
    #[arg(long, value_name = "PATH")]
    debug_log: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);
    tracing::debug!(?effective, "effective configuration");

    perf::set_enabled(effective.perf);
    let debug_log_path = effective
        .debug_log
        .clone()
        .or_else(|| std::env::var_os("BYTEPAD_DEBUG_LOG").map(PathBuf::from));
    if let Err(err) = perf::set_debug_log_path(debug_log_path.as_deref()) {
        tracing::warn!(
            path = %debug_log_path
                .as_ref()
                .map_or_else(|| "<unset>".to_string(), |p| p.display().to_string()),
            %err,
            "failed to initialize debug log"
        );
    }

    // Run the application
    let app = App::new()
        .with_body_capacity(effective.body_capacity.unwrap_or(DEFAULT_BODY_CAPACITY))
        .with_status_capacity(
            effective
                .status_capacity
                .unwrap_or(DEFAULT_STATUS_CAPACITY),
        );

    app.run().context("Application error")
}
