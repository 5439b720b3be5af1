use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use pinmark_core::event::EventScript;
use tracing::debug;

use super::{load_config, open_session, output_path, write_output};
use crate::summary::print_session_summary;

#[derive(Args)]
pub struct ReplayArgs {
    /// Input image file
    pub file: PathBuf,

    /// Event script (TOML list of [[events]])
    pub script: PathBuf,

    /// Session config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Unbounded zoom and last-decode-wins uploads
    #[arg(long)]
    pub parity: bool,

    /// Print the result as a PNG data URL instead of writing a file
    #[arg(long)]
    pub data_url: bool,

    /// Output file path [default: the config's export file name]
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &ReplayArgs) -> Result<()> {
    let script = EventScript::load(&args.script)
        .with_context(|| format!("Failed to read script {}", args.script.display()))?;
    let config = load_config(args.config.as_ref(), args.parity)?;
    let output = output_path(args.output.as_ref(), &config);
    let mut session = open_session(config, &args.file)?;

    for (i, event) in script.events.iter().enumerate() {
        debug!(step = i + 1, %event, "Replaying");
        session.apply(event);
    }

    if !args.data_url {
        println!("Replayed {} event(s)", script.events.len());
        print_session_summary(&session, &args.file, &output);
    }
    write_output(&session, &output, args.data_url)
}
