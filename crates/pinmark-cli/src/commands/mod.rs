pub mod annotate;
pub mod config;
pub mod info;
pub mod replay;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use pinmark_core::config::SessionConfig;
use pinmark_core::io::image_io::decode_file;
use pinmark_core::session::Session;

/// Load the session config from `path`, or the defaults. `parity` swaps in
/// unbounded zoom and last-decode-wins uploads.
pub fn load_config(path: Option<&PathBuf>, parity: bool) -> Result<SessionConfig> {
    let mut config = match path {
        Some(path) => SessionConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => SessionConfig::default(),
    };
    if parity {
        let parity = SessionConfig::parity();
        config.zoom.policy = parity.zoom.policy;
        config.decode = parity.decode;
    }
    Ok(config)
}

/// The explicit `--output` path, else the configured export file name.
pub fn output_path(explicit: Option<&PathBuf>, config: &SessionConfig) -> PathBuf {
    explicit
        .cloned()
        .unwrap_or_else(|| PathBuf::from(&config.export.file_name))
}

/// Walk a fresh session through get-started and one upload of `file`.
pub fn open_session(config: SessionConfig, file: &Path) -> Result<Session> {
    let mut session = Session::new(config);
    session.get_started();

    let ticket = session.begin_decode();
    let decoded = decode_file(file);
    session
        .finish_decode(ticket, decoded)
        .with_context(|| format!("Failed to load {}", file.display()))?;

    if session.image().is_none() {
        bail!("No image loaded from {}", file.display());
    }
    Ok(session)
}

/// Write the annotated PNG to `output`, or print it as a data URL.
pub fn write_output(session: &Session, output: &Path, data_url: bool) -> Result<()> {
    if data_url {
        let png = session.export_png()?;
        println!("{}", pinmark_core::io::export::png_data_url(&png));
    } else {
        session
            .export_to(output)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        println!("\nOutput saved to {}", output.display());
    }
    Ok(())
}
