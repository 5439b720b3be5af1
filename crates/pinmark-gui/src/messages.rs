use std::path::PathBuf;

use pinmark_core::config::SessionConfig;
use pinmark_core::io::image_io::DecodedImage;
use pinmark_core::io::intake::DecodeTicket;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Read and decode an image file.
    DecodeFile { path: PathBuf, ticket: DecodeTicket },

    /// Decode dropped bytes that have no path on disk.
    DecodeBytes {
        name: String,
        bytes: Vec<u8>,
        ticket: DecodeTicket,
    },

    /// Read an image from the system clipboard.
    DecodeClipboard { ticket: DecodeTicket },

    /// Write already-encoded PNG bytes to disk.
    SavePng { path: PathBuf, png: Vec<u8> },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    /// A file chosen in the open dialog, not yet decoded.
    FilePicked {
        path: PathBuf,
    },
    Decoded {
        ticket: DecodeTicket,
        result: pinmark_core::error::Result<DecodedImage>,
    },
    Saved {
        path: PathBuf,
    },
    ConfigImported {
        config: SessionConfig,
    },
    Error {
        message: String,
    },
    Log {
        message: String,
    },
}
