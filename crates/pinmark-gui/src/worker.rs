use std::path::Path;
use std::sync::mpsc;

use pinmark_core::error::PinmarkError;
use pinmark_core::io::export::save_png;
use pinmark_core::io::image_io::{decode_bytes, decode_file, from_rgba, DecodedImage, ImageSource};
use pinmark_core::io::intake::DecodeTicket;

use crate::messages::{WorkerCommand, WorkerResult};

pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("pinmark-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_log(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Log { message: msg.into() });
}

fn send_error(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Error { message: msg.into() });
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::DecodeFile { path, ticket } => {
                send_log(&tx, &ctx, format!("Reading {}", path.display()));
                send_decoded(&tx, &ctx, ticket, decode_file(&path));
            }
            WorkerCommand::DecodeBytes {
                name,
                bytes,
                ticket,
            } => {
                let result = decode_bytes(&bytes, ImageSource::Bytes { name });
                send_decoded(&tx, &ctx, ticket, result);
            }
            WorkerCommand::DecodeClipboard { ticket } => {
                send_decoded(&tx, &ctx, ticket, read_clipboard_image());
            }
            WorkerCommand::SavePng { path, png } => {
                handle_save(&path, &png, &tx, &ctx);
            }
        }
    }
}

fn send_decoded(
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
    ticket: DecodeTicket,
    result: pinmark_core::error::Result<DecodedImage>,
) {
    send(tx, ctx, WorkerResult::Decoded { ticket, result });
}

fn read_clipboard_image() -> pinmark_core::error::Result<DecodedImage> {
    let clipboard_err = |e: arboard::Error| PinmarkError::DecodeFailed(format!("clipboard: {e}"));
    let mut clipboard = arboard::Clipboard::new().map_err(clipboard_err)?;
    let image = clipboard.get_image().map_err(clipboard_err)?;
    from_rgba(
        image.width as u32,
        image.height as u32,
        image.bytes.into_owned(),
        ImageSource::Clipboard,
    )
}

fn handle_save(path: &Path, png: &[u8], tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    match save_png(png, path) {
        Ok(()) => send(
            tx,
            ctx,
            WorkerResult::Saved {
                path: path.to_path_buf(),
            },
        ),
        Err(e) => send_error(tx, ctx, format!("Save failed: {e}")),
    }
}
