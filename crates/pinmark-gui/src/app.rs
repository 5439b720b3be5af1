use std::sync::mpsc;

use pinmark_core::config::SessionConfig;
use pinmark_core::event::SessionEvent;
use pinmark_core::io::intake::DecodeOutcome;
use pinmark_core::session::Session;

use crate::convert::canvas_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::state::{UIState, ViewportState};
use crate::worker;

pub struct PinmarkApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub session: Session,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub show_about: bool,
}

impl PinmarkApp {
    pub fn new(ctx: &egui::Context, config: SessionConfig) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx.clone(), ctx.clone());

        Self {
            cmd_tx,
            result_tx,
            result_rx,
            session: Session::new(config),
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
            show_about: false,
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::Decoded { ticket, result } => {
                    if self.ui_state.pending_decode == Some(ticket) {
                        self.ui_state.pending_decode = None;
                    }
                    let source = result.as_ref().ok().map(|img| img.source.to_string());
                    match self.session.finish_decode(ticket, result) {
                        Ok(DecodeOutcome::Applied) => {
                            let (w, h) = self.session.canvas_size();
                            self.ui_state.upload_error = None;
                            self.ui_state.add_log(format!(
                                "Opened: {} ({w}x{h})",
                                source.unwrap_or_default()
                            ));
                            self.viewport.dirty = true;
                        }
                        Ok(DecodeOutcome::Stale) => {
                            self.ui_state.add_log(format!("Discarded stale upload {ticket}"));
                        }
                        Err(e) => {
                            self.ui_state.upload_error = Some(e.to_string());
                            self.ui_state.add_log(format!("ERROR: {e}"));
                        }
                    }
                }
                WorkerResult::FilePicked { path } => {
                    self.upload_file(path);
                }
                WorkerResult::Saved { path } => {
                    self.ui_state.add_log(format!("Saved: {}", path.display()));
                }
                WorkerResult::ConfigImported { config } => {
                    self.session.reconfigure(config);
                    self.viewport.dirty = true;
                    self.ui_state.add_log("Config imported".into());
                }
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    /// Re-render the canvas into the viewport texture when anything changed.
    fn refresh_texture(&mut self, ctx: &egui::Context) {
        if !self.viewport.dirty {
            return;
        }
        self.viewport.dirty = false;

        match self.session.render() {
            Ok(canvas) if canvas.width() > 0 && canvas.height() > 0 => {
                let image = canvas_to_color_image(&canvas);
                match self.viewport.texture {
                    Some(ref mut texture) => texture.set(image, egui::TextureOptions::NEAREST),
                    None => {
                        self.viewport.texture =
                            Some(ctx.load_texture("canvas", image, egui::TextureOptions::NEAREST));
                    }
                }
            }
            Ok(_) => self.viewport.texture = None,
            Err(e) => self.ui_state.add_log(format!("ERROR: render failed: {e}")),
        }
    }

    /// Apply one interaction to the session and schedule a redraw.
    pub fn apply(&mut self, event: SessionEvent) {
        tracing::debug!(%event, "UI event");
        self.session.apply(&event);
        self.viewport.dirty = true;
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }

    pub fn upload_file(&mut self, path: std::path::PathBuf) {
        let ticket = self.session.begin_decode();
        self.ui_state.pending_decode = Some(ticket);
        self.send_command(WorkerCommand::DecodeFile { path, ticket });
    }

    pub fn upload_bytes(&mut self, name: String, bytes: Vec<u8>) {
        let ticket = self.session.begin_decode();
        self.ui_state.pending_decode = Some(ticket);
        self.send_command(WorkerCommand::DecodeBytes {
            name,
            bytes,
            ticket,
        });
    }

    pub fn upload_clipboard(&mut self) {
        let ticket = self.session.begin_decode();
        self.ui_state.pending_decode = Some(ticket);
        self.send_command(WorkerCommand::DecodeClipboard { ticket });
    }

    /// Pick a file on a helper thread. The choice comes back as
    /// [`WorkerResult::FilePicked`] so the ticket is issued on this thread.
    pub fn open_file_dialog(&self) {
        let result_tx = self.result_tx.clone();
        std::thread::spawn(move || {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter(
                    "Images",
                    &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff"],
                )
                .add_filter("All files", &["*"])
                .pick_file()
            {
                let _ = result_tx.send(WorkerResult::FilePicked { path });
            }
        });
    }

    /// Encode the canvas and hand it to the worker behind a save dialog.
    pub fn export_png(&mut self) {
        let png = match self.session.export_png() {
            Ok(png) => png,
            Err(e) => {
                self.ui_state.add_log(format!("ERROR: {e}"));
                return;
            }
        };
        let file_name = self.session.config().export.file_name.clone();
        let cmd_tx = self.cmd_tx.clone();
        std::thread::spawn(move || {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("PNG", &["png"])
                .set_file_name(file_name)
                .save_file()
            {
                let _ = cmd_tx.send(WorkerCommand::SavePng { path, png });
            }
        });
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let Some(file) = pinmark_core::io::intake::first_file(dropped) else {
            return;
        };
        if let Some(path) = file.path {
            self.upload_file(path);
        } else if let Some(bytes) = file.bytes {
            self.upload_bytes(file.name, bytes.to_vec());
        }
    }

    fn handle_paste(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        let paste = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::V);
        let requested = ctx.input_mut(|i| {
            i.consume_shortcut(&paste)
                || i.events.iter().any(|e| matches!(e, egui::Event::Paste(_)))
        });
        if requested {
            self.upload_clipboard();
        }
    }
}

impl eframe::App for PinmarkApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results();
        self.handle_dropped_files(ctx);
        self.handle_paste(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);

        self.refresh_texture(ctx);
        panels::viewport::show(ctx, self);

        // About dialog
        if self.show_about {
            egui::Window::new("About Pinmark")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Pinmark");
                        ui.label("Numbered markers for images");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
