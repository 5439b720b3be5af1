use pinmark_core::event::SessionEvent;

use crate::app::PinmarkApp;

pub fn show_welcome(ui: &mut egui::Ui, app: &mut PinmarkApp) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.3);
        ui.heading("Pinmark");
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new("Click anywhere on an image to drop a numbered marker.")
                .color(egui::Color32::from_gray(160)),
        );
        ui.add_space(16.0);
        if ui
            .add(egui::Button::new(egui::RichText::new("Get Started").size(18.0)))
            .clicked()
        {
            app.apply(SessionEvent::GetStarted);
        }
    });
}

/// What the user asked the upload prompt for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadRequest {
    Browse,
    Paste,
}

/// Drop zone shown until the first image is decoded.
pub fn show_upload_prompt(ui: &mut egui::Ui, app: &mut PinmarkApp) {
    let busy = app.ui_state.is_busy();
    match drop_zone(ui, busy, app.ui_state.upload_error.as_deref()) {
        Some(UploadRequest::Browse) => app.open_file_dialog(),
        Some(UploadRequest::Paste) => app.upload_clipboard(),
        None => {}
    }
}

fn drop_zone(ui: &mut egui::Ui, busy: bool, error: Option<&str>) -> Option<UploadRequest> {
    let hovering = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());
    let rect = ui.available_rect_before_wrap().shrink(24.0);
    // Registered before the buttons so they stay on top of it.
    let zone = ui
        .interact(rect, ui.id().with("drop_zone"), egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand);
    let stroke_color = if hovering || zone.hovered() {
        egui::Color32::from_rgb(90, 160, 255)
    } else {
        egui::Color32::from_gray(90)
    };
    ui.painter().rect_stroke(
        rect,
        8.0,
        egui::Stroke::new(2.0, stroke_color),
        egui::StrokeKind::Inside,
    );

    let mut request = None;
    ui.scope_builder(egui::UiBuilder::new().max_rect(rect), |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(rect.height() * 0.35);
            ui.label(
                egui::RichText::new("Drop an image here")
                    .size(18.0)
                    .color(egui::Color32::from_gray(180)),
            );
            let paste = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::V);
            ui.label(
                egui::RichText::new(format!(
                    "or paste one with {}",
                    ui.ctx().format_shortcut(&paste)
                ))
                .color(egui::Color32::from_gray(120)),
            );
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                // Centre the two buttons.
                let width = 260.0;
                ui.add_space(((ui.available_width() - width) / 2.0).max(0.0));
                if ui.button("Choose File...").clicked() {
                    request = Some(UploadRequest::Browse);
                }
                if ui.button("Paste from Clipboard").clicked() {
                    request = Some(UploadRequest::Paste);
                }
            });

            ui.add_space(12.0);
            if busy {
                ui.spinner();
            } else if let Some(err) = error {
                ui.colored_label(egui::Color32::from_rgb(230, 90, 90), err);
            }
        });
    });

    if request.is_none() && zone.clicked() && !busy {
        request = Some(UploadRequest::Browse);
    }
    request
}
