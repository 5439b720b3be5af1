use pinmark_core::session::ViewMode;
use pinmark_core::transform::CanvasBounds;

use crate::app::PinmarkApp;
use crate::panels::welcome;

pub fn show(ctx: &egui::Context, app: &mut PinmarkApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        match app.session.mode() {
            ViewMode::Welcome => welcome::show_welcome(ui, app),
            ViewMode::UploadPrompt => welcome::show_upload_prompt(ui, app),
            ViewMode::Viewer => show_canvas(ui, app),
        }
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

/// The canvas is drawn 1:1 in physical pixels; scrollbars appear when it
/// does not fit.
fn show_canvas(ui: &mut egui::Ui, app: &mut PinmarkApp) {
    let Some(texture) = app.viewport.texture.as_ref() else {
        return;
    };
    let texture_id = texture.id();
    let ppp = ui.ctx().pixels_per_point();
    let size = egui::vec2(texture.size()[0] as f32, texture.size()[1] as f32) / ppp;

    egui::ScrollArea::both()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
            draw_checkerboard(ui, rect);
            ui.painter().image(
                texture_id,
                rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );

            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let bounds = CanvasBounds {
                        left: (rect.min.x * ppp) as f64,
                        top: (rect.min.y * ppp) as f64,
                    };
                    if let Some(number) =
                        app.session
                            .click((pos.x * ppp) as f64, (pos.y * ppp) as f64, bounds)
                    {
                        app.ui_state.add_log(format!("Marker {number} placed"));
                        app.viewport.dirty = true;
                        ui.ctx().request_repaint();
                    }
                }
            }

            response.on_hover_cursor(egui::CursorIcon::Crosshair);
        });
}

/// Shows through wherever the canvas is transparent.
fn draw_checkerboard(ui: &egui::Ui, rect: egui::Rect) {
    const CELL: f32 = 8.0;
    let painter = ui.painter().with_clip_rect(rect.intersect(ui.clip_rect()));
    painter.rect_filled(rect, 0.0, egui::Color32::from_gray(60));

    let visible = rect.intersect(ui.clip_rect());
    if !visible.is_positive() {
        return;
    }
    let first_col = ((visible.min.x - rect.min.x) / CELL).floor() as i32;
    let last_col = ((visible.max.x - rect.min.x) / CELL).ceil() as i32;
    let first_row = ((visible.min.y - rect.min.y) / CELL).floor() as i32;
    let last_row = ((visible.max.y - rect.min.y) / CELL).ceil() as i32;

    for row in first_row..last_row {
        for col in first_col..last_col {
            if (row + col) % 2 == 0 {
                continue;
            }
            let min = rect.min + egui::vec2(col as f32 * CELL, row as f32 * CELL);
            let cell = egui::Rect::from_min_size(min, egui::vec2(CELL, CELL));
            painter.rect_filled(cell, 0.0, egui::Color32::from_gray(80));
        }
    }
}
