use crate::app::PinmarkApp;

pub fn show(ctx: &egui::Context, app: &mut PinmarkApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed height for 3 lines.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..3 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            ui.label(app.session.mode().to_string());
            ui.separator();
            let (w, h) = app.session.canvas_size();
            if w > 0 {
                ui.label(format!("{w}x{h}"));
                ui.separator();
            }
            let t = app.session.transform();
            ui.label(format!("Zoom: {:.0}%", t.scale * 100.0));
            ui.separator();
            ui.label(format!("Offset: {}, {}", t.offset_x, t.offset_y));
            ui.separator();
            ui.label(format!("Markers: {}", app.session.markers().len()));
            ui.separator();
            ui.label(format!("Labels: {}", app.session.renderer().glyphs()));
        });

        ui.add_space(2.0);
    });
}
