use pinmark_core::color::Rgba8;
use pinmark_core::event::SessionEvent;
use pinmark_core::session::ViewMode;

use crate::app::PinmarkApp;
use crate::convert::{from_color32, to_color32};

const LEFT_PANEL_WIDTH: f32 = 240.0;
const OFFSET_RANGE: i32 = 4000;

pub fn show(ctx: &egui::Context, app: &mut PinmarkApp) {
    if app.session.mode() != ViewMode::Viewer {
        return;
    }

    egui::SidePanel::left("controls")
        .default_width(LEFT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(LEFT_PANEL_WIDTH - 20.0);

                file_section(ui, app);
                ui.separator();
                marker_section(ui, app);
                ui.separator();
                view_section(ui, app);
                ui.separator();
                export_section(ui, app);
            });
        });
}

fn file_section(ui: &mut egui::Ui, app: &mut PinmarkApp) {
    super::section_header(ui, "Image", None);
    ui.add_space(4.0);

    if let Some(image) = app.session.image() {
        ui.label(image.source.to_string());
        ui.small(format!("{}x{}", image.width(), image.height()));
    }

    ui.horizontal(|ui| {
        if ui.button("Open...").clicked() {
            app.open_file_dialog();
        }
        if ui.button("Paste").clicked() {
            app.upload_clipboard();
        }
        if app.ui_state.is_busy() {
            ui.spinner();
        }
    });
}

fn marker_section(ui: &mut egui::Ui, app: &mut PinmarkApp) {
    let count = app.session.markers().len();
    let status = format!("{count} placed");
    super::section_header(ui, "Markers", Some(&status));
    ui.add_space(4.0);

    let controls = app.session.controls().clone();
    let mut events = Vec::new();

    // Only affects markers placed from now on.
    let mut size = controls.circle_size;
    if ui
        .add(
            egui::Slider::new(&mut size, 4.0..=200.0)
                .text("Circle size")
                .suffix(" px"),
        )
        .changed()
    {
        events.push(SessionEvent::SetCircleSize { size });
    }

    if let Some(color) = color_row(ui, "Circle color", controls.circle_color) {
        events.push(SessionEvent::SetCircleColor { color });
    }
    if let Some(color) = color_row(ui, "Number color", controls.font_color) {
        events.push(SessionEvent::SetFontColor { color });
    }

    let mut size = controls.font_size;
    if ui
        .add(
            egui::Slider::new(&mut size, 6.0..=96.0)
                .text("Number size")
                .suffix(" px"),
        )
        .changed()
    {
        events.push(SessionEvent::SetFontSize { size });
    }

    for event in events {
        app.apply(event);
    }
}

fn color_row(ui: &mut egui::Ui, label: &str, current: Rgba8) -> Option<Rgba8> {
    ui.horizontal(|ui| {
        let mut color = to_color32(current);
        let changed = egui::color_picker::color_edit_button_srgba(
            ui,
            &mut color,
            egui::color_picker::Alpha::OnlyBlend,
        )
        .changed();
        ui.label(label);
        changed.then(|| from_color32(color))
    })
    .inner
}

fn view_section(ui: &mut egui::Ui, app: &mut PinmarkApp) {
    let transform = *app.session.transform();
    let scale = format!("{:.0}%", transform.scale * 100.0);
    super::section_header(ui, "View", Some(&scale));
    ui.add_space(4.0);

    let mut events = Vec::new();
    ui.horizontal(|ui| {
        if ui.button("Zoom In").clicked() {
            events.push(SessionEvent::ZoomIn);
        }
        if ui.button("Zoom Out").clicked() {
            events.push(SessionEvent::ZoomOut);
        }
    });

    let mut offset = transform.offset_x;
    if ui
        .add(egui::Slider::new(&mut offset, -OFFSET_RANGE..=OFFSET_RANGE).text("Offset X"))
        .changed()
    {
        events.push(SessionEvent::SetOffsetX { offset });
    }

    let mut offset = transform.offset_y;
    if ui
        .add(egui::Slider::new(&mut offset, -OFFSET_RANGE..=OFFSET_RANGE).text("Offset Y"))
        .changed()
    {
        events.push(SessionEvent::SetOffsetY { offset });
    }

    for event in events {
        app.apply(event);
    }
}

fn export_section(ui: &mut egui::Ui, app: &mut PinmarkApp) {
    super::section_header(ui, "Export", None);
    ui.add_space(4.0);

    let button = egui::Button::new("Download PNG").min_size(egui::vec2(ui.available_width(), 28.0));
    if ui.add(button).clicked() {
        app.export_png();
    }
    ui.small(&app.session.config().export.file_name);
}
