mod app;
mod convert;
mod messages;
mod panels;
mod state;
mod worker;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = match std::env::args_os().nth(1) {
        Some(path) => match pinmark_core::config::SessionConfig::load(path.as_ref()) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config {}: {e}", path.to_string_lossy());
                Default::default()
            }
        },
        None => Default::default(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_drag_and_drop(true)
            .with_title("Pinmark"),
        ..Default::default()
    };

    eframe::run_native(
        "Pinmark",
        options,
        Box::new(|cc| Ok(Box::new(app::PinmarkApp::new(&cc.egui_ctx, config)))),
    )
}
