//! Main application entry point.

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting widget studio");

    let config = studio_app::load_config();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Widget Studio")
            .with_inner_size([1440.0, 900.0])
            .with_min_inner_size([960.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Widget Studio",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(studio_app::StudioApp::new(config)))
        }),
    )
}
