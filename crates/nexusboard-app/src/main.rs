//! Main application entry point.

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting Nexus Board");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([720.0, 480.0])
            .with_title("Nexus Board"),
        ..Default::default()
    };
    eframe::run_native(
        "Nexus Board",
        options,
        Box::new(|cc| Ok(Box::new(nexusboard_app::NexusBoardApp::new(cc)))),
    )
}
