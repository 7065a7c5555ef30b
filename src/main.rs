use clearframe::app::ClearFrameApp;
use clearframe::config::ApiConfig;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = ApiConfig::from_env();
    log::info!("starting ClearFrame uploader against {}", config.base_url());

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([640.0, 720.0])
            .with_min_inner_size([480.0, 560.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "ClearFrame Image Processing",
        options,
        Box::new(move |cc| Box::new(ClearFrameApp::new(cc, config))),
    ) {
        log::error!("failed to start UI: {e}");
    }
}
