use data_dashboard::app::DashboardApp;
use data_dashboard::config;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let seed = config::seed_from_env();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Data Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(DashboardApp::new(seed)))),
    )
}
