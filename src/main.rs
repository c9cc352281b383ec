mod app;
mod model;
mod prompt;

fn main() -> eframe::Result<()> {
    env_logger::init();
    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "Statepad",
        native_options,
        Box::new(|cc| Ok(Box::new(app::SketchApp::new(cc)))),
    )
}
