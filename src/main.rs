#![warn(clippy::all)]

fn main() -> Result<(), eframe::Error> {
    use eframe::egui::{vec2, ViewportBuilder};

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(1280., 800.))
            .with_min_inner_size(vec2(640.0, 360.0)),
        follow_system_theme: false,
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };
    eframe::run_native(
        "Embers - Game of Life",
        options,
        Box::new(move |cc| Ok(Box::new(embers::App::new(&cc.egui_ctx)))),
    )
}
