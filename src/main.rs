#![warn(clippy::all)]

use bounded_life::{App, EngineConfig};

fn main() -> eframe::Result<()> {
    use eframe::egui::{vec2, ViewportBuilder};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = match EngineConfig::from_env().and_then(App::new) {
        Ok(app) => app,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(2);
        }
    };

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(1280., 800.))
            .with_min_inner_size(vec2(640.0, 360.0)),
        follow_system_theme: false,
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
}
