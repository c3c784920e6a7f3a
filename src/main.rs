mod config;
mod engine;
mod error;
mod ui;

use std::env;

use config::AppConfig;
use ui::app::App;

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = AppConfig::from_args(env::args());
    let options = config.native_options();
    let title = config.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, config)))),
    )
}
