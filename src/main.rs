use std::path::Path;

use battery_indicator::{BatteryIndicator, IndicatorConfig};
use gtk4::glib::ExitCode;
use window::IndicatorWindow;

mod geometry;
mod view;
mod window;

/// Reads the config at `path`, or falls back to the defaults with a warning.
fn load_config(path: Option<&Path>) -> IndicatorConfig {
    let Some(path) = path else {
        return IndicatorConfig::default();
    };

    match IndicatorConfig::from_path(path) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring config {}: {err}", path.display());
            IndicatorConfig::default()
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let path = std::env::args_os().nth(1);
    let indicator = BatteryIndicator::new(load_config(path.as_deref().map(Path::new)));
    IndicatorWindow::new(400, 200, indicator).run()
}
