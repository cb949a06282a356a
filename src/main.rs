use std::process;
use tracing::error;

use uptime_display::app::Application;
use uptime_display::telemetry;

fn main() {
    let mut app = match Application::new() {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = telemetry::init(app.config().verbose) {
        eprintln!("Warning: {}", e);
    }

    if let Err(e) = app.initialize().and_then(|_| app.run()) {
        error!("{}", e);
        process::exit(1);
    }
}
