mod report;
mod telemetry;

use std::io;

use backend_core::AppDescriptor;
use backend_util::{load_env_file, AppConfig};
use tracing::{info, warn};

fn main() {
    load_env_file();

    let (config, config_error) = match AppConfig::from_env() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    if let Err(err) = telemetry::init_tracing(&config) {
        eprintln!("{err}");
    }
    if let Some(err) = config_error {
        warn!(stage = "config", error = %err, env = %config.environment.as_str(), "falling back to default environment");
    }

    let app = AppDescriptor::new();
    info!(stage = "app", service = app.name(), version = app.version(), "application constructed");

    let stdout = io::stdout();
    if let Err(err) = report::write_report(&mut stdout.lock(), &app) {
        warn!(stage = "report", error = %err, "failed to write report to stdout");
    }
}
