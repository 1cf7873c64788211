//! tomato-icons - renders the tomato timer icon set as PNG files

use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod render;

use config::ConfigSource;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // First argument, if any, is a JSON config file
    let source = ConfigSource::from_args(std::env::args().skip(1));
    let config = match source.load() {
        Ok(config) => config,
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    info!(
        "Rendering {} icon(s) into {}",
        config.sizes.len(),
        config.output_dir.display()
    );

    let summary = render::render_all(&config);
    if summary.is_success() {
        ExitCode::SUCCESS
    } else {
        error!("{} of {} icon(s) failed", summary.failed.len(), config.sizes.len());
        ExitCode::FAILURE
    }
}
