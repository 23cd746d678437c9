//! ndcube - n-dimensional hypercube frame printer
//!
//! Prints a summary of the hypercube and then one block of projected
//! vertices per animation frame on stdout. Logs go to stderr.

use std::io::{self, BufWriter};

use ndcube::config::AppConfig;
use ndcube::{frame, NdcubeError};

fn main() -> Result<(), NdcubeError> {
    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    // Initialize logging; RUST_LOG wins over the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Err(e) = loaded {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting ndcube with {} dimensions, showing {} vertices per frame",
        config.cube.dimensions, config.cube.vertices_to_show);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    frame::run(&config, &mut out)
}
