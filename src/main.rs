use cubebot_rust::config::Configuration;
use cubebot_rust::error::ScanError;
use tracing::Level;

fn init_logging() {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();
}

#[tokio::main]
async fn main() -> Result<(), ScanError> {
    init_logging();
    let configuration = Configuration::load()?;
    tracing::info!(
        "capture box at ({}, {}), {}x{}",
        configuration.capture.x,
        configuration.capture.y,
        configuration.capture.size,
        configuration.capture.size
    );
    Ok(())
}
