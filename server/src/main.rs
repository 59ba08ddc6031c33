//! FocusPulse server entry point

use focus_pulse_lib::{BoxError, ServerConfig};
use rolling_logger::LoggerOptions;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = ServerConfig::load()?;

    rolling_logger::init_logger_with(
        &config.log_dir,
        "FocusPulse",
        LoggerOptions {
            level: config.log_level.clone(),
            ..Default::default()
        },
    )?;

    focus_pulse_lib::run(config).await
}
