//! File logging setup.
//!
//! The TUI owns the terminal, so log output goes to a file under the data
//! directory instead of stdout. Disabled unless turned on in the config.

use std::path::PathBuf;

use anyhow::Result;

use crate::config::LoggingConfig;

/// Path of the application log file, `<data_dir>/taskpad/taskpad.log`
#[must_use]
pub fn log_file_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("taskpad")
        .join("taskpad.log")
}

/// Install the global logger according to the logging config.
///
/// A no-op when logging is disabled; `log` macros then discard their input.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let log_path = log_file_path();
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file(&log_path)?)
        .apply()?;

    log::info!("logging initialized at {}", log_path.display());
    Ok(())
}
