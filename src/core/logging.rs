//! Browser console logging behind the `log` facade.
//!
//! `init` installs the `console_log` backend once; later calls only adjust the
//! level. Until then (and in host-side tests) the `log` macros are inert.

use log::LevelFilter;

use crate::core::error::{DashboardError, Result};

pub fn parse_level(level: &str) -> Result<LevelFilter> {
    match level.trim().to_ascii_lowercase().as_str() {
        "off" => Ok(LevelFilter::Off),
        "error" => Ok(LevelFilter::Error),
        "warn" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        other => Err(DashboardError::InvalidLogLevel(other.to_string())),
    }
}

/// Installs the console logger at `level`.
pub fn init(level: &str) -> Result<()> {
    let filter = parse_level(level)?;
    if let Some(max) = filter.to_level() {
        // A second call finds the logger already set; only the level changes.
        let _ = console_log::init_with_level(max);
    }
    log::set_max_level(filter);
    log::info!("Console logging enabled at {}", filter);
    Ok(())
}
