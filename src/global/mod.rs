//! Process-wide default logger behind the free functions and the instance-less macros.
//!
//! Startup code installs its logger with [`set_default`]. Without that, the first
//! use falls back to a stdout logger at the lowest threshold with [`Flags::STD`].

use crate::fmt::Flags;
use crate::level::Level;
use crate::logger::Logger;
use std::fmt;
use std::sync::OnceLock;

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Installs the process-wide logger. Only the first install (or first use) wins.
///
/// # Errors
/// Hands `logger` back if a default is already in place.
pub fn set_default(logger: Logger) -> Result<(), Logger> {
    DEFAULT_LOGGER.set(logger)
}

/// The installed logger, or the stdout fallback on first use.
#[must_use]
pub fn default_logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(|| Logger::stdout(Level::Debug, Flags::STD))
}

#[track_caller]
pub fn log(level: Level, args: fmt::Arguments<'_>) {
    default_logger().log(level, args);
}

#[track_caller]
pub fn debug(args: fmt::Arguments<'_>) {
    default_logger().debug(args);
}

#[track_caller]
pub fn info(args: fmt::Arguments<'_>) {
    default_logger().info(args);
}

#[track_caller]
pub fn warn(args: fmt::Arguments<'_>) {
    default_logger().warn(args);
}

#[track_caller]
pub fn error(args: fmt::Arguments<'_>) {
    default_logger().error(args);
}
