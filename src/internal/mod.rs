//! lvlog's own diagnostic channel: directory creation, file opening, close failures.
//!
//! Silent until the host installs a logger with [`init`]. `OnceLock` means only
//! the first install takes effect.

use crate::level::Level;
use crate::logger::Logger;
use std::fmt;
use std::sync::OnceLock;

static INTERNAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Routes lvlog's own diagnostics to `logger`.
///
/// Returns `false` (and drops `logger`) if a diagnostic logger was already installed.
pub fn init(logger: Logger) -> bool {
    let installed = INTERNAL_LOGGER.set(logger).is_ok();
    if installed {
        debug("INTERNAL", format_args!("Internal logger ready"));
    }
    installed
}

/// `true` once [`init`] has installed a logger.
#[must_use]
pub fn is_initialized() -> bool {
    INTERNAL_LOGGER.get().is_some()
}

/// Pre-init calls silently vanish rather than crashing.
fn log(level: Level, scope: &str, args: fmt::Arguments<'_>) {
    if let Some(logger) = INTERNAL_LOGGER.get() {
        // Diagnostics never escalate into the closed-logger panic.
        let _ = logger.try_log(level, format_args!("{scope}  {args}"));
    }
}

pub(crate) fn debug(scope: &str, args: fmt::Arguments<'_>) {
    log(Level::Debug, scope, args);
}

pub(crate) fn warn(scope: &str, args: fmt::Arguments<'_>) {
    log(Level::Warn, scope, args);
}

pub(crate) fn error(scope: &str, args: fmt::Arguments<'_>) {
    log(Level::Error, scope, args);
}
