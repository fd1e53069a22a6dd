//! Construction parameters as a value: embeddable in a host application's own
//! config file via serde, and overridable from the environment.

use crate::error::Error;
use crate::fmt::Flags;
use crate::level::Level;
use crate::logger::Logger;
use serde::Deserialize;

/// Minimum level, e.g. `info`.
pub const ENV_LEVEL: &str = "LVLOG_LEVEL";
/// Destination directory; empty for stdout.
pub const ENV_DIR: &str = "LVLOG_DIR";
/// Header flags, e.g. `date|time|shortfile`.
pub const ENV_FLAGS: &str = "LVLOG_FLAGS";
/// Line prefix.
pub const ENV_PREFIX: &str = "LVLOG_PREFIX";

/// A missing section or field must still produce a working logger, hence `#[serde(default)]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Lowest level that reaches the sink.
    pub level: Level,
    /// Directory for the dated log file; empty writes to stdout.
    pub dir: String,
    /// Header flags, as a `|`-separated name list in config files.
    pub flags: Flags,
    /// Free text prepended to every line.
    pub prefix: String,
    /// Resolve a leading `~` in `dir` to the home directory; `dir` is literal otherwise.
    pub expand_home: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::Debug,
            dir: String::new(),
            flags: Flags::STD,
            prefix: String::new(),
            expand_home: false,
        }
    }
}

impl LogConfig {
    /// Defaults overridden by `LVLOG_*` environment variables.
    ///
    /// # Errors
    /// [`Error::InvalidLevel`] or [`Error::InvalidFlags`] for unparsable values.
    pub fn from_env() -> Result<Self, Error> {
        Self::default().with_env_overrides()
    }

    /// Applies `LVLOG_*` environment variables on top of `self`.
    ///
    /// # Errors
    /// [`Error::InvalidLevel`] or [`Error::InvalidFlags`] for unparsable values.
    pub fn with_env_overrides(self) -> Result<Self, Error> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from any key lookup; unset keys leave fields untouched.
    ///
    /// # Errors
    /// [`Error::InvalidLevel`] or [`Error::InvalidFlags`] for unparsable values.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LEVEL) {
            self.level = level.parse()?;
        }
        if let Some(dir) = lookup(ENV_DIR) {
            self.dir = dir;
        }
        if let Some(flags) = lookup(ENV_FLAGS) {
            self.flags = flags.parse()?;
        }
        if let Some(prefix) = lookup(ENV_PREFIX) {
            self.prefix = prefix;
        }
        Ok(self)
    }

    /// Opens the configured sink.
    ///
    /// # Errors
    /// Directory or file creation failures.
    pub fn build(&self) -> Result<Logger, Error> {
        Logger::builder()
            .level(self.level)
            .dir(&self.dir)
            .flags(self.flags)
            .prefix(&self.prefix)
            .expand_home(self.expand_home)
            .build()
    }
}
