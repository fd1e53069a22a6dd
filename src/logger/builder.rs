//! Stepwise construction for when the positional `Logger::new` is not enough
//! (a line prefix, or options coming from config one at a time).

use super::Logger;
use crate::error::Error;
use crate::fmt::{Flags, LineFormat};
use crate::level::Level;
use crate::output::{self, Sink};

#[derive(Debug, Clone, Default)]
pub struct LoggerBuilder {
    min_level: Level,
    destination: String,
    flags: Flags,
    prefix: String,
    expand_home: bool,
}

impl LoggerBuilder {
    /// Lowest threshold, stdout, date and time header.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// Directory for the dated log file. Empty (the default) means stdout.
    #[must_use]
    pub fn dir(mut self, destination: impl Into<String>) -> Self {
        self.destination = destination.into();
        self
    }

    #[must_use]
    pub const fn flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    /// Opt in to resolving a leading `~` in the destination to the home directory.
    /// Off by default: `"~"` otherwise names a directory called `~`.
    #[must_use]
    pub const fn expand_home(mut self, enabled: bool) -> Self {
        self.expand_home = enabled;
        self
    }

    /// Free text at the start of every line, or before the message with [`Flags::MSG_PREFIX`].
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Opens the sink. Nothing is returned on failure.
    ///
    /// # Errors
    /// Directory or file creation failures from [`Sink::open`], and
    /// [`Error::HomeDirNotFound`] when home expansion is on but unresolvable.
    pub fn build(self) -> Result<Logger, Error> {
        let sink = if self.expand_home {
            Sink::open(output::expand_home(&self.destination)?)?
        } else {
            Sink::open(&self.destination)?
        };
        Ok(Logger::from_parts(
            self.min_level,
            LineFormat::new(self.flags, self.prefix),
            sink,
        ))
    }
}
