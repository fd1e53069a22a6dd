//! The logger core: threshold filtering, line rendering, and the sink lifecycle.
//!
//! A logger is built once, used for any number of emits through `&self`, and
//! closed at most once. Emitting through a closed logger is a caller bug:
//! [`Logger::log`] panics, [`Logger::try_log`] returns [`Error::Closed`].

mod builder;

pub use builder::LoggerBuilder;

use crate::error::Error;
use crate::fmt::{Flags, LineFormat};
use crate::level::Level;
use crate::output::Sink;
use std::fmt;
use std::panic::Location;
use std::path::Path;

const CLOSED_MSG: &str = "log output err, logger is closed";

/// No internal locking: each emitted line is a single write on the sink.
#[derive(Debug)]
pub struct Logger {
    min_level: Level,
    format: LineFormat,
    sink: Option<Sink>,
}

impl Logger {
    /// Builds a logger writing to stdout (`destination == ""`) or to a new
    /// dated file inside the `destination` directory.
    ///
    /// # Errors
    /// Directory or file creation failures. No logger is returned on error.
    ///
    /// # Example
    ///
    /// ```
    /// use lvlog::{Flags, Level, Logger};
    ///
    /// let logger = Logger::new(Level::Info, "", Flags::STD).unwrap();
    /// logger.debug(format_args!("filtered"));
    /// logger.info(format_args!("today is {}", 6));
    /// ```
    pub fn new(level: Level, destination: &str, flags: Flags) -> Result<Self, Error> {
        Self::builder()
            .level(level)
            .dir(destination)
            .flags(flags)
            .build()
    }

    /// Stdout needs no filesystem work, so this form cannot fail.
    #[must_use]
    pub fn stdout(level: Level, flags: Flags) -> Self {
        Self::from_parts(level, LineFormat::new(flags, ""), Sink::Stdout)
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub(crate) fn from_parts(min_level: Level, format: LineFormat, sink: Sink) -> Self {
        Self {
            min_level,
            format,
            sink: Some(sink),
        }
    }

    /// Core dispatch: filter by severity, render, write once.
    ///
    /// Write errors are dropped; use [`try_log`](Self::try_log) to observe them.
    ///
    /// # Panics
    /// If the logger has been closed and `level` passes the threshold.
    #[track_caller]
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        if level < self.min_level {
            return;
        }
        let Some(sink) = &self.sink else {
            panic!("{CLOSED_MSG}");
        };
        let line = self.format.render(level, args, Location::caller());
        let _ = sink.write_line(&line);
    }

    /// Non-panicking form of [`log`](Self::log).
    ///
    /// # Errors
    /// [`Error::Closed`] after [`close`](Self::close); [`Error::Io`] if the write fails.
    #[track_caller]
    pub fn try_log(&self, level: Level, args: fmt::Arguments<'_>) -> Result<(), Error> {
        if level < self.min_level {
            return Ok(());
        }
        let sink = self.sink.as_ref().ok_or(Error::Closed)?;
        let line = self.format.render(level, args, Location::caller());
        sink.write_line(&line)?;
        Ok(())
    }

    #[track_caller]
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, args);
    }

    #[track_caller]
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, args);
    }

    #[track_caller]
    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Warn, args);
    }

    #[track_caller]
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Error, args);
    }

    /// Releases the owned file exactly once. Later calls are no-ops.
    pub fn close(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.close();
        }
    }

    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.sink.is_none()
    }

    /// Tests and diagnostics need to verify which severity threshold is active.
    #[must_use]
    pub const fn min_level(&self) -> Level {
        self.min_level
    }

    #[must_use]
    pub const fn flags(&self) -> Flags {
        self.format.flags()
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        self.format.prefix()
    }

    /// The dated file this logger writes to; `None` for stdout or once closed.
    #[must_use]
    pub fn file_path(&self) -> Option<&Path> {
        self.sink.as_ref().and_then(Sink::path)
    }

    #[must_use]
    pub const fn writes_to_stdout(&self) -> bool {
        matches!(self.sink, Some(Sink::Stdout))
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.close();
    }
}
