//! Renders one complete log line: header, level prefix, message, newline.

use super::Flags;
use crate::level::Level;
use chrono::{Local, NaiveDateTime, Utc};
use std::fmt::{self, Write};
use std::panic::Location;

/// The per-logger formatting delegate. Fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineFormat {
    flags: Flags,
    prefix: String,
}

impl LineFormat {
    #[must_use]
    pub fn new(flags: Flags, prefix: impl Into<String>) -> Self {
        Self {
            flags,
            prefix: prefix.into(),
        }
    }

    #[must_use]
    pub const fn flags(&self) -> Flags {
        self.flags
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Reads the clock only when a date or time flag asks for it.
    #[must_use]
    pub fn render(&self, level: Level, args: fmt::Arguments<'_>, caller: &Location<'_>) -> String {
        let now = self.flags.needs_clock().then(|| self.now());
        self.render_at(now, level, args, caller)
    }

    /// Same as [`render`](Self::render) with an explicit timestamp.
    #[must_use]
    pub fn render_at(
        &self,
        now: Option<NaiveDateTime>,
        level: Level,
        args: fmt::Arguments<'_>,
        caller: &Location<'_>,
    ) -> String {
        let mut line = String::with_capacity(64 + self.prefix.len());
        self.write_header(&mut line, now, caller);
        line.push_str(level.prefix());
        let _ = line.write_fmt(args);
        if !line.ends_with('\n') {
            line.push('\n');
        }
        line
    }

    fn now(&self) -> NaiveDateTime {
        if self.flags.contains(Flags::UTC) {
            Utc::now().naive_utc()
        } else {
            Local::now().naive_local()
        }
    }

    fn write_header(&self, buf: &mut String, now: Option<NaiveDateTime>, caller: &Location<'_>) {
        let flags = self.flags;
        if !flags.contains(Flags::MSG_PREFIX) {
            buf.push_str(&self.prefix);
        }

        if let Some(now) = now {
            if flags.contains(Flags::DATE) {
                let _ = write!(buf, "{} ", now.format("%Y/%m/%d"));
            }
            if flags.contains(Flags::MICROSECONDS) {
                let _ = write!(buf, "{} ", now.format("%H:%M:%S%.6f"));
            } else if flags.contains(Flags::TIME) {
                let _ = write!(buf, "{} ", now.format("%H:%M:%S"));
            }
        }

        if flags.needs_caller() {
            let file = if flags.contains(Flags::SHORT_FILE) {
                short_file(caller.file())
            } else {
                caller.file()
            };
            let _ = write!(buf, "{file}:{}: ", caller.line());
        }

        if flags.contains(Flags::MSG_PREFIX) {
            buf.push_str(&self.prefix);
        }
    }
}

fn short_file(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
