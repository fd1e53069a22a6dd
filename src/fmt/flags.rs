//! Header options, the same toggles a classic line logger exposes.

use serde::Deserialize;
use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

/// Bitset of header options, passed through to [`LineFormat`](super::LineFormat) unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Flags(u8);

const NAMES: [(&str, Flags); 7] = [
    ("date", Flags::DATE),
    ("time", Flags::TIME),
    ("microseconds", Flags::MICROSECONDS),
    ("longfile", Flags::LONG_FILE),
    ("shortfile", Flags::SHORT_FILE),
    ("utc", Flags::UTC),
    ("msgprefix", Flags::MSG_PREFIX),
];

impl Flags {
    /// Local date: `2009/01/23 `.
    pub const DATE: Self = Self(1);
    /// Local time: `01:23:23 `.
    pub const TIME: Self = Self(1 << 1);
    /// Microsecond resolution: `01:23:23.123123 `. Implies `TIME`.
    pub const MICROSECONDS: Self = Self(1 << 2);
    /// Full call-site path and line: `/a/b/c.rs:23: `.
    pub const LONG_FILE: Self = Self(1 << 3);
    /// Final path component and line: `c.rs:23: `. Overrides `LONG_FILE`.
    pub const SHORT_FILE: Self = Self(1 << 4);
    /// Render date and time in UTC rather than the local time zone.
    pub const UTC: Self = Self(1 << 5);
    /// Move the logger prefix from the start of the line to just before the message.
    pub const MSG_PREFIX: Self = Self(1 << 6);
    /// `DATE | TIME`.
    pub const STD: Self = Self(Self::DATE.0 | Self::TIME.0);

    /// No header at all.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Unknown bits are dropped.
    #[must_use]
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & 0x7f)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// `true` when every bit of `other` is set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// `true` when any bit of `other` is set.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Reading the clock is skipped entirely when no date or time is rendered.
    #[must_use]
    pub const fn needs_clock(self) -> bool {
        self.intersects(Self(Self::DATE.0 | Self::TIME.0 | Self::MICROSECONDS.0))
    }

    /// Call-site capture only matters when a file flag is set.
    #[must_use]
    pub const fn needs_caller(self) -> bool {
        self.intersects(Self(Self::LONG_FILE.0 | Self::SHORT_FILE.0))
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::STD
    }
}

impl BitOr for Flags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let mut first = true;
        for (name, flag) in NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Returned by `FromStr` when a flag name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFlagsError(String);

impl ParseFlagsError {
    /// The rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParseFlagsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log flag: '{}'", self.0)
    }
}

impl std::error::Error for ParseFlagsError {}

/// Accepts names separated by `|` or `,`, e.g. `"date|time|shortfile"`, `"std"`, or `"none"`.
impl FromStr for Flags {
    type Err = ParseFlagsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut flags = Self::empty();
        for token in s.split(['|', ',']).map(str::trim).filter(|t| !t.is_empty()) {
            let token = token.to_lowercase();
            match token.as_str() {
                "std" => flags |= Self::STD,
                "none" => {}
                "micro" => flags |= Self::MICROSECONDS,
                name => {
                    let flag = NAMES
                        .iter()
                        .find(|(n, _)| *n == name)
                        .map(|(_, f)| *f)
                        .ok_or_else(|| ParseFlagsError(token.clone()))?;
                    flags |= flag;
                }
            }
        }
        Ok(flags)
    }
}

impl TryFrom<String> for Flags {
    type Error = ParseFlagsError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
