//! Dated log file creation inside a destination directory.

use crate::error::Error;
use crate::internal;
use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

/// strftime pattern for log file names: `20090123_01_23_23.log`.
pub const FILE_NAME_FORMAT: &str = "%Y%m%d_%H_%M_%S.log";

/// File name for a logger created at `now`. Second resolution, so two loggers
/// created in the same second share a name.
#[must_use]
pub fn file_name_at<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    now.format(FILE_NAME_FORMAT).to_string()
}

/// File name for a logger created right now, in local time.
#[must_use]
pub fn file_name() -> String {
    file_name_at(&Local::now())
}

/// Expands a leading `~` to the user's home directory.
///
/// Destinations are otherwise taken literally; only
/// [`LoggerBuilder::expand_home`](crate::LoggerBuilder::expand_home) calls this.
///
/// # Errors
/// [`Error::HomeDirNotFound`] when the destination starts with `~` and no home
/// directory is known.
pub fn expand_home(destination: &str) -> Result<PathBuf, Error> {
    let Some(rest) = destination.strip_prefix('~') else {
        return Ok(PathBuf::from(destination));
    };
    if !(rest.is_empty() || rest.starts_with('/') || rest.starts_with('\\')) {
        // `~user` forms are left untouched.
        return Ok(PathBuf::from(destination));
    }
    let user_dirs = directories::UserDirs::new().ok_or(Error::HomeDirNotFound)?;
    let home = user_dirs.home_dir();
    let rest = rest.trim_start_matches(['/', '\\']);
    let path = if rest.is_empty() {
        home.to_path_buf()
    } else {
        home.join(rest)
    };
    internal::debug("FILE", format_args!("Resolved destination: {}", path.display()));
    Ok(path)
}

/// Creates `dir` (one level, not its parents) when it is missing.
///
/// Any existence-check failure other than "not found" is treated as "exists";
/// the real problem, if any, surfaces when the file is created.
pub(crate) fn ensure_dir(dir: &Path) -> Result<(), Error> {
    match fs::metadata(dir) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => match fs::create_dir(dir) {
            Ok(()) => {
                internal::debug("FILE", format_args!("Created directory: {}", dir.display()));
                Ok(())
            }
            Err(source) => {
                internal::error(
                    "FILE",
                    format_args!("Failed to create directory {}: {source}", dir.display()),
                );
                Err(Error::CreateDir {
                    path: dir.to_path_buf(),
                    source,
                })
            }
        },
        Err(e) => {
            internal::debug(
                "FILE",
                format_args!("Cannot stat {} ({e}), assuming it exists", dir.display()),
            );
            Ok(())
        }
    }
}

/// Creates (or truncates) the dated file inside `dir`.
pub(crate) fn create_log_file(dir: &Path) -> Result<(File, PathBuf), Error> {
    let path = dir.join(file_name());
    match File::create(&path) {
        Ok(file) => {
            internal::debug("FILE", format_args!("Writing to: {}", path.display()));
            Ok((file, path))
        }
        Err(source) => {
            internal::error(
                "FILE",
                format_args!("Failed to create {}: {source}", path.display()),
            );
            Err(Error::CreateFile { path, source })
        }
    }
}
