//! The single destination a logger writes to: standard output or a file it owns.

mod file;

pub use file::{FILE_NAME_FORMAT, expand_home, file_name, file_name_at};

use crate::error::Error;
use crate::internal;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Where rendered lines go. Unbuffered: each line is one `write_all`.
#[derive(Debug)]
pub enum Sink {
    /// Process standard output.
    Stdout,
    /// A dated file exclusively owned by one logger.
    File { file: File, path: PathBuf },
}

impl Sink {
    /// Empty destination means standard output; anything else is a directory,
    /// taken literally, that receives a new `YYYYMMDD_HH_MM_SS.log` file.
    ///
    /// # Errors
    /// [`Error::CreateDir`] or [`Error::CreateFile`] when the directory or file
    /// cannot be created.
    pub fn open(destination: impl AsRef<Path>) -> Result<Self, Error> {
        let dir = destination.as_ref();
        if dir.as_os_str().is_empty() {
            return Ok(Self::Stdout);
        }
        file::ensure_dir(dir)?;
        let (file, path) = file::create_log_file(dir)?;
        Ok(Self::File { file, path })
    }

    /// Path of the owned file, `None` for stdout.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Stdout => None,
            Self::File { path, .. } => Some(path),
        }
    }

    /// Writes one already-rendered line in a single call.
    ///
    /// # Errors
    /// I/O errors from the underlying stream.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        match self {
            Self::Stdout => io::stdout().lock().write_all(line.as_bytes()),
            Self::File { file, .. } => {
                let mut file: &File = file;
                file.write_all(line.as_bytes())
            }
        }
    }

    /// Releases the file descriptor. Sync failures are reported internally, never returned.
    pub(crate) fn close(self) {
        if let Self::File { file, path } = self {
            if let Err(e) = file.sync_all() {
                internal::warn(
                    "FILE",
                    format_args!("Failed to sync {} on close: {e}", path.display()),
                );
            }
            drop(file);
            internal::debug("FILE", format_args!("Closed {}", path.display()));
        }
    }
}
