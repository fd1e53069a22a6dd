//! `lvlog` - minimal leveled logging.
//!
//! Each [`Logger`] writes timestamped, level-prefixed lines to either standard
//! output or a `YYYYMMDD_HH_MM_SS.log` file inside a directory, dropping
//! anything below its minimum [`Level`].
//!
//! # Example
//!
//! ```
//! use lvlog::{Flags, Level, Logger};
//!
//! let dir = std::env::temp_dir().join("lvlog-doc");
//! let mut logger = Logger::new(Level::Info, dir.to_str().unwrap(), Flags::STD).unwrap();
//!
//! lvlog::debug!(logger: logger, "skipped");
//! lvlog::info!(logger: logger, "today is {}", 6);
//! logger.warn(format_args!("keep it moving"));
//! logger.close();
//!
//! // Process-wide default: stdout at the lowest threshold unless installed otherwise.
//! lvlog::error!("error msg");
//! ```

pub mod config;
pub mod error;
pub mod fmt;
pub mod global;
pub mod internal;
pub mod level;
pub mod logger;
mod macros;
pub mod output;

pub use config::LogConfig;
pub use error::Error;
pub use fmt::{Flags, LineFormat};
pub use global::{debug, default_logger, error, info, set_default, warn};
pub use level::Level;
pub use logger::{Logger, LoggerBuilder};
pub use output::Sink;
