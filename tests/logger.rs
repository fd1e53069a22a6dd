//! Tests for logger construction, filtering, and close.

use lvlog::{Error, Flags, Level, Logger};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn dest(dir: &Path) -> String {
    dir.to_string_lossy().into_owned()
}

fn log_files(dir: &Path) -> Vec<PathBuf> {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect()
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn threshold_filters_lower_levels() {
    for threshold in Level::all() {
        let tmp = TempDir::new().unwrap();
        let mut logger = Logger::new(threshold, &dest(tmp.path()), Flags::empty()).unwrap();
        let path = logger.file_path().unwrap().to_path_buf();

        for level in Level::all() {
            logger.log(level, format_args!("{level}"));
        }
        logger.close();

        let expected: Vec<String> = Level::all()
            .into_iter()
            .filter(|level| *level >= threshold)
            .map(|level| format!("{}{level}", level.prefix()))
            .collect();
        assert_eq!(read_lines(&path), expected, "threshold {threshold}");
    }
}

#[test]
fn info_threshold_scenario() {
    let tmp = TempDir::new().unwrap();
    let mut logger = Logger::new(Level::Info, &dest(tmp.path()), Flags::STD).unwrap();

    logger.debug(format_args!("x"));
    logger.info(format_args!("y"));
    logger.warn(format_args!("z"));
    logger.error(format_args!("w"));
    logger.close();

    let files = log_files(tmp.path());
    assert_eq!(files.len(), 1);

    let line = Regex::new(r"^\d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2} (\[[A-Z ]{5}\] )(.*)$").unwrap();
    let lines = read_lines(&files[0]);
    assert_eq!(lines.len(), 3);

    let parsed: Vec<(String, String)> = lines
        .iter()
        .map(|l| {
            let caps = line.captures(l).unwrap();
            (caps[1].to_string(), caps[2].to_string())
        })
        .collect();
    assert_eq!(
        parsed,
        vec![
            ("[INFO ] ".to_string(), "y".to_string()),
            ("[WARN ] ".to_string(), "z".to_string()),
            ("[ERROR] ".to_string(), "w".to_string()),
        ]
    );
}

#[test]
fn file_destination_creates_one_dated_file() {
    let tmp = TempDir::new().unwrap();
    let logger = Logger::new(Level::Debug, &dest(tmp.path()), Flags::STD).unwrap();

    let files = log_files(tmp.path());
    assert_eq!(files.len(), 1);

    let name = files[0].file_name().unwrap().to_string_lossy().into_owned();
    let pattern = Regex::new(r"^\d{8}_\d{2}_\d{2}_\d{2}\.log$").unwrap();
    assert!(pattern.is_match(&name), "unexpected file name {name}");
    assert_eq!(logger.file_path(), Some(files[0].as_path()));
    assert!(!logger.writes_to_stdout());
}

#[test]
fn missing_directory_is_created() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("logs");
    assert!(!dir.exists());

    let logger = Logger::new(Level::Info, &dest(&dir), Flags::STD).unwrap();

    assert!(dir.is_dir());
    assert_eq!(log_files(&dir).len(), 1);
    drop(logger);
}

#[test]
fn trailing_separator_destination() {
    let tmp = TempDir::new().unwrap();
    let dir = format!("{}/logs/", dest(tmp.path()));

    let logger = Logger::new(Level::Info, &dir, Flags::STD).unwrap();

    assert_eq!(log_files(&tmp.path().join("logs")).len(), 1);
    drop(logger);
}

#[test]
fn missing_parent_directory_fails() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("a").join("b");

    let err = Logger::new(Level::Info, &dest(&dir), Flags::STD).unwrap_err();

    assert!(matches!(err, Error::CreateDir { ref path, .. } if *path == dir));
    assert!(!dir.exists());
}

#[test]
fn destination_that_is_a_file_fails_on_file_creation() {
    let tmp = TempDir::new().unwrap();
    let blocker = tmp.path().join("not-a-dir");
    fs::write(&blocker, "x").unwrap();

    let err = Logger::new(Level::Info, &dest(&blocker), Flags::STD).unwrap_err();

    assert!(matches!(err, Error::CreateFile { .. }), "got {err:?}");
}

#[test]
fn stat_failure_defers_error_to_file_creation() {
    let tmp = TempDir::new().unwrap();
    let blocker = tmp.path().join("f");
    fs::write(&blocker, "x").unwrap();
    let dir = blocker.join("sub");

    // Stat fails with "not a directory", which is not "not found".
    let err = Logger::new(Level::Info, &dest(&dir), Flags::STD).unwrap_err();

    assert!(matches!(err, Error::CreateFile { .. }), "got {err:?}");
    assert!(!matches!(err, Error::CreateDir { .. }));
}

#[test]
fn expand_home_leaves_plain_paths_alone() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("logs");

    let logger = Logger::builder()
        .dir(dest(&dir))
        .expand_home(true)
        .build()
        .unwrap();

    assert_eq!(logger.file_path().unwrap().parent(), Some(dir.as_path()));
    assert_eq!(log_files(&dir).len(), 1);
}

#[test]
fn empty_destination_writes_to_stdout() {
    let logger = Logger::new(Level::Warn, "", Flags::STD).unwrap();

    assert!(logger.writes_to_stdout());
    assert_eq!(logger.file_path(), None);
    assert_eq!(logger.min_level(), Level::Warn);
    assert_eq!(logger.flags(), Flags::STD);

    logger.info(format_args!("filtered"));
    logger.warn(format_args!("to stdout"));
}

#[test]
fn positional_arguments_are_substituted() {
    let tmp = TempDir::new().unwrap();
    let mut logger = Logger::new(Level::Debug, &dest(tmp.path()), Flags::empty()).unwrap();
    let path = logger.file_path().unwrap().to_path_buf();

    logger.info(format_args!("today is {}", 6));
    logger.debug(format_args!("{} + {} = {:>3}", 1, 2, 3));
    logger.close();

    assert_eq!(
        read_lines(&path),
        vec!["[INFO ] today is 6", "[DEBUG] 1 + 2 =   3"]
    );
}

#[test]
fn short_file_flag_reports_call_site() {
    let tmp = TempDir::new().unwrap();
    let mut logger = Logger::new(Level::Debug, &dest(tmp.path()), Flags::SHORT_FILE).unwrap();
    let path = logger.file_path().unwrap().to_path_buf();

    let line = line!() + 1;
    logger.warn(format_args!("here"));
    logger.close();

    assert_eq!(read_lines(&path), vec![format!("logger.rs:{line}: [WARN ] here")]);
}

#[test]
fn builder_prefix_and_flags() {
    let tmp = TempDir::new().unwrap();
    let mut logger = Logger::builder()
        .level(Level::Info)
        .dir(dest(tmp.path()))
        .flags(Flags::DATE | Flags::MSG_PREFIX)
        .prefix("svc: ")
        .build()
        .unwrap();
    let path = logger.file_path().unwrap().to_path_buf();
    assert_eq!(logger.prefix(), "svc: ");

    logger.error(format_args!("boom"));
    logger.close();

    let pattern = Regex::new(r"^\d{4}/\d{2}/\d{2} svc: \[ERROR\] boom$").unwrap();
    let lines = read_lines(&path);
    assert_eq!(lines.len(), 1);
    assert!(pattern.is_match(&lines[0]), "unexpected line {}", lines[0]);
}

#[test]
fn close_twice_is_a_no_op() {
    let tmp = TempDir::new().unwrap();
    let mut logger = Logger::new(Level::Info, &dest(tmp.path()), Flags::STD).unwrap();

    logger.close();
    assert!(logger.is_closed());
    assert_eq!(logger.file_path(), None);

    logger.close();
    assert!(logger.is_closed());
}

#[test]
fn close_on_stdout_logger() {
    let mut logger = Logger::stdout(Level::Info, Flags::STD);
    logger.close();
    assert!(logger.is_closed());
    assert!(!logger.writes_to_stdout());
}

#[test]
#[should_panic(expected = "logger is closed")]
fn emit_after_close_panics() {
    let mut logger = Logger::stdout(Level::Debug, Flags::STD);
    logger.close();
    logger.info(format_args!("too late"));
}

#[test]
fn try_log_after_close_reports_closed() {
    let tmp = TempDir::new().unwrap();
    let mut logger = Logger::new(Level::Debug, &dest(tmp.path()), Flags::STD).unwrap();
    let path = logger.file_path().unwrap().to_path_buf();

    logger.try_log(Level::Info, format_args!("before")).unwrap();
    logger.close();

    let err = logger
        .try_log(Level::Info, format_args!("after"))
        .unwrap_err();
    assert!(err.is_closed());
    assert_eq!(read_lines(&path).len(), 1);
}

#[test]
fn filtered_emit_after_close_stays_silent() {
    let mut logger = Logger::stdout(Level::Error, Flags::STD);
    logger.close();

    logger.info(format_args!("below threshold"));
    assert!(logger.try_log(Level::Debug, format_args!("x")).is_ok());
}

#[test]
fn logger_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Logger>();
}
