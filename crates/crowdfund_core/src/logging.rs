//! Logging bootstrap for catalog sessions.
//!
//! # Responsibility
//! - Start the rolling file logger at most once per process.
//! - Record panics as one-line `session_panic` events.
//!
//! # Invariants
//! - Repeating init with the same level and directory is a no-op.
//! - Switching level or directory after init is rejected.
//! - Event lines carry metadata only; search text is never logged verbatim.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::panic::PanicHookInfo;
use std::path::{Path, PathBuf};

const LOG_BASENAME: &str = "crowdfund";
const ROTATE_AT_BYTES: u64 = 4 * 1024 * 1024;
const KEEP_ROTATED_FILES: usize = 3;
const PANIC_MESSAGE_LIMIT: usize = 120;

/// Accepted spellings, matched after trimming and ASCII lowercasing.
const LEVEL_ALIASES: &[(&str, &str)] = &[
    ("trace", "trace"),
    ("debug", "debug"),
    ("info", "info"),
    ("warn", "warn"),
    ("warning", "warn"),
    ("error", "error"),
];

static SESSION_LOGGER: OnceCell<SessionLogger> = OnceCell::new();

/// Where and how verbosely the session logs.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LogTarget {
    level: &'static str,
    dir: PathBuf,
}

struct SessionLogger {
    target: LogTarget,
    _handle: LoggerHandle,
}

/// Logging setup failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggingError {
    /// Level or directory argument is unusable.
    InvalidConfig(String),
    CreateDir { path: PathBuf, message: String },
    Backend(String),
    /// Logger already runs with a different level or directory.
    AlreadyInitialized { active: String, requested: String },
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(message) => write!(f, "invalid logging config: {message}"),
            Self::CreateDir { path, message } => {
                write!(f, "failed to create log directory `{}`: {message}", path.display())
            }
            Self::Backend(message) => write!(f, "failed to start logger: {message}"),
            Self::AlreadyInitialized { active, requested } => write!(
                f,
                "logging already initialized with `{active}`; refusing to switch to `{requested}`"
            ),
        }
    }
}

impl Error for LoggingError {}

/// Starts file logging under `log_dir` at `level`.
///
/// # Errors
/// - [`LoggingError::InvalidConfig`] for unknown levels or relative/empty dirs.
/// - [`LoggingError::AlreadyInitialized`] when a different config is active.
/// - Directory or backend failures.
pub fn init_logging(level: &str, log_dir: &Path) -> Result<(), LoggingError> {
    let requested = LogTarget {
        level: parse_level(level)?,
        dir: checked_log_dir(log_dir)?,
    };

    let running = SESSION_LOGGER.get_or_try_init(|| open_session_logger(&requested))?;
    reject_switch(&running.target, &requested)
}

/// Returns `(level, log_dir)` of the active logger, if any.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    SESSION_LOGGER
        .get()
        .map(|running| (running.target.level, running.target.dir.clone()))
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

/// Resolves a user-supplied level, accepting `warning` for `warn`.
pub fn parse_level(level: &str) -> Result<&'static str, LoggingError> {
    let wanted = level.trim().to_ascii_lowercase();
    LEVEL_ALIASES
        .iter()
        .find(|(alias, _)| *alias == wanted)
        .map(|(_, canonical)| *canonical)
        .ok_or_else(|| {
            LoggingError::InvalidConfig(format!(
                "unsupported log level `{wanted}`; expected trace|debug|info|warn|error"
            ))
        })
}

fn checked_log_dir(log_dir: &Path) -> Result<PathBuf, LoggingError> {
    if log_dir.as_os_str().is_empty() {
        Err(LoggingError::InvalidConfig("log_dir cannot be empty".to_string()))
    } else if log_dir.is_relative() {
        Err(LoggingError::InvalidConfig(format!(
            "log_dir must be an absolute path, got `{}`",
            log_dir.display()
        )))
    } else {
        Ok(log_dir.to_path_buf())
    }
}

fn open_session_logger(target: &LogTarget) -> Result<SessionLogger, LoggingError> {
    std::fs::create_dir_all(&target.dir).map_err(|err| LoggingError::CreateDir {
        path: target.dir.clone(),
        message: err.to_string(),
    })?;

    let handle = rolling_logger(target)?
        .start()
        .map_err(|err| LoggingError::Backend(err.to_string()))?;
    register_panic_logger();

    info!(
        "event=session_logging module=crowdfund status=ok level={} dir={} version={}",
        target.level,
        target.dir.display(),
        env!("CARGO_PKG_VERSION")
    );

    Ok(SessionLogger {
        target: target.clone(),
        _handle: handle,
    })
}

fn rolling_logger(target: &LogTarget) -> Result<Logger, LoggingError> {
    let logger = Logger::try_with_str(target.level).map_err(|err| {
        LoggingError::InvalidConfig(format!("log level `{}`: {err}", target.level))
    })?;
    Ok(logger
        .log_to_file(log_file_spec(&target.dir))
        .rotate(
            Criterion::Size(ROTATE_AT_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEEP_ROTATED_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format))
}

fn log_file_spec(dir: &Path) -> FileSpec {
    FileSpec::default().directory(dir).basename(LOG_BASENAME)
}

fn reject_switch(running: &LogTarget, requested: &LogTarget) -> Result<(), LoggingError> {
    let (active, wanted) = if running.dir != requested.dir {
        (
            running.dir.display().to_string(),
            requested.dir.display().to_string(),
        )
    } else if running.level != requested.level {
        (running.level.to_string(), requested.level.to_string())
    } else {
        return Ok(());
    };
    Err(LoggingError::AlreadyInitialized {
        active,
        requested: wanted,
    })
}

/// Chains a hook that logs the panic before the default report runs.
///
/// Only called from [`open_session_logger`], which the logger cell runs once.
fn register_panic_logger() {
    let default_report = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let at = panic
            .location()
            .map_or_else(|| "?".to_string(), |loc| format!("{}:{}", loc.file(), loc.line()));
        error!(
            "event=session_panic module=crowdfund status=error at={} message={}",
            at,
            describe_panic(panic)
        );
        default_report(panic);
    }));
}

fn describe_panic(panic: &PanicHookInfo<'_>) -> String {
    let payload = panic.payload();
    let text = payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("<opaque payload>");
    single_line_capped(text, PANIC_MESSAGE_LIMIT)
}

/// Joins lines with spaces and keeps at most `limit` chars, marking cuts with `…`.
fn single_line_capped(text: &str, limit: usize) -> String {
    let mut chars = text
        .chars()
        .map(|ch| if matches!(ch, '\n' | '\r') { ' ' } else { ch });
    let mut capped: String = chars.by_ref().take(limit).collect();
    if chars.next().is_some() {
        capped.push('…');
    }
    capped
}
