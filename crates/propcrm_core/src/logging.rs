//! Process-wide logging bootstrap.
//!
//! # Responsibility
//! - Start one process logger: a rolling file, or stderr when no directory
//!   is configured.
//! - Mirror file-logged warnings and errors to stderr so vocabulary
//!   fallbacks stay visible on the console.
//! - Sanitize caller-provided text before it reaches a log line.
//!
//! # Invariants
//! - Initialization is idempotent for an identical level and sink.
//! - A second call with a different level or sink is rejected.
//! - Nothing in this module panics.

use flexi_logger::{
    Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming, WriteMode,
};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "propcrm";
const ROTATE_AT_BYTES: u64 = 10 * 1024 * 1024;
const KEEP_LOG_FILES: usize = 5;
const MAX_PANIC_PAYLOAD_CHARS: usize = 200;

static ACTIVE_LOGGER: OnceCell<ActiveLogger> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

struct ActiveLogger {
    level: &'static str,
    sink: LogSink,
    _handle: LoggerHandle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum LogSink {
    File(PathBuf),
    Stderr,
}

impl LogSink {
    fn describe(&self) -> String {
        match self {
            Self::File(dir) => dir.display().to_string(),
            Self::Stderr => "stderr".to_string(),
        }
    }
}

/// Starts file logging under `log_dir` at `level`.
///
/// Warnings and errors are duplicated to stderr.
///
/// # Errors
/// - Unsupported `level`.
/// - Blank or relative `log_dir`, or a directory that cannot be created.
/// - A conflicting earlier initialization, or a backend start failure.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let level = parse_level(level)?;
    let log_dir = parse_log_dir(log_dir)?;

    let sink = LogSink::File(log_dir);

    if let Some(active) = ACTIVE_LOGGER.get() {
        return ensure_same_config(active.level, &active.sink, level, &sink);
    }

    let active = ACTIVE_LOGGER.get_or_try_init(|| start_logger(level, &sink))?;
    ensure_same_config(active.level, &active.sink, level, &sink)
}

/// Starts logging to stderr at `level`, for processes without a log directory.
///
/// # Errors
/// - Unsupported `level`.
/// - A conflicting earlier initialization, or a backend start failure.
pub fn init_stderr_logging(level: &str) -> Result<(), String> {
    let level = parse_level(level)?;
    let sink = LogSink::Stderr;

    if let Some(active) = ACTIVE_LOGGER.get() {
        return ensure_same_config(active.level, &active.sink, level, &sink);
    }

    let active = ACTIVE_LOGGER.get_or_try_init(|| start_logger(level, &sink))?;
    ensure_same_config(active.level, &active.sink, level, &sink)
}

fn start_logger(level: &'static str, sink: &LogSink) -> Result<ActiveLogger, String> {
    let logger = Logger::try_with_str(level)
        .map_err(|err| format!("log level `{level}` rejected by backend: {err}"))?;

    let handle = match sink {
        LogSink::File(log_dir) => {
            std::fs::create_dir_all(log_dir).map_err(|err| {
                format!(
                    "could not create log directory `{}`: {err}",
                    log_dir.display()
                )
            })?;
            logger
                .log_to_file(
                    FileSpec::default()
                        .directory(log_dir)
                        .basename(LOG_FILE_BASENAME),
                )
                .duplicate_to_stderr(Duplicate::Warn)
                .rotate(
                    Criterion::Size(ROTATE_AT_BYTES),
                    Naming::Numbers,
                    Cleanup::KeepLogFiles(KEEP_LOG_FILES),
                )
                .write_mode(WriteMode::BufferAndFlush)
                .append()
                .format_for_files(flexi_logger::detailed_format)
                .start()
        }
        LogSink::Stderr => logger
            .log_to_stderr()
            .format(flexi_logger::detailed_format)
            .start(),
    }
    .map_err(|err| format!("logger backend failed to start: {err}"))?;

    install_panic_hook();

    info!(
        "event=logging_ready module=core status=ok version={} level={} sink={}",
        env!("CARGO_PKG_VERSION"),
        level,
        sink.describe()
    );

    Ok(ActiveLogger {
        level,
        sink: sink.clone(),
        _handle: handle,
    })
}

fn ensure_same_config(
    active_level: &str,
    active_sink: &LogSink,
    level: &str,
    sink: &LogSink,
) -> Result<(), String> {
    if active_sink != sink {
        return Err(format!(
            "logging already writes to `{}`; refusing to switch to `{}`",
            active_sink.describe(),
            sink.describe()
        ));
    }
    if active_level != level {
        return Err(format!(
            "logging already runs at `{active_level}`; refusing to switch to `{level}`"
        ));
    }
    Ok(())
}

/// `(level, log_dir)` of the active logger, if any.
///
/// The directory is `None` while logging goes to stderr only.
pub fn logging_status() -> Option<(&'static str, Option<PathBuf>)> {
    ACTIVE_LOGGER.get().map(|active| {
        let log_dir = match &active.sink {
            LogSink::File(dir) => Some(dir.clone()),
            LogSink::Stderr => None,
        };
        (active.level, log_dir)
    })
}

/// `debug` for debug builds, `info` otherwise.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn parse_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; use one of trace, debug, info, warn, error"
        )),
    }
}

fn parse_log_dir(log_dir: &str) -> Result<PathBuf, String> {
    let trimmed = log_dir.trim();
    if trimmed.is_empty() {
        return Err("log directory must not be blank".to_string());
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(format!("log directory must be absolute, got `{trimmed}`"));
    }
    Ok(path.to_path_buf())
}

fn install_panic_hook() {
    if PANIC_HOOK.get().is_some() {
        return;
    }

    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        error!(
            "event=panic module=core status=error location={} payload={}",
            location,
            panic_payload(panic_info)
        );
        previous(panic_info);
    }));

    let _ = PANIC_HOOK.set(());
}

fn panic_payload(info: &std::panic::PanicHookInfo<'_>) -> String {
    let payload = info
        .payload()
        .downcast_ref::<&str>()
        .map(|message| (*message).to_string())
        .or_else(|| info.payload().downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string());

    sanitize_message(&payload, MAX_PANIC_PAYLOAD_CHARS)
}

/// Flattens line breaks and caps `value` at `max_chars` characters.
///
/// Truncated values end with `...`.
pub(crate) fn sanitize_message(value: &str, max_chars: usize) -> String {
    let flattened = value.replace(['\n', '\r'], " ");
    if flattened.chars().count() <= max_chars {
        return flattened;
    }
    let mut truncated = flattened.chars().take(max_chars).collect::<String>();
    truncated.push_str("...");
    truncated
}
