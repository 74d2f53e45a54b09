//! Logging setup for Shout with file output and optional stdout.
//!
//! Embedders call [`init`] once when loading the extension; logs go to a
//! file at `warn` level, plus stdout when `SHOUT_LOG` or `RUST_LOG` is set
//! (or in debug builds). Test binaries call [`test`] instead, which is
//! stdout-only and safe to call from every test.
//!
//! ## Environment Variables
//!
//! 1. **`SHOUT_LOG`** (highest priority) - extension-specific control;
//!    a bare level like `debug` is expanded across the shout crates
//! 2. **`RUST_LOG`** - standard tracing filter, used as-is
//! 3. **Default** - `warn` globally, `info` for shout crates
//!
//! ## Log File Location
//!
//! Default: `<data_local_dir>/shout/logs/shout-<pid>.log`, overridable via
//! [`LogConfig::log_file_path`].

use std::{env, path::PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

const SHOUT_CRATES: &[&str] = &["shout", "shout_text", "shout_transform", "shout_log"];

/// Returned from [`init`]; must be held alive to ensure log file flushing.
pub struct LogGuard {
    _file_guard: WorkerGuard,
    pub log_file: PathBuf,
}

#[derive(Default)]
pub struct LogConfig {
    /// Log file or directory override. A path with an extension names the
    /// file itself; a bare directory gets the default `shout-<pid>.log`.
    pub log_file_path: Option<PathBuf>,
}

/// Initialize logging.
///
/// The returned [`LogGuard`] must be held for the lifetime of the program --
/// dropping it flushes and stops the background file writer.
///
/// Safe to call multiple times -- will not crash if logging is already
/// initialized.
pub fn init(config: LogConfig) -> Result<LogGuard, Box<dyn std::error::Error + Send + Sync>> {
    let (log_dir, filename) = resolve_log_path(config.log_file_path);

    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::never(&log_dir, &filename);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_filter(file_filter());

    let stdout_enabled =
        env::var("SHOUT_LOG").is_ok() || env::var("RUST_LOG").is_ok() || cfg!(debug_assertions);

    let stdout_layer = stdout_enabled.then(|| fmt::layer().with_filter(env_filter()));

    Registry::default()
        .with(file_layer)
        .with(stdout_layer)
        .try_init()?;

    Ok(LogGuard {
        log_file: log_dir.join(filename),
        _file_guard: file_guard,
    })
}

/// Initialize logging for tests.
///
/// Stdout-only, and will not crash if called multiple times or if logging
/// was already initialized by another test.
pub fn test() {
    let _ = fmt().with_env_filter(env_filter()).try_init();
}

fn resolve_log_path(override_path: Option<PathBuf>) -> (PathBuf, String) {
    let default_filename = format!("shout-{}.log", std::process::id());

    match override_path {
        Some(path) if path.extension().is_some() => {
            let dir = path
                .parent()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or(default_filename);
            (dir, name)
        },
        Some(dir) => (dir, default_filename),
        None => {
            let dir = dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("shout")
                .join("logs");
            (dir, default_filename)
        },
    }
}

/// File filter: the user's filter if one is set, otherwise `warn`.
fn file_filter() -> EnvFilter {
    if env::var("SHOUT_LOG").is_ok() || env::var("RUST_LOG").is_ok() {
        env_filter()
    } else {
        EnvFilter::new("warn")
    }
}

/// The active filter, honoring `SHOUT_LOG` > `RUST_LOG` > defaults.
fn env_filter() -> EnvFilter {
    if let Ok(shout_log) = env::var("SHOUT_LOG") {
        return expand_shout_log(&shout_log);
    }

    if let Ok(rust_log) = env::var("RUST_LOG") {
        return EnvFilter::new(rust_log);
    }

    expand_shout_log("info")
}

/// Expand `SHOUT_LOG` values into full tracing filter strings.
///
/// A bare level like `debug` becomes `warn` globally with `debug` for each
/// shout crate; anything containing directive syntax (`=`, `:` or `,`) is
/// used as-is.
fn expand_shout_log(shout_log: &str) -> EnvFilter {
    if shout_log.contains(['=', ':', ',']) {
        return EnvFilter::new(shout_log);
    }

    let mut directives = vec!["warn".to_string()];
    directives.extend(
        SHOUT_CRATES
            .iter()
            .map(|krate| format!("{krate}={shout_log}")),
    );
    EnvFilter::new(directives.join(","))
}
