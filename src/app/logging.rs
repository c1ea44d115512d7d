//! Logging setup with file output and optional stdout.
//!
//! Logs always go to a file; stdout logging is enabled in debug builds or
//! when `CODEPAD_LOG` / `RUST_LOG` is set.
//!
//! Filter priority: `CODEPAD_LOG` > `RUST_LOG` > default (`warn` globally,
//! `info` for this crate).
//!
//! Log file: `<data_local_dir>/codepad/logs/codepad.log`

use std::env;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

use super::error::{AppError, Result};

/// Returned from [`init`]; must be held alive so the background file
/// writer keeps flushing.
pub struct LogGuard {
    _file_guard: WorkerGuard,
    pub log_file: PathBuf,
}

/// Initialize logging for the process.
pub fn init() -> Result<LogGuard> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("codepad")
        .join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "codepad.log");
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_filter(file_filter());

    let stdout_enabled =
        env::var("CODEPAD_LOG").is_ok() || env::var("RUST_LOG").is_ok() || cfg!(debug_assertions);
    let stdout_layer = if stdout_enabled {
        Some(fmt::layer().with_filter(env_filter()))
    } else {
        None
    };

    Registry::default()
        .with(file_layer)
        .with(stdout_layer)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;

    Ok(LogGuard {
        _file_guard: file_guard,
        log_file: log_dir.join("codepad.log"),
    })
}

/// File filter: the user-specified level when one of the env vars is set,
/// otherwise `warn`.
fn file_filter() -> EnvFilter {
    if env::var("CODEPAD_LOG").is_ok() || env::var("RUST_LOG").is_ok() {
        return env_filter();
    }
    EnvFilter::new("warn")
}

fn env_filter() -> EnvFilter {
    if let Ok(codepad_log) = env::var("CODEPAD_LOG") {
        return expand_codepad_log(&codepad_log);
    }
    if let Ok(rust_log) = env::var("RUST_LOG") {
        return EnvFilter::new(rust_log);
    }
    EnvFilter::new("warn,code_pad=info")
}

/// Expand a bare `CODEPAD_LOG` level into a full filter string:
/// `CODEPAD_LOG=debug` becomes `warn,code_pad=debug`. Values with
/// module-specific syntax are used as-is.
fn expand_codepad_log(codepad_log: &str) -> EnvFilter {
    if codepad_log.contains('=') || codepad_log.contains(':') || codepad_log.contains(',') {
        return EnvFilter::new(codepad_log);
    }
    EnvFilter::new(format!("warn,code_pad={codepad_log}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_level_is_expanded() {
        let filter = expand_codepad_log("debug").to_string();
        assert!(filter.contains("code_pad=debug"));
        assert!(filter.contains("warn"));
    }

    #[test]
    fn test_module_syntax_passes_through() {
        let filter = expand_codepad_log("code_pad=trace").to_string();
        assert!(filter.contains("code_pad=trace"));
    }
}
