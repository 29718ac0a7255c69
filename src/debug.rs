//! Logging backend for the `log` facade.
//!
//! All `log::info!()` etc. output goes to /tmp/camelsnake_debug.log on
//! Unix/macOS, or %TEMP%\camelsnake_debug.log on Windows, so converted text
//! written to stdout is never interleaved with diagnostics. When `RUST_LOG` is
//! set, lines are mirrored to stderr as well.
//!
//! Level precedence: `--log-level` flag, then `RUST_LOG`, then the config's
//! `log_level` (applied after the config is loaded).

use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

struct LogBridge {
    /// Opened on the first record that passes the level filter
    file: Mutex<Option<File>>,
    mirror_to_stderr: bool,
    /// Level came from the CLI or `RUST_LOG`; config must not override it
    level_overridden: bool,
}

static LOGGER: OnceLock<LogBridge> = OnceLock::new();

/// Path of the debug log file.
pub fn log_file_path() -> PathBuf {
    #[cfg(unix)]
    {
        PathBuf::from("/tmp/camelsnake_debug.log")
    }
    #[cfg(not(unix))]
    {
        std::env::temp_dir().join("camelsnake_debug.log")
    }
}

/// Install the logger. Safe to call more than once; later calls are ignored.
pub fn init_log_bridge(cli_level: Option<LevelFilter>) {
    let env_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|value| LevelFilter::from_str(value.trim()).ok());
    let mirror_to_stderr = std::env::var_os("RUST_LOG").is_some();
    let level = cli_level.or(env_level);

    let bridge = LOGGER.get_or_init(|| LogBridge {
        file: Mutex::new(None),
        mirror_to_stderr,
        level_overridden: level.is_some(),
    });

    if log::set_logger(bridge).is_ok() {
        log::set_max_level(level.unwrap_or(LevelFilter::Off));
    }
}

/// Apply the config's level unless the CLI or `RUST_LOG` already chose one.
pub fn apply_config_level(level: LevelFilter) {
    match LOGGER.get() {
        Some(bridge) if !bridge.level_overridden => log::set_max_level(level),
        _ => {}
    }
}

impl LogBridge {
    fn write_line(&self, line: &str) {
        let mut file = self.file.lock();
        if file.is_none() {
            // Silently skip file output if the log can't be opened
            *file = OpenOptions::new()
                .append(true)
                .create(true)
                .open(log_file_path())
                .ok();
        }
        if let Some(f) = file.as_mut() {
            let _ = f.write_all(line.as_bytes());
        }
    }
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "[{}] [{:<5}] [{}] {}\n",
            timestamp(),
            record.level(),
            record.target(),
            record.args()
        );
        self.write_line(&line);
        if self.mirror_to_stderr {
            eprint!("{line}");
        }
    }

    fn flush(&self) {
        if let Some(f) = self.file.lock().as_mut() {
            let _ = f.flush();
        }
    }
}

fn timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}
