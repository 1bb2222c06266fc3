//! Process-wide log sink. Lines go to stderr so they never interleave with a
//! board drawn on stdout.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();
static WARNED_UNINITIALIZED: AtomicBool = AtomicBool::new(false);

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    fn format_line(&self, timestamp: &str, file: &str, line: u32, message: &str) -> String {
        let source = source_name(file);
        match self.prefix.as_deref() {
            Some(prefix) => format!("[{}][{}][{}:{}] {}", timestamp, prefix, source, line, message),
            None => format!("[{}][{}:{}] {}", timestamp, source, line, message),
        }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        eprintln!("{}", self.format_line(&timestamp, file, line, message));
    }
}

fn source_name(file: &str) -> &str {
    file.rsplit(['/', '\\']).next().unwrap_or(file)
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

pub fn is_initialized() -> bool {
    LOGGER.get().is_some()
}

/// Library code logs freely; until the binary initializes the logger the
/// lines are dropped after a single warning.
pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    } else if !WARNED_UNINITIALIZED.swap(true, Ordering::Relaxed) {
        eprintln!("Logger not initialized! Call init_logger() first.");
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}
