// In-app GUI logger: mirrors records to stderr, keeps a bounded buffer for
// the logs viewport, writes warn+ lines to value-deck.log and installs a
// panic hook so crashes end up in the file too.

use lazy_static::lazy_static;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::VecDeque;
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone)]
pub struct LogEntry {
    pub level: Level,
    pub target: String,
    pub msg: String,
}

const LOG_CAPACITY: usize = 5000;
const LOG_FILE_NAME: &str = "value-deck.log";

lazy_static! {
    static ref BUFFER: Mutex<VecDeque<LogEntry>> = Mutex::new(VecDeque::new());
    static ref LOG_FILE: Mutex<Option<std::fs::File>> = Mutex::new(None);
}

static NEW_LOGS: AtomicBool = AtomicBool::new(false);

struct GuiLogger;

impl Log for GuiLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        log::max_level()
            .to_level()
            .map_or(false, |max| metadata.level() <= max)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "[{}] [{:>5}] {}: {}",
            timestamp_millis(),
            record.level(),
            record.target(),
            record.args()
        );
        eprintln!("{line}");
        if record.level() <= Level::Warn {
            write_file_line(&line);
        }
        push_entry(LogEntry {
            level: record.level(),
            target: record.target().to_string(),
            msg: record.args().to_string(),
        });
    }

    fn flush(&self) {
        if let Ok(mut lf) = LOG_FILE.lock() {
            if let Some(f) = lf.as_mut() {
                let _ = f.flush();
            }
        }
    }
}

fn push_entry(entry: LogEntry) {
    if let Ok(mut buf) = BUFFER.lock() {
        buf.push_back(entry);
        if buf.len() > LOG_CAPACITY {
            buf.pop_front();
        }
    }
    NEW_LOGS.store(true, Ordering::Relaxed);
}

fn level_from_env() -> Option<LevelFilter> {
    let val = std::env::var("RUST_LOG").ok()?.to_lowercase();
    for (needle, level) in [
        ("off", LevelFilter::Off),
        ("error", LevelFilter::Error),
        ("warn", LevelFilter::Warn),
        ("info", LevelFilter::Info),
        ("debug", LevelFilter::Debug),
        ("trace", LevelFilter::Trace),
    ] {
        if val.contains(needle) {
            return Some(level);
        }
    }
    None
}

/// Installs the logger, opens the log file and hooks panics.
pub fn init() {
    let _ = log::set_boxed_logger(Box::new(GuiLogger));
    log::set_max_level(level_from_env().unwrap_or(LevelFilter::Info));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(LOG_FILE_NAME)
        .ok();
    if let Ok(mut lf) = LOG_FILE.lock() {
        *lf = file;
    }

    install_panic_hook();
    log::info!("logger initialized (warn+ persisted to {LOG_FILE_NAME})");
}

pub fn len() -> usize {
    BUFFER.lock().map(|b| b.len()).unwrap_or(0)
}

pub fn clear() {
    if let Ok(mut buf) = BUFFER.lock() {
        buf.clear();
    }
    NEW_LOGS.store(true, Ordering::Relaxed);
}

/// Visits entries in `[start, end)` of the buffer (viewport row range).
pub fn for_each_range<F: FnMut(&LogEntry)>(start: usize, end: usize, mut f: F) {
    if let Ok(buf) = BUFFER.lock() {
        let len = buf.len();
        for idx in start.min(len)..end.min(len) {
            if let Some(entry) = buf.get(idx) {
                f(entry);
            }
        }
    }
}

/// Full buffer as preformatted lines, for the Copy button.
pub fn snapshot() -> Vec<String> {
    BUFFER
        .lock()
        .map(|buf| {
            buf.iter()
                .map(|e| format!("[{:>5}] {}: {}", e.level, e.target, e.msg))
                .collect()
        })
        .unwrap_or_default()
}

/// Returns true if new records arrived since the last call.
pub fn take_new_flag() -> bool {
    NEW_LOGS.swap(false, Ordering::Relaxed)
}

fn timestamp_millis() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:03}", now.as_secs(), now.subsec_millis())
}

fn write_file_line(line: &str) {
    if let Ok(mut lf) = LOG_FILE.lock() {
        if let Some(f) = lf.as_mut() {
            let _ = writeln!(f, "{line}");
            let _ = f.flush();
        }
    }
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|panic_info| {
        let msg = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            *s
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.as_str()
        } else {
            "Box<Any>"
        };
        let loc = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown".to_string());

        write_file_line(&format!(
            "[{}] [ERROR] panic at {loc}: {msg}",
            timestamp_millis()
        ));
        log::error!("panic at {loc}: {msg}");
    }));
}
