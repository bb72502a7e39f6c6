//! Lightweight performance instrumentation.
//!
//! `--perf` prints timing scopes to stderr once the terminal is restored.
//! The debug event log records one line per dispatched message and drawn
//! frame, and is the only sink used while the editor owns the screen.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

static PERF_ENABLED: AtomicBool = AtomicBool::new(false);
static EVENT_LOG: LazyLock<Mutex<Option<EventLog>>> = LazyLock::new(|| Mutex::new(None));

/// Prints its lifetime to stderr on drop when `--perf` is on.
#[derive(Debug)]
pub struct Scope {
    name: &'static str,
    start: Instant,
}

impl Drop for Scope {
    fn drop(&mut self) {
        if is_enabled() {
            eprintln!("[perf] {}: {:.2} ms", self.name, elapsed_ms(self.start));
        }
    }
}

#[derive(Debug)]
struct EventLog {
    opened_at: Instant,
    writer: BufWriter<File>,
}

impl EventLog {
    fn create(path: &Path) -> io::Result<Self> {
        let mut writer = BufWriter::new(File::create(path)?);
        writeln!(writer, "bytepad debug log start")?;
        writer.flush()?;
        Ok(Self {
            opened_at: Instant::now(),
            writer,
        })
    }

    fn record(&mut self, name: &str, detail: &str) -> io::Result<()> {
        let at = elapsed_ms(self.opened_at);
        writeln!(self.writer, "[{at:>10.3} ms] {name}: {detail}")?;
        self.writer.flush()
    }
}

// Poisoned locks are recovered; logging never panics.
fn event_log() -> MutexGuard<'static, Option<EventLog>> {
    EVENT_LOG.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Milliseconds since `start`.
pub fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

pub fn set_enabled(enabled: bool) {
    PERF_ENABLED.store(enabled, Ordering::Relaxed);
}

pub fn is_enabled() -> bool {
    PERF_ENABLED.load(Ordering::Relaxed)
}

pub fn scope(name: &'static str) -> Scope {
    Scope {
        name,
        start: Instant::now(),
    }
}

/// Start writing debug events to `path`, or stop when `None`.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or written.
pub fn set_debug_log_path(path: Option<&Path>) -> io::Result<()> {
    let log = path.map(EventLog::create).transpose()?;
    *event_log() = log;
    Ok(())
}

pub fn is_debug_log_enabled() -> bool {
    event_log().is_some()
}

/// Append one event line. Write failures are dropped.
pub fn log_event(name: &str, detail: impl AsRef<str>) {
    if let Some(log) = event_log().as_mut() {
        let _ = log.record(name, detail.as_ref());
    }
}
