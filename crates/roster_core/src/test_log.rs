//! Per-thread capture of `log` records for assertions.

use std::cell::RefCell;
use std::sync::Once;

use log::{Level, LevelFilter, Log, Metadata, Record};

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|records| {
            records
                .borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

/// Install the capturing logger and clear this thread's records.
pub fn capture() {
    INIT.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(LevelFilter::Trace);
    });
    RECORDS.with(|records| records.borrow_mut().clear());
}

/// Drain this thread's error-level messages.
pub fn take_errors() -> Vec<String> {
    take_level(Level::Error)
}

/// Drain this thread's warning-level messages.
pub fn take_warnings() -> Vec<String> {
    take_level(Level::Warn)
}

/// Drains every record, keeping the messages logged at `level`.
fn take_level(level: Level) -> Vec<String> {
    RECORDS.with(|records| {
        records
            .borrow_mut()
            .drain(..)
            .filter(|(logged, _)| *logged == level)
            .map(|(_, message)| message)
            .collect()
    })
}
