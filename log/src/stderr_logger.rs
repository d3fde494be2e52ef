use std::fmt::Write;
use std::io::Write as _;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError, set_boxed_logger, set_max_level};
use time::format_description::well_known::Rfc3339;

pub struct StderrLog {
    level: LevelFilter,
}

impl StderrLog {
    pub fn init(log_level: LevelFilter) -> Result<(), SetLoggerError> {
        set_max_level(log_level);
        // Invocations may run concurrently; installation must go through
        // the synchronized path.
        set_boxed_logger(Box::new(StderrLog { level: log_level }))
    }

    fn format(record: &Record<'_>, timestamp: &str) -> String {
        let mut buffer = String::with_capacity(128);
        let level = record.level().as_str();
        let module = record.module_path().unwrap_or("<unknown>");
        let file = record.file().unwrap_or("<unknown>");
        let line = record.line().unwrap_or(0);
        let log_message = record.args();
        let _ = write!(
            &mut buffer,
            "{level} {timestamp} {module} {file}:{line} {log_message}"
        );
        buffer
    }
}

impl Log for StderrLog {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            let utc_now = time::OffsetDateTime::now_utc();
            let timestamp = utc_now.format(&Rfc3339).unwrap_or("<unknown>".to_string());
            eprintln!("{}", Self::format(record, &timestamp));
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}
