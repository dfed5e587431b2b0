//! Logger setup.
//!
//! Console output goes through `env_logger` (`RUST_LOG` is honoured, default
//! `info`). With `--log FILE`, warnings and errors are additionally written
//! to that file, which then holds the mismatch report.

use anyhow::{Context, Result as AnyhowResult};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fs::File;
use std::io::{LineWriter, Write};
use std::path::Path;
use std::sync::Mutex;

struct TeeLogger {
    console: env_logger::Logger,
    file: Option<Mutex<LineWriter<File>>>,
}

impl Log for TeeLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.console.enabled(metadata) || (self.file.is_some() && metadata.level() <= Level::Warn)
    }

    fn log(&self, record: &Record) {
        if self.console.matches(record) {
            self.console.log(record);
        }
        if record.level() <= Level::Warn {
            if let Some(file) = &self.file {
                if let Ok(mut file) = file.lock() {
                    let _ = writeln!(file, "{}", record.args());
                }
            }
        }
    }

    fn flush(&self) {
        self.console.flush();
        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                let _ = file.flush();
            }
        }
    }
}

/// Install the global logger.
pub fn init(log_path: Option<&Path>) -> AnyhowResult<()> {
    let console = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .build();

    let mut max_level = console.filter();
    let file = match log_path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            max_level = max_level.max(LevelFilter::Warn);
            Some(Mutex::new(LineWriter::new(file)))
        }
        None => None,
    };

    log::set_boxed_logger(Box::new(TeeLogger { console, file }))?;
    log::set_max_level(max_level);
    Ok(())
}
