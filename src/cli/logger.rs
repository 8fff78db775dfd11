use log::{LevelFilter, Log, Metadata, Record};
use std::fmt;
use std::io::{stderr, Write};
use std::process;

static LOGGER: StderrLogger = StderrLogger;

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(record.args());
        // nowhere left to report a failing stderr
        let _ = writeln!(stderr().lock(), "{line}");
    }

    fn flush(&self) {
        let _ = stderr().flush();
    }
}

fn format_line(msg: &fmt::Arguments) -> String {
    format!("iniread[{}]: {}", process::id(), msg)
}

fn level_filter(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Route `log` output to stderr, `verbose` enables debug messages
pub(crate) fn init(verbose: bool) {
    // only the first call per process installs the logger
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level_filter(verbose));
}
