use std::io::{self, IsTerminal};

use crossterm::style::{StyledContent, Stylize};
use log::{Level, LevelFilter, Log, Metadata, Record};

pub struct Logger;

static LOGGER: Logger = Logger;

/// Install the stderr logger at the given level. Does nothing if a logger
/// is already installed.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[inline]
fn level_as_str(level: Level) -> &'static str {
    match level {
        Level::Error => "error:",
        Level::Warn => "warning:",
        Level::Info => "info:",
        Level::Debug => "debug:",
        Level::Trace => "trace:",
    }
}

#[inline]
fn level_formatter(level: Level) -> fn(&'static str) -> StyledContent<&'static str> {
    match level {
        Level::Error => |s| s.stylize().red().bold(),
        Level::Warn => |s| s.stylize().yellow().bold(),
        Level::Info => |s| s.stylize().blue().bold(),
        Level::Debug => |s| s.stylize().magenta().bold(),
        Level::Trace => |s| s.stylize().green().bold(),
    }
}

impl Log for Logger {
    #[inline]
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let level = record.level();
        if io::stderr().is_terminal() {
            eprintln!("{} {}", level_formatter(level)(level_as_str(level)), record.args());
        } else {
            eprintln!("{} {}", level_as_str(level), record.args());
        }
    }

    #[inline]
    fn flush(&self) {}
}
