use std::{
    fmt,
    sync::atomic::{AtomicU8, Ordering},
};

use crate::term::{Color, WithFg};

macro_rules! log {
    ($level:expr, $($arg:tt)*) => {
        $crate::log::log($level, format_args!($($arg)*));
    };
}

macro_rules! trace {
    ($($arg:tt)*) => {
        log!($crate::log::LogLevel::Trace, $($arg)*);
    };
}

macro_rules! debug {
    ($($arg:tt)*) => {
        log!($crate::log::LogLevel::Debug, $($arg)*);
    };
}

macro_rules! info {
    ($($arg:tt)*) => {
        log!($crate::log::LogLevel::Info, $($arg)*);
    };
}

macro_rules! warn {
    ($($arg:tt)*) => {
        log!($crate::log::LogLevel::Warn, $($arg)*);
    };
}

macro_rules! error {
    ($($arg:tt)*) => {
        log!($crate::log::LogLevel::Error, $($arg)*);
    };
}

static MAX_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Warn as u8);

pub fn set_max_level(level: LogLevel) {
    MAX_LEVEL.store(level as u8, Ordering::Relaxed);
}

fn enabled(level: LogLevel) -> bool {
    level as u8 >= MAX_LEVEL.load(Ordering::Relaxed)
}

pub fn log(level: LogLevel, message: fmt::Arguments) {
    if enabled(level) {
        eprintln!("{} {}", LevelFormat(level), message);
    }
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Maps `-v`/`-q` counts to a level; the default is [`LogLevel::Warn`].
    pub fn from_verbosity(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Error;
        }
        match verbose {
            0 => Self::Warn,
            1 => Self::Info,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }
}

struct LevelFormat(LogLevel);

impl fmt::Display for LevelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (color, msg) = match self.0 {
            LogLevel::Trace => (Color::Magenta, "TRACE"),
            LogLevel::Debug => (Color::Blue, "DEBUG"),
            LogLevel::Info => (Color::Green, " INFO"),
            LogLevel::Warn => (Color::Yellow, " WARN"),
            LogLevel::Error => (Color::Red, "ERROR"),
        };
        write!(f, "{}", WithFg::new(color, msg))
    }
}
