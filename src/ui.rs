//! Leveled, styled output for command-line programs.
//!
//! [`Console`] writes to stdout (and stderr for errors) behind a single lock,
//! so one [`Console`] can be shared across threads and every call writes a
//! whole line. [`Nop`] discards everything and is handy in tests.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use crate::error::BindError;
use crate::style::Style;

/// Verbosity threshold. Messages below the current level are dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    /// Nothing is shown.
    None,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::None => "none",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = BindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "none" | "off" => Ok(Level::None),
            _ => Err(BindError::InvalidLevel {
                input: s.to_string(),
            }),
        }
    }
}

/// Output sink for interactive programs.
pub trait Ui: Send + Sync {
    /// Print a line regardless of the level.
    fn print(&self, message: &str);

    fn level(&self) -> Level;

    fn set_level(&self, level: Level);

    fn trace(&self, style: &Style, message: &str);

    fn debug(&self, style: &Style, message: &str);

    fn info(&self, style: &Style, message: &str);

    fn warn(&self, style: &Style, message: &str);

    /// Written to the error stream.
    fn error(&self, style: &Style, message: &str);
}

type Writer = Box<dyn Write + Send>;

struct Sinks {
    level: Level,
    out: Writer,
    err: Writer,
}

/// A [`Ui`] over an output and an error writer.
pub struct Console {
    sinks: Mutex<Sinks>,
}

impl Console {
    /// Write to stdout and stderr.
    pub fn new(level: Level) -> Self {
        Self::with_writers(level, io::stdout(), io::stderr())
    }

    pub fn with_writers(
        level: Level,
        out: impl Write + Send + 'static,
        err: impl Write + Send + 'static,
    ) -> Self {
        Self {
            sinks: Mutex::new(Sinks {
                level,
                out: Box::new(out),
                err: Box::new(err),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Sinks> {
        self.sinks.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn emit(&self, at: Level, style: &Style, message: &str) {
        let mut guard = self.lock();
        let sinks = &mut *guard;
        if sinks.level > at {
            return;
        }
        let writer = if at == Level::Error {
            &mut sinks.err
        } else {
            &mut sinks.out
        };
        let _ = writeln!(writer, "{}", style.paint(message));
    }
}

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field("level", &self.lock().level)
            .finish_non_exhaustive()
    }
}

impl Ui for Console {
    fn print(&self, message: &str) {
        let _ = writeln!(self.lock().out, "{message}");
    }

    fn level(&self) -> Level {
        self.lock().level
    }

    fn set_level(&self, level: Level) {
        self.lock().level = level;
    }

    fn trace(&self, style: &Style, message: &str) {
        self.emit(Level::Trace, style, message);
    }

    fn debug(&self, style: &Style, message: &str) {
        self.emit(Level::Debug, style, message);
    }

    fn info(&self, style: &Style, message: &str) {
        self.emit(Level::Info, style, message);
    }

    fn warn(&self, style: &Style, message: &str) {
        self.emit(Level::Warn, style, message);
    }

    fn error(&self, style: &Style, message: &str) {
        self.emit(Level::Error, style, message);
    }
}

/// A [`Ui`] that shows nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct Nop;

impl Ui for Nop {
    fn print(&self, _: &str) {}

    fn level(&self) -> Level {
        Level::None
    }

    fn set_level(&self, _: Level) {}

    fn trace(&self, _: &Style, _: &str) {}

    fn debug(&self, _: &Style, _: &str) {}

    fn info(&self, _: &Style, _: &str) {}

    fn warn(&self, _: &Style, _: &str) {}

    fn error(&self, _: &Style, _: &str) {}
}
