//! Named logger handles
//!
//! A [`Logger`] is a cheap handle to state owned by a [`Registry`]. Cloning
//! the handle or looking the same name up again yields the same logger.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::format::Record;
use crate::level::Level;
use crate::registry::Registry;
use crate::sink::Sink;

/// Mutable per-logger state
#[derive(Debug)]
pub(crate) struct LoggerState {
    pub(crate) level: Level,
    pub(crate) propagate: bool,
    pub(crate) sinks: Vec<Arc<Sink>>,
}

impl Default for LoggerState {
    fn default() -> Self {
        Self {
            level: Level::NotSet,
            propagate: true,
            sinks: Vec::new(),
        }
    }
}

/// Registry-owned logger entry
#[derive(Debug)]
pub(crate) struct LoggerEntry {
    pub(crate) name: String,
    pub(crate) state: RwLock<LoggerState>,
}

impl LoggerEntry {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: RwLock::new(LoggerState::default()),
        }
    }
}

/// Return the parent name of a dotted logger name, if any.
///
/// `"a.b.c"` has parent `"a.b"`; `"a"` has none.
pub fn parent_name(name: &str) -> Option<&str> {
    name.rfind('.').map(|idx| &name[..idx])
}

/// Handle to a named logger
#[derive(Clone)]
pub struct Logger {
    entry: Arc<LoggerEntry>,
    registry: Registry,
}

impl Logger {
    pub(crate) fn new(entry: Arc<LoggerEntry>, registry: Registry) -> Self {
        Self { entry, registry }
    }

    pub fn name(&self) -> &str {
        &self.entry.name
    }

    /// The logger's own level
    pub fn level(&self) -> Level {
        self.entry.state.read().level
    }

    /// First level set on this logger or its ancestors, `NotSet` if none
    pub fn effective_level(&self) -> Level {
        let mut current = Some(self.clone());
        while let Some(logger) = current {
            let level = logger.level();
            if level.is_set() {
                return level;
            }
            current = logger.parent();
        }
        Level::NotSet
    }

    /// Whether a record at `level` would reach at least the level check of
    /// some configured logger in the chain
    pub fn is_enabled_for(&self, level: Level) -> bool {
        let effective = self.effective_level();
        level.is_set() && effective.is_set() && level >= effective
    }

    pub fn propagate(&self) -> bool {
        self.entry.state.read().propagate
    }

    /// Snapshot of the attached sinks
    pub fn sinks(&self) -> Vec<Arc<Sink>> {
        self.entry.state.read().sinks.clone()
    }

    pub fn sink_count(&self) -> usize {
        self.entry.state.read().sinks.len()
    }

    pub fn has_sinks(&self) -> bool {
        self.sink_count() > 0
    }

    /// Nearest registered ancestor, ending at the root logger
    pub fn parent(&self) -> Option<Logger> {
        self.registry.parent_of(&self.entry.name)
    }

    /// Emit a record at `level`.
    ///
    /// The record walks this logger and then its ancestors. Each logger with
    /// a level set hands the record to its sinks when `level` reaches its
    /// own level; the walk stops after a logger that does not propagate.
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        if !level.is_set() {
            return;
        }

        let mut record: Option<Record> = None;
        let mut current = Some(self.clone());
        while let Some(logger) = current {
            let (own_level, propagate, sinks) = {
                let state = logger.entry.state.read();
                (state.level, state.propagate, state.sinks.clone())
            };

            if own_level.is_set() && level >= own_level {
                let record = record
                    .get_or_insert_with(|| Record::new(self.name(), level, args.to_string()));
                for sink in &sinks {
                    if let Err(err) = sink.emit(record) {
                        eprintln!("--- Logging error ---\nfailed to write record for '{}': {}", record.logger, err);
                    }
                }
            }

            if !propagate {
                break;
            }
            current = logger.parent();
        }
    }

    pub fn debug(&self, message: &str) {
        self.log(Level::Debug, format_args!("{}", message));
    }

    pub fn info(&self, message: &str) {
        self.log(Level::Info, format_args!("{}", message));
    }

    pub fn warning(&self, message: &str) {
        self.log(Level::Warning, format_args!("{}", message));
    }

    /// Alias for [`Logger::warning`]
    pub fn warn(&self, message: &str) {
        self.warning(message);
    }

    pub fn error(&self, message: &str) {
        self.log(Level::Error, format_args!("{}", message));
    }
}

impl PartialEq for Logger {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.entry, &other.entry)
    }
}

impl Eq for Logger {}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.entry.state.read();
        f.debug_struct("Logger")
            .field("name", &self.entry.name)
            .field("level", &state.level)
            .field("propagate", &state.propagate)
            .field("sinks", &state.sinks.len())
            .finish()
    }
}
