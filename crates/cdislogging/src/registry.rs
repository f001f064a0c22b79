//! Named logger registry
//!
//! The registry maps dotted names to loggers and implements the
//! get-or-update policy applied on every `get_logger` call:
//!
//! - no level given: the logger keeps whatever level it has,
//! - a level given: the logger takes it,
//! - afterwards a logger at `NotSet` propagates and holds no sinks, while a
//!   logger with a level stops propagation and gets a stream sink (plus an
//!   optional file sink) the first time it leaves `NotSet`.
//!
//! Sinks are only attached on that transition, so repeated calls never
//! duplicate output and a later call cannot swap the file of a logger that
//! is already configured.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::{LoggingError, LoggingResult};
use crate::level::Level;
use crate::logger::{parent_name, Logger, LoggerEntry};
use crate::sink::Sink;

/// Name of the root logger
pub const ROOT_NAME: &str = "root";

struct RegistryInner {
    loggers: Mutex<HashMap<String, Arc<LoggerEntry>>>,
    root: Arc<LoggerEntry>,
    default_level: Option<Level>,
}

/// A registry of named loggers
///
/// Cloning a `Registry` yields another handle to the same loggers.
///
/// # Example
///
/// ```
/// use cdislogging::{Level, Registry};
///
/// let registry = Registry::new();
/// let log = registry.get_logger("hi", None, Some("info")).unwrap();
/// assert_eq!(log.level(), Level::Info);
///
/// // Fetching again without a level keeps the configuration
/// let again = registry.get_logger("hi", None, None).unwrap();
/// assert_eq!(again, log);
/// assert_eq!(again.sink_count(), 1);
/// ```
#[derive(Clone)]
pub struct Registry {
    inner: Arc<RegistryInner>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Create an empty registry; new loggers start at `NotSet`
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Create a registry that configures brand-new loggers at `level` when
    /// they are first obtained without an explicit level
    pub fn with_default_level(level: Level) -> Self {
        Self::build(Some(level))
    }

    fn build(default_level: Option<Level>) -> Self {
        Self {
            inner: Arc::new(RegistryInner {
                loggers: Mutex::new(HashMap::new()),
                root: Arc::new(LoggerEntry::new(ROOT_NAME)),
                default_level,
            }),
        }
    }

    pub fn default_level(&self) -> Option<Level> {
        self.inner.default_level
    }

    /// The root logger, ancestor of every named logger
    pub fn root(&self) -> Logger {
        Logger::new(self.inner.root.clone(), self.clone())
    }

    /// Look up or create the logger `name` without changing its configuration
    pub fn logger(&self, name: &str) -> LoggingResult<Logger> {
        let (entry, _) = self.resolve(name)?;
        Ok(Logger::new(entry, self.clone()))
    }

    /// Whether a logger named `name` has been created
    pub fn contains(&self, name: &str) -> bool {
        name == ROOT_NAME || self.inner.loggers.lock().contains_key(name)
    }

    /// Sorted names of all created loggers, excluding the root
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.inner.loggers.lock().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.inner.loggers.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return a logger named `name` configured with the string level
    /// `log_level` and, on first configuration, an optional file sink.
    ///
    /// The level is validated before the registry is touched. See the
    /// module docs for how repeated calls interact.
    pub fn get_logger(
        &self,
        name: &str,
        file_name: Option<&str>,
        log_level: Option<&str>,
    ) -> LoggingResult<Logger> {
        let level = Level::parse_optional(log_level)?;
        let file_path = file_name.filter(|f| !f.is_empty()).map(Path::new);
        self.obtain(name, file_path, level)
    }

    /// Typed form of [`Registry::get_logger`]
    pub fn obtain(
        &self,
        name: &str,
        file_path: Option<&Path>,
        level: Option<Level>,
    ) -> LoggingResult<Logger> {
        let (entry, created) = self.resolve(name)?;
        let level = match level {
            Some(level) => Some(level),
            None if created => self.inner.default_level,
            None => None,
        };
        apply_policy(&entry, file_path, level)?;
        Ok(Logger::new(entry, self.clone()))
    }

    /// Apply the same policy to the root logger
    pub fn configure_root(
        &self,
        file_path: Option<&Path>,
        level: Option<Level>,
    ) -> LoggingResult<Logger> {
        apply_policy(&self.inner.root, file_path, level)?;
        Ok(self.root())
    }

    /// Nearest registered ancestor of `name`, falling back to the root
    pub(crate) fn parent_of(&self, name: &str) -> Option<Logger> {
        if name == ROOT_NAME {
            return None;
        }

        let loggers = self.inner.loggers.lock();
        let mut candidate = parent_name(name);
        while let Some(parent) = candidate {
            if let Some(entry) = loggers.get(parent) {
                return Some(Logger::new(entry.clone(), self.clone()));
            }
            candidate = parent_name(parent);
        }
        drop(loggers);

        Some(self.root())
    }

    fn resolve(&self, name: &str) -> LoggingResult<(Arc<LoggerEntry>, bool)> {
        if name.is_empty() {
            return Err(LoggingError::EmptyName);
        }
        if name == ROOT_NAME {
            return Ok((self.inner.root.clone(), false));
        }

        let mut loggers = self.inner.loggers.lock();
        if let Some(entry) = loggers.get(name) {
            return Ok((entry.clone(), false));
        }
        let entry = Arc::new(LoggerEntry::new(name));
        loggers.insert(name.to_string(), entry.clone());
        Ok((entry, true))
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("loggers", &self.names())
            .field("default_level", &self.inner.default_level)
            .finish()
    }
}

/// Update a logger's level, propagation and sinks.
///
/// Sinks are built before anything is committed, so a failing file open
/// leaves the logger as it was.
fn apply_policy(
    entry: &LoggerEntry,
    file_path: Option<&Path>,
    requested: Option<Level>,
) -> LoggingResult<()> {
    let mut state = entry.state.write();
    let level = requested.unwrap_or(state.level);

    if level.is_set() {
        if state.sinks.is_empty() {
            state.sinks = build_sinks(file_path)?;
        }
    } else {
        state.sinks.clear();
    }

    state.level = level;
    state.propagate = !level.is_set();
    Ok(())
}

fn build_sinks(file_path: Option<&Path>) -> LoggingResult<Vec<Arc<Sink>>> {
    let mut sinks = vec![Arc::new(Sink::stream())];
    if let Some(path) = file_path {
        sinks.push(Arc::new(Sink::file(path)?));
    }
    Ok(sinks)
}
