//! Record destinations
//!
//! A sink is either the process's standard output or an append-mode file.
//! Both render with the shared [`FORMAT`](crate::format::FORMAT).

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use crate::format::{Record, FORMAT};

/// Where a sink writes
pub enum SinkTarget {
    /// Standard output
    Stream,
    /// A file opened for append at construction
    File { path: PathBuf, file: Mutex<File> },
}

impl fmt::Debug for SinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkTarget::Stream => f.write_str("Stream"),
            SinkTarget::File { path, .. } => f.debug_struct("File").field("path", path).finish(),
        }
    }
}

/// A destination for formatted log records
#[derive(Debug)]
pub struct Sink {
    target: SinkTarget,
    emitted: AtomicU64,
}

impl Sink {
    /// Create a sink writing to stdout
    pub fn stream() -> Self {
        Self {
            target: SinkTarget::Stream,
            emitted: AtomicU64::new(0),
        }
    }

    /// Create a sink appending to `path`
    ///
    /// The file is created if it does not exist. Errors from opening the
    /// file are returned unchanged.
    pub fn file(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            target: SinkTarget::File {
                path,
                file: Mutex::new(file),
            },
            emitted: AtomicU64::new(0),
        })
    }

    pub fn target(&self) -> &SinkTarget {
        &self.target
    }

    /// The record template this sink renders with
    pub fn format(&self) -> &'static str {
        FORMAT
    }

    /// Path of a file sink, `None` for the stream sink
    pub fn path(&self) -> Option<&Path> {
        match &self.target {
            SinkTarget::Stream => None,
            SinkTarget::File { path, .. } => Some(path),
        }
    }

    pub fn is_stream(&self) -> bool {
        matches!(self.target, SinkTarget::Stream)
    }

    pub fn is_file(&self) -> bool {
        matches!(self.target, SinkTarget::File { .. })
    }

    /// Number of records handed to this sink so far
    pub fn emitted(&self) -> u64 {
        self.emitted.load(Ordering::Relaxed)
    }

    /// Render and write one record, flushing afterwards
    pub fn emit(&self, record: &Record) -> io::Result<()> {
        self.emitted.fetch_add(1, Ordering::Relaxed);
        let line = record.render();
        match &self.target {
            SinkTarget::Stream => {
                let mut out = io::stdout().lock();
                writeln!(out, "{}", line)?;
                out.flush()
            }
            SinkTarget::File { file, .. } => {
                let mut file = file.lock();
                writeln!(file, "{}", line)?;
                file.flush()
            }
        }
    }
}
