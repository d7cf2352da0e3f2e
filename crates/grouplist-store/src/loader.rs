use crate::error::{Error, Result};
use crate::lenient::decode_records;
use grouplist_types::Record;
use std::fmt;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::thread;

/// Record store compiled into the binary.
pub const BUNDLED_DATA: &str = include_str!("../assets/data.json");

/// Where the raw records come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSource {
    /// The asset shipped with the binary
    Bundled,
    /// A JSON file on disk
    File(PathBuf),
    /// In-memory text (demo data, tests)
    Inline(String),
}

impl fmt::Display for RecordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordSource::Bundled => write!(f, "bundled data.json"),
            RecordSource::File(path) => write!(f, "{}", path.display()),
            RecordSource::Inline(_) => write!(f, "inline data"),
        }
    }
}

/// Decoded records plus how many entries were dropped as malformed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub records: Vec<Record>,
    pub skipped: usize,
}

/// Read and decode `source` on the calling thread.
pub fn load(source: &RecordSource) -> Result<LoadReport> {
    tracing::info!(%source, "loading records");

    let report = match source {
        RecordSource::Bundled => decode_records(BUNDLED_DATA)?,
        RecordSource::Inline(text) => decode_records(text)?,
        RecordSource::File(path) => {
            let text = std::fs::read_to_string(path).map_err(|err| {
                Error::Io(std::io::Error::new(
                    err.kind(),
                    format!("{}: {}", path.display(), err),
                ))
            })?;
            decode_records(&text)?
        }
    };

    if report.skipped > 0 {
        tracing::warn!(skipped = report.skipped, %source, "some records could not be decoded");
    }
    Ok(report)
}

/// Load `source` on a background thread.
///
/// The receiver yields exactly one result. If the worker thread dies
/// without sending, the receiver reports a disconnect, which callers should
/// treat as an I/O failure.
pub fn spawn_load(source: RecordSource) -> Receiver<Result<LoadReport>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let result = load(&source);
        if let Err(err) = &result {
            tracing::error!(kind = err.kind(), %source, "record load failed: {}", err);
        }
        // The receiver may already be gone if the UI quit early.
        let _ = tx.send(result);
    });
    rx
}
