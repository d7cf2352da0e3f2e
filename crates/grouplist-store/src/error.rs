use std::fmt;

/// Result type for grouplist-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Ways a record store load can fail. Both are shown to the user once and
/// leave the list empty.
#[derive(Debug)]
pub enum Error {
    /// The resource could not be read (missing file, permissions, stream failure)
    Io(std::io::Error),

    /// The content could not be decoded into records
    Decode(String),
}

impl Error {
    /// Short machine-readable kind, used in logs and JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Io(_) => "io",
            Error::Decode(_) => "decode",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "Error reading data file: {}", err),
            Error::Decode(msg) => write!(f, "Error processing data: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Decode(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}
