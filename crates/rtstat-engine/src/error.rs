use std::fmt;
use std::path::PathBuf;

/// Result type for rtstat-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading sessions or producing results
#[derive(Debug)]
pub enum Error {
    /// Path does not reference an existing file or directory
    NotFound(PathBuf),

    /// Header is missing one or more required columns
    Schema { path: PathBuf, missing: Vec<String> },

    /// No usable trial or no identifying fields in the input
    NoValidData(String),

    /// Group aggregation called without any session file
    EmptyGroup,

    /// Caller supplied arguments the operation cannot work with
    InvalidInput(String),

    /// IO operation failed
    Io(std::io::Error),

    /// CSV decoding failed at file level (not a per-row parse problem)
    Csv(csv::Error),

    /// Directory traversal error
    WalkDir(walkdir::Error),
}

/// Fieldless classification of [`Error`], convenient for matching and exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Schema,
    NoValidData,
    EmptyGroup,
    InvalidInput,
    Io,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::Schema { .. } => ErrorKind::Schema,
            Error::NoValidData(_) => ErrorKind::NoValidData,
            Error::EmptyGroup => ErrorKind::EmptyGroup,
            Error::InvalidInput(_) => ErrorKind::InvalidInput,
            Error::Io(_) | Error::Csv(_) | Error::WalkDir(_) => ErrorKind::Io,
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::NotFound => 2,
            ErrorKind::Schema | ErrorKind::NoValidData => 3,
            ErrorKind::EmptyGroup | ErrorKind::InvalidInput => 4,
            ErrorKind::Io => 1,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound(path) => write!(f, "Not found: {}", path.display()),
            Error::Schema { path, missing } => write!(
                f,
                "Schema error: {} is missing required columns: {}",
                path.display(),
                missing.join(", ")
            ),
            Error::NoValidData(source) => write!(f, "No valid data in {}", source),
            Error::EmptyGroup => write!(f, "Empty group: at least one session file is required"),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Csv(err) => write!(f, "CSV error: {}", err),
            Error::WalkDir(err) => write!(f, "Directory traversal error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Csv(err) => Some(err),
            Error::WalkDir(err) => Some(err),
            Error::NotFound(_)
            | Error::Schema { .. }
            | Error::NoValidData(_)
            | Error::EmptyGroup
            | Error::InvalidInput(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDir(err)
    }
}
