//! Crate-level error type and `Result` alias.
//! Usage errors carry the underlying clap error so the binary can print the
//! usage message and exit the way clap would.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Usage(#[from] clap::Error),

    #[error("Failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {format} trace to {path}: {source}")]
    Export {
        format: crate::types::ExportFormat,
        path: String,
        #[source]
        source: Box<Error>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML writer error: {0}")]
    Xml(#[from] quick_xml::Error),
}

impl Error {
    /// Process exit status matching this error. Usage errors use clap's code (2).
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Usage(e) => e.exit_code(),
            _ => 1,
        }
    }

    /// True for malformed command lines. Help and version output are
    /// carried as `Usage` too but print to stdout and are not errors.
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::Usage(e) if e.use_stderr())
    }
}
