//! Error types for the dictionary driver

use std::io;
use std::path::PathBuf;
use std::process;

use thiserror::Error;

pub const EXIT_ERROR: i32 = 1;
pub const EXIT_USAGE: i32 = 2;

/// Result type alias using [`DictError`]
pub type Result<T> = std::result::Result<T, DictError>;

#[derive(Error, Debug)]
pub enum DictError {
    /// Input or output file could not be opened
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Read or write failure after the files were opened
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Bad arguments
    #[error("{0}")]
    Usage(String),

    /// A data line that cannot be turned into a record
    #[error("line {line}: {message}")]
    Format { line: usize, message: String },
}

impl DictError {
    pub fn usage(msg: impl Into<String>) -> Self {
        DictError::Usage(msg.into())
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            DictError::Usage(_) => EXIT_USAGE,
            _ => EXIT_ERROR,
        }
    }
}

/// Print error and exit with the appropriate code.
pub fn exit_with_error(err: DictError) -> ! {
    eprintln!("error: {err}");
    process::exit(err.exit_code())
}
