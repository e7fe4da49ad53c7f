use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ActifuzzError {
    /// Extra argument without `=` between key and value
    #[error("invalid format: {0}. Expected key=value")]
    InvalidFormat(String),

    /// Wordlist path doesn't point to a regular file
    #[error("wordlist file not found: {0:?}")]
    WordlistNotFound(PathBuf),

    /// Generic I/O error while reading the wordlist
    #[error("error reading wordlist file {path:?}: {source}")]
    WordlistRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ActifuzzError {
    /// Process exit status used when this error aborts the run
    pub fn exit_code(&self) -> i32 {
        match self {
            ActifuzzError::InvalidFormat(_) => 1,
            ActifuzzError::WordlistNotFound(_) | ActifuzzError::WordlistRead { .. } => 2,
        }
    }
}
