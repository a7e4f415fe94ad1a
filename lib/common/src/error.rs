use std::error::Error;
use std::io;

/// An error related to executing queries against the backing store.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum StorageError {
    /// Error from the OS I/O layer.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The query endpoint answered with a non-success status.
    #[error("the query endpoint returned status {0}")]
    UnexpectedStatus(u16),
    #[error("{0}")]
    Other(#[source] Box<dyn Error + Send + Sync + 'static>),
}

impl StorageError {
    /// Builds an error from an arbitrary cause.
    #[inline]
    pub fn other(error: impl Into<Box<dyn Error + Send + Sync + 'static>>) -> Self {
        Self::Other(error.into())
    }
}
