use std::{
    io,
    path::{Path, PathBuf},
};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// nothing exists at the path
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },
    /// the path exists but could not be read or written
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// glob patterns are strings, the directory must be valid UTF-8
    #[error("path is not valid UTF-8: {}", path.display())]
    NonUtf8Path { path: PathBuf },
    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

/// Attach the offending path to a bare `io::Error`.
pub trait WrapError<T> {
    fn wrap(self, path: &Path) -> Result<T>;
}

impl<T> WrapError<T> for std::result::Result<T, io::Error> {
    fn wrap(self, path: &Path) -> Result<T> {
        self.map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::NotFound {
                path: path.to_path_buf(),
            },
            _ => Error::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })
    }
}
