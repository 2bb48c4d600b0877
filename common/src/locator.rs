use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use log::{trace, warn};

use crate::error::{Error, Result};

pub const ROOT_CA_FILE: &str = "AmazonRootCA1.pem";
pub const CLIENT_CERT_PATTERN: &str = "*-certificate.pem.crt";
pub const PRIVATE_KEY_PATTERN: &str = "*-private.pem.key";

/// Root CA file `name` inside `directory`, usually [`ROOT_CA_FILE`].
pub fn root_ca_path(directory: &Path, name: &str) -> PathBuf {
    directory.join(name)
}

pub fn find_client_certificate(directory: &Path) -> Result<Option<PathBuf>> {
    find_first(directory, CLIENT_CERT_PATTERN)
}

pub fn find_private_key(directory: &Path) -> Result<Option<PathBuf>> {
    find_first(directory, PRIVATE_KEY_PATTERN)
}

/// First regular file in `directory` whose name matches `pattern`.
///
/// Which file is returned when several match is unspecified. Zero matches is
/// `Ok(None)`. Hidden files are never matched.
pub fn find_first(directory: &Path, pattern: &str) -> Result<Option<PathBuf>> {
    let dir = directory.to_str().ok_or_else(|| Error::NonUtf8Path {
        path: directory.to_path_buf(),
    })?;
    let full = Path::new(&Pattern::escape(dir)).join(pattern);
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };
    // both halves are UTF-8, lossy conversion never substitutes here
    let mut matches = glob::glob_with(&full.to_string_lossy(), options)?
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file());

    let first = matches.next();
    match &first {
        Some(path) => {
            let others = matches.count();
            if others > 0 {
                warn!(
                    "{others} more file(s) match {pattern} in {}, using {}",
                    directory.display(),
                    path.display()
                );
            }
            trace!("{pattern} matched {}", path.display());
        }
        None => trace!("no file matches {pattern} in {}", directory.display()),
    }
    Ok(first)
}
