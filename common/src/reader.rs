use std::{fs, path::Path};

use log::debug;

use crate::error::{Error, Result, WrapError};

/// Read a whole PEM file as text, line breaks untouched.
pub fn load(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).wrap(path)?;
    debug!("read {} bytes from {}", content.len(), path.display());
    Ok(content)
}

/// Read a located credential, turning every failure into `None`.
///
/// `None` input means the locator found nothing and is passed through
/// silently. A real path that cannot be read prints a diagnostic naming it.
pub fn read_certificate_file(path: Option<&Path>) -> Option<String> {
    let path = path?;
    match load(path) {
        Ok(content) => Some(content),
        Err(Error::NotFound { path }) => {
            println!("Error: Certificate file not found at {}", path.display());
            None
        }
        Err(e) => {
            println!("Error: Certificate file could not be read: {e}");
            None
        }
    }
}
