pub mod certs;
pub mod error;
pub mod header;
pub mod locator;
pub mod reader;

pub use certs::{CertKind, CertificateSet, LoadedCertificates};
pub use header::generate_header;
