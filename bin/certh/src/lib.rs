use std::{
    env, fs,
    path::{Path, PathBuf},
};

use certh_common::{
    error::WrapError,
    generate_header, locator,
    reader::read_certificate_file,
    LoadedCertificates,
};
use log::{debug, error, info};

pub const OUTPUT_FILE: &str = "aws_certificate.h";

/// Resolved paths for one conversion run.
#[derive(Debug, Clone)]
pub struct Config {
    /// where the root CA, client certificate and private key are looked up
    pub cert_dir: PathBuf,
    /// root CA file name inside `cert_dir`
    pub root_ca: String,
    /// header destination, relative paths resolve against the working directory
    pub output: PathBuf,
}

impl Config {
    pub fn new(cert_dir: impl Into<PathBuf>) -> Self {
        Self {
            cert_dir: cert_dir.into(),
            root_ca: locator::ROOT_CA_FILE.to_string(),
            output: PathBuf::from(OUTPUT_FILE),
        }
    }

    pub fn output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn root_ca(mut self, root_ca: impl Into<String>) -> Self {
        self.root_ca = root_ca.into();
        self
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// header written to this path
    Generated(PathBuf),
    /// at least one credential was missing, nothing written
    Aborted,
}

/// Directory holding the running executable.
pub fn exe_dir() -> anyhow::Result<PathBuf> {
    let exe = env::current_exe()?;
    let dir = exe
        .parent()
        .ok_or_else(|| anyhow::anyhow!("executable {} has no parent directory", exe.display()))?;
    Ok(dir.to_path_buf())
}

pub fn run(config: &Config) -> anyhow::Result<Outcome> {
    let dir = config.cert_dir.as_path();
    debug!("locating credentials in {}", dir.display());
    let root_ca_path = locator::root_ca_path(dir, &config.root_ca);
    let client_cert_path = locator::find_client_certificate(dir)?;
    let private_key_path = locator::find_private_key(dir)?;

    debug!("reading credentials");
    let loaded = LoadedCertificates {
        root_ca: read_certificate_file(Some(&root_ca_path)),
        client_cert: read_certificate_file(client_cert_path.as_deref()),
        private_key: read_certificate_file(private_key_path.as_deref()),
    };

    let certs = match loaded.complete() {
        Ok(certs) => certs,
        Err(missing) => {
            let names: Vec<String> = missing.iter().map(ToString::to_string).collect();
            error!("missing credentials: {}", names.join(", "));
            println!("Error reading one or more certificate files. Exiting.");
            return Ok(Outcome::Aborted);
        }
    };

    debug!("generating header");
    let header = generate_header(&certs);
    write_header(&config.output, &header)?;
    info!("wrote {} bytes to {}", header.len(), config.output.display());

    let name = config
        .output
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| config.output.display().to_string());
    println!("{name} generated successfully.");
    Ok(Outcome::Generated(config.output.clone()))
}

fn write_header(path: &Path, header: &str) -> certh_common::error::Result<()> {
    fs::write(path, header).wrap(path)
}
