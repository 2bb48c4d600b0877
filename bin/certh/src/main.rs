use std::{path::PathBuf, process::ExitCode};

use certh::{Config, Outcome, OUTPUT_FILE};
use certh_common::locator::ROOT_CA_FILE;
use clap::Parser;
use flexi_logger::{colored_detailed_format, Logger};

#[derive(Debug, clap::Parser)]
struct Args {
    /// directory searched for the root CA, client certificate and private key,
    /// defaults to the directory of this executable
    #[arg(short, long, env = "CERTH_CERT_DIR")]
    cert_dir: Option<PathBuf>,
    /// root CA file name inside the certificate directory
    #[arg(short, long, default_value = ROOT_CA_FILE, env = "CERTH_ROOT_CA")]
    root_ca: String,
    /// generated header path, relative to the working directory
    #[arg(short, long, default_value = OUTPUT_FILE, env = "CERTH_OUTPUT")]
    output: PathBuf,
    #[arg(short, long, default_value = "warn", env = "CERTH_LOG_LEVEL")]
    log_level: String,
}

fn main() -> anyhow::Result<ExitCode> {
    // parse command line args
    let args = Args::parse();
    // logger init
    let _logger = Logger::try_with_str(&args.log_level)?
        .format(colored_detailed_format)
        .start()?;
    log::debug!("args: {args:?}");

    let cert_dir = match args.cert_dir {
        Some(dir) => dir,
        None => certh::exe_dir()?,
    };
    let config = Config::new(cert_dir).root_ca(args.root_ca).output(args.output);
    match certh::run(&config)? {
        Outcome::Generated(_) => Ok(ExitCode::SUCCESS),
        Outcome::Aborted => Ok(ExitCode::FAILURE),
    }
}
