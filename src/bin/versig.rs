use clap::Parser;
use log::debug;
use std::process::ExitCode;
use versig::cli::{self, Cli};
use versig::logging::{self, LogConfig};

/// Main entry point for the versig CLI.
///
/// Prints `signature verifies: <bool>` on stdout and exits 0 when the check
/// completes, prints `Caught exception <description>` on stderr and exits 1
/// when it cannot be performed. Argument errors exit 2 with clap's usage.
fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(&LogConfig::from_verbosity(cli.verbose, cli.quiet)).ok();

    debug!(
        "Verifying {} with key {} over {}",
        cli.signature_file.display(),
        cli.public_key_file.display(),
        cli.data_file.display()
    );
    cli::run(cli)
}
