//! Command handlers for the versig binary

use super::args::Cli;
use crate::verifier::{Verifier, VerificationOutcome};
use log::{debug, error};
use std::io::{self, Write};
use std::process::ExitCode;

/// Exit status when verification ran to completion, whatever the result
pub const EXIT_OK: u8 = 0;
/// Exit status when verification could not be performed
pub const EXIT_FAILURE: u8 = 1;

/// Run a verification and write its single result or diagnostic line.
///
/// A `false` outcome is printed on `out` and still exits successfully; only
/// errors go to `err` with a failure status.
pub fn handle_verify(cli: &Cli, out: &mut impl Write, err: &mut impl Write) -> u8 {
    let result = Verifier::new().verify_files(
        &cli.public_key_file,
        &cli.signature_file,
        &cli.data_file,
    );

    match result {
        Ok(verifies) => {
            if let Err(e) = writeln!(out, "{}", VerificationOutcome::from(verifies)) {
                error!("Failed to write result: {}", e);
                return EXIT_FAILURE;
            }
            EXIT_OK
        }
        Err(e) => {
            debug!("Verification failed with {:?} error", e.kind());
            if let Err(write_err) = writeln!(err, "Caught exception {}", e) {
                error!("Failed to write diagnostic: {}", write_err);
            }
            EXIT_FAILURE
        }
    }
}

/// Entry point used by the binary
pub fn run(cli: Cli) -> ExitCode {
    ExitCode::from(handle_verify(&cli, &mut io::stdout(), &mut io::stderr()))
}
