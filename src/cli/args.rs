//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

/// Verify an RSA PKCS#1 v1.5 (SHA-256) signature over hex-encoded data
#[derive(Parser, Debug)]
#[command(name = "versig", author, version, about, long_about = None)]
pub struct Cli {
    /// DER-encoded X.509 SubjectPublicKeyInfo RSA public key
    #[arg(value_name = "PUBLIC_KEY_FILE", required = true)]
    pub public_key_file: PathBuf,

    /// File containing the base64-encoded signature
    #[arg(value_name = "SIGNATURE_FILE", required = true)]
    pub signature_file: PathBuf,

    /// File containing the hex-encoded signed data
    #[arg(value_name = "DATA_FILE", required = true)]
    pub data_file: PathBuf,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_three_positionals() {
        let cli = Cli::try_parse_from(["versig", "key.der", "sig.b64", "data.hex"]).unwrap();
        assert_eq!(cli.public_key_file, PathBuf::from("key.der"));
        assert_eq!(cli.signature_file, PathBuf::from("sig.b64"));
        assert_eq!(cli.data_file, PathBuf::from("data.hex"));
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_too_few_arguments() {
        let err = Cli::try_parse_from(["versig", "key.der", "sig.b64"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_too_many_arguments() {
        let err = Cli::try_parse_from(["versig", "a", "b", "c", "d"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_verbosity_count() {
        let cli = Cli::try_parse_from(["versig", "-vv", "a", "b", "c"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
