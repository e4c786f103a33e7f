//! Error types for signature verification

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for verification operations
pub type VerificationResult<T> = Result<T, VerificationError>;

/// The three files a verification run reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFile {
    PublicKey,
    Signature,
    Data,
}

impl fmt::Display for InputFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PublicKey => write!(f, "public key file"),
            Self::Signature => write!(f, "signature file"),
            Self::Data => write!(f, "data file"),
        }
    }
}

/// Coarse classification of a [`VerificationError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A file was missing or unreadable
    Input,
    /// Base64, hex or text decoding failed
    Decoding,
    /// The public key did not parse as an X.509 RSA key
    Key,
    /// The signature primitive rejected its inputs
    Crypto,
}

/// Errors that can occur while verifying a signature.
///
/// A signature that simply does not match is not an error; it is reported
/// as `Ok(false)` by the verifier.
#[derive(Error, Debug)]
pub enum VerificationError {
    /// File missing or unreadable
    #[error("Failed to read {input} '{}': {source}", path.display())]
    Input {
        input: InputFile,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Signature text is not valid base64
    #[error("Invalid base64 signature: {source}")]
    Base64 {
        #[source]
        source: base64::DecodeError,
    },

    /// Data text is not valid hexadecimal
    #[error("Invalid hex data: {source}")]
    Hex {
        #[source]
        source: hex::FromHexError,
    },

    /// A text file did not contain UTF-8
    #[error("{input} is not valid UTF-8 text: {source}")]
    Utf8 {
        input: InputFile,
        #[source]
        source: std::str::Utf8Error,
    },

    /// Key bytes are not an X.509 SubjectPublicKeyInfo RSA key
    #[error("Invalid public key: {message}")]
    InvalidKey { message: String },

    /// The RSA primitive rejected the key, algorithm or signature format
    #[error("Signature operation failed: {message}")]
    Crypto { message: String },
}

impl VerificationError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Input { .. } => ErrorKind::Input,
            Self::Base64 { .. } | Self::Hex { .. } | Self::Utf8 { .. } => ErrorKind::Decoding,
            Self::InvalidKey { .. } => ErrorKind::Key,
            Self::Crypto { .. } => ErrorKind::Crypto,
        }
    }

    pub(crate) fn input(input: InputFile, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Input {
            input,
            path: path.into(),
            source,
        }
    }
}

impl From<base64::DecodeError> for VerificationError {
    fn from(source: base64::DecodeError) -> Self {
        VerificationError::Base64 { source }
    }
}

impl From<hex::FromHexError> for VerificationError {
    fn from(source: hex::FromHexError) -> Self {
        VerificationError::Hex { source }
    }
}

impl From<rsa::pkcs8::spki::Error> for VerificationError {
    fn from(err: rsa::pkcs8::spki::Error) -> Self {
        VerificationError::InvalidKey {
            message: err.to_string(),
        }
    }
}
