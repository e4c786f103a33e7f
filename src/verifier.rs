//! File-level signature verification
//!
//! Loads the public key, signature and data files, decodes them and runs a
//! single SHA256withRSA check. Each call is self-contained; nothing is cached
//! between runs.

use crate::crypto::{PublicKey, SignatureVerifier};
use crate::encoding::{decode_data_hex, decode_signature_base64};
use crate::error::{InputFile, VerificationError, VerificationResult};
use log::{debug, info};
use std::fmt;
use std::fs;
use std::path::Path;

/// Outcome of a completed verification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationOutcome {
    pub verifies: bool,
}

impl From<bool> for VerificationOutcome {
    fn from(verifies: bool) -> Self {
        Self { verifies }
    }
}

impl fmt::Display for VerificationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "signature verifies: {}", self.verifies)
    }
}

/// SHA256withRSA verifier over key, signature and data inputs
#[derive(Debug, Default, Clone, Copy)]
pub struct Verifier;

impl Verifier {
    pub fn new() -> Self {
        Self
    }

    /// Verify using the three input files.
    ///
    /// * `public_key_path` - DER X.509 SubjectPublicKeyInfo RSA key
    /// * `signature_path` - base64 signature text
    /// * `data_path` - hex text of the signed message bytes
    pub fn verify_files(
        &self,
        public_key_path: &Path,
        signature_path: &Path,
        data_path: &Path,
    ) -> VerificationResult<bool> {
        let key_der = read_input(InputFile::PublicKey, public_key_path)?;
        let public_key = PublicKey::from_x509_der(&key_der)?;
        debug!(
            "Loaded RSA public key with {}-byte modulus",
            public_key.modulus_len()
        );

        let signature_text = read_text_input(InputFile::Signature, signature_path)?;
        let signature = decode_signature_base64(&signature_text)?;

        let data_text = read_text_input(InputFile::Data, data_path)?;
        let message = decode_data_hex(&data_text)?;

        self.verify_decoded(&public_key, &signature, &message)
    }

    /// Verify inputs that are already in memory, in their file encodings
    pub fn verify_bytes(
        &self,
        public_key_der: &[u8],
        signature_base64: &str,
        data_hex: &str,
    ) -> VerificationResult<bool> {
        let public_key = PublicKey::from_x509_der(public_key_der)?;
        let signature = decode_signature_base64(signature_base64)?;
        let message = decode_data_hex(data_hex)?;
        self.verify_decoded(&public_key, &signature, &message)
    }

    fn verify_decoded(
        &self,
        public_key: &PublicKey,
        signature: &[u8],
        message: &[u8],
    ) -> VerificationResult<bool> {
        let mut context = SignatureVerifier::new(public_key);
        context.update_chunked(message);
        let verifies = context.verify(signature)?;
        info!("{}", VerificationOutcome::from(verifies));
        Ok(verifies)
    }
}

/// Verify a signature from the public key, signature and data file paths
pub fn verify(
    public_key_path: impl AsRef<Path>,
    signature_path: impl AsRef<Path>,
    data_path: impl AsRef<Path>,
) -> VerificationResult<bool> {
    Verifier::new().verify_files(
        public_key_path.as_ref(),
        signature_path.as_ref(),
        data_path.as_ref(),
    )
}

fn read_input(input: InputFile, path: &Path) -> VerificationResult<Vec<u8>> {
    let bytes =
        fs::read(path).map_err(|source| VerificationError::input(input, path, source))?;
    debug!("Read {} bytes from {} {}", bytes.len(), input, path.display());
    Ok(bytes)
}

fn read_text_input(input: InputFile, path: &Path) -> VerificationResult<String> {
    let bytes = read_input(input, path)?;
    String::from_utf8(bytes).map_err(|e| VerificationError::Utf8 {
        input,
        source: e.utf8_error(),
    })
}
