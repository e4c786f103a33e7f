//! # versig
//!
//! Verifies RSA PKCS#1 v1.5 signatures with SHA-256 over message bytes.
//!
//! Inputs are a DER X.509 SubjectPublicKeyInfo public key, a base64 signature
//! and the signed message as hex text. A mismatching signature is a normal
//! `Ok(false)` result; only unreadable or malformed inputs are errors.
//!
//! ```no_run
//! # fn main() -> Result<(), versig::VerificationError> {
//! let verifies = versig::verify("key.der", "sig.b64", "data.hex")?;
//! println!("signature verifies: {}", verifies);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod crypto;
pub mod encoding;
pub mod error;
pub mod logging;
pub mod verifier;

pub use error::{ErrorKind, InputFile, VerificationError, VerificationResult};
pub use verifier::{verify, VerificationOutcome, Verifier};
