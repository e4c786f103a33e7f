//! RSA PKCS#1 v1.5 / SHA-256 signature verification

use crate::error::{VerificationError, VerificationResult};
use log::debug;
use rsa::pkcs1;
use rsa::pkcs1v15::{Signature, VerifyingKey};
use rsa::pkcs8::der::Decode;
use rsa::pkcs8::spki::SubjectPublicKeyInfoRef;
use rsa::signature::DigestVerifier;
use rsa::traits::PublicKeyParts;
use rsa::{BigUint, RsaPublicKey};
use sha2::{Digest, Sha256};
use std::fmt;

/// Number of message bytes fed to the digest per update
pub const UPDATE_CHUNK_SIZE: usize = 1024;

/// Largest accepted modulus, in bits
pub const MAX_MODULUS_BITS: usize = 16384;

/// An RSA public key decoded from an X.509 SubjectPublicKeyInfo structure
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    inner: RsaPublicKey,
}

impl PublicKey {
    /// Decode an RSA public key from DER-encoded X.509 SubjectPublicKeyInfo.
    ///
    /// Fails for malformed DER and for keys whose algorithm identifier is
    /// not `rsaEncryption`. Moduli up to [`MAX_MODULUS_BITS`] are accepted.
    pub fn from_x509_der(spki: &[u8]) -> VerificationResult<Self> {
        let info = SubjectPublicKeyInfoRef::from_der(spki).map_err(invalid_key)?;
        info.algorithm.assert_algorithm_oid(pkcs1::ALGORITHM_OID)?;

        let key_bytes = info
            .subject_public_key
            .as_bytes()
            .ok_or_else(|| invalid_key("subject public key is not octet aligned"))?;
        let rsa_key = pkcs1::RsaPublicKey::try_from(key_bytes).map_err(invalid_key)?;

        let n = BigUint::from_bytes_be(rsa_key.modulus.as_bytes());
        let e = BigUint::from_bytes_be(rsa_key.public_exponent.as_bytes());
        let inner = RsaPublicKey::new_with_max_size(n, e, MAX_MODULUS_BITS).map_err(invalid_key)?;
        Ok(Self { inner })
    }

    /// Modulus length in bytes, which is also the expected signature length
    pub fn modulus_len(&self) -> usize {
        self.inner.size()
    }

    /// Get the inner RsaPublicKey
    pub fn inner(&self) -> &RsaPublicKey {
        &self.inner
    }
}

fn invalid_key(err: impl fmt::Display) -> VerificationError {
    VerificationError::InvalidKey {
        message: err.to_string(),
    }
}

/// Incremental SHA256withRSA verification context.
///
/// Message bytes are hashed as they arrive through [`update`](Self::update);
/// [`verify`](Self::verify) consumes the context and checks the signature
/// against the accumulated digest.
pub struct SignatureVerifier {
    verifying_key: VerifyingKey<Sha256>,
    modulus_len: usize,
    digest: Sha256,
    bytes_fed: usize,
}

impl SignatureVerifier {
    /// Initialise a verification context for the given key
    pub fn new(public_key: &PublicKey) -> Self {
        Self {
            verifying_key: VerifyingKey::<Sha256>::new(public_key.inner().clone()),
            modulus_len: public_key.modulus_len(),
            digest: Sha256::new(),
            bytes_fed: 0,
        }
    }

    /// Feed more message bytes
    pub fn update(&mut self, data: &[u8]) {
        self.digest.update(data);
        self.bytes_fed += data.len();
    }

    /// Feed a whole message in [`UPDATE_CHUNK_SIZE`] pieces
    pub fn update_chunked(&mut self, data: &[u8]) {
        let mut chunks = 0usize;
        for chunk in data.chunks(UPDATE_CHUNK_SIZE) {
            self.update(chunk);
            chunks += 1;
        }
        debug!("Fed {} message bytes in {} chunk(s)", data.len(), chunks);
    }

    /// Check `signature` against everything fed so far.
    ///
    /// Returns `Ok(false)` when the signature does not match. A signature
    /// whose length differs from the modulus length is rejected as a
    /// malformed signature rather than reported as a mismatch.
    pub fn verify(self, signature: &[u8]) -> VerificationResult<bool> {
        if signature.len() != self.modulus_len {
            return Err(VerificationError::Crypto {
                message: format!(
                    "Signature length not correct: got {} but was expecting {}",
                    signature.len(),
                    self.modulus_len
                ),
            });
        }

        let signature = Signature::try_from(signature).map_err(|e| VerificationError::Crypto {
            message: format!("Invalid signature format: {}", e),
        })?;

        debug!(
            "Finalising SHA256withRSA verification over {} bytes",
            self.bytes_fed
        );
        Ok(self
            .verifying_key
            .verify_digest(self.digest, &signature)
            .is_ok())
    }
}
