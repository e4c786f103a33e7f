//! Cryptographic primitives used by the verifier

pub mod rsa;

pub use self::rsa::{PublicKey, SignatureVerifier, UPDATE_CHUNK_SIZE};
