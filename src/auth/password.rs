//! Password hashing and verification.
//!
//! Wraps bcrypt: salted, deliberately slow, and with a tunable cost
//! factor. Verification is constant-time with respect to the digest
//! contents, so timing does not leak how many prefix bytes matched.

use bcrypt::BcryptError;

pub use bcrypt::DEFAULT_COST;

/// Hash a plaintext password with the given cost factor.
pub fn hash_password(plaintext: &str, cost: u32) -> Result<String, BcryptError> {
    bcrypt::hash(plaintext, cost)
}

/// Verify a plaintext password against a stored bcrypt digest.
///
/// Errors indicate a malformed digest, not a wrong password.
pub fn verify_password(plaintext: &str, digest: &str) -> Result<bool, BcryptError> {
    bcrypt::verify(plaintext, digest)
}
