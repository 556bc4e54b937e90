//! Symmetric signing algorithms
//!
//! Minting always declares HS256. Verification accepts the whole HMAC family
//! (HS256, HS384, HS512) and recomputes with the declared member; any other
//! declared algorithm, `"none"` included, is rejected before the payload is
//! trusted, per [RFC 8725](https://datatracker.ietf.org/doc/html/rfc8725).

use constant_time_eq::constant_time_eq;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};

use crate::error::{Error, Result};
use crate::utils::base64url;

/// Accepted symmetric signing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Algorithm {
    /// HMAC with SHA-256 (the minting algorithm)
    HS256,
    /// HMAC with SHA-384
    HS384,
    /// HMAC with SHA-512
    HS512,
}

impl Algorithm {
    /// Resolve a declared algorithm name against the accepted family.
    ///
    /// This gate runs before any signature work, so a forged header can
    /// never route verification through an unexpected method.
    pub(crate) fn from_str(s: &str) -> Result<Self> {
        match s {
            "HS256" => Ok(Algorithm::HS256),
            "HS384" => Ok(Algorithm::HS384),
            "HS512" => Ok(Algorithm::HS512),
            other => Err(Error::SigningMethodMismatch(other.to_string())),
        }
    }

    /// Canonical header name.
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Algorithm::HS256 => "HS256",
            Algorithm::HS384 => "HS384",
            Algorithm::HS512 => "HS512",
        }
    }

    /// Compute the raw authentication tag over a signing input.
    pub(crate) fn compute(&self, signing_input: &str, secret: &[u8]) -> Result<Vec<u8>> {
        match self {
            Algorithm::HS256 => {
                let mut mac =
                    Hmac::<Sha256>::new_from_slice(secret).map_err(|_| Error::SignatureInvalid)?;
                mac.update(signing_input.as_bytes());
                Ok(mac.finalize().into_bytes().to_vec())
            }
            Algorithm::HS384 => {
                let mut mac =
                    Hmac::<Sha384>::new_from_slice(secret).map_err(|_| Error::SignatureInvalid)?;
                mac.update(signing_input.as_bytes());
                Ok(mac.finalize().into_bytes().to_vec())
            }
            Algorithm::HS512 => {
                let mut mac =
                    Hmac::<Sha512>::new_from_slice(secret).map_err(|_| Error::SignatureInvalid)?;
                mac.update(signing_input.as_bytes());
                Ok(mac.finalize().into_bytes().to_vec())
            }
        }
    }

    /// Verify a Base64URL-encoded signature with constant-time comparison.
    pub(crate) fn verify(
        &self,
        signing_input: &str,
        signature: &str,
        secret: &[u8],
    ) -> Result<()> {
        let provided_signature = base64url::decode_bytes(signature)?;
        let expected_signature = self.compute(signing_input, secret)?;

        if provided_signature.len() != expected_signature.len() {
            return Err(Error::SignatureInvalid);
        }

        if constant_time_eq(&provided_signature, &expected_signature) {
            Ok(())
        } else {
            Err(Error::SignatureInvalid)
        }
    }
}
