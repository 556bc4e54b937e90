//! Token envelope parsing and the verification states
//!
//! A token moves through two states: [`ParsedToken`] holds the split,
//! decoded envelope with an untrusted payload; [`VerifiedToken`] exists only
//! after the declared algorithm passed the family gate and the signature
//! checked out, and is the only place claims JSON gets decoded.

use crate::claims::Claims;
use crate::error::{Error, Result};
use crate::header::TokenHeader;
use crate::utils::base64url;

/// A token that has been split and decoded but not yet verified.
///
/// At this stage the header is parsed and the payload is decoded to UTF-8,
/// but nothing in the payload can be trusted.
pub(crate) struct ParsedToken {
    header: TokenHeader,
    header_b64: String,
    payload_b64: String,
    signature_b64: String,
    raw_payload: String,
}

impl ParsedToken {
    /// Parse a token string of the form `header.payload.signature`.
    pub(crate) fn from_string(token: &str) -> Result<Self> {
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 3 {
            return Err(Error::MalformedToken(
                "expected three base64url segments separated by '.'".to_string(),
            ));
        }

        let header_b64 = parts[0].to_string();
        let payload_b64 = parts[1].to_string();
        let signature_b64 = parts[2].to_string();

        let header_json = base64url::decode_string(&header_b64)?;
        let header: TokenHeader = serde_json::from_str(&header_json)
            .map_err(|e| Error::MalformedToken(format!("header JSON invalid: {e}")))?;

        // Decoded up front, but claims are not parsed until after verification
        let raw_payload = base64url::decode_string(&payload_b64)?;

        Ok(Self {
            header,
            header_b64,
            payload_b64,
            signature_b64,
            raw_payload,
        })
    }

    /// Signing input: `header_b64.payload_b64`.
    fn signing_input(&self) -> String {
        format!("{}.{}", self.header_b64, self.payload_b64)
    }

    /// Run the algorithm gate, then the signature check.
    ///
    /// Consumes the parsed stage so claims can only ever be read out of a
    /// [`VerifiedToken`].
    pub(crate) fn verify_signature(self, secret: &[u8]) -> Result<VerifiedToken> {
        let algorithm = self.header.algorithm()?;
        algorithm.verify(&self.signing_input(), &self.signature_b64, secret)?;

        Ok(VerifiedToken {
            raw_payload: self.raw_payload,
        })
    }
}

/// A token whose signature has been verified against the shared secret.
pub(crate) struct VerifiedToken {
    raw_payload: String,
}

impl VerifiedToken {
    /// Decode the payload into the caller-visible claims map.
    pub(crate) fn into_claims(self) -> Result<Claims> {
        serde_json::from_str(&self.raw_payload)
            .map_err(|e| Error::MalformedToken(format!("claims JSON invalid: {e}")))
    }
}
