//! Token header

use serde::{Deserialize, Serialize};

use crate::algorithm::Algorithm;
use crate::error::Result;

/// Signed-token header declaring how the payload is protected.
///
/// Decoding tolerates unknown fields (`kid` and friends) and a missing
/// `typ`; only `alg` is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct TokenHeader {
    /// Algorithm declared by the producer
    #[serde(rename = "alg")]
    pub algorithm: String,

    /// Token type (typically "JWT")
    #[serde(rename = "typ", skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

impl TokenHeader {
    /// Header stamped onto every minted token.
    pub(crate) fn hs256() -> Self {
        Self {
            algorithm: Algorithm::HS256.as_str().to_string(),
            token_type: Some("JWT".to_string()),
        }
    }

    /// Resolve the declared algorithm against the accepted symmetric family.
    pub(crate) fn algorithm(&self) -> Result<Algorithm> {
        Algorithm::from_str(&self.algorithm)
    }
}
