//! Minting tokens
//!
//! The issue path: gate the secret, stamp the expiry, encode, sign.

use chrono::Duration;
use serde_json::Value;

use crate::algorithm::Algorithm;
use crate::claims::{self, Claims, EXPIRY_CLAIM};
use crate::clock::{Clock, SystemClock};
use crate::error::{Error, Result};
use crate::header::TokenHeader;
use crate::utils::base64url;

/// Mint a signed token carrying `claims` plus an injected expiry.
///
/// The expiry is `now + lifetime`, stored under the reserved [`EXPIRY_CLAIM`]
/// key as an RFC 3339 string. A caller-supplied value under that key is
/// silently overwritten; the injected expiry always wins. A zero or negative
/// `lifetime` mints a token that is already expired and will never verify.
///
/// The secret must be non-empty; no further strength checks are applied.
///
/// # Example
/// ```ignore
/// let mut claims = Claims::new();
/// claims.insert("keyTest".to_string(), json!("valTest"));
///
/// let token = create(&claims, Duration::hours(1), b"somesecret")?;
/// ```
pub fn create(claims: &Claims, lifetime: Duration, secret: &[u8]) -> Result<String> {
    create_with_clock(claims, lifetime, secret, &SystemClock)
}

/// [`create`] with an explicit clock, for deterministic expiry in tests.
pub fn create_with_clock(
    claims: &Claims,
    lifetime: Duration,
    secret: &[u8],
    clock: &impl Clock,
) -> Result<String> {
    if secret.is_empty() {
        return Err(Error::WeakSecret);
    }

    let expiry = clock
        .now()
        .checked_add_signed(lifetime)
        .ok_or_else(|| Error::ExpiryUnparsable("expiry out of representable range".to_string()))?;

    let mut effective = claims.clone();
    effective.insert(
        EXPIRY_CLAIM.to_string(),
        Value::String(claims::format_expiry(expiry)),
    );

    let header_json = serde_json::to_string(&TokenHeader::hs256())
        .map_err(|e| Error::MalformedToken(e.to_string()))?;
    let payload_json =
        serde_json::to_string(&effective).map_err(|e| Error::MalformedToken(e.to_string()))?;

    let signing_input = format!(
        "{}.{}",
        base64url::encode(&header_json),
        base64url::encode(&payload_json)
    );
    let tag = Algorithm::HS256.compute(&signing_input, secret)?;

    Ok(format!("{}.{}", signing_input, base64url::encode_bytes(&tag)))
}
