//! Verifying tokens
//!
//! Rejection points in order: structure, declared algorithm, signature,
//! claims decode, expiry presence, expiry format, expiry instant. The first
//! failure wins, and claims never leave the function alongside an error.

use crate::claims::{self, Claims};
use crate::clock::{Clock, SystemClock};
use crate::error::{Error, Result};
use crate::token::ParsedToken;

/// Verify a token and decode its claims.
///
/// Succeeds only when the token is structurally sound, declares a symmetric
/// HMAC algorithm, carries a valid signature under `secret`, and holds an
/// expiry strictly in the future. The returned map is the full claims set,
/// the `expiry` claim included.
///
/// # Example
/// ```ignore
/// let claims = verify_and_decode(&token, b"somesecret")?;
/// println!("subject: {:?}", claims.get("sub"));
/// ```
pub fn verify_and_decode(token: &str, secret: &[u8]) -> Result<Claims> {
    verify_and_decode_with_clock(token, secret, &SystemClock)
}

/// [`verify_and_decode`] with an explicit clock, for deterministic expiry in
/// tests.
pub fn verify_and_decode_with_clock(
    token: &str,
    secret: &[u8],
    clock: &impl Clock,
) -> Result<Claims> {
    let verified = ParsedToken::from_string(token)?.verify_signature(secret)?;
    let decoded = verified.into_claims()?;

    let expiry = claims::require_expiry(&decoded)?;
    if expiry <= clock.now() {
        return Err(Error::Expired);
    }

    Ok(decoded)
}
