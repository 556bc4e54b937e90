//! Claims model and the reserved expiry convention
//!
//! Claims are an untyped JSON object owned by the caller on both ends of the
//! token lifecycle. The crate reserves a single key, [`EXPIRY_CLAIM`], which
//! it injects at mint time and requires at verification time; everything
//! else passes through untouched.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Caller-defined claims: string keys mapped to arbitrary JSON values.
pub type Claims = Map<String, Value>;

/// Reserved claim key carrying the token's expiry timestamp.
///
/// Injected on every minted token as an RFC 3339 string and consumed (but
/// not stripped) during verification. A caller-supplied value under this key
/// is overwritten at mint time.
pub const EXPIRY_CLAIM: &str = "expiry";

/// Format an expiry instant as the RFC 3339 string stored in the token.
///
/// Sub-second components are kept only when present, so whole-second expiries
/// stay compact and round-trip exactly.
pub(crate) fn format_expiry(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Extract and parse the expiry claim from a verified claims set.
///
/// An absent or `null` expiry reads as already expired; a present value must
/// be an RFC 3339 string.
pub(crate) fn require_expiry(claims: &Claims) -> Result<DateTime<Utc>> {
    let value = match claims.get(EXPIRY_CLAIM) {
        None | Some(Value::Null) => return Err(Error::Expired),
        Some(value) => value,
    };

    let raw = value
        .as_str()
        .ok_or_else(|| Error::ExpiryUnparsable("expiry claim is not a string".to_string()))?;

    DateTime::parse_from_rfc3339(raw)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|e| Error::ExpiryUnparsable(e.to_string()))
}
