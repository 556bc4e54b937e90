//! # claimseal - HMAC-Signed Claim Tokens with Enforced Expiry
//!
//! > Minimal minting and verification of self-contained, signed claim tokens.
//!
//! **claimseal** grants time-bounded, tamper-evident credentials without a
//! central session store. Arbitrary caller claims are sealed together with a
//! mandatory expiry under an HMAC-SHA256 signature, and recovered later only
//! if both the signature and the expiry still hold.
//!
//! ## Overview
//!
//! A token is three Base64URL segments joined by `.`: a header declaring the
//! signing algorithm, a JSON object holding the caller's claims plus the
//! injected `expiry` field (an RFC 3339 timestamp), and an HMAC-SHA256 tag
//! over the first two segments. The format matches the JWS compact
//! serialization, so tokens interoperate with standard JWT tooling sharing
//! the same secret.
//!
//! Two operations make up the entire surface. [`create`] stamps
//! `now + lifetime` into the claims and signs them; [`verify_and_decode`]
//! re-derives the tag, compares it in constant time, and releases the claims
//! only when the expiry is still strictly in the future. There is no key
//! management, no revocation, no transport: callers bring the shared secret
//! and move the opaque string however they like.
//!
//! ## Quick Start
//!
//! ```ignore
//! use claimseal::{create, verify_and_decode, Claims};
//! use chrono::Duration;
//! use serde_json::json;
//!
//! let mut claims = Claims::new();
//! claims.insert("keyTest".to_string(), json!("valTest"));
//!
//! let token = create(&claims, Duration::hours(1), b"somesecret")?;
//! let decoded = verify_and_decode(&token, b"somesecret")?;
//!
//! assert_eq!(decoded.get("keyTest"), Some(&json!("valTest")));
//! assert!(decoded.contains_key("expiry"));
//! ```
//!
//! ## Verification Flow
//!
//! Each stage is a rejection point; the first failure wins:
//!
//! ```text
//! token string
//!     │ parse envelope (three segments, header JSON)   -> MalformedToken
//!     ▼
//! ParsedToken (payload decoded; internal, untrusted)
//!     │ algorithm gate (HMAC family only)              -> SigningMethodMismatch
//!     │ recompute + constant-time compare              -> SignatureInvalid
//!     ▼
//! VerifiedToken (payload trusted; internal)
//!     │ decode claims JSON                             -> MalformedToken
//!     │ expiry present, RFC 3339, strictly future      -> Expired / ExpiryUnparsable
//!     ▼
//! Claims (public result)
//! ```
//!
//! ## Security
//!
//! ### Algorithm Pinning
//!
//! The declared algorithm is checked against the symmetric HMAC family
//! before any part of the payload is trusted. A forged header cannot route
//! verification through an asymmetric method or downgrade it.
//!
//! ### "none" Algorithm Rejection
//!
//! Unsigned tokens (`"alg":"none"`) are always rejected per
//! [RFC 8725](https://datatracker.ietf.org/doc/html/rfc8725).
//!
//! ### Timing Attack Protection
//!
//! Signature comparison uses the [`constant_time_eq`](https://crates.io/crates/constant_time_eq)
//! crate, preventing timing-based tag recovery.
//!
//! ### Secrets
//!
//! An empty secret is rejected at mint time ([`Error::WeakSecret`]). No
//! entropy checks beyond that; secret quality is the caller's bar to clear.
//!
//! ## References
//!
//! - [RFC 7515](https://datatracker.ietf.org/doc/html/rfc7515) — JSON Web Signature (JWS)
//! - [RFC 7519](https://datatracker.ietf.org/doc/html/rfc7519) — JSON Web Token (JWT)
//! - [RFC 8725](https://datatracker.ietf.org/doc/html/rfc8725) — JSON Web Signature Best Practices
//! - [RFC 3339](https://datatracker.ietf.org/doc/html/rfc3339) — Date and Time on the Internet

// Core modules
mod claims;
mod clock;
mod error;

// Internal modules
pub(crate) mod algorithm;
pub(crate) mod header;
pub(crate) mod token;
pub(crate) mod utils;

// Entry points
mod issue;
mod verify;

// ============================================================================
// PUBLIC API - Only these items are exposed to users
// ============================================================================

pub use claims::{Claims, EXPIRY_CLAIM};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, Result};
pub use issue::{create, create_with_clock};
pub use verify::{verify_and_decode, verify_and_decode_with_clock};
