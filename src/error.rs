//! Errors for claimseal

use thiserror::Error;

/// Failures produced while minting or verifying a token.
///
/// Every fallible operation in the crate reports through this enum; nothing
/// panics and nothing is retried internally. Verification errors never carry
/// claims data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ============================================================================
    // Secret Errors
    // ============================================================================
    #[error("secret too weak")]
    WeakSecret,

    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("malformed token: {0}")]
    MalformedToken(String),

    // ============================================================================
    // Algorithm Errors
    // ============================================================================
    #[error("unexpected signing method: {0}")]
    SigningMethodMismatch(String),

    // ============================================================================
    // Signature Errors
    // ============================================================================
    #[error("signature verification failed")]
    SignatureInvalid,

    // ============================================================================
    // Expiry Errors
    // ============================================================================
    #[error("token expired")]
    Expired,

    #[error("error parsing time: {0}")]
    ExpiryUnparsable(String),
}

/// Result type alias for claimseal operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(Error::WeakSecret.to_string(), "secret too weak");
        assert_eq!(Error::Expired.to_string(), "token expired");
        assert_eq!(
            Error::SigningMethodMismatch("none".to_string()).to_string(),
            "unexpected signing method: none"
        );
        assert_eq!(
            Error::SignatureInvalid.to_string(),
            "signature verification failed"
        );
    }

    #[test]
    fn test_detail_is_carried() {
        let err = Error::MalformedToken("expected three segments".to_string());
        assert!(err.to_string().contains("expected three segments"));

        let err = Error::ExpiryUnparsable("not a string".to_string());
        assert!(err.to_string().starts_with("error parsing time"));
    }
}
