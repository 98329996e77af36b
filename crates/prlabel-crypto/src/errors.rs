//! Crypto errors.

use thiserror::Error;

/// Crypto error.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Jwt creation error: {source}")]
    JwtCreationFailed { source: jsonwebtoken::errors::Error },
    #[error("Jwt decoding error: {source}")]
    JwtDecodingFailed { source: jsonwebtoken::errors::Error },
    #[error("Invalid encoding key: {source}")]
    InvalidEncodingKey { source: jsonwebtoken::errors::Error },
    #[error("Invalid signature format {sig}")]
    InvalidSignatureFormat { sig: String },
    #[error("Invalid HMAC secret key")]
    InvalidSecretKey,
}

/// Result alias for `CryptoError`.
pub type Result<T, E = CryptoError> = ::core::result::Result<T, E>;
