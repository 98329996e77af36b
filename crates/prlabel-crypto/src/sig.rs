use hmac::{Mac, SimpleHmac};
use sha2::Sha256;

use super::errors::CryptoError;

type HmacSha256 = SimpleHmac<Sha256>;

/// Hex-encoded HMAC-SHA256 webhook signature, without its `sha256=` prefix.
pub struct Signature<'a>(pub &'a str);

impl<'a> Signature<'a> {
    /// Check if a signature is valid.
    pub fn is_valid(&self, body: &[u8], secret: &str) -> Result<bool, CryptoError> {
        let decoded_signature =
            hex::decode(self.0).map_err(|_| CryptoError::InvalidSignatureFormat {
                sig: self.0.to_string(),
            })?;

        let mut hmac = Self::hmac(secret)?;
        hmac.update(body);
        Ok(hmac.verify_slice(&decoded_signature).is_ok())
    }

    /// Compute the hex signature of a body.
    pub fn compute(body: &[u8], secret: &str) -> Result<String, CryptoError> {
        let mut hmac = Self::hmac(secret)?;
        hmac.update(body);
        Ok(hex::encode(hmac.finalize().into_bytes()))
    }

    fn hmac(secret: &str) -> Result<HmacSha256, CryptoError> {
        HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| CryptoError::InvalidSecretKey)
    }
}
