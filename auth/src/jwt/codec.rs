use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Issues and validates signed session tokens.
///
/// Owns the pre-shared symmetric key and the signing algorithm (HS256).
/// The same key verifies every token; there is no rotation and no per-tenant
/// key material.
pub struct JwtCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    lifetime: Duration,
}

impl JwtCodec {
    /// Create a codec from the signing secret and token lifetime.
    ///
    /// The secret must be at least 256 bits (32 bytes) for HS256. Store it in
    /// configuration or a vault, never in code.
    pub fn new(secret: &[u8], lifetime: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            lifetime,
        }
    }

    /// Issue a token asserting `subject` with `role`, valid from now until
    /// now plus the configured lifetime.
    ///
    /// # Errors
    /// * `EncodingFailed` - serialization or signing failed
    pub fn issue(&self, subject: &str, role: &str) -> Result<String, TokenError> {
        let claims = Claims::new(subject, role, Utc::now(), self.lifetime);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify a token and extract its claims.
    ///
    /// Checks run in order: signature, then expiry, then claim shape. The
    /// error variant reports which check failed.
    ///
    /// # Errors
    /// * `InvalidSignature` - signature check failed
    /// * `Expired` - correctly signed but past `exp`
    /// * `Malformed` - structure or claim set cannot be parsed
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // Exactly `now >= exp` counts as expired.
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                    _ => TokenError::Malformed(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}
