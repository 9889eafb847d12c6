//! Session token issuance and verification
//!
//! Sessions are signed, stateless HS256 tokens: there is no server-side
//! session table and no revocation before expiry. Validity is fully
//! determined by the signature and the claims.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use lex_shared::config::JwtConfig;

use crate::domain::entities::token::{Claims, IssuedToken};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult, TokenError};

/// Service for issuing and verifying session tokens
pub struct TokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service from the signing configuration
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues a session token for an authenticated user
    pub fn issue(&self, user: &User) -> DomainResult<IssuedToken> {
        let claims = Claims::new(
            user,
            self.config.ttl_seconds,
            &self.config.issuer,
            &self.config.audience,
        );

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))?;

        Ok(IssuedToken {
            token,
            expires_in: self.config.ttl_seconds,
        })
    }

    /// Re-issues a token for already-verified claims, sliding the session
    /// forward by a full TTL
    ///
    /// Sessions renew implicitly: every authenticated request gets a fresh
    /// token alongside its response, so a session only expires after a full
    /// TTL of inactivity.
    pub fn renew(&self, claims: &Claims) -> DomainResult<IssuedToken> {
        let claims = claims.renewed(self.config.ttl_seconds);

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))?;

        Ok(IssuedToken {
            token,
            expires_in: self.config.ttl_seconds,
        })
    }

    /// Verifies a session token and returns its claims
    ///
    /// Callers must go through this before trusting any identity supplied
    /// by the client.
    pub fn verify(&self, token: &str) -> DomainResult<Claims> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    DomainError::Token(TokenError::TokenExpired)
                }
                _ => DomainError::Token(TokenError::InvalidToken),
            }
        })?;

        Ok(data.claims)
    }
}
