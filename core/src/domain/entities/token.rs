//! Session token entities: JWT claims and the issued token wrapper.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::User;

/// Claims carried by a signed session token
///
/// The token is stateless: validity is fully determined by the signature and
/// the `exp` claim, there is no server-side session record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's id
    pub sub: String,

    /// Email of the authenticated user
    pub email: String,

    /// Issued-at timestamp (seconds since epoch)
    pub iat: i64,

    /// Expiry timestamp (seconds since epoch)
    pub exp: i64,

    /// Unique token id
    pub jti: String,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,
}

impl Claims {
    /// Builds the claims for a freshly issued session token
    pub fn new(user: &User, ttl_seconds: i64, issuer: &str, audience: &str) -> Self {
        let now = Utc::now();
        Self {
            sub: user.id.to_string(),
            email: user.email.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(ttl_seconds)).timestamp(),
            jti: Uuid::new_v4().to_string(),
            iss: issuer.to_string(),
            aud: audience.to_string(),
        }
    }

    /// Builds fresh claims for the same identity, extending the session by
    /// another full TTL
    pub fn renewed(&self, ttl_seconds: i64) -> Self {
        let now = Utc::now();
        Self {
            sub: self.sub.clone(),
            email: self.email.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(ttl_seconds)).timestamp(),
            jti: Uuid::new_v4().to_string(),
            iss: self.iss.clone(),
            aud: self.aud.clone(),
        }
    }

    /// Parses the subject claim back into a user id
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// A signed session token together with its lifetime
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedToken {
    /// The encoded JWT
    pub token: String,

    /// Seconds until the token expires
    pub expires_in: i64,
}
