use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Lifetime of an issued token, matching the original server's 1h expiry.
const TOKEN_TTL_SECS: usize = 3600;

/// The authenticated identity this server works with. Supplied by the
/// client at login and trusted verbatim from then on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
    pub name: Option<String>,
    pub photo: Option<String>,
}

/// Claims carried in the auth cookie.
///
/// `sub` is the user's email address; display name and avatar ride along so
/// the extractor can hand back the full identity without a store lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The authenticated user's email.
    pub sub: String,
    /// Token expiration (Unix timestamp).
    pub exp: usize,
    /// Token issued-at (Unix timestamp).
    pub iat: Option<usize>,
    /// Display name, if the identity provider supplied one.
    pub name: Option<String>,
    /// Avatar reference, if the identity provider supplied one.
    pub photo: Option<String>,
}

impl Claims {
    pub fn identity(&self) -> Identity {
        Identity {
            email: self.sub.clone(),
            name: self.name.clone(),
            photo: self.photo.clone(),
        }
    }
}

/// Mint an HS256 token over the given identity, valid for one hour.
pub fn mint_token(identity: &Identity, secret: &str) -> Result<String, String> {
    let now = Utc::now().timestamp() as usize;

    let claims = Claims {
        sub: identity.email.clone(),
        exp: now + TOKEN_TTL_SECS,
        iat: Some(now),
        name: identity.name.clone(),
        photo: identity.photo.clone(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| format!("{e:?}"))
}

/// Validate an HS256 token and return the decoded claims.
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, String> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
    .map_err(|e| format!("{e:?}"))
}
