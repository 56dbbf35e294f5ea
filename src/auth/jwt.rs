use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::ExposeSecret;

use crate::{config::Jwt, error::Error};

use super::error::AuthError;

const ALGORITHM: Algorithm = Algorithm::HS256;

#[derive(serde::Deserialize, serde::Serialize, Debug)]
pub struct Claim {
    pub sub: String,
    pub exp: usize,
    pub iat: usize,
}

impl Claim {
    pub fn new(user_id: i64, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Claim {
            sub: user_id.to_string(),
            exp: (issued_at + ttl).timestamp() as usize,
            iat: issued_at.timestamp() as usize,
        }
    }
}

pub fn encode_jwt(user_id: i64, jwt: &Jwt) -> Result<String, Error> {
    let ttl = jwt.ttl().ok_or_else(|| {
        Error::Other(anyhow::anyhow!(
            "jwt.expire_minutes {} is out of range",
            jwt.expire_minutes
        ))
    })?;
    let claim = Claim::new(user_id, Utc::now(), ttl);

    sign_claim(&claim, jwt)
}

pub fn sign_claim(claim: &Claim, jwt: &Jwt) -> Result<String, Error> {
    encode(
        &Header::new(ALGORITHM),
        claim,
        &EncodingKey::from_secret(jwt.secret.expose_secret().as_bytes()),
    )
    .map_err(|e| Error::Auth(AuthError::JwtError(e)))
}

/// Resolves a token to the user id it was issued for.
///
/// Any failure (malformed token, bad signature, expiry, foreign algorithm or
/// a non-numeric subject) yields `None`.
pub fn validate_token(jwt_token: &str, jwt: &Jwt) -> Option<i64> {
    let mut validation = Validation::new(ALGORITHM);
    validation.leeway = 0;

    let token_data = decode::<Claim>(
        jwt_token,
        &DecodingKey::from_secret(jwt.secret.expose_secret().as_bytes()),
        &validation,
    )
    .ok()?;

    token_data.claims.sub.parse().ok()
}
