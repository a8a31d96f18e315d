use jsonwebtoken::{encode, decode, Header, Validation, EncodingKey, DecodingKey, Algorithm};
use serde::{Deserialize, Serialize};
use chrono::{Utc, Duration};
use thiserror::Error;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32,        // user_id
    pub email: String,
    pub exp: i64,        // expiration timestamp
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Failed to calculate expiration")]
    Expiration,
    #[error(transparent)]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

/// Génère un JWT (HS256) pour un utilisateur, valide `ttl_hours` heures
pub fn generate_token(
    user_id: i32,
    email: &str,
    secret: &str,
    ttl_hours: i64,
) -> Result<String, TokenError> {
    let ttl = Duration::try_hours(ttl_hours).ok_or(TokenError::Expiration)?;
    let expiration = Utc::now()
        .checked_add_signed(ttl)
        .ok_or(TokenError::Expiration)?
        .timestamp();

    let claims = Claims {
        sub: user_id,
        email: email.to_string(),
        exp: expiration,
    };

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )?)
}

/// Vérifie la signature et l'expiration, puis décode le token
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, TokenError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::new(Algorithm::HS256),
    )?;

    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_generate_and_verify_token() {
        let token = generate_token(123, "luke@rebels.org", SECRET, 24).unwrap();
        let claims = verify_token(&token, SECRET).unwrap();

        assert_eq!(claims.sub, 123);
        assert_eq!(claims.email, "luke@rebels.org");
    }

    #[test]
    fn test_invalid_token() {
        let result = verify_token("invalid.token.here", SECRET);
        assert!(result.is_err());
    }

    #[test]
    fn test_wrong_secret() {
        let token = generate_token(123, "luke@rebels.org", SECRET, 24).unwrap();
        assert!(verify_token(&token, "other-secret").is_err());
    }

    #[test]
    fn test_huge_ttl_is_an_error() {
        let result = generate_token(1, "luke@rebels.org", SECRET, i64::MAX);
        assert!(matches!(result, Err(TokenError::Expiration)));
    }

    #[test]
    fn test_expired_token() {
        // Au-delà de la marge (leeway) de 60s par défaut
        let token = generate_token(123, "luke@rebels.org", SECRET, -2).unwrap();
        assert!(verify_token(&token, SECRET).is_err());
    }
}
