use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use futures::future::{ready, Ready};

use crate::config::Settings;
use crate::error::ApiError;
use crate::utils::jwt;

/// Identité extraite du bearer token
/// Utilisée comme extracteur dans les routes protégées
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: i32,
    pub email: String,
}

impl FromRequest for AuthUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract(req))
    }
}

fn extract(req: &HttpRequest) -> Result<AuthUser, ApiError> {
    let settings = req
        .app_data::<web::Data<Settings>>()
        .ok_or_else(|| ApiError::Internal("Settings not registered".to_string()))?;

    // 1. Extraire le header Authorization
    let auth_header = req
        .headers()
        .get("Authorization")
        .ok_or_else(|| ApiError::unauthorized("Missing Authorization header"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::unauthorized("Invalid Authorization header"))?;

    // 2. Format: "Bearer <token>"
    let token = auth_str.strip_prefix("Bearer ").ok_or_else(|| {
        ApiError::unauthorized("Invalid Authorization format (expected: Bearer <token>)")
    })?;

    // 3. Vérifier le token JWT
    let claims = jwt::verify_token(token.trim(), &settings.jwt_secret).map_err(|e| {
        tracing::warn!(error = %e, "Rejected bearer token");
        ApiError::unauthorized("Invalid token")
    })?;

    Ok(AuthUser {
        user_id: claims.sub,
        email: claims.email,
    })
}
