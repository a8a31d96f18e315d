use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

/// Erreur commune à toutes les routes.
/// Les détails internes (BD, hash, JWT) sont loggés mais jamais renvoyés au client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    /// 404 avec un corps {"message": ...} (liste de favoris vide)
    #[error("{0}")]
    Empty(String),

    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        ApiError::BadRequest(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        ApiError::Unauthorized(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        ApiError::NotFound(msg.into())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) | ApiError::Empty(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::Database(e) => {
                tracing::error!(error = %e, "Database error");
                serde_json::json!({ "error": "Database error" })
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                serde_json::json!({ "error": "Internal server error" })
            }
            ApiError::Empty(msg) => serde_json::json!({ "message": msg }),
            other => serde_json::json!({ "error": other.to_string() }),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_of(err: ApiError) -> serde_json::Value {
        let bytes = to_bytes(err.error_response().into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::bad_request("x").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::unauthorized("x").status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::Empty("x".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn test_database_error_is_not_leaked() {
        let err = ApiError::from(sea_orm::DbErr::Custom("relation \"user\" does not exist".into()));

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(err).await, serde_json::json!({ "error": "Database error" }));
    }

    #[actix_web::test]
    async fn test_client_errors_keep_their_message() {
        let body = body_of(ApiError::not_found("Planet not found")).await;
        assert_eq!(body, serde_json::json!({ "error": "Planet not found" }));

        let body = body_of(ApiError::Empty("No favorites found for this user.".into())).await;
        assert_eq!(body, serde_json::json!({ "message": "No favorites found for this user." }));
    }
}
