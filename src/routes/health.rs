use actix_web::{get, web, HttpResponse};
use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::models::health::HealthResponse;

#[get("/health")]
pub async fn health_check(db: web::Data<DatabaseConnection>) -> HttpResponse {
    let database = match db.ping().await {
        Ok(()) => "ok",
        Err(e) => {
            tracing::error!(error = %e, "Health check: database unreachable");
            "unreachable"
        }
    };

    let response = HealthResponse {
        status: "ok".to_string(),
        database: database.to_string(),
        time: Utc::now(),
    };

    HttpResponse::Ok().json(response)
}

#[cfg(test)]
mod tests {
    use actix_web::test;

    use crate::utils::test::TestApp;

    #[actix_web::test]
    async fn test_health_check() {
        let app = TestApp::new().await;
        let service = test::init_service(app.app()).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&service, req).await;

        assert_eq!(body["status"], "ok");
        assert_eq!(body["database"], "ok");
    }
}
