use actix_web::{get, web, HttpResponse};
use sea_orm::DatabaseConnection;

use crate::config::Settings;
use crate::error::ApiError;
use crate::services::catalog_service::CatalogService;
use crate::services::ensure_not_empty;

/// GET /people - Tous les personnages
#[get("")]
pub async fn list_people(
    db: web::Data<DatabaseConnection>,
    settings: web::Data<Settings>,
) -> Result<HttpResponse, ApiError> {
    let characters = CatalogService::list_characters(db.get_ref()).await?;
    let characters = ensure_not_empty(characters, settings.empty_list_not_found, || {
        ApiError::not_found("No characters found")
    })?;

    Ok(HttpResponse::Ok().json(characters))
}

/// GET /people/{people_id} - Un personnage
#[get("/{people_id}")]
pub async fn get_person(
    path: web::Path<i32>,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    let character = CatalogService::get_character(db.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(character))
}

/// GET /planets - Toutes les planètes
#[get("")]
pub async fn list_planets(
    db: web::Data<DatabaseConnection>,
    settings: web::Data<Settings>,
) -> Result<HttpResponse, ApiError> {
    let planets = CatalogService::list_planets(db.get_ref()).await?;
    let planets = ensure_not_empty(planets, settings.empty_list_not_found, || {
        ApiError::not_found("No planets found")
    })?;

    Ok(HttpResponse::Ok().json(planets))
}

/// GET /planets/{planet_id} - Une planète
#[get("/{planet_id}")]
pub async fn get_planet(
    path: web::Path<i32>,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    let planet = CatalogService::get_planet(db.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(planet))
}

pub fn people_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/people")
            .service(list_people)
            .service(get_person)
    );
}

pub fn planets_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/planets")
            .service(list_planets)
            .service(get_planet)
    );
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test};
    use serde_json::json;

    use crate::utils::test::TestApp;

    #[actix_web::test]
    async fn test_empty_catalog_is_not_found() {
        let app = TestApp::new().await;
        let service = test::init_service(app.app()).await;

        let req = test::TestRequest::get().uri("/people").to_request();
        let resp = test::call_service(&service, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "No characters found" }));

        let req = test::TestRequest::get().uri("/planets").to_request();
        let resp = test::call_service(&service, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "No planets found" }));
    }

    #[actix_web::test]
    async fn test_empty_catalog_as_empty_array() {
        let mut app = TestApp::new().await;
        app.settings.empty_list_not_found = false;
        let service = test::init_service(app.app()).await;

        let req = test::TestRequest::get().uri("/planets").to_request();
        let resp = test::call_service(&service, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, json!([]));
    }

    #[actix_web::test]
    async fn test_list_and_get_people() {
        let app = TestApp::new().await;
        app.seed_character(1, "Luke Skywalker").await;
        app.seed_character(2, "Leia Organa").await;
        let service = test::init_service(app.app()).await;

        let req = test::TestRequest::get().uri("/people").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&service, req).await;
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Luke Skywalker", "Leia Organa"]);

        let req = test::TestRequest::get().uri("/people/2").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&service, req).await;
        assert_eq!(
            body,
            json!({
                "id": 2,
                "name": "Leia Organa",
                "gender": "male",
                "birth_year": "19BBY",
                "eye_color": "blue"
            })
        );
    }

    #[actix_web::test]
    async fn test_get_missing_rows() {
        let app = TestApp::new().await;
        let service = test::init_service(app.app()).await;

        let req = test::TestRequest::get().uri("/people/42").to_request();
        let resp = test::call_service(&service, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Character not found");

        let req = test::TestRequest::get().uri("/planets/42").to_request();
        let resp = test::call_service(&service, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Planet not found");
    }

    #[actix_web::test]
    async fn test_get_planet() {
        let app = TestApp::new().await;
        app.seed_planet(1, "Tatooine").await;
        let service = test::init_service(app.app()).await;

        let req = test::TestRequest::get().uri("/planets/1").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&service, req).await;
        assert_eq!(body["name"], "Tatooine");
        assert_eq!(body["climate"], "arid");
    }

    #[actix_web::test]
    async fn test_non_numeric_id_is_bad_request() {
        let app = TestApp::new().await;
        let service = test::init_service(app.app()).await;

        let req = test::TestRequest::get().uri("/planets/abc").to_request();
        let resp = test::call_service(&service, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
