use actix_web::web;
use sea_orm::*;

use crate::config::Settings;
use crate::error::ApiError;
use crate::models::dto::{LoginRequest, LoginResponse, SignupRequest};
use crate::models::users;
use crate::utils::password::PasswordError;
use crate::utils::{jwt, password};

pub struct UserService;

impl UserService {
    pub async fn list_users(db: &DatabaseConnection) -> Result<Vec<users::Model>, DbErr> {
        users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(db)
            .await
    }

    /// Crée un compte. Le mot de passe est hashé avant insertion.
    pub async fn signup(
        db: &DatabaseConnection,
        request: SignupRequest,
    ) -> Result<users::Model, ApiError> {
        let email = required(request.email.as_deref(), "email")?;
        let plain_password = required_password(request.password.as_deref())?;

        // Hash hors transaction et hors worker async (lent)
        let plain_password = plain_password.to_string();
        let password_hash = web::block(move || password::hash_password(&plain_password))
            .await
            .map_err(|e| ApiError::Internal(format!("Blocking task failed: {}", e)))?
            .map_err(|e| ApiError::Internal(format!("Failed to hash password: {}", e)))?;

        let txn = db.begin().await?;

        // 1. Vérifier si l'email est déjà utilisé
        let existing = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&txn)
            .await?;

        if existing.is_some() {
            return Err(ApiError::bad_request("User already exists"));
        }

        // 2. Créer l'utilisateur
        let new_user = users::ActiveModel {
            email: Set(email.to_string()),
            password: Set(password_hash),
            first_name: Set(request.first_name.unwrap_or_default()),
            last_name: Set(request.last_name.unwrap_or_default()),
            is_active: Set(Some(request.is_active.unwrap_or(true))),
            ..Default::default()
        };

        // Contrainte unique: une inscription concurrente a pu passer entre 1. et 2.
        let user = new_user.insert(&txn).await.map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => ApiError::bad_request("User already exists"),
            _ => ApiError::Database(e),
        })?;

        txn.commit().await?;

        tracing::info!(user_id = user.id, "User signed up");
        Ok(user)
    }

    /// Vérifie les identifiants et émet un bearer token
    pub async fn login(
        db: &DatabaseConnection,
        settings: &Settings,
        request: LoginRequest,
    ) -> Result<LoginResponse, ApiError> {
        let email = required(request.email.as_deref(), "email")?;
        let plain_password = required_password(request.password.as_deref())?;

        let user = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(db)
            .await?
            .ok_or_else(|| ApiError::not_found("User not found"))?;

        let plain_password = plain_password.to_string();
        let stored_hash = user.password.clone();
        let verification = web::block(move || password::verify_password(&plain_password, &stored_hash))
            .await
            .map_err(|e| ApiError::Internal(format!("Blocking task failed: {}", e)))?;

        let is_valid = match verification {
            Ok(valid) => valid,
            // Ligne héritée (mot de passe en clair, autre format): identifiants refusés
            Err(PasswordError::InvalidFormat) => {
                tracing::warn!(user_id = user.id, "Stored password is not a pbkdf2 hash");
                false
            }
            Err(e) => {
                return Err(ApiError::Internal(format!("Password verification error: {}", e)));
            }
        };

        if !is_valid {
            tracing::warn!(user_id = user.id, "Login rejected: wrong password");
            return Err(ApiError::unauthorized("Invalid email or password"));
        }

        let token = jwt::generate_token(
            user.id,
            &user.email,
            &settings.jwt_secret,
            settings.token_ttl_hours,
        )
        .map_err(|e| ApiError::Internal(format!("Failed to generate token: {}", e)))?;

        Ok(LoginResponse {
            token,
            user_id: user.id,
        })
    }
}

// Champ obligatoire: absent ou vide => 400
fn required<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, ApiError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(missing(field)),
    }
}

// Le mot de passe n'est pas trimé: les espaces en font partie
fn required_password(value: Option<&str>) -> Result<&str, ApiError> {
    value.filter(|v| !v.is_empty()).ok_or_else(|| missing("password"))
}

fn missing(field: &str) -> ApiError {
    ApiError::bad_request(format!("Missing required field: {}", field))
}
