//pour les corps de requête et les réponses structurées
use serde::{Deserialize, Serialize};

use super::favorite::FavoriteTarget;

// Champs optionnels: un champ absent doit donner un 400 explicite,
// pas l'erreur de désérialisation d'Actix
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

// Réponse après login
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user_id: i32,
}

// Corps des routes /favorite/...
#[derive(Debug, Deserialize)]
pub struct FavoriteRequest {
    pub user_id: Option<i32>,
}

// 1 favori résolu: {"type": "planet", "id": 1, "name": "Tatooine"}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteView {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: i32,
    pub name: String,
}

impl FavoriteView {
    pub fn new(target: FavoriteTarget, name: String) -> Self {
        FavoriteView {
            kind: target.kind().to_string(),
            id: target.id(),
            name,
        }
    }
}
