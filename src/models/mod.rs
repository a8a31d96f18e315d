// ============================================================================
// MODELS - MODULE PRINCIPAL
// ============================================================================
//
// Description:
//   Point d'entrée pour tous les modèles de données.
//   Chaque modèle correspond à une table avec SeaORM.
//
// Liste des modules:
//   - health : Health check API
//   - users : Comptes utilisateurs (signup/login)
//   - planet : Catalogue des planètes
//   - character : Catalogue des personnages ("people")
//   - favorite : Favoris d'un utilisateur (planète OU personnage)
//   - dto : Data Transfer Objects pour les requêtes/réponses API
//
// Points d'attention:
//   - Tous les modèles utilisent SeaORM (pas de SQL brut)
//   - Les FK de favorite sont en ON DELETE CASCADE
//
// ============================================================================

pub mod health;
pub mod users;
pub mod planet;
pub mod character;
pub mod favorite;
pub mod dto;
