// ============================================================================
// MODÈLE : FAVORITE
// ============================================================================
//
// Description:
//   Table de jointure entre un utilisateur et UNE ligne du catalogue
//   (une planète OU un personnage).
//
// Colonnes de la table favorite:
//   - id (INTEGER, PRIMARY KEY)
//   - user_id (INTEGER, NOT NULL, FK vers user, ON DELETE CASCADE)
//   - planet_id (INTEGER, NULL, FK vers planet, ON DELETE CASCADE)
//   - character_id (INTEGER, NULL, FK vers character, ON DELETE CASCADE)
//
// Points d'attention:
//   - Exactement une des deux colonnes planet_id / character_id est remplie.
//     Le schéma SQL ne l'impose pas: le service n'écrit une ligne que via
//     FavoriteTarget, et une ligne invalide est ignorée à la lecture.
//
// ============================================================================

use sea_orm::entity::prelude::*;
use sea_orm::{Condition, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "favorite")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub user_id: i32,

    pub planet_id: Option<i32>,

    pub character_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_delete = "Cascade"
    )]
    User,

    #[sea_orm(
        belongs_to = "super::planet::Entity",
        from = "Column::PlanetId",
        to = "super::planet::Column::Id",
        on_delete = "Cascade"
    )]
    Planet,

    #[sea_orm(
        belongs_to = "super::character::Entity",
        from = "Column::CharacterId",
        to = "super::character::Column::Id",
        on_delete = "Cascade"
    )]
    Character,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planet.def()
    }
}

impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Character.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Cible d'un favori: un personnage ou une planète, jamais les deux
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FavoriteTarget {
    Character(i32),
    Planet(i32),
}

impl FavoriteTarget {
    /// Valeur du champ "type" dans les réponses JSON
    pub fn kind(&self) -> &'static str {
        match self {
            FavoriteTarget::Character(_) => "character",
            FavoriteTarget::Planet(_) => "planet",
        }
    }

    pub fn id(&self) -> i32 {
        match self {
            FavoriteTarget::Character(id) | FavoriteTarget::Planet(id) => *id,
        }
    }

    /// Filtre SQL sur la paire (user, cible) exacte
    pub fn condition(&self, user_id: i32) -> Condition {
        let by_user = Condition::all().add(Column::UserId.eq(user_id));

        match self {
            FavoriteTarget::Character(id) => by_user
                .add(Column::CharacterId.eq(*id))
                .add(Column::PlanetId.is_null()),
            FavoriteTarget::Planet(id) => by_user
                .add(Column::PlanetId.eq(*id))
                .add(Column::CharacterId.is_null()),
        }
    }
}

impl Model {
    /// None si la ligne a les deux colonnes remplies, ou aucune
    pub fn target(&self) -> Option<FavoriteTarget> {
        match (self.character_id, self.planet_id) {
            (Some(id), None) => Some(FavoriteTarget::Character(id)),
            (None, Some(id)) => Some(FavoriteTarget::Planet(id)),
            _ => None,
        }
    }
}

impl ActiveModel {
    pub fn for_target(user_id: i32, target: FavoriteTarget) -> Self {
        let (planet_id, character_id) = match target {
            FavoriteTarget::Planet(id) => (Some(id), None),
            FavoriteTarget::Character(id) => (None, Some(id)),
        };

        ActiveModel {
            user_id: Set(user_id),
            planet_id: Set(planet_id),
            character_id: Set(character_id),
            ..Default::default()
        }
    }
}
