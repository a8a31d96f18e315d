// connexion BD + création du schéma

use sea_orm::sea_query::{Index, IndexCreateStatement};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};

use crate::models::{character, favorite, planet, users};

pub async fn establish_connection(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}

/// Crée les 4 tables à partir des entités si elles n'existent pas encore.
/// favorite en dernier: ses FK référencent les trois autres tables.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let statements = vec![
        schema.create_table_from_entity(users::Entity),
        schema.create_table_from_entity(planet::Entity),
        schema.create_table_from_entity(character::Entity),
        schema.create_table_from_entity(favorite::Entity),
    ];

    for mut statement in statements {
        statement.if_not_exists();
        db.execute(backend.build(&statement)).await?;
    }

    for index in favorite_unique_indexes() {
        db.execute(backend.build(&index)).await?;
    }

    Ok(())
}

// Un favori par (user, cible). NULL != NULL en SQL: chaque index ne
// s'applique qu'aux lignes de son type de cible.
fn favorite_unique_indexes() -> Vec<IndexCreateStatement> {
    vec![
        Index::create()
            .name("idx_favorite_user_planet")
            .table(favorite::Entity)
            .col(favorite::Column::UserId)
            .col(favorite::Column::PlanetId)
            .unique()
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name("idx_favorite_user_character")
            .table(favorite::Entity)
            .col(favorite::Column::UserId)
            .col(favorite::Column::CharacterId)
            .unique()
            .if_not_exists()
            .to_owned(),
    ]
}

#[cfg(test)]
mod tests {
    use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, SqlErr};

    use crate::models::favorite::{self, FavoriteTarget};
    use crate::utils::test::TestApp;

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let app = TestApp::new().await;
        super::ensure_schema(&app.db).await.unwrap();
    }

    #[tokio::test]
    async fn test_duplicate_favorite_rejected_by_index() {
        let app = TestApp::new().await;
        app.seed_user(5, "luke@rebels.org", "tatooine").await;
        app.seed_planet(1, "Tatooine").await;
        app.seed_character(1, "Luke Skywalker").await;

        favorite::ActiveModel::for_target(5, FavoriteTarget::Planet(1))
            .insert(&app.db)
            .await
            .unwrap();

        // Même id mais autre type de cible: autorisé
        favorite::ActiveModel::for_target(5, FavoriteTarget::Character(1))
            .insert(&app.db)
            .await
            .unwrap();

        let err = favorite::ActiveModel::for_target(5, FavoriteTarget::Planet(1))
            .insert(&app.db)
            .await
            .unwrap_err();
        assert!(matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))));

        assert_eq!(favorite::Entity::find().count(&app.db).await.unwrap(), 2);
    }
}
