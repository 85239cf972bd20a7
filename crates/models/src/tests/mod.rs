use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

mod concurrency_tests;
mod crud_tests;

/// Fresh store file per test, migrated but not seeded.
pub(crate) async fn setup_test_db() -> Result<DatabaseConnection> {
    let path = std::env::temp_dir().join(format!("corkboard-test-{}.db", Uuid::new_v4()));
    let url = format!("sqlite://{}?mode=rwc", path.display());
    let db = crate::db::connect_to(&url).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// Fresh store with the default tags and players, as after first startup.
pub(crate) async fn setup_seeded_db() -> Result<DatabaseConnection> {
    let db = setup_test_db().await?;
    crate::seed::seed_defaults(&db).await?;
    Ok(db)
}

pub(crate) fn sample_note(id: &str) -> crate::note::Model {
    crate::note::Model {
        id: id.to_owned(),
        text: "Slay the dragon".to_owned(),
        tag: "Quest".to_owned(),
        assignee: "Dragonborn".to_owned(),
        date: "2024-03-01".to_owned(),
        image: None,
        x: 120.5,
        y: 64.25,
        rotation: -3.5,
    }
}
