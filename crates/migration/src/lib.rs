//! Migrator registering board-store migrations.
//! Tables are independent (soft references only), so order is cosmetic.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_notes;
mod m20240101_000002_create_tags;
mod m20240101_000003_create_players;
mod m20240101_000004_create_kv_store;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_notes::Migration),
            Box::new(m20240101_000002_create_tags::Migration),
            Box::new(m20240101_000003_create_players::Migration),
            Box::new(m20240101_000004_create_kv_store::Migration),
        ]
    }
}
