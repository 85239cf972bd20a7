//! Create `kv_store` table.
//!
//! Generic settings store: string keys to JSON-encoded values. The board
//! `locked` flag is the only key in use today; future global flags reuse it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(KvStore::Table)
                    .if_not_exists()
                    .col(string(KvStore::Key).primary_key())
                    .col(text(KvStore::Value).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(KvStore::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum KvStore { Table, Key, Value }
