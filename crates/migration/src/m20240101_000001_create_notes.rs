//! Create `notes` table.
//!
//! `tag` and `assignee` are soft references by name; deliberately no foreign
//! keys, so deleting a tag or player leaves existing notes untouched.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Notes::Table)
                    .if_not_exists()
                    .col(string(Notes::Id).primary_key())
                    .col(text(Notes::Text).not_null())
                    .col(string(Notes::Tag).not_null())
                    .col(string(Notes::Assignee).not_null())
                    .col(string(Notes::Date).not_null())
                    .col(ColumnDef::new(Notes::Image).text().null())
                    .col(double(Notes::X).not_null())
                    .col(double(Notes::Y).not_null())
                    .col(double(Notes::Rotation).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Notes::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Notes { Table, Id, Text, Tag, Assignee, Date, Image, X, Y, Rotation }
