use sea_orm::sea_query::OnConflict;
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

/// A sticky note. `tag` and `assignee` are soft references by name: they
/// should match a tag/player row but nothing enforces it, and deleting the
/// referenced row leaves the note dangling on purpose.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "notes")]
pub struct Model {
    /// Caller-generated id; the client owns id allocation.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub text: String,
    pub tag: String,
    pub assignee: String,
    pub date: String,
    /// Optional data URI or URL.
    pub image: Option<String>,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert the note, or replace it wholesale when the id already exists.
/// Every column is overwritten; there are no partial updates.
pub async fn upsert(db: &DatabaseConnection, note: Model) -> Result<(), errors::ModelError> {
    let am = ActiveModel {
        id: Set(note.id),
        text: Set(note.text),
        tag: Set(note.tag),
        assignee: Set(note.assignee),
        date: Set(note.date),
        image: Set(note.image),
        x: Set(note.x),
        y: Set(note.y),
        rotation: Set(note.rotation),
    };
    Entity::insert(am)
        .on_conflict(
            OnConflict::column(Column::Id)
                .update_columns([
                    Column::Text,
                    Column::Tag,
                    Column::Assignee,
                    Column::Date,
                    Column::Image,
                    Column::X,
                    Column::Y,
                    Column::Rotation,
                ])
                .to_owned(),
        )
        .exec_without_returning(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(())
}

/// Delete by id. A missing id is a no-op, reported as success.
pub async fn delete(db: &DatabaseConnection, id: &str) -> Result<(), errors::ModelError> {
    Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(())
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}
