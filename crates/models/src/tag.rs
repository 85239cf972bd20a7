use sea_orm::sea_query::OnConflict;
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tags")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
    pub color: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert the tag, or leave the existing row untouched when the name is
/// taken. First writer wins; the caller cannot tell which case happened.
pub async fn add_if_absent(
    db: &DatabaseConnection,
    name: &str,
    color: &str,
) -> Result<(), errors::ModelError> {
    let am = ActiveModel { name: Set(name.to_owned()), color: Set(color.to_owned()) };
    Entity::insert(am)
        .on_conflict(OnConflict::column(Column::Name).do_nothing().to_owned())
        .exec_without_returning(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(())
}

/// Delete by name, idempotent. Notes referencing the tag keep their (now
/// dangling) reference.
pub async fn delete(db: &DatabaseConnection, name: &str) -> Result<(), errors::ModelError> {
    Entity::delete_by_id(name)
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
