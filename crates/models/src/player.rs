use sea_orm::sea_query::OnConflict;
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "players")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

/// Same silent-ignore-on-duplicate semantics as tags. There is no delete
/// operation for players.
pub async fn add_if_absent(db: &DatabaseConnection, name: &str) -> Result<(), errors::ModelError> {
    let am = ActiveModel { name: Set(name.to_owned()) };
    Entity::insert(am)
        .on_conflict(OnConflict::column(Column::Name).do_nothing().to_owned())
        .exec_without_returning(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(())
}

pub async fn list_names(db: &DatabaseConnection) -> Result<Vec<String>, errors::ModelError> {
    let rows = Entity::find()
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(rows.into_iter().map(|p| p.name).collect())
}
