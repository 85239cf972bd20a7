//! Generic settings store: string keys mapped to JSON-encoded values.
//!
//! The global `locked` flag lives under [`LOCKED_KEY`]; any future
//! board-wide setting goes through the same get/set pair.

use sea_orm::sea_query::OnConflict;
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::errors;

pub const LOCKED_KEY: &str = "locked";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "kv_store")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub key: String,
    pub value: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

/// Read and decode a value; `None` when the key was never set.
pub async fn get<T: DeserializeOwned>(
    db: &DatabaseConnection,
    key: &str,
) -> Result<Option<T>, errors::ModelError> {
    let row = Entity::find_by_id(key)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    match row {
        Some(row) => serde_json::from_str(&row.value)
            .map(Some)
            .map_err(|e| errors::ModelError::Decode(e.to_string())),
        None => Ok(None),
    }
}

/// Encode and unconditionally overwrite the value under `key`.
pub async fn set<T: Serialize>(
    db: &DatabaseConnection,
    key: &str,
    value: &T,
) -> Result<(), errors::ModelError> {
    let encoded = serde_json::to_string(value).map_err(|e| errors::ModelError::Encode(e.to_string()))?;
    let am = ActiveModel { key: Set(key.to_owned()), value: Set(encoded) };
    Entity::insert(am)
        .on_conflict(OnConflict::column(Column::Key).update_column(Column::Value).to_owned())
        .exec_without_returning(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(())
}

/// The board lock flag; `false` when never set.
pub async fn get_locked(db: &DatabaseConnection) -> Result<bool, errors::ModelError> {
    Ok(get::<bool>(db, LOCKED_KEY).await?.unwrap_or(false))
}

pub async fn set_locked(db: &DatabaseConnection, locked: bool) -> Result<(), errors::ModelError> {
    set(db, LOCKED_KEY, &locked).await
}
