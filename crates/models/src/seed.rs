//! Default rows for a fresh board.
//!
//! Seeding is guarded by a row count, so it runs at most once per table:
//! a store that already has tags or players (even customized ones) is left
//! exactly as found across restarts.

use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, Set};
use tracing::info;

use crate::errors::ModelError;
use crate::{player, tag};

pub const DEFAULT_TAGS: [(&str, &str); 4] = [
    ("Quest", "#800000"),
    ("Lore", "#006400"),
    ("Magic", "#00008B"),
    ("Smithing", "#8B4513"),
];

pub const DEFAULT_PLAYERS: [&str; 2] = ["Anonymous", "Dragonborn"];

pub async fn seed_defaults(db: &DatabaseConnection) -> Result<(), ModelError> {
    let tag_count = tag::Entity::find()
        .count(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    if tag_count == 0 {
        let rows = DEFAULT_TAGS.iter().map(|(name, color)| tag::ActiveModel {
            name: Set((*name).to_owned()),
            color: Set((*color).to_owned()),
        });
        tag::Entity::insert_many(rows)
            .exec_without_returning(db)
            .await
            .map_err(|e| ModelError::Db(e.to_string()))?;
        info!(count = DEFAULT_TAGS.len(), "seeded default tags");
    }

    let player_count = player::Entity::find()
        .count(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    if player_count == 0 {
        let rows = DEFAULT_PLAYERS.iter().map(|name| player::ActiveModel {
            name: Set((*name).to_owned()),
        });
        player::Entity::insert_many(rows)
            .exec_without_returning(db)
            .await
            .map_err(|e| ModelError::Db(e.to_string()))?;
        info!(count = DEFAULT_PLAYERS.len(), "seeded default players");
    }

    Ok(())
}
