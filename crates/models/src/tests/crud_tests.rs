use anyhow::Result;
use sea_orm::EntityTrait;

use super::{sample_note, setup_seeded_db, setup_test_db};
use crate::{note, player, tag};

#[tokio::test]
async fn note_upsert_round_trips() -> Result<()> {
    let db = setup_test_db().await?;

    let n = sample_note("note-1");
    note::upsert(&db, n.clone()).await?;

    let all = note::list(&db).await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], n);
    Ok(())
}

#[tokio::test]
async fn note_upsert_replaces_wholesale() -> Result<()> {
    let db = setup_test_db().await?;

    note::upsert(&db, sample_note("note-1")).await?;

    let mut replacement = sample_note("note-1");
    replacement.text = "Forge a new sword".to_owned();
    replacement.tag = "Smithing".to_owned();
    replacement.image = Some("data:image/png;base64,AAAA".to_owned());
    replacement.x = -10.0;
    replacement.rotation = 12.75;
    note::upsert(&db, replacement.clone()).await?;

    let all = note::list(&db).await?;
    assert_eq!(all.len(), 1, "same id must never yield two rows");
    assert_eq!(all[0], replacement);
    Ok(())
}

#[tokio::test]
async fn note_delete_is_idempotent() -> Result<()> {
    let db = setup_test_db().await?;

    note::upsert(&db, sample_note("note-1")).await?;
    note::delete(&db, "note-1").await?;
    assert!(note::list(&db).await?.is_empty());

    // Second delete of the same id, and a delete of an id that never
    // existed, both succeed.
    note::delete(&db, "note-1").await?;
    note::delete(&db, "never-existed").await?;
    Ok(())
}

#[tokio::test]
async fn duplicate_tag_keeps_original_color() -> Result<()> {
    let db = setup_seeded_db().await?;

    tag::add_if_absent(&db, "Quest", "#ffffff").await?;

    let quests: Vec<_> = tag::list(&db)
        .await?
        .into_iter()
        .filter(|t| t.name == "Quest")
        .collect();
    assert_eq!(quests.len(), 1);
    assert_eq!(quests[0].color, "#800000", "first writer wins");
    Ok(())
}

#[tokio::test]
async fn tag_delete_leaves_referencing_notes() -> Result<()> {
    let db = setup_seeded_db().await?;

    let n = sample_note("note-1"); // tagged Quest
    note::upsert(&db, n.clone()).await?;
    tag::delete(&db, "Quest").await?;

    assert!(tag::list(&db).await?.iter().all(|t| t.name != "Quest"));
    // The note still exists with its dangling tag reference.
    let all = note::list(&db).await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].tag, "Quest");

    // And the delete is idempotent.
    tag::delete(&db, "Quest").await?;
    Ok(())
}

#[tokio::test]
async fn duplicate_player_is_silently_ignored() -> Result<()> {
    let db = setup_seeded_db().await?;

    player::add_if_absent(&db, "Anonymous").await?;
    player::add_if_absent(&db, "Lydia").await?;

    let mut names = player::list_names(&db).await?;
    names.sort();
    assert_eq!(names, vec!["Anonymous", "Dragonborn", "Lydia"]);
    Ok(())
}

#[tokio::test]
async fn note_image_column_is_nullable() -> Result<()> {
    let db = setup_test_db().await?;

    let mut with_image = sample_note("note-img");
    with_image.image = Some("https://example.com/map.png".to_owned());
    note::upsert(&db, with_image.clone()).await?;
    note::upsert(&db, sample_note("note-plain")).await?;

    let by_id = note::Entity::find_by_id("note-img").one(&db).await?;
    assert_eq!(by_id.unwrap().image, with_image.image);
    let by_id = note::Entity::find_by_id("note-plain").one(&db).await?;
    assert_eq!(by_id.unwrap().image, None);
    Ok(())
}
