use anyhow::Result;

use super::{sample_note, setup_test_db};
use crate::note;

/// Concurrent upserts with distinct ids must all land; SQLite serializes
/// the writers, the service adds no locking of its own.
#[tokio::test]
async fn concurrent_distinct_upserts_lose_nothing() -> Result<()> {
    let db = setup_test_db().await?;

    let mut handles = Vec::new();
    for i in 0..16 {
        let db = db.clone();
        handles.push(tokio::spawn(async move {
            let mut n = sample_note(&format!("note-{i}"));
            n.x = i as f64;
            note::upsert(&db, n).await
        }));
    }
    for h in handles {
        h.await??;
    }

    let all = note::list(&db).await?;
    assert_eq!(all.len(), 16);
    Ok(())
}

/// Same-id races are last-write-wins with exactly one surviving row.
#[tokio::test]
async fn concurrent_same_id_upserts_leave_one_row() -> Result<()> {
    let db = setup_test_db().await?;

    let mut handles = Vec::new();
    for i in 0..8 {
        let db = db.clone();
        handles.push(tokio::spawn(async move {
            let mut n = sample_note("contested");
            n.rotation = i as f64;
            note::upsert(&db, n).await
        }));
    }
    for h in handles {
        h.await??;
    }

    let all = note::list(&db).await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, "contested");
    Ok(())
}
