use std::time::Duration;

use ag_turns::{JsonlTurnStore, TurnStore};

#[tokio::test]
async fn dropped_append_still_advances_ids() {
    let tmp = tempfile::tempdir().unwrap();
    let store = JsonlTurnStore::open(tmp.path()).unwrap();

    // Poll the append once, then drop it (a client disconnecting mid-request).
    tokio::select! {
        biased;
        _ = store.append("cancelled".into()) => {}
        _ = std::future::ready(()) => {}
    }
    tokio::time::sleep(Duration::from_millis(200)).await;

    let next = store.append("next".into()).await.unwrap();
    assert_eq!(next.id, 2);

    let reopened = JsonlTurnStore::open(tmp.path()).unwrap();
    let ids: Vec<u64> = reopened
        .list_ascending()
        .await
        .unwrap()
        .iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(reopened.get(1).await.unwrap().unwrap().text, "cancelled");
    assert_eq!(reopened.get(2).await.unwrap().unwrap().text, "next");
}
