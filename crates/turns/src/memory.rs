//! Volatile turn store for tests and ephemeral runs.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use ag_domain::error::Result;
use ag_domain::trace::TraceEvent;
use ag_domain::turn::Turn;

use crate::store::TurnStore;

#[derive(Default)]
pub struct MemoryTurnStore {
    turns: RwLock<Vec<Turn>>,
}

impl MemoryTurnStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append with an explicit timestamp.
    pub fn append_at(&self, text: impl Into<String>, created_at: DateTime<Utc>) -> Turn {
        let mut turns = self.turns.write();
        let turn = Turn {
            id: turns.last().map_or(1, |t| t.id + 1),
            text: text.into(),
            created_at,
        };
        turns.push(turn.clone());
        turn
    }
}

#[async_trait::async_trait]
impl TurnStore for MemoryTurnStore {
    async fn append(&self, text: String) -> Result<Turn> {
        let turn = self.append_at(text, Utc::now());
        TraceEvent::TurnAppended {
            turn_id: turn.id,
            chars: turn.text.chars().count(),
        }
        .emit();
        Ok(turn)
    }

    async fn list_ascending(&self) -> Result<Vec<Turn>> {
        Ok(self.turns.read().clone())
    }

    async fn get(&self, id: u64) -> Result<Option<Turn>> {
        Ok(self.turns.read().iter().find(|t| t.id == id).cloned())
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.turns.read().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ids_start_at_one_and_increase() {
        let store = MemoryTurnStore::new();
        let a = store.append("first".into()).await.unwrap();
        let b = store.append("second".into()).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(store.len().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn descending_is_exact_reverse() {
        let store = MemoryTurnStore::new();
        for text in ["a", "b", "c", "d"] {
            store.append(text.into()).await.unwrap();
        }
        let asc: Vec<String> = store
            .list_ascending()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.text)
            .collect();
        let mut desc: Vec<String> = store
            .list_descending()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.text)
            .collect();
        assert_eq!(asc, vec!["a", "b", "c", "d"]);
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[tokio::test]
    async fn get_unknown_id_is_none() {
        let store = MemoryTurnStore::new();
        store.append("only".into()).await.unwrap();
        assert!(store.get(1).await.unwrap().is_some());
        assert!(store.get(42).await.unwrap().is_none());
    }
}
