use ag_domain::error::Result;
use ag_domain::turn::Turn;

/// Append-only turn log.
///
/// Turns are never updated or deleted. Ids are assigned by the store, start
/// at 1 and increase with every append.
#[async_trait::async_trait]
pub trait TurnStore: Send + Sync {
    /// Persist `text` as a new turn stamped with the current time.
    async fn append(&self, text: String) -> Result<Turn>;

    /// Every turn in insertion order.
    async fn list_ascending(&self) -> Result<Vec<Turn>>;

    /// Every turn, newest first.
    async fn list_descending(&self) -> Result<Vec<Turn>> {
        let mut turns = self.list_ascending().await?;
        turns.reverse();
        Ok(turns)
    }

    /// Look up a single turn. `None` means no turn has this id.
    async fn get(&self, id: u64) -> Result<Option<Turn>>;

    /// Number of stored turns.
    async fn len(&self) -> Result<usize> {
        Ok(self.list_ascending().await?.len())
    }
}
