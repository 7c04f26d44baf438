use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::common::{TodoItem, TodoUpdate};
use crate::store::{ItemStore, StoreError};

/// In-process table with the same semantics as the DynamoDB adapter.
#[derive(Debug, Default)]
pub struct MemoryItemStore {
    items: RwLock<HashMap<String, TodoItem>>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn put(&self, item: &TodoItem) -> Result<(), StoreError> {
        self.items
            .write()
            .await
            .insert(item.id.clone(), item.clone());
        Ok(())
    }

    async fn get_by_key(&self, id: &str) -> Result<Option<TodoItem>, StoreError> {
        Ok(self.items.read().await.get(id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<TodoItem>, StoreError> {
        Ok(self.items.read().await.values().cloned().collect())
    }

    async fn update_fields(&self, id: &str, update: TodoUpdate) -> Result<TodoItem, StoreError> {
        let mut items = self.items.write().await;
        let item = items
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        item.text = update.text;
        item.checked = update.checked;
        item.updated_at = update.updated_at;
        Ok(item.clone())
    }

    async fn delete_by_key(&self, id: &str) -> Result<(), StoreError> {
        self.items.write().await.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Timestamp;

    fn item(id: &str) -> TodoItem {
        TodoItem {
            id: id.into(),
            text: "buy milk".into(),
            checked: false,
            created_at: Timestamp::Seconds("1700000000.5".into()),
            updated_at: Timestamp::Seconds("1700000000.5".into()),
        }
    }

    #[tokio::test]
    async fn update_of_missing_key_is_not_found() {
        let store = MemoryItemStore::new();
        let update = TodoUpdate {
            text: "x".into(),
            checked: true,
            updated_at: Timestamp::Millis(1),
        };

        let err = store.update_fields("missing", update).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(id) if id == "missing"));
    }

    #[tokio::test]
    async fn update_keeps_id_and_created_at() {
        let store = MemoryItemStore::new();
        store.put(&item("a")).await.unwrap();

        let updated = store
            .update_fields(
                "a",
                TodoUpdate {
                    text: "buy eggs".into(),
                    checked: true,
                    updated_at: Timestamp::Millis(1_700_000_001_000),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, "a");
        assert_eq!(updated.created_at, item("a").created_at);
        assert_eq!(updated.text, "buy eggs");
        assert_eq!(store.get_by_key("a").await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = MemoryItemStore::new();
        store.put(&item("a")).await.unwrap();

        store.delete_by_key("a").await.unwrap();
        store.delete_by_key("a").await.unwrap();
        assert!(store.is_empty().await);
    }
}
