use std::collections::BTreeMap;

use tokio::sync::Mutex;

use crate::{BoxFuture, CreateFoodPayload, FoodStore, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFood {
    pub id: u64,
    pub name: String,
    pub unit: String,
    pub company_id: String,
}

#[derive(Debug, Default)]
struct Table {
    next_id: u64,
    rows: BTreeMap<u64, StoredFood>,
}

/// A [`FoodStore`] that keeps rows in process memory, with auto-increment identifiers starting
/// at 1. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryFoodStore {
    table: Mutex<Table>,
}

impl InMemoryFoodStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, id: u64) -> Option<StoredFood> {
        self.table.lock().await.rows.get(&id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.table.lock().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

// Identifiers arrive as path text; anything that is not a stored key matches no row.
fn parse_id(id: &str) -> Option<u64> {
    id.parse().ok()
}

impl FoodStore for InMemoryFoodStore {
    fn create<'a>(&'a self, payload: CreateFoodPayload<'a>) -> BoxFuture<'a, Result<u64>> {
        Box::pin(async move {
            let mut table = self.table.lock().await;
            table.next_id += 1;
            let id = table.next_id;

            table.rows.insert(
                id,
                StoredFood {
                    id,
                    name: payload.name.to_owned(),
                    unit: payload.unit.to_owned(),
                    company_id: payload.company_id.to_owned(),
                },
            );

            Ok(id)
        })
    }

    fn update<'a>(
        &'a self,
        id: &'a str,
        payload: CreateFoodPayload<'a>,
    ) -> BoxFuture<'a, Result<u64>> {
        Box::pin(async move {
            let mut table = self.table.lock().await;
            let Some(id) = parse_id(id) else {
                return Ok(0);
            };
            let Some(row) = table.rows.get_mut(&id) else {
                return Ok(0);
            };

            row.name = payload.name.to_owned();
            row.unit = payload.unit.to_owned();
            row.company_id = payload.company_id.to_owned();

            Ok(1)
        })
    }

    fn delete<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<u64>> {
        Box::pin(async move {
            let mut table = self.table.lock().await;
            let removed = match parse_id(id) {
                Some(id) => table.rows.remove(&id),
                None => None,
            };

            Ok(removed.map_or(0, |_| 1))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let store = InMemoryFoodStore::new();

        let first = store
            .create(CreateFoodPayload::new("Rice", "kg", "C1"))
            .await
            .unwrap();
        let second = store
            .create(CreateFoodPayload::new("Beans", "kg", "C1"))
            .await
            .unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(store.len().await, 2);
        assert_eq!(store.get(2).await.unwrap().name, "Beans");
    }

    #[tokio::test]
    async fn update_overwrites_every_field() {
        let store = InMemoryFoodStore::new();
        let id = store
            .create(CreateFoodPayload::new("Rice", "kg", "C1"))
            .await
            .unwrap();

        let affected = store
            .update(&id.to_string(), CreateFoodPayload::new("Milk", "l", "C2"))
            .await
            .unwrap();

        assert_eq!(affected, 1);
        assert_eq!(
            store.get(id).await.unwrap(),
            StoredFood {
                id,
                name: "Milk".into(),
                unit: "l".into(),
                company_id: "C2".into(),
            }
        );
    }

    #[tokio::test]
    async fn unknown_or_malformed_ids_affect_nothing() {
        let store = InMemoryFoodStore::new();
        store
            .create(CreateFoodPayload::new("Rice", "kg", "C1"))
            .await
            .unwrap();

        let payload = CreateFoodPayload::new("Milk", "l", "C2");
        assert_eq!(store.update("999", payload).await.unwrap(), 0);
        assert_eq!(store.update("abc", payload).await.unwrap(), 0);
        assert_eq!(store.delete("-1").await.unwrap(), 0);
        assert_eq!(store.get(1).await.unwrap().name, "Rice");
    }

    #[tokio::test]
    async fn delete_removes_the_row_once() {
        let store = InMemoryFoodStore::new();
        let id = store
            .create(CreateFoodPayload::new("Rice", "kg", "C1"))
            .await
            .unwrap()
            .to_string();

        assert_eq!(store.delete(&id).await.unwrap(), 1);
        assert_eq!(store.delete(&id).await.unwrap(), 0);
        assert!(store.is_empty().await);
    }
}
