#[cfg(any(test, feature = "test-util"))]
pub mod memory;
pub mod models;
pub mod mysql;

use std::pin::Pin;

use derive_more::{Display, Error, From};

#[cfg(any(test, feature = "test-util"))]
pub use memory::InMemoryFoodStore;
pub use models::foods::CreateFoodPayload;
pub use mysql::{MySqlFoodStore, connect, execute};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub type Result<T, E = StoreError> = std::result::Result<T, E>;

/// Failures surfaced by a [`FoodStore`].
///
/// The display text is the driver message untouched, callers are free to hand it back to clients.
#[derive(Debug, Display, From, Error)]
pub enum StoreError {
    #[from]
    Database(sqlx::Error),
}

/// Storage for food items, keyed by the identifier assigned on insert.
///
/// Mutations report how many rows they touched; zero means the identifier does not exist.
pub trait FoodStore: Send + Sync {
    /// Inserts a new row and returns the identifier the storage assigned to it.
    fn create<'a>(&'a self, payload: CreateFoodPayload<'a>) -> BoxFuture<'a, Result<u64>>;

    /// Overwrites name, unit and company of the row matching `id`.
    fn update<'a>(&'a self, id: &'a str, payload: CreateFoodPayload<'a>)
    -> BoxFuture<'a, Result<u64>>;

    fn delete<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<u64>>;
}
